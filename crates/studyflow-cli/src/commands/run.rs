//! Foreground chain runner.
//!
//! Owns the sequencer on a single-threaded tokio runtime and drives it
//! with a periodic interval, printing each event as a JSON line. Ctrl-C
//! halts the chain; halting cancels the tick source with it.

use std::time::Duration;

use clap::Args;
use notify_rust::Notification;
use studyflow_core::{Event, SessionConfig, SessionSequencer};

#[derive(Args)]
pub struct RunArgs {
    /// Study duration, "M:S" or minutes
    #[arg(long, default_value = "25", value_name = "M:S|MIN")]
    study: String,
    /// Break duration, "M:S" or minutes
    #[arg(long = "break", default_value = "5", value_name = "M:S|MIN")]
    break_spec: String,
    /// Number of study/break pairs
    #[arg(long, default_value = "4", value_name = "N")]
    sessions: String,
    /// Sampling cadence in milliseconds
    #[arg(long, default_value_t = 100, value_name = "MS")]
    tick_ms: u64,
    /// Raise a desktop notification at session boundaries
    #[arg(long)]
    notify: bool,
    /// Also stream elapsed_changed ticks
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::from_text(&args.study, &args.break_spec, &args.sessions)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(drive(config, &args))
}

async fn drive(config: SessionConfig, args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut seq = SessionSequencer::new();
    let started = seq.begin(config)?;
    emit(&started, args)?;

    let mut interval = tokio::time::interval(Duration::from_millis(args.tick_ms.max(1)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                for event in seq.tick() {
                    emit(&event, args)?;
                    if matches!(event, Event::ChainComplete { .. }) {
                        return Ok(());
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::debug!("interrupt received, halting chain");
                let halted = seq.halt_all();
                emit(&halted, args)?;
                return Ok(());
            }
        }
    }
}

fn emit(event: &Event, args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    if matches!(event, Event::ElapsedChanged { .. }) && !args.json {
        return Ok(());
    }
    println!("{}", serde_json::to_string(event)?);
    if args.notify {
        notify(event);
    }
    Ok(())
}

/// The one alerting side effect. Failures are logged, never fatal.
fn notify(event: &Event) {
    let body = match event {
        Event::LimitReached { kind, .. } => format!("{kind} session finished"),
        Event::ChainComplete { .. } => "all sessions complete".to_string(),
        _ => return,
    };
    if let Err(e) = Notification::new().summary("studyflow").body(&body).show() {
        tracing::warn!("notification failed: {e}");
    }
}
