use clap::Subcommand;
use studyflow_core::{input, SessionConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Parse the given inputs (defaults where omitted) and print the
    /// effective session configuration as JSON
    Show {
        /// Study duration, "M:S" or minutes
        #[arg(long, value_name = "M:S|MIN")]
        study: Option<String>,
        /// Break duration, "M:S" or minutes
        #[arg(long = "break", value_name = "M:S|MIN")]
        break_spec: Option<String>,
        /// Number of study/break pairs
        #[arg(long, value_name = "N")]
        sessions: Option<String>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show {
            study,
            break_spec,
            sessions,
        } => {
            let mut config = SessionConfig::default();
            if let Some(text) = study {
                config.study_secs = input::parse_duration_secs("study", &text)?;
            }
            if let Some(text) = break_spec {
                config.break_secs = input::parse_duration_secs("break", &text)?;
            }
            if let Some(text) = sessions {
                config.total_sessions = input::parse_session_count("sessions", &text)?;
            }
            config.validate()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
