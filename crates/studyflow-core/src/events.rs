use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionKind;

/// Every state change in the system produces an Event.
/// Events are plain values returned from control calls and ticks; the
/// presentation layer consumes them and maps them to display, styling,
/// and notification on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Fired on every sampling tick while the timer is running.
    ElapsedChanged {
        elapsed_secs: f64,
        /// `None` when counting up without a limit.
        remaining_secs: Option<f64>,
        at: DateTime<Utc>,
    },
    /// The countdown reached its limit. Emitted exactly once per run
    /// segment; the timer is already stopped when this is observed.
    LimitReached {
        kind: SessionKind,
        at: DateTime<Utc>,
    },
    SessionStarted {
        kind: SessionKind,
        limit_secs: f64,
        sessions_remaining: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        kind: SessionKind,
        elapsed_secs: f64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        kind: SessionKind,
        elapsed_secs: f64,
        at: DateTime<Utc>,
    },
    /// The current interval was abandoned and the chain advanced as if
    /// it had completed naturally.
    SessionSkipped {
        kind: SessionKind,
        elapsed_secs: f64,
        at: DateTime<Utc>,
    },
    /// The configured number of study/break pairs has been exhausted.
    /// Terminal for the current run; nothing fires until the next begin.
    ChainComplete {
        at: DateTime<Utc>,
    },
    Halted {
        at: DateTime<Utc>,
    },
    /// Full state read for poll-style consumers.
    StateSnapshot {
        kind: SessionKind,
        running: bool,
        elapsed_secs: f64,
        limit_secs: f64,
        remaining_secs: Option<f64>,
        sessions_remaining: u32,
        at: DateTime<Utc>,
    },
}
