mod config;
mod sequencer;

pub use config::SessionConfig;
pub use sequencer::SessionSequencer;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of interval the sequencer is currently in. `Idle` before the
/// first begin and after the full chain completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Idle,
    Study,
    Break,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionKind::Idle => "idle",
            SessionKind::Study => "study",
            SessionKind::Break => "break",
        };
        f.write_str(s)
    }
}
