//! Session chain configuration.
//!
//! Durations are non-negative floating-point seconds; the repeat count is
//! the number of study/break pairs. Free-form text input (`"M:S"` or bare
//! minutes) is parsed at the boundary by [`crate::input`] before it ever
//! reaches a sequencer.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::input;

/// Configuration for one chain of alternating study/break sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Study interval duration in seconds.
    #[serde(default = "default_study_secs")]
    pub study_secs: f64,
    /// Break interval duration in seconds.
    #[serde(default = "default_break_secs")]
    pub break_secs: f64,
    /// Number of study/break pairs to run.
    #[serde(default = "default_total_sessions")]
    pub total_sessions: u32,
}

fn default_study_secs() -> f64 {
    25.0 * 60.0
}
fn default_break_secs() -> f64 {
    5.0 * 60.0
}
fn default_total_sessions() -> u32 {
    4
}

impl SessionConfig {
    /// Build a configuration from free-form text fields, rejecting any
    /// input that does not parse or validate.
    pub fn from_text(study: &str, brk: &str, sessions: &str) -> Result<Self> {
        let config = Self {
            study_secs: input::parse_duration_secs("study", study)?,
            break_secs: input::parse_duration_secs("break", brk)?,
            total_sessions: input::parse_session_count("sessions", sessions)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants `begin` requires: finite non-negative
    /// durations and at least one session.
    pub fn validate(&self) -> Result<()> {
        validate_duration("study", self.study_secs)?;
        validate_duration("break", self.break_secs)?;
        if self.total_sessions < 1 {
            return Err(CoreError::invalid_configuration(
                "sessions",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn validate_duration(field: &str, secs: f64) -> Result<()> {
    if !secs.is_finite() {
        return Err(CoreError::invalid_configuration(field, "must be finite"));
    }
    if secs < 0.0 {
        return Err(CoreError::invalid_configuration(
            field,
            "must not be negative",
        ));
    }
    Ok(())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            study_secs: default_study_secs(),
            break_secs: default_break_secs(),
            total_sessions: default_total_sessions(),
        }
    }
}
