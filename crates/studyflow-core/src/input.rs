//! Free-form configuration input parsing.
//!
//! The presentation layer hands durations over as text, either `"M:S"` or
//! a bare number of minutes (`"25"`, `"2.5"`). Anything that does not
//! parse is rejected; nothing silently falls back to a default.

use crate::error::{CoreError, Result};

/// Parse a duration into seconds. Accepts `"M:S"` with integer minutes
/// and integer seconds below 60, or a bare (possibly decimal) number of
/// minutes. `field` names the offending input in the error.
pub fn parse_duration_secs(field: &str, text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::invalid_configuration(field, "must not be empty"));
    }
    if let Some((minutes, seconds)) = text.split_once(':') {
        let minutes: u64 = minutes.trim().parse().map_err(|_| {
            CoreError::invalid_configuration(field, format!("invalid minutes in '{text}'"))
        })?;
        let seconds: u64 = seconds.trim().parse().map_err(|_| {
            CoreError::invalid_configuration(field, format!("invalid seconds in '{text}'"))
        })?;
        if seconds >= 60 {
            return Err(CoreError::invalid_configuration(
                field,
                format!("seconds must be below 60 in '{text}'"),
            ));
        }
        Ok((minutes * 60 + seconds) as f64)
    } else {
        let minutes: f64 = text.parse().map_err(|_| {
            CoreError::invalid_configuration(field, format!("'{text}' is not a number of minutes"))
        })?;
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(CoreError::invalid_configuration(
                field,
                format!("'{text}' is not a non-negative number of minutes"),
            ));
        }
        Ok(minutes * 60.0)
    }
}

/// Parse a repeat count. Must be a non-negative integer; whether zero is
/// acceptable is decided by [`crate::session::SessionConfig::validate`].
pub fn parse_session_count(field: &str, text: &str) -> Result<u32> {
    text.trim().parse().map_err(|_| {
        CoreError::invalid_configuration(field, format!("'{}' is not a whole number", text.trim()))
    })
}
