//! Error types for the tracker.
//!
//! Only the minutes field can receive invalid input. The timer never surfaces
//! these errors to the user; it maps them onto the allowed range instead. They
//! exist so callers that want strict validation (for example a config loader)
//! can use [`crate::timer::parse_minutes`] directly.

use thiserror::Error;

/// Reasons a custom duration string was rejected.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::error::DurationError;
/// use pomodoro_tracker::timer::parse_minutes;
///
/// assert_eq!(parse_minutes("abc"), Err(DurationError::NotANumber("abc".to_string())));
/// assert_eq!(parse_minutes("0"), Err(DurationError::BelowMinimum(0)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The field was empty or only whitespace.
    #[error("duration is empty")]
    Empty,

    /// The text was not an integer.
    #[error("duration is not a number: {0:?}")]
    NotANumber(String),

    /// The value was below the one minute floor.
    #[error("duration must be at least {min} minute, got {0}", min = crate::timer::MIN_MINUTES)]
    BelowMinimum(i64),

    /// The value was above the field's declared maximum.
    #[error("duration must be at most {max} minutes, got {0}", max = crate::timer::MAX_MINUTES)]
    AboveMaximum(i64),
}

impl DurationError {
    /// The value the timer falls back to when it receives this error.
    ///
    /// Everything clamps to the minimum except values that were too large,
    /// which clamp to the maximum.
    pub fn clamped(&self) -> u32 {
        match self {
            DurationError::AboveMaximum(_) => crate::timer::MAX_MINUTES,
            _ => crate::timer::MIN_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_values() {
        assert_eq!(DurationError::Empty.clamped(), 1);
        assert_eq!(DurationError::NotANumber("x".into()).clamped(), 1);
        assert_eq!(DurationError::BelowMinimum(-5).clamped(), 1);
        assert_eq!(DurationError::AboveMaximum(500).clamped(), 120);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DurationError::BelowMinimum(0).to_string(),
            "duration must be at least 1 minute, got 0"
        );
        assert_eq!(
            DurationError::AboveMaximum(121).to_string(),
            "duration must be at most 120 minutes, got 121"
        );
        assert_eq!(
            DurationError::NotANumber("ab".into()).to_string(),
            "duration is not a number: \"ab\""
        );
    }
}
