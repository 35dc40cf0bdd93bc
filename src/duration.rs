use std::fmt::{Display, Formatter};

use crate::error::DurationError;

/// Whole hours, minutes and seconds derived from a duration in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Split fractional minutes into whole fields, flooring at every step.
    ///
    /// Negative and NaN input clamp to zero, +inf saturates.
    pub fn from_minutes(duration_mins: f64) -> Self {
        let duration_mins = if duration_mins.is_nan() {
            0.0
        } else {
            duration_mins.max(0.0)
        };

        let hours = (duration_mins / 60.0).floor();
        let without_hours = duration_mins - hours * 60.0;
        let minutes = without_hours.floor();
        let without_minutes = without_hours - minutes;
        let seconds = (60.0 * without_minutes).floor();

        // Float casts saturate, so +inf lands on u64::MAX hours.
        Self {
            hours: hours as u64,
            minutes: minutes as u64,
            seconds: seconds as u64,
        }
    }
}

impl Display for DurationParts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.hours > 0 {
            write!(f, "{} hours, {} mins", self.hours, self.minutes)
        } else {
            write!(f, "{} mins, {} secs", self.minutes, self.seconds)
        }
    }
}

/// Render a run duration, e.g. `45.5` -> `"45 mins, 30 secs"`.
///
/// Once the duration reaches an hour the seconds are dropped:
/// `125.25` -> `"2 hours, 5 mins"`.
pub fn format_duration(duration_mins: f64) -> String {
    DurationParts::from_minutes(duration_mins).to_string()
}

/// Like [`format_duration`] but rejects negative and non-finite input.
pub fn try_format_duration(duration_mins: f64) -> Result<String, DurationError> {
    if !duration_mins.is_finite() {
        return Err(DurationError::NonFinite(duration_mins));
    }
    if duration_mins < 0.0 {
        return Err(DurationError::Negative(duration_mins));
    }
    Ok(format_duration(duration_mins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0.0), "0 mins, 0 secs");
    }

    #[test]
    fn test_format_duration_only_mins() {
        assert_eq!(format_duration(45.0), "45 mins, 0 secs");
        assert_eq!(format_duration(45.5), "45 mins, 30 secs");
    }

    #[test]
    fn test_format_duration_hours_and_mins() {
        assert_eq!(format_duration(60.0), "1 hours, 0 mins");
        assert_eq!(format_duration(125.25), "2 hours, 5 mins");
    }

    #[test]
    fn test_format_duration_just_under_an_hour() {
        assert_eq!(format_duration(59.999), "59 mins, 59 secs");
    }

    #[test]
    fn test_format_duration_one_comma() {
        for mins in [0.0, 0.5, 1.0, 12.34, 59.99, 60.0, 61.5, 600.0, 1439.9] {
            let out = format_duration(mins);
            assert!(!out.is_empty());
            assert_eq!(out.matches(',').count(), 1, "{out}");
        }
    }

    #[test]
    fn test_parts_keep_seconds_past_an_hour() {
        let parts = DurationParts::from_minutes(125.25);
        assert_eq!(
            parts,
            DurationParts {
                hours: 2,
                minutes: 5,
                seconds: 15
            }
        );
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        assert_eq!(format_duration(-5.0), "0 mins, 0 secs");
        assert_eq!(format_duration(f64::NAN), "0 mins, 0 secs");
    }

    #[test]
    fn test_try_format_rejects_out_of_domain() {
        assert!(matches!(
            try_format_duration(-1.0),
            Err(DurationError::Negative(_))
        ));
        assert!(matches!(
            try_format_duration(f64::INFINITY),
            Err(DurationError::NonFinite(_))
        ));
        assert_eq!(try_format_duration(45.5).unwrap(), "45 mins, 30 secs");
    }
}
