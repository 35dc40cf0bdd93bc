use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::duration::format_duration;
use crate::error::RunLogError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single run, at most one per calendar date
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Run {
    pub date: NaiveDate,
    pub distance_miles: f64,
    pub duration_mins: f64,
    #[serde(default)]
    pub comments: String,
}

impl Run {
    pub fn new(
        date: NaiveDate,
        distance_miles: f64,
        duration_mins: f64,
        comments: impl Into<String>,
    ) -> Result<Self, RunLogError> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(RunLogError::InvalidRun {
                reason: format!("distance must be a non-negative number, got {distance_miles}"),
            });
        }
        if !duration_mins.is_finite() || duration_mins < 0.0 {
            return Err(RunLogError::InvalidRun {
                reason: format!("duration must be a non-negative number, got {duration_mins}"),
            });
        }
        Ok(Self {
            date,
            distance_miles,
            duration_mins,
            comments: comments.into(),
        })
    }

    /// Monday of the week the run falls in
    pub fn week_label(&self) -> String {
        let offset = self.date.weekday().num_days_from_monday();
        self.label_before(offset)
    }

    /// Last day of the previous month, shared by every run of the month
    pub fn month_label(&self) -> String {
        self.label_before(self.date.day())
    }

    /// Date `days` before the run, floored at the earliest representable date
    fn label_before(&self, days: u32) -> String {
        self.date
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN)
            .format(DATE_FORMAT)
            .to_string()
    }

    pub fn display_duration(&self) -> String {
        format_duration(self.duration_mins)
    }

    /// Runs-file line, the inverse of `import::parse_line`
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{},{},{}",
            self.date.format(DATE_FORMAT),
            self.distance_miles,
            self.duration_mins
        );
        let comments = self.comments.replace(['\r', '\n'], " ");
        let comments = comments.trim();
        if !comments.is_empty() {
            line.push(',');
            line.push_str(comments);
        }
        line
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}
