use chrono::{Days, NaiveDate};
use clap::ValueEnum;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::RunLogError;
use crate::runs::models::Run;
use crate::runs::store::RunLog;

/// Longest window `recent_runs` will build, roughly ten years
pub const MAX_RECENT_DAYS: u32 = 3660;

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Weekly,
    Monthly,
}

/// Total distance in one period, shaped as a chart point
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PeriodDistance {
    pub x: String,
    pub y: f64,
}

/// One day of the recent window. Serialises as the run itself, or as
/// `{"date": ...}` on a rest day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub run: Option<Run>,
}

impl Serialize for DaySlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.run {
            Some(run) => run.serialize(serializer),
            None => {
                let mut state = serializer.serialize_struct("DaySlot", 1)?;
                state.serialize_field("date", &self.date)?;
                state.end()
            }
        }
    }
}

pub fn distance_by_period<'a>(
    runs: impl IntoIterator<Item = &'a Run>,
    unit: TimeUnit,
) -> Vec<PeriodDistance> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for run in runs {
        let label = match unit {
            TimeUnit::Weekly => run.week_label(),
            TimeUnit::Monthly => run.month_label(),
        };
        *totals.entry(label).or_default() += run.distance_miles;
    }
    totals
        .into_iter()
        .map(|(x, y)| PeriodDistance { x, y })
        .collect()
}

/// One slot per day for the last `num_days` days, ending on `today`
pub fn recent_runs(
    log: &RunLog,
    today: NaiveDate,
    num_days: u32,
) -> Result<Vec<DaySlot>, RunLogError> {
    if num_days == 0 {
        return Ok(Vec::new());
    }
    let out_of_range = RunLogError::WindowOutOfRange {
        days: num_days,
        max: MAX_RECENT_DAYS,
    };
    if num_days > MAX_RECENT_DAYS {
        return Err(out_of_range);
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(num_days) - 1))
        .ok_or(out_of_range)?;
    Ok(start
        .iter_days()
        .take(num_days as usize)
        .map(|date| DaySlot {
            date,
            run: log.get(date).ok().cloned(),
        })
        .collect())
}
