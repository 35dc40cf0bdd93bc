use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::RunLogError;
use crate::runs::models::Run;

/// In-memory run log keyed by date
#[derive(Debug, Default, Clone)]
pub struct RunLog {
    runs: BTreeMap<NaiveDate, Run>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a run. Dates are unique, a second run on the same day is refused.
    pub fn insert(&mut self, run: Run) -> Result<(), RunLogError> {
        match self.runs.entry(run.date) {
            Entry::Occupied(_) => Err(RunLogError::DuplicateRun(run.date)),
            Entry::Vacant(slot) => {
                log::debug!("stored run on {}", run.date);
                slot.insert(run);
                Ok(())
            }
        }
    }

    pub fn get(&self, date: NaiveDate) -> Result<&Run, RunLogError> {
        self.runs.get(&date).ok_or(RunLogError::NoRun(date))
    }

    /// Returns whether a run existed on `date`
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.runs.remove(&date).is_some()
    }

    /// Runs between two inclusive bounds, oldest first
    pub fn range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> impl Iterator<Item = &Run> {
        self.runs
            .iter()
            .filter(move |(date, _)| start.is_none_or(|s| **date >= s))
            .filter(move |(date, _)| end.is_none_or(|e| **date <= e))
            .map(|(_, run)| run)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Run> {
        self.runs.values()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
