use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("duration cannot be negative: {0} mins")]
    Negative(f64),

    #[error("duration must be a finite number, got {0}")]
    NonFinite(f64),
}

#[derive(thiserror::Error, Debug)]
pub enum RunLogError {
    #[error("a run already exists on {0}")]
    DuplicateRun(NaiveDate),

    #[error("no run found on {0}")]
    NoRun(NaiveDate),

    #[error("invalid run: {reason}")]
    InvalidRun { reason: String },

    #[error("window of {days} days is out of range (1..={max})")]
    WindowOutOfRange { days: u32, max: u32 },

    #[error("invalid line {index}: {reason}")]
    InvalidLine { index: usize, reason: String },

    #[error("underlying IO error")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
