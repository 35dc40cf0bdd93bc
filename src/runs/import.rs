use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::RunLogError;
use crate::runs::models::{Run, parse_date};
use crate::runs::store::RunLog;

/// Parse one `date,distance_miles,duration_mins[,comments]` line.
/// Everything after the third comma is kept as the comment.
pub fn parse_line(index: usize, line: &str) -> Result<Run, RunLogError> {
    let invalid = |reason: String| RunLogError::InvalidLine { index, reason };

    let mut parts = line.trim().splitn(4, ',');
    let (Some(date), Some(distance), Some(duration)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid(
            "expected date,distance_miles,duration_mins[,comments]".to_string(),
        ));
    };
    let comments = parts.next().unwrap_or("").trim();

    let date = parse_date(date).map_err(|e| invalid(format!("bad date '{}': {}", date, e)))?;
    let distance: f64 = distance
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad distance '{}': {}", distance, e)))?;
    let duration: f64 = duration
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad duration '{}': {}", duration, e)))?;

    Run::new(date, distance, duration, comments).map_err(|e| invalid(e.to_string()))
}

/// Parse every non-blank line. Line indexes in errors are zero-based.
pub fn parse_runs<R: BufRead>(reader: R) -> Result<Vec<Run>, RunLogError> {
    let mut runs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        runs.push(parse_line(index, &line)?);
    }
    Ok(runs)
}

pub fn load_run_log<P: AsRef<Path>>(path: P) -> Result<RunLog> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open runs file {}", path.display()))?;
    let runs = parse_runs(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse runs file {}", path.display()))?;

    let mut run_log = RunLog::new();
    for run in runs {
        if let Err(err) = run_log.insert(run) {
            log::warn!("skipping run from {}: {}", path.display(), err);
        }
    }
    log::debug!("loaded {} runs from {}", run_log.len(), path.display());
    Ok(run_log)
}

/// Write one runs-file line per run
pub fn write_runs<'a, W: Write>(
    writer: &mut W,
    runs: impl IntoIterator<Item = &'a Run>,
) -> Result<(), RunLogError> {
    for run in runs {
        writeln!(writer, "{}", run.to_line())?;
    }
    Ok(())
}

/// Load the runs file, or start an empty log when it does not exist yet
pub fn load_or_create_run_log<P: AsRef<Path>>(path: P) -> Result<RunLog> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("runs file {} does not exist, starting empty", path.display());
        return Ok(RunLog::new());
    }
    load_run_log(path)
}

pub fn save_run_log<P: AsRef<Path>>(run_log: &RunLog, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_runs(&mut buf, run_log.iter())?;
    std::fs::write(path, buf)
        .with_context(|| format!("Failed to write runs file {}", path.display()))?;
    log::debug!("saved {} runs to {}", run_log.len(), path.display());
    Ok(())
}
