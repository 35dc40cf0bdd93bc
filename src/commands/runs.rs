use crate::OutputFormat;
use crate::runs::import::{load_or_create_run_log, save_run_log};
use crate::runs::models::{Run, parse_date};
use crate::runs::store::RunLog;
use crate::runs::summary::{TimeUnit, distance_by_period, recent_runs};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

pub fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    parse_date(s).with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn print_run(run: &Run) {
    println!("Date:     {}", run.date);
    println!("Distance: {:.2} miles", run.distance_miles);
    println!("Duration: {}", run.display_duration());
    if !run.comments.is_empty() {
        println!("Comments: {}", run.comments);
    }
}

/// Show the run recorded on a given date
pub fn show(run_log: &RunLog, date: NaiveDate, format: OutputFormat) -> Result<()> {
    let run = run_log.get(date)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(run)?),
        OutputFormat::Text => print_run(run),
    }
    Ok(())
}

/// Day-by-day view of the last `days` days
pub fn recent(run_log: &RunLog, today: NaiveDate, days: u32, format: OutputFormat) -> Result<()> {
    let slots = recent_runs(run_log, today, days)?;
    log::debug!("recent window {} days ending {}", days, today);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("Runs (last {} days):", days);
    println!("{:<12} {:>10} {:<20} {}", "Date", "Miles", "Duration", "Comments");
    println!("{}", "-".repeat(60));
    for slot in &slots {
        match &slot.run {
            Some(run) => println!(
                "{:<12} {:>10.2} {:<20} {}",
                slot.date.to_string(),
                run.distance_miles,
                run.display_duration(),
                run.comments
            ),
            None => println!("{:<12} {:>10} {:<20}", slot.date.to_string(), "-", "rest"),
        }
    }
    Ok(())
}

/// Total miles per week or month between optional bounds
pub fn summary(
    run_log: &RunLog,
    unit: TimeUnit,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            anyhow::bail!("Start date {} is after end date {}", s, e);
        }
    }
    let totals = distance_by_period(run_log.range(start, end), unit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&totals)?),
        OutputFormat::Text => {
            if totals.is_empty() {
                println!("No runs found.");
                return Ok(());
            }
            println!("{:<12} {:>10}", "Period", "Miles");
            println!("{}", "-".repeat(23));
            for point in &totals {
                println!("{:<12} {:>10.2}", point.x, point.y);
            }
        }
    }
    Ok(())
}

/// Record a run in the runs file. A second run on the same date is refused.
pub fn add(runs_file: &Path, run: Run) -> Result<()> {
    let mut run_log = load_or_create_run_log(runs_file)?;
    let date = run.date;
    let duration = run.display_duration();
    run_log.insert(run)?;
    save_run_log(&run_log, runs_file)?;
    println!("Added run on {} ({})", date, duration);
    Ok(())
}

/// Remove the run on a date from the runs file
pub fn delete(runs_file: &Path, date: NaiveDate) -> Result<()> {
    let mut run_log = load_or_create_run_log(runs_file)?;
    if !run_log.remove(date) {
        println!("No run on {}, nothing deleted.", date);
        return Ok(());
    }
    save_run_log(&run_log, runs_file)?;
    println!("Deleted run on {}", date);
    Ok(())
}
