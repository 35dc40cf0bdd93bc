use crate::duration::try_format_duration;
use anyhow::{Context, Result};

/// Print the display string for a duration given in minutes
pub fn show(duration_mins: f64) -> Result<()> {
    let formatted = try_format_duration(duration_mins)
        .with_context(|| format!("Cannot format duration '{}'", duration_mins))?;
    println!("{}", formatted);
    Ok(())
}
