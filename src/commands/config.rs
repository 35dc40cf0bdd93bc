use crate::config::Config;
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}

/// Resolve a dotted key such as `summary.recent_days`
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nested_key() {
        let config = Config::default();
        assert_eq!(lookup("summary.recent_days", &config).unwrap(), "7");
        assert_eq!(lookup("summary.default_unit", &config).unwrap(), "weekly");
        assert_eq!(lookup("runs_file", &config).unwrap(), "existing_runs.txt");
    }

    #[test]
    fn test_lookup_missing_key() {
        let config = Config::default();
        assert!(lookup("summary.nope", &config).is_err());
    }
}
