use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use runlog::OutputFormat;
use runlog::commands;
use runlog::config::{self, Config};
use runlog::runs::import::load_run_log;
use runlog::runs::models::Run;
use runlog::runs::summary::TimeUnit;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "runlog")]
#[command(about = "Personal running log: durations, recent runs and mileage summaries")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a duration given in minutes, e.g. 45.5
    Duration {
        #[arg(help = "Duration in minutes", allow_negative_numbers = true)]
        minutes: f64,
    },
    /// Show the run on a date
    Show {
        #[arg(help = "Run date (YYYY-MM-DD)")]
        date: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Record a run
    Add {
        #[arg(help = "Run date (YYYY-MM-DD)")]
        date: String,
        #[arg(help = "Distance in miles")]
        miles: f64,
        #[arg(help = "Duration in minutes, e.g. 45.5")]
        minutes: f64,
        #[arg(long, help = "Optional comments")]
        comments: Option<String>,
        #[arg(long, help = "Runs file (defaults to runs_file from config)")]
        file: Option<PathBuf>,
    },
    /// Delete the run on a date
    Delete {
        #[arg(help = "Run date (YYYY-MM-DD)")]
        date: String,
        #[arg(long, help = "Runs file (defaults to runs_file from config)")]
        file: Option<PathBuf>,
    },
    /// Show runs for each of the last N days
    Recent {
        #[arg(long, help = "Number of days to show (defaults to summary.recent_days)")]
        days: Option<u32>,
        #[arg(long, help = "Last day of the window (YYYY-MM-DD, defaults to today)")]
        today: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Total distance per week or month
    Summary {
        #[arg(value_enum, help = "Grouping period (defaults to summary.default_unit)")]
        unit: Option<TimeUnit>,
        #[arg(long, help = "First date to include (YYYY-MM-DD)")]
        start: Option<String>,
        #[arg(long, help = "Last date to include (YYYY-MM-DD)")]
        end: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct SourceArgs {
    #[arg(long, help = "Runs file (defaults to runs_file from config)")]
    file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn runs_file(file: &Option<PathBuf>, config: &Config) -> PathBuf {
    file.clone().unwrap_or_else(|| config.runs_file.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Duration { minutes } => {
            commands::duration::show(*minutes)?;
        }
        Commands::Add {
            date,
            miles,
            minutes,
            comments,
            file,
        } => {
            let config = config::load()?;
            let date = commands::runs::parse_date_arg(date)?;
            let run = Run::new(date, *miles, *minutes, comments.clone().unwrap_or_default())?;
            commands::runs::add(&runs_file(file, &config), run)?;
        }
        Commands::Delete { date, file } => {
            let config = config::load()?;
            let date = commands::runs::parse_date_arg(date)?;
            commands::runs::delete(&runs_file(file, &config), date)?;
        }
        Commands::Show { date, source } => {
            let config = config::load()?;
            let date = commands::runs::parse_date_arg(date)?;
            let run_log = load_run_log(runs_file(&source.file, &config))?;
            commands::runs::show(&run_log, date, source.output)?;
        }
        Commands::Recent {
            days,
            today,
            source,
        } => {
            let config = config::load()?;
            let today = match today {
                Some(s) => commands::runs::parse_date_arg(s)?,
                None => chrono::Local::now().date_naive(),
            };
            let days = days.unwrap_or(config.summary.recent_days);
            let run_log = load_run_log(runs_file(&source.file, &config))?;
            commands::runs::recent(&run_log, today, days, source.output)?;
        }
        Commands::Summary {
            unit,
            start,
            end,
            source,
        } => {
            let config = config::load()?;
            let start = start
                .as_deref()
                .map(commands::runs::parse_date_arg)
                .transpose()?;
            let end = end
                .as_deref()
                .map(commands::runs::parse_date_arg)
                .transpose()?;
            let unit = unit.unwrap_or(config.summary.default_unit);
            let run_log = load_run_log(runs_file(&source.file, &config))?;
            commands::runs::summary(&run_log, unit, start, end, source.output)?;
        }
        Commands::Config(args) => {
            let config = config::load()?;
            match &args.action {
                ConfigAction::List => commands::config::list(&config)?,
                ConfigAction::Get { key } => commands::config::get(key, &config)?,
            }
        }
    }

    Ok(())
}
