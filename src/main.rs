mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "availcal")]
#[command(about = "Mark the days you're available on a calendar grid")]
struct Cli {
    /// Log storage and state changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar grid
    Show {
        /// First day of the grid (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
    },
    /// Flip a day between available and unavailable
    Toggle {
        /// Day to flip (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// First day of the grid (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
    },
    /// Mark every day on the grid available
    SelectAll {
        /// First day of the grid (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
    },
    /// Forget every selected day
    Clear,
    /// Set how many days the grid shows (1-90)
    Range {
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Print selected days, one per line
    List,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with every option commented out
    Init,
    /// Show config and data locations
    Path,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { from } => commands::show::run(from),
        Commands::Toggle { date, from } => commands::toggle::run(date, from),
        Commands::SelectAll { from } => commands::select_all::run(from),
        Commands::Clear => commands::clear::run(),
        Commands::Range { days } => commands::range::run(days),
        Commands::List => commands::list::run(),
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Path => commands::config::paths(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert!(parse_date("01/01/2024").is_err());
    }

    #[test]
    fn test_range_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["availcal", "range", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Range { days: -5 }));
    }

    #[test]
    fn test_toggle_rejects_bad_date() {
        assert!(Cli::try_parse_from(["availcal", "toggle", "tomorrow"]).is_err());
    }
}
