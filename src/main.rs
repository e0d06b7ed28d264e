use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;

use prettytime::{
    errors::{self, ResultExt},
    timestamp::parse_timestamp,
    Clock, FixedClock, Locale, Settings, SystemClock, TimeFormatter,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// JSON settings file, e.g. {"locale": "en", "timezone_offset": 8}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Label language: en or cn
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Timezone offset in hours
    #[arg(long, global = true, allow_negative_numbers = true)]
    offset: Option<i32>,

    /// Use this instant as "now" instead of the system clock
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Relative time, e.g. "3 weeks ago"
    Humanize {
        timestamp: String,
        #[arg(long)]
        cn: bool,
        #[arg(long, conflicts_with = "cn")]
        en: bool,
    },
    /// Today, Yesterday or YYYY-MM-DD
    Day { timestamp: String },
    /// Move a timestamp by a number of hours
    Shift {
        timestamp: String,
        #[arg(allow_negative_numbers = true)]
        hours: i32,
    },
    /// Move a timestamp by the configured offset
    Local { timestamp: String },
    /// Calendar-day range ending at the end of today
    Range {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        years: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i32,
        /// Move the range back by the configured offset
        #[arg(long)]
        utc: bool,
    },
    /// The calendar day containing a timestamp, moved back by the configured offset
    TodayRange { timestamp: String },
    /// End of today
    TodayEnd {
        #[arg(long)]
        utc: bool,
    },
}

fn load_settings(cli: &Cli) -> errors::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(locale) = &cli.locale {
        settings.locale = Locale::from_code(locale);
    }
    if let Some(offset) = cli.offset {
        settings.timezone_offset = offset;
    }

    Ok(settings)
}

fn timestamp(input: &str) -> errors::Result<DateTime<FixedOffset>> {
    parse_timestamp(input)
}

fn execute<C: Clock>(command: &Commands, formatter: &TimeFormatter<C>) -> errors::Result<String> {
    let output = match command {
        Commands::Humanize { timestamp: ts, cn, en } => {
            let then = timestamp(ts)?;
            if *cn {
                formatter.humanize_time_cn(&then)
            } else if *en {
                formatter.humanize_time(&then)
            } else {
                formatter.humanize(&then)
            }
        }
        Commands::Day { timestamp: ts } => formatter.pretty_day(&timestamp(ts)?),
        Commands::Shift {
            timestamp: ts,
            hours,
        } => formatter
            .shift_timezone(&timestamp(ts)?, *hours)
            .to_rfc3339(),
        Commands::Local { timestamp: ts } => formatter.local_time(&timestamp(ts)?).to_rfc3339(),
        Commands::Range {
            years,
            months,
            days,
            utc,
        } => {
            let range = if *utc {
                formatter.nature_time_range_utc(*years, *months, *days)
            } else {
                formatter.nature_time_range(*years, *months, *days)
            };
            range.to_string()
        }
        Commands::TodayRange { timestamp: ts } => formatter
            .nature_time_today_range_utc(&timestamp(ts)?)
            .to_string(),
        Commands::TodayEnd { utc } => {
            let end = if *utc {
                formatter.nature_time_today_end_utc()
            } else {
                formatter.nature_time_today_end()
            };
            end.to_rfc3339()
        }
    };
    Ok(output)
}

fn run() -> errors::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    log::debug!("Effective settings: {:?}", settings);

    let output = match &cli.now {
        Some(now) => {
            let now = timestamp(now).context("--now must be a timestamp")?;
            let clock = FixedClock(now.with_timezone(&Utc));
            execute(&cli.command, &TimeFormatter::with_clock(settings, clock))?
        }
        None => execute(
            &cli.command,
            &TimeFormatter::with_clock(settings, SystemClock),
        )?,
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        ::std::process::exit(1);
    }
}
