use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

use ocfmt::i18n::Catalog;
use ocfmt::traffic;
use ocfmt::util::clock::{Clock, FixedClock, SystemClock};
use ocfmt::util::config::{AppConfig, Zone};
use ocfmt::util::time::{RelativeTimeFormatter, to_iso_date_string};
use ocfmt::util::units::{bytes_to_gb, number_to_fixed};

#[derive(Parser, Debug)]
#[command(name = "ocfmt", version, about = "Date and unit formatting for the ocserv console")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pin "now" to an RFC 3339 instant instead of the system clock
    #[arg(long)]
    now: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// "YYYY-MM-DD HH:mm (relative)" using 24-hour day blocks
    Relative {
        timestamp: Option<String>,
        #[arg(short, long)]
        fallback: Option<String>,
    },
    /// "YYYY-MM-DD (relative)" using calendar days
    RelativeDate {
        timestamp: Option<String>,
        #[arg(short, long)]
        fallback: Option<String>,
    },
    /// "YYYY-MM-DD HH:mm"
    Datetime {
        timestamp: Option<String>,
        #[arg(short, long)]
        fallback: Option<String>,
    },
    /// "YYYY-MM-DD"
    Date { timestamp: Option<String> },
    /// UTC date of the local midnight starting the given (or current) day
    IsoDate { timestamp: Option<String> },
    /// Byte count in GiB
    Bytes {
        bytes: u64,
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// Fixed-precision number
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// Localized label of a traffic type such as MonthlyTransmit
    Traffic { value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("ocfmt starting");

    let fixed_clock = cli
        .now
        .as_deref()
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| FixedClock(dt.with_timezone(&Utc)))
                .with_context(|| format!("Invalid --now value: {raw}"))
        })
        .transpose()?;
    let clock: &dyn Clock = match &fixed_clock {
        Some(c) => c,
        None => &SystemClock,
    };

    let output = match config.zone()? {
        Zone::Local => run(&cli.command, &config, clock, Local)?,
        Zone::Fixed(offset) => run(&cli.command, &config, clock, offset)?,
    };

    if cli.json {
        println!("{}", json!({ "output": output }));
    } else {
        println!("{output}");
    }
    Ok(())
}

fn run<Tz>(command: &Command, config: &AppConfig, clock: &dyn Clock, tz: Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let catalog: Catalog = config.catalog();
    let default_fallback = Some(config.display.fallback.as_str());
    let formatter = RelativeTimeFormatter::new(clock, catalog.clone(), tz);

    let output = match command {
        Command::Relative {
            timestamp,
            fallback,
        } => formatter.format_date_time_with_relative(
            timestamp.as_deref(),
            fallback.as_deref().or(default_fallback),
        )?,
        Command::RelativeDate {
            timestamp,
            fallback,
        } => formatter.format_date_with_relative(
            timestamp.as_deref(),
            fallback.as_deref().or(default_fallback),
        )?,
        Command::Datetime {
            timestamp,
            fallback,
        } => formatter
            .format_date_time(timestamp.as_deref(), fallback.as_deref().or(default_fallback))?,
        Command::Date { timestamp } => formatter.format_date(timestamp.as_deref())?,
        Command::IsoDate { timestamp } => {
            let instant = match timestamp.as_deref() {
                Some(raw) => formatter.parse_timestamp(raw)?,
                None => formatter.now(),
            };
            to_iso_date_string(&instant)
        }
        Command::Bytes { bytes, precision } => {
            bytes_to_gb(*bytes, precision.unwrap_or(config.display.bytes_precision))
        }
        Command::Number { value, precision } => {
            number_to_fixed(*value, precision.unwrap_or(config.display.number_precision))
        }
        Command::Traffic { value } => traffic::label_for_wire(value, &catalog),
    };

    Ok(output)
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ocfmt.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ocfmt=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
