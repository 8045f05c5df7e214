use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::error::{FormatError, Result};
use crate::i18n::{Key, Translate};
use crate::util::clock::Clock;

const MILLIS_PER_DAY: i64 = 86_400_000;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Elapsed time between two instants, split the way the relative phrase needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDifference {
    /// Whole 24-hour blocks, floored toward negative infinity.
    pub total_days: i64,
    pub year_delta: i32,
    /// Calendar month distance; day of month is ignored.
    pub month_delta: i32,
}

impl TimeDifference {
    pub fn between<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        let millis = now.timestamp_millis() - then.timestamp_millis();
        let year_delta = now.year() - then.year();
        let month_delta = 12 * year_delta + (now.month() as i32 - then.month() as i32);

        Self {
            total_days: millis.div_euclid(MILLIS_PER_DAY),
            year_delta,
            month_delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {
    Today,
    Yesterday,
    Tomorrow,
    YearsAgo(u64),
    InYears(u64),
    MonthsAgo(u64),
    InMonths(u64),
    DaysAgo(u64),
    InDays(u64),
    Unspecified,
}

impl Relative {
    /// Pick the phrase for a fixed-duration difference. Order matters: the
    /// year and month checks shadow the day counts.
    pub fn classify(diff: &TimeDifference) -> Self {
        match diff.total_days {
            0 => return Relative::Today,
            1 => return Relative::Yesterday,
            -1 => return Relative::Tomorrow,
            _ => {}
        }

        if diff.year_delta >= 1 {
            Relative::YearsAgo(u64::from(diff.year_delta.unsigned_abs()))
        } else if diff.year_delta <= -1 {
            Relative::InYears(u64::from(diff.year_delta.unsigned_abs()))
        } else if diff.month_delta >= 1 {
            Relative::MonthsAgo(u64::from(diff.month_delta.unsigned_abs()))
        } else if diff.month_delta <= -1 {
            Relative::InMonths(u64::from(diff.month_delta.unsigned_abs()))
        } else if diff.total_days > 1 {
            Relative::DaysAgo(diff.total_days.unsigned_abs())
        } else if diff.total_days < -1 {
            Relative::InDays(diff.total_days.unsigned_abs())
        } else {
            Relative::Unspecified
        }
    }

    /// Pick the phrase for a distance in calendar days.
    pub fn classify_calendar_days(days: i64) -> Self {
        match days {
            0 => Relative::Today,
            1 => Relative::Yesterday,
            -1 => Relative::Tomorrow,
            d if d > 1 => Relative::DaysAgo(d.unsigned_abs()),
            d => Relative::InDays(d.unsigned_abs()),
        }
    }

    pub fn phrase<T: Translate + ?Sized>(&self, t: &T) -> String {
        match *self {
            Relative::Today => t.translate(Key::Today),
            Relative::Yesterday => t.translate(Key::Yesterday),
            Relative::Tomorrow => t.translate(Key::Tomorrow),
            Relative::YearsAgo(n) => format!("{n} {} ago", unit(n, "year")),
            Relative::InYears(n) => format!("in {n} {}", unit(n, "year")),
            Relative::MonthsAgo(n) => format!("{n} {} ago", unit(n, "month")),
            Relative::InMonths(n) => format!("in {n} {}", unit(n, "month")),
            Relative::DaysAgo(n) => format!("{n} days ago"),
            Relative::InDays(n) => format!("in {n} days"),
            Relative::Unspecified => String::new(),
        }
    }

    /// Like [`Relative::phrase`], but day units come from the translator.
    pub fn calendar_phrase<T: Translate + ?Sized>(&self, t: &T) -> String {
        match *self {
            Relative::DaysAgo(n) => format!("{n} {}", t.translate(Key::DaysAgo)),
            Relative::InDays(n) => format!("in {n} {}", t.translate(Key::Days)),
            _ => self.phrase(t),
        }
    }
}

fn unit(n: u64, word: &str) -> String {
    if n > 1 {
        format!("{word}s")
    } else {
        word.to_string()
    }
}

/// Formats timestamps as `"<absolute> (<relative>)"` against an injected clock,
/// translator and time zone.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter<C, T, Tz> {
    clock: C,
    translator: T,
    tz: Tz,
}

impl<C, T, Tz> RelativeTimeFormatter<C, T, Tz>
where
    C: Clock,
    T: Translate,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    pub fn new(clock: C, translator: T, tz: Tz) -> Self {
        Self {
            clock,
            translator,
            tz,
        }
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.tz)
    }

    /// Parse RFC 3339, a naive date-time, or a bare date into this formatter's zone.
    pub fn parse_timestamp(&self, raw: &str) -> Result<DateTime<Tz>> {
        let input = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&self.tz));
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(input, pattern).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, DATE_FORMAT)
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            });

        let Some(naive) = naive else {
            debug!(input = raw, "Unparseable timestamp");
            return Err(FormatError::InvalidTimestamp {
                input: raw.to_string(),
            });
        };

        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                debug!(input = raw, "Local time falls in a DST gap");
                FormatError::NonexistentLocalTime {
                    input: raw.to_string(),
                }
            })
    }

    /// `YYYY-MM-DD HH:mm`, or the fallback when no timestamp is given.
    pub fn format_date_time(
        &self,
        timestamp: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<String> {
        match present(timestamp) {
            Some(raw) => Ok(self.parse_timestamp(raw)?.format(DATE_TIME_FORMAT).to_string()),
            None => Ok(fallback.unwrap_or_default().to_string()),
        }
    }

    /// `YYYY-MM-DD`, or an empty string when no timestamp is given.
    pub fn format_date(&self, timestamp: Option<&str>) -> Result<String> {
        match present(timestamp) {
            Some(raw) => Ok(self.parse_timestamp(raw)?.format(DATE_FORMAT).to_string()),
            None => Ok(String::new()),
        }
    }

    pub fn format_date_time_with_relative(
        &self,
        timestamp: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<String> {
        let Some(raw) = present(timestamp) else {
            return Ok(fallback.unwrap_or_default().to_string());
        };

        let then = self.parse_timestamp(raw)?;
        let diff = TimeDifference::between(&then, &self.now());
        let relative = Relative::classify(&diff);
        debug!(input = raw, ?diff, ?relative, "Classified timestamp");

        Ok(format!(
            "{} ({})",
            then.format(DATE_TIME_FORMAT),
            relative.phrase(&self.translator)
        ))
    }

    /// Calendar-day variant: both instants are reduced to their local dates
    /// before differencing, so time of day never matters.
    pub fn format_date_with_relative(
        &self,
        timestamp: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<String> {
        let Some(raw) = present(timestamp) else {
            return Ok(fallback.unwrap_or_default().to_string());
        };

        let then = self.parse_timestamp(raw)?;
        let days = self
            .now()
            .date_naive()
            .signed_duration_since(then.date_naive())
            .num_days();
        let relative = Relative::classify_calendar_days(days);

        Ok(format!(
            "{} ({})",
            then.format(DATE_FORMAT),
            relative.calendar_phrase(&self.translator)
        ))
    }
}

fn present(timestamp: Option<&str>) -> Option<&str> {
    timestamp.filter(|s| !s.is_empty())
}

/// UTC calendar date of the local midnight that starts `date`'s day.
pub fn to_iso_date_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let local_day = date.date_naive();
    let midnight = date
        .timezone()
        .from_local_datetime(&local_day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|m| m.naive_utc().date())
        .unwrap_or(local_day);
    midnight.format(DATE_FORMAT).to_string()
}
