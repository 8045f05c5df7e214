use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// Every translation key the formatters ever request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Today,
    Yesterday,
    Tomorrow,
    DaysAgo,
    Days,
    Free,
    MonthlyTransmit,
    MonthlyReceive,
    TotallyTransmit,
    TotallyReceive,
}

impl Key {
    pub const ALL: [Key; 10] = [
        Key::Today,
        Key::Yesterday,
        Key::Tomorrow,
        Key::DaysAgo,
        Key::Days,
        Key::Free,
        Key::MonthlyTransmit,
        Key::MonthlyReceive,
        Key::TotallyTransmit,
        Key::TotallyReceive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Today => "TODAY",
            Key::Yesterday => "YESTERDAY",
            Key::Tomorrow => "TOMORROW",
            Key::DaysAgo => "DAYS_AGO",
            Key::Days => "DAYS",
            Key::Free => "FREE",
            Key::MonthlyTransmit => "MONTHLY_TRANSMIT",
            Key::MonthlyReceive => "MONTHLY_RECEIVE",
            Key::TotallyTransmit => "TOTALLY_TRANSMIT",
            Key::TotallyReceive => "TOTALLY_RECEIVE",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Key::Today => "Today",
            Key::Yesterday => "Yesterday",
            Key::Tomorrow => "Tomorrow",
            Key::DaysAgo => "days ago",
            Key::Days => "days",
            Key::Free => "Free",
            Key::MonthlyTransmit => "Monthly Transmit",
            Key::MonthlyReceive => "Monthly Receive",
            Key::TotallyTransmit => "Totally Transmit",
            Key::TotallyReceive => "Totally Receive",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown translation key: {s}"))
    }
}

/// Key to localized string lookup.
pub trait Translate {
    fn translate(&self, key: Key) -> String;
}

impl<F> Translate for F
where
    F: Fn(Key) -> String,
{
    fn translate(&self, key: Key) -> String {
        self(key)
    }
}

/// English defaults with optional per-key overrides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<Key, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw `KEY = "text"` pairs, skipping unknown keys.
    pub fn from_overrides<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut catalog = Self::new();
        for (raw, text) in entries {
            match raw.parse::<Key>() {
                Ok(key) => catalog.set(key, text.clone()),
                Err(e) => warn!(key = %raw, error = %e, "Ignoring locale override"),
            }
        }
        catalog
    }

    pub fn set(&mut self, key: Key, text: impl Into<String>) {
        self.overrides.insert(key, text.into());
    }
}

impl Translate for Catalog {
    fn translate(&self, key: Key) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.english().to_string())
    }
}
