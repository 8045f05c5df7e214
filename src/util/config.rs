use anyhow::{Context, Result, bail};
use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::i18n::Catalog;
use crate::util::units::{DEFAULT_BYTES_PRECISION, DEFAULT_NUMBER_PRECISION};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Translation overrides keyed by `TODAY`, `DAYS_AGO`, ...
    #[serde(default)]
    pub locale: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub fallback: String,
    #[serde(default = "default_bytes_precision")]
    pub bytes_precision: usize,
    #[serde(default = "default_number_precision")]
    pub number_precision: usize,
}

fn default_timezone() -> String {
    "local".to_string()
}
fn default_bytes_precision() -> usize {
    DEFAULT_BYTES_PRECISION
}
fn default_number_precision() -> usize {
    DEFAULT_NUMBER_PRECISION
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            fallback: String::new(),
            bytes_precision: default_bytes_precision(),
            number_precision: default_number_precision(),
        }
    }
}

/// Zone timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(Zone::Fixed(FixedOffset::east_opt(0).context("zero offset")?));
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => bail!("Invalid timezone {:?}: expected \"local\", \"UTC\" or \"+HH:MM\"", raw),
        };
        let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
        // Digits only; `u32::from_str` would still accept a leading `+`.
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            bail!("Invalid timezone {:?}: expected \"+HH:MM\"", raw);
        }
        let hours: u32 = hours
            .parse()
            .with_context(|| format!("Invalid timezone hours: {raw:?}"))?;
        let minutes: u32 = minutes
            .parse()
            .with_context(|| format!("Invalid timezone minutes: {raw:?}"))?;
        if hours > 23 || minutes >= 60 {
            bail!("Invalid timezone offset: {:?}", raw);
        }

        let seconds = (hours * 3600 + minutes * 60) as i32;
        FixedOffset::east_opt(sign * seconds)
            .map(Zone::Fixed)
            .with_context(|| format!("Timezone offset out of range: {raw:?}"))
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/ocfmt/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ocfmt/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ocfmt") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn zone(&self) -> Result<Zone> {
        Zone::parse(&self.display.timezone)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::from_overrides(&self.locale)
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ocfmt") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/ocfmt/logs")
    }
}
