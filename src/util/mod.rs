pub mod clock;
pub mod config;
pub mod time;
pub mod units;
