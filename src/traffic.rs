use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::{Key, Translate};

/// How a VPN user's traffic quota is accounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficType {
    Free,
    MonthlyTransmit,
    MonthlyReceive,
    TotallyTransmit,
    TotallyReceive,
}

impl TrafficType {
    pub const ALL: [TrafficType; 5] = [
        TrafficType::Free,
        TrafficType::MonthlyTransmit,
        TrafficType::MonthlyReceive,
        TrafficType::TotallyTransmit,
        TrafficType::TotallyReceive,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            TrafficType::Free => "Free",
            TrafficType::MonthlyTransmit => "MonthlyTransmit",
            TrafficType::MonthlyReceive => "MonthlyReceive",
            TrafficType::TotallyTransmit => "TotallyTransmit",
            TrafficType::TotallyReceive => "TotallyReceive",
        }
    }

    fn key(&self) -> Key {
        match self {
            TrafficType::Free => Key::Free,
            TrafficType::MonthlyTransmit => Key::MonthlyTransmit,
            TrafficType::MonthlyReceive => Key::MonthlyReceive,
            TrafficType::TotallyTransmit => Key::TotallyTransmit,
            TrafficType::TotallyReceive => Key::TotallyReceive,
        }
    }

    pub fn label<T: Translate + ?Sized>(&self, t: &T) -> String {
        t.translate(self.key())
    }
}

impl fmt::Display for TrafficType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for TrafficType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrafficType::ALL
            .iter()
            .copied()
            .find(|tt| tt.wire_name() == s)
            .ok_or_else(|| format!("unknown traffic type: {s}"))
    }
}

/// Label for a raw backend value; unknown values are shown as-is.
pub fn label_for_wire<T: Translate + ?Sized>(raw: &str, t: &T) -> String {
    match raw.parse::<TrafficType>() {
        Ok(tt) => tt.label(t),
        Err(_) => raw.to_string(),
    }
}
