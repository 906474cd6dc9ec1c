use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Scheduled,
    InTransit,
    Arrived,
    Delivered,
}

impl Default for ShipmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl FromStr for ShipmentStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "in_transit" | "in-transit" | "intransit" => Ok(Self::InTransit),
            "arrived" => Ok(Self::Arrived),
            "delivered" => Ok(Self::Delivered),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Scheduled => "SCHEDULED",
            Self::InTransit => "IN_TRANSIT",
            Self::Arrived => "ARRIVED",
            Self::Delivered => "DELIVERED",
        };
        write!(f, "{}", value)
    }
}
