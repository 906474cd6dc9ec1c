use crate::domain::{Shipment, TransportMode};
use crate::status::ShipmentStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentFilter {
    All,
    Sea,
    Air,
    InTransit,
}

impl Default for ShipmentFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for ShipmentFilter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "sea" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            "transit" | "in_transit" | "in-transit" => Ok(Self::InTransit),
            _ => Err(()),
        }
    }
}

impl ShipmentFilter {
    pub fn matches(&self, shipment: &Shipment) -> bool {
        match self {
            Self::All => true,
            Self::Sea => shipment.mode() == TransportMode::Sea,
            Self::Air => shipment.mode() == TransportMode::Air,
            Self::InTransit => shipment.status() == ShipmentStatus::InTransit,
        }
    }
}

/// Case-insensitive substring search over id, shipper and route labels.
pub fn matches_query(shipment: &Shipment, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let header = shipment.header();
    [
        header.id.as_str(),
        header.shipper.as_str(),
        header.route.origin.as_str(),
        header.route.destination.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_shipments<'a>(
    shipments: &'a [Shipment],
    filter: ShipmentFilter,
    query: &str,
) -> Vec<&'a Shipment> {
    shipments
        .iter()
        .filter(|shipment| filter.matches(shipment) && matches_query(shipment, query))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentStats {
    pub total: usize,
    pub in_transit: usize,
    pub sea: usize,
    pub air: usize,
}

impl ShipmentStats {
    pub fn from_shipments(shipments: &[Shipment]) -> Self {
        shipments.iter().fold(Self::default(), |mut stats, shipment| {
            stats.total += 1;
            if shipment.status() == ShipmentStatus::InTransit {
                stats.in_transit += 1;
            }
            match shipment.mode() {
                TransportMode::Sea => stats.sea += 1,
                TransportMode::Air => stats.air += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_dataset_str;

    fn dataset() -> Vec<Shipment> {
        load_dataset_str(
            r#"{ "shipments": [
                { "id": "SEA-001", "type": "sea", "status": "IN_TRANSIT", "shipper": "Acme Freight",
                  "route": { "origin": "Shanghai", "destination": "Rotterdam" },
                  "positions": { "current": { "lat": 1.26, "lng": 103.84 } } },
                { "id": "SEA-002", "type": "sea", "status": "DELIVERED", "shipper": "Globex",
                  "route": { "origin": "Santos", "destination": "Hamburg" },
                  "positions": { "current": { "lat": 53.5, "lng": 9.9 } } },
                { "id": "AIR-001", "type": "air", "status": "IN_TRANSIT", "shipper": "Initech",
                  "route": { "origin": "Frankfurt", "destination": "New York" },
                  "positions": {
                    "origin": { "lat": 50.03, "lng": 8.57, "airport_code": "FRA", "airport_name": "", "city": "", "country": "" },
                    "destination": { "lat": 40.64, "lng": -73.78, "airport_code": "JFK", "airport_name": "", "city": "", "country": "" }
                  } }
            ] }"#,
        )
        .unwrap()
    }

    fn ids(shipments: Vec<&Shipment>) -> Vec<&str> {
        shipments.into_iter().map(|s| s.id().as_str()).collect()
    }

    #[test]
    fn filters_by_mode_and_status() {
        let shipments = dataset();
        assert_eq!(filter_shipments(&shipments, ShipmentFilter::All, "").len(), 3);
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::Sea, "")),
            vec!["SEA-001", "SEA-002"]
        );
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::Air, "")),
            vec!["AIR-001"]
        );
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::InTransit, "")),
            vec!["SEA-001", "AIR-001"]
        );
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let shipments = dataset();
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::All, "hamburg")),
            vec!["SEA-002"]
        );
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::All, "ACME")),
            vec!["SEA-001"]
        );
        assert_eq!(
            ids(filter_shipments(&shipments, ShipmentFilter::InTransit, "air-")),
            vec!["AIR-001"]
        );
        assert!(filter_shipments(&shipments, ShipmentFilter::All, "nowhere").is_empty());
    }

    #[test]
    fn stats_cover_whole_collection() {
        let stats = ShipmentStats::from_shipments(&dataset());
        assert_eq!(
            stats,
            ShipmentStats {
                total: 3,
                in_transit: 2,
                sea: 2,
                air: 1,
            }
        );
        assert_eq!(ShipmentStats::from_shipments(&[]), ShipmentStats::default());
    }

    #[test]
    fn filter_parses_from_query_values() {
        assert_eq!("".parse(), Ok(ShipmentFilter::All));
        assert_eq!("transit".parse(), Ok(ShipmentFilter::InTransit));
        assert_eq!("AIR".parse(), Ok(ShipmentFilter::Air));
        assert!("rail".parse::<ShipmentFilter>().is_err());
    }
}
