use crate::ids::{EventId, ShipmentId};
use crate::status::ShipmentStatus;
use carrier_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Sea,
    Air,
}

impl FromStr for TransportMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "sea" | "ocean" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Sea => "sea",
            Self::Air => "air",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TrackPoint {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            timestamp: None,
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPosition {
    #[serde(flatten)]
    pub point: TrackPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_knots: Option<f64>,
    /// Compass bearing in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
}

impl CurrentPosition {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            point: TrackPoint::at(coordinate),
            speed_knots: None,
            heading: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.point.coordinate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportPosition {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub airport_code: String,
    pub airport_name: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl AirportPosition {
    pub fn at(airport_code: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            airport_code: airport_code.into(),
            airport_name: String::new(),
            city: String::new(),
            country: String::new(),
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub imo_number: String,
    pub carrier_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub reference: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub bill_of_lading: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub number: String,
    pub carrier: String,
    pub aircraft: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub awb: String,
    pub pieces: u32,
    pub weight_kg: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub event_id: EventId,
    pub event_type: String,
    pub event_datetime: String,
    pub event_description: String,
    pub location: String,
    pub status: EventStatus,
}

/// Display labels for the two ends of a route, e.g. "Shanghai, CN".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLabels {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDates {
    pub etd: String,
    pub eta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_departure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_arrival: Option<String>,
}

/// Fields every shipment carries regardless of transport mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentHeader {
    pub id: ShipmentId,
    #[serde(default)]
    pub status: ShipmentStatus,
    #[serde(default)]
    pub shipper: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub route: RouteLabels,
    #[serde(default)]
    pub dates: ShipmentDates,
    /// Percent of the journey completed, 0..=100.
    #[serde(default)]
    pub progress: u8,
}

impl ShipmentHeader {
    pub fn new(id: impl Into<ShipmentId>) -> Self {
        Self {
            id: id.into(),
            status: ShipmentStatus::default(),
            shipper: String::new(),
            customer: String::new(),
            route: RouteLabels::default(),
            dates: ShipmentDates::default(),
            progress: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaPositions {
    /// Chronological; may be empty.
    #[serde(default)]
    pub historical: Vec<TrackPoint>,
    pub current: CurrentPosition,
    /// Forecast remainder of the voyage; may be empty.
    #[serde(default)]
    pub predicted: Vec<TrackPoint>,
}

impl SeaPositions {
    /// `historical ++ [current] ++ predicted`, in travel order.
    pub fn route(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.historical
            .iter()
            .map(|point| point.coordinate)
            .chain(std::iter::once(self.current.coordinate()))
            .chain(self.predicted.iter().map(|point| point.coordinate))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPositions {
    pub origin: AirportPosition,
    pub destination: AirportPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaShipment {
    #[serde(flatten)]
    pub header: ShipmentHeader,
    #[serde(default)]
    pub vessel: Vessel,
    #[serde(default)]
    pub container: Container,
    pub positions: SeaPositions,
    #[serde(default)]
    pub events: Vec<ShipmentEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirShipment {
    #[serde(flatten)]
    pub header: ShipmentHeader,
    #[serde(default)]
    pub flight: Flight,
    #[serde(default)]
    pub cargo: Cargo,
    pub positions: AirPositions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shipment {
    Sea(SeaShipment),
    Air(AirShipment),
}

impl Shipment {
    pub fn header(&self) -> &ShipmentHeader {
        match self {
            Self::Sea(sea) => &sea.header,
            Self::Air(air) => &air.header,
        }
    }

    pub fn id(&self) -> &ShipmentId {
        &self.header().id
    }

    pub fn status(&self) -> ShipmentStatus {
        self.header().status
    }

    pub fn progress(&self) -> u8 {
        self.header().progress
    }

    pub fn mode(&self) -> TransportMode {
        match self {
            Self::Sea(_) => TransportMode::Sea,
            Self::Air(_) => TransportMode::Air,
        }
    }
}

impl From<SeaShipment> for Shipment {
    fn from(value: SeaShipment) -> Self {
        Self::Sea(value)
    }
}

impl From<AirShipment> for Shipment {
    fn from(value: AirShipment) -> Self {
        Self::Air(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEA_JSON: &str = r#"{
        "id": "SEA-001",
        "type": "sea",
        "status": "IN_TRANSIT",
        "shipper": "Acme",
        "customer": "Globex",
        "route": { "origin": "Shanghai", "destination": "Rotterdam" },
        "dates": { "etd": "2024-01-01", "eta": "2024-02-10" },
        "progress": 45,
        "vessel": { "name": "EVER GIVEN", "imo_number": "9811000", "carrier_code": "EGLV" },
        "container": { "reference": "MSCU1234567", "type": "40HC", "bill_of_lading": "BL-1" },
        "positions": {
            "historical": [{ "lat": 31.2, "lng": 121.5, "timestamp": "2024-01-01T00:00:00Z", "location": "Shanghai" }],
            "current": { "lat": 1.26, "lng": 103.84, "speed_knots": 14.5, "heading": 270 },
            "predicted": [{ "lat": 51.95, "lng": 4.14 }]
        },
        "events": [{
            "event_id": "E1",
            "event_type": "DEPARTURE",
            "event_datetime": "2024-01-01T00:00:00Z",
            "event_description": "Departed",
            "location": "Shanghai",
            "status": "completed"
        }]
    }"#;

    #[test]
    fn sea_record_parses_with_tag_and_flattened_header() {
        let shipment: Shipment = serde_json::from_str(SEA_JSON).unwrap();
        assert_eq!(shipment.mode(), TransportMode::Sea);
        assert_eq!(shipment.id(), "SEA-001");
        assert_eq!(shipment.status(), ShipmentStatus::InTransit);
        assert_eq!(shipment.progress(), 45);
        let Shipment::Sea(sea) = shipment else {
            panic!("expected sea shipment");
        };
        assert_eq!(sea.container.kind, "40HC");
        assert_eq!(sea.positions.current.speed_knots, Some(14.5));
        assert_eq!(sea.positions.current.coordinate(), Coordinate::new(1.26, 103.84));
        assert_eq!(
            sea.positions.historical[0].location.as_deref(),
            Some("Shanghai")
        );
        assert_eq!(sea.events[0].status, EventStatus::Completed);
    }

    #[test]
    fn air_record_parses() {
        let raw = r#"{
            "id": "AIR-7",
            "type": "air",
            "status": "SCHEDULED",
            "progress": 0,
            "flight": { "number": "LH400", "carrier": "Lufthansa", "aircraft": "B748" },
            "positions": {
                "origin": { "lat": 50.03, "lng": 8.57, "airport_code": "FRA", "airport_name": "Frankfurt", "city": "Frankfurt", "country": "DE" },
                "destination": { "lat": 40.64, "lng": -73.78, "airport_code": "JFK", "airport_name": "Kennedy", "city": "New York", "country": "US" }
            }
        }"#;
        let shipment: Shipment = serde_json::from_str(raw).unwrap();
        let Shipment::Air(air) = &shipment else {
            panic!("expected air shipment");
        };
        assert_eq!(air.positions.destination.airport_code, "JFK");
        assert_eq!(air.flight.number, "LH400");
        assert!(air.header.shipper.is_empty());
    }

    #[test]
    fn route_concatenates_in_travel_order() {
        let shipment: Shipment = serde_json::from_str(SEA_JSON).unwrap();
        let Shipment::Sea(sea) = shipment else {
            panic!("expected sea shipment");
        };
        let route: Vec<_> = sea.positions.route().collect();
        assert_eq!(
            route,
            vec![
                Coordinate::new(31.2, 121.5),
                Coordinate::new(1.26, 103.84),
                Coordinate::new(51.95, 4.14),
            ]
        );
    }

    #[test]
    fn serialises_type_tag() {
        let shipment: Shipment = serde_json::from_str(SEA_JSON).unwrap();
        let value = serde_json::to_value(&shipment).unwrap();
        assert_eq!(value["type"], "sea");
        assert_eq!(value["id"], "SEA-001");
        assert_eq!(value["positions"]["current"]["lat"], 1.26);
    }
}
