//! Map backend adapters.
//!
//! Each adapter turns a [`DisplayGeometry`] snapshot into the draw commands of
//! one mapping library. Adapters never derive geometry of their own; given the
//! same snapshot every backend draws the same routes, markers and viewport.
//! Every plan starts by clearing whatever the previous plan drew.

mod google;
mod leaflet;
mod mapbox;
mod style;

use carrier_view::DisplayGeometry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use google::GoogleMapsRenderer;
pub use leaflet::LeafletRenderer;
pub use mapbox::{MapboxRenderer, Projection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Leaflet,
    Mapbox,
    GoogleMaps,
}

impl FromStr for Backend {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "leaflet" => Ok(Self::Leaflet),
            "mapbox" => Ok(Self::Mapbox),
            "google" | "google-maps" | "google_maps" | "googlemaps" => Ok(Self::GoogleMaps),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Leaflet => "leaflet",
            Self::Mapbox => "mapbox",
            Self::GoogleMaps => "google_maps",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub backend: Backend,
    pub commands: Vec<Value>,
}

pub trait MapRenderer: Send + Sync {
    fn backend(&self) -> Backend;
    fn render(&self, geometry: &DisplayGeometry) -> RenderPlan;
}

pub fn renderer_for(backend: Backend, projection: Projection) -> Box<dyn MapRenderer> {
    match backend {
        Backend::Leaflet => Box::new(LeafletRenderer),
        Backend::Mapbox => Box::new(MapboxRenderer::new(projection)),
        Backend::GoogleMaps => Box::new(GoogleMapsRenderer),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use carrier_core::{
        AirPositions, AirShipment, AirportPosition, CurrentPosition, Flight, SeaPositions,
        SeaShipment, Shipment, ShipmentHeader, TrackPoint, Vessel,
    };
    use carrier_geo::Coordinate;
    use carrier_view::{compute_air_geometry, compute_sea_geometry, DisplayGeometry, ViewPolicy};

    pub fn sea_geometry() -> DisplayGeometry {
        let mut current = CurrentPosition::at(Coordinate::new(2.0, 20.0));
        current.speed_knots = Some(12.0);
        current.heading = Some(90.0);
        let mut header = ShipmentHeader::new("S1");
        header.progress = 40;
        let shipment = SeaShipment {
            header,
            vessel: Vessel {
                name: "PACIFIC CREST".to_string(),
                ..Default::default()
            },
            container: Default::default(),
            positions: SeaPositions {
                historical: vec![TrackPoint::at(Coordinate::new(1.0, 10.0))],
                current,
                predicted: vec![TrackPoint::at(Coordinate::new(3.0, 30.0))],
            },
            events: Vec::new(),
        };
        compute_sea_geometry(&shipment, &ViewPolicy::default())
    }

    pub fn air_geometry() -> DisplayGeometry {
        let mut header = ShipmentHeader::new("A1");
        header.progress = 50;
        let shipment = AirShipment {
            header,
            flight: Flight {
                number: "LH400".to_string(),
                carrier: "Lufthansa".to_string(),
                aircraft: "B748".to_string(),
            },
            cargo: Default::default(),
            positions: AirPositions {
                origin: AirportPosition::at("FRA", Coordinate::new(50.03, 8.57)),
                destination: AirportPosition::at("JFK", Coordinate::new(40.64, -73.78)),
            },
        };
        compute_air_geometry(&shipment, &ViewPolicy::default())
    }

    pub fn overview_geometry() -> DisplayGeometry {
        let shipments: Vec<Shipment> = Vec::new();
        carrier_view::resolve(&shipments, None, &ViewPolicy::default()).geometry
    }
}
