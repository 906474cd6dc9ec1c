pub mod catalog;
pub mod domain;
pub mod error;
pub mod ids;
pub mod loader;
pub mod status;
pub mod validate;

pub use carrier_geo::Coordinate;
pub use catalog::{filter_shipments, matches_query, ShipmentFilter, ShipmentStats};
pub use domain::{
    AirPositions, AirShipment, AirportPosition, Cargo, Container, CurrentPosition, EventStatus,
    Flight, RouteLabels, SeaPositions, SeaShipment, Shipment, ShipmentDates, ShipmentEvent,
    ShipmentHeader, TrackPoint, TransportMode, Vessel,
};
pub use error::{CarrierError, CarrierResult, ErrorCode};
pub use ids::{EventId, ShipmentId};
pub use loader::{load_dataset_file, load_dataset_str, ShipmentDataset};
pub use status::ShipmentStatus;
pub use validate::{validate_dataset, validate_shipment};
