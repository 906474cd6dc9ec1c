//! Checks applied once, when a dataset is loaded.
//!
//! Geometry and view code downstream assume every record passed here.

use crate::domain::{AirShipment, SeaShipment, Shipment};
use crate::error::{CarrierError, CarrierResult};
use carrier_geo::Coordinate;
use std::collections::HashSet;

pub fn validate_shipment(shipment: &Shipment) -> CarrierResult<()> {
    let header = shipment.header();
    if header.id.is_empty() {
        return Err(CarrierError::invalid_input("shipment id must not be empty"));
    }
    if header.progress > 100 {
        return Err(CarrierError::invalid_input(format!(
            "{}: progress {} exceeds 100",
            header.id, header.progress
        )));
    }
    match shipment {
        Shipment::Sea(sea) => validate_sea(sea),
        Shipment::Air(air) => validate_air(air),
    }
}

pub fn validate_dataset(shipments: &[Shipment]) -> CarrierResult<()> {
    let mut seen = HashSet::with_capacity(shipments.len());
    for shipment in shipments {
        validate_shipment(shipment)?;
        if !seen.insert(shipment.id()) {
            return Err(CarrierError::invalid_input(format!(
                "duplicate shipment id {}",
                shipment.id()
            )));
        }
    }
    Ok(())
}

fn validate_sea(sea: &SeaShipment) -> CarrierResult<()> {
    let id = &sea.header.id;
    for (index, coord) in sea.positions.route().enumerate() {
        check_coordinate(coord, || format!("{id}: route point {index}"))?;
    }
    let current = &sea.positions.current;
    if let Some(speed) = current.speed_knots {
        if !speed.is_finite() || speed < 0.0 {
            return Err(CarrierError::invalid_input(format!(
                "{id}: speed_knots must be a non-negative number"
            )));
        }
    }
    if let Some(heading) = current.heading {
        if !heading.is_finite() || !(0.0..=360.0).contains(&heading) {
            return Err(CarrierError::invalid_input(format!(
                "{id}: heading must be within 0..=360 degrees"
            )));
        }
    }
    Ok(())
}

fn validate_air(air: &AirShipment) -> CarrierResult<()> {
    let id = &air.header.id;
    check_coordinate(air.positions.origin.coordinate, || format!("{id}: origin"))?;
    check_coordinate(air.positions.destination.coordinate, || {
        format!("{id}: destination")
    })
}

fn check_coordinate(coord: Coordinate, context: impl FnOnce() -> String) -> CarrierResult<()> {
    if coord.is_valid() {
        Ok(())
    } else {
        Err(CarrierError::invalid_input(format!(
            "{}: invalid coordinate ({}, {})",
            context(),
            coord.lat,
            coord.lng
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AirPositions, AirportPosition, CurrentPosition, SeaPositions, ShipmentHeader, TrackPoint,
    };
    use crate::error::ErrorCode;

    fn sea(id: &str, current: Coordinate) -> Shipment {
        Shipment::Sea(SeaShipment {
            header: ShipmentHeader::new(id),
            vessel: Default::default(),
            container: Default::default(),
            positions: SeaPositions {
                historical: vec![TrackPoint::at(Coordinate::new(1.0, 1.0))],
                current: CurrentPosition::at(current),
                predicted: Vec::new(),
            },
            events: Vec::new(),
        })
    }

    fn air(id: &str, origin: Coordinate, destination: Coordinate) -> Shipment {
        Shipment::Air(AirShipment {
            header: ShipmentHeader::new(id),
            flight: Default::default(),
            cargo: Default::default(),
            positions: AirPositions {
                origin: AirportPosition::at("AAA", origin),
                destination: AirportPosition::at("BBB", destination),
            },
        })
    }

    #[test]
    fn accepts_well_formed_records() {
        let shipments = vec![
            sea("S1", Coordinate::new(2.0, 2.0)),
            air("A1", Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)),
        ];
        assert!(validate_dataset(&shipments).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan_coordinates() {
        let err = validate_shipment(&sea("S1", Coordinate::new(95.0, 0.0))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("route point 1"));

        let err = validate_shipment(&air(
            "A1",
            Coordinate::new(0.0, f64::NAN),
            Coordinate::new(0.0, 0.0),
        ))
        .unwrap_err();
        assert!(err.message.contains("origin"));
    }

    #[test]
    fn rejects_bad_progress_speed_and_heading() {
        let mut shipment = sea("S1", Coordinate::new(2.0, 2.0));
        if let Shipment::Sea(inner) = &mut shipment {
            inner.header.progress = 101;
        }
        assert!(validate_shipment(&shipment).is_err());

        let mut shipment = sea("S1", Coordinate::new(2.0, 2.0));
        if let Shipment::Sea(inner) = &mut shipment {
            inner.positions.current.speed_knots = Some(-1.0);
        }
        assert!(validate_shipment(&shipment).is_err());

        let mut shipment = sea("S1", Coordinate::new(2.0, 2.0));
        if let Shipment::Sea(inner) = &mut shipment {
            inner.positions.current.heading = Some(361.0);
        }
        assert!(validate_shipment(&shipment).is_err());
    }

    #[test]
    fn rejects_empty_and_duplicate_ids() {
        assert!(validate_shipment(&sea("  ", Coordinate::new(0.0, 0.0))).is_err());
        let shipments = vec![
            sea("S1", Coordinate::new(2.0, 2.0)),
            sea("S1", Coordinate::new(3.0, 3.0)),
        ];
        let err = validate_dataset(&shipments).unwrap_err();
        assert!(err.message.contains("duplicate"));
    }
}
