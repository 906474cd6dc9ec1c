use crate::display::{DisplayGeometry, LineStyle, Marker, MarkerRole, Polyline, Viewport};
use crate::policy::ViewPolicy;
use carrier_core::{AirShipment, SeaShipment, Shipment};
use carrier_geo::{arc, point_at_progress, BoundingBox, Coordinate};

pub fn compute_sea_geometry(shipment: &SeaShipment, policy: &ViewPolicy) -> DisplayGeometry {
    let id = &shipment.header.id;
    let positions = &shipment.positions;
    let current = positions.current.coordinate();
    let mut markers = Vec::with_capacity(3);
    let mut polylines = Vec::with_capacity(2);

    if let Some(origin) = positions.historical.first() {
        let mut points: Vec<Coordinate> = positions
            .historical
            .iter()
            .map(|point| point.coordinate)
            .collect();
        points.push(current);
        polylines.push(Polyline {
            style: LineStyle::Historical,
            points,
        });
        markers.push(
            Marker::new(MarkerRole::OriginPort, origin.coordinate, id.clone())
                .with_label(origin.location.clone()),
        );
    }

    let mut ship = Marker::new(MarkerRole::Ship, current, id.clone())
        .emphasized()
        .with_label(Some(shipment.vessel.name.clone()))
        .with_progress(shipment.header.progress);
    ship.speed_knots = positions.current.speed_knots;
    ship.heading_degrees = positions.current.heading;
    markers.push(ship);

    if let Some(destination) = positions.predicted.last() {
        let points = std::iter::once(current)
            .chain(positions.predicted.iter().map(|point| point.coordinate))
            .collect();
        polylines.push(Polyline {
            style: LineStyle::Predicted,
            points,
        });
        markers.push(
            Marker::new(MarkerRole::DestinationPort, destination.coordinate, id.clone())
                .with_label(destination.location.clone()),
        );
    }

    let mut bounds = BoundingBox::around(current);
    for coord in positions.route() {
        bounds.extend(coord);
    }

    DisplayGeometry {
        markers,
        polylines,
        viewport: Viewport::FitBounds {
            bounds,
            padding_px: policy.sea_padding_px,
            max_zoom: policy.sea_max_zoom,
        },
    }
}

pub fn compute_air_geometry(shipment: &AirShipment, policy: &ViewPolicy) -> DisplayGeometry {
    let id = &shipment.header.id;
    let origin = &shipment.positions.origin;
    let destination = &shipment.positions.destination;
    let progress = shipment.header.progress;
    let route = arc(origin.coordinate, destination.coordinate, policy.arc_segments);

    let mut markers = vec![
        Marker::new(MarkerRole::OriginPort, origin.coordinate, id.clone())
            .with_label(Some(origin.airport_code.clone())),
        Marker::new(MarkerRole::DestinationPort, destination.coordinate, id.clone())
            .with_label(Some(destination.airport_code.clone())),
    ];

    // At 0 and 100 the aircraft is on the ground at one of the airports.
    if progress > 0 && progress < 100 {
        if let Some(position) = point_at_progress(&route, progress) {
            markers.push(
                Marker::new(MarkerRole::InFlightPosition, position, id.clone())
                    .emphasized()
                    .with_label(flight_label(shipment))
                    .with_progress(progress),
            );
        }
    }

    let mut bounds = BoundingBox::around(origin.coordinate);
    bounds.extend(destination.coordinate);

    DisplayGeometry {
        markers,
        polylines: vec![Polyline {
            style: LineStyle::AirRoute,
            points: route,
        }],
        viewport: Viewport::FitBounds {
            bounds,
            padding_px: policy.air_padding_px,
            max_zoom: policy.air_max_zoom,
        },
    }
}

/// The single marker a shipment gets in the overview.
///
/// Sea shipments sit at their current position. Air shipments sit on the arc
/// at their progress point; at 0 % that is the origin airport, so a scheduled
/// flight still shows up on the map.
pub fn overview_marker(shipment: &Shipment, policy: &ViewPolicy) -> Marker {
    match shipment {
        Shipment::Sea(sea) => {
            let mut marker = Marker::new(
                MarkerRole::Ship,
                sea.positions.current.coordinate(),
                sea.header.id.clone(),
            )
            .with_label(Some(sea.vessel.name.clone()))
            .with_progress(sea.header.progress);
            marker.speed_knots = sea.positions.current.speed_knots;
            marker.heading_degrees = sea.positions.current.heading;
            marker
        }
        Shipment::Air(air) => {
            let origin = air.positions.origin.coordinate;
            let position = if air.header.progress == 0 {
                origin
            } else {
                let route = arc(origin, air.positions.destination.coordinate, policy.arc_segments);
                point_at_progress(&route, air.header.progress).unwrap_or(origin)
            };
            Marker::new(MarkerRole::Plane, position, air.header.id.clone())
                .with_label(flight_label(air))
                .with_progress(air.header.progress)
        }
    }
}

fn flight_label(shipment: &AirShipment) -> Option<String> {
    let flight = &shipment.flight;
    let label = format!("{} {}", flight.carrier, flight.number);
    Some(label.trim().to_string())
}
