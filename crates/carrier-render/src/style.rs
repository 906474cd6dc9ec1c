use carrier_view::{DisplayGeometry, LineStyle, Marker, MarkerRole};
use serde_json::{json, Value};

pub(crate) const SEA_COLOR: &str = "#ec4899";
pub(crate) const AIR_COLOR: &str = "#14b8a6";
pub(crate) const DESTINATION_COLOR: &str = "#6366f1";
pub(crate) const VEHICLE_Z_BOOST: i32 = 1000;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Shadow {
    pub color: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LineLook {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub dashed: bool,
    pub shadow: Option<Shadow>,
}

pub(crate) fn line_look(style: LineStyle) -> LineLook {
    match style {
        LineStyle::Historical => LineLook {
            color: SEA_COLOR,
            weight: 4.0,
            opacity: 1.0,
            dashed: false,
            shadow: Some(Shadow {
                color: "#00000020",
                weight: 8.0,
            }),
        },
        LineStyle::Predicted => LineLook {
            color: SEA_COLOR,
            weight: 3.0,
            opacity: 0.5,
            dashed: true,
            shadow: None,
        },
        LineStyle::AirRoute => LineLook {
            color: AIR_COLOR,
            weight: 4.0,
            opacity: 1.0,
            dashed: false,
            shadow: Some(Shadow {
                color: "#00000015",
                weight: 8.0,
            }),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkerLook {
    pub icon: &'static str,
    pub color: &'static str,
    pub size: u32,
    pub z_boost: i32,
}

pub(crate) fn marker_look(marker: &Marker, air_palette: bool) -> MarkerLook {
    let vehicle_size = if marker.emphasized { 56 } else { 44 };
    let z_boost = if marker.emphasized { VEHICLE_Z_BOOST } else { 0 };
    match marker.role {
        MarkerRole::Ship => MarkerLook {
            icon: "ship",
            color: SEA_COLOR,
            size: vehicle_size,
            z_boost,
        },
        MarkerRole::Plane | MarkerRole::InFlightPosition => MarkerLook {
            icon: "plane",
            color: AIR_COLOR,
            size: vehicle_size,
            z_boost,
        },
        MarkerRole::OriginPort => MarkerLook {
            icon: "origin",
            color: if air_palette { AIR_COLOR } else { SEA_COLOR },
            size: 18,
            z_boost: 0,
        },
        MarkerRole::DestinationPort => MarkerLook {
            icon: "destination",
            color: DESTINATION_COLOR,
            size: 18,
            z_boost: 0,
        },
    }
}

pub(crate) fn uses_air_palette(geometry: &DisplayGeometry) -> bool {
    geometry.polyline(LineStyle::AirRoute).is_some()
}

pub(crate) fn popup(marker: &Marker) -> Value {
    let title = marker
        .label
        .clone()
        .unwrap_or_else(|| marker.shipment_id.to_string());
    let mut lines = Vec::new();
    if let Some(speed) = marker.speed_knots {
        lines.push(format!("Speed: {speed} knots"));
    }
    if let Some(heading) = marker.heading_degrees {
        lines.push(format!("Heading: {heading}°"));
    }
    if let Some(progress) = marker.progress_percent {
        lines.push(format!("Progress: {progress}%"));
    }
    json!({
        "title": title,
        "shipmentId": marker.shipment_id,
        "lines": lines,
    })
}

#[cfg(test)]
pub(crate) fn is_marker_command(command: &Value) -> bool {
    command["layer"] == "marker"
}

#[cfg(test)]
pub(crate) fn is_route_command(command: &Value) -> bool {
    command["layer"] == "route"
}
