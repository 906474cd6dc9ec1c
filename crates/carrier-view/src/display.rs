use carrier_core::ShipmentId;
use carrier_geo::{BoundingBox, Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Ship,
    Plane,
    OriginPort,
    DestinationPort,
    InFlightPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Historical,
    Predicted,
    AirRoute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub role: MarkerRole,
    pub position: Coordinate,
    pub shipment_id: ShipmentId,
    /// Vehicle markers of the selected shipment are drawn larger.
    #[serde(default)]
    pub emphasized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_degrees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u8>,
}

impl Marker {
    pub fn new(role: MarkerRole, position: Coordinate, shipment_id: ShipmentId) -> Self {
        Self {
            role,
            position,
            shipment_id,
            emphasized: false,
            label: None,
            speed_knots: None,
            heading_degrees: None,
            progress_percent: None,
        }
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn with_progress(mut self, progress_percent: u8) -> Self {
        self.progress_percent = Some(progress_percent);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub style: LineStyle,
    pub points: Vec<Coordinate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    Center {
        center: Coordinate,
        zoom: f64,
    },
    FitBounds {
        bounds: BoundingBox,
        padding_px: u32,
        max_zoom: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
    pub viewport: Viewport,
}

impl DisplayGeometry {
    pub fn markers_with_role(&self, role: MarkerRole) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |marker| marker.role == role)
    }

    pub fn polyline(&self, style: LineStyle) -> Option<&Polyline> {
        self.polylines.iter().find(|line| line.style == style)
    }
}
