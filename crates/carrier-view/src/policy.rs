use carrier_geo::{Coordinate, DEFAULT_ARC_SEGMENTS};
use serde::{Deserialize, Serialize};

/// Fixed viewport and fitting parameters.
///
/// The overview is a constant world view, independent of the dataset extent.
/// Air fits use a lower zoom ceiling than sea fits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPolicy {
    pub world_center: Coordinate,
    pub world_zoom: f64,
    pub sea_padding_px: u32,
    pub sea_max_zoom: f64,
    pub air_padding_px: u32,
    pub air_max_zoom: f64,
    pub arc_segments: usize,
}

impl Default for ViewPolicy {
    fn default() -> Self {
        Self {
            world_center: Coordinate::new(25.0, 10.0),
            world_zoom: 2.0,
            sea_padding_px: 60,
            sea_max_zoom: 6.0,
            air_padding_px: 80,
            air_max_zoom: 5.0,
            arc_segments: DEFAULT_ARC_SEGMENTS,
        }
    }
}

impl ViewPolicy {
    pub fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments.max(1);
        self
    }
}
