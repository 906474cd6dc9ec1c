use crate::display::{DisplayGeometry, Viewport};
use crate::geometry::{compute_air_geometry, compute_sea_geometry, overview_marker};
use crate::policy::ViewPolicy;
use carrier_core::{Shipment, ShipmentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Overview,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedView {
    pub mode: ViewMode,
    /// Set only in detail mode.
    pub selected: Option<ShipmentId>,
    pub geometry: DisplayGeometry,
}

/// Picks overview or detail for the current selection and computes its geometry.
///
/// A selection that names no shipment in `shipments` resolves to the overview,
/// the same as no selection at all.
pub fn resolve(shipments: &[Shipment], selected: Option<&str>, policy: &ViewPolicy) -> ResolvedView {
    let matched = selected.and_then(|id| shipments.iter().find(|shipment| shipment.id() == id));

    match matched {
        Some(shipment) => ResolvedView {
            mode: ViewMode::Detail,
            selected: Some(shipment.id().clone()),
            geometry: match shipment {
                Shipment::Sea(sea) => compute_sea_geometry(sea, policy),
                Shipment::Air(air) => compute_air_geometry(air, policy),
            },
        },
        None => ResolvedView {
            mode: ViewMode::Overview,
            selected: None,
            geometry: overview(shipments, policy),
        },
    }
}

fn overview(shipments: &[Shipment], policy: &ViewPolicy) -> DisplayGeometry {
    DisplayGeometry {
        markers: shipments
            .iter()
            .map(|shipment| overview_marker(shipment, policy))
            .collect(),
        polylines: Vec::new(),
        viewport: Viewport::Center {
            center: policy.world_center,
            zoom: policy.world_zoom,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrier_core::load_dataset_str;

    fn shipments() -> Vec<Shipment> {
        load_dataset_str(
            r#"{ "shipments": [
                { "id": "S1", "type": "sea",
                  "positions": { "historical": [{ "lat": 1, "lng": 1 }],
                                 "current": { "lat": 2, "lng": 2 },
                                 "predicted": [{ "lat": 3, "lng": 3 }] } },
                { "id": "A1", "type": "air", "progress": 40,
                  "positions": {
                    "origin": { "lat": 0, "lng": 0, "airport_code": "ORG", "airport_name": "", "city": "", "country": "" },
                    "destination": { "lat": 10, "lng": 0, "airport_code": "DST", "airport_name": "", "city": "", "country": "" }
                  } }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn no_selection_is_overview() {
        let view = resolve(&shipments(), None, &ViewPolicy::default());
        assert_eq!(view.mode, ViewMode::Overview);
        assert!(view.selected.is_none());
        assert_eq!(view.geometry.markers.len(), 2);
        assert!(view.geometry.polylines.is_empty());
    }

    #[test]
    fn stale_selection_falls_back_to_overview() {
        let view = resolve(&shipments(), Some("GONE"), &ViewPolicy::default());
        assert_eq!(view.mode, ViewMode::Overview);
        assert_eq!(view.geometry.markers.len(), 2);
    }

    #[test]
    fn selection_dispatches_on_variant() {
        let data = shipments();
        let sea = resolve(&data, Some("S1"), &ViewPolicy::default());
        assert_eq!(sea.mode, ViewMode::Detail);
        assert_eq!(sea.selected.as_ref().map(|id| id.as_str()), Some("S1"));
        assert_eq!(sea.geometry.polylines.len(), 2);

        let air = resolve(&data, Some("A1"), &ViewPolicy::default());
        assert_eq!(air.mode, ViewMode::Detail);
        assert_eq!(air.geometry.polylines.len(), 1);
    }

    #[test]
    fn overview_viewport_ignores_data_extent() {
        let policy = ViewPolicy::default();
        let full = resolve(&shipments(), None, &policy);
        let empty = resolve(&[], None, &policy);
        assert_eq!(full.geometry.viewport, empty.geometry.viewport);
        assert_eq!(
            full.geometry.viewport,
            Viewport::Center {
                center: policy.world_center,
                zoom: policy.world_zoom,
            }
        );
    }
}
