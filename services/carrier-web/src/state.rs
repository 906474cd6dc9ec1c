use carrier_config::{MapConfig, ServiceConfig};
use carrier_core::Shipment;
use carrier_render::{Backend, Projection};
use carrier_view::ViewPolicy;
use std::sync::Arc;

pub struct AppState {
    pub config: ServiceConfig,
    /// Loaded once at startup and never mutated; every request recomputes from it.
    pub shipments: Arc<[Shipment]>,
    pub policy: ViewPolicy,
    pub default_backend: Backend,
    pub projection: Projection,
}

impl AppState {
    pub fn new(config: ServiceConfig, map: &MapConfig, shipments: Vec<Shipment>) -> Self {
        let default_backend = map.backend.parse().unwrap_or_else(|_| {
            tracing::warn!(backend = %map.backend, "unknown map backend, using leaflet");
            Backend::Leaflet
        });
        let projection = map.projection.parse().unwrap_or_else(|_| {
            tracing::warn!(projection = %map.projection, "unknown projection, using mercator");
            Projection::Mercator
        });
        Self {
            config,
            shipments: shipments.into(),
            policy: ViewPolicy::default().with_arc_segments(map.arc_segments),
            default_backend,
            projection,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/shipments.json"));
    let shipments = carrier_core::load_dataset_str(raw).expect("bundled dataset is valid");
    let config = ServiceConfig::from_lookup("carrier-web", |_| None);
    let map = MapConfig::from_lookup(|_| None);
    AppState::new(config, &map, shipments)
}
