use actix_web::{get, web, HttpResponse};
use carrier_core::ShipmentId;
use carrier_observability::record_view;
use carrier_render::{renderer_for, Backend, Projection, RenderPlan};
use carrier_view::{resolve, DisplayGeometry, ViewMode};
use serde::{Deserialize, Serialize};

use crate::routes::common::bad_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub selected: Option<String>,
    pub backend: Option<String>,
    pub projection: Option<String>,
}

#[derive(Debug, Serialize)]
struct ViewResponse {
    mode: ViewMode,
    selected: Option<ShipmentId>,
    geometry: DisplayGeometry,
    plan: RenderPlan,
}

#[get("/api/view")]
pub async fn view(state: web::Data<AppState>, query: web::Query<ViewQuery>) -> HttpResponse {
    let backend = match query.backend.as_deref() {
        None => state.default_backend,
        Some(raw) => match raw.parse::<Backend>() {
            Ok(backend) => backend,
            Err(()) => return bad_request(format!("unknown map backend '{raw}'")),
        },
    };
    let projection = match query.projection.as_deref() {
        None => state.projection,
        Some(raw) => match raw.parse::<Projection>() {
            Ok(projection) => projection,
            Err(()) => return bad_request(format!("unknown projection '{raw}'")),
        },
    };
    let selected = query.selected.as_deref().filter(|id| !id.is_empty());

    let resolved = resolve(&state.shipments, selected, &state.policy);
    if let (Some(id), ViewMode::Overview) = (selected, resolved.mode) {
        tracing::debug!(selected = %id, "selection not in dataset, showing overview");
    }
    let mode_label = match resolved.mode {
        ViewMode::Overview => "overview",
        ViewMode::Detail => "detail",
    };
    record_view(mode_label, &backend.to_string());

    let plan = renderer_for(backend, projection).render(&resolved.geometry);
    HttpResponse::Ok().json(ViewResponse {
        mode: resolved.mode,
        selected: resolved.selected,
        geometry: resolved.geometry,
        plan,
    })
}
