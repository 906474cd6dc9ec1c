use actix_web::{get, web, HttpResponse};
use carrier_core::{filter_shipments, Shipment, ShipmentFilter, ShipmentStats};
use serde::{Deserialize, Serialize};

use crate::routes::common::bad_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    shipments: Vec<&'a Shipment>,
    /// Always over the whole dataset, not the filtered slice.
    stats: ShipmentStats,
}

#[get("/api/shipments")]
pub async fn list_shipments(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let filter = match query.filter.as_deref() {
        None => ShipmentFilter::All,
        Some(raw) => match raw.parse::<ShipmentFilter>() {
            Ok(filter) => filter,
            Err(()) => return bad_request(format!("unknown filter '{raw}'")),
        },
    };
    let search = query.q.as_deref().unwrap_or_default();

    HttpResponse::Ok().json(ListResponse {
        shipments: filter_shipments(&state.shipments, filter, search),
        stats: ShipmentStats::from_shipments(&state.shipments),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn lists_everything_by_default() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(list_shipments),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/shipments").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["shipments"].as_array().unwrap().len(), 6);
        assert_eq!(body["stats"]["total"], 6);
        assert_eq!(body["stats"]["in_transit"], 2);
        assert_eq!(body["stats"]["sea"], 3);
        assert_eq!(body["stats"]["air"], 3);
    }

    #[actix_web::test]
    async fn filters_and_searches() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(list_shipments),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/shipments?filter=air&q=new%20york")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let shipments = body["shipments"].as_array().unwrap();
        assert_eq!(shipments.len(), 1);
        assert_eq!(shipments[0]["id"], "AIR-240201");
        assert_eq!(body["stats"]["total"], 6);
    }

    #[actix_web::test]
    async fn rejects_unknown_filter() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(list_shipments),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/shipments?filter=rail")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
