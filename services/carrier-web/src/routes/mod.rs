pub mod common;
pub mod health;
pub mod shipments;
pub mod view;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(shipments::list_shipments)
        .service(view::view);
}
