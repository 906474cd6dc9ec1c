mod routes;
mod state;

use actix_web::{web, App, HttpServer};
use carrier_config::{MapConfig, ServiceConfig};
use carrier_core::load_dataset_file;
use carrier_observability::{init, log_startup, record_dataset_size, ObservabilityConfig};
use state::AppState;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("carrier-web");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let shipments = load_dataset_file(&config.data_path).map_err(|err| {
        tracing::error!(path = %config.data_path, error = %err, "failed to load shipment dataset");
        io::Error::new(io::ErrorKind::InvalidData, err.message)
    })?;
    tracing::info!(
        path = %config.data_path,
        count = shipments.len(),
        "shipment dataset loaded"
    );
    record_dataset_size(shipments.len());

    let map_config = MapConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(config, &map_config, shipments));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
