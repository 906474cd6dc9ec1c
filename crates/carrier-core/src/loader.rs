use crate::domain::Shipment;
use crate::error::{CarrierError, CarrierResult, ErrorCode};
use crate::validate::validate_dataset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a shipment dataset: `{"shipments": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentDataset {
    pub shipments: Vec<Shipment>,
}

pub fn load_dataset_str(raw: &str) -> CarrierResult<Vec<Shipment>> {
    let dataset: ShipmentDataset = serde_json::from_str(raw)
        .map_err(|err| CarrierError::invalid_input(format!("malformed dataset: {err}")))?;
    validate_dataset(&dataset.shipments)?;
    Ok(dataset.shipments)
}

pub fn load_dataset_file(path: impl AsRef<Path>) -> CarrierResult<Vec<Shipment>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| {
        CarrierError::new(
            ErrorCode::Io,
            format!("failed to read {}: {err}", path.display()),
        )
    })?;
    load_dataset_str(&raw)
}
