use crate::axumstate::AxumState;
use crate::error::RelayError;
use crate::http::messages::{MoistureUpdate, UpdateAck};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::*;

/// POST request handler for the sensor to report its latest moisture level
#[axum::debug_handler]
pub async fn post_moisture_level(
    state: axum::extract::State<AxumState>,
    payload: Result<Json<MoistureUpdate>, JsonRejection>,
) -> Result<Json<UpdateAck>, RelayError> {
    // Unparseable bodies, non-objects and non-numeric values are all malformed input
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => {
            warn!("POST moisture level rejected: {}", rejection.body_text());
            return Err(RelayError::InvalidData);
        }
    };

    let Some(level) = update.moisture_level else {
        warn!("POST moisture level rejected: moistureLevel missing or null");
        return Err(RelayError::InvalidData);
    };

    state.moisture.set_level(level)?;
    info!("Updated moisture level: {}", level);

    Ok(Json(UpdateAck::updated()))
}
