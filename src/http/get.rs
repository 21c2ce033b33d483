use crate::axumstate::AxumState;
use crate::error::RelayError;
use crate::http::messages::{HeartbeatMessage, MoistureReport};
use axum::Json;
use tracing::*;

/// Returns the latest moisture level, the default until a sensor has posted
#[axum::debug_handler]
pub async fn get_moisture_level(
    state: axum::extract::State<AxumState>,
) -> Result<Json<MoistureReport>, RelayError> {
    let moisture_level = state.moisture.level()?;
    debug!("GET moisture returning level: {}", moisture_level);
    Ok(Json(MoistureReport { moisture_level }))
}

/// Return a heartbeat message
#[axum::debug_handler]
pub async fn get_heartbeat(_state: axum::extract::State<AxumState>) -> Json<HeartbeatMessage> {
    Json(HeartbeatMessage::new())
}
