use axum::Router;
use axum::routing::{get, post};

use crate::axumstate::AxumState;

pub mod get;
pub mod messages;
pub mod post;

pub use get::{get_heartbeat, get_moisture_level};
pub use post::post_moisture_level;

/// Set up the Axum router serving the sensor and the client
pub fn app(state: AxumState) -> Router {
    Router::new()
        // GET endpoints
        .route("/moisture", get(get_moisture_level))
        .route("/heartbeat", get(get_heartbeat))
        // POST endpoints
        .route("/api", post(post_moisture_level))
        // Give the routers access to the application state
        .with_state(state)
}
