pub mod axumstate;
pub mod config;
pub mod error;
pub mod http;

pub use axumstate::{AxumState, MoistureState};
pub use config::RelayConfig;
pub use error::RelayError;
pub use http::app;
