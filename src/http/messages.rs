use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HeartbeatMessage {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

impl HeartbeatMessage {
    pub fn new() -> Self {
        Self {
            status: "alive",
            timestamp: Utc::now(),
        }
    }
}

impl Default for HeartbeatMessage {
    fn default() -> Self {
        Self::new()
    }
}

/// Body posted by the sensor, `moistureLevel` is checked for presence in the handler
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MoistureUpdate {
    #[serde(rename = "moistureLevel")]
    pub moisture_level: Option<f64>,
}

/// Latest moisture level as served to the client
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MoistureReport {
    #[serde(rename = "moistureLevel")]
    pub moisture_level: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateAck {
    pub message: &'static str,
}

impl UpdateAck {
    pub fn updated() -> Self {
        Self {
            message: "Moisture level updated",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    error: &'static str,
}

impl ErrorMessage {
    pub fn new(error: &'static str) -> Self {
        Self { error }
    }
}
