//! Persisted equalizer settings
//!
//! A plain snapshot of the control surface in the linear domain, suitable for
//! saving alongside a user profile and restoring into a new stream.

use grapheq_core::Result;
use serde::{Deserialize, Serialize};

/// Snapshot of preamp and band gains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqSettings {
    /// Linear preamp per channel
    pub preamp: Vec<f32>,

    /// Linear band gain, one row per band holding one value per channel
    pub bands: Vec<Vec<f32>>,
}

impl EqSettings {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
