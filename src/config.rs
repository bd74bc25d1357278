//! Frame configuration loaded from JSON
//!
//! ```json
//! { "origin": { "longitude": 121.5750212, "latitude": 25.0783615 }, "eager": true }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::origin::ReferenceOrigin;
use crate::transform::LocalFrame;
use crate::types::GeoPoint;

/// Describes a local frame: its origin and when to establish it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub origin: GeoPoint,
    /// Establish the projection when the frame is built instead of on first use
    #[serde(default)]
    pub eager: bool,
}

impl FrameConfig {
    pub fn new(origin: GeoPoint) -> Self {
        Self { origin, eager: false }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the frame this configuration describes
    pub fn build_frame(&self) -> Result<LocalFrame> {
        if self.eager {
            LocalFrame::established(self.origin)
        } else {
            Ok(LocalFrame::new(ReferenceOrigin::new(self.origin)))
        }
    }
}
