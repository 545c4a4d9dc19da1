//! JSON frame configuration: schema, layout order and sample frames.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, schema::FieldDef, schema::Schema};

/// A complete frame description as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameConfig {
    pub sensors: Schema,
    /// Field names in physical frame order.
    #[serde(default)]
    pub order: Vec<String>,
    /// Example frames as hex strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
}

impl FrameConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: FrameConfig = serde_json::from_str(text)?;
        config.sensors.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn sensor(&self, name: &str) -> Result<&FieldDef, ConfigError> {
        self.sensors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSensor {
                name: name.to_string(),
            })
    }

    /// Pretty JSON of a single sensor definition.
    pub fn sensor_json(&self, name: &str) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self.sensor(name)?)?)
    }
}
