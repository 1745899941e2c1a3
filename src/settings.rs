use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::config::BrushSettings;
use crate::tools::Tool;

/// Storage key the host keeps tool settings under
pub const SETTINGS_KEY: &str = "doodle_tool_settings";

/// Errors that can occur while persisting tool settings
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to (de)serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Tool choices that survive a restart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // settings written by older versions fill the gaps with defaults
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Color,
    pub stroke_width: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        let brush = BrushSettings::default();
        Self {
            tool: Tool::default(),
            color: brush.default_color,
            stroke_width: brush.default_size,
        }
    }
}

impl ToolSettings {
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format() {
        let settings = ToolSettings {
            tool: Tool::Rectangle,
            color: Color::rgb(0x22, 0xc5, 0x5e),
            stroke_width: 12,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(json, r##"{"tool":"Rectangle","color":"#22c55e","stroke_width":12}"##);
        assert_eq!(ToolSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = ToolSettings::from_json(r#"{"tool":"Fill"}"#).unwrap();
        assert_eq!(settings.tool, Tool::Fill);
        assert_eq!(settings.stroke_width, 10);
        assert_eq!(settings.color, Color::BLACK);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = ToolSettings::from_json(r#"{"color":"not-a-color"}"#).unwrap_err();
        assert!(matches!(err, PersistenceError::Serialization(_)));
    }
}
