//! Gameplay settings
//!
//! Passed to a session at construction. Every key is optional when decoded
//! from JSON; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when settings are rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings could not be encoded: {0}")]
    Encode(serde_json::Error),
    #[error("`{field}` must be a positive, finite number (got {value})")]
    NotPositive { field: &'static str, value: f32 },
}

/// Tunable gameplay options (all values in pixels or pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Upward displacement per tick while ascending
    pub ascend_step: f32,
    /// Downward displacement per tick otherwise
    pub descend_step: f32,
    /// Leftward displacement of every obstacle pair per tick
    pub horizontal_speed: f32,
    /// Distance between consecutive pairs at round start
    pub horizontal_obstacle_spacing: f32,
    /// Vertical opening between the two obstacles of a pair
    pub vertical_gap_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ascend_step: 3.0,
            descend_step: 2.0,
            horizontal_speed: 1.0,
            horizontal_obstacle_spacing: 350.0,
            vertical_gap_size: 250.0,
        }
    }
}

impl Settings {
    /// Decode settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject zero, negative and non-finite values
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("ascend_step", self.ascend_step),
            ("descend_step", self.descend_step),
            ("horizontal_speed", self.horizontal_speed),
            ("horizontal_obstacle_spacing", self.horizontal_obstacle_spacing),
            ("vertical_gap_size", self.vertical_gap_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Encode settings as JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.ascend_step, 3.0);
        assert_eq!(s.descend_step, 2.0);
        assert_eq!(s.horizontal_speed, 1.0);
        assert_eq!(s.horizontal_obstacle_spacing, 350.0);
        assert_eq!(s.vertical_gap_size, 250.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_unset_keys_fall_back() {
        let s = Settings::from_json(r#"{ "horizontal_speed": 2.5 }"#).unwrap();
        assert_eq!(s.horizontal_speed, 2.5);
        assert_eq!(s.ascend_step, 3.0);
        assert_eq!(s.vertical_gap_size, 250.0);

        let empty = Settings::from_json("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Settings::from_json(r#"{ "vertical_gap_size": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::NotPositive {
                field: "vertical_gap_size",
                ..
            }
        ));

        let s = Settings {
            descend_step: -1.0,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            ascend_step: 4.0,
            ..Default::default()
        };
        let json = s.to_json().unwrap();
        assert!(json.contains("\"ascend_step\":4.0"));
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_non_finite_fails_to_decode() {
        // JSON has no NaN; it is written as null, which fails to decode as f32
        let s = Settings {
            ascend_step: f32::NAN,
            ..Default::default()
        };
        let json = s.to_json().unwrap();
        assert!(matches!(
            Settings::from_json(&json).unwrap_err(),
            SettingsError::Parse(_)
        ));
    }
}
