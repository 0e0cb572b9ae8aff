//! Data-driven game balance
//!
//! Loaded from a JSON file when one is given. Missing fields fall back to the
//! defaults in `consts`, so a file only needs the values it changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Physics and fuel balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vertical acceleration with the main engine off (negative is down)
    pub gravity: f32,
    /// Sideways thruster acceleration
    pub thrust_horizontal: f32,
    /// Main engine acceleration
    pub thrust_vertical: f32,
    /// Lander tilt while thrusting sideways (radians)
    pub tilt_angle: f32,
    /// Starting fuel
    pub fuel_capacity: u32,
    /// Fuel per thruster per frame
    pub fuel_per_thrust: u32,
    /// Fuel gauge width lost per thruster per frame
    pub fuel_gauge_drain: f32,
    /// Speed cap for every body
    pub max_speed: f32,
    /// Player x beyond ±this loses the run
    pub arena_half_width: f32,
    /// Player spawn point
    pub start_position: Vec2,
    /// Seconds the banner stays up after the run ends
    pub end_screen_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            thrust_horizontal: THRUST_HORIZONTAL,
            thrust_vertical: THRUST_VERTICAL,
            tilt_angle: TILT_ANGLE,
            fuel_capacity: FUEL_CAPACITY,
            fuel_per_thrust: FUEL_PER_THRUST,
            fuel_gauge_drain: FUEL_GAUGE_DRAIN,
            max_speed: MAX_SPEED,
            arena_half_width: ARENA_HALF_WIDTH,
            start_position: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            end_screen_secs: END_SCREEN_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("gravity", self.gravity),
            ("thrust_horizontal", self.thrust_horizontal),
            ("thrust_vertical", self.thrust_vertical),
            ("tilt_angle", self.tilt_angle),
            ("fuel_gauge_drain", self.fuel_gauge_drain),
            ("max_speed", self.max_speed),
            ("arena_half_width", self.arena_half_width),
            ("start_position.x", self.start_position.x),
            ("start_position.y", self.start_position.y),
            ("end_screen_secs", self.end_screen_secs),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::Invalid(format!("{name} must be finite")));
        }
        if self.max_speed <= 0.0 {
            return Err(TuningError::Invalid("max_speed must be positive".into()));
        }
        if self.arena_half_width <= 0.0 {
            return Err(TuningError::Invalid(
                "arena_half_width must be positive".into(),
            ));
        }
        if self.fuel_gauge_drain < 0.0 || self.end_screen_secs < 0.0 {
            return Err(TuningError::Invalid(
                "fuel_gauge_drain and end_screen_secs must not be negative".into(),
            ));
        }
        if Duration::try_from_secs_f32(self.end_screen_secs).is_err() {
            return Err(TuningError::Invalid(
                "end_screen_secs is out of range".into(),
            ));
        }
        if self.start_position.x.abs() > self.arena_half_width {
            return Err(TuningError::Invalid(
                "start_position must be inside the arena".into(),
            ));
        }
        Ok(())
    }

    /// How long to hold the final frame; zero if the value can't be a `Duration`
    pub fn end_screen(&self) -> Duration {
        Duration::try_from_secs_f32(self.end_screen_secs).unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, -0.2);
        assert_eq!(tuning.thrust_horizontal, 0.75);
        assert_eq!(tuning.thrust_vertical, 0.5);
        assert_eq!(tuning.fuel_capacity, 5000);
        assert_eq!(tuning.start_position, Vec2::new(-3.75, 3.0));
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.end_screen(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": -0.5, "fuel_capacity": 10 }"#).unwrap();
        assert_eq!(tuning.gravity, -0.5);
        assert_eq!(tuning.fuel_capacity, 10);
        assert_eq!(tuning.thrust_horizontal, THRUST_HORIZONTAL);
        assert_eq!(tuning.max_speed, MAX_SPEED);
    }

    #[test]
    fn test_json_roundtrip_via_file() {
        let tuning = Tuning {
            start_position: Vec2::new(1.0, 2.0),
            ..Tuning::default()
        };
        let path = std::env::temp_dir().join(format!("lunar_lander_tuning_{}.json", std::process::id()));
        std::fs::write(&path, tuning.to_json().unwrap()).unwrap();

        let loaded = Tuning::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, tuning);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "max_speed": 0.0 }"#,
            r#"{ "arena_half_width": -1.0 }"#,
            r#"{ "end_screen_secs": -2.0 }"#,
            r#"{ "end_screen_secs": 1e20 }"#,
            r#"{ "start_position": [9.0, 0.0] }"#,
        ] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, TuningError::Invalid(_)), "{json}");
        }
    }

    #[test]
    fn test_unvalidated_end_screen_never_panics() {
        let huge = Tuning {
            end_screen_secs: 1e20,
            ..Tuning::default()
        };
        assert_eq!(huge.end_screen(), Duration::ZERO);

        let negative = Tuning {
            end_screen_secs: -1.0,
            ..Tuning::default()
        };
        assert_eq!(negative.end_screen(), Duration::ZERO);
    }
}
