//! Game settings
//!
//! Read from a JSON file next to the binary; every field is optional and
//! falls back to the built-in defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{SimConfig, ZeroScoreTrail};

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "point-snake.json";

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "could not read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Player speed (NDC units per second)
    pub player_speed: f32,
    /// Player/enemy hit distance
    pub collision_radius: f32,
    /// Trail behavior before the first catch
    pub zero_score_trail: ZeroScoreTrail,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    /// Sync presentation to the display refresh rate
    pub vsync: bool,
    /// Point sprite size in pixels
    pub point_size: f32,

    // === Diagnostics ===
    /// Seconds between FPS debug lines
    pub fps_log_interval: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            collision_radius: COLLISION_RADIUS,
            zero_score_trail: ZeroScoreTrail::default(),
            seed: None,

            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            vsync: true,
            point_size: POINT_SIZE,

            fps_log_interval: 1.0,
        }
    }
}

impl Settings {
    /// Load settings from `path`; a missing file means defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(SettingsError::Io(e)),
        };
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.player_speed > 0.0 && self.player_speed.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        if !(self.collision_radius > 0.0 && self.collision_radius.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "collision_radius must be positive, got {}",
                self.collision_radius
            )));
        }
        if !(self.point_size > 0.0 && self.point_size.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "point_size must be positive, got {}",
                self.point_size
            )));
        }
        if !(self.fps_log_interval > 0.0 && self.fps_log_interval.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "fps_log_interval must be positive, got {}",
                self.fps_log_interval
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// The part of the settings the frame step reads
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            player_speed: self.player_speed,
            collision_radius: self.collision_radius,
            zero_score_trail: self.zero_score_trail,
        }
    }
}
