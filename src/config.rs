//! Hill-field generation parameters and presets

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};
use crate::smooth::SmoothParams;

/// Largest radius a host may request, in cells.
pub const MAX_RADIUS_LIMIT: usize = 100;

/// When the smoothing filter runs during generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothSchedule {
    /// After every stamped hill (O(hills x area))
    #[default]
    EachHill,
    /// Once, after all hills are stamped
    Once,
    /// Never; leaves raw stamps
    Never,
}

impl std::fmt::Display for SmoothSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EachHill => write!(f, "each-hill"),
            Self::Once => write!(f, "once"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Parameters for one hill-field generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Lower bound for sampled peak heights, in (0, 1]
    pub min_height: f32,
    /// Upper bound for sampled peak heights, in (0, 1]
    pub max_height: f32,
    /// Lower bound for sampled radii, in cells
    pub min_radius: usize,
    /// Upper bound (exclusive unless equal to `min_radius`) for sampled radii
    pub max_radius: usize,
    /// Number of hills stamped per run
    pub hill_count: usize,
    pub smoothing: SmoothParams,
    pub schedule: SmoothSchedule,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        HillPreset::Gentle.config()
    }
}

impl GenerationConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Largest radius the sampler can produce.
    pub fn largest_radius(&self) -> usize {
        if self.max_radius > self.min_radius {
            self.max_radius - 1
        } else {
            self.min_radius
        }
    }

    /// Check bounds independent of any grid.
    pub fn validate(&self) -> Result<()> {
        let height_ok = |h: f32| h.is_finite() && h > 0.0 && h <= 1.0;
        if !height_ok(self.min_height) || !height_ok(self.max_height) {
            return Err(config_error(format!(
                "heights must lie in (0, 1], got {}..{}",
                self.min_height, self.max_height
            )));
        }
        if self.min_height > self.max_height {
            return Err(config_error(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            )));
        }

        let radius_ok = |r: usize| (1..=MAX_RADIUS_LIMIT).contains(&r);
        if !radius_ok(self.min_radius) || !radius_ok(self.max_radius) {
            return Err(config_error(format!(
                "radii must lie in [1, {}], got {}..{}",
                MAX_RADIUS_LIMIT, self.min_radius, self.max_radius
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(config_error(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }

        let k = self.smoothing.strength;
        if !(0.0..=1.0).contains(&k) {
            return Err(config_error(format!("smoothing strength {} outside [0, 1]", k)));
        }

        Ok(())
    }

    /// Check bounds plus the fit of the largest hill inside a `width x height` grid.
    pub fn validate_for_grid(&self, width: usize, height: usize) -> Result<()> {
        self.validate()?;
        let diameter = self.largest_radius() * 2;
        if self.hill_count > 0 && diameter > width.min(height) {
            return Err(config_error(format!(
                "radius {} needs at least a {}x{} grid, got {}x{}",
                self.largest_radius(), diameter, diameter, width, height
            )));
        }
        Ok(())
    }
}

fn config_error(msg: String) -> TerrainError {
    TerrainError::Configuration(msg)
}

/// Named parameter sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HillPreset {
    /// Many small, low bumps
    #[default]
    Gentle,
    /// Fewer, broader hills
    Rolling,
    /// Tall, steep peaks
    Rugged,
}

impl HillPreset {
    pub fn all() -> &'static [Self] {
        &[Self::Gentle, Self::Rolling, Self::Rugged]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Gentle => "Dense field of faint bumps",
            Self::Rolling => "Broad rolling hills",
            Self::Rugged => "Steep, high peaks",
        }
    }

    pub fn config(&self) -> GenerationConfig {
        let (min_height, max_height, min_radius, max_radius, hill_count) = match self {
            Self::Gentle => (0.00025, 0.00075, 1, 10, 1000),
            Self::Rolling => (0.05, 0.2, 10, 40, 60),
            Self::Rugged => (0.3, 0.9, 4, 16, 150),
        };
        GenerationConfig {
            min_height,
            max_height,
            min_radius,
            max_radius,
            hill_count,
            smoothing: SmoothParams::default(),
            schedule: SmoothSchedule::default(),
        }
    }
}

impl std::fmt::Display for HillPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gentle => write!(f, "gentle"),
            Self::Rolling => write!(f, "rolling"),
            Self::Rugged => write!(f, "rugged"),
        }
    }
}
