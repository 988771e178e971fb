//! Host-side terrain session
//!
//! Owns a heightmap, a generator and a seeded random stream, and maps the
//! host's trigger events (key presses, menu commands) onto generation calls.

use std::str::FromStr;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GenerationConfig;
use crate::error::{Result, TerrainError};
use crate::generator::{GenerationStats, HillFieldGenerator};
use crate::grid;
use crate::tilemap::Tilemap;

/// A command triggered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerrainAction {
    /// Reset the terrain to zero height
    Flatten,
    /// Flatten and stamp a fresh hill field
    Regenerate,
    /// Raise one cell by `amount`
    Raise { x: usize, z: usize, amount: f32 },
}

impl TerrainAction {
    /// Default key bindings: `F` flattens, `E` regenerates.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'f' => Some(Self::Flatten),
            'e' => Some(Self::Regenerate),
            _ => None,
        }
    }
}

impl FromStr for TerrainAction {
    type Err = TerrainError;

    /// Parses `flatten`, `regenerate`, or `raise:x,z,amount`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "flatten" => return Ok(Self::Flatten),
            "regenerate" => return Ok(Self::Regenerate),
            _ => {}
        }

        let bad = || TerrainError::Configuration(format!("unknown action '{}'", s));
        let args = s.strip_prefix("raise:").ok_or_else(bad)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        Ok(Self::Raise {
            x: parts[0].parse().map_err(|_| bad())?,
            z: parts[1].parse().map_err(|_| bad())?,
            amount: parts[2].parse().map_err(|_| bad())?,
        })
    }
}

impl std::fmt::Display for TerrainAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flatten => write!(f, "flatten"),
            Self::Regenerate => write!(f, "regenerate"),
            Self::Raise { x, z, amount } => write!(f, "raise:{},{},{}", x, z, amount),
        }
    }
}

/// Terrain owned on behalf of a host.
pub struct TerrainSession {
    heightmap: Tilemap<f32>,
    generator: HillFieldGenerator,
    rng: ChaCha8Rng,
    seed: u64,
}

impl TerrainSession {
    pub fn new(width: usize, height: usize, config: GenerationConfig, seed: u64) -> Result<Self> {
        let generator = HillFieldGenerator::new(config)?;
        generator.config().validate_for_grid(width, height)?;
        Ok(Self {
            heightmap: Tilemap::new_with(width, height, 0.0f32),
            generator,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    /// Build the initial hill field.
    pub fn start(&mut self) -> Result<GenerationStats> {
        info!("Starting terrain session with seed {}", self.seed);
        self.generator.generate(&mut self.heightmap, &mut self.rng)
    }

    /// Run one host command. Returns generation stats for `Regenerate`.
    pub fn apply(&mut self, action: TerrainAction) -> Result<Option<GenerationStats>> {
        match action {
            TerrainAction::Flatten => {
                self.generator.flatten(&mut self.heightmap);
                Ok(None)
            }
            TerrainAction::Regenerate => {
                self.generator.generate(&mut self.heightmap, &mut self.rng).map(Some)
            }
            TerrainAction::Raise { x, z, amount } => {
                grid::raise_cell(&mut self.heightmap, x, z, amount)?;
                Ok(None)
            }
        }
    }

    pub fn heightmap(&self) -> &Tilemap<f32> {
        &self.heightmap
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GenerationConfig {
        self.generator.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HillPreset;

    fn session(seed: u64) -> TerrainSession {
        TerrainSession::new(48, 40, HillPreset::Rugged.config(), seed).unwrap()
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(TerrainAction::from_key('F'), Some(TerrainAction::Flatten));
        assert_eq!(TerrainAction::from_key('e'), Some(TerrainAction::Regenerate));
        assert_eq!(TerrainAction::from_key('q'), None);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("flatten".parse::<TerrainAction>().unwrap(), TerrainAction::Flatten);
        assert_eq!(" Regenerate ".parse::<TerrainAction>().unwrap(), TerrainAction::Regenerate);
        assert_eq!(
            "raise:3, 4, 0.25".parse::<TerrainAction>().unwrap(),
            TerrainAction::Raise { x: 3, z: 4, amount: 0.25 }
        );
        assert!("raise:3,4".parse::<TerrainAction>().is_err());
        assert!("erode".parse::<TerrainAction>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let action = TerrainAction::Raise { x: 7, z: 1, amount: 0.5 };
        assert_eq!(action.to_string().parse::<TerrainAction>().unwrap(), action);
    }

    #[test]
    fn test_start_then_flatten() {
        let mut s = session(3);
        let stats = s.start().unwrap();
        assert!(stats.hills_placed > 0);
        assert!(stats.max_height > 0.0);

        assert_eq!(s.apply(TerrainAction::Flatten).unwrap(), None);
        assert!(s.heightmap().iter().all(|(_, _, &h)| h == 0.0));
    }

    #[test]
    fn test_regenerate_advances_stream() {
        let mut s = session(9);
        s.start().unwrap();
        let first = s.heightmap().clone();
        s.apply(TerrainAction::Regenerate).unwrap();
        assert_ne!(*s.heightmap(), first);

        // A fresh session with the same seed replays the first field
        let mut replay = session(9);
        replay.start().unwrap();
        assert_eq!(*replay.heightmap(), first);
    }

    #[test]
    fn test_raise_action() {
        let mut s = session(1);
        s.apply(TerrainAction::Raise { x: 2, z: 2, amount: 0.3 }).unwrap();
        assert!((*s.heightmap().get(2, 2) - 0.3).abs() < 1e-6);

        let err = s.apply(TerrainAction::Raise { x: 48, z: 0, amount: 0.3 });
        assert!(matches!(err, Err(TerrainError::Bounds { .. })));
    }

    #[test]
    fn test_rejects_grid_too_small() {
        let result = TerrainSession::new(12, 12, HillPreset::Rugged.config(), 0);
        assert!(matches!(result, Err(TerrainError::Configuration(_))));
    }
}
