//! Procedural hill-field terrain
//!
//! Flattens a host-owned heightmap, stamps randomly placed Bezier-profiled
//! hills into it and smooths the result with a directional exponential filter.
//!
//! ```
//! use hill_terrain::{GenerationConfig, HillFieldGenerator, Tilemap};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = GenerationConfig { hill_count: 20, ..Default::default() };
//! let generator = HillFieldGenerator::new(config).unwrap();
//! let mut heightmap = Tilemap::new_with(64, 64, 0.0f32);
//! let stats = generator.generate(&mut heightmap, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
//! assert_eq!(stats.hills_placed, 20);
//! ```

pub mod ascii;
pub mod bezier;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod hill;
pub mod logging;
pub mod session;
pub mod smooth;
pub mod tilemap;

pub use config::{GenerationConfig, HillPreset, SmoothSchedule};
pub use error::{Result, TerrainError};
pub use generator::{GenerationStats, HillFieldGenerator, HillRng};
pub use grid::HeightGrid;
pub use hill::HillSpec;
pub use session::{TerrainAction, TerrainSession};
pub use smooth::{SmoothParams, SmoothPasses};
pub use tilemap::Tilemap;
