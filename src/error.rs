//! Error types for terrain generation

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Malformed generation bounds; raised before any grid mutation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A hill footprint that would not fit inside the grid.
    #[error("Hill at ({center_x}, {center_z}) with radius {radius} exceeds {width}x{height} grid")]
    Bounds {
        center_x: usize,
        center_z: usize,
        radius: usize,
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, TerrainError>;
