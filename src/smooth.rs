//! Directional exponential smoothing
//!
//! Four 1D blend passes (rows forward, rows backward, columns forward,
//! columns backward) approximate an isotropic low-pass filter in O(n) per
//! pass. Each pass updates the grid in place, so later cells in a pass see
//! the already-blended value of their neighbor and later passes see the
//! output of earlier ones.

use serde::{Deserialize, Serialize};

use crate::grid::HeightGrid;

/// Which of the four passes run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothPasses {
    /// Forward and reverse passes along both axes
    #[default]
    Bidirectional,
    /// Only the left-to-right and bottom-to-top passes. Reproduces terrain
    /// built by the older tool, whose reverse loops never executed.
    ForwardOnly,
}

/// Smoothing filter parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothParams {
    /// Weight kept by the cell itself (0.0-1.0); the neighbor gets `1 - strength`
    pub strength: f32,
    pub passes: SmoothPasses,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            strength: 0.5,
            passes: SmoothPasses::Bidirectional,
        }
    }
}

impl SmoothParams {
    pub fn forward_only() -> Self {
        Self {
            passes: SmoothPasses::ForwardOnly,
            ..Self::default()
        }
    }
}

/// Smooth `grid` in place.
pub fn smooth<G: HeightGrid + ?Sized>(grid: &mut G, params: &SmoothParams) {
    let width = grid.width();
    let height = grid.height();
    let k = params.strength;
    let blend = |neighbor: f32, own: f32| neighbor * (1.0 - k) + own * k;
    let bidirectional = params.passes == SmoothPasses::Bidirectional;

    // Rows, left to right
    for x in 1..width {
        for z in 0..height {
            let v = blend(grid.get(x - 1, z), grid.get(x, z));
            grid.set(x, z, v);
        }
    }

    // Rows, right to left
    if bidirectional {
        for x in (0..width.saturating_sub(1)).rev() {
            for z in 0..height {
                let v = blend(grid.get(x + 1, z), grid.get(x, z));
                grid.set(x, z, v);
            }
        }
    }

    // Columns, bottom to top
    for x in 0..width {
        for z in 1..height {
            let v = blend(grid.get(x, z - 1), grid.get(x, z));
            grid.set(x, z, v);
        }
    }

    // Columns, top to bottom
    if bidirectional {
        for x in 0..width {
            for z in (0..height.saturating_sub(1)).rev() {
                let v = blend(grid.get(x, z + 1), grid.get(x, z));
                grid.set(x, z, v);
            }
        }
    }
}
