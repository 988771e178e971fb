//! Host-facing heightmap abstraction
//!
//! Every generation step works through [`HeightGrid`] so the host can hand in
//! its own terrain storage. Values are normalized elevations in
//! `[0, max_height()]`.

use crate::error::{Result, TerrainError};
use crate::tilemap::Tilemap;

/// A mutable grid of normalized elevations borrowed from the host.
pub trait HeightGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, x: usize, z: usize) -> f32;
    fn set(&mut self, x: usize, z: usize, value: f32);

    /// Upper clamp for every written elevation.
    fn max_height(&self) -> f32 {
        1.0
    }
}

impl HeightGrid for Tilemap<f32> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, z: usize) -> f32 {
        *Tilemap::get(self, x, z)
    }

    fn set(&mut self, x: usize, z: usize, value: f32) {
        Tilemap::set(self, x, z, value);
    }
}

/// Reset every cell to zero elevation.
pub fn flatten<G: HeightGrid + ?Sized>(grid: &mut G) {
    for z in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set(x, z, 0.0);
        }
    }
}

/// Raise a single cell by `amount`, clamping the result into `[0, max_height]`.
/// Returns the new elevation.
pub fn raise_cell<G: HeightGrid + ?Sized>(grid: &mut G, x: usize, z: usize, amount: f32) -> Result<f32> {
    if x >= grid.width() || z >= grid.height() {
        return Err(TerrainError::Bounds {
            center_x: x,
            center_z: z,
            radius: 0,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let raised = (grid.get(x, z) + amount).clamp(0.0, grid.max_height());
    grid.set(x, z, raised);
    Ok(raised)
}
