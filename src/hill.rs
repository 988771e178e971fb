//! Hill stamping
//!
//! A hill is a radial height profile written into a square footprint around
//! its center. Heights follow the [`HILL_FALLOFF`] curve from the rim to the
//! peak. Stamping overwrites whatever terrain was in the footprint.

use crate::bezier::HILL_FALLOFF;
use crate::error::{Result, TerrainError};
use crate::grid::HeightGrid;

/// One hill to be stamped into a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HillSpec {
    pub center_x: usize,
    pub center_z: usize,
    /// Radius in grid cells
    pub radius: usize,
    /// Normalized peak elevation
    pub peak_height: f32,
}

/// Half-open cell box `[x0, x1) x [z0, z1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub x0: usize,
    pub x1: usize,
    pub z0: usize,
    pub z1: usize,
}

impl Footprint {
    pub fn contains(&self, x: usize, z: usize) -> bool {
        x >= self.x0 && x < self.x1 && z >= self.z0 && z < self.z1
    }
}

impl HillSpec {
    pub fn new(center_x: usize, center_z: usize, radius: usize, peak_height: f32) -> Self {
        Self { center_x, center_z, radius, peak_height }
    }

    /// The cells this hill writes, or `None` if the box would start below zero.
    pub fn footprint(&self) -> Option<Footprint> {
        Some(Footprint {
            x0: self.center_x.checked_sub(self.radius)?,
            x1: self.center_x + self.radius,
            z0: self.center_z.checked_sub(self.radius)?,
            z1: self.center_z + self.radius,
        })
    }

    /// Whether the whole footprint lies inside a `width x height` grid.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.footprint()
            .map_or(false, |fp| fp.x1 <= width && fp.z1 <= height)
    }
}

/// Fraction of the peak height at curve parameter `time` (1 at the center, 0 at the rim).
pub fn falloff(time: f32) -> f32 {
    HILL_FALLOFF.evaluate(time).1
}

/// Write the profile of `hill` into `grid`.
///
/// The footprint is checked first; a hill that does not fit returns
/// [`TerrainError::Bounds`] and leaves the grid untouched.
pub fn stamp<G: HeightGrid + ?Sized>(grid: &mut G, hill: &HillSpec) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    let footprint = match hill.footprint() {
        Some(fp) if hill.fits(width, height) => fp,
        _ => {
            return Err(TerrainError::Bounds {
                center_x: hill.center_x,
                center_z: hill.center_z,
                radius: hill.radius,
                width,
                height,
            })
        }
    };

    if hill.radius == 0 {
        return Ok(());
    }

    let radius = hill.radius as f32;
    let ceiling = grid.max_height();

    for z in footprint.z0..footprint.z1 {
        for x in footprint.x0..footprint.x1 {
            let dx = hill.center_x as f32 - x as f32;
            let dz = hill.center_z as f32 - z as f32;
            let distance = (dx * dx + dz * dz).sqrt();

            let time = (1.0 - distance / radius).max(0.0);
            let point_height = (falloff(time) * hill.peak_height).clamp(0.0, ceiling);

            grid.set(x, z, point_height);
        }
    }

    Ok(())
}
