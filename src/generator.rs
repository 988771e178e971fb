//! Random hill-field generation
//!
//! A run flattens the grid, then stamps `hill_count` hills with random
//! position, radius and peak height, smoothing according to the configured
//! [`SmoothSchedule`]. Random draws happen in a fixed order per hill
//! (radius, x, z, height) so a seeded stream reproduces the same terrain.

use log::{debug, info, warn};
use rand::Rng;

use crate::config::{GenerationConfig, SmoothSchedule};
use crate::error::{Result, TerrainError};
use crate::grid::{self, HeightGrid};
use crate::hill::{self, HillSpec};
use crate::smooth;

/// Source of uniform draws for hill placement.
pub trait HillRng {
    /// Uniform integer in `[low, high)`. An empty range yields `low`.
    ///
    /// Implementations must consume the same amount of randomness for every
    /// range so the per-hill draw order stays reproducible.
    fn range_usize(&mut self, low: usize, high: usize) -> usize;
    /// Uniform float in `[low, high)`. An empty range yields `low`.
    fn range_f32(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng> HillRng for R {
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        // Exactly one 64-bit draw per call, whatever the span. Rejection
        // sampling in `gen_range` would make the draw count depend on the bounds.
        let unit: f64 = self.gen();
        let span = high.saturating_sub(low);
        let offset = (span as f64 * unit) as usize;
        low + offset.min(span.saturating_sub(1))
    }

    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        let unit: f32 = self.gen();
        let value = low + (high - low) * unit;
        // Rounding can land exactly on `high`
        if value >= high && high > low { low } else { value }
    }
}

/// Summary of one generation run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationStats {
    pub hills_placed: usize,
    pub hills_skipped: usize,
    pub smoothing_runs: usize,
    pub min_height: f32,
    pub max_height: f32,
}

/// Stamps random hill fields into host grids.
#[derive(Clone, Debug)]
pub struct HillFieldGenerator {
    config: GenerationConfig,
}

impl HillFieldGenerator {
    /// Create a generator, rejecting malformed bounds up front.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Reset every cell of `grid` to zero.
    pub fn flatten<G: HeightGrid + ?Sized>(&self, grid: &mut G) {
        grid::flatten(grid);
    }

    /// Regenerate the whole hill field in `grid`.
    ///
    /// The config is checked against the grid size before anything is
    /// written, so an error leaves the grid as it was.
    pub fn generate<G, R>(&self, grid: &mut G, rng: &mut R) -> Result<GenerationStats>
    where
        G: HeightGrid + ?Sized,
        R: HillRng + ?Sized,
    {
        let (width, height) = (grid.width(), grid.height());
        self.config.validate_for_grid(width, height)?;

        info!(
            "Generating {} hills on {}x{} grid (radius {}..{}, height {}..{}, smoothing {})",
            self.config.hill_count, width, height,
            self.config.min_radius, self.config.max_radius,
            self.config.min_height, self.config.max_height,
            self.config.schedule,
        );

        self.flatten(grid);
        let mut stats = GenerationStats::default();

        for i in 0..self.config.hill_count {
            let hill = sample_hill(&self.config, width, height, rng);
            if !place_hill(grid, i, &hill, &mut stats)? {
                continue;
            }

            if self.config.schedule == SmoothSchedule::EachHill {
                smooth::smooth(grid, &self.config.smoothing);
                stats.smoothing_runs += 1;
            }
        }

        if self.config.schedule == SmoothSchedule::Once && stats.hills_placed > 0 {
            smooth::smooth(grid, &self.config.smoothing);
            stats.smoothing_runs += 1;
        }

        let (min_h, max_h) = height_range(grid);
        stats.min_height = min_h;
        stats.max_height = max_h;

        info!(
            "Placed {} hills ({} skipped), heights {:.6}..{:.6}",
            stats.hills_placed, stats.hills_skipped, min_h, max_h
        );

        Ok(stats)
    }
}

/// Stamp one hill, counting it as placed or skipped.
///
/// A hill whose footprint leaves the grid is skipped without writing and
/// `Ok(false)` is returned; any other error propagates.
fn place_hill<G: HeightGrid + ?Sized>(
    grid: &mut G,
    index: usize,
    hill: &HillSpec,
    stats: &mut GenerationStats,
) -> Result<bool> {
    match hill::stamp(grid, hill) {
        Ok(()) => {
            debug!("Hill {}: {:?}", index, hill);
            stats.hills_placed += 1;
            Ok(true)
        }
        Err(e @ TerrainError::Bounds { .. }) => {
            warn!("Skipping hill {}: {}", index, e);
            stats.hills_skipped += 1;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Draw one hill: radius, then x, then z, then peak height.
pub fn sample_hill<R: HillRng + ?Sized>(
    config: &GenerationConfig,
    width: usize,
    height: usize,
    rng: &mut R,
) -> HillSpec {
    let radius = rng.range_usize(config.min_radius, config.max_radius);
    let x = rng.range_usize(0, width);
    let z = rng.range_usize(0, height);
    let center_x = clamp_center(x, radius, width);
    let center_z = clamp_center(z, radius, height);
    let peak_height = rng.range_f32(config.min_height, config.max_height);

    HillSpec::new(center_x, center_z, radius, peak_height)
}

/// Push a center inward so `[center - radius, center + radius)` stays in `0..extent`.
///
/// When `2 * radius > extent` no such center exists; the result is then
/// `extent - radius` (saturating) and the stamp's bounds check rejects it.
pub fn clamp_center(center: usize, radius: usize, extent: usize) -> usize {
    let mut center = center;
    if center < radius {
        center = radius;
    }
    if center + radius > extent {
        center = extent.saturating_sub(radius);
    }
    center
}

fn height_range<G: HeightGrid + ?Sized>(grid: &G) -> (f32, f32) {
    let mut min_h = f32::MAX;
    let mut max_h = f32::MIN;
    for z in 0..grid.height() {
        for x in 0..grid.width() {
            let h = grid.get(x, z);
            if h < min_h { min_h = h; }
            if h > max_h { max_h = h; }
        }
    }
    if min_h > max_h { (0.0, 0.0) } else { (min_h, max_h) }
}
