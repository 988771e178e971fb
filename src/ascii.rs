//! ASCII preview of heightmaps
//!
//! Renders terrain as text for terminals and logs. Nothing is written to disk.

use crate::grid::HeightGrid;

/// Character ramp from lowest to highest elevation
const HEIGHT_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Get ASCII character for a height normalized to 0.0-1.0
pub fn height_char(normalized: f32) -> char {
    let idx = (normalized.clamp(0.0, 1.0) * (HEIGHT_RAMP.len() - 1) as f32).round() as usize;
    HEIGHT_RAMP[idx]
}

/// Render `grid` as text at most `max_cols` characters wide.
///
/// Each character covers a square block of cells and shows the block's
/// highest value, normalized against the grid's own range. Rows run from
/// `z = 0` at the top.
pub fn render_ascii<G: HeightGrid + ?Sized>(grid: &G, max_cols: usize) -> String {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 || max_cols == 0 {
        return String::new();
    }

    let step = width.div_ceil(max_cols).max(1);

    let mut min_h = f32::MAX;
    let mut max_h = f32::MIN;
    for z in 0..height {
        for x in 0..width {
            let h = grid.get(x, z);
            if h < min_h { min_h = h; }
            if h > max_h { max_h = h; }
        }
    }
    let range = max_h - min_h;

    let mut out = String::with_capacity((width / step + 1) * (height / step + 1));
    for z0 in (0..height).step_by(step) {
        for x0 in (0..width).step_by(step) {
            let mut block_max = f32::MIN;
            for z in z0..(z0 + step).min(height) {
                for x in x0..(x0 + step).min(width) {
                    block_max = block_max.max(grid.get(x, z));
                }
            }
            let normalized = if range > f32::EPSILON { (block_max - min_h) / range } else { 0.0 };
            out.push(height_char(normalized));
        }
        out.push('\n');
    }
    out
}

/// Print a histogram of height values for debugging.
/// Shows distribution across bins and key statistics.
pub fn print_height_histogram<G: HeightGrid + ?Sized>(grid: &G, num_bins: usize) {
    let num_bins = num_bins.clamp(5, 50);

    let mut heights: Vec<f32> = Vec::with_capacity(grid.width() * grid.height());
    for z in 0..grid.height() {
        for x in 0..grid.width() {
            heights.push(grid.get(x, z));
        }
    }
    if heights.is_empty() {
        println!("(empty heightmap)");
        return;
    }

    let count = heights.len();
    let min_h = heights.iter().copied().fold(f32::INFINITY, f32::min);
    let max_h = heights.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mean = heights.iter().map(|&h| h as f64).sum::<f64>() / count as f64;

    let variance: f64 = heights.iter()
        .map(|h| {
            let diff = *h as f64 - mean;
            diff * diff
        })
        .sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    heights.sort_by(|a, b| a.total_cmp(b));
    let median = if count % 2 == 0 {
        (heights[count / 2 - 1] + heights[count / 2]) / 2.0
    } else {
        heights[count / 2]
    };
    let flat = heights.iter().filter(|h| **h <= 0.0).count();

    let range = max_h - min_h;
    let bins = histogram_bins(&heights, min_h, range, num_bins);
    let max_bin = bins.iter().copied().max().unwrap_or(1).max(1);
    let bar_max_width = 40;
    let bin_width = range / num_bins as f32;

    println!();
    println!("Height distribution ({} cells)", count);
    println!("  Min: {:.6}  Max: {:.6}  Range: {:.6}", min_h, max_h, range);
    println!("  Mean: {:.6}  Median: {:.6}  Std Dev: {:.6}", mean, median, std_dev);
    println!("  Flat cells: {} ({:.1}%)", flat, 100.0 * flat as f64 / count as f64);

    for (i, &bin_count) in bins.iter().enumerate() {
        let bin_start = min_h + i as f32 * bin_width;
        let bar_len = (bin_count as f64 / max_bin as f64 * bar_max_width as f64) as usize;
        let pct = 100.0 * bin_count as f64 / count as f64;
        println!("  {:>10.6} |{:<40}| {:>5.1}%", bin_start, "█".repeat(bar_len), pct);
    }
    println!();
}

fn histogram_bins(heights: &[f32], min_h: f32, range: f32, num_bins: usize) -> Vec<usize> {
    let mut bins = vec![0usize; num_bins];
    for &h in heights {
        let idx = if range > 0.0 {
            (((h - min_h) / range) * num_bins as f32) as usize
        } else {
            0
        };
        bins[idx.min(num_bins - 1)] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilemap::Tilemap;

    #[test]
    fn test_height_char_ends() {
        assert_eq!(height_char(0.0), ' ');
        assert_eq!(height_char(1.0), '@');
        assert_eq!(height_char(7.0), '@');
        assert_eq!(height_char(-1.0), ' ');
    }

    #[test]
    fn test_render_dimensions() {
        let map = Tilemap::new_with(20, 6, 0.0f32);
        let text = render_ascii(&map, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn test_render_marks_peak() {
        let mut map = Tilemap::new_with(8, 8, 0.0f32);
        map.set(5, 2, 0.01);
        let text = render_ascii(&map, 8);
        let row: Vec<char> = text.lines().nth(2).unwrap().chars().collect();
        assert_eq!(row[5], '@');
        assert_eq!(row[0], ' ');
    }

    #[test]
    fn test_render_empty() {
        let map: Tilemap<f32> = Tilemap::new(0, 0);
        assert!(render_ascii(&map, 80).is_empty());
    }

    #[test]
    fn test_histogram_bins_cover_all_cells() {
        let heights = [0.0, 0.1, 0.5, 0.9, 1.0, 1.0];
        let bins = histogram_bins(&heights, 0.0, 1.0, 5);
        assert_eq!(bins.iter().sum::<usize>(), heights.len());
        assert_eq!(bins[4], 3);
    }
}
