//! Flood-fill region expansion around the projection peak.
//!
//! The expansion works in two steps. First a rectangular candidate window
//! is grown outward from the histogram peak along each axis, and the
//! brightest raw-intensity pixel inside it becomes the seed. Then the
//! cluster grows from the seed over a wide neighbor kernel until no new
//! pixel qualifies. Visited bookkeeping lives in a parallel boolean grid,
//! never in the frame itself, so an expansion leaves the pixel data
//! untouched and can be re-run on the same frame.

use std::collections::VecDeque;

use crate::frame::{Frame, RectBound, CHANNELS};

use super::histogram::Histogram;
use super::peak::PeakStats;

/// Tuning knobs for the expansion.
#[derive(Debug, Clone, Copy)]
pub struct ExpandParams {
    /// Fraction of the histogram peak value a bin must exceed to extend
    /// the candidate window
    pub peak_fraction: f64,
    /// Fraction of the seed intensity a neighbor must exceed to join the
    /// cluster
    pub fill_fraction: f64,
    /// Chebyshev reach of the neighbor kernel; a reach of 10 examines the
    /// surrounding 21x21 block, bridging small gaps inside a bright region
    pub kernel_reach: u32,
}

impl Default for ExpandParams {
    fn default() -> Self {
        Self {
            peak_fraction: 0.2,
            fill_fraction: 0.3,
            kernel_reach: 10,
        }
    }
}

/// Result of one region expansion.
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Tight bounding box of every visited pixel
    pub bounds: RectBound,
    /// The seed pixel the expansion started from
    pub seed: (u32, u32),
    /// Number of pixels folded into the cluster, always >= 1
    pub pixel_count: u64,
    /// Sum of raw channel-0 intensities over visited pixels
    pub intensity_sum: f64,
    /// Per-pixel visited markers, `width * height` entries, row-major
    pub visited: Vec<bool>,
}

/// Grow an inclusive interval outward from the peak bin while the
/// adjacent bin stays above `threshold`.
fn peak_window(values: &[f64], peak: usize, threshold: f64) -> (usize, usize) {
    let mut lo = peak;
    let mut hi = peak;
    while lo > 0 && values[lo - 1] > threshold {
        lo -= 1;
    }
    while hi + 1 < values.len() && values[hi + 1] > threshold {
        hi += 1;
    }
    (lo, hi)
}

/// Locate the maximum channel-0 pixel inside the candidate window.
///
/// Row-major scan; the first occurrence of the maximum wins.
fn find_seed(frame: &Frame, window: &RectBound) -> (u32, u32, u8) {
    let mut seed = (window.x_min, window.y_min);
    let mut best = frame.channel(window.x_min, window.y_min, 0);
    for y in window.y_min..=window.y_max {
        for x in window.x_min..=window.x_max {
            let value = frame.channel(x, y, 0);
            if value > best {
                best = value;
                seed = (x, y);
            }
        }
    }
    (seed.0, seed.1, best)
}

/// Expand a cluster around the histogram peaks of a frame.
///
/// Per-axis thresholds are `peak max * peak_fraction`. The candidate
/// window is grown from the peak indices, the seed is the brightest pixel
/// inside it, and the flood fill then admits any unvisited neighbor within
/// the kernel block whose channel-0 intensity exceeds
/// `fill_fraction * seed intensity`. Neighbor coordinates outside the
/// frame are clipped away before indexing, never read.
///
/// The frontier queue holds only newly visited pixels, so the cost is
/// bounded by the visited-pixel count times the kernel area rather than by
/// repeated scans of the growing window.
///
/// # Panics
/// Panics on an empty frame; the orchestrator rejects those before any
/// stage runs.
pub fn expand(
    frame: &Frame,
    hist_x: &Histogram,
    hist_y: &Histogram,
    peak_x: &PeakStats,
    peak_y: &PeakStats,
    params: &ExpandParams,
) -> Cluster {
    let (x_lo, x_hi) = peak_window(
        &hist_x.values,
        peak_x.index,
        peak_x.max * params.peak_fraction,
    );
    let (y_lo, y_hi) = peak_window(
        &hist_y.values,
        peak_y.index,
        peak_y.max * params.peak_fraction,
    );
    let window = RectBound {
        x_min: x_lo as u32,
        x_max: x_hi as u32,
        y_min: y_lo as u32,
        y_max: y_hi as u32,
    };

    let (seed_x, seed_y, seed_value) = find_seed(frame, &window);
    let fill_threshold = params.fill_fraction * seed_value as f64;
    log::debug!(
        "expanding from seed ({}, {}) value {} in window {}",
        seed_x,
        seed_y,
        seed_value,
        window
    );

    let width = frame.width as usize;
    let mut visited = vec![false; frame.pixel_count()];
    let mut frontier = VecDeque::new();
    visited[seed_x as usize + seed_y as usize * width] = true;
    frontier.push_back((seed_x, seed_y));

    let mut bounds = RectBound::pixel(seed_x, seed_y);
    let mut pixel_count = 1u64;
    let mut intensity_sum = seed_value as f64;

    while let Some((x, y)) = frontier.pop_front() {
        let x_from = x.saturating_sub(params.kernel_reach);
        let x_to = (x + params.kernel_reach).min(frame.width - 1);
        let y_from = y.saturating_sub(params.kernel_reach);
        let y_to = (y + params.kernel_reach).min(frame.height - 1);

        for ny in y_from..=y_to {
            for nx in x_from..=x_to {
                let pixel = nx as usize + ny as usize * width;
                if visited[pixel] {
                    continue;
                }
                let value = frame.data[pixel * CHANNELS];
                if value as f64 > fill_threshold {
                    visited[pixel] = true;
                    bounds.include(nx, ny);
                    pixel_count += 1;
                    intensity_sum += value as f64;
                    frontier.push_back((nx, ny));
                }
            }
        }
    }

    Cluster {
        bounds,
        seed: (seed_x, seed_y),
        pixel_count,
        intensity_sum,
        visited,
    }
}

/// Blank the red and green channels of every visited pixel except the
/// seed, leaving a dark trace of the cluster for visual debugging.
///
/// After tracing, channels 0 and 1 of visited pixels no longer hold the
/// original values; callers that need them must read the frame first.
pub fn apply_trace(frame: &mut Frame, cluster: &Cluster) {
    let width = frame.width as usize;
    let seed_index = cluster.seed.0 as usize + cluster.seed.1 as usize * width;
    for (pixel, &marked) in cluster.visited.iter().enumerate() {
        if !marked || pixel == seed_index {
            continue;
        }
        frame.data[pixel * CHANNELS] = 0;
        frame.data[pixel * CHANNELS + 1] = 0;
    }
}
