//! Peak search over projection histograms.

use super::histogram::Histogram;

/// Location and spread statistics of a histogram's dominant peak.
#[derive(Debug, Clone, Copy)]
pub struct PeakStats {
    /// Bin index of the first occurrence of the maximum value
    pub index: usize,
    /// The maximum bin value itself
    pub max: f64,
    /// Arithmetic mean over all bins
    pub mean: f64,
    /// Population standard deviation (divisor N)
    pub std_dev: f64,
}

/// Find the dominant peak of a histogram.
///
/// A single left-to-right pass keeps the first strictly greater value, so
/// ties resolve to the lowest index. An empty histogram yields all-zero
/// stats.
pub fn locate(hist: &Histogram) -> PeakStats {
    if hist.is_empty() {
        return PeakStats {
            index: 0,
            max: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        };
    }

    let mut index = 0;
    let mut max = hist.values[0];
    let mut sum = 0.0;
    for (i, &value) in hist.values.iter().enumerate() {
        if value > max {
            max = value;
            index = i;
        }
        sum += value;
    }

    let len = hist.len() as f64;
    let mean = sum / len;
    let variance = hist
        .values
        .iter()
        .map(|&value| (value - mean) * (value - mean))
        .sum::<f64>()
        / len;

    PeakStats {
        index,
        max,
        mean,
        std_dev: variance.sqrt(),
    }
}
