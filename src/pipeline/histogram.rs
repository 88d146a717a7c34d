//! Projection histograms: 2-D intensity collapsed to 1-D marginal sums.

use crate::frame::{Frame, RectBound, CHANNELS};

/// Axis a projection histogram was summed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Short lowercase name, used in dump file names.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// A 1-D projection of frame intensity onto one axis.
///
/// The X histogram has one bin per column, the Y histogram one bin per
/// row. Bins are non-negative sums of normalized channel values.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub axis: Axis,
    pub values: Vec<f64>,
}

impl Histogram {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the X and Y projection histograms of a frame.
///
/// Each bin is `sum over the other axis of frame[x, y, c] / 255` summed
/// over channels 1..3 only. Channel 0 is deliberately excluded: it stays a
/// pristine raw-intensity reference for the region expander, so annotation
/// and tracing in channel 0 can never feed back into the projection.
///
/// `roi` restricts the summed region (inclusive bounds, clipped to the
/// frame); `None` sums the full frame. Bins outside the region stay 0, and
/// both histograms always span the full frame dimensions.
pub fn project(frame: &Frame, roi: Option<RectBound>) -> (Histogram, Histogram) {
    let mut hist_x = Histogram {
        axis: Axis::X,
        values: vec![0.0; frame.width as usize],
    };
    let mut hist_y = Histogram {
        axis: Axis::Y,
        values: vec![0.0; frame.height as usize],
    };

    if frame.is_empty() {
        return (hist_x, hist_y);
    }

    let bounds = roi.unwrap_or_else(|| RectBound::full(frame));
    let x_max = bounds.x_max.min(frame.width - 1);
    let y_max = bounds.y_max.min(frame.height - 1);
    if bounds.x_min > x_max || bounds.y_min > y_max {
        return (hist_x, hist_y);
    }

    for y in bounds.y_min..=y_max {
        for x in bounds.x_min..=x_max {
            let offset = frame.offset(x, y);
            for c in 1..CHANNELS {
                let value = frame.data[offset + c] as f64 / 255.0;
                hist_x.values[x as usize] += value;
                hist_y.values[y as usize] += value;
            }
        }
    }

    (hist_x, hist_y)
}
