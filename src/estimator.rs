//! Top-level single-frame blob estimation.
//!
//! [`BlobEstimator`] wires the pipeline stages together: grayscale
//! reduction, projection histograms, peak search, region expansion and
//! annotation, then emits the configured report artifacts. It processes
//! exactly one frame per call; how many frames to capture, and the capture
//! loop itself, belong to the caller.

use crate::config::Config;
use crate::frame::{Frame, RectBound};
use crate::pipeline::histogram::{self, Histogram};
use crate::pipeline::peak;
use crate::pipeline::region;
use crate::pipeline::{annotate, grayscale};
use crate::report::{self, ImageSink};

/// Errors raised by frame processing.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("cannot process an empty frame ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },
}

/// Everything the pipeline learned about one frame.
#[derive(Debug, Clone)]
pub struct BlobReport {
    /// Bounding rectangle of the detected cluster
    pub bounds: RectBound,
    /// Number of pixels in the cluster
    pub pixel_count: u64,
    /// Sum of raw intensities over the cluster's pixels
    pub intensity_sum: f64,
    /// Column projection histogram, one bin per frame column
    pub hist_x: Histogram,
    /// Row projection histogram, one bin per frame row
    pub hist_y: Histogram,
}

impl BlobReport {
    /// Single machine-readable line per frame:
    /// `xMin xMax yMin yMax widthX widthY intensitySum pixelCount`.
    ///
    /// Widths are `max - min` per axis.
    pub fn summary_line(&self) -> String {
        format!(
            "{} {} {} {} {} {} {:.6} {}",
            self.bounds.x_min,
            self.bounds.x_max,
            self.bounds.y_min,
            self.bounds.y_max,
            self.bounds.x_max - self.bounds.x_min,
            self.bounds.y_max - self.bounds.y_min,
            self.intensity_sum,
            self.pixel_count
        )
    }
}

/// The single-frame estimation pipeline.
pub struct BlobEstimator {
    config: Config,
}

impl BlobEstimator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// An estimator with default tuning and no report artifacts.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline on one decoded RGB frame.
    ///
    /// The frame is mutated in place: reduced to grayscale, optionally
    /// traced (cluster pixels blanked in red/green) and annotated with the
    /// detected rectangle in channel 0. Histogram dumps and stored images
    /// are emitted according to the configuration; a failing sink is
    /// logged and does not fail the frame.
    pub fn process(
        &self,
        frame: &mut Frame,
        mut sink: Option<&mut dyn ImageSink>,
    ) -> Result<BlobReport, EstimateError> {
        if frame.is_empty() {
            return Err(EstimateError::EmptyFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        grayscale::to_luma_in_place(frame);
        if let Some(sink) = sink.as_deref_mut() {
            if let Err(e) = sink.store(frame, "raw") {
                log::warn!("image sink failed for raw frame: {}", e);
            }
        }

        let (hist_x, hist_y) = histogram::project(frame, None);
        if let Some(prefix) = &self.config.output.prefix {
            if let Err(e) = report::write_histograms(prefix, &hist_x, &hist_y) {
                log::warn!("histogram dump failed: {}", e);
            }
        }

        let peak_x = peak::locate(&hist_x);
        let peak_y = peak::locate(&hist_y);
        log::debug!(
            "peaks: x bin {} max {:.3} (mean {:.3} sd {:.3}), y bin {} max {:.3} (mean {:.3} sd {:.3})",
            peak_x.index,
            peak_x.max,
            peak_x.mean,
            peak_x.std_dev,
            peak_y.index,
            peak_y.max,
            peak_y.mean,
            peak_y.std_dev
        );

        let cluster = region::expand(
            frame,
            &hist_x,
            &hist_y,
            &peak_x,
            &peak_y,
            &self.config.expand_params(),
        );
        log::debug!(
            "cluster: {} pixels in {}, intensity sum {:.1}",
            cluster.pixel_count,
            cluster.bounds,
            cluster.intensity_sum
        );

        if self.config.output.trace {
            region::apply_trace(frame, &cluster);
        }
        if self.config.annotate.enabled {
            annotate::draw_rect(frame, &cluster.bounds, self.config.annotate.line_width);
        }

        let blob = BlobReport {
            bounds: cluster.bounds,
            pixel_count: cluster.pixel_count,
            intensity_sum: cluster.intensity_sum,
            hist_x,
            hist_y,
        };
        log::info!("{}", blob.summary_line());

        if let Some(sink) = sink.as_deref_mut() {
            if let Err(e) = sink.store(frame, "cluster") {
                log::warn!("image sink failed for cluster frame: {}", e);
            }
        }

        Ok(blob)
    }
}
