//! blobscope: single-frame bright-blob estimation for camera frames.
//!
//! Given a decoded RGB frame (or a raw YUYV 4:2:2 buffer run through
//! [`pipeline::convert`]), the crate reduces it to luminance, projects it
//! onto 1-D row/column histograms, locates the dominant peak, grows a
//! cluster around the brightest seed pixel by flood fill, and reports and
//! annotates the resulting bounding region.
//!
//! Capture I/O (device handling, buffer queueing, format negotiation) and
//! image encoding are external collaborators: the caller supplies decoded
//! frames and may plug in a [`report::ImageSink`] for storing them.

pub mod config;
pub mod estimator;
pub mod frame;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use estimator::{BlobEstimator, BlobReport, EstimateError};
pub use frame::{Frame, RectBound};
