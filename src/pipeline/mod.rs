//! Image pipeline stages for single-frame blob estimation.
//!
//! The stages run in order, each one handing its output to the next:
//!
//! 1. **Color conversion** - packed YUYV 4:2:2 to a 3-channel RGB frame
//! 2. **Grayscale reduction** - perceptual luminance, in place
//! 3. **Projection histograms** - row and column intensity sums
//! 4. **Peak search** - dominant bin per axis with mean and deviation
//! 5. **Region expansion** - flood fill from the brightest seed pixel
//! 6. **Annotation** - rectangle outline painted for visual verification
//!
//! Every stage is a plain function over [`crate::frame::Frame`] so the
//! stages can also be driven individually, without the orchestrator in
//! [`crate::estimator`].

pub mod annotate;
pub mod convert;
pub mod grayscale;
pub mod histogram;
pub mod peak;
pub mod region;

pub use annotate::draw_rect;
pub use convert::yuyv_to_rgb;
pub use grayscale::to_luma_in_place;
pub use histogram::{project, Axis, Histogram};
pub use peak::{locate, PeakStats};
pub use region::{Cluster, ExpandParams};
