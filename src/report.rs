//! Reporting sinks: histogram dumps and the image sink boundary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::frame::Frame;
use crate::pipeline::histogram::{Axis, Histogram};

/// Errors raised while writing report artifacts.
///
/// A sink failure is fatal to the reporting step only; the frame's
/// algorithmic results stay valid.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write histogram dump '{}': {}", path.display(), source)]
    Dump {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Capability for persisting a finished frame.
///
/// Image encoding (e.g. JPEG) is outside this crate; the capture
/// collaborator supplies an implementation and decides the on-disk format.
/// `name` distinguishes the stage the frame was taken from, such as `raw`
/// or `cluster`.
pub trait ImageSink {
    fn store(&mut self, frame: &Frame, name: &str) -> std::io::Result<()>;
}

/// Path of the dump file for one axis: `<prefix>-histraw<axis>.dat`.
pub fn histogram_path(prefix: &str, axis: Axis) -> PathBuf {
    PathBuf::from(format!("{}-histraw{}.dat", prefix, axis.name()))
}

/// Write one histogram as `index<TAB>value` lines, one bin per line.
///
/// Returns the path written on success.
pub fn write_histogram(prefix: &str, hist: &Histogram) -> Result<PathBuf, ReportError> {
    let path = histogram_path(prefix, hist.axis);
    let file = File::create(&path).map_err(|source| ReportError::Dump {
        path: path.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    for (index, value) in hist.values.iter().enumerate() {
        writeln!(out, "{}\t{:.6}", index, value).map_err(|source| ReportError::Dump {
            path: path.clone(),
            source,
        })?;
    }
    out.flush().map_err(|source| ReportError::Dump {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write both projection histograms next to each other.
pub fn write_histograms(
    prefix: &str,
    hist_x: &Histogram,
    hist_y: &Histogram,
) -> Result<(), ReportError> {
    write_histogram(prefix, hist_x)?;
    write_histogram(prefix, hist_y)?;
    Ok(())
}
