//! RGB to grayscale reduction using ITU-R BT.709 luminance weights.

use crate::frame::{Frame, CHANNELS};

/// Replace every pixel's channels with its perceptual luminance, in place.
///
/// The luminance formula is: Y = 0.2126*R + 0.7152*G + 0.0722*B
///
/// Integer math keeps the hot path free of floating point; the coefficients
/// are scaled by 10000 (2126 + 7152 + 722 = 10000), so a pixel whose three
/// channels are already equal maps to exactly that value. Applying the
/// reduction twice therefore gives the same frame as applying it once.
pub fn to_luma_in_place(frame: &mut Frame) {
    for px in frame.data.chunks_exact_mut(CHANNELS) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let luma = ((2126 * r + 7152 * g + 722 * b) / 10000) as u8;
        px[0] = luma;
        px[1] = luma;
        px[2] = luma;
    }
}
