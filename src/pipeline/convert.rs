//! YUYV 4:2:2 to RGB conversion using fixed-point BT.601 coefficients.

use crate::frame::{Frame, CHANNELS};

/// Bytes per two-pixel YUYV macropixel (Y0 U Y1 V).
const MACROPIXEL_BYTES: usize = 4;

/// Convert a packed YUYV 4:2:2 buffer to an RGB frame.
///
/// Two horizontally adjacent pixels share one U/V pair; each pixel picks
/// its luma sample by the parity of its linear index within the macropixel
/// (even -> Y0, odd -> Y1).
///
/// The conversion is integer-only: coefficients 298/409/-100/-208/516 with
/// a `>> 8` rounding shift, luma offset 16, chroma offset 128, and each
/// channel clamped to [0, 255].
///
/// # Panics
/// Panics if `yuyv` holds fewer than `ceil(width * height / 2) * 4` bytes.
pub fn yuyv_to_rgb(yuyv: &[u8], width: u32, height: u32) -> Frame {
    let pixels = width as usize * height as usize;
    let needed = (pixels + 1) / 2 * MACROPIXEL_BYTES;
    assert!(
        yuyv.len() >= needed,
        "YUYV buffer too short: {} bytes, need {}",
        yuyv.len(),
        needed
    );

    let mut data = Vec::with_capacity(pixels * CHANNELS);
    for i in 0..pixels {
        let base = (i >> 1) * MACROPIXEL_BYTES;
        let y = if i % 2 == 0 {
            yuyv[base]
        } else {
            yuyv[base + 2]
        };
        let u = yuyv[base + 1];
        let v = yuyv[base + 3];

        let c = y as i32 - 16;
        let d = u as i32 - 128;
        let e = v as i32 - 128;

        let r = (298 * c + 409 * e + 128) >> 8;
        let g = (298 * c - 100 * d - 208 * e + 128) >> 8;
        let b = (298 * c + 516 * d + 128) >> 8;

        data.push(r.clamp(0, 255) as u8);
        data.push(g.clamp(0, 255) as u8);
        data.push(b.clamp(0, 255) as u8);
    }

    Frame::new(data, width, height)
}
