//! Rectangle annotation for visual verification of detected regions.

use crate::frame::{Frame, RectBound};

/// Paint the four edges of `rect` into channel 0 at full intensity (255).
///
/// Each edge is a strip `line_width` pixels thick drawn inward from the
/// rectangle border, clipped to the frame bounds. Channels 1 and 2 are
/// left untouched. A rectangle that lies entirely outside the frame, or a
/// zero line width, paints nothing.
pub fn draw_rect(frame: &mut Frame, rect: &RectBound, line_width: u32) {
    if frame.is_empty() || line_width == 0 {
        return;
    }

    let x_min = rect.x_min;
    let x_max = rect.x_max.min(frame.width - 1);
    let y_min = rect.y_min;
    let y_max = rect.y_max.min(frame.height - 1);
    if x_min > x_max || y_min > y_max {
        return;
    }

    for step in 0..line_width {
        // top and bottom strips
        let top = y_min + step;
        if top <= y_max {
            paint_row(frame, top, x_min, x_max);
        }
        if y_max >= step {
            let bottom = y_max - step;
            if bottom >= y_min {
                paint_row(frame, bottom, x_min, x_max);
            }
        }

        // left and right strips
        let left = x_min + step;
        if left <= x_max {
            paint_column(frame, left, y_min, y_max);
        }
        if x_max >= step {
            let right = x_max - step;
            if right >= x_min {
                paint_column(frame, right, y_min, y_max);
            }
        }
    }
}

fn paint_row(frame: &mut Frame, y: u32, x_min: u32, x_max: u32) {
    for x in x_min..=x_max {
        let offset = frame.offset(x, y);
        frame.data[offset] = 255;
    }
}

fn paint_column(frame: &mut Frame, x: u32, y_min: u32, y_max: u32) {
    for y in y_min..=y_max {
        let offset = frame.offset(x, y);
        frame.data[offset] = 255;
    }
}
