use crate::error::FloatError;
use crate::geometry::{Offset, Size, Viewport};

/// Keeps an element inside the viewport. Horizontally it may hang off the
/// left edge by up to `width - min_visible`; vertically it stays fully
/// inside. An axis whose range inverts (element larger than the viewport)
/// pins to 0.
pub fn clamp_offset(
    candidate: Offset,
    element: Size,
    viewport: Viewport,
    min_visible: f64,
) -> Result<Offset, FloatError> {
    if !element.is_measurable() || !viewport.is_measurable() || !candidate.is_finite() {
        return Err(FloatError::InvalidGeometry {
            width: element.width,
            height: element.height,
        });
    }
    let (min_left, max_left) = horizontal_bounds(element, viewport, min_visible);
    let left = clamp_axis(candidate.left, min_left, max_left);
    let top = clamp_axis(candidate.top, 0.0, viewport.height - element.height);
    Ok(Offset::new(left, top))
}

pub fn horizontal_bounds(element: Size, viewport: Viewport, min_visible: f64) -> (f64, f64) {
    let min_visible = min_visible.max(0.0);
    (-(element.width - min_visible), viewport.width - element.width)
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return 0.0;
    }
    value.clamp(min, max)
}
