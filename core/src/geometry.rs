use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Hidden or detached elements report a zero box; nothing can be
    /// clamped or snapped against them.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Sampled fresh for every computation; the window may have been resized
/// since the last one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Top-right placement used when an element first leaves page flow.
pub fn default_float_offset(viewport: Viewport, width: f64, margin: f64) -> Offset {
    let left = (viewport.width - width - margin).max(0.0);
    Offset::new(left, margin)
}
