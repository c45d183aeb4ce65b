use crate::geometry::Offset;
use crate::pointer::PointerSample;

/// Lives from pointer-down to pointer-up/cancel of a single gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_pointer: (f64, f64),
    pub origin_offset: Offset,
}

impl DragSession {
    pub fn new(origin_pointer: (f64, f64), origin_offset: Offset) -> Self {
        Self {
            origin_pointer,
            origin_offset,
        }
    }

    /// Unclamped position that keeps the grab point under the pointer.
    pub fn candidate(&self, sample: &PointerSample) -> Offset {
        let dx = sample.x - self.origin_pointer.0;
        let dy = sample.y - self.origin_pointer.1;
        Offset::new(self.origin_offset.left + dx, self.origin_offset.top + dy)
    }
}
