/// Pointer Events report the mouse as pointer 1; touches use their
/// `Touch.identifier`.
pub const MOUSE_POINTER_ID: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

impl PointerKind {
    pub fn from_pointer_type(value: &str) -> Self {
        match value {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Unknown,
        }
    }
}

/// One input sample in client coordinates, whatever device produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub id: i32,
    pub kind: PointerKind,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            id: MOUSE_POINTER_ID,
            kind: PointerKind::Mouse,
        }
    }

    pub fn touch(id: i32, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            id,
            kind: PointerKind::Touch,
        }
    }
}

/// Follows the single pointer that started a gesture and ignores the rest
/// (a second finger, a stray mouse move during a touch drag).
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    origin: Option<PointerSample>,
    last: Option<PointerSample>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<PointerSample> {
        self.origin
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.last
    }

    /// Returns the initiating point, or `None` if a gesture is already
    /// being tracked.
    pub fn down(&mut self, sample: PointerSample) -> Option<(f64, f64)> {
        if self.origin.is_some() {
            return None;
        }
        self.origin = Some(sample);
        self.last = Some(sample);
        Some((sample.x, sample.y))
    }

    pub fn move_to(&mut self, sample: PointerSample) -> Option<(f64, f64)> {
        let origin = self.origin?;
        if !same_pointer(&origin, &sample) {
            return None;
        }
        self.last = Some(sample);
        Some((sample.x, sample.y))
    }

    /// `None` ends the gesture regardless of which pointer lifted; mouse
    /// up events carry no identity worth checking.
    pub fn up(&mut self, pointer_id: Option<i32>) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        if let Some(id) = pointer_id {
            if origin.id != id {
                return false;
            }
        }
        self.reset();
        true
    }

    pub fn cancel(&mut self) -> bool {
        let was_active = self.origin.is_some();
        self.reset();
        was_active
    }

    fn reset(&mut self) {
        self.origin = None;
        self.last = None;
    }
}

fn same_pointer(a: &PointerSample, b: &PointerSample) -> bool {
    a.id == b.id && a.kind == b.kind
}
