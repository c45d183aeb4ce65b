#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatMode {
    #[default]
    Docked,
    Floating,
    Dragging,
}

impl FloatMode {
    pub fn is_floating(self) -> bool {
        matches!(self, FloatMode::Floating | FloatMode::Dragging)
    }

    pub fn label(self) -> &'static str {
        match self {
            FloatMode::Docked => "docked",
            FloatMode::Floating => "floating",
            FloatMode::Dragging => "dragging",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Float,
    Dock,
    BeginDrag,
    EndDrag { cancelled: bool },
}

/// Docked -> Floating -> Dragging -> Floating -> Docked. Every method
/// returns the transition it performed, or `None` when the request does
/// not apply to the current mode.
#[derive(Clone, Debug, Default)]
pub struct FloatStateMachine {
    mode: FloatMode,
}

impl FloatStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FloatMode {
        self.mode
    }

    pub fn toggle(&mut self) -> Option<Transition> {
        match self.mode {
            FloatMode::Docked => self.enter_floating(),
            FloatMode::Floating => self.exit_floating(),
            FloatMode::Dragging => None,
        }
    }

    pub fn enter_floating(&mut self) -> Option<Transition> {
        if self.mode != FloatMode::Docked {
            return None;
        }
        self.mode = FloatMode::Floating;
        Some(Transition::Float)
    }

    pub fn exit_floating(&mut self) -> Option<Transition> {
        if self.mode != FloatMode::Floating {
            return None;
        }
        self.mode = FloatMode::Docked;
        Some(Transition::Dock)
    }

    pub fn pointer_down(&mut self) -> Option<Transition> {
        if self.mode != FloatMode::Floating {
            return None;
        }
        self.mode = FloatMode::Dragging;
        Some(Transition::BeginDrag)
    }

    pub fn pointer_up(&mut self) -> Option<Transition> {
        self.end_drag(false)
    }

    pub fn pointer_cancel(&mut self) -> Option<Transition> {
        self.end_drag(true)
    }

    fn end_drag(&mut self, cancelled: bool) -> Option<Transition> {
        if self.mode != FloatMode::Dragging {
            return None;
        }
        self.mode = FloatMode::Floating;
        Some(Transition::EndDrag { cancelled })
    }
}
