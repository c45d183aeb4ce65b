use crate::pointer::PointerSample;

/// Everything that can drive a [`DragController`](crate::DragController),
/// whether it came from a DOM listener or the host page's API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    EnableDragHandle,
    ToggleFloat,
    EnterFloating,
    ExitFloating,
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp { pointer_id: Option<i32> },
    PointerCancel,
    WindowBlur,
    ViewportResized,
    Minimize,
    Restore,
    ToggleMinimize,
    Destroy,
}
