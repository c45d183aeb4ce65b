pub mod action;
pub mod cell;
pub mod clamp;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod options;
pub mod pointer;
pub mod session;
pub mod snap;
pub mod state;

pub use action::ControlEvent;
pub use cell::ControllerCell;
pub use clamp::clamp_offset;
pub use controller::DragController;
pub use error::FloatError;
pub use geometry::{Offset, Size, Viewport};
pub use host::{FloatHost, Motion};
pub use options::FloatOptions;
pub use pointer::{PointerKind, PointerSample, PointerTracker, MOUSE_POINTER_ID};
pub use session::DragSession;
pub use snap::{snap_to_edges, SnapOptions, SnapOutcome};
pub use state::{FloatMode, FloatStateMachine, Transition};
