use crate::error::FloatError;
use crate::geometry::{Offset, Size, Viewport};
use crate::options::FloatOptions;
use crate::state::FloatMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Used while dragging; positioning must track the pointer with no lag.
    Instant,
    Animated { duration_ms: u32 },
}

/// The page side of a floating element. The controller is the only caller
/// and the only writer of position and mode.
pub trait FloatHost {
    fn element_size(&self) -> Size;
    fn element_offset(&self) -> Offset;
    fn viewport(&self) -> Viewport;

    fn install_handle(&mut self, options: &FloatOptions);
    fn remove_handle(&mut self);

    /// Document/window level move, up and cancel listeners for one drag
    /// session.
    fn attach_session_listeners(&mut self);
    fn detach_session_listeners(&mut self);

    fn lock_selection(&mut self);
    fn unlock_selection(&mut self);

    fn apply_mode(&mut self, mode: FloatMode, options: &FloatOptions);
    fn apply_offset(&mut self, offset: Offset, motion: Motion);
    fn clear_offset(&mut self);
    fn set_minimized(&mut self, minimized: bool);

    fn load_position(&mut self) -> Result<Option<Offset>, FloatError> {
        Ok(None)
    }

    fn store_position(&mut self, _offset: Offset) -> Result<(), FloatError> {
        Ok(())
    }

    /// Failures are absorbed, never propagated to the page.
    fn report(&self, error: &FloatError);

    fn note(&self, _message: &str) {}
}
