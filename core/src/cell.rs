use std::cell::RefCell;
use std::collections::VecDeque;

use crate::action::ControlEvent;
use crate::controller::DragController;
use crate::host::FloatHost;

/// Shared home for a controller whose host can dispatch back into it.
///
/// Events raised while another event is being handled (a synthetic up
/// fired from inside a down listener, a blur triggered by DOM changes)
/// are queued and run in order once the outer handler returns.
pub struct ControllerCell<H: FloatHost> {
    controller: RefCell<DragController<H>>,
    pending: RefCell<VecDeque<ControlEvent>>,
}

impl<H: FloatHost> ControllerCell<H> {
    pub fn new(controller: DragController<H>) -> Self {
        Self {
            controller: RefCell::new(controller),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    pub fn dispatch(&self, event: ControlEvent) {
        self.pending.borrow_mut().push_back(event);
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            controller.handle(event);
        }
    }

    /// `None` while an event is being handled.
    pub fn with<R>(&self, read: impl FnOnce(&DragController<H>) -> R) -> Option<R> {
        let controller = self.controller.try_borrow().ok()?;
        Some(read(&controller))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}
