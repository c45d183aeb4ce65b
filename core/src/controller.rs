use crate::action::ControlEvent;
use crate::clamp::clamp_offset;
use crate::error::FloatError;
use crate::geometry::{default_float_offset, Offset};
use crate::host::{FloatHost, Motion};
use crate::options::FloatOptions;
use crate::pointer::{PointerSample, PointerTracker};
use crate::session::DragSession;
use crate::snap::snap_to_edges;
use crate::state::{FloatMode, FloatStateMachine, Transition};

pub struct DragController<H: FloatHost> {
    host: H,
    options: FloatOptions,
    machine: FloatStateMachine,
    tracker: PointerTracker,
    session: Option<DragSession>,
    offset: Option<Offset>,
    minimized: bool,
    handle_installed: bool,
    session_listeners: bool,
    selection_locked: bool,
}

impl<H: FloatHost> DragController<H> {
    pub fn new(host: H, options: FloatOptions) -> Self {
        Self {
            host,
            options,
            machine: FloatStateMachine::new(),
            tracker: PointerTracker::new(),
            session: None,
            offset: None,
            minimized: false,
            handle_installed: false,
            session_listeners: false,
            selection_locked: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &FloatOptions {
        &self.options
    }

    pub fn mode(&self) -> FloatMode {
        self.machine.mode()
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn handle_installed(&self) -> bool {
        self.handle_installed
    }

    pub fn handle(&mut self, event: ControlEvent) -> bool {
        match event {
            ControlEvent::EnableDragHandle => self.enable_drag_handle(),
            ControlEvent::ToggleFloat => self.toggle_float(),
            ControlEvent::EnterFloating => self.enter_floating(),
            ControlEvent::ExitFloating => self.exit_floating(),
            ControlEvent::PointerDown(sample) => self.pointer_down(sample),
            ControlEvent::PointerMove(sample) => self.pointer_move(sample),
            ControlEvent::PointerUp { pointer_id } => self.pointer_up(pointer_id),
            ControlEvent::PointerCancel => self.pointer_cancel(),
            ControlEvent::WindowBlur => self.window_blur(),
            ControlEvent::ViewportResized => self.viewport_resized(),
            ControlEvent::Minimize => self.minimize(),
            ControlEvent::Restore => self.restore(),
            ControlEvent::ToggleMinimize => self.toggle_minimize(),
            ControlEvent::Destroy => self.destroy(),
        }
    }

    /// Installs the handle once. A second call before `destroy` is a no-op.
    pub fn enable_drag_handle(&mut self) -> bool {
        if self.handle_installed {
            self.host.note("float: drag handle already enabled");
            return false;
        }
        self.host.install_handle(&self.options);
        self.handle_installed = true;
        self.host.apply_mode(self.machine.mode(), &self.options);
        true
    }

    pub fn toggle_float(&mut self) -> bool {
        let transition = self.machine.toggle();
        self.run(transition, "toggle")
    }

    pub fn enter_floating(&mut self) -> bool {
        let transition = self.machine.enter_floating();
        self.run(transition, "enter floating")
    }

    pub fn exit_floating(&mut self) -> bool {
        let transition = self.machine.exit_floating();
        self.run(transition, "exit floating")
    }

    fn run(&mut self, transition: Option<Transition>, request: &str) -> bool {
        match transition {
            Some(Transition::Float) => {
                self.float();
                true
            }
            Some(Transition::Dock) => {
                self.dock();
                true
            }
            Some(_) => false,
            None => {
                self.host.note(&format!(
                    "float: {request} ignored while {}",
                    self.machine.mode().label()
                ));
                false
            }
        }
    }

    fn float(&mut self) {
        self.host.apply_mode(FloatMode::Floating, &self.options);
        let size = self.host.element_size();
        let viewport = self.host.viewport();
        let width = if size.is_measurable() {
            size.width
        } else {
            self.options.float_width.unwrap_or(0.0)
        };
        let min_visible = self.options.min_visible;
        let fallback = default_float_offset(viewport, width, self.options.float_margin);
        // An unmeasurable element keeps the raw corner; moves report it later.
        let fallback = clamp_offset(fallback, size, viewport, min_visible).unwrap_or(fallback);
        let remembered = if self.options.remember_position {
            match self.host.load_position() {
                Ok(position) => position,
                Err(err) => {
                    self.host.report(&err);
                    None
                }
            }
        } else {
            None
        };
        let offset = match remembered {
            Some(position) => match clamp_offset(position, size, viewport, min_visible) {
                Ok(clamped) => clamped,
                Err(err) => {
                    self.host.report(&err);
                    fallback
                }
            },
            None => fallback,
        };
        self.host.apply_offset(offset, Motion::Instant);
        self.offset = Some(offset);
    }

    fn dock(&mut self) {
        self.session = None;
        self.tracker.cancel();
        self.release_session();
        self.host.clear_offset();
        self.host.apply_mode(FloatMode::Docked, &self.options);
        self.offset = None;
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> bool {
        if self.machine.mode() != FloatMode::Floating {
            return false;
        }
        let Some(origin_pointer) = self.tracker.down(sample) else {
            return false;
        };
        if self.machine.pointer_down().is_none() {
            self.tracker.cancel();
            return false;
        }
        let origin_offset = self.drag_origin();
        self.session = Some(DragSession::new(origin_pointer, origin_offset));
        self.host.apply_mode(FloatMode::Dragging, &self.options);
        if !self.selection_locked {
            self.host.lock_selection();
            self.selection_locked = true;
        }
        if !self.session_listeners {
            self.session_listeners = true;
            self.host.attach_session_listeners();
        }
        true
    }

    /// Where the drag starts from. The viewport may have shrunk while the
    /// last resize was skipped, so the settled offset is clamped again.
    fn drag_origin(&mut self) -> Offset {
        let current = self
            .offset
            .unwrap_or_else(|| self.host.element_offset());
        let size = self.host.element_size();
        let viewport = self.host.viewport();
        let Ok(origin) = clamp_offset(current, size, viewport, self.options.min_visible) else {
            return current;
        };
        if origin != current {
            self.host.apply_offset(origin, Motion::Instant);
        }
        self.offset = Some(origin);
        origin
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> bool {
        if self.machine.mode() != FloatMode::Dragging {
            return false;
        }
        let Some(session) = self.session else {
            return false;
        };
        if self.tracker.move_to(sample).is_none() {
            return false;
        }
        let candidate = session.candidate(&sample);
        let size = self.host.element_size();
        let viewport = self.host.viewport();
        match clamp_offset(candidate, size, viewport, self.options.min_visible) {
            Ok(offset) => {
                self.host.apply_offset(offset, Motion::Instant);
                self.offset = Some(offset);
                true
            }
            Err(err) => {
                self.host.report(&err);
                false
            }
        }
    }

    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> bool {
        if self.machine.mode() != FloatMode::Dragging {
            return false;
        }
        if !self.tracker.up(pointer_id) {
            return false;
        }
        let transition = self.machine.pointer_up();
        self.finish_drag(transition, true)
    }

    pub fn pointer_cancel(&mut self) -> bool {
        if self.machine.mode() != FloatMode::Dragging {
            return false;
        }
        self.tracker.cancel();
        let transition = self.machine.pointer_cancel();
        self.finish_drag(transition, true)
    }

    /// Losing focus mid-drag means the up event will never arrive.
    pub fn window_blur(&mut self) -> bool {
        self.pointer_cancel()
    }

    fn finish_drag(&mut self, transition: Option<Transition>, snap: bool) -> bool {
        if !matches!(transition, Some(Transition::EndDrag { .. })) {
            return false;
        }
        self.session = None;
        self.release_session();
        self.host.apply_mode(FloatMode::Floating, &self.options);
        if snap {
            self.snap();
        }
        self.remember();
        true
    }

    fn snap(&mut self) {
        let Some(snap) = self.options.snap else {
            return;
        };
        let Some(current) = self.offset else {
            return;
        };
        let size = self.host.element_size();
        if !size.is_measurable() {
            self.host.report(&FloatError::InvalidGeometry {
                width: size.width,
                height: size.height,
            });
            return;
        }
        let outcome = snap_to_edges(current, size, self.host.viewport(), snap);
        if !outcome.snapped() {
            return;
        }
        self.host.apply_offset(
            outcome.offset,
            Motion::Animated {
                duration_ms: self.options.snap_animation_ms,
            },
        );
        self.offset = Some(outcome.offset);
        self.host.note(&format!(
            "float: snapped to left={} top={}",
            outcome.offset.left, outcome.offset.top
        ));
    }

    fn remember(&mut self) {
        if !self.options.remember_position {
            return;
        }
        let Some(offset) = self.offset else {
            return;
        };
        if let Err(err) = self.host.store_position(offset) {
            self.host.report(&err);
        }
    }

    /// Re-clamps a settled floating element against the new viewport so a
    /// shrinking window cannot strand it off screen.
    pub fn viewport_resized(&mut self) -> bool {
        if self.machine.mode() != FloatMode::Floating {
            return false;
        }
        let Some(current) = self.offset else {
            return false;
        };
        let size = self.host.element_size();
        let viewport = self.host.viewport();
        match clamp_offset(current, size, viewport, self.options.min_visible) {
            Ok(clamped) if clamped != current => {
                self.host.apply_offset(clamped, Motion::Instant);
                self.offset = Some(clamped);
                true
            }
            Ok(_) => false,
            Err(err) => {
                self.host.report(&err);
                false
            }
        }
    }

    pub fn minimize(&mut self) -> bool {
        if self.minimized {
            return false;
        }
        self.minimized = true;
        self.host.set_minimized(true);
        true
    }

    pub fn restore(&mut self) -> bool {
        if !self.minimized {
            return false;
        }
        self.minimized = false;
        self.host.set_minimized(false);
        true
    }

    pub fn toggle_minimize(&mut self) -> bool {
        if self.minimized {
            self.restore()
        } else {
            self.minimize()
        }
    }

    /// Ends any drag without snapping, docks the element and removes the
    /// handle. `enable_drag_handle` may be called again afterwards.
    pub fn destroy(&mut self) -> bool {
        if self.machine.mode() == FloatMode::Dragging {
            self.tracker.cancel();
            let transition = self.machine.pointer_cancel();
            self.finish_drag(transition, false);
        }
        if self.machine.mode() == FloatMode::Floating && self.machine.exit_floating().is_some() {
            self.dock();
        }
        self.restore();
        self.release_session();
        if !self.handle_installed {
            return false;
        }
        self.host.remove_handle();
        self.handle_installed = false;
        true
    }

    fn release_session(&mut self) {
        if self.session_listeners {
            self.session_listeners = false;
            self.host.detach_session_listeners();
        }
        if self.selection_locked {
            self.selection_locked = false;
            self.host.unlock_selection();
        }
    }
}

impl<H: FloatHost> Drop for DragController<H> {
    fn drop(&mut self) {
        self.release_session();
    }
}
