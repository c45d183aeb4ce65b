use std::rc::{Rc, Weak};

use miniplayer_core::{
    ControlEvent, ControllerCell, DragController, FloatError, FloatHost, FloatMode, FloatOptions,
    Motion, Offset, PointerSample, Size, Viewport,
};

#[derive(Default)]
struct FakeHost {
    size: Size,
    viewport: Viewport,
    installs: usize,
    removals: usize,
    attaches: usize,
    detaches: usize,
    locks: usize,
    unlocks: usize,
    clears: usize,
    modes: Vec<FloatMode>,
    offsets: Vec<(Offset, Motion)>,
    minimized: bool,
    stored: Option<Offset>,
    reports: Vec<FloatError>,
    replay_on_attach: Option<(Weak<ControllerCell<FakeHost>>, ControlEvent)>,
}

impl FakeHost {
    fn new(size: Size, viewport: Viewport) -> Self {
        Self {
            size,
            viewport,
            ..Self::default()
        }
    }

    fn last_offset(&self) -> Option<(Offset, Motion)> {
        self.offsets.last().copied()
    }
}

impl FloatHost for FakeHost {
    fn element_size(&self) -> Size {
        self.size
    }

    fn element_offset(&self) -> Offset {
        self.offsets
            .last()
            .map(|(offset, _)| *offset)
            .unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn install_handle(&mut self, _options: &FloatOptions) {
        self.installs += 1;
    }

    fn remove_handle(&mut self) {
        self.removals += 1;
    }

    fn attach_session_listeners(&mut self) {
        self.attaches += 1;
        if let Some((cell, event)) = self.replay_on_attach.take() {
            if let Some(cell) = cell.upgrade() {
                cell.dispatch(event);
            }
        }
    }

    fn detach_session_listeners(&mut self) {
        assert!(self.detaches < self.attaches, "listeners removed twice");
        self.detaches += 1;
    }

    fn lock_selection(&mut self) {
        self.locks += 1;
    }

    fn unlock_selection(&mut self) {
        self.unlocks += 1;
    }

    fn apply_mode(&mut self, mode: FloatMode, _options: &FloatOptions) {
        self.modes.push(mode);
    }

    fn apply_offset(&mut self, offset: Offset, motion: Motion) {
        self.offsets.push((offset, motion));
    }

    fn clear_offset(&mut self) {
        self.clears += 1;
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    fn load_position(&mut self) -> Result<Option<Offset>, FloatError> {
        Ok(self.stored)
    }

    fn store_position(&mut self, offset: Offset) -> Result<(), FloatError> {
        self.stored = Some(offset);
        Ok(())
    }

    fn report(&self, _error: &FloatError) {}
}

fn video_host() -> FakeHost {
    FakeHost::new(Size::new(400.0, 225.0), Viewport::new(1280.0, 800.0))
}

fn floating(options: FloatOptions) -> DragController<FakeHost> {
    let mut controller = DragController::new(video_host(), options);
    controller.enable_drag_handle();
    controller.toggle_float();
    controller
}

#[test]
fn pointer_down_while_docked_is_ignored() {
    let mut controller = DragController::new(video_host(), FloatOptions::mini_player());
    controller.enable_drag_handle();
    assert!(!controller.pointer_down(PointerSample::mouse(10.0, 10.0)));
    assert_eq!(controller.mode(), FloatMode::Docked);
    assert_eq!(controller.host().attaches, 0);
    assert!(controller.host().offsets.is_empty());
}

#[test]
fn floating_lands_top_right() {
    let controller = floating(FloatOptions::mini_player());
    assert_eq!(controller.mode(), FloatMode::Floating);
    assert_eq!(
        controller.host().last_offset(),
        Some((Offset::new(860.0, 20.0), Motion::Instant))
    );
}

fn assert_within(offset: Option<Offset>, left: (f64, f64), top: (f64, f64)) {
    let offset = offset.expect("floating element has an offset");
    assert!(
        (left.0..=left.1).contains(&offset.left) && (top.0..=top.1).contains(&offset.top),
        "{offset:?} outside left={left:?} top={top:?}"
    );
}

#[test]
fn narrow_viewport_floats_and_drags_within_bounds() {
    let host = FakeHost::new(Size::new(400.0, 225.0), Viewport::new(320.0, 640.0));
    let mut controller = DragController::new(host, FloatOptions::mini_player());
    controller.enable_drag_handle();
    controller.toggle_float();
    assert_within(controller.offset(), (-350.0, -80.0), (0.0, 415.0));
    assert_eq!(controller.offset(), Some(Offset::new(-80.0, 20.0)));

    assert!(controller.pointer_down(PointerSample::mouse(10.0, 10.0)));
    assert_eq!(controller.mode(), FloatMode::Dragging);
    assert_within(controller.offset(), (-350.0, -80.0), (0.0, 415.0));
}

#[test]
fn drag_starts_from_reclamped_origin_after_missed_resize() {
    let mut controller = floating(FloatOptions::mini_player());
    assert_eq!(controller.offset(), Some(Offset::new(860.0, 20.0)));
    controller.host_mut().viewport = Viewport::new(600.0, 400.0);

    assert!(controller.pointer_down(PointerSample::mouse(900.0, 40.0)));
    assert_eq!(controller.offset(), Some(Offset::new(200.0, 20.0)));
    assert_eq!(
        controller.host().last_offset(),
        Some((Offset::new(200.0, 20.0), Motion::Instant))
    );
    assert_eq!(controller.session().map(|s| s.origin_offset), Some(Offset::new(200.0, 20.0)));

    assert!(controller.pointer_move(PointerSample::mouse(880.0, 60.0)));
    assert_eq!(controller.offset(), Some(Offset::new(180.0, 40.0)));
}

#[test]
fn drag_moves_clamps_and_snaps() {
    let mut controller = floating(FloatOptions::mini_player());
    assert!(controller.pointer_down(PointerSample::mouse(900.0, 40.0)));
    assert_eq!(controller.mode(), FloatMode::Dragging);
    assert_eq!(controller.host().locks, 1);

    assert!(controller.pointer_move(PointerSample::mouse(85.0, 320.0)));
    assert_eq!(controller.offset(), Some(Offset::new(45.0, 300.0)));
    assert_eq!(
        controller.host().last_offset(),
        Some((Offset::new(45.0, 300.0), Motion::Instant))
    );

    assert!(controller.pointer_move(PointerSample::mouse(-2000.0, -500.0)));
    assert_eq!(controller.offset(), Some(Offset::new(-350.0, 0.0)));

    assert!(controller.pointer_move(PointerSample::mouse(85.0, 320.0)));
    assert!(controller.pointer_up(None));
    assert_eq!(controller.mode(), FloatMode::Floating);
    assert_eq!(controller.offset(), Some(Offset::new(20.0, 300.0)));
    assert_eq!(
        controller.host().last_offset(),
        Some((Offset::new(20.0, 300.0), Motion::Animated { duration_ms: 300 }))
    );
    assert_eq!(controller.host().detaches, 1);
    assert_eq!(controller.host().unlocks, 1);
}

#[test]
fn drag_never_animates() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.pointer_down(PointerSample::touch(3, 900.0, 40.0));
    for step in 0..10 {
        let x = 900.0 - step as f64 * 40.0;
        controller.pointer_move(PointerSample::touch(3, x, 200.0));
    }
    assert!(controller
        .host()
        .offsets
        .iter()
        .all(|(_, motion)| *motion == Motion::Instant));
}

#[test]
fn simple_variant_keeps_element_inside_and_does_not_snap() {
    let mut controller = floating(FloatOptions::simple());
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    controller.pointer_move(PointerSample::mouse(0.0, 40.0));
    assert_eq!(controller.offset(), Some(Offset::new(0.0, 20.0)));
    controller.pointer_up(None);
    assert_eq!(controller.offset(), Some(Offset::new(0.0, 20.0)));
    assert!(controller
        .host()
        .offsets
        .iter()
        .all(|(_, motion)| *motion == Motion::Instant));
}

#[test]
fn toggle_is_ignored_while_dragging() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    assert!(!controller.toggle_float());
    assert!(!controller.exit_floating());
    assert_eq!(controller.mode(), FloatMode::Dragging);
    assert_eq!(controller.host().clears, 0);
}

#[test]
fn cancel_and_blur_end_drag_like_up() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.pointer_down(PointerSample::touch(5, 900.0, 40.0));
    assert!(controller.pointer_cancel());
    assert_eq!(controller.mode(), FloatMode::Floating);
    assert_eq!(controller.host().detaches, 1);

    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    assert!(controller.window_blur());
    assert_eq!(controller.mode(), FloatMode::Floating);
    assert_eq!(controller.host().attaches, 2);
    assert_eq!(controller.host().detaches, 2);
    assert_eq!(controller.host().unlocks, 2);
}

#[test]
fn up_from_another_touch_does_not_end_drag() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.pointer_down(PointerSample::touch(1, 900.0, 40.0));
    assert!(!controller.pointer_up(Some(2)));
    assert_eq!(controller.mode(), FloatMode::Dragging);
    assert!(controller.pointer_up(Some(1)));
    assert_eq!(controller.mode(), FloatMode::Floating);
}

#[test]
fn docking_clears_offset() {
    let mut controller = floating(FloatOptions::mini_player());
    assert!(controller.toggle_float());
    assert_eq!(controller.mode(), FloatMode::Docked);
    assert_eq!(controller.offset(), None);
    assert_eq!(controller.host().clears, 1);
    assert_eq!(controller.host().modes.last(), Some(&FloatMode::Docked));
}

#[test]
fn enable_twice_installs_once() {
    let mut controller = DragController::new(video_host(), FloatOptions::mini_player());
    assert!(controller.enable_drag_handle());
    assert!(!controller.enable_drag_handle());
    controller.toggle_float();
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    controller.pointer_move(PointerSample::mouse(800.0, 140.0));
    controller.pointer_up(None);
    assert_eq!(controller.host().installs, 1);
    assert_eq!(controller.host().attaches, 1);
    assert_eq!(controller.host().detaches, 1);
}

#[test]
fn repeated_drags_do_not_leak_listeners() {
    let mut controller = floating(FloatOptions::mini_player());
    for _ in 0..5 {
        controller.pointer_down(PointerSample::mouse(900.0, 40.0));
        controller.pointer_move(PointerSample::mouse(700.0, 240.0));
        controller.pointer_up(None);
    }
    assert_eq!(controller.host().attaches, 5);
    assert_eq!(controller.host().detaches, 5);
}

#[test]
fn destroy_mid_drag_releases_everything() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.minimize();
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    assert!(controller.destroy());
    assert_eq!(controller.mode(), FloatMode::Docked);
    assert!(!controller.is_minimized());
    let host = controller.host();
    assert_eq!(host.detaches, 1);
    assert_eq!(host.unlocks, 1);
    assert_eq!(host.removals, 1);
    assert!(!host.minimized);

    assert!(controller.enable_drag_handle());
    assert_eq!(controller.host().installs, 2);
}

#[test]
fn zero_size_skips_clamping() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    let before = controller.offset();
    controller.host_mut().size = Size::new(0.0, 0.0);
    assert!(!controller.pointer_move(PointerSample::mouse(500.0, 300.0)));
    assert_eq!(controller.offset(), before);
    assert!(controller.pointer_up(None));
    assert_eq!(controller.offset(), before);
}

#[test]
fn resize_reclamps_floating_element() {
    let mut controller = floating(FloatOptions::mini_player());
    controller.host_mut().viewport = Viewport::new(1000.0, 600.0);
    assert!(controller.viewport_resized());
    assert_eq!(controller.offset(), Some(Offset::new(600.0, 20.0)));
    assert!(!controller.viewport_resized());
}

#[test]
fn remembered_position_is_reused() {
    let mut options = FloatOptions::mini_player();
    options.remember_position = true;
    let mut controller = floating(options);
    controller.pointer_down(PointerSample::mouse(900.0, 40.0));
    controller.pointer_move(PointerSample::mouse(600.0, 340.0));
    controller.pointer_up(None);
    assert_eq!(controller.host().stored, Some(Offset::new(560.0, 320.0)));

    controller.toggle_float();
    controller.toggle_float();
    assert_eq!(controller.offset(), Some(Offset::new(560.0, 320.0)));
}

#[test]
fn minimize_is_independent_of_mode() {
    let mut controller = DragController::new(video_host(), FloatOptions::mini_player());
    assert!(controller.toggle_minimize());
    assert!(controller.host().minimized);
    assert!(!controller.minimize());
    controller.toggle_float();
    assert!(controller.is_minimized());
    assert!(controller.restore());
    assert!(!controller.host().minimized);
}

#[test]
fn up_dispatched_inside_down_settles_floating() {
    let cell = Rc::new_cyclic(|weak: &Weak<ControllerCell<FakeHost>>| {
        let mut host = video_host();
        host.replay_on_attach = Some((weak.clone(), ControlEvent::PointerUp { pointer_id: None }));
        ControllerCell::new(DragController::new(host, FloatOptions::mini_player()))
    });
    cell.dispatch(ControlEvent::EnableDragHandle);
    cell.dispatch(ControlEvent::ToggleFloat);
    cell.dispatch(ControlEvent::PointerDown(PointerSample::mouse(900.0, 40.0)));

    assert_eq!(cell.pending_len(), 0);
    let (mode, attaches, detaches, unlocks) = cell
        .with(|controller| {
            let host = controller.host();
            (controller.mode(), host.attaches, host.detaches, host.unlocks)
        })
        .unwrap();
    assert_eq!(mode, FloatMode::Floating);
    assert_eq!(attaches, 1);
    assert_eq!(detaches, 1);
    assert_eq!(unlocks, 1);
}

#[test]
fn stale_up_after_release_is_a_no_op() {
    let cell = ControllerCell::new(DragController::new(video_host(), FloatOptions::mini_player()));
    cell.dispatch(ControlEvent::ToggleFloat);
    cell.dispatch(ControlEvent::PointerDown(PointerSample::mouse(900.0, 40.0)));
    cell.dispatch(ControlEvent::PointerUp { pointer_id: None });
    cell.dispatch(ControlEvent::PointerUp { pointer_id: None });
    cell.dispatch(ControlEvent::PointerCancel);
    let detaches = cell.with(|controller| controller.host().detaches).unwrap();
    assert_eq!(detaches, 1);
}
