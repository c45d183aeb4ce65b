use std::rc::Weak;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, Touch, TouchEvent, Window};

use miniplayer_core::{ControlEvent, ControllerCell, PointerSample};

use crate::dom_host::DomHost;
use crate::styles::MINIMIZED_CLASS;

pub(crate) type Dispatcher = Weak<ControllerCell<DomHost>>;

pub(crate) fn dispatch(dispatcher: &Dispatcher, event: ControlEvent) {
    if let Some(cell) = dispatcher.upgrade() {
        cell.dispatch(event);
    }
}

pub(crate) fn mouse_sample(event: &MouseEvent) -> PointerSample {
    PointerSample::mouse(event.client_x() as f64, event.client_y() as f64)
}

pub(crate) fn touch_sample(touch: &Touch) -> PointerSample {
    PointerSample::touch(
        touch.identifier(),
        touch.client_x() as f64,
        touch.client_y() as f64,
    )
}

fn changed_touches(event: &TouchEvent) -> Vec<Touch> {
    let list = event.changed_touches();
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

fn listen<F>(
    target: &EventTarget,
    event_type: &'static str,
    phase: EventListenerPhase,
    callback: F,
) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions {
            phase,
            passive: false,
        },
        callback,
    )
}

/// Window-level listeners for one drag session. They capture so that a
/// page handler calling `stopPropagation` cannot strand a drag.
pub(crate) fn session_listeners(window: &Window, dispatcher: &Dispatcher) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(6);

    let move_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "mousemove", EventListenerPhase::Capture, move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            dispatch(&move_dispatcher, ControlEvent::PointerMove(mouse_sample(event)));
        }
    }));

    let up_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "mouseup", EventListenerPhase::Capture, move |event| {
        if event.dyn_ref::<MouseEvent>().is_some() {
            dispatch(&up_dispatcher, ControlEvent::PointerUp { pointer_id: None });
        }
    }));

    let touch_move_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "touchmove", EventListenerPhase::Capture, move |event| {
        let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        event.prevent_default();
        for touch in changed_touches(touch_event) {
            dispatch(
                &touch_move_dispatcher,
                ControlEvent::PointerMove(touch_sample(&touch)),
            );
        }
    }));

    let touch_end_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "touchend", EventListenerPhase::Capture, move |event| {
        let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        for touch in changed_touches(touch_event) {
            dispatch(
                &touch_end_dispatcher,
                ControlEvent::PointerUp {
                    pointer_id: Some(touch.identifier()),
                },
            );
        }
    }));

    let cancel_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "touchcancel", EventListenerPhase::Capture, move |_| {
        dispatch(&cancel_dispatcher, ControlEvent::PointerCancel);
    }));

    let blur_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "blur", EventListenerPhase::Bubble, move |_| {
        dispatch(&blur_dispatcher, ControlEvent::WindowBlur);
    }));

    listeners
}

/// Listeners that live as long as the drag handle: grabbing the handle,
/// the optional float button, click-to-restore and viewport resizes.
pub(crate) fn handle_listeners(
    window: &Window,
    element: &HtmlElement,
    handle: &HtmlElement,
    button: Option<&HtmlElement>,
    dispatcher: &Dispatcher,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(5);

    let down_dispatcher = dispatcher.clone();
    listeners.push(listen(handle, "mousedown", EventListenerPhase::Bubble, move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if mouse.button() != 0 {
            return;
        }
        event.prevent_default();
        event.stop_propagation();
        dispatch(&down_dispatcher, ControlEvent::PointerDown(mouse_sample(mouse)));
    }));

    let touch_dispatcher = dispatcher.clone();
    listeners.push(listen(handle, "touchstart", EventListenerPhase::Bubble, move |event| {
        let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        let Some(touch) = changed_touches(touch_event).into_iter().next() else {
            return;
        };
        event.prevent_default();
        event.stop_propagation();
        dispatch(&touch_dispatcher, ControlEvent::PointerDown(touch_sample(&touch)));
    }));

    if let Some(button) = button {
        let toggle_dispatcher = dispatcher.clone();
        listeners.push(listen(button, "click", EventListenerPhase::Bubble, move |event| {
            event.prevent_default();
            event.stop_propagation();
            dispatch(&toggle_dispatcher, ControlEvent::ToggleFloat);
        }));
    }

    let restore_dispatcher = dispatcher.clone();
    let restore_target = element.clone();
    listeners.push(listen(element, "click", EventListenerPhase::Bubble, move |event| {
        if restore_target.class_list().contains(MINIMIZED_CLASS) {
            event.prevent_default();
            dispatch(&restore_dispatcher, ControlEvent::Restore);
        }
    }));

    let resize_dispatcher = dispatcher.clone();
    listeners.push(listen(window, "resize", EventListenerPhase::Bubble, move |_| {
        dispatch(&resize_dispatcher, ControlEvent::ViewportResized);
    }));

    listeners
}
