//! Floating mini-player controller for the course pages.
//!
//! Nothing runs at load time. The host page confirms the video container
//! exists, then calls [`create_float_controller`] (or
//! [`attach_float_controller`] with an element it already holds) and keeps
//! the returned handle until it calls `destroy`.

mod config;
mod dom_host;
mod handle;
mod input;
mod persisted;
mod styles;

use std::rc::Rc;

use gloo::console;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use miniplayer_core::{
    ControlEvent, ControllerCell, DragController, FloatError, FloatMode, FloatOptions,
};

use crate::dom_host::DomHost;

#[wasm_bindgen]
pub struct FloatController {
    cell: Rc<ControllerCell<DomHost>>,
}

/// Finds the container by selector. Returns `undefined` (after logging) if
/// nothing matches, so it is safe to call on every page type.
#[wasm_bindgen(js_name = createFloatController)]
pub fn create_float_controller(
    selector: &str,
    options_json: Option<String>,
) -> Option<FloatController> {
    let options = config::resolve_options(options_json.as_deref());
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(selector).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let Some(element) = element else {
        let err = FloatError::MissingTargetElement {
            selector: selector.to_string(),
        };
        console::log!(format!("float: {err}"));
        return None;
    };
    FloatController::attach(element, selector, options)
}

#[wasm_bindgen(js_name = attachFloatController)]
pub fn attach_float_controller(
    element: HtmlElement,
    options_json: Option<String>,
) -> Option<FloatController> {
    let options = config::resolve_options(options_json.as_deref());
    let scope = if element.id().is_empty() {
        element.tag_name().to_lowercase()
    } else {
        format!("#{}", element.id())
    };
    FloatController::attach(element, &scope, options)
}

/// `"mini-player"` or `"simple"`; anything else falls back to the mini
/// player preset.
#[wasm_bindgen(js_name = createPresetFloatController)]
pub fn create_preset_float_controller(selector: &str, preset: &str) -> Option<FloatController> {
    let options = FloatOptions::preset(preset).unwrap_or_else(|| {
        console::warn!(format!("float: unknown preset '{preset}', using mini-player"));
        FloatOptions::mini_player()
    });
    let raw = serde_json::to_string(&options).ok();
    create_float_controller(selector, raw)
}

impl FloatController {
    fn attach(element: HtmlElement, scope: &str, options: FloatOptions) -> Option<Self> {
        console_error_panic_hook::set_once();
        let window = web_sys::window()?;
        let document = window.document()?;
        let cell = Rc::new_cyclic(|weak| {
            let host = DomHost::new(window, document, element, weak.clone(), scope);
            ControllerCell::new(DragController::new(host, options))
        });
        Some(Self { cell })
    }

    fn send(&self, event: ControlEvent) {
        self.cell.dispatch(event);
    }
}

#[wasm_bindgen]
impl FloatController {
    #[wasm_bindgen(js_name = enableDragHandle)]
    pub fn enable_drag_handle(&self) {
        self.send(ControlEvent::EnableDragHandle);
    }

    #[wasm_bindgen(js_name = toggleFloat)]
    pub fn toggle_float(&self) {
        self.send(ControlEvent::ToggleFloat);
    }

    #[wasm_bindgen(js_name = enterFloating)]
    pub fn enter_floating(&self) {
        self.send(ControlEvent::EnterFloating);
    }

    #[wasm_bindgen(js_name = exitFloating)]
    pub fn exit_floating(&self) {
        self.send(ControlEvent::ExitFloating);
    }

    pub fn minimize(&self) {
        self.send(ControlEvent::Minimize);
    }

    pub fn restore(&self) {
        self.send(ControlEvent::Restore);
    }

    #[wasm_bindgen(js_name = toggleMinimize)]
    pub fn toggle_minimize(&self) {
        self.send(ControlEvent::ToggleMinimize);
    }

    /// Removes the handle and every listener and docks the element.
    /// `enableDragHandle` may be called again afterwards.
    pub fn destroy(&self) {
        self.send(ControlEvent::Destroy);
    }

    /// `"docked"`, `"floating"` or `"dragging"`; `"busy"` if asked from
    /// inside one of the controller's own listeners.
    pub fn mode(&self) -> String {
        self.cell
            .with(|controller| controller.mode())
            .map(FloatMode::label)
            .unwrap_or("busy")
            .to_string()
    }

    #[wasm_bindgen(js_name = isMinimized)]
    pub fn is_minimized(&self) -> bool {
        self.cell
            .with(|controller| controller.is_minimized())
            .unwrap_or(false)
    }

    /// Current `[left, top]` while floating, empty when docked.
    pub fn offset(&self) -> Vec<f64> {
        self.cell
            .with(|controller| controller.offset())
            .flatten()
            .map(|offset| vec![offset.left, offset.top])
            .unwrap_or_default()
    }

    pub fn element(&self) -> Option<HtmlElement> {
        self.cell.with(|controller| controller.host().element().clone())
    }
}
