use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Window};

use miniplayer_core::{
    FloatError, FloatHost, FloatMode, FloatOptions, Motion, Offset, Size, Viewport,
};

use crate::handle::HandleParts;
use crate::input::{self, Dispatcher};
use crate::persisted;
use crate::styles::{self, DRAGGING_CLASS, FLOATING_CLASS, MINIMIZED_CLASS};

/// Inline properties the controller owns while floating. Docking removes
/// all of them so page layout takes over again.
const FLOAT_PROPERTIES: [&str; 10] = [
    "position",
    "z-index",
    "width",
    "max-width",
    "left",
    "top",
    "right",
    "bottom",
    "transform",
    "transition",
];

const MEDIA_SELECTOR: &str = "video, iframe";

/// Keeps a fixed float width from running off narrow screens.
const FLOAT_MAX_WIDTH: &str = "90vw";

pub(crate) struct DomHost {
    window: Window,
    document: Document,
    element: HtmlElement,
    dispatcher: Dispatcher,
    storage_key: String,
    handle: Option<HandleParts>,
    handle_listeners: Vec<EventListener>,
    session_listeners: Vec<EventListener>,
    transition_reset: Option<Timeout>,
    saved_user_select: Option<String>,
}

impl DomHost {
    pub(crate) fn new(
        window: Window,
        document: Document,
        element: HtmlElement,
        dispatcher: Dispatcher,
        scope: &str,
    ) -> Self {
        Self {
            window,
            document,
            element,
            dispatcher,
            storage_key: persisted::position_key(scope),
            handle: None,
            handle_listeners: Vec::new(),
            session_listeners: Vec::new(),
            transition_reset: None,
            saved_user_select: None,
        }
    }

    pub(crate) fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn try_install_handle(&mut self, options: &FloatOptions) -> Result<(), JsValue> {
        styles::ensure_styles(&self.document)?;
        let parts =
            HandleParts::build(&self.document, &options.handle_label, options.float_button)?;
        self.element.append_child(&parts.handle)?;
        if let Some(button) = parts.button.as_ref() {
            self.element.append_child(button)?;
        }
        self.handle_listeners = input::handle_listeners(
            &self.window,
            &self.element,
            &parts.handle,
            parts.button.as_ref(),
            &self.dispatcher,
        );
        self.handle = Some(parts);
        Ok(())
    }

    fn try_apply_mode(&mut self, mode: FloatMode, options: &FloatOptions) -> Result<(), JsValue> {
        let style = self.element.style();
        let classes = self.element.class_list();
        match mode {
            FloatMode::Docked => {
                self.transition_reset.take();
                classes.remove_2(FLOATING_CLASS, DRAGGING_CLASS)?;
                for property in FLOAT_PROPERTIES {
                    style.remove_property(property)?;
                }
            }
            FloatMode::Floating | FloatMode::Dragging => {
                classes.add_1(FLOATING_CLASS)?;
                style.set_property("position", "fixed")?;
                style.set_property("z-index", &options.z_index.to_string())?;
                if let Some(width) = options.float_width {
                    style.set_property("width", &px(width))?;
                }
                style.set_property("max-width", FLOAT_MAX_WIDTH)?;
                style.set_property("right", "auto")?;
                style.set_property("bottom", "auto")?;
                style.set_property("transform", "none")?;
                if mode == FloatMode::Dragging {
                    self.transition_reset.take();
                    classes.add_1(DRAGGING_CLASS)?;
                    style.set_property("transition", "none")?;
                } else {
                    classes.remove_1(DRAGGING_CLASS)?;
                }
            }
        }
        if let Some(parts) = self.handle.as_ref() {
            parts.show_floating(mode.is_floating())?;
        }
        Ok(())
    }

    fn try_apply_offset(&mut self, offset: Offset, motion: Motion) -> Result<(), JsValue> {
        let style = self.element.style();
        self.transition_reset.take();
        match motion {
            Motion::Instant => {
                style.set_property("transition", "none")?;
            }
            Motion::Animated { duration_ms } => {
                style.set_property(
                    "transition",
                    &format!("left {duration_ms}ms ease, top {duration_ms}ms ease"),
                )?;
                let element = self.element.clone();
                self.transition_reset = Some(Timeout::new(duration_ms, move || {
                    let _ = element.style().remove_property("transition");
                }));
            }
        }
        write_offset(&style, offset)
    }

    fn try_lock_selection(&mut self) -> Result<(), JsValue> {
        let Some(body) = self.document.body() else {
            return Ok(());
        };
        let style = body.style();
        if self.saved_user_select.is_none() {
            self.saved_user_select = Some(style.get_property_value("user-select")?);
        }
        style.set_property("user-select", "none")?;
        style.set_property("-webkit-user-select", "none")?;
        Ok(())
    }

    fn try_unlock_selection(&mut self) -> Result<(), JsValue> {
        let saved = self.saved_user_select.take().unwrap_or_default();
        let Some(body) = self.document.body() else {
            return Ok(());
        };
        let style = body.style();
        style.remove_property("-webkit-user-select")?;
        if saved.is_empty() {
            style.remove_property("user-select")?;
        } else {
            style.set_property("user-select", &saved)?;
        }
        Ok(())
    }

    fn try_set_minimized(&self, minimized: bool) -> Result<(), JsValue> {
        let classes = self.element.class_list();
        if minimized {
            classes.add_1(MINIMIZED_CLASS)?;
        } else {
            classes.remove_1(MINIMIZED_CLASS)?;
        }
        let media = self.element.query_selector_all(MEDIA_SELECTOR)?;
        for index in 0..media.length() {
            let Some(node) = media.get(index) else {
                continue;
            };
            let Some(style) = node.dyn_ref::<HtmlElement>().map(|el| el.style()) else {
                continue;
            };
            if minimized {
                style.set_property("display", "none")?;
            } else {
                style.remove_property("display")?;
            }
        }
        Ok(())
    }

    fn warn(&self, action: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            console::warn!(format!("float: {action} failed"), err);
        }
    }
}

impl FloatHost for DomHost {
    fn element_size(&self) -> Size {
        let rect = self.element.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    fn element_offset(&self) -> Offset {
        let rect = self.element.get_bounding_client_rect();
        Offset::new(rect.left(), rect.top())
    }

    fn viewport(&self) -> Viewport {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Viewport::new(width.unwrap_or(0.0), height.unwrap_or(0.0))
    }

    fn install_handle(&mut self, options: &FloatOptions) {
        let result = self.try_install_handle(options);
        self.warn("installing drag handle", result);
    }

    fn remove_handle(&mut self) {
        self.handle_listeners.clear();
        if let Some(parts) = self.handle.take() {
            parts.remove();
        }
    }

    fn attach_session_listeners(&mut self) {
        self.session_listeners = input::session_listeners(&self.window, &self.dispatcher);
    }

    fn detach_session_listeners(&mut self) {
        self.session_listeners.clear();
    }

    fn lock_selection(&mut self) {
        let result = self.try_lock_selection();
        self.warn("disabling text selection", result);
    }

    fn unlock_selection(&mut self) {
        let result = self.try_unlock_selection();
        self.warn("restoring text selection", result);
    }

    fn apply_mode(&mut self, mode: FloatMode, options: &FloatOptions) {
        let result = self.try_apply_mode(mode, options);
        self.warn(mode.label(), result);
    }

    fn apply_offset(&mut self, offset: Offset, motion: Motion) {
        let result = self.try_apply_offset(offset, motion);
        self.warn("positioning", result);
    }

    fn clear_offset(&mut self) {
        self.transition_reset.take();
        let style = self.element.style();
        let result = ["left", "top", "right", "bottom", "transition"]
            .into_iter()
            .try_for_each(|property| style.remove_property(property).map(|_| ()));
        self.warn("clearing position", result);
    }

    fn set_minimized(&mut self, minimized: bool) {
        let result = self.try_set_minimized(minimized);
        self.warn("minimize", result);
    }

    fn load_position(&mut self) -> Result<Option<Offset>, FloatError> {
        persisted::load_position(&self.storage_key)
    }

    fn store_position(&mut self, offset: Offset) -> Result<(), FloatError> {
        persisted::save_position(&self.storage_key, offset)
    }

    fn report(&self, error: &FloatError) {
        console::warn!(format!("float: {error}"));
    }

    fn note(&self, message: &str) {
        console::log!(message);
    }
}

fn write_offset(style: &CssStyleDeclaration, offset: Offset) -> Result<(), JsValue> {
    style.set_property("left", &px(offset.left))?;
    style.set_property("top", &px(offset.top))?;
    style.set_property("right", "auto")?;
    style.set_property("bottom", "auto")?;
    Ok(())
}

fn px(value: f64) -> String {
    format!("{value}px")
}
