use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::styles::{FLOAT_BUTTON_CLASS, HANDLE_CLASS};

const FLOAT_TITLE: &str = "Float video";
const DOCK_TITLE: &str = "Dock video";
const FLOAT_ICON: &str = "fas fa-external-link-alt";
const DOCK_ICON: &str = "fas fa-compress";

pub(crate) struct HandleParts {
    pub(crate) handle: HtmlElement,
    pub(crate) button: Option<HtmlElement>,
}

impl HandleParts {
    pub(crate) fn build(
        document: &Document,
        label: &str,
        with_button: bool,
    ) -> Result<Self, JsValue> {
        let handle = html_element(document, "div")?;
        handle.set_class_name(HANDLE_CLASS);
        handle.set_attribute("role", "button")?;
        handle.set_attribute("aria-label", "Drag video")?;

        let dots = html_element(document, "div")?;
        dots.set_class_name("mini-drag-dots");
        for _ in 0..3 {
            let dot: web_sys::Element = document.create_element("span")?;
            dots.append_child(&dot)?;
        }
        handle.append_child(&dots)?;

        let text = html_element(document, "span")?;
        text.set_class_name("mini-drag-text");
        text.set_text_content(Some(label));
        handle.append_child(&text)?;

        let button = if with_button {
            let button = html_element(document, "button")?;
            button.set_class_name(FLOAT_BUTTON_CLASS);
            button.set_attribute("type", "button")?;
            let icon = document.create_element("i")?;
            button.append_child(&icon)?;
            Some(button)
        } else {
            None
        };

        let parts = Self { handle, button };
        parts.show_floating(false)?;
        Ok(parts)
    }

    pub(crate) fn show_floating(&self, floating: bool) -> Result<(), JsValue> {
        let display = if floating { "flex" } else { "none" };
        self.handle.style().set_property("display", display)?;
        let Some(button) = self.button.as_ref() else {
            return Ok(());
        };
        let (title, icon) = if floating {
            (DOCK_TITLE, DOCK_ICON)
        } else {
            (FLOAT_TITLE, FLOAT_ICON)
        };
        button.set_title(title);
        button.set_attribute("aria-label", title)?;
        if let Some(glyph) = button.first_element_child() {
            glyph.set_class_name(icon);
        }
        Ok(())
    }

    pub(crate) fn remove(&self) {
        self.handle.remove();
        if let Some(button) = self.button.as_ref() {
            button.remove();
        }
    }
}

fn html_element(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document.create_element(tag)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}
