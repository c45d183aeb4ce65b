use wasm_bindgen::JsValue;
use web_sys::Document;

pub(crate) const STYLE_ELEMENT_ID: &str = "miniplayer-float-styles";

pub(crate) const FLOATING_CLASS: &str = "floating";
pub(crate) const DRAGGING_CLASS: &str = "dragging";
pub(crate) const MINIMIZED_CLASS: &str = "minimized";
pub(crate) const HANDLE_CLASS: &str = "mini-video-drag-handle";
pub(crate) const FLOAT_BUTTON_CLASS: &str = "float-toggle-btn";

const STYLES: &str = r#"
.mini-video-drag-handle {
    position: absolute;
    top: 5px;
    left: 5px;
    min-width: 60px;
    height: 20px;
    display: none;
    align-items: center;
    justify-content: center;
    gap: 4px;
    padding: 0 6px;
    border-radius: 4px;
    background: rgba(0, 0, 0, 0.7);
    color: #fff;
    font: 500 10px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    cursor: move;
    user-select: none;
    touch-action: none;
    z-index: 1002;
}
.floating:hover > .mini-video-drag-handle {
    background: rgba(0, 0, 0, 0.9);
}
.mini-drag-dots {
    display: flex;
    gap: 1px;
}
.mini-drag-dots span {
    width: 2px;
    height: 2px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.8);
}
.float-toggle-btn {
    position: absolute;
    top: 10px;
    right: 10px;
    padding: 8px;
    border: none;
    border-radius: 50%;
    background: rgba(0, 0, 0, 0.7);
    color: #fff;
    font-size: 12px;
    cursor: pointer;
    z-index: 1002;
}
.floating {
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
    border-radius: 8px;
    overflow: hidden;
}
.floating.dragging {
    box-shadow: 0 8px 25px rgba(0, 0, 0, 0.45);
}
.minimized {
    height: 40px;
    cursor: pointer;
}
@media (max-width: 768px) {
    .mini-video-drag-handle {
        min-width: 50px;
        height: 18px;
        font-size: 8px;
    }
}
"#;

/// Adds the shared stylesheet to `<head>` unless a controller already did.
pub(crate) fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLES));
    head.append_child(&style)?;
    Ok(())
}
