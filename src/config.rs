use gloo::console;
use js_sys::{Reflect, JSON};
use wasm_bindgen::JsValue;

use miniplayer_core::FloatOptions;

/// Page-wide options a template can set before the controller is created,
/// either as a JSON string or a plain object.
pub(crate) const GLOBAL_OPTIONS_KEY: &str = "__MINIPLAYER_OPTIONS";

/// Explicit JSON wins, then the page global, then the mini-player preset.
pub(crate) fn resolve_options(explicit: Option<&str>) -> FloatOptions {
    let raw = explicit
        .filter(|raw| !raw.trim().is_empty())
        .map(str::to_string)
        .or_else(global_options_json);
    let Some(raw) = raw else {
        return FloatOptions::default();
    };
    FloatOptions::from_json(&raw).unwrap_or_else(|err| {
        console::warn!(format!("float: {err}, using defaults"));
        FloatOptions::default()
    })
}

fn global_options_json() -> Option<String> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(GLOBAL_OPTIONS_KEY)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    JSON::stringify(&value).ok()?.as_string()
}
