use serde::{Deserialize, Serialize};
use web_sys::Storage;

use miniplayer_core::{FloatError, Offset};

pub(crate) const POSITION_KEY_PREFIX: &str = "miniplayer.float.v1:";
pub(crate) const POSITION_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SavedPosition {
    version: u32,
    offset: Offset,
}

pub(crate) fn position_key(scope: &str) -> String {
    format!("{POSITION_KEY_PREFIX}{scope}")
}

fn session_storage() -> Result<Storage, FloatError> {
    let window = web_sys::window().ok_or_else(|| FloatError::Storage("no window".to_string()))?;
    window
        .session_storage()
        .map_err(|_| FloatError::Storage("session storage blocked".to_string()))?
        .ok_or_else(|| FloatError::Storage("session storage missing".to_string()))
}

pub(crate) fn load_position(key: &str) -> Result<Option<Offset>, FloatError> {
    let storage = session_storage()?;
    let Ok(Some(raw)) = storage.get_item(key) else {
        return Ok(None);
    };
    let Ok(saved) = serde_json::from_str::<SavedPosition>(&raw) else {
        let _ = storage.remove_item(key);
        return Ok(None);
    };
    if saved.version != POSITION_VERSION || !saved.offset.is_finite() {
        return Ok(None);
    }
    Ok(Some(saved.offset))
}

pub(crate) fn save_position(key: &str, offset: Offset) -> Result<(), FloatError> {
    let raw = serde_json::to_string(&SavedPosition {
        version: POSITION_VERSION,
        offset,
    })
    .map_err(|err| FloatError::Storage(err.to_string()))?;
    session_storage()?
        .set_item(key, &raw)
        .map_err(|_| FloatError::Storage("session storage write failed".to_string()))
}
