use serde::{Deserialize, Serialize};

use crate::error::FloatError;
use crate::snap::SnapOptions;

pub const DEFAULT_MIN_VISIBLE: f64 = 50.0;
pub const DEFAULT_FLOAT_MARGIN: f64 = 20.0;
pub const DEFAULT_FLOAT_WIDTH: f64 = 400.0;
pub const DEFAULT_Z_INDEX: i32 = 1001;
pub const DEFAULT_SNAP_ANIMATION_MS: u32 = 300;
pub const DEFAULT_HANDLE_LABEL: &str = "Drag";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloatOptions {
    /// How much of the element must stay on screen when dragged off the
    /// left edge.
    pub min_visible: f64,
    /// `None` turns edge snapping off.
    pub snap: Option<SnapOptions>,
    pub float_margin: f64,
    pub float_width: Option<f64>,
    pub z_index: i32,
    pub snap_animation_ms: u32,
    pub remember_position: bool,
    pub handle_label: String,
    pub float_button: bool,
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self::mini_player()
    }
}

impl FloatOptions {
    pub fn mini_player() -> Self {
        Self {
            min_visible: DEFAULT_MIN_VISIBLE,
            snap: Some(SnapOptions::default()),
            float_margin: DEFAULT_FLOAT_MARGIN,
            float_width: Some(DEFAULT_FLOAT_WIDTH),
            z_index: DEFAULT_Z_INDEX,
            snap_animation_ms: DEFAULT_SNAP_ANIMATION_MS,
            remember_position: false,
            handle_label: DEFAULT_HANDLE_LABEL.to_string(),
            float_button: false,
        }
    }

    pub fn simple() -> Self {
        Self {
            min_visible: 0.0,
            snap: None,
            float_button: true,
            ..Self::mini_player()
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "mini-player" | "mini_player" => Some(Self::mini_player()),
            "simple" => Some(Self::simple()),
            _ => None,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, FloatError> {
        let options: FloatOptions =
            serde_json::from_str(raw).map_err(|err| FloatError::InvalidOptions(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), FloatError> {
        non_negative("minVisible", self.min_visible)?;
        non_negative("floatMargin", self.float_margin)?;
        if let Some(width) = self.float_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(FloatError::InvalidOptions(format!(
                    "floatWidth must be positive, got {width}"
                )));
            }
        }
        if let Some(snap) = self.snap {
            non_negative("snap.distance", snap.distance)?;
            non_negative("snap.margin", snap.margin)?;
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), FloatError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FloatError::InvalidOptions(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}
