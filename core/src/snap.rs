use serde::{Deserialize, Serialize};

use crate::geometry::{Offset, Size, Viewport};

pub const DEFAULT_SNAP_DISTANCE: f64 = 50.0;
pub const DEFAULT_SNAP_MARGIN: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapOptions {
    pub distance: f64,
    pub margin: f64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            distance: DEFAULT_SNAP_DISTANCE,
            margin: DEFAULT_SNAP_MARGIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOutcome {
    pub offset: Offset,
    pub horizontal: Option<HorizontalEdge>,
    pub vertical: Option<VerticalEdge>,
}

impl SnapOutcome {
    pub fn snapped(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }
}

/// Pulls a settled element flush (minus `margin`) to any viewport edge it
/// ended within `distance` of. Left wins over right and top over bottom
/// when an element is close to both.
pub fn snap_to_edges(
    offset: Offset,
    element: Size,
    viewport: Viewport,
    options: SnapOptions,
) -> SnapOutcome {
    let mut outcome = SnapOutcome {
        offset,
        horizontal: None,
        vertical: None,
    };
    if !element.is_measurable() || !viewport.is_measurable() || !offset.is_finite() {
        return outcome;
    }
    let right = offset.left + element.width;
    let bottom = offset.top + element.height;

    if offset.left < options.distance {
        outcome.offset.left = options.margin;
        outcome.horizontal = Some(HorizontalEdge::Left);
    } else if right > viewport.width - options.distance {
        outcome.offset.left = viewport.width - element.width - options.margin;
        outcome.horizontal = Some(HorizontalEdge::Right);
    }

    if offset.top < options.distance {
        outcome.offset.top = options.margin;
        outcome.vertical = Some(VerticalEdge::Top);
    } else if bottom > viewport.height - options.distance {
        outcome.offset.top = viewport.height - element.height - options.margin;
        outcome.vertical = Some(VerticalEdge::Bottom);
    }
    outcome
}
