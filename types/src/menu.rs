use serde::{Deserialize, Serialize};

/// Identifies an icon without tying the menu to a rendering framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Dashboard,
    Box,
    UserSquare,
    Bell,
    Settings,
    User,
    GridDots,
    ArrowForward,
}

/// A sidebar entry. The path doubles as the menu key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub path: String,
    pub icon: IconId,
    pub label: String,
}

impl MenuItem {
    pub fn new(path: impl Into<String>, icon: IconId, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            icon,
            label: label.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.path
    }
}

/// Direction the collapse toggle arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points forward: the panel is collapsed and the control expands it.
    Forward,
    /// Rotated half a turn: the panel is expanded and the control collapses it.
    Back,
}

impl Orientation {
    pub fn rotation_degrees(self) -> u16 {
        match self {
            Orientation::Forward => 0,
            Orientation::Back => 180,
        }
    }
}
