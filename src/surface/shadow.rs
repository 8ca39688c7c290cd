use std::fmt;

use crate::{color::hsv::Rgb8, foundation::core::Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "rgb", rename_all = "snake_case")]
pub enum ShadowColor {
    /// Canvas default; no shadow is drawn.
    #[default]
    Transparent,
    Black,
    Rgb(Rgb8),
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadowColor::Transparent => f.write_str("rgba(0, 0, 0, 0)"),
            ShadowColor::Black => f.write_str("black"),
            ShadowColor::Rgb(c) => c.fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub color: ShadowColor,
    pub blur: f64,
    pub offset: Vec2,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: ShadowColor::Transparent,
            blur: 0.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Shadow {
    /// Whether drawing with this state would produce a visible shadow.
    pub fn is_visible(&self) -> bool {
        self.color != ShadowColor::Transparent && (self.blur > 0.0 || self.offset != Vec2::ZERO)
    }
}
