use crate::foundation::error::{StickerFxError, StickerFxResult};

pub use kurbo::{Affine, Point, Vec2};

/// Width and height of the render target, constant for one effect invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> StickerFxResult<Self> {
        let size = Self { width, height };
        if size.is_empty() {
            return Err(StickerFxError::validation(format!(
                "frame size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(size)
    }

    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
