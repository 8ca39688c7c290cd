use std::f64::consts::TAU;

use crate::{
    foundation::{
        core::{Affine, FrameSize, Point},
        error::StickerFxResult,
        math::Rng64,
    },
    surface::Surface,
};

/// Shape shared by every effect: `(progress, surface, frame size, cross-frame state)`.
///
/// `progress` is the loop position in `[0, 1]`; nothing is clamped. The size is read-only.
pub type EffectFn = fn(f64, &mut dyn Surface, FrameSize, &mut EffectState) -> StickerFxResult<()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClass {
    /// Appends to the filter chain.
    Filter,
    /// Composes onto the transform, animated by progress.
    Transform,
    /// Sets shadow color, blur or offset.
    Shadow,
    /// One-shot presentation change, independent of progress.
    Static,
    /// Reads and rewrites the pixel buffer.
    Pixel,
}

/// Cross-frame state owned by the animation driver.
///
/// Holds the jitter direction toggle and the random source behind the jitter and noise
/// effects. It lives as long as the driver keeps it and is not synchronized: use one per
/// driver thread. [`EffectState::reset`] returns it to the state `new(seed)` produced.
#[derive(Clone, Debug)]
pub struct EffectState {
    seed: u64,
    rng: Rng64,
    jitter_ccw: bool,
}

impl EffectState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Rng64::new(seed),
            jitter_ccw: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Direction the next jitter call leaves behind, `true` for counter-clockwise.
    pub fn jitter_ccw(&self) -> bool {
        self.jitter_ccw
    }

    pub(crate) fn toggle_jitter(&mut self) -> bool {
        self.jitter_ccw = !self.jitter_ccw;
        self.jitter_ccw
    }

    pub(crate) fn rng(&mut self) -> &mut Rng64 {
        &mut self.rng
    }
}

impl Default for EffectState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Position within one loop: `progress` modulo 1, so `1.0` lands back on `0.0`.
#[inline]
pub fn wrap_progress(progress: f64) -> f64 {
    progress.rem_euclid(1.0)
}

/// Phase angle of `progress` in radians, one full turn per loop.
#[inline]
pub fn turn(progress: f64) -> f64 {
    TAU * wrap_progress(progress)
}

/// Scales by `(sx, sy)` keeping the frame center fixed.
pub fn scale_centered(surface: &mut dyn Surface, size: FrameSize, sx: f64, sy: f64) {
    surface.transform(Affine::new([
        sx,
        0.0,
        0.0,
        sy,
        size.w() * (1.0 - sx) / 2.0,
        size.h() * (1.0 - sy) / 2.0,
    ]));
}

pub fn rotate_about(surface: &mut dyn Surface, pivot: Point, angle_rad: f64) {
    surface.translate(pivot.x, pivot.y);
    surface.rotate(angle_rad);
    surface.translate(-pivot.x, -pivot.y);
}

pub fn mirror_horizontal(surface: &mut dyn Surface, size: FrameSize) {
    surface.translate(size.w(), 0.0);
    surface.scale(-1.0, 1.0);
}

pub fn mirror_vertical(surface: &mut dyn Surface, size: FrameSize) {
    surface.translate(0.0, size.h());
    surface.scale(1.0, -1.0);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/contract.rs"]
mod tests;
