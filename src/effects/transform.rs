//! Geometric effects. Everything composes onto the current transform.

use std::f64::consts::PI;

use crate::{
    effects::contract::{
        EffectState, mirror_horizontal, rotate_about, scale_centered, turn,
    },
    foundation::{
        core::{Affine, FrameSize, Point},
        error::StickerFxResult,
    },
    surface::Surface,
};

const JITTER_ANGLE_RAD: f64 = 0.05;
const JITTER_SPREAD_PX: f64 = 4.0;

/// Shudder: tilts alternately by ∓0.05 rad per call, with up to ±2px of random offset.
///
/// The direction toggle lives in `state`, so consecutive frames alternate regardless of
/// progress. The first call after `EffectState::new` tilts counter-clockwise.
pub fn gatagata(
    _progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    state: &mut EffectState,
) -> StickerFxResult<()> {
    let ccw = state.toggle_jitter();
    let rng = state.rng();
    let jx = (rng.next_f64_01() - 0.5) * JITTER_SPREAD_PX;
    let jy = (rng.next_f64_01() - 0.5) * JITTER_SPREAD_PX;
    let angle = if ccw {
        -JITTER_ANGLE_RAD
    } else {
        JITTER_ANGLE_RAD
    };
    tracing::trace!(ccw, jx, jy, "gatagata");

    let c = size.center();
    surface.translate(c.x + jx, c.y + jy);
    surface.rotate(angle);
    surface.translate(-c.x, -c.y);
    Ok(())
}

/// Boing: centered scale from 1.5 down to 0.5 at mid-loop and back.
pub fn zoom(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let z = (progress - 0.5).abs() * 2.0 - 0.5;
    surface.transform(Affine::new([
        1.0 + z,
        0.0,
        0.0,
        1.0 + z,
        -size.w() / 2.0 * z,
        -size.h() / 2.0 * z,
    ]));
    Ok(())
}

/// Roulette: one full revolution about the center per loop.
pub fn rotate(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    rotate_about(surface, size.center(), turn(progress));
    Ok(())
}

/// Circles the frame on a path 5% of its size.
pub fn kurukuru(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let phase = turn(progress);
    surface.translate(
        phase.cos() * 0.05 * size.w(),
        phase.sin() * 0.05 * size.h(),
    );
    Ok(())
}

/// Sways between ±π/8 about a pivot three quarters down the frame.
pub fn yurayura(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let pivot = Point::new(size.w() / 2.0, size.h() * 3.0 / 4.0);
    let angle = PI * (progress - 0.5).abs() / 2.0 - PI / 8.0;
    rotate_about(surface, pivot, angle);
    Ok(())
}

/// Flap: squeezes the width through zero and back around the vertical center line.
pub fn patapata(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let c = turn(progress).cos();
    surface.transform(Affine::new([
        c,
        0.0,
        0.0,
        1.0,
        size.w() * (0.5 - 0.5 * c),
        0.0,
    ]));
    Ok(())
}

/// Same motion as [`patapata`], listed under its own label.
pub fn dokaben(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    state: &mut EffectState,
) -> StickerFxResult<()> {
    patapata(progress, surface, size, state)
}

/// Hop: tilted by 0.1 rad and bouncing four times per loop, mirrored for the second half.
pub fn yatta(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    if progress >= 0.5 {
        mirror_horizontal(surface, size);
    }
    rotate_about(surface, size.center(), 0.1);
    surface.translate(0.0, size.h() / 16.0 * (4.0 * turn(progress)).sin());
    Ok(())
}

/// Jump for the first 60% of the loop, then a squash anchored near the bottom edge.
pub fn poyon(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    if progress < 0.6 {
        surface.translate(0.0, -size.h() / 6.0 * (PI * progress / 0.6).sin());
    } else {
        let ratio = (PI * (progress - 0.6) / 0.4).sin() / 2.0;
        squash(surface, size, ratio);
    }
    Ok(())
}

/// Mochi squash: two squash pulses per loop, peaking at the quarter points.
pub fn motimoti(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let ratio = (PI * (progress - 0.5).abs() / 0.5).sin() / 4.0;
    squash(surface, size, ratio);
    Ok(())
}

/// Shown for the first half of the loop, pushed two frame widths off to the left for the rest.
pub fn blink(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    if progress >= 0.5 {
        surface.translate(-size.w() * 2.0, 0.0);
    }
    Ok(())
}

/// Grows from nothing to full size over the first half, then holds.
pub fn straight(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    if progress < 0.5 {
        scale_centered(surface, size, progress * 2.0, progress * 2.0);
    }
    Ok(())
}

/// Widens by `ratio` and flattens by the same amount; `(w/2, 3h/4)` stays fixed.
fn squash(surface: &mut dyn Surface, size: FrameSize, ratio: f64) {
    surface.transform(Affine::new([
        1.0 + ratio,
        0.0,
        0.0,
        1.0 - ratio,
        -ratio * size.w() / 2.0,
        ratio * size.h() * 3.0 / 4.0,
    ]));
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transform.rs"]
mod tests;
