use crate::{
    color::hsv::hsv_to_rgb,
    effects::contract::{EffectState, turn},
    foundation::{
        core::{FrameSize, Vec2},
        error::StickerFxResult,
    },
    surface::{Surface, shadow::ShadowColor},
};

/// Black drop shadow orbiting the sticker at a 5px radius.
pub fn shadow_rotate(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let phase = turn(progress);
    let shadow = surface.shadow_mut();
    shadow.color = ShadowColor::Black;
    shadow.offset = Vec2::new(phase.sin() * 5.0, phase.cos() * 5.0);
    Ok(())
}

/// Glow ramping from black/no blur to white/50px across the loop.
pub fn natural_blur(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let shadow = surface.shadow_mut();
    shadow.color = ShadowColor::Rgb(hsv_to_rgb(0.0, 0.0, progress));
    shadow.blur = 50.0 * progress;
    Ok(())
}

/// Fully saturated glow cycling the hue wheel four times per loop.
pub fn neon(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let hue = (progress * 360.0 * 4.0).floor().rem_euclid(360.0);
    let shadow = surface.shadow_mut();
    shadow.color = ShadowColor::Rgb(hsv_to_rgb(hue, 1.0, 1.0));
    shadow.blur = 10.0;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
