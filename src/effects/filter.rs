//! Filter-chain effects. Each one appends to whatever the chain already holds.

use crate::{
    effects::contract::{EffectState, turn, wrap_progress},
    foundation::{core::FrameSize, error::StickerFxResult},
    surface::{Surface, filter::FilterOp},
};

/// Oversaturated hue cycle, one full turn of the color wheel per loop.
pub fn kira(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let chain = surface.filter_mut();
    chain.push(FilterOp::Saturate(1000.0));
    chain.push(FilterOp::HueRotate(wrap_progress(progress) * 360.0));
    Ok(())
}

/// Blur breathing between 5px and 7px.
pub fn moyamoya(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    surface
        .filter_mut()
        .push(FilterOp::Blur(6.0 + turn(progress).cos()));
    Ok(())
}

/// Brightness shimmer between 100% and 140%, in whole percent.
pub fn foil(
    progress: f64,
    surface: &mut dyn Surface,
    _size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let percent = 120.0 + (20.0 * turn(progress).sin()).floor();
    surface.filter_mut().push(FilterOp::Brightness(percent));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filter.rs"]
mod tests;
