//! Static presentation effects; progress is ignored.

use crate::{
    effects::contract::{EffectState, mirror_horizontal, mirror_vertical},
    foundation::{core::FrameSize, error::StickerFxResult},
    surface::Surface,
};

pub fn flip_horiz(
    _progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    mirror_horizontal(surface, size);
    Ok(())
}

pub fn flip_vert(
    _progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    mirror_vertical(surface, size);
    Ok(())
}
