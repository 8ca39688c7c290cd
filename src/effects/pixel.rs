//! Pixel-level effects: read the whole frame, rewrite it, write it back.
//!
//! These are O(width * height) per call and never change the buffer length or channel order.

use crate::{
    color::hsv::{Rgb8, hsv_to_rgb},
    effects::contract::EffectState,
    foundation::{
        core::FrameSize,
        error::{StickerFxError, StickerFxResult},
    },
    surface::{
        Surface,
        pixels::{PixelBuffer, PixelRegion},
    },
};

/// Static noise: every pixel gets a random alpha in `0..=254`; color channels are untouched.
pub fn tiritiri(
    _progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    state: &mut EffectState,
) -> StickerFxResult<()> {
    let rng = state.rng();
    rewrite_frame(surface, size, |buf| {
        for px in buf.data_mut().chunks_exact_mut(4) {
            px[3] = (255.0 * rng.next_f64_01()).floor() as u8;
        }
    })
}

/// Disco: 10x10 tiles split into three bands, each in its own hue, all cycling four times
/// per loop. Fully opaque.
pub fn psych(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let base = (progress * 360.0 * 4.0).floor();
    let primary = hsv_to_rgb(base.rem_euclid(360.0), 1.0, 1.0);
    let quarter = hsv_to_rgb((base + 90.0).rem_euclid(360.0), 1.0, 1.0);
    let opposite = hsv_to_rgb((base + 180.0).rem_euclid(360.0), 1.0, 1.0);

    let width = size.width as usize;
    rewrite_frame(surface, size, |buf| {
        for (i, px) in buf.data_mut().chunks_exact_mut(4).enumerate() {
            let row = (i / width) % 10;
            let col = (i % width) % 10;
            let color = if row <= 5 && col >= 5 {
                opposite
            } else if (row < 5) ^ (col < 5) {
                quarter
            } else {
                primary
            };
            write_opaque(px, color);
        }
    })
}

/// Psychedelic stripes: pixels whose scan index falls in the upper half of a 40-pixel period
/// are painted in a complementary cycling hue. The stripes crawl one period per loop.
pub fn dizzy(
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    _state: &mut EffectState,
) -> StickerFxResult<()> {
    let hue = (progress * 360.0 * 4.0).floor().rem_euclid(360.0) + 180.0;
    let color = hsv_to_rgb(hue, 1.0, 1.0);
    let shift = progress * 40.0;

    rewrite_frame(surface, size, |buf| {
        for (i, px) in buf.data_mut().chunks_exact_mut(4).enumerate() {
            let band = (i as f64 + shift).floor().rem_euclid(40.0);
            if band > 20.0 {
                write_opaque(px, color);
            }
        }
    })
}

fn write_opaque(px: &mut [u8], color: Rgb8) {
    px[0] = color.r;
    px[1] = color.g;
    px[2] = color.b;
    px[3] = 255;
}

fn rewrite_frame(
    surface: &mut dyn Surface,
    size: FrameSize,
    rewrite: impl FnOnce(&mut PixelBuffer),
) -> StickerFxResult<()> {
    let mut buf = surface.image_data(PixelRegion::full(size))?;
    if buf.size() != size {
        return Err(StickerFxError::validation(format!(
            "surface returned {}x{} pixels for a {}x{} frame",
            buf.width(),
            buf.height(),
            size.width,
            size.height
        )));
    }
    tracing::debug!(
        width = size.width,
        height = size.height,
        pixels = size.pixel_count(),
        "rewriting frame pixels"
    );
    rewrite(&mut buf);
    surface.put_image_data(&buf, 0, 0)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixel.rs"]
mod tests;
