use crate::{
    foundation::{
        core::{Affine, FrameSize},
        error::StickerFxResult,
        math::Fnv1a64,
    },
    surface::{
        Surface,
        filter::FilterChain,
        pixels::{PixelBuffer, PixelRegion},
        shadow::Shadow,
    },
};

/// In-memory [`Surface`]: an affine transform, a filter chain, shadow state and one RGBA8
/// buffer the size of the frame.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    transform: Affine,
    filter: FilterChain,
    shadow: Shadow,
    pixels: PixelBuffer,
}

/// Serializable view of a surface's drawing state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSnapshot {
    /// Canvas order `[a, b, c, d, e, f]`.
    pub transform: [f64; 6],
    pub filter: String,
    pub shadow_color: String,
    pub shadow_blur: f64,
    pub shadow_offset: [f64; 2],
    /// FNV-1a over the pixel bytes.
    pub pixels_fnv: u64,
}

impl CpuSurface {
    pub fn new(size: FrameSize) -> StickerFxResult<Self> {
        Ok(Self::from_pixels(PixelBuffer::new(size.width, size.height)?))
    }

    pub fn from_pixels(pixels: PixelBuffer) -> Self {
        Self {
            transform: Affine::IDENTITY,
            filter: FilterChain::new(),
            shadow: Shadow::default(),
            pixels,
        }
    }

    pub fn size(&self) -> FrameSize {
        self.pixels.size()
    }

    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    pub fn filter(&self) -> &FilterChain {
        &self.filter
    }

    /// Replaces the chain from a textual descriptor (`"none"` clears it).
    pub fn set_filter_descriptor(&mut self, descriptor: &str) -> StickerFxResult<()> {
        self.filter = FilterChain::parse(descriptor)?;
        Ok(())
    }

    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// Per-frame reset: identity transform, no filter, default shadow. Pixels are kept.
    pub fn reset_state(&mut self) {
        self.transform = Affine::IDENTITY;
        self.filter.clear();
        self.shadow = Shadow::default();
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.pixels.data());
        SurfaceSnapshot {
            transform: self.transform.as_coeffs(),
            filter: self.filter.to_descriptor(),
            shadow_color: self.shadow.color.to_string(),
            shadow_blur: self.shadow.blur,
            shadow_offset: [self.shadow.offset.x, self.shadow.offset.y],
            pixels_fnv: h.finish(),
        }
    }
}

impl Surface for CpuSurface {
    fn transform(&mut self, m: Affine) {
        self.transform *= m;
    }

    fn filter_mut(&mut self) -> &mut FilterChain {
        &mut self.filter
    }

    fn shadow_mut(&mut self) -> &mut Shadow {
        &mut self.shadow
    }

    fn image_data(&self, region: PixelRegion) -> StickerFxResult<PixelBuffer> {
        self.pixels.crop(region)
    }

    fn put_image_data(&mut self, pixels: &PixelBuffer, x: u32, y: u32) -> StickerFxResult<()> {
        self.pixels.blit(pixels, x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
