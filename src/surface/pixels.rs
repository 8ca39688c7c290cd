use crate::foundation::{
    core::FrameSize,
    error::{StickerFxError, StickerFxResult},
};

/// Rectangle of whole pixels, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering a whole frame.
    pub fn full(size: FrameSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Fails with [`StickerFxError::InvalidRegion`] unless the region is non-empty and lies
    /// inside a `surface_width x surface_height` buffer.
    pub fn check_within(self, surface_width: u32, surface_height: u32) -> StickerFxResult<()> {
        let fits_x = self
            .x
            .checked_add(self.width)
            .is_some_and(|r| r <= surface_width);
        let fits_y = self
            .y
            .checked_add(self.height)
            .is_some_and(|b| b <= surface_height);
        if self.width == 0 || self.height == 0 || !fits_x || !fits_y {
            return Err(StickerFxError::InvalidRegion {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                surface_width,
                surface_height,
            });
        }
        Ok(())
    }
}

/// Straight RGBA8, row-major, tightly packed: `data.len() == width * height * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> StickerFxResult<Self> {
        let len = rgba_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> StickerFxResult<Self> {
        let expected = rgba_len(width, height)?;
        if data.len() != expected {
            return Err(StickerFxError::validation(format!(
                "pixel buffer for {width}x{height} must hold {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> StickerFxResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }

    pub fn to_rgba_image(&self) -> StickerFxResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| StickerFxError::validation("pixel buffer does not match its size"))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> FrameSize {
        FrameSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
        true
    }

    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Copies `region` into a new buffer.
    pub fn crop(&self, region: PixelRegion) -> StickerFxResult<Self> {
        region.check_within(self.width, self.height)?;
        let mut out = Self::new(region.width, region.height)?;
        let row_bytes = region.width as usize * 4;
        for row in 0..region.height {
            let src = self.offset(region.x, region.y + row);
            let dst = row as usize * row_bytes;
            out.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        Ok(out)
    }

    /// Overwrites the pixels under `src` placed at `(x, y)`.
    pub fn blit(&mut self, src: &PixelBuffer, x: u32, y: u32) -> StickerFxResult<()> {
        PixelRegion::new(x, y, src.width, src.height).check_within(self.width, self.height)?;
        let row_bytes = src.width as usize * 4;
        for row in 0..src.height {
            let dst = self.offset(x, y + row);
            let from = row as usize * row_bytes;
            self.data[dst..dst + row_bytes].copy_from_slice(&src.data[from..from + row_bytes]);
        }
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

fn rgba_len(width: u32, height: u32) -> StickerFxResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| StickerFxError::validation("pixel buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixels.rs"]
mod tests;
