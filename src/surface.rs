//! Drawing-surface abstraction that effects mutate.

pub(crate) mod cpu;
pub(crate) mod filter;
pub(crate) mod pixels;
pub(crate) mod shadow;

use crate::{
    foundation::{core::Affine, error::StickerFxResult},
    surface::{
        filter::FilterChain,
        pixels::{PixelBuffer, PixelRegion},
        shadow::Shadow,
    },
};

/// Mutable drawing-context state owned by the host.
///
/// Transforms always compose: `transform(m)` right-multiplies the current matrix, as a 2D canvas
/// context does, so several effects stack within one frame. Nothing here replaces the matrix
/// outright; resetting between frames is the host's job.
pub trait Surface {
    fn transform(&mut self, m: Affine);

    fn translate(&mut self, x: f64, y: f64) {
        self.transform(Affine::translate((x, y)));
    }

    fn rotate(&mut self, angle_rad: f64) {
        self.transform(Affine::rotate(angle_rad));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform(Affine::scale_non_uniform(sx, sy));
    }

    fn filter_mut(&mut self) -> &mut FilterChain;

    fn shadow_mut(&mut self) -> &mut Shadow;

    /// Copies `region` out of the pixel buffer.
    fn image_data(&self, region: PixelRegion) -> StickerFxResult<PixelBuffer>;

    /// Writes `pixels` back with its top-left corner at `(x, y)`.
    fn put_image_data(&mut self, pixels: &PixelBuffer, x: u32, y: u32) -> StickerFxResult<()>;
}
