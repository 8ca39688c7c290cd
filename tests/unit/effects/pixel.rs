use super::*;
use crate::{effects::contract::EffectFn, surface::cpu::CpuSurface};

fn surface_with(width: u32, height: u32, fill: [u8; 4]) -> CpuSurface {
    let mut buf = PixelBuffer::new(width, height).unwrap();
    buf.fill(fill);
    CpuSurface::from_pixels(buf)
}

const CYAN: [u8; 4] = [0, 255, 255, 255];

#[test]
fn tiritiri_only_touches_alpha() {
    let data = vec![
        10, 20, 30, 255, 40, 50, 60, 255, //
        70, 80, 90, 255, 100, 110, 120, 255,
    ];
    let mut s = CpuSurface::from_pixels(PixelBuffer::from_rgba8(2, 2, data.clone()).unwrap());
    let size = s.size();
    tiritiri(0.5, &mut s, size, &mut EffectState::new(9)).unwrap();

    let out = s.pixels().data();
    assert_eq!(out.len(), data.len());
    for (before, after) in data.chunks_exact(4).zip(out.chunks_exact(4)) {
        assert_eq!(&before[..3], &after[..3]);
        assert!(after[3] < 255);
    }
}

#[test]
fn tiritiri_noise_follows_the_seed() {
    let run = |seed| {
        let mut s = surface_with(4, 4, [1, 2, 3, 4]);
        let size = s.size();
        tiritiri(0.0, &mut s, size, &mut EffectState::new(seed)).unwrap();
        s.into_pixels()
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

#[test]
fn psych_paints_three_hue_tiles() {
    let mut s = surface_with(10, 10, [0, 0, 0, 0]);
    let size = s.size();
    psych(0.0, &mut s, size, &mut EffectState::default()).unwrap();
    let px = s.pixels();

    assert_eq!(px.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(px.pixel(9, 9), Some([255, 0, 0, 255]));
    assert_eq!(px.pixel(5, 0), Some(CYAN));
    assert_eq!(px.pixel(9, 5), Some(CYAN));
    assert_eq!(px.pixel(0, 5), Some([127, 255, 0, 255]));
    assert_eq!(px.pixel(2, 6), Some([127, 255, 0, 255]));
    assert_eq!(px.pixel(5, 6), Some([255, 0, 0, 255]));
    assert!(px.data().chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn dizzy_paints_upper_half_of_each_period() {
    let mut s = surface_with(8, 8, [9, 9, 9, 9]);
    let size = s.size();
    dizzy(0.0, &mut s, size, &mut EffectState::default()).unwrap();

    let pixels: Vec<[u8; 4]> = s
        .pixels()
        .data()
        .chunks_exact(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect();
    assert_eq!(pixels.len(), 64);
    for (i, p) in pixels.iter().enumerate() {
        let painted = (i % 40) > 20;
        let expected = if painted { CYAN } else { [9, 9, 9, 9] };
        assert_eq!(*p, expected, "pixel {i}");
    }
}

#[test]
fn dizzy_stripes_crawl_with_progress() {
    let mut s = surface_with(40, 1, [0, 0, 0, 0]);
    let size = s.size();
    dizzy(0.25, &mut s, size, &mut EffectState::default()).unwrap();
    // Shift of 10: index 10 lands on band 20 (untouched), index 11 on band 21.
    assert_eq!(s.pixels().pixel(10, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixels().pixel(11, 0).map(|p| p[3]), Some(255));
}

#[test]
fn pixel_effects_surface_invalid_regions() {
    let mut s = surface_with(2, 2, [0, 0, 0, 0]);
    let too_big = FrameSize::new(4, 4).unwrap();
    let effects: [EffectFn; 3] = [tiritiri, psych, dizzy];
    for effect in effects {
        let err = effect(0.5, &mut s, too_big, &mut EffectState::default()).unwrap_err();
        assert!(err.is_invalid_region(), "{err}");
    }
}

/// Host that hands back a single pixel whatever region is asked for.
struct OnePixelSurface(CpuSurface);

impl Surface for OnePixelSurface {
    fn transform(&mut self, m: crate::foundation::core::Affine) {
        self.0.transform(m);
    }

    fn filter_mut(&mut self) -> &mut crate::surface::filter::FilterChain {
        self.0.filter_mut()
    }

    fn shadow_mut(&mut self) -> &mut crate::surface::shadow::Shadow {
        self.0.shadow_mut()
    }

    fn image_data(&self, _region: PixelRegion) -> StickerFxResult<PixelBuffer> {
        PixelBuffer::new(1, 1)
    }

    fn put_image_data(&mut self, pixels: &PixelBuffer, x: u32, y: u32) -> StickerFxResult<()> {
        self.0.put_image_data(pixels, x, y)
    }
}

#[test]
fn mismatched_host_buffer_is_rejected_before_rewrite() {
    let mut s = OnePixelSurface(surface_with(4, 4, [1, 2, 3, 4]));
    let size = FrameSize::new(4, 4).unwrap();
    let err = psych(0.0, &mut s, size, &mut EffectState::default()).unwrap_err();
    assert!(err.to_string().contains("validation error:"), "{err}");
    assert!(s.0.pixels().data().chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
}
