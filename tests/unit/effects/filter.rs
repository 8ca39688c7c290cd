use super::*;
use crate::{effects::contract::EffectFn, surface::cpu::CpuSurface};

fn run(effect: EffectFn, progress: f64, s: &mut CpuSurface) {
    let size = s.size();
    effect(progress, s, size, &mut EffectState::default()).unwrap();
}

fn surface() -> CpuSurface {
    CpuSurface::new(FrameSize::new(8, 8).unwrap()).unwrap()
}

#[test]
fn kira_appends_saturate_and_hue() {
    let mut s = surface();
    run(kira, 0.25, &mut s);
    assert_eq!(
        s.filter().to_descriptor(),
        "saturate(1000%) hue-rotate(90deg)"
    );
}

#[test]
fn moyamoya_blur_breathes_between_5_and_7() {
    let mut s = surface();
    run(moyamoya, 0.0, &mut s);
    run(moyamoya, 0.5, &mut s);
    let ops = s.filter().ops();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], FilterOp::Blur(7.0));
    let FilterOp::Blur(px) = &ops[1] else {
        panic!("expected blur, got {:?}", ops[1]);
    };
    assert!((px - 5.0).abs() < 1e-12);
}

#[test]
fn foil_brightness_is_whole_percent() {
    for (p, expected) in [(0.0, 120.0), (0.25, 140.0), (0.75, 100.0), (1.0, 120.0)] {
        let mut s = surface();
        run(foil, p, &mut s);
        assert_eq!(s.filter().ops(), &[FilterOp::Brightness(expected)], "{p}");
    }
}

#[test]
fn filter_effects_keep_existing_descriptor_as_prefix() {
    let mut s = surface();
    s.set_filter_descriptor("blur(2px)").unwrap();
    run(kira, 0.5, &mut s);
    run(foil, 0.0, &mut s);
    assert_eq!(
        s.filter().to_descriptor(),
        "blur(2px) saturate(1000%) hue-rotate(180deg) brightness(120%)"
    );
}

#[test]
fn filter_effects_keep_a_host_prefix_with_drop_shadow() {
    let mut s = surface();
    s.set_filter_descriptor("blur(2px) drop-shadow(1px 1px 0px red)")
        .unwrap();
    run(kira, 0.0, &mut s);
    assert_eq!(
        s.filter().to_descriptor(),
        "blur(2px) drop-shadow(1px 1px 0px red) saturate(1000%) hue-rotate(0deg)"
    );
}
