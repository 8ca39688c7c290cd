use super::*;
use crate::surface::cpu::CpuSurface;

fn surface(w: u32, h: u32) -> (CpuSurface, FrameSize) {
    let size = FrameSize::new(w, h).unwrap();
    (CpuSurface::new(size).unwrap(), size)
}

#[test]
fn wrap_progress_folds_loop_end_onto_start() {
    assert_eq!(wrap_progress(0.0), 0.0);
    assert_eq!(wrap_progress(0.25), 0.25);
    assert_eq!(wrap_progress(1.0), 0.0);
    assert_eq!(wrap_progress(1.5), 0.5);
    assert_eq!(turn(1.0), turn(0.0));
}

#[test]
fn state_reset_restores_seeded_start() {
    let mut state = EffectState::new(42);
    let first = state.rng().next_u64();
    assert!(state.toggle_jitter());
    assert!(!state.toggle_jitter());
    assert!(state.toggle_jitter());

    state.reset();
    assert_eq!(state.seed(), 42);
    assert!(!state.jitter_ccw());
    assert_eq!(state.rng().next_u64(), first);
}

#[test]
fn scale_centered_keeps_center_fixed() {
    let (mut s, size) = surface(40, 20);
    scale_centered(&mut s, size, 0.5, 3.0);
    let c = s.current_transform() * size.center();
    assert_eq!(c, size.center());
}

#[test]
fn rotate_about_keeps_pivot_fixed() {
    let (mut s, _) = surface(40, 20);
    let pivot = Point::new(10.0, 15.0);
    rotate_about(&mut s, pivot, 1.0);
    let p = s.current_transform() * pivot;
    assert!((p - pivot).hypot() < 1e-12);
}

#[test]
fn mirrors_translate_then_negate_axis() {
    let (mut s, size) = surface(30, 20);
    mirror_horizontal(&mut s, size);
    assert_eq!(
        s.current_transform(),
        Affine::new([-1.0, 0.0, 0.0, 1.0, 30.0, 0.0])
    );

    let (mut s, size) = surface(30, 20);
    mirror_vertical(&mut s, size);
    assert_eq!(
        s.current_transform(),
        Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 20.0])
    );
}
