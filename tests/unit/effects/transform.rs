use super::*;
use crate::{effects::contract::EffectFn, surface::cpu::CpuSurface};

fn apply_with(effect: EffectFn, progress: f64, size: FrameSize, state: &mut EffectState) -> Affine {
    let mut s = CpuSurface::new(size).unwrap();
    effect(progress, &mut s, size, state).unwrap();
    s.current_transform()
}

fn apply(effect: EffectFn, progress: f64) -> Affine {
    let size = FrameSize::new(100, 80).unwrap();
    apply_with(effect, progress, size, &mut EffectState::default())
}

fn assert_affine_close(a: Affine, b: Affine) {
    let (ca, cb) = (a.as_coeffs(), b.as_coeffs());
    for i in 0..6 {
        assert!((ca[i] - cb[i]).abs() < 1e-9, "{ca:?} vs {cb:?}");
    }
}

fn rotation_of(m: Affine) -> f64 {
    let c = m.as_coeffs();
    c[1].atan2(c[0])
}

#[test]
fn periodic_effects_match_at_loop_ends() {
    let periodic: [(&str, EffectFn); 8] = [
        ("zoom", zoom),
        ("rotate", rotate),
        ("kurukuru", kurukuru),
        ("yurayura", yurayura),
        ("patapata", patapata),
        ("dokaben", dokaben),
        ("poyon", poyon),
        ("motimoti", motimoti),
    ];
    for (name, effect) in periodic {
        let start = apply(effect, 0.0);
        let end = apply(effect, 1.0);
        let (cs, ce) = (start.as_coeffs(), end.as_coeffs());
        for i in 0..6 {
            assert!((cs[i] - ce[i]).abs() < 1e-9, "{name}: {cs:?} vs {ce:?}");
        }
    }
}

#[test]
fn rotate_has_no_net_rotation_at_loop_ends() {
    assert_affine_close(apply(rotate, 0.0), Affine::IDENTITY);
    assert_affine_close(apply(rotate, 1.0), Affine::IDENTITY);
    let half = apply(rotate, 0.5);
    assert!((rotation_of(half).abs() - std::f64::consts::PI).abs() < 1e-9);
    // Center stays put.
    let c = half * Point::new(50.0, 40.0);
    assert!((c - Point::new(50.0, 40.0)).hypot() < 1e-9);
}

#[test]
fn blink_hides_from_midpoint_on() {
    assert_eq!(apply(blink, 0.0), Affine::IDENTITY);
    assert_eq!(apply(blink, 0.49), Affine::IDENTITY);
    assert_eq!(apply(blink, 0.5), Affine::translate((-200.0, 0.0)));
    assert_eq!(apply(blink, 0.99), Affine::translate((-200.0, 0.0)));
}

#[test]
fn gatagata_alternates_direction_each_call() {
    let size = FrameSize::new(100, 80).unwrap();
    let mut state = EffectState::new(3);
    let mut signs = Vec::new();
    for _ in 0..4 {
        let m = apply_with(gatagata, 0.3, size, &mut state);
        let angle = rotation_of(m);
        assert!((angle.abs() - 0.05).abs() < 1e-12);
        signs.push(angle.signum());

        // Center moves by the jitter only.
        let moved = m * size.center() - size.center();
        assert!(moved.x.abs() <= 2.0 && moved.y.abs() <= 2.0, "{moved:?}");
    }
    assert_eq!(signs, vec![-1.0, 1.0, -1.0, 1.0]);
}

#[test]
fn gatagata_replays_for_the_same_seed() {
    let size = FrameSize::new(64, 64).unwrap();
    let mut a = EffectState::new(11);
    let mut b = EffectState::new(11);
    for _ in 0..3 {
        assert_eq!(
            apply_with(gatagata, 0.0, size, &mut a),
            apply_with(gatagata, 0.0, size, &mut b)
        );
    }
}

#[test]
fn zoom_scales_about_center() {
    let m = apply(zoom, 0.5);
    assert_affine_close(m, Affine::new([0.5, 0.0, 0.0, 0.5, 25.0, 20.0]));
    let m = apply(zoom, 0.0);
    assert_affine_close(m, Affine::new([1.5, 0.0, 0.0, 1.5, -25.0, -20.0]));
}

#[test]
fn kurukuru_translates_on_a_small_ellipse() {
    assert_affine_close(apply(kurukuru, 0.0), Affine::translate((5.0, 0.0)));
    assert_affine_close(apply(kurukuru, 0.25), Affine::translate((0.0, 4.0)));
}

#[test]
fn yurayura_swings_between_eighth_turns() {
    let pi = std::f64::consts::PI;
    assert!((rotation_of(apply(yurayura, 0.0)) - pi / 8.0).abs() < 1e-12);
    assert!((rotation_of(apply(yurayura, 0.5)) + pi / 8.0).abs() < 1e-12);
    let pivot = Point::new(50.0, 60.0);
    let p = apply(yurayura, 0.2) * pivot;
    assert!((p - pivot).hypot() < 1e-9);
}

#[test]
fn patapata_folds_through_a_mirror_at_midpoint() {
    assert_affine_close(apply(patapata, 0.0), Affine::IDENTITY);
    assert_affine_close(
        apply(patapata, 0.5),
        Affine::new([-1.0, 0.0, 0.0, 1.0, 100.0, 0.0]),
    );
    let quarter = apply(patapata, 0.25).as_coeffs();
    assert!(quarter[0].abs() < 1e-12);
    assert!((quarter[4] - 50.0).abs() < 1e-9);
}

#[test]
fn dokaben_is_an_alias_of_patapata() {
    for p in [0.0, 0.1, 0.33, 0.5, 0.8] {
        assert_eq!(apply(dokaben, p), apply(patapata, p));
    }
}

#[test]
fn yatta_mirrors_for_second_half() {
    let first = apply(yatta, 0.49).as_coeffs();
    let second = apply(yatta, 0.5).as_coeffs();
    assert!(first[0] > 0.0);
    assert!(second[0] < 0.0);
}

#[test]
fn poyon_jumps_then_squashes() {
    let top = apply(poyon, 0.3);
    assert_affine_close(top, Affine::translate((0.0, -80.0 / 6.0)));

    let squash = apply(poyon, 0.8).as_coeffs();
    assert!((squash[0] - 1.5).abs() < 1e-9);
    assert!((squash[3] - 0.5).abs() < 1e-9);
}

#[test]
fn motimoti_keeps_bottom_anchor_fixed() {
    let m = apply(motimoti, 0.25);
    assert_affine_close(m, Affine::new([1.25, 0.0, 0.0, 0.75, -12.5, 15.0]));
    let anchor = Point::new(50.0, 60.0);
    assert!((m * anchor - anchor).hypot() < 1e-9);
    assert_affine_close(apply(motimoti, 0.5), Affine::IDENTITY);
}

#[test]
fn straight_grows_then_holds() {
    assert_affine_close(
        apply(straight, 0.25),
        Affine::new([0.5, 0.0, 0.0, 0.5, 25.0, 20.0]),
    );
    assert_eq!(apply(straight, 0.5), Affine::IDENTITY);
    assert_eq!(apply(straight, 0.9), Affine::IDENTITY);
}
