use super::*;

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng64::new(8);
    assert_ne!(Rng64::new(7).next_u64(), c.next_u64());
}

#[test]
fn rng_unit_interval_is_half_open() {
    let mut rng = Rng64::new(0);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn fnv_hash_is_stable_across_chunking() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"sticker");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"sti");
    b.write_bytes(b"cker");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::new_default().finish());
}
