// Host-side tests for particle field generation.

use folio_core::constants::*;
use folio_core::field::*;
use folio_core::scene::{compose, FieldCounts};
use folio_core::SceneKind;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn star_field_stays_inside_shell() {
    let mut rng = StdRng::seed_from_u64(7);
    let stars = star_field(&mut rng, 2000);
    assert_eq!(stars.len(), 2000);
    let outer = STAR_INNER_RADIUS + STAR_SHELL_DEPTH;
    for s in &stars {
        let r = s.position.length();
        // small slack for f32 trig
        assert!(r >= STAR_INNER_RADIUS - 1e-2, "radius {} below shell", r);
        assert!(r < outer + 1e-2, "radius {} above shell", r);
        assert!(s.size >= STAR_SIZE_MIN && s.size < STAR_SIZE_MIN + STAR_SIZE_SPAN);
    }
}

#[test]
fn star_colors_are_categorical() {
    let mut rng = StdRng::seed_from_u64(11);
    let stars = star_field(&mut rng, 2000);
    for s in &stars {
        assert!(STAR_PALETTE.contains(&s.color));
    }
    // every class shows up with 2000 draws
    for c in STAR_PALETTE {
        assert!(stars.iter().any(|s| s.color == c));
    }
}

#[test]
fn star_color_thresholds() {
    assert_eq!(star_color(0.0), WHITE);
    assert_eq!(star_color(0.59), WHITE);
    assert_eq!(star_color(0.6), CYAN);
    assert_eq!(star_color(0.79), CYAN);
    assert_eq!(star_color(0.8), ORANGE);
    assert_eq!(star_color(0.999), ORANGE);
}

#[test]
fn same_seed_same_field() {
    let a = star_field(&mut StdRng::seed_from_u64(42), 300);
    let b = star_field(&mut StdRng::seed_from_u64(42), 300);
    assert_eq!(a, b);
    let c = star_field(&mut StdRng::seed_from_u64(43), 300);
    assert_ne!(a, c);
}

#[test]
fn mouse_field_is_cyan_and_boxed() {
    let mut rng = StdRng::seed_from_u64(3);
    let field = mouse_field(&mut rng, 100);
    assert_eq!(field.len(), 100);
    let half = MOUSE_FIELD_SIDE * 0.5;
    for p in &field {
        assert_eq!(p.color, CYAN);
        assert!(p.position.abs().max_element() <= half);
        let max = MOUSE_STAR_SIZE_MIN + MOUSE_STAR_SIZE_SPAN;
        assert!(p.size >= MOUSE_STAR_SIZE_MIN && p.size < max);
    }
}

#[test]
fn floating_particles_respect_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let items = floating_particles(
        &mut rng,
        DRIFT_COUNT,
        DRIFT_EXTENT,
        (DRIFT_SCALE_MIN, DRIFT_SCALE_SPAN),
        (DRIFT_SPEED_MIN, DRIFT_SPEED_SPAN),
        drift_color,
    );
    assert_eq!(items.len(), DRIFT_COUNT);
    for p in &items {
        assert!(p.anchor.abs().cmple(DRIFT_EXTENT * 0.5).all());
        assert!(p.scale >= DRIFT_SCALE_MIN && p.scale < DRIFT_SCALE_MIN + DRIFT_SCALE_SPAN);
        assert!(p.speed >= DRIFT_SPEED_MIN && p.speed < DRIFT_SPEED_MIN + DRIFT_SPEED_SPAN);
        assert!([CYAN, ORANGE, SLATE].contains(&p.color));
    }
}

#[test]
fn empty_counts_give_empty_fields() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(star_field(&mut rng, 0).is_empty());
    assert!(mouse_field(&mut rng, 0).is_empty());
    let none = floating_particles(&mut rng, 0, Vec3::ONE, (0.1, 0.1), (1.0, 1.0), spark_color);
    assert!(none.is_empty());
}

#[test]
fn sparks_and_energy_float_faster_than_drift() {
    let mut rng = StdRng::seed_from_u64(21);
    let counts = FieldCounts::default();

    let flash = compose(SceneKind::Flash, counts, &mut rng);
    let sparks = &flash.drift.as_ref().unwrap().items;
    assert_eq!(sparks.len(), FLASH_SPARK_COUNT);
    for p in sparks {
        assert!(p.speed >= SPARK_SPEED_MIN && p.speed < SPARK_SPEED_MIN + SPARK_SPEED_SPAN);
    }

    let beacon = compose(SceneKind::Beacon, counts, &mut rng);
    let energy = &beacon.beacon.as_ref().unwrap().energy;
    assert_eq!(energy.len(), ENERGY_COUNT);
    for p in energy {
        assert!(p.speed >= 1.0 && p.speed < 2.0);
    }
}
