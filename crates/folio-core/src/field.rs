//! Particle buffers generated once per scene mount.
//!
//! Every generator takes the random source explicitly so a seeded `StdRng`
//! reproduces the exact same field in tests.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// One point of a particle cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
}

/// The three categorical star colors.
pub const STAR_PALETTE: [Vec3; 3] = [WHITE, CYAN, ORANGE];

#[inline]
pub fn star_color(choice: f32) -> Vec3 {
    if choice < STAR_WHITE_CUTOFF {
        WHITE
    } else if choice < STAR_CYAN_CUTOFF {
        CYAN
    } else {
        ORANGE
    }
}

/// Stars on a spherical shell between `STAR_INNER_RADIUS` and
/// `STAR_INNER_RADIUS + STAR_SHELL_DEPTH`.
pub fn star_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let radius = STAR_INNER_RADIUS + rng.gen::<f32>() * STAR_SHELL_DEPTH;
            let theta = rng.gen::<f32>() * TAU;
            let phi = rng.gen::<f32>() * PI;
            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            );
            let color = star_color(rng.gen());
            let size = STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN;
            Particle {
                position,
                color,
                size,
            }
        })
        .collect()
}

/// Cyan stars scattered in a cube of side `MOUSE_FIELD_SIDE` around the origin.
pub fn mouse_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            position: centered_in_box(rng, Vec3::splat(MOUSE_FIELD_SIDE)),
            color: CYAN,
            size: MOUSE_STAR_SIZE_MIN + rng.gen::<f32>() * MOUSE_STAR_SIZE_SPAN,
        })
        .collect()
}

/// Uniform sample in an axis-aligned box of the given extent centered at the origin.
#[inline]
pub fn centered_in_box<R: Rng + ?Sized>(rng: &mut R, extent: Vec3) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extent.x,
        (rng.gen::<f32>() - 0.5) * extent.y,
        (rng.gen::<f32>() - 0.5) * extent.z,
    )
}

/// A slow bobbing sphere used for depth in the backdrop, the flash screen and
/// the beacon cluster. Parameters never change after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingParticle {
    pub anchor: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub speed: f32,
    pub phase: f32,
}

/// Color mix for the backdrop's floating particles: cyan, then orange, then slate.
#[inline]
pub fn drift_color<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() > 0.7 {
        CYAN
    } else if rng.gen::<f32>() > 0.5 {
        ORANGE
    } else {
        SLATE
    }
}

/// Two-way cyan/orange mix used by the flash screen and the beacon's energy sparks.
#[inline]
pub fn spark_color<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() > 0.5 {
        CYAN
    } else {
        ORANGE
    }
}

/// Ranges are `(min, span)`; each draw is `min + u * span`.
pub fn floating_particles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    extent: Vec3,
    scale_range: (f32, f32),
    speed_range: (f32, f32),
    mut pick_color: impl FnMut(&mut R) -> Vec3,
) -> Vec<FloatingParticle> {
    let (scale_min, scale_span) = scale_range;
    let (speed_min, speed_span) = speed_range;
    (0..count)
        .map(|_| {
            let anchor = centered_in_box(rng, extent);
            let scale = scale_min + rng.gen::<f32>() * scale_span;
            let color = pick_color(rng);
            let speed = speed_min + rng.gen::<f32>() * speed_span;
            let phase = rng.gen::<f32>() * 1000.0;
            FloatingParticle {
                anchor,
                scale,
                color,
                speed,
                phase,
            }
        })
        .collect()
}
