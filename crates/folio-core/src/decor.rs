//! Decorative groups whose transforms are closed-form functions of time.
//!
//! Nothing here carries state between frames: evaluating any function twice
//! with the same `(element, index, t)` yields the same transform, so these
//! groups can be seeked to an arbitrary `t`.

use crate::constants::*;
use crate::field::FloatingParticle;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Silhouette the renderer draws for a sprite.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Sphere = 0,
    Cube = 1,
    Octahedron = 2,
    Torus = 3,
    Panel = 4,
}

/// Position plus orientation of a decorative item, in its parent's space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Apply `self` as the parent transform of `child`.
    #[inline]
    pub fn then(&self, child: Placement) -> Placement {
        Placement {
            position: self.position + self.rotation * child.position,
            rotation: self.rotation * child.rotation,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralElement {
    pub angle: f32,
    pub radius: f32,
    pub height: f32,
    pub color: Vec3,
    pub scale: f32,
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitElement {
    pub radius: f32,
    pub speed: f32,
    pub color: Vec3,
    pub scale: f32,
    pub offset: f32,
}

pub fn spiral_elements(count: usize) -> Vec<SpiralElement> {
    (0..count)
        .map(|i| {
            let fi = i as f32;
            let color = match i % 3 {
                0 => CYAN,
                1 => ORANGE,
                _ => EMERALD,
            };
            let shape = match i % 4 {
                0 => Shape::Sphere,
                1 => Shape::Cube,
                2 => Shape::Octahedron,
                _ => Shape::Torus,
            };
            SpiralElement {
                angle: fi / count as f32 * PI * 4.0,
                radius: 2.0 + fi * 0.3,
                height: fi * 0.5 - 5.0,
                color,
                scale: 0.1 + (i % 5) as f32 * 0.02,
                shape,
            }
        })
        .collect()
}

pub fn orbit_elements<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<OrbitElement> {
    const COLORS: [Vec3; 4] = [CYAN, ORANGE, EMERALD, VIOLET];
    (0..count)
        .map(|i| {
            let fi = i as f32;
            OrbitElement {
                radius: 3.0 + fi * 0.8,
                speed: 0.5 + fi * 0.1,
                color: COLORS[i % COLORS.len()],
                scale: 0.15 + rng.gen::<f32>() * 0.1,
                offset: fi / count as f32 * TAU,
            }
        })
        .collect()
}

/// Beacon cluster root: anchored left of center, bobbing and slowly turning.
#[inline]
pub fn beacon_placement(t: f32) -> Placement {
    Placement {
        position: BEACON_ANCHOR + Vec3::Y * ((t * 0.5).sin() * BEACON_BOB),
        rotation: Quat::from_rotation_y(t * BEACON_SPIN),
    }
}

/// Spiral group rotation, applied under the beacon root.
#[inline]
pub fn spiral_group(t: f32) -> Placement {
    Placement {
        position: Vec3::ZERO,
        rotation: Quat::from_rotation_y(t * SPIRAL_SPIN),
    }
}

#[inline]
pub fn spiral_position(e: &SpiralElement, index: usize, t: f32) -> Vec3 {
    let i = index as f32;
    let radius = e.radius + (t + i).sin() * 0.2;
    let a = e.angle + t * SPIRAL_SWEEP;
    Vec3::new(
        a.cos() * radius,
        e.height + (t * 2.0 + i).sin() * 0.3,
        a.sin() * radius,
    )
}

#[inline]
pub fn orbit_placement(e: &OrbitElement, index: usize, t: f32) -> Placement {
    let i = index as f32;
    let a = t * e.speed + e.offset;
    Placement {
        position: ORBIT_OFFSET
            + Vec3::new(a.cos() * e.radius, (t + i).sin() * 1.5, a.sin() * e.radius),
        rotation: Quat::from_euler(EulerRot::XYZ, t + i, t * 0.5 + i, 0.0),
    }
}

/// Vertical bob of a floating item, scaled by `intensity`.
#[inline]
pub fn float_bob(speed: f32, phase: f32, intensity: f32, t: f32) -> f32 {
    ((phase + t) / FLOAT_PERIOD_DIVISOR * speed).sin() * FLOAT_AMPLITUDE * intensity
}

/// Extra lift of spiral element `index`; each element floats at its own speed.
#[inline]
pub fn spiral_bob(index: usize, t: f32) -> f32 {
    let i = index as f32;
    float_bob(SPIRAL_FLOAT_SPEED[0] + i * SPIRAL_FLOAT_SPEED[1], i, 1.0, t)
}

#[inline]
pub fn orbit_bob(index: usize, t: f32) -> f32 {
    float_bob(ORBIT_FLOAT_SPEED, index as f32, 1.0, t)
}

/// Floating particle position inside its (rotating) group.
#[inline]
pub fn drift_position(p: &FloatingParticle, intensity: f32, t: f32) -> Vec3 {
    p.anchor + Vec3::Y * float_bob(p.speed, p.phase, intensity, t)
}

/// Backdrop drift group rotation around x then y.
#[inline]
pub fn drift_group(t: f32) -> Placement {
    Placement {
        position: Vec3::ZERO,
        rotation: Quat::from_euler(EulerRot::XYZ, t * DRIFT_SPIN[0], t * DRIFT_SPIN[1], 0.0),
    }
}

/// Intro spark group rotation around x and z.
#[inline]
pub fn flash_group(t: f32) -> Placement {
    Placement {
        position: Vec3::ZERO,
        rotation: Quat::from_euler(EulerRot::XYZ, t * FLASH_SPIN[0], 0.0, t * FLASH_SPIN[1]),
    }
}

/// Spin of the intro loading ring around the view axis.
#[inline]
pub fn loader_spin(t: f32) -> f32 {
    t * LOADER_SPIN
}

/// Pulse of the beacon core: a gentle breathing scale.
#[inline]
pub fn core_pulse(t: f32) -> f32 {
    1.0 + float_bob(1.5, 0.0, 0.4, t)
}
