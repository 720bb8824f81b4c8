//! Per-frame animation.
//!
//! Entities come in two flavours. Stateless ones (star rotation, spiral,
//! orbit, sways) are recomputed from `t` every frame and can be evaluated at
//! any time. Stateful ones ([`MouseField`], [`LookAtRig`], [`HoverState`])
//! ease toward a moving target and keep their last value here; nothing but
//! their own `step` writes it.

use crate::constants::*;
use crate::decor::{self, Placement};
use crate::field::Particle;
use crate::pointer::PointerState;
use crate::scene::{DriftSpin, Scene};
use crate::scheduler::FrameTime;
use glam::{EulerRot, Quat, Vec2, Vec3};

#[inline]
pub fn lerp(a: f32, b: f32, k: f32) -> f32 {
    a + (b - a) * k
}

// ---------------- Star field ----------------

#[inline]
pub fn star_angle(index: usize, t: f32) -> f32 {
    t * STAR_SPIN_RATE + index as f32 * STAR_PHASE_STEP
}

#[inline]
pub fn twinkle_size(index: usize, t: f32) -> f32 {
    ((t * TWINKLE_RATE + index as f32 * TWINKLE_PHASE_STEP).sin() + 1.0) * 2.0 + 0.5
}

/// Re-place every star on its xz circle and update its twinkle. The radius is
/// read back from the current position, so it never drifts.
pub fn spin_stars(stars: &mut [Particle], t: f32) {
    for (i, star) in stars.iter_mut().enumerate() {
        let radius = Vec2::new(star.position.x, star.position.z).length();
        let a = star_angle(i, t);
        star.position.x = radius * a.cos();
        star.position.z = radius * a.sin();
        star.size = twinkle_size(i, t);
    }
}

// ---------------- Mouse-reactive field ----------------

/// Where particle `index` wants to be for the given pointer sample.
///
/// `extent` is the visible world-space width/height at the origin plane.
#[inline]
pub fn mouse_target(index: usize, t: f32, pointer: PointerState, extent: Vec2) -> Vec2 {
    let i = index as f32;
    pointer.as_vec2() * extent * 0.5
        + Vec2::new((t + i).sin() * MOUSE_WOBBLE, (t + i * 1.5).cos() * MOUSE_WOBBLE)
}

#[inline]
pub fn mouse_depth(index: usize, t: f32) -> f32 {
    (t + index as f32 * 0.5).sin() * MOUSE_DEPTH_SWING
}

/// Cyan stars trailing the pointer. Positions integrate frame by frame and
/// therefore cannot be seeked; a remount starts from freshly generated ones.
#[derive(Clone, Debug)]
pub struct MouseField {
    particles: Vec<Particle>,
}

impl MouseField {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, t: f32, pointer: PointerState, extent: Vec2) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            let target = mouse_target(i, t, pointer, extent);
            p.position.x = lerp(p.position.x, target.x, MOUSE_FOLLOW_FACTOR);
            p.position.y = lerp(p.position.y, target.y, MOUSE_FOLLOW_FACTOR);
            p.position.z = mouse_depth(i, t);
        }
    }
}

// ---------------- Rotation-only groups ----------------

/// Two-axis tilt that eases toward the pointer (the avatar "looking" at it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAtRig {
    tilt: Vec2,
}

impl LookAtRig {
    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    pub fn step(&mut self, pointer: PointerState) {
        let target = Vec2::new(pointer.y * AVATAR_TILT, pointer.x * AVATAR_TILT);
        self.tilt = self.tilt.lerp(target, AVATAR_FOLLOW_FACTOR);
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, 0.0)
    }
}

#[inline]
pub fn panel_sway(t: f32) -> Quat {
    Quat::from_rotation_y((t * 0.5).sin() * 0.05)
}

#[inline]
pub fn social_sway(t: f32) -> Quat {
    Quat::from_rotation_z(t.sin() * 0.1)
}

#[inline]
pub fn cube_rotation(project_id: u32, t: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        (t + project_id as f32).sin() * 0.1,
        t * 0.2,
        0.0,
    )
}

// ---------------- Hover presentation ----------------

/// `normal` / `highlighted` toggle with a scale that eases toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    highlighted: bool,
    scale: f32,
    highlight_scale: f32,
}

impl HoverState {
    pub fn new(highlight_scale: f32) -> Self {
        Self {
            highlighted: false,
            scale: 1.0,
            highlight_scale,
        }
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn target_scale(&self) -> f32 {
        if self.highlighted {
            self.highlight_scale
        } else {
            1.0
        }
    }

    /// Returns `true` when the state actually flipped.
    pub fn set_highlighted(&mut self, on: bool) -> bool {
        let changed = self.highlighted != on;
        self.highlighted = on;
        changed
    }

    pub fn step(&mut self) {
        self.scale = lerp(self.scale, self.target_scale(), HOVER_SCALE_FACTOR);
    }
}

// ---------------- Scene update ----------------

impl Scene {
    /// Advance every entity of the scene by one frame. Parts the scene does not
    /// have are skipped.
    pub fn advance(&mut self, time: FrameTime, pointer: PointerState, extent: Vec2) {
        self.place(time.elapsed);

        if let Some(field) = &mut self.mouse {
            field.step(time.elapsed, pointer, extent);
        }
        if let Some(avatar) = &mut self.avatar {
            avatar.rig.step(pointer);
        }
        for cube in &mut self.cubes {
            cube.hover.step();
        }
        if let Some(form) = &mut self.form {
            for panel in &mut form.panels {
                panel.hover.step();
            }
        }
    }

    /// Evaluate every closed-form transform at `t`. Safe to call with any `t`;
    /// stateful entities are left alone.
    pub fn place(&mut self, t: f32) {
        if let Some(stars) = &mut self.stars {
            spin_stars(stars, t);
        }
        if let Some(drift) = &mut self.drift {
            drift.group = match drift.spin {
                DriftSpin::Backdrop => decor::drift_group(t),
                DriftSpin::Flash => decor::flash_group(t),
            };
            for (world, item) in drift.world.iter_mut().zip(&drift.items) {
                *world = drift
                    .group
                    .then(Placement::at(decor::drift_position(item, drift.bob, t)))
                    .position;
            }
        }
        for orb in &mut self.orbs {
            orb.world = orb.anchor + Vec3::Y * decor::float_bob(orb.speed, 0.0, 0.1, t);
        }
        if let Some(beacon) = &mut self.beacon {
            let root = decor::beacon_placement(t);
            let spiral = root.then(decor::spiral_group(t));
            for (i, (world, e)) in beacon.spiral_world.iter_mut().zip(&beacon.spiral).enumerate() {
                let local = decor::spiral_position(e, i, t) + Vec3::Y * decor::spiral_bob(i, t);
                *world = spiral.then(Placement::at(local));
            }
            for (i, (world, e)) in beacon.orbit_world.iter_mut().zip(&beacon.orbit).enumerate() {
                let mut local = decor::orbit_placement(e, i, t);
                local.position.y += decor::orbit_bob(i, t);
                *world = root.then(local);
            }
            for (world, p) in beacon.energy_world.iter_mut().zip(&beacon.energy) {
                *world = root.then(Placement::at(decor::drift_position(p, 1.0, t))).position;
            }
            beacon.core = root.then(Placement::at(Vec3::Y * decor::float_bob(1.5, 0.0, 0.4, t)));
            beacon.core_pulse = decor::core_pulse(t);
        }
        if let Some(loader) = &mut self.loader {
            loader.spin = decor::loader_spin(t);
        }
        if let Some(avatar) = &mut self.avatar {
            avatar.bob = decor::float_bob(1.0, 0.0, 0.3, t);
        }
        if let Some(skills) = &mut self.skills {
            for (i, bob) in skills.bob.iter_mut().enumerate() {
                *bob = decor::float_bob(1.0 + i as f32 * 0.2, i as f32, 1.0, t);
            }
        }
        for cube in &mut self.cubes {
            cube.rotation = cube_rotation(cube.project.id, t);
            cube.bob = decor::float_bob(1.0, cube.project.id as f32, 0.2, t);
        }
        if let Some(form) = &mut self.form {
            form.sway = panel_sway(t);
            for (i, panel) in form.panels.iter_mut().enumerate() {
                panel.bob = decor::float_bob(1.0, i as f32, 0.2, t);
            }
            form.submit_bob = decor::float_bob(1.5, 0.0, 0.3, t);
        }
        if let Some(socials) = &mut self.socials {
            socials.sway = social_sway(t);
            for (i, bob) in socials.bob.iter_mut().enumerate() {
                *bob = decor::float_bob(2.0, i as f32, 0.4, t);
            }
        }
    }
}
