//! Scene composition.
//!
//! A [`Scene`] is a bag of entity tables, one per entity type, each optional.
//! [`compose`] fills the tables a [`SceneKind`] needs once at mount; the
//! animator (`animate.rs`) updates them per frame; [`Scene::emit`] flattens
//! them into [`Sprite`] records the renderer uploads as-is.

use crate::animate::{HoverState, LookAtRig, MouseField};
use crate::camera::{ray_plane_z, ray_sphere};
use crate::constants::*;
use crate::content::{FormField, Project, FORM_FIELDS, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::decor::{self, OrbitElement, Placement, Shape, SpiralElement};
use crate::field::{self, FloatingParticle, Particle};
use crate::section::Section;
use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Intro spark cloud and loading ring.
    Flash,
    /// Star shell, pointer-following stars, floating particles, ambient orbs.
    Backdrop,
    /// Decorative spiral/orbit cluster on the left.
    Beacon,
    About,
    Projects,
    Contact,
}

impl SceneKind {
    /// Foreground scene for a content section.
    pub fn foreground(section: Section) -> Option<SceneKind> {
        match section {
            Section::Intro => None,
            Section::About => Some(SceneKind::About),
            Section::Projects => Some(SceneKind::Projects),
            Section::Contact => Some(SceneKind::Contact),
        }
    }

    /// Whether the scene reads the shared pointer sample.
    pub fn uses_pointer(self) -> bool {
        !matches!(self, SceneKind::Flash | SceneKind::Beacon)
    }
}

/// GPU draw record: one camera-facing quad whose silhouette is drawn by the
/// fragment shader. Layout matches the instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Sprite {
    pub position: [f32; 3],
    pub shape: u32,
    pub size: [f32; 2],
    /// In-plane rotation in radians.
    pub spin: f32,
    pub emissive: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

impl Sprite {
    pub fn new(shape: Shape, position: Vec3, size: f32, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            shape: shape as u32,
            size: [size, size],
            spin: 0.0,
            emissive: 0.0,
            color: color.to_array(),
            alpha: 1.0,
        }
    }

    pub fn stretched(mut self, size: Vec2) -> Self {
        self.size = size.to_array();
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Angle of the rotated x axis projected onto the view plane.
#[inline]
fn screen_spin(rotation: Quat) -> f32 {
    let x = rotation * Vec3::X;
    x.y.atan2(x.x)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Point(Vec3),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    pub const fn ambient(intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color: WHITE,
            intensity,
        }
    }

    pub const fn point(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Point(position),
            color,
            intensity,
        }
    }
}

pub type Lights = SmallVec<[Light; 3]>;

// ---------------- Entity tables ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriftSpin {
    Backdrop,
    Flash,
}

/// Floating spheres inside one rotating group.
#[derive(Clone, Debug)]
pub struct Drift {
    pub items: Vec<FloatingParticle>,
    pub spin: DriftSpin,
    pub bob: f32,
    pub alpha: f32,
    pub emissive: f32,
    pub group: Placement,
    pub world: Vec<Vec3>,
}

impl Drift {
    fn new(
        items: Vec<FloatingParticle>,
        spin: DriftSpin,
        bob: f32,
        alpha: f32,
        emissive: f32,
    ) -> Self {
        let world = items.iter().map(|p| p.anchor).collect();
        Self {
            items,
            spin,
            bob,
            alpha,
            emissive,
            group: Placement::IDENTITY,
            world,
        }
    }
}

/// Huge faint sphere far behind the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientOrb {
    pub anchor: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub alpha: f32,
    pub speed: f32,
    pub world: Vec3,
}

#[derive(Clone, Debug)]
pub struct Beacon {
    pub spiral: Vec<SpiralElement>,
    pub orbit: Vec<OrbitElement>,
    pub energy: Vec<FloatingParticle>,
    pub spiral_world: Vec<Placement>,
    pub orbit_world: Vec<Placement>,
    pub energy_world: Vec<Vec3>,
    pub core: Placement,
    pub core_pulse: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Loader {
    pub spin: f32,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Avatar {
    pub rig: LookAtRig,
    pub bob: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SkillBars {
    pub bob: Vec<f32>,
}

#[derive(Clone, Debug)]
pub struct ProjectCube {
    pub project: Project,
    pub anchor: Vec3,
    pub hover: HoverState,
    pub rotation: Quat,
    pub bob: f32,
    /// Satellite offsets, populated while highlighted.
    pub sparks: Vec<Vec3>,
}

impl ProjectCube {
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.anchor + Vec3::Y * self.bob
    }
}

#[derive(Clone, Debug)]
pub struct FormPanel {
    pub field: FormField,
    pub hover: HoverState,
    pub bob: f32,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    pub panels: Vec<FormPanel>,
    pub sway: Quat,
    pub submit_bob: f32,
}

impl ContactForm {
    pub fn panel_center(&self, panel: &FormPanel) -> Vec3 {
        CONTACT_ROOT + self.sway * Vec3::new(0.0, panel.field.y + panel.bob, 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct SocialRing {
    pub sway: Quat,
    pub bob: Vec<f32>,
}

/// All entity tables of one mounted scene.
#[derive(Clone, Debug)]
pub struct Scene {
    pub kind: SceneKind,
    lights: Lights,
    pub stars: Option<Vec<Particle>>,
    pub mouse: Option<MouseField>,
    pub drift: Option<Drift>,
    pub orbs: Vec<AmbientOrb>,
    pub beacon: Option<Beacon>,
    pub loader: Option<Loader>,
    pub avatar: Option<Avatar>,
    pub skills: Option<SkillBars>,
    pub cubes: Vec<ProjectCube>,
    pub form: Option<ContactForm>,
    pub socials: Option<SocialRing>,
    sparks_rng: StdRng,
}

/// Particle counts for the generated fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldCounts {
    pub stars: usize,
    pub mouse_stars: usize,
    pub drift: usize,
}

impl Default for FieldCounts {
    fn default() -> Self {
        Self {
            stars: STAR_COUNT,
            mouse_stars: MOUSE_STAR_COUNT,
            drift: DRIFT_COUNT,
        }
    }
}

impl Scene {
    fn empty(kind: SceneKind, sparks_rng: StdRng) -> Self {
        Self {
            kind,
            lights: Lights::new(),
            stars: None,
            mouse: None,
            drift: None,
            orbs: Vec::new(),
            beacon: None,
            loader: None,
            avatar: None,
            skills: None,
            cubes: Vec::new(),
            form: None,
            socials: None,
            sparks_rng,
        }
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Show or hide the intro loading ring.
    pub fn set_loading(&mut self, loading: bool) {
        if let Some(loader) = &mut self.loader {
            loader.visible = loading;
        }
    }

    pub fn hovered_project(&self) -> Option<Project> {
        self.cubes
            .iter()
            .find(|c| c.hover.is_highlighted())
            .map(|c| c.project)
    }

    pub fn active_field(&self) -> Option<&'static str> {
        self.form.as_ref().and_then(|f| {
            f.panels
                .iter()
                .find(|p| p.hover.is_highlighted())
                .map(|p| p.field.name)
        })
    }

    /// Update hover highlights for a pointer ray. Returns `true` when any
    /// entity entered or left the highlighted state.
    pub fn pick(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        let mut changed = false;

        if !self.cubes.is_empty() {
            let mut best: Option<(usize, f32)> = None;
            for (i, cube) in self.cubes.iter().enumerate() {
                let radius = CUBE_PICK_RADIUS * cube.hover.scale();
                if let Some(t) = ray_sphere(ray_origin, ray_dir, cube.center(), radius) {
                    if best.map_or(true, |(_, bt)| t < bt) {
                        best = Some((i, t));
                    }
                }
            }
            let hit = best.map(|(i, _)| i);
            for (i, cube) in self.cubes.iter_mut().enumerate() {
                if cube.hover.set_highlighted(hit == Some(i)) {
                    changed = true;
                    if cube.hover.is_highlighted() {
                        let rng = &mut self.sparks_rng;
                        cube.sparks = (0..SPARK_COUNT)
                            .map(|_| field::centered_in_box(&mut *rng, Vec3::splat(SPARK_EXTENT)))
                            .collect();
                        log::debug!("[scene] hover enter project {}", cube.project.id);
                    } else {
                        cube.sparks.clear();
                    }
                }
            }
        }

        if let Some(form) = &mut self.form {
            let hit_point = ray_plane_z(ray_origin, ray_dir, CONTACT_ROOT.z);
            let hit = hit_point.and_then(|p| {
                form.panels.iter().position(|panel| {
                    let half = Vec2::from(PANEL_SIZE) * 0.5 * panel.hover.scale();
                    let d = (p - form.panel_center(panel)).truncate().abs();
                    d.x <= half.x && d.y <= half.y
                })
            });
            for (i, panel) in form.panels.iter_mut().enumerate() {
                changed |= panel.hover.set_highlighted(hit == Some(i));
            }
        }

        changed
    }

    /// Append this scene's draw records to `out`.
    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if let Some(stars) = &self.stars {
            out.extend(stars.iter().map(|s| {
                Sprite::new(Shape::Sphere, s.position, s.size * STAR_SPRITE_SCALE, s.color)
                    .with_emissive(1.0)
                    .with_alpha(0.8)
            }));
        }
        if let Some(mouse) = &self.mouse {
            out.extend(mouse.particles().iter().map(|s| {
                Sprite::new(Shape::Sphere, s.position, s.size * MOUSE_SPRITE_SCALE, s.color)
                    .with_emissive(1.0)
                    .with_alpha(0.6)
            }));
        }
        if let Some(drift) = &self.drift {
            out.extend(drift.items.iter().zip(&drift.world).map(|(p, w)| {
                Sprite::new(Shape::Sphere, *w, p.scale * 2.0, p.color)
                    .with_emissive(drift.emissive)
                    .with_alpha(drift.alpha)
            }));
        }
        out.extend(self.orbs.iter().map(|o| {
            Sprite::new(Shape::Sphere, o.world, o.scale * 2.0, o.color)
                .with_emissive(0.05)
                .with_alpha(o.alpha)
        }));
        if let Some(beacon) = &self.beacon {
            emit_beacon(beacon, out);
        }
        if let Some(loader) = self.loader.filter(|l| l.visible) {
            out.push(
                Sprite::new(Shape::Torus, FLASH_LOADER_POS, 1.1, CYAN)
                    .with_spin(loader.spin)
                    .with_emissive(0.3),
            );
        }
        if let Some(avatar) = &self.avatar {
            let root = Placement {
                position: ABOUT_ROOT + Vec3::Y * avatar.bob,
                rotation: avatar.rig.rotation(),
            };
            let spin = screen_spin(root.rotation);
            let head = root.then(Placement::at(Vec3::new(0.0, 0.5, 0.0)));
            let body = root.then(Placement::at(Vec3::new(0.0, -0.5, 0.0)));
            out.push(
                Sprite::new(Shape::Sphere, root.position, 2.4, CYAN)
                    .with_emissive(0.1)
                    .with_alpha(0.1),
            );
            out.push(
                Sprite::new(Shape::Cube, body.position, 1.0, ORANGE)
                    .stretched(Vec2::new(1.0, 1.2))
                    .with_spin(spin),
            );
            out.push(Sprite::new(Shape::Sphere, head.position, 1.6, CYAN));
        }
        if let Some(skills) = &self.skills {
            let origin = ABOUT_ROOT + SKILLS_OFFSET;
            out.extend(SKILLS.iter().zip(&skills.bob).enumerate().map(|(i, (skill, bob))| {
                let y = i as f32 * SKILL_ROW_STEP - 2.0 + bob;
                Sprite::new(Shape::Panel, origin + Vec3::Y * y, 1.0, skill.color)
                    .stretched(Vec2::new(skill.level * 2.0, 0.1))
                    .with_emissive(0.2)
            }));
        }
        for cube in &self.cubes {
            let lit = cube.hover.is_highlighted();
            let scale = cube.hover.scale() * if lit { 1.1 } else { 1.0 };
            let center = cube.center();
            out.push(
                Sprite::new(Shape::Cube, center, scale, cube.project.color)
                    .with_spin(screen_spin(cube.rotation))
                    .with_emissive(CUBE_EMISSIVE[lit as usize]),
            );
            let frame = Placement {
                position: center,
                rotation: cube.rotation,
            };
            out.extend(cube.sparks.iter().map(|offset| {
                let p = frame.then(Placement::at(*offset * cube.hover.scale()));
                Sprite::new(Shape::Sphere, p.position, 0.06, cube.project.color).with_emissive(0.8)
            }));
        }
        if let Some(form) = &self.form {
            let spin = screen_spin(form.sway);
            for panel in &form.panels {
                let lit = panel.hover.is_highlighted();
                let color = if lit { panel.field.color } else { SLATE };
                out.push(
                    Sprite::new(Shape::Panel, form.panel_center(panel), 1.0, color)
                        .stretched(Vec2::from(PANEL_SIZE) * panel.hover.scale())
                        .with_spin(spin)
                        .with_emissive(PANEL_EMISSIVE[lit as usize])
                        .with_alpha(PANEL_ALPHA),
                );
            }
            let submit = CONTACT_ROOT + form.sway * (SUBMIT_OFFSET + Vec3::Y * form.submit_bob);
            out.push(
                Sprite::new(Shape::Panel, submit, 1.0, CYAN)
                    .stretched(Vec2::from(SUBMIT_SIZE))
                    .with_spin(spin)
                    .with_emissive(0.3),
            );
        }
        if let Some(socials) = &self.socials {
            let origin = CONTACT_ROOT + SOCIAL_OFFSET;
            out.extend(SOCIAL_LINKS.iter().zip(&socials.bob).map(|(link, bob)| {
                let p = origin + socials.sway * Vec3::new(0.0, link.y + bob, 0.0);
                Sprite::new(Shape::Sphere, p, 0.6, link.color).with_emissive(0.4)
            }));
        }
    }
}

fn emit_beacon(beacon: &Beacon, out: &mut Vec<Sprite>) {
    out.extend(beacon.spiral.iter().zip(&beacon.spiral_world).map(|(e, w)| {
        Sprite::new(e.shape, w.position, e.scale * 2.0, e.color)
            .with_spin(screen_spin(w.rotation))
            .with_emissive(0.3)
            .with_alpha(0.8)
    }));
    out.extend(beacon.orbit.iter().zip(&beacon.orbit_world).map(|(e, w)| {
        Sprite::new(Shape::Sphere, w.position, e.scale * 2.0, e.color)
            .with_emissive(0.4)
            .with_alpha(0.6)
    }));
    let core = beacon.core.position;
    out.push(
        Sprite::new(Shape::Sphere, core, 0.6 * beacon.core_pulse, WHITE)
            .with_emissive(0.5)
            .with_alpha(0.9),
    );
    out.extend(CORE_RING_SCALES.iter().enumerate().map(|(i, s)| {
        let fi = i as f32;
        Sprite::new(Shape::Torus, core, 0.8 * s * s, CYAN)
            .with_spin(screen_spin(beacon.core.rotation))
            .with_emissive(0.6 - fi * 0.2)
            .with_alpha(0.3 - fi * 0.1)
    }));
    out.extend(beacon.energy.iter().zip(&beacon.energy_world).map(|(p, w)| {
        Sprite::new(Shape::Sphere, *w, p.scale * 2.0, p.color)
            .with_emissive(0.8)
            .with_alpha(0.7)
    }));
}

/// Build the entity tables for `kind`. All randomness comes from `rng`.
pub fn compose<R: Rng + ?Sized>(kind: SceneKind, counts: FieldCounts, rng: &mut R) -> Scene {
    let mut scene = Scene::empty(kind, StdRng::seed_from_u64(rng.gen()));
    match kind {
        SceneKind::Flash => {
            scene.lights.push(Light::ambient(0.3));
            scene.lights.push(Light::point(Vec3::splat(10.0), CYAN, 1.0));
            scene.lights.push(Light::point(Vec3::splat(-10.0), ORANGE, 0.5));
            let sparks = field::floating_particles(
                rng,
                FLASH_SPARK_COUNT,
                FLASH_EXTENT,
                (0.02, 0.03),
                (SPARK_SPEED_MIN, SPARK_SPEED_SPAN),
                field::spark_color,
            );
            scene.drift = Some(Drift::new(sparks, DriftSpin::Flash, 1.0, 1.0, 0.2));
            scene.loader = Some(Loader {
                spin: 0.0,
                visible: true,
            });
        }
        SceneKind::Backdrop => {
            scene.lights.push(Light::ambient(0.1));
            scene.lights.push(Light::point(Vec3::splat(20.0), CYAN, 0.3));
            scene.lights.push(Light::point(Vec3::splat(-20.0), ORANGE, 0.2));
            scene.stars = Some(field::star_field(rng, counts.stars));
            scene.mouse = Some(MouseField::new(field::mouse_field(rng, counts.mouse_stars)));
            let drift = field::floating_particles(
                rng,
                counts.drift,
                DRIFT_EXTENT,
                (DRIFT_SCALE_MIN, DRIFT_SCALE_SPAN),
                (DRIFT_SPEED_MIN, DRIFT_SPEED_SPAN),
                field::drift_color,
            );
            scene.drift = Some(Drift::new(drift, DriftSpin::Backdrop, 0.3, DRIFT_ALPHA, 0.2));
            scene.orbs = AMBIENT_ORBS
                .iter()
                .map(|&(anchor, scale, color, alpha, speed)| AmbientOrb {
                    anchor,
                    scale,
                    color,
                    alpha,
                    speed,
                    world: anchor,
                })
                .collect();
        }
        SceneKind::Beacon => {
            let spiral = decor::spiral_elements(SPIRAL_COUNT);
            let orbit = decor::orbit_elements(rng, ORBIT_COUNT);
            let energy = field::floating_particles(
                rng,
                ENERGY_COUNT,
                ENERGY_EXTENT,
                (0.03, 0.02),
                (SPARK_SPEED_MIN, SPARK_SPEED_SPAN),
                field::spark_color,
            );
            scene.beacon = Some(Beacon {
                spiral_world: vec![Placement::IDENTITY; spiral.len()],
                orbit_world: vec![Placement::IDENTITY; orbit.len()],
                energy_world: vec![Vec3::ZERO; energy.len()],
                spiral,
                orbit,
                energy,
                core: Placement::IDENTITY,
                core_pulse: 1.0,
            });
        }
        SceneKind::About => {
            push_foreground_lights(&mut scene.lights, 5.0);
            scene.avatar = Some(Avatar::default());
            scene.skills = Some(SkillBars {
                bob: vec![0.0; SKILLS.len()],
            });
        }
        SceneKind::Projects => {
            push_foreground_lights(&mut scene.lights, 10.0);
            scene.cubes = PROJECTS
                .iter()
                .enumerate()
                .map(|(i, project)| ProjectCube {
                    project: *project,
                    anchor: cube_anchor(i),
                    hover: HoverState::new(CUBE_HIGHLIGHT_SCALE),
                    rotation: Quat::IDENTITY,
                    bob: 0.0,
                    sparks: Vec::new(),
                })
                .collect();
        }
        SceneKind::Contact => {
            push_foreground_lights(&mut scene.lights, 5.0);
            scene.form = Some(ContactForm {
                panels: FORM_FIELDS
                    .iter()
                    .map(|field| FormPanel {
                        field: *field,
                        hover: HoverState::new(PANEL_HIGHLIGHT_SCALE),
                        bob: 0.0,
                    })
                    .collect(),
                sway: Quat::IDENTITY,
                submit_bob: 0.0,
            });
            scene.socials = Some(SocialRing {
                sway: Quat::IDENTITY,
                bob: vec![0.0; SOCIAL_LINKS.len()],
            });
        }
    }
    scene.place(0.0);
    log::debug!("[scene] composed {:?}", kind);
    scene
}

fn push_foreground_lights(lights: &mut Lights, reach: f32) {
    lights.push(Light::ambient(0.4));
    lights.push(Light::point(Vec3::splat(reach), CYAN, 0.8));
    lights.push(Light::point(Vec3::splat(-reach), ORANGE, 0.4));
}

/// Grid slot of the `index`-th project cube, row-major.
pub fn cube_anchor(index: usize) -> Vec3 {
    let col = (index % CUBE_GRID_COLUMNS) as f32;
    let row = (index / CUBE_GRID_COLUMNS) as f32;
    let half_cols = (CUBE_GRID_COLUMNS as f32 - 1.0) * 0.5;
    let x = (col - half_cols) * CUBE_SPACING[0];
    let y = (0.5 - row) * CUBE_SPACING[1];
    PROJECTS_ROOT + Vec3::new(x, y, 0.0)
}
