//! The stage ties the section controller to the scenes mounted for it.
//!
//! Exactly one set of scenes is mounted at a time. A section change, or a
//! breakpoint crossing that changes the mount plan, tears the current set
//! down (frame subscription, pointer lease, particle tables) before composing
//! the next one.

use crate::camera::Camera;
use crate::content::Project;
use crate::pointer::{PointerLease, PointerState, PointerTracker};
use crate::scene::{compose, FieldCounts, Light, Scene, SceneKind, Sprite};
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::section::{Section, SectionController, SectionError, SectionStyle};
use crate::viewport::{Viewport, ViewportClass};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type MountPlan = SmallVec<[SceneKind; 3]>;

/// What the page shows behind the section content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Intro screen with its own spark scene.
    Flash,
    /// Full 3D background plus the section foreground.
    Full,
    /// Static gradient for compact viewports.
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageConfig {
    pub seed: u64,
    pub counts: FieldCounts,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            seed: 0x00F0_110F,
            counts: FieldCounts::default(),
        }
    }
}

/// Scenes to mount for a section at a viewport class.
pub fn mount_plan(section: Section, class: ViewportClass) -> MountPlan {
    let mut plan = MountPlan::new();
    match (section, class) {
        (Section::Intro, _) => plan.push(SceneKind::Flash),
        (_, ViewportClass::Compact) => {}
        (section, ViewportClass::Wide) => {
            plan.push(SceneKind::Backdrop);
            plan.push(SceneKind::Beacon);
            plan.extend(SceneKind::foreground(section));
        }
    }
    plan
}

/// State shared with the frame callback. Dropping it releases the pointer lease.
struct Mounted {
    scenes: Vec<Scene>,
    lease: Option<PointerLease>,
    extent: Vec2,
}

struct Mount {
    shared: Rc<RefCell<Mounted>>,
    token: FrameToken,
    plan: MountPlan,
}

pub struct Stage {
    controller: SectionController,
    viewport: Viewport,
    camera: Camera,
    pointer: Rc<PointerTracker>,
    scheduler: FrameScheduler,
    mount: Option<Mount>,
    rng: StdRng,
    counts: FieldCounts,
    mounts: u64,
}

impl Stage {
    pub fn new(viewport: Viewport, config: StageConfig, now_ms: f64) -> Self {
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        let mut stage = Self {
            controller: SectionController::new(now_ms),
            viewport,
            camera,
            pointer: PointerTracker::new(),
            scheduler: FrameScheduler::new(),
            mount: None,
            rng: StdRng::seed_from_u64(config.seed),
            counts: config.counts,
            mounts: 0,
        };
        stage.remount();
        stage
    }

    #[inline]
    pub fn current_section(&self) -> Section {
        self.controller.current()
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Navigate to a content section by name.
    pub fn select_section(&mut self, name: &str, now_ms: f64) -> Result<Section, SectionError> {
        let target: Section = name.parse()?;
        if let Some(change) = self.controller.select(target, now_ms)? {
            log::info!("[stage] navigate {} -> {}", change.from, change.to);
            self.remount();
        }
        Ok(target)
    }

    /// A click anywhere while the intro is up skips it.
    pub fn on_click(&mut self, now_ms: f64) -> bool {
        self.current_section().is_intro() && self.controller.skip(now_ms)
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        let before = self.viewport.class();
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        if let Some(mount) = &self.mount {
            mount.shared.borrow_mut().extent = self.camera.visible_extent();
        }
        let after = self.viewport.class();
        if before == after {
            return;
        }
        log::info!("[stage] viewport {:?} -> {:?} at {}px", before, after, width);
        let section = self.current_section();
        if mount_plan(section, before) != mount_plan(section, after) {
            self.remount();
        }
    }

    /// Record a pointer sample (client pixels) and update hover highlights.
    /// Returns `true` when a highlight changed.
    pub fn on_pointer_move(&mut self, px: f32, py: f32) -> bool {
        let sample = PointerState::from_client(px, py, self.viewport.width, self.viewport.height);
        self.pointer.record(sample);
        let Some(mount) = &self.mount else {
            return false;
        };
        let (origin, dir) = self.camera.ray_from_ndc(sample.as_vec2());
        let mut changed = false;
        for scene in mount.shared.borrow_mut().scenes.iter_mut() {
            changed |= scene.pick(origin, dir);
        }
        changed
    }

    /// Advance timers, remount on section change, then run frame callbacks.
    pub fn frame(&mut self, now_ms: f64) {
        if self.controller.update(now_ms).is_some() {
            self.remount();
        }
        let loading = self.controller.is_loading(now_ms);
        if let Some(mount) = &self.mount {
            for scene in mount.shared.borrow_mut().scenes.iter_mut() {
                scene.set_loading(loading);
            }
        }
        self.scheduler.tick(now_ms / 1000.0);
    }

    pub fn backdrop(&self) -> Backdrop {
        if self.current_section().is_intro() {
            Backdrop::Flash
        } else if self.viewport.class() == ViewportClass::Compact {
            Backdrop::Placeholder
        } else {
            Backdrop::Full
        }
    }

    /// Replace the contents of `out` with the draw records of every mounted scene.
    pub fn sprites(&self, out: &mut Vec<Sprite>) {
        out.clear();
        if let Some(mount) = &self.mount {
            for scene in &mount.shared.borrow().scenes {
                scene.emit(out);
            }
        }
    }

    pub fn lights(&self) -> SmallVec<[Light; 9]> {
        let mut lights = SmallVec::new();
        if let Some(mount) = &self.mount {
            for scene in &mount.shared.borrow().scenes {
                lights.extend_from_slice(scene.lights());
            }
        }
        lights
    }

    #[inline]
    pub fn is_loading(&self, now_ms: f64) -> bool {
        self.controller.is_loading(now_ms)
    }

    #[inline]
    pub fn intro_opacity(&self, now_ms: f64) -> f32 {
        self.controller.intro_opacity(now_ms)
    }

    #[inline]
    pub fn section_style(&self, now_ms: f64) -> SectionStyle {
        self.controller.section_style(now_ms)
    }

    pub fn hovered_project(&self) -> Option<Project> {
        let mount = self.mount.as_ref()?;
        let shared = mount.shared.borrow();
        let hovered = shared.scenes.iter().find_map(Scene::hovered_project);
        hovered
    }

    pub fn active_field(&self) -> Option<&'static str> {
        let mount = self.mount.as_ref()?;
        let shared = mount.shared.borrow();
        let field = shared.scenes.iter().find_map(Scene::active_field);
        field
    }

    /// Shared pointer tracker; the host listens for pointer moves while it is.
    #[inline]
    pub fn pointer(&self) -> &Rc<PointerTracker> {
        &self.pointer
    }

    pub fn mounted_kinds(&self) -> MountPlan {
        self.mount.as_ref().map(|m| m.plan.clone()).unwrap_or_default()
    }

    /// Number of mounts performed so far, counting empty ones.
    #[inline]
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    #[inline]
    pub fn frame_subscriptions(&self) -> usize {
        self.scheduler.len()
    }

    /// Run `f` against a mounted scene of the given kind.
    pub fn with_scene<T>(&self, kind: SceneKind, f: impl FnOnce(&Scene) -> T) -> Option<T> {
        let mount = self.mount.as_ref()?;
        let shared = mount.shared.borrow();
        let out = shared.scenes.iter().find(|s| s.kind == kind).map(f);
        out
    }

    fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            self.scheduler.unsubscribe(mount.token);
            log::debug!("[stage] unmounted {:?}", mount.plan);
        }
    }

    fn remount(&mut self) {
        self.unmount();
        let plan = mount_plan(self.current_section(), self.viewport.class());
        self.mounts += 1;
        if plan.is_empty() {
            log::info!("[stage] nothing to mount for {}", self.current_section());
            return;
        }

        let scenes: Vec<Scene> = plan
            .iter()
            .map(|&kind| compose(kind, self.counts, &mut self.rng))
            .collect();
        let lease = plan
            .iter()
            .any(|k| k.uses_pointer())
            .then(|| self.pointer.acquire().0);
        let shared = Rc::new(RefCell::new(Mounted {
            scenes,
            lease,
            extent: self.camera.visible_extent(),
        }));

        let weak = Rc::downgrade(&shared);
        let token = self.scheduler.subscribe(move |time| {
            // Late frames after teardown find nothing to animate.
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut mounted = shared.borrow_mut();
            let mounted = &mut *mounted;
            let pointer = mounted
                .lease
                .as_ref()
                .map(PointerLease::snapshot)
                .unwrap_or_default();
            for scene in &mut mounted.scenes {
                scene.advance(time, pointer, mounted.extent);
            }
        });

        log::info!("[stage] mounted {:?} for {}", plan, self.current_section());
        self.mount = Some(Mount {
            shared,
            token,
            plan,
        });
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.unmount();
    }
}
