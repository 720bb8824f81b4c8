// Host-side tests for mounting, teardown and hover picking on the stage.

use folio_core::constants::{ORANGE, PANEL_EMISSIVE, PANEL_HIGHLIGHT_SCALE, SLATE};
use folio_core::decor::Shape;
use folio_core::scene::{compose, FieldCounts};
use folio_core::stage::mount_plan;
use folio_core::{Backdrop, SceneKind, Section, Sprite, Stage, StageConfig, Viewport, ViewportClass};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f32 = 1280.0;
const H: f32 = 720.0;

fn small_config() -> StageConfig {
    StageConfig {
        seed: 1234,
        counts: FieldCounts {
            stars: 64,
            mouse_stars: 16,
            drift: 8,
        },
    }
}

/// Stage past the intro, sitting on About.
fn stage_at_about(width: f32) -> Stage {
    let mut stage = Stage::new(Viewport::new(width, H), small_config(), 0.0);
    stage.frame(2000.0);
    stage.frame(3500.0);
    assert_eq!(stage.current_section(), Section::About);
    stage
}

/// Client pixel position at which `world` appears on screen.
fn client_of(stage: &Stage, world: Vec3) -> (f32, f32) {
    let ndc = stage.camera().view_proj().project_point3(world);
    ((ndc.x + 1.0) * 0.5 * W, (1.0 - ndc.y) * 0.5 * H)
}

#[test]
fn mount_plans_per_section_and_class() {
    let flash = [SceneKind::Flash];
    assert_eq!(mount_plan(Section::Intro, ViewportClass::Wide).as_slice(), &flash);
    assert_eq!(mount_plan(Section::Intro, ViewportClass::Compact).as_slice(), &flash);
    assert!(mount_plan(Section::About, ViewportClass::Compact).is_empty());
    assert_eq!(
        mount_plan(Section::About, ViewportClass::Wide).as_slice(),
        &[SceneKind::Backdrop, SceneKind::Beacon, SceneKind::About]
    );
    assert_eq!(
        mount_plan(Section::Contact, ViewportClass::Wide).as_slice(),
        &[SceneKind::Backdrop, SceneKind::Beacon, SceneKind::Contact]
    );
}

#[test]
fn intro_mounts_flash_without_pointer() {
    let mut stage = Stage::new(Viewport::new(W, H), small_config(), 0.0);
    assert_eq!(stage.backdrop(), Backdrop::Flash);
    assert_eq!(stage.mounted_kinds().as_slice(), &[SceneKind::Flash]);
    assert!(!stage.pointer().is_listening());
    assert_eq!(stage.frame_subscriptions(), 1);

    stage.frame(100.0);
    assert!(stage.is_loading(100.0));
    assert_eq!(loader_visible(&stage), Some(true));
    stage.frame(2100.0);
    assert_eq!(loader_visible(&stage), Some(false));
}

fn loader_visible(stage: &Stage) -> Option<bool> {
    stage.with_scene(SceneKind::Flash, |s| s.loader.as_ref().map_or(false, |l| l.visible))
}

#[test]
fn breakpoint_crossing_during_intro_keeps_flash_mounted() {
    let mut stage = Stage::new(Viewport::new(W, H), small_config(), 0.0);
    stage.frame(100.0);
    let mounts = stage.mount_count();
    let sparks = stage.with_scene(SceneKind::Flash, |s| s.drift.as_ref().unwrap().items.clone());

    stage.on_resize(600.0, H);
    assert_eq!(stage.viewport().class(), ViewportClass::Compact);
    assert_eq!(stage.current_section(), Section::Intro);
    assert_eq!(stage.mount_count(), mounts);
    assert_eq!(stage.mounted_kinds().as_slice(), &[SceneKind::Flash]);
    assert_eq!(stage.frame_subscriptions(), 1);
    // same spark field, not a fresh one
    let after = stage.with_scene(SceneKind::Flash, |s| s.drift.as_ref().unwrap().items.clone());
    assert_eq!(sparks, after);

    stage.on_resize(W, H);
    assert_eq!(stage.mount_count(), mounts);

    // the intro still hands over to the full backdrop at the wide size
    stage.frame(2000.0);
    stage.frame(3500.0);
    assert_eq!(stage.current_section(), Section::About);
    assert_eq!(stage.mount_count(), mounts + 1);
    assert_eq!(stage.backdrop(), Backdrop::Full);
}

#[test]
fn intro_completion_swaps_to_full_backdrop() {
    let stage = stage_at_about(W);
    assert_eq!(stage.backdrop(), Backdrop::Full);
    assert_eq!(
        stage.mounted_kinds().as_slice(),
        &[SceneKind::Backdrop, SceneKind::Beacon, SceneKind::About]
    );
    assert!(stage.pointer().is_listening());
    assert_eq!(stage.frame_subscriptions(), 1);
    assert_eq!(stage.mount_count(), 2);
}

#[test]
fn navigation_remounts_with_single_subscription() {
    let mut stage = stage_at_about(W);
    stage.select_section("projects", 4000.0).unwrap();
    assert_eq!(stage.mount_count(), 3);
    assert_eq!(stage.frame_subscriptions(), 1);
    assert!(stage.with_scene(SceneKind::About, |_| ()).is_none());
    assert_eq!(stage.with_scene(SceneKind::Projects, |s| s.cubes.len()), Some(8));

    // same section again changes nothing
    stage.select_section("projects", 4100.0).unwrap();
    assert_eq!(stage.mount_count(), 3);
}

#[test]
fn remount_regenerates_mouse_field() {
    let mut stage = stage_at_about(W);
    let first = stage
        .with_scene(SceneKind::Backdrop, |s| s.mouse.as_ref().unwrap().particles().to_vec())
        .unwrap();
    stage.select_section("contact", 4000.0).unwrap();
    let second = stage
        .with_scene(SceneKind::Backdrop, |s| s.mouse.as_ref().unwrap().particles().to_vec())
        .unwrap();
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn compact_viewport_unmounts_and_releases_pointer() {
    let mut stage = stage_at_about(W);
    assert!(stage.pointer().is_listening());

    stage.on_resize(600.0, H);
    assert_eq!(stage.backdrop(), Backdrop::Placeholder);
    assert!(stage.mounted_kinds().is_empty());
    assert!(!stage.pointer().is_listening());
    assert_eq!(stage.frame_subscriptions(), 0);

    let mut sprites = vec![Sprite::default()];
    stage.sprites(&mut sprites);
    assert!(sprites.is_empty());
    assert!(stage.lights().is_empty());

    stage.on_resize(W, H);
    assert_eq!(stage.backdrop(), Backdrop::Full);
    assert!(stage.pointer().is_listening());
    assert_eq!(stage.frame_subscriptions(), 1);
}

#[test]
fn resize_within_class_keeps_mount() {
    let mut stage = stage_at_about(W);
    let mounts = stage.mount_count();
    stage.on_resize(1024.0, 768.0);
    assert_eq!(stage.mount_count(), mounts);
}

#[test]
fn dropping_stage_releases_lease() {
    let stage = stage_at_about(W);
    let tracker = stage.pointer().clone();
    assert!(tracker.is_listening());
    drop(stage);
    assert!(!tracker.is_listening());
}

#[test]
fn hovering_a_cube_highlights_and_grows_it() {
    let mut stage = stage_at_about(W);
    stage.select_section("projects", 4000.0).unwrap();
    stage.frame(4016.0);

    let center = stage
        .with_scene(SceneKind::Projects, |s| s.cubes[0].center())
        .unwrap();
    let (px, py) = client_of(&stage, center);
    assert!(stage.on_pointer_move(px, py));
    let title = stage.hovered_project().map(|p| p.title);
    assert_eq!(title, Some("E-Commerce Platform"));
    let sparks = stage.with_scene(SceneKind::Projects, |s| s.cubes[0].sparks.len());
    assert_eq!(sparks, Some(15));

    let mut now = 4016.0;
    for _ in 0..120 {
        now += 16.0;
        stage.frame(now);
    }
    let scale = stage
        .with_scene(SceneKind::Projects, |s| s.cubes[0].hover.scale())
        .unwrap();
    assert!((scale - 1.2).abs() < 1e-3);

    // pointer to a corner leaves every cube
    assert!(stage.on_pointer_move(0.0, 0.0));
    assert!(stage.hovered_project().is_none());
    let sparks = stage.with_scene(SceneKind::Projects, |s| s.cubes[0].sparks.len());
    assert_eq!(sparks, Some(0));
}

#[test]
fn hovering_a_form_panel_activates_its_field() {
    let mut stage = stage_at_about(W);
    stage.select_section("contact", 4000.0).unwrap();
    stage.frame(4016.0);
    assert!(stage.active_field().is_none());

    let center = stage
        .with_scene(SceneKind::Contact, |s| {
            let form = s.form.as_ref().unwrap();
            form.panel_center(&form.panels[1])
        })
        .unwrap();
    let (px, py) = client_of(&stage, center);
    assert!(stage.on_pointer_move(px, py));
    assert_eq!(stage.active_field(), Some("Email"));

    let mut sprites = Vec::new();
    stage.sprites(&mut sprites);
    let panel_shape = Shape::Panel as u32;
    let lit = sprites
        .iter()
        .filter(|s| s.shape == panel_shape && s.emissive == PANEL_EMISSIVE[1])
        .collect::<Vec<_>>();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].color, ORANGE.to_array());
    let slate = sprites
        .iter()
        .filter(|s| s.shape == panel_shape && s.color == SLATE.to_array())
        .count();
    assert_eq!(slate, 3);

    let mut now = 4016.0;
    for _ in 0..120 {
        now += 16.0;
        stage.frame(now);
    }
    let scale = stage
        .with_scene(SceneKind::Contact, |s| s.form.as_ref().unwrap().panels[1].hover.scale())
        .unwrap();
    assert!((scale - PANEL_HIGHLIGHT_SCALE).abs() < 1e-3);

    assert!(stage.on_pointer_move(0.0, 0.0));
    assert!(stage.active_field().is_none());
}

#[test]
fn navigation_before_intro_ends_is_refused() {
    let mut stage = Stage::new(Viewport::new(W, H), small_config(), 0.0);
    assert!(stage.select_section("about", 500.0).is_err());
    assert!(stage.select_section("nowhere", 500.0).is_err());
    assert_eq!(stage.current_section(), Section::Intro);
}

#[test]
fn click_skips_intro() {
    let mut stage = Stage::new(Viewport::new(W, H), small_config(), 0.0);
    assert!(stage.on_click(300.0));
    stage.frame(800.0);
    assert_eq!(stage.current_section(), Section::About);
    assert!(!stage.on_click(900.0));
}

#[test]
fn composed_scenes_emit_sprites_and_lights() {
    let mut rng = StdRng::seed_from_u64(99);
    let counts = FieldCounts {
        stars: 10,
        mouse_stars: 4,
        drift: 3,
    };
    for kind in [
        SceneKind::Flash,
        SceneKind::Backdrop,
        SceneKind::Beacon,
        SceneKind::About,
        SceneKind::Projects,
        SceneKind::Contact,
    ] {
        let scene = compose(kind, counts, &mut rng);
        let mut out = Vec::new();
        scene.emit(&mut out);
        assert!(!out.is_empty(), "{:?} emitted nothing", kind);
        assert!(scene.lights().len() <= 3);
    }
}
