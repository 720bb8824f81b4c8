use glam::Vec3;

// Shared scene/animation tuning constants used by the core and the web frontend.

// Palette
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const CYAN: Vec3 = Vec3::new(0.0, 0.85, 1.0); // #00D9FF
pub const ORANGE: Vec3 = Vec3::new(1.0, 0.42, 0.21); // #FF6B35
pub const EMERALD: Vec3 = Vec3::new(0.063, 0.725, 0.506); // #10B981
pub const VIOLET: Vec3 = Vec3::new(0.545, 0.361, 0.965); // #8B5CF6
pub const SLATE: Vec3 = Vec3::new(0.29, 0.333, 0.408); // #4A5568

// Star field
pub const STAR_COUNT: usize = 2000;
pub const STAR_INNER_RADIUS: f32 = 100.0;
pub const STAR_SHELL_DEPTH: f32 = 200.0; // outer radius = inner + depth
pub const STAR_SIZE_MIN: f32 = 1.0;
pub const STAR_SIZE_SPAN: f32 = 3.0;
pub const STAR_WHITE_CUTOFF: f32 = 0.6;
pub const STAR_CYAN_CUTOFF: f32 = 0.8;
pub const STAR_SPIN_RATE: f32 = 0.001; // rad per second, shared by the whole field
pub const STAR_PHASE_STEP: f32 = 0.01; // per-index angle stagger
pub const TWINKLE_RATE: f32 = 2.0;
pub const TWINKLE_PHASE_STEP: f32 = 0.5;

// Mouse-reactive field
pub const MOUSE_STAR_COUNT: usize = 100;
pub const MOUSE_FIELD_SIDE: f32 = 20.0;
pub const MOUSE_STAR_SIZE_MIN: f32 = 0.5;
pub const MOUSE_STAR_SIZE_SPAN: f32 = 2.0;
pub const MOUSE_FOLLOW_FACTOR: f32 = 0.02; // lerp factor per frame
pub const MOUSE_WOBBLE: f32 = 2.0;
pub const MOUSE_DEPTH_SWING: f32 = 5.0;

// Floating particles
pub const DRIFT_COUNT: usize = 50;
pub const DRIFT_EXTENT: Vec3 = Vec3::new(80.0, 80.0, 80.0);
pub const DRIFT_SCALE_MIN: f32 = 0.02;
pub const DRIFT_SCALE_SPAN: f32 = 0.04;
pub const DRIFT_SPEED_MIN: f32 = 0.5;
pub const DRIFT_SPEED_SPAN: f32 = 1.5;
pub const DRIFT_ALPHA: f32 = 0.4;
pub const DRIFT_SPIN: [f32; 2] = [0.02, 0.01]; // group rotation rate around x, y

pub const SPARK_SPEED_MIN: f32 = 1.0; // intro sparks and beacon energy
pub const SPARK_SPEED_SPAN: f32 = 1.0;
pub const FLASH_SPARK_COUNT: usize = 50;
pub const FLASH_EXTENT: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const FLASH_SPIN: [f32; 2] = [0.2, 0.1]; // group rotation rate around x, z
pub const LOADER_SPIN: f32 = 2.0;

pub const ENERGY_COUNT: usize = 15;
pub const ENERGY_EXTENT: Vec3 = Vec3::new(12.0, 8.0, 6.0);

// Float bob (the default float intensity is 1.0)
pub const FLOAT_PERIOD_DIVISOR: f32 = 4.0;
pub const FLOAT_AMPLITUDE: f32 = 0.1;

// Beacon cluster on the left side
pub const BEACON_ANCHOR: Vec3 = Vec3::new(-8.0, 0.0, -5.0);
pub const BEACON_BOB: f32 = 0.5;
pub const BEACON_SPIN: f32 = 0.1;
pub const SPIRAL_COUNT: usize = 20;
pub const SPIRAL_SPIN: f32 = 0.3;
pub const SPIRAL_SWEEP: f32 = 0.2;
pub const SPIRAL_FLOAT_SPEED: [f32; 2] = [1.0, 0.1]; // base, per-index step
pub const ORBIT_COUNT: usize = 8;
pub const ORBIT_FLOAT_SPEED: f32 = 2.0;
pub const ORBIT_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const CORE_RING_SCALES: [f32; 3] = [1.0, 1.5, 2.0];

// Foreground smoothing
pub const AVATAR_FOLLOW_FACTOR: f32 = 0.05;
pub const AVATAR_TILT: f32 = 0.1;
pub const HOVER_SCALE_FACTOR: f32 = 0.1;
pub const CUBE_HIGHLIGHT_SCALE: f32 = 1.2;
pub const PANEL_HIGHLIGHT_SCALE: f32 = 1.1;
pub const CUBE_EMISSIVE: [f32; 2] = [0.1, 0.3]; // normal, highlighted
pub const PANEL_EMISSIVE: [f32; 2] = [0.0, 0.2];
pub const SPARK_COUNT: usize = 15;
pub const SPARK_EXTENT: f32 = 3.0;

// Viewport / camera
pub const COMPACT_WIDTH_PX: f32 = 768.0; // widths strictly below are "mobile"
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Section timing (milliseconds)
pub const INTRO_MIN_DISPLAY_MS: f64 = 2000.0;
pub const INTRO_AUTO_FADE_MS: f64 = 1500.0;
pub const INTRO_SKIP_FADE_MS: f64 = 500.0;
pub const ENTRY_TWEEN_MS: f64 = 1000.0;
pub const ENTRY_OFFSET_PX: f32 = 50.0;

// Sprite sizing: world units per unit of particle `size`
pub const STAR_SPRITE_SCALE: f32 = 0.6;
pub const MOUSE_SPRITE_SCALE: f32 = 0.08;

// Foreground layout (world space, single shared camera)
pub const FLASH_LOADER_POS: Vec3 = Vec3::new(0.0, -3.0, 0.0);
pub const AMBIENT_ORBS: [(Vec3, f32, Vec3, f32, f32); 2] = [
    // position, scale, color, alpha, float speed
    (Vec3::new(30.0, 20.0, -40.0), 8.0, CYAN, 0.03, 0.5),
    (Vec3::new(-25.0, -15.0, -35.0), 6.0, ORANGE, 0.04, 0.3),
];
pub const ABOUT_ROOT: Vec3 = Vec3::new(0.5, 0.0, -1.0);
pub const SKILLS_OFFSET: Vec3 = Vec3::new(3.0, 0.0, -1.0);
pub const SKILL_ROW_STEP: f32 = 0.8;
pub const PROJECTS_ROOT: Vec3 = Vec3::new(2.0, 0.0, -2.0);
pub const CUBE_GRID_COLUMNS: usize = 4;
pub const CUBE_SPACING: [f32; 2] = [1.8, 2.0];
pub const CUBE_PICK_RADIUS: f32 = 0.8;
pub const CONTACT_ROOT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const SOCIAL_OFFSET: Vec3 = Vec3::new(4.0, 0.0, 0.0);
pub const PANEL_SIZE: [f32; 2] = [2.0, 0.3];
pub const PANEL_ALPHA: f32 = 0.8;
pub const SUBMIT_OFFSET: Vec3 = Vec3::new(0.0, -2.0, 0.0);
pub const SUBMIT_SIZE: [f32; 2] = [1.5, 0.4];
