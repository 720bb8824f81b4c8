pub mod animate;
pub mod camera;
pub mod constants;
pub mod content;
pub mod decor;
pub mod field;
pub mod pointer;
pub mod scene;
pub mod scheduler;
pub mod section;
pub mod stage;
pub mod tween;
pub mod viewport;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use camera::Camera;
pub use pointer::{PointerLease, PointerState, PointerTracker};
pub use scene::{Light, LightKind, Scene, SceneKind, Sprite};
pub use scheduler::{FrameScheduler, FrameTime, FrameToken};
pub use section::{Section, SectionChange, SectionController, SectionError, SectionStyle};
pub use stage::{Backdrop, Stage, StageConfig};
pub use viewport::{Viewport, ViewportClass};
