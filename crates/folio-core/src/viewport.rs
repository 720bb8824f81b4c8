use crate::constants::COMPACT_WIDTH_PX;

/// Size class used to decide whether the 3D background is worth mounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// Below the breakpoint: show the static gradient instead.
    Compact,
    Wide,
}

impl ViewportClass {
    #[inline]
    pub fn classify(width_px: f32) -> Self {
        if width_px < COMPACT_WIDTH_PX {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// Window size in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::classify(self.width)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}
