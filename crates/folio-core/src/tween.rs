/// Easing curves used by section tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out (GSAP's default `power1.out`).
    Power1Out,
    /// Cubic ease-out (GSAP's `power2.out`).
    Power2Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power1Out => 1.0 - (1.0 - p).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - p).powi(3),
        }
    }
}

/// Scalar tween over a wall-clock window in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            ease,
        }
    }

    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[inline]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    #[inline]
    pub fn value(&self, now_ms: f64) -> f32 {
        let k = self.ease.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * k
    }

    #[inline]
    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }
}
