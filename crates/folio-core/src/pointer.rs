//! Latest pointer sample in normalized device coordinates.
//!
//! One `PointerTracker` is shared by the whole page. Scenes that react to the
//! pointer hold a [`PointerLease`]; the host keeps its window listener
//! installed only while at least one lease is alive.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Pointer position with x growing right and y growing up, both in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Convert client pixel coordinates to NDC. A degenerate viewport maps to the center.
    #[inline]
    pub fn from_client(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (px / width) * 2.0 - 1.0,
            y: -(py / height) * 2.0 + 1.0,
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    latest: Cell<PointerState>,
    leases: Cell<usize>,
}

impl PointerTracker {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Take a lease. Returns it together with `true` when this is the first
    /// live lease, i.e. the host should start listening.
    pub fn acquire(self: &Rc<Self>) -> (PointerLease, bool) {
        let n = self.leases.get();
        self.leases.set(n + 1);
        if n == 0 {
            log::debug!("[pointer] listening");
        }
        (
            PointerLease {
                tracker: Rc::clone(self),
            },
            n == 0,
        )
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.leases.get() > 0
    }

    /// Store a sample; newer samples overwrite older ones. Samples arriving
    /// while nobody holds a lease are dropped.
    pub fn record(&self, sample: PointerState) -> bool {
        if !self.is_listening() {
            return false;
        }
        self.latest.set(sample);
        true
    }

    #[inline]
    pub fn snapshot(&self) -> PointerState {
        self.latest.get()
    }

    fn release(&self) {
        let n = self.leases.get().saturating_sub(1);
        self.leases.set(n);
        if n == 0 {
            self.latest.set(PointerState::default());
            log::debug!("[pointer] idle");
        }
    }
}

/// Keeps the shared tracker listening while alive.
#[derive(Debug)]
pub struct PointerLease {
    tracker: Rc<PointerTracker>,
}

impl PointerLease {
    #[inline]
    pub fn snapshot(&self) -> PointerState {
        self.tracker.snapshot()
    }
}

impl Drop for PointerLease {
    fn drop(&mut self) {
        self.tracker.release();
    }
}
