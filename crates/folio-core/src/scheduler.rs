//! Per-frame callback registry.
//!
//! The host calls [`FrameScheduler::tick`] once per rendered frame. Each
//! subscription gets its own clock that starts at the first frame it sees,
//! so a freshly mounted scene always animates from `t = 0`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

/// Timing handed to a frame callback, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Time since this subscription's first frame.
    pub elapsed: f32,
    /// Time since the previous frame this subscription saw.
    pub delta: f32,
}

type FrameCallback = Box<dyn FnMut(FrameTime)>;

struct Subscription {
    token: FrameToken,
    started_at: Option<f64>,
    last: Option<f64>,
    callback: FrameCallback,
}

#[derive(Default)]
pub struct FrameScheduler {
    next_token: u64,
    subs: Vec<Subscription>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(FrameTime) + 'static) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.subs.push(Subscription {
            token,
            started_at: None,
            last: None,
            callback: Box::new(callback),
        });
        token
    }

    /// Remove a subscription. Returns `false` for unknown or already removed tokens.
    pub fn unsubscribe(&mut self, token: FrameToken) -> bool {
        let before = self.subs.len();
        self.subs.retain(|s| s.token != token);
        let removed = self.subs.len() != before;
        // Tokens are handed out in increasing order and never reused.
        if !removed && token.0 < self.next_token {
            log::debug!("[frame] token {:?} already cancelled", token);
        }
        removed
    }

    #[inline]
    pub fn is_subscribed(&self, token: FrameToken) -> bool {
        self.subs.iter().any(|s| s.token == token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Run every live callback once, in subscription order. `now_sec` must be monotonic.
    pub fn tick(&mut self, now_sec: f64) {
        for sub in &mut self.subs {
            let start = *sub.started_at.get_or_insert(now_sec);
            let delta = sub.last.map_or(0.0, |last| now_sec - last);
            sub.last = Some(now_sec);
            (sub.callback)(FrameTime {
                elapsed: (now_sec - start) as f32,
                delta: delta.max(0.0) as f32,
            });
        }
    }
}
