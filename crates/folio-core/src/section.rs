//! Which top-level section is showing, and the tweens around switching.
//!
//! `Intro` is entered once at startup. It leaves either when the minimum
//! display time has elapsed and the automatic fade finishes, or sooner when
//! the visitor skips. After that the three content sections are freely
//! navigable and `Intro` is unreachable.

use crate::constants::*;
use crate::tween::{Ease, Tween};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Intro,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Sections reachable from the navigation menu, in menu order.
    pub const NAVIGABLE: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub fn name(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    #[inline]
    pub fn is_intro(self) -> bool {
        self == Section::Intro
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intro" | "flash" => Ok(Section::Intro),
            "about" => Ok(Section::About),
            "projects" => Ok(Section::Projects),
            "contact" => Ok(Section::Contact),
            _ => Err(SectionError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section `{0}`")]
    Unknown(String),
    #[error("the intro cannot be re-entered")]
    IntroNotSelectable,
    #[error("navigation is unavailable while the intro is playing")]
    IntroPlaying,
}

/// Emitted whenever the active section changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub from: Section,
    pub to: Section,
}

/// Opacity and vertical offset (CSS pixels) for the active section container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl SectionStyle {
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum IntroPhase {
    Loading,
    Fading(Tween),
}

#[derive(Clone, Debug)]
pub struct SectionController {
    current: Section,
    intro_started: f64,
    intro: Option<IntroPhase>,
    entry: Option<Tween>,
}

impl SectionController {
    /// Begin at the intro, counting its display time from `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            current: Section::Intro,
            intro_started: now_ms,
            intro: Some(IntroPhase::Loading),
            entry: None,
        }
    }

    #[inline]
    pub fn current(&self) -> Section {
        self.current
    }

    /// True until the minimum intro display time has elapsed.
    pub fn is_loading(&self, now_ms: f64) -> bool {
        self.current.is_intro() && now_ms < self.loading_deadline()
    }

    #[inline]
    fn loading_deadline(&self) -> f64 {
        self.intro_started + INTRO_MIN_DISPLAY_MS
    }

    /// True once the intro exit fade has begun (automatically or by skipping).
    pub fn is_fading(&self) -> bool {
        matches!(self.intro, Some(IntroPhase::Fading(_)))
    }

    /// Advance timers. Returns the change when the intro completes.
    pub fn update(&mut self, now_ms: f64) -> Option<SectionChange> {
        if self.intro == Some(IntroPhase::Loading) && now_ms >= self.loading_deadline() {
            let fade = Tween::new(
                1.0,
                0.0,
                self.loading_deadline(),
                INTRO_AUTO_FADE_MS,
                Ease::Power1Out,
            );
            log::info!("[section] intro fade starts at {:.0}ms", fade.start_ms);
            self.intro = Some(IntroPhase::Fading(fade));
        }
        match self.intro {
            Some(IntroPhase::Fading(fade)) if fade.is_done(now_ms) => {
                Some(self.finish_intro(fade.end_ms()))
            }
            _ => None,
        }
    }

    /// Explicit skip (click anywhere on the intro). Starts a short fade from the
    /// current opacity; never delays an already scheduled completion.
    pub fn skip(&mut self, now_ms: f64) -> bool {
        let Some(phase) = self.intro else {
            return false;
        };
        let opacity = self.intro_opacity(now_ms);
        let mut end = now_ms + INTRO_SKIP_FADE_MS;
        if let IntroPhase::Fading(fade) = phase {
            end = end.min(fade.end_ms());
        }
        let fade = Tween::new(opacity, 0.0, now_ms, (end - now_ms).max(0.0), Ease::Power1Out);
        log::info!("[section] intro skipped at {:.0}ms", now_ms);
        self.intro = Some(IntroPhase::Fading(fade));
        true
    }

    /// Switch between content sections. Re-selecting the active one is a no-op.
    pub fn select(
        &mut self,
        target: Section,
        now_ms: f64,
    ) -> Result<Option<SectionChange>, SectionError> {
        if target.is_intro() {
            return Err(SectionError::IntroNotSelectable);
        }
        if self.current.is_intro() {
            return Err(SectionError::IntroPlaying);
        }
        if target == self.current {
            return Ok(None);
        }
        let change = SectionChange {
            from: self.current,
            to: target,
        };
        self.enter(target, now_ms);
        Ok(Some(change))
    }

    /// Opacity of the intro overlay; zero once the intro is gone.
    pub fn intro_opacity(&self, now_ms: f64) -> f32 {
        match self.intro {
            Some(IntroPhase::Loading) => 1.0,
            Some(IntroPhase::Fading(fade)) => fade.value(now_ms),
            None => 0.0,
        }
    }

    /// Entry tween of the active content section.
    pub fn section_style(&self, now_ms: f64) -> SectionStyle {
        match self.entry {
            Some(tw) => {
                let opacity = tw.value(now_ms);
                SectionStyle {
                    opacity,
                    offset_y: (1.0 - opacity) * ENTRY_OFFSET_PX,
                }
            }
            None => SectionStyle::SETTLED,
        }
    }

    fn finish_intro(&mut self, at_ms: f64) -> SectionChange {
        self.intro = None;
        self.enter(Section::About, at_ms);
        SectionChange {
            from: Section::Intro,
            to: Section::About,
        }
    }

    fn enter(&mut self, target: Section, now_ms: f64) {
        log::info!("[section] {} -> {}", self.current, target);
        self.current = target;
        self.entry = Some(Tween::new(0.0, 1.0, now_ms, ENTRY_TWEEN_MS, Ease::Power2Out));
    }
}
