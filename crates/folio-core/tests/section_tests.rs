// Host-side tests for the section state machine and viewport classes.

use folio_core::viewport::ViewportClass;
use folio_core::{Section, SectionController, SectionError, SectionStyle, Viewport};

#[test]
fn intro_runs_to_about_without_input() {
    let mut c = SectionController::new(0.0);
    assert_eq!(c.current(), Section::Intro);
    assert!(c.is_loading(1999.0));
    assert_eq!(c.update(1999.0), None);
    assert_eq!(c.intro_opacity(1999.0), 1.0);

    // fade begins at the 2s mark
    assert_eq!(c.update(2000.0), None);
    assert!(c.is_fading());
    assert!(!c.is_loading(2000.0));
    let mid = c.intro_opacity(2750.0);
    assert!(mid > 0.0 && mid < 1.0);

    let change = c.update(3500.0).expect("intro completes");
    assert_eq!(change.from, Section::Intro);
    assert_eq!(change.to, Section::About);
    assert_eq!(c.current(), Section::About);
    assert_eq!(c.intro_opacity(3500.0), 0.0);
}

#[test]
fn skip_finishes_within_half_a_second() {
    let mut c = SectionController::new(0.0);
    assert!(c.skip(800.0));
    assert!(c.is_fading());
    assert_eq!(c.update(1200.0), None);
    let change = c.update(1300.0).expect("skip fade done");
    assert_eq!(change.to, Section::About);
}

#[test]
fn skip_never_delays_scheduled_completion() {
    let mut c = SectionController::new(0.0);
    c.update(2000.0);
    // automatic fade would end at 3500; skipping at 3300 must not push it to 3800
    assert!(c.skip(3300.0));
    assert!(c.update(3500.0).is_some());
}

#[test]
fn intro_never_returns() {
    let mut c = SectionController::new(0.0);
    c.update(2000.0);
    c.update(3500.0);
    assert_eq!(c.select(Section::Intro, 4000.0), Err(SectionError::IntroNotSelectable));
    assert!(!c.skip(4000.0));
    assert_eq!(c.update(10_000.0), None);
    assert_eq!(c.current(), Section::About);
}

#[test]
fn navigation_while_intro_plays_is_rejected() {
    let mut c = SectionController::new(0.0);
    assert_eq!(c.select(Section::Projects, 100.0), Err(SectionError::IntroPlaying));
    assert_eq!(c.current(), Section::Intro);
}

#[test]
fn select_switches_and_reselect_is_noop() {
    let mut c = SectionController::new(0.0);
    c.update(2000.0);
    c.update(3500.0);
    let change = c.select(Section::Projects, 5000.0).unwrap().unwrap();
    assert_eq!((change.from, change.to), (Section::About, Section::Projects));
    assert_eq!(c.select(Section::Projects, 5100.0), Ok(None));
}

#[test]
fn entry_tween_fades_and_slides_in() {
    let mut c = SectionController::new(0.0);
    c.update(2000.0);
    c.update(3500.0);
    c.select(Section::Contact, 5000.0).unwrap();
    let start = c.section_style(5000.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.offset_y, 50.0);
    let mid = c.section_style(5500.0);
    assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
    assert!(mid.offset_y > 0.0 && mid.offset_y < 25.0);
    assert_eq!(c.section_style(6000.0), SectionStyle::SETTLED);
}

#[test]
fn section_names_parse() {
    assert_eq!("about".parse::<Section>(), Ok(Section::About));
    assert_eq!(" Projects ".parse::<Section>(), Ok(Section::Projects));
    assert!(matches!("blog".parse::<Section>(), Err(SectionError::Unknown(_))));
}

#[test]
fn breakpoint_is_768() {
    assert_eq!(Viewport::new(767.0, 900.0).class(), ViewportClass::Compact);
    assert_eq!(Viewport::new(768.0, 900.0).class(), ViewportClass::Wide);
    assert_eq!(Viewport::new(1920.0, 1080.0).class(), ViewportClass::Wide);
}
