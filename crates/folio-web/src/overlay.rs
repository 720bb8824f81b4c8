// DOM side of the stage: intro overlay, section containers, placeholder.

use crate::dom;
use folio_core::content::Project;
use folio_core::{Backdrop, Section, SectionStyle};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "stage-canvas";
pub const INTRO_ID: &str = "intro";
pub const PLACEHOLDER_ID: &str = "backdrop-placeholder";
pub const PROJECT_DETAIL_ID: &str = "project-detail";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const NAV_SELECTOR: &str = "[data-section]";

#[inline]
pub fn section_id(section: Section) -> Option<&'static str> {
    match section {
        Section::Intro => None,
        Section::About => Some("section-about"),
        Section::Projects => Some("section-projects"),
        Section::Contact => Some("section-contact"),
    }
}

pub fn apply_intro(document: &web::Document, opacity: f32) {
    let Some(el) = dom::html_element(document, INTRO_ID) else {
        return;
    };
    let style = el.style();
    if opacity <= 0.0 {
        let _ = style.set_property("display", "none");
    } else {
        let _ = style.set_property("display", "");
        let _ = style.set_property("opacity", &format!("{:.3}", opacity));
    }
}

pub fn apply_backdrop(document: &web::Document, backdrop: Backdrop) {
    let canvas = !matches!(backdrop, Backdrop::Placeholder);
    dom::set_visible(document, CANVAS_ID, canvas);
    dom::set_visible(document, PLACEHOLDER_ID, !canvas);
}

/// Show only the active section container and apply its entry tween.
pub fn apply_section(document: &web::Document, current: Section, style: SectionStyle) {
    for section in Section::NAVIGABLE {
        let Some(id) = section_id(section) else {
            continue;
        };
        let Some(el) = dom::html_element(document, id) else {
            continue;
        };
        let css = el.style();
        if section == current {
            let _ = css.set_property("display", "");
            let _ = css.set_property("opacity", &format!("{:.3}", style.opacity));
            let _ = css.set_property("transform", &format!("translateY({:.1}px)", style.offset_y));
        } else {
            let _ = css.set_property("display", "none");
        }
    }
}

pub fn mark_nav(document: &web::Document, current: Section) {
    let Ok(buttons) = document.query_selector_all(NAV_SELECTOR) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let active = el.get_attribute("data-section").as_deref() == Some(current.name());
        let _ = el.class_list().toggle_with_force("active", active);
    }
}

pub fn set_project_detail(document: &web::Document, project: Option<Project>) {
    if let Some(el) = document.get_element_by_id(PROJECT_DETAIL_ID) {
        let text = project.map(|p| p.title).unwrap_or("");
        el.set_text_content(Some(text));
    }
}
