use crate::dom::{self, Listener};
use crate::overlay;
use folio_core::content::ContactSubmission;
use folio_core::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-lifetime listeners. Dropping this detaches them all.
pub struct InputWiring {
    _listeners: Vec<Listener>,
}

pub fn wire_input_handlers(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    stage: &Rc<RefCell<Stage>>,
) -> InputWiring {
    let mut listeners = Vec::new();

    // Resize: keep the backing store in sync and let the stage re-classify.
    {
        let stage = stage.clone();
        let canvas = canvas.clone();
        listeners.push(Listener::new(window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
            if let Some(w) = web::window() {
                let (width, height) = dom::viewport_size(&w);
                if let Ok(mut st) = stage.try_borrow_mut() {
                    st.on_resize(width, height);
                }
            }
        }));
    }

    // Click anywhere on the intro skips it.
    {
        let stage = stage.clone();
        let skip = dom::add_click_listener(document, overlay::INTRO_ID, move || {
            if let Ok(mut st) = stage.try_borrow_mut() {
                if st.on_click(instant::now()) {
                    log::info!("[input] intro skipped");
                }
            }
        });
        match skip {
            Some(l) => listeners.push(l),
            None => log::warn!("[input] missing #{}", overlay::INTRO_ID),
        }
    }

    // Navigation buttons carry their target in `data-section`.
    if let Ok(buttons) = document.query_selector_all(overlay::NAV_SELECTOR) {
        for i in 0..buttons.length() {
            let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let Some(name) = el.get_attribute("data-section") else {
                continue;
            };
            let stage = stage.clone();
            listeners.push(Listener::new(&el, "click", move |ev| {
                ev.prevent_default();
                let Ok(mut st) = stage.try_borrow_mut() else {
                    return;
                };
                if let Err(e) = st.select_section(&name, instant::now()) {
                    log::warn!("[nav] {}", e);
                }
            }));
        }
    }

    // The contact form has no backend; submissions are only logged.
    if let Some(form) = document
        .get_element_by_id(overlay::CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        let target = form.clone();
        listeners.push(Listener::new(&form, "submit", move |ev| {
            ev.prevent_default();
            let submission = read_contact_form(&target);
            log::info!("[contact] form submitted: {}", submission);
        }));
    }

    InputWiring {
        _listeners: listeners,
    }
}

fn read_contact_form(form: &web::HtmlFormElement) -> ContactSubmission {
    let mut submission = ContactSubmission::new();
    let Ok(controls) = form.query_selector_all("input, textarea") else {
        return submission;
    };
    for i in 0..controls.length() {
        let Some(node) = controls.item(i) else {
            continue;
        };
        if let Some(input) = node.dyn_ref::<web::HtmlInputElement>() {
            submission.push(&input.name(), &input.value());
        } else if let Some(area) = node.dyn_ref::<web::HtmlTextAreaElement>() {
            submission.push(&area.name(), &area.value());
        }
    }
    submission
}

/// Install or remove the window `pointermove` listener so it is attached
/// exactly while some mounted scene holds a pointer lease.
pub fn sync_pointer_listener(
    slot: &mut Option<Listener>,
    window: &web::Window,
    stage: &Rc<RefCell<Stage>>,
    listening: bool,
) {
    match (listening, slot.is_some()) {
        (true, false) => {
            let stage = stage.clone();
            *slot = Some(Listener::new(window, "pointermove", move |ev| {
                let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                if let Ok(mut st) = stage.try_borrow_mut() {
                    st.on_pointer_move(me.client_x() as f32, me.client_y() as f32);
                }
            }));
            log::debug!("[input] pointermove attached");
        }
        (false, true) => {
            *slot = None;
            log::debug!("[input] pointermove detached");
        }
        _ => {}
    }
}
