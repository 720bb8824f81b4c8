#![cfg(target_arch = "wasm32")]
use folio_core::{Stage, StageConfig, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(overlay::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", overlay::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::viewport_size(&window);
    let config = StageConfig {
        seed: rand::random(),
        ..StageConfig::default()
    };
    let stage = Rc::new(RefCell::new(Stage::new(
        Viewport::new(width, height),
        config,
        instant::now(),
    )));
    log::info!("[init] viewport {}x{} ({:?})", width, height, Viewport::new(width, height).class());

    // Listeners live for the whole page.
    let wiring = events::wire_input_handlers(&window, &document, &canvas, &stage);
    std::mem::forget(wiring);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[init] continuing without WebGPU; only DOM state will update");
    }
    let ctx = frame::FrameContext::new(stage, window, document, canvas, gpu);
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
