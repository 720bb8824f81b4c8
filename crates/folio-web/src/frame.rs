use crate::dom::Listener;
use crate::events;
use crate::overlay;
use crate::render;
use folio_core::{Backdrop, Section, Sprite, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub pointer_listener: Option<Listener>,
    pub sprites: Vec<Sprite>,
    pub last_section: Option<Section>,
    pub last_backdrop: Option<Backdrop>,
    pub last_project: Option<u32>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        stage: Rc<RefCell<Stage>>,
        window: web::Window,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            stage,
            window,
            document,
            canvas,
            gpu,
            pointer_listener: None,
            sprites: Vec::new(),
            last_section: None,
            last_backdrop: None,
            last_project: None,
        }
    }

    pub fn frame(&mut self, now_ms: f64) {
        let stage_rc = self.stage.clone();
        let Ok(mut stage) = stage_rc.try_borrow_mut() else {
            return;
        };
        stage.frame(now_ms);

        let section = stage.current_section();
        let backdrop = stage.backdrop();
        if self.last_section != Some(section) {
            overlay::mark_nav(&self.document, section);
            self.last_section = Some(section);
        }
        if self.last_backdrop != Some(backdrop) {
            overlay::apply_backdrop(&self.document, backdrop);
            log::info!("[frame] backdrop {:?}", backdrop);
            self.last_backdrop = Some(backdrop);
        }
        overlay::apply_intro(&self.document, stage.intro_opacity(now_ms));
        if !section.is_intro() {
            overlay::apply_section(&self.document, section, stage.section_style(now_ms));
        }
        let project = stage.hovered_project();
        if self.last_project != project.map(|p| p.id) {
            overlay::set_project_detail(&self.document, project);
            self.last_project = project.map(|p| p.id);
        }

        let listening = stage.pointer().is_listening();
        events::sync_pointer_listener(
            &mut self.pointer_listener,
            &self.window,
            &self.stage,
            listening,
        );

        if backdrop == Backdrop::Placeholder {
            return;
        }
        stage.sprites(&mut self.sprites);
        let lights = stage.lights();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(stage.camera(), &self.sprites, &lights) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
