//! The per-refresh loop: advance the field, then hand positions and
//! colors to the renderer.

use std::cell::RefCell;
use std::rc::Rc;

use field_core::{ParticleField, BUBBLE_SCALE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext<'a> {
    pub field: Rc<RefCell<ParticleField>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.tick();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let view_proj = field.camera().view_proj().to_cols_array_2d();
            let instances = build_instances(&field);
            if let Err(e) = g.render(view_proj, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub fn build_instances(field: &ParticleField) -> Vec<render::InstanceData> {
    let positions = field.positions();
    (0..field.len())
        .map(|i| {
            let [r, g, b] = field.rgb(i);
            render::InstanceData {
                pos: positions[i].to_array(),
                scale: BUBBLE_SCALE,
                color: [r, g, b, 1.0],
            }
        })
        .collect()
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
