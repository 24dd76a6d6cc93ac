#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use field_core::{FieldParams, ParticleField, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("field-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #field-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let field = ParticleField::new(
        FieldParams::default(),
        Viewport::new(width as f32, height as f32),
    )?;
    log::info!("[field] {} particles, {}x{} viewport", field.len(), width, height);
    let field = Rc::new(RefCell::new(field));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        field: field.clone(),
    });

    let capacity = field.borrow().len();
    let gpu = frame::init_gpu(&canvas, capacity).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, canvas, gpu }));
    frame::start_loop(frame_ctx);

    Ok(())
}
