//! Pointer and resize event wiring. Pointer moves feed the animator in
//! NDC; resizes update both the canvas backing store and the camera.

use std::cell::RefCell;
use std::rc::Rc;

use field_core::ParticleField;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let mut field = w.field.borrow_mut();
        let ndc = field.viewport().px_to_ndc(px);
        field.pointer_moved(ndc);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas);
        w.field.borrow_mut().resize(width as f32, height as f32);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
