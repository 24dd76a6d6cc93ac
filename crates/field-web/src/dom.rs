use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the device
/// pixel ratio. Returns the resulting backing dimensions.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
        (w_px, h_px)
    } else {
        (canvas.width().max(1), canvas.height().max(1))
    }
}
