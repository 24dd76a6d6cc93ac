use glam::Vec2;
use web_sys as web;

/// Map a client-space (CSS px) location into the canvas' backing-store
/// pixel space. A degenerate layout rect maps to the canvas center.
#[inline]
pub fn canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return backing_size * 0.5;
    }
    let css = client - rect_origin;
    Vec2::new(
        css.x / rect_size.x * backing_size.x,
        css.y / rect_size.y * backing_size.y,
    )
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
