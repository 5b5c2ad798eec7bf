use glam::Vec2;
use rain_core::PointerId;
use web_sys as web;

/// `MouseEvent.button` of the main (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Only the main button starts a drag; touch and pen contacts report it too.
#[inline]
pub fn starts_drag(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Maps a DOM `pointerId` onto the scene's pointer ids.
#[inline]
pub fn pointer_key(pointer_id: i32) -> PointerId {
    pointer_id as u32 as PointerId
}

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_stage_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}
