use crate::input;
use rain_core::{FrameClock, RainScene, SceneEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScene = Rc<RefCell<RainScene<FrameClock>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: SharedScene,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::starts_drag(ev.button()) {
            return;
        }
        let pos = input::pointer_stage_px(&ev, &w.canvas);
        w.scene.borrow_mut().handle(SceneEvent::PointerDown {
            id: input::pointer_key(ev.pointer_id()),
            x: pos.x,
            y: pos.y,
        });
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_stage_px(&ev, &w.canvas);
        w.scene.borrow_mut().handle(SceneEvent::PointerMove {
            id: input::pointer_key(ev.pointer_id()),
            x: pos.x,
            y: pos.y,
        });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene.borrow_mut().handle(SceneEvent::PointerUp {
            id: input::pointer_key(ev.pointer_id()),
        });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

/// Pauses the ticker while the page is hidden.
pub fn wire_visibility(document: &web::Document, scene: SharedScene) {
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let ev = if doc.hidden() {
            SceneEvent::Pause
        } else {
            SceneEvent::Resume
        };
        scene.borrow_mut().handle(ev);
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
