#![cfg(target_arch = "wasm32")]
use rain_core::{
    FilterController, FrameClock, LogProgress, RainScene, ResourceGroup, Resources,
    DEFAULT_RESOURCE_ROOT, INFO_TEXT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rain-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn load_resources() -> Resources {
    let mut resources = Resources::with_builtin_shaders();
    let source = fetch::FetchSource::new(DEFAULT_RESOURCE_ROOT);
    if let Err(e) = resources
        .load_group(&source, &ResourceGroup::preload(), &mut LogProgress)
        .await
    {
        log::error!("[res] preload failed: {}", e);
    }
    resources
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let resources = load_resources().await;
    let gpu = frame::init_gpu(&canvas, &resources).await;

    let scene: events::SharedScene = Rc::new(RefCell::new(RainScene::new(
        FilterController::default(),
        FrameClock::new(),
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_visibility(&document, scene.clone());
    dom::set_info_text(&document, INFO_TEXT);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
