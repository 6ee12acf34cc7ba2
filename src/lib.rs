#![cfg(target_arch = "wasm32")]
use ocean_core::{Ocean, OceanConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod overlay;

pub use bridge::{
    clear_person, on_position_change, person_lost, push_position, set_magnitude,
    set_magnitude_range, tunables,
};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn random_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("getrandom unavailable ({e}), using fixed seed");
            OceanConfig::new(1, 1).seed
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ocean-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    let ctx2d = dom::context_2d(&canvas)?;

    let config = OceanConfig {
        seed: random_seed(),
        ..OceanConfig::new(canvas.width(), canvas.height())
    };
    let input_range = config.tunables.pool.input_range;
    let mut ocean = Ocean::new(config)?;
    ocean.set_position_listener(Box::new(bridge::notify_position_change));
    let ocean = Rc::new(RefCell::new(ocean));
    bridge::register(ocean.clone());

    overlay::hide(&document);
    events::wire_global_keydown(ocean.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        input_range,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ocean,
        canvas,
        ctx2d,
        document,
        last_layout: None,
        last_overlay_ms: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
