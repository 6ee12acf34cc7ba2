use crate::keymap::{action_for_key, apply_step, KeyAction};
use crate::overlay;
use ocean_core::{InputEvent, Ocean};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    ocean: &Rc<RefCell<Ocean>>,
    document: &web::Document,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleDebug => overlay::toggle(document),
        KeyAction::ClearAll => {
            crate::bridge::enqueue(InputEvent::ClearAll);
            log::info!("[keys] cleared all persons");
        }
        step => {
            let Ok(mut ocean) = ocean.try_borrow_mut() else {
                return;
            };
            let mut next = ocean.tunables().clone();
            if !apply_step(&mut next, step) {
                return;
            }
            match ocean.set_tunables(next) {
                Ok(()) => {
                    let r = &ocean.tunables().ripple;
                    log::info!(
                        "[keys] rings={} speed={:.0} intensity={:.0}",
                        r.ring_count,
                        r.expansion_speed,
                        r.wave_intensity
                    );
                }
                Err(e) => log::warn!("[keys] rejected: {e}"),
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(ocean: Rc<RefCell<Ocean>>, document: web::Document) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &ocean, &document);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
