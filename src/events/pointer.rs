use crate::bridge;
use crate::constants::STAND_IN_PERSON;
use crate::input;
use ocean_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer wiring for the stand-in person. `input_range` is copied at init;
/// later tunable edits only touch ring shape, not the range.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub input_range: [f32; 2],
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = w.canvas.get_bounding_client_rect();
        let u = input::client_to_unit(
            ev.client_x() as f32,
            rect.left() as f32,
            rect.width() as f32,
        );
        bridge::enqueue(InputEvent::Cursor {
            person: STAND_IN_PERSON,
            raw: Some(input::pointer_raw(u, w.input_range)),
        });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        bridge::enqueue(InputEvent::PersonLost {
            person: STAND_IN_PERSON,
        });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
