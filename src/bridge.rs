//! JS-facing surface. The tracking and timeline scripts call these exports;
//! events are queued here and handed to the ocean at the start of each frame.

use ocean_core::{InputEvent, Ocean, PersonId, PositionChange, IDLE_PERSON};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static PENDING: RefCell<Vec<InputEvent>> = const { RefCell::new(Vec::new()) };
    static POSITION_CALLBACK: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
    static OCEAN: RefCell<Option<Rc<RefCell<Ocean>>>> = const { RefCell::new(None) };
}

pub fn register(ocean: Rc<RefCell<Ocean>>) {
    OCEAN.with(|o| *o.borrow_mut() = Some(ocean));
}

/// Ids from the page; the idle wander's id is reserved.
fn accept_person(person: PersonId) -> bool {
    if person == IDLE_PERSON {
        log::warn!("[bridge] person id {person} is reserved, ignoring");
        return false;
    }
    true
}

pub fn enqueue(event: InputEvent) {
    PENDING.with(|p| p.borrow_mut().push(event));
}

pub fn drain() -> Vec<InputEvent> {
    PENDING.with(|p| std::mem::take(&mut *p.borrow_mut()))
}

/// Position listener installed on the ocean; forwards to the JS callback.
pub fn notify_position_change(change: &PositionChange) {
    POSITION_CALLBACK.with(|cb| {
        if let Some(f) = cb.borrow().as_ref() {
            let args = js_sys::Array::new();
            args.push(&JsValue::from(change.person));
            args.push(&JsValue::from(change.raw));
            args.push(&JsValue::from(change.screen.x));
            args.push(&JsValue::from(change.screen.y));
            if let Err(e) = f.apply(&JsValue::NULL, &args) {
                log::warn!("[bridge] position callback threw: {:?}", e);
            }
        }
    });
}

#[wasm_bindgen]
pub fn push_position(person: PersonId, raw: Option<f32>) {
    if !accept_person(person) {
        return;
    }
    enqueue(InputEvent::Cursor { person, raw });
}

#[wasm_bindgen]
pub fn person_lost(person: PersonId) {
    if !accept_person(person) {
        return;
    }
    enqueue(InputEvent::PersonLost { person });
}

#[wasm_bindgen]
pub fn set_magnitude(person: PersonId, count: f64) {
    if !accept_person(person) {
        return;
    }
    enqueue(InputEvent::Magnitude { person, count });
}

#[wasm_bindgen]
pub fn set_magnitude_range(min: f64, max: f64) {
    enqueue(InputEvent::MagnitudeRange { min, max });
}

#[wasm_bindgen]
pub fn clear_person(person: PersonId) {
    if !accept_person(person) {
        return;
    }
    enqueue(InputEvent::ClearPerson { person });
}

/// `callback(person, raw, screenX, screenY)` runs once per confirmed position change.
#[wasm_bindgen]
pub fn on_position_change(callback: js_sys::Function) {
    POSITION_CALLBACK.with(|cb| *cb.borrow_mut() = Some(callback));
}

/// Current tunables as a plain object. Read-only; edits do not flow back.
#[wasm_bindgen]
pub fn tunables() -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    OCEAN.with(|o| -> Result<(), JsValue> {
        let slot = o.borrow();
        let Some(ocean) = slot.as_ref() else {
            return Ok(());
        };
        let ocean = ocean
            .try_borrow()
            .map_err(|_| JsValue::from_str("ocean is mid-frame"))?;
        let t = ocean.tunables();
        let fields: [(&str, f64); 10] = [
            ("ringCount", t.ripple.ring_count as f64),
            ("ringSpacing", t.ripple.ring_spacing as f64),
            ("ringThickness", t.ripple.ring_thickness as f64),
            ("expansionSpeed", t.ripple.expansion_speed as f64),
            ("waveIntensity", t.ripple.wave_intensity as f64),
            ("dissipationRate", t.ripple.dissipation_rate as f64),
            ("maxEmitters", t.pool.max_emitters as f64),
            ("movementThreshold", t.pool.movement_threshold as f64),
            ("settleDelayMs", t.pool.settle_delay_ms),
            ("targetFps", t.render.target_fps as f64),
        ];
        for (key, value) in fields {
            js_sys::Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(value))?;
        }
        Ok(())
    })?;
    Ok(obj.into())
}
