use crate::bridge;
use crate::constants::DEBUG_REFRESH_MS;
use crate::dom;
use crate::overlay;
use ocean_core::{InputEvent, Ocean};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

type Layout = (Option<f32>, Option<(f32, f32)>);

pub struct FrameContext {
    pub ocean: Rc<RefCell<Ocean>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub document: web::Document,
    pub last_layout: Option<Layout>,
    pub last_overlay_ms: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let Ok(mut ocean) = self.ocean.try_borrow_mut() else {
            return;
        };

        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != (ocean.canvas().width(), ocean.canvas().height()) {
            if let Err(e) = ocean.resize(w, h) {
                log::error!("[frame] resize failed: {e}");
                return;
            }
            self.last_layout = None;
        }

        for event in bridge::drain() {
            ocean.push(event);
        }
        let layout = dom::timeline_layout(&self.document, &self.canvas);
        if self.last_layout != Some(layout) {
            ocean.push(InputEvent::Layout {
                horizon_y: layout.0,
                timeline_span: layout.1,
            });
            self.last_layout = Some(layout);
        }

        if !ocean.frame(now) {
            return;
        }

        let pixels = ocean.canvas();
        match web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pixels.as_bytes()),
            pixels.width(),
            pixels.height(),
        ) {
            Ok(image) => {
                if let Err(e) = self.ctx2d.put_image_data(&image, 0.0, 0.0) {
                    log::error!("[frame] put_image_data failed: {:?}", e);
                }
            }
            Err(e) => log::error!("[frame] ImageData failed: {:?}", e),
        }

        if now - self.last_overlay_ms >= DEBUG_REFRESH_MS && !overlay::is_hidden(&self.document) {
            overlay::update(&self.document, &ocean);
            self.last_overlay_ms = now;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
