use crate::constants::{TIMELINE_AXIS_FRACTION, TIMELINE_DATA_SELECTOR, TIMELINE_ID};
use crate::input::{self, CssRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px.max(1) || canvas.height() != h_px.max(1) {
            canvas.set_width(w_px.max(1));
            canvas.set_height(h_px.max(1));
        }
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn css_rect(el: &web::Element, origin: &web::DomRect) -> CssRect {
    let r = el.get_bounding_client_rect();
    CssRect {
        left: (r.left() - origin.left()) as f32,
        top: (r.top() - origin.top()) as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

/// Read the timeline's axis level and data span, in canvas pixels.
pub fn timeline_layout(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> (Option<f32>, Option<(f32, f32)>) {
    let origin = canvas.get_bounding_client_rect();
    let timeline = document
        .get_element_by_id(TIMELINE_ID)
        .map(|el| css_rect(&el, &origin));
    let data = document
        .query_selector(TIMELINE_DATA_SELECTOR)
        .ok()
        .flatten()
        .map(|el| css_rect(&el, &origin));
    input::timeline_layout(
        timeline,
        data,
        TIMELINE_AXIS_FRACTION,
        (origin.width() as f32, origin.height() as f32),
        (canvas.width() as f32, canvas.height() as f32),
    )
}
