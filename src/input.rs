// Pointer and layout helpers kept free of web_sys so host tests can include them.

/// Pointer position across the canvas (0 = left, 1 = right) -> raw tracking
/// value. The ocean maps larger raw values further left, so this is inverted
/// to keep the ripple under the pointer.
#[inline]
pub fn pointer_raw(u: f32, input_range: [f32; 2]) -> f32 {
    let [lo, hi] = input_range;
    let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.5 };
    lo + (1.0 - u) * (hi - lo)
}

/// Client x inside an element of `width` css pixels -> [0, 1].
#[inline]
pub fn client_to_unit(client_x: f32, left: f32, width: f32) -> f32 {
    if width > 0.0 {
        ((client_x - left) / width).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// CSS pixels -> canvas backing pixels.
#[inline]
pub fn css_to_canvas(v: f32, css_extent: f32, px_extent: f32) -> f32 {
    if css_extent > 0.0 {
        v * px_extent / css_extent
    } else {
        v
    }
}

/// Bounding rect in css pixels, relative to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CssRect {
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Horizon y and data span (left, width) in canvas pixels from the timeline
/// rects. Empty rects report nothing so the ocean falls back to its defaults.
pub fn timeline_layout(
    timeline: Option<CssRect>,
    data: Option<CssRect>,
    axis_fraction: f32,
    canvas_css: (f32, f32),
    canvas_px: (f32, f32),
) -> (Option<f32>, Option<(f32, f32)>) {
    let horizon = timeline.filter(|r| !r.is_empty()).map(|r| {
        css_to_canvas(r.top + r.height * axis_fraction, canvas_css.1, canvas_px.1)
    });
    let span = data.filter(|r| r.width > 0.0).map(|r| {
        (
            css_to_canvas(r.left, canvas_css.0, canvas_px.0),
            css_to_canvas(r.width, canvas_css.0, canvas_px.0),
        )
    });
    (horizon, span)
}
