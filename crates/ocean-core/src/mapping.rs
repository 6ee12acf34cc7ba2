//! Raw tracked position -> screen x. This mirrors the timeline's own mapping
//! (later dates sit to the left of the camera's right edge), so a ripple lands
//! under the highlighted bar.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    pub input_min: f32,
    pub input_max: f32,
    pub sensitivity: Option<f32>,
    /// Left edge of the timeline's data area in canvas pixels.
    pub origin_x: f32,
    /// Width of the timeline's data area in canvas pixels.
    pub span: f32,
}

impl ScreenMapping {
    pub fn new(input_range: [f32; 2], sensitivity: Option<f32>, canvas_width: f32) -> Self {
        Self {
            input_min: input_range[0],
            input_max: input_range[1],
            sensitivity,
            origin_x: 0.0,
            span: canvas_width,
        }
    }

    /// Position along the timeline in [0, 1] before inversion.
    pub fn normalized(&self, raw: f32) -> f32 {
        let range = self.input_max - self.input_min;
        let mut t = if range > 0.0 && raw.is_finite() {
            ((raw - self.input_min) / range).clamp(0.0, 1.0)
        } else {
            0.5
        };
        if let Some(exp) = self.sensitivity.filter(|e| *e > 0.0) {
            t = t.powf(exp);
        }
        t
    }

    pub fn to_screen_x(&self, raw: f32) -> f32 {
        self.origin_x + (1.0 - self.normalized(raw)) * self.span
    }

    pub fn set_span(&mut self, origin_x: f32, span: f32) {
        self.origin_x = origin_x;
        self.span = span.max(0.0);
    }
}
