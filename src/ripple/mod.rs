use eframe::egui;

pub mod item;

use item::RippleItem;

pub const DEFAULT_RIPPLE_COUNT: usize = 8;
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_DURATION_MS: u64 = 8000;
pub const DEFAULT_RIPPLE_COLOR: u32 = 0x3300_0000;
pub const DEFAULT_STROKE_WIDTH_MIN: f32 = 20.0;
pub const DEFAULT_STROKE_WIDTH_MAX: f32 = 80.0;
pub const DEFAULT_RADIUS_MIN: f32 = 0.0;
pub const DEFAULT_RADIUS_MAX: f32 = 1000.0;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum RippleStyle {
    Stroke,
    Fill,
}

/// Draw parameters for one ring in one frame.
#[derive(Clone, Copy, Debug)]
pub struct RingShape {
    pub radius: f32,
    pub stroke_width: f32,
    pub color: egui::Color32,
}

/// A set of concentric, time-staggered expanding rings.
///
/// Each ring starts `delay_step` seconds after the previous one and
/// loops over the same duration. Radius, stroke width and alpha are all
/// derived from a single eased progress scalar per ring.
pub struct RippleField {
    items: Vec<RippleItem>,
    style: RippleStyle,
    ripple_color: u32,
    min_stroke_width: f32,
    max_stroke_width: f32,
    min_radius: f32,
    max_radius: f32,
    started_at: Option<f64>,
    last_size: Option<egui::Vec2>,
}

impl Default for RippleField {
    fn default() -> Self {
        Self::new(
            DEFAULT_RIPPLE_COUNT,
            DEFAULT_DELAY_MS as f64 / 1000.0,
            DEFAULT_DURATION_MS as f64 / 1000.0,
        )
    }
}

impl RippleField {
    pub fn new(count: usize, delay_step: f64, duration: f64) -> Self {
        let items = (0..count)
            .map(|i| RippleItem::new(i as f64 * delay_step, duration))
            .collect();
        Self {
            items,
            style: RippleStyle::Stroke,
            ripple_color: DEFAULT_RIPPLE_COLOR,
            min_stroke_width: DEFAULT_STROKE_WIDTH_MIN,
            max_stroke_width: DEFAULT_STROKE_WIDTH_MAX,
            min_radius: DEFAULT_RADIUS_MIN,
            max_radius: DEFAULT_RADIUS_MAX,
            started_at: None,
            last_size: None,
        }
    }

    /// Start (or restart) the animation at clock value `now`.
    ///
    /// Calling this while already running restarts every ring's tween,
    /// including its initial start delay.
    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    /// Stop the animation. The next frame draws nothing.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn style(&self) -> RippleStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RippleStyle) {
        self.style = style;
    }

    /// Set the ripple color as packed AARRGGBB.
    pub fn set_ripple_color(&mut self, color: u32) {
        self.ripple_color = color;
    }

    pub fn set_min_stroke_width(&mut self, width: f32) {
        self.min_stroke_width = width;
    }

    pub fn set_max_stroke_width(&mut self, width: f32) {
        self.max_stroke_width = width;
    }

    pub fn set_min_radius(&mut self, radius: f32) {
        self.min_radius = radius;
    }

    pub fn set_max_radius(&mut self, radius: f32) {
        self.max_radius = radius;
    }

    /// Recompute the radius bounds from the view size. A zero or
    /// negative dimension leaves the previous bounds untouched.
    pub fn on_size_changed(&mut self, width: f32, height: f32) {
        if 0.0 >= width || 0.0 >= height {
            return;
        }
        self.min_radius = 0.0;
        self.max_radius = 0.6 * width.max(height);
    }

    /// Per-ring draw parameters at clock value `now`, in ring order.
    ///
    /// Empty while stopped; rings still inside their start delay are
    /// skipped.
    pub fn shapes(&self, now: f64) -> Vec<RingShape> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        let elapsed = now - started_at;
        self.items
            .iter()
            .filter_map(|item| item.eased_progress(elapsed))
            .map(|t| self.shape_at(t))
            .collect()
    }

    fn shape_at(&self, t: f32) -> RingShape {
        RingShape {
            radius: t * (self.max_radius - self.min_radius) + self.min_radius,
            stroke_width: t * (self.max_stroke_width - self.min_stroke_width)
                + self.min_stroke_width,
            color: faded_color(self.ripple_color, (1.0 - t) * 0.8),
        }
    }

    /// Paint the current frame into the available area, centered.
    pub fn update_and_draw(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        if self.last_size != Some(rect.size()) {
            self.on_size_changed(rect.width(), rect.height());
            self.last_size = Some(rect.size());
        }

        let center = rect.center();
        let time = ui.input(|i| i.time);
        for shape in self.shapes(time) {
            match self.style {
                RippleStyle::Stroke => {
                    painter.circle_stroke(
                        center,
                        shape.radius,
                        egui::Stroke::new(shape.stroke_width, shape.color),
                    );
                }
                RippleStyle::Fill => {
                    painter.circle_filled(center, shape.radius, shape.color);
                }
            }
        }

        if self.is_running() {
            ui.ctx().request_repaint();
        }
    }
}

/// Scale the alpha channel of a packed AARRGGBB color, keeping RGB.
fn faded_color(argb: u32, alpha_scale: f32) -> egui::Color32 {
    let base_alpha = (argb >> 24) as u8;
    let alpha = (alpha_scale * base_alpha as f32).round() as u8;
    egui::Color32::from_rgba_unmultiplied((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, alpha)
}
