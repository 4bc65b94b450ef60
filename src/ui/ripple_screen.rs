use eframe::egui;

use crate::ripple::RippleField;

#[derive(Default)]
pub struct RippleScreen {}

impl RippleScreen {
    pub fn new() -> Self {
        Self {}
    }

    pub fn draw(&mut self, ui: &mut egui::Ui, ripple: &mut RippleField) {
        ripple.update_and_draw(ui);
    }
}
