//! Control Panel Widget
//! Buttons under each chart plus a one-line status.

use egui::{Color32, RichText};

/// Controls for a single chart.
pub struct ControlPanel {
    pub status: String,
    pub is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            is_error: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the controls
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.horizontal(|ui| {
            let update = egui::Button::new(RichText::new("▶ Update").size(14.0))
                .min_size(egui::vec2(100.0, 28.0));
            if ui.add(update).clicked() {
                action = ControlPanelAction::Update;
            }

            let copy = egui::Button::new(RichText::new("📋 Copy SVG").size(14.0))
                .min_size(egui::vec2(100.0, 28.0));
            if ui.add(copy).clicked() {
                action = ControlPanelAction::CopySvg;
            }
        });

        ui.add_space(4.0);

        let status_color = if self.is_error {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = true;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Update,
    CopySvg,
}
