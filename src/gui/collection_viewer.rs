//! Collection Viewer Widget
//! Data Collections view: pastel flashcards describing how the selected
//! app collects data.

use crate::content;
use egui::{Color32, RichText};

const CARD_MAX_WIDTH: f32 = 850.0;
const TEXT_COLOR: Color32 = Color32::from_rgb(45, 45, 45);

/// Pastel fill palette for the flashcards
pub const CARD_COLORS: [Color32; 10] = [
    Color32::from_rgb(252, 228, 236),
    Color32::from_rgb(255, 243, 224),
    Color32::from_rgb(227, 242, 253),
    Color32::from_rgb(241, 248, 233),
    Color32::from_rgb(240, 244, 195),
    Color32::from_rgb(237, 231, 246),
    Color32::from_rgb(255, 235, 238),
    Color32::from_rgb(232, 245, 233),
    Color32::from_rgb(255, 253, 231),
    Color32::from_rgb(224, 247, 250),
];

const PLACEHOLDER_ROW: &[&str] = &[content::NO_FLASHCARDS];

/// Renders the flashcard list for the Data Collections mode.
pub struct CollectionViewer;

impl CollectionViewer {
    pub fn show(ui: &mut egui::Ui, selection: Option<&str>) {
        let Some(name) = selection.filter(|name| !name.is_empty()) else {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    RichText::new("Please select an app to view how it collects your data.")
                        .size(14.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} - Data Collection", name))
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(10.0);

        // Uncovered apps get a single placeholder card.
        let bullets = content::flashcards_for(name).unwrap_or(PLACEHOLDER_ROW);

        for (index, bullet) in bullets.iter().enumerate() {
            Self::draw_flashcard(ui, bullet, CARD_COLORS[index % CARD_COLORS.len()]);
            ui.add_space(10.0);
        }
    }

    fn draw_flashcard(ui: &mut egui::Ui, text: &str, fill: Color32) {
        ui.vertical_centered(|ui| {
            egui::Frame::none()
                .fill(fill)
                .rounding(12.0)
                .inner_margin(14.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(CARD_MAX_WIDTH));
                    ui.label(RichText::new(text).size(14.0).color(TEXT_COLOR));
                });
        });
    }
}
