//! Card Viewer Widget
//! App-Wise View: one heading per matched record, then its normalized
//! fields as colored cards in two rows.

use crate::data::{AppPrivacyRecord, FieldCard, RecordPresenter};
use egui::{Color32, RichText};

const CARD_SPACING: f32 = 8.0;
const CARD_MIN_HEIGHT: f32 = 120.0;
const CARD_MIN_WIDTH: f32 = 130.0;

/// Bright fill palette for the field cards
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(255, 107, 107), // Coral
    Color32::from_rgb(255, 217, 61),  // Yellow
    Color32::from_rgb(107, 203, 119), // Green
    Color32::from_rgb(77, 150, 255),  // Blue
    Color32::from_rgb(166, 109, 212), // Purple
    Color32::from_rgb(255, 143, 171), // Pink
    Color32::from_rgb(0, 194, 209),   // Cyan
    Color32::from_rgb(255, 159, 28),  // Orange
    Color32::from_rgb(155, 93, 229),  // Violet
    Color32::from_rgb(241, 91, 181),  // Magenta
];

/// Renders the App-Wise View card grid.
pub struct CardViewer;

impl CardViewer {
    /// Draw cards for every record matching `selection` (all records when
    /// there is no selection). Zero matches is a normal empty state.
    pub fn show(ui: &mut egui::Ui, records: &[AppPrivacyRecord], selection: Option<&str>) {
        let cards = RecordPresenter::present(records, selection, PALETTE.len());

        if cards.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No matching apps").size(20.0));
            });
            return;
        }

        for card in &cards {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&card.display_name).size(18.0).strong());
            });
            ui.add_space(8.0);

            let (first_row, second_row) = card.rows();
            Self::draw_row(ui, first_row);
            Self::draw_row(ui, second_row);

            ui.add_space(12.0);
        }
    }

    fn draw_row(ui: &mut egui::Ui, fields: &[FieldCard]) {
        if fields.is_empty() {
            return;
        }

        let gaps = CARD_SPACING * fields.len().saturating_sub(1) as f32;
        let card_width = ((ui.available_width() - gaps) / fields.len() as f32).max(CARD_MIN_WIDTH);

        ui.horizontal(|ui| {
            for field in fields {
                Self::draw_field_card(ui, field, card_width);
                ui.add_space(CARD_SPACING);
            }
        });
        ui.add_space(CARD_SPACING);
    }

    fn draw_field_card(ui: &mut egui::Ui, field: &FieldCard, width: f32) {
        let fill = PALETTE[field.palette_slot % PALETTE.len()];

        egui::Frame::none()
            .fill(fill)
            .rounding(12.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.set_min_height(CARD_MIN_HEIGHT);

                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(field.label)
                            .size(13.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(&field.value).size(12.0).color(Color32::WHITE));
                });
            });
    }
}
