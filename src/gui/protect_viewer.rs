//! Protect Viewer Widget
//! Stay Protected view: static protection tips and the privacy-news links.

use crate::content;
use egui::RichText;

/// Renders the Stay Protected mode. Pure static content, no dataset
/// interaction.
pub struct ProtectViewer;

impl ProtectViewer {
    pub fn show(ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Stay Protected: Tips & Tech News")
                .size(18.0)
                .strong(),
        );
        ui.add_space(10.0);

        for (title, body) in content::TIPS {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(*title).strong());
                ui.label(*body);
            });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Data Privacy News").size(16.0).strong());
        ui.add_space(6.0);

        for (title, link) in content::NEWS {
            ui.hyperlink_to(*title, *link);
            ui.add_space(4.0);
        }
    }
}
