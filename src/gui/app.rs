//! PrivacyLens Main Application
//! Header with mode selection, central panel dispatching to the active view.

use crate::data::{DatasetLoader, RecordPresenter};
use crate::gui::{CardViewer, CollectionViewer, ProtectViewer};
use egui::{CentralPanel, Color32, ComboBox, RichText, ScrollArea, TopBottomPanel};

/// The three view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ViewTab {
    #[default]
    AppWise,
    DataCollections,
    StayProtected,
}

/// Main application window.
///
/// The dataset is loaded before construction and never mutated; every
/// frame is an independent render pass over it. Each tab keeps its own
/// selection, mirroring one dropdown per view.
pub struct PrivacyLensApp {
    loader: DatasetLoader,
    app_names: Vec<String>,
    tab: ViewTab,
    /// App-Wise selection; empty renders every record.
    app_wise_selection: String,
    /// Data Collections selection; empty shows the selection prompt.
    collection_selection: String,
}

impl PrivacyLensApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, loader: DatasetLoader) -> Self {
        let app_names = RecordPresenter::display_names(loader.records());
        Self {
            loader,
            app_names,
            tab: ViewTab::default(),
            app_wise_selection: String::new(),
            collection_selection: String::new(),
        }
    }

    /// Dropdown over the sorted display names, with a leading unset entry.
    fn app_selector(
        ui: &mut egui::Ui,
        id: &str,
        unset_label: &str,
        names: &[String],
        current: &mut String,
    ) {
        ui.vertical_centered(|ui| {
            ComboBox::from_id_salt(id)
                .width(240.0)
                .selected_text(if current.is_empty() {
                    unset_label.to_string()
                } else {
                    current.clone()
                })
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_empty(), unset_label).clicked() {
                        current.clear();
                    }
                    for name in names {
                        if ui
                            .selectable_label(current.as_str() == name.as_str(), name)
                            .clicked()
                        {
                            *current = name.clone();
                        }
                    }
                });
        });
    }

    fn show_app_wise(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("App-Wise Privacy Details")
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(8.0);

        Self::app_selector(
            ui,
            "app_wise_selector",
            "All apps",
            &self.app_names,
            &mut self.app_wise_selection,
        );
        ui.add_space(12.0);

        let selection = (!self.app_wise_selection.is_empty())
            .then_some(self.app_wise_selection.as_str());
        CardViewer::show(ui, self.loader.records(), selection);
    }

    fn show_data_collections(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("App Data Collection Process")
                    .size(18.0)
                    .strong(),
            );
            ui.label(
                RichText::new("Understand how each app collects data — simplified for all users")
                    .size(13.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(8.0);

        Self::app_selector(
            ui,
            "collection_selector",
            "Select an App",
            &self.app_names,
            &mut self.collection_selection,
        );
        ui.add_space(12.0);

        let selection = (!self.collection_selection.is_empty())
            .then_some(self.collection_selection.as_str());
        CollectionViewer::show(ui, selection);
    }
}

impl eframe::App for PrivacyLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("PrivacyLens")
                        .size(26.0)
                        .strong()
                        .color(Color32::from_rgb(100, 149, 237)),
                );
                ui.label(
                    RichText::new("Explore how your data is handled by trending social apps in India")
                        .size(13.0)
                        .color(Color32::GRAY),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.tab, ViewTab::AppWise, "App-Wise View");
                    ui.radio_value(&mut self.tab, ViewTab::DataCollections, "Data Collections");
                    ui.radio_value(&mut self.tab, ViewTab::StayProtected, "Stay Protected");
                });
            });
            ui.add_space(8.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    match self.tab {
                        ViewTab::AppWise => self.show_app_wise(ui),
                        ViewTab::DataCollections => self.show_data_collections(ui),
                        ViewTab::StayProtected => ProtectViewer::show(ui),
                    }
                });
        });
    }
}
