use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use hall_risk::risk::RiskCategory;
use hall_risk::state::AppState;

use super::items::badge;

// ---------------------------------------------------------------------------
// Left side panel – query widgets and hall overview
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let hall_names = dataset.hall_names.clone();
    let halls = dataset.halls.clone();

    // ---- Search ----
    ui.strong("Search");
    let mut search = state.query.search.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut search).hint_text("Item name…"))
        .changed()
    {
        state.set_search(search);
    }
    ui.add_space(4.0);

    // ---- Hall ----
    ui.strong("Dining hall");
    let current_hall = state.query.hall.clone();
    egui::ComboBox::from_id_salt("hall_filter")
        .selected_text(current_hall.as_deref().unwrap_or("All halls"))
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_hall.is_none(), "All halls")
                .clicked()
            {
                state.set_hall_filter(None);
            }
            for hall in &hall_names {
                if ui
                    .selectable_label(current_hall.as_ref() == Some(hall), hall)
                    .clicked()
                {
                    state.set_hall_filter(Some(hall.clone()));
                }
            }
        });
    ui.add_space(4.0);

    // ---- Risk ----
    ui.strong("Risk level");
    let current_risk = state.query.risk;
    egui::ComboBox::from_id_salt("risk_filter")
        .selected_text(current_risk.map_or("All levels", |r| r.as_str()))
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_risk.is_none(), "All levels")
                .clicked()
            {
                state.set_risk_filter(None);
            }
            for risk in RiskCategory::ALL {
                if ui
                    .selectable_label(current_risk == Some(risk), risk.as_str())
                    .clicked()
                {
                    state.set_risk_filter(Some(risk));
                }
            }
        });

    ui.separator();
    ui.heading("Hall overview");

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::remainder())
                .column(Column::auto())
                .column(Column::auto())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Hall");
                    });
                    header.col(|ui| {
                        ui.strong("Items");
                    });
                    header.col(|ui| {
                        ui.strong("Risk");
                    });
                })
                .body(|mut body| {
                    for hall in &halls {
                        body.row(22.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(&hall.hall_name).color(
                                    state.hall_colors.color_for(&hall.hall_name),
                                ));
                            });
                            row.col(|ui| {
                                ui.label(format!("{} items analyzed", hall.items.len()));
                            });
                            row.col(|ui| {
                                badge(ui, hall.category, hall.average_score);
                            });
                        });
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} items loaded, {} halls",
                ds.len(),
                ds.halls.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open menu items")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
