use eframe::egui;

use hall_risk::state::AppState;

use crate::ui::{items, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HallRiskApp {
    pub state: AppState,
}

impl HallRiskApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HallRiskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: query controls + hall overview ----
        egui::SidePanel::left("filter_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: hall averages ----
        egui::TopBottomPanel::bottom("hall_chart")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::hall_chart(ui, &self.state);
            });

        // ---- Central panel: item cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            items::item_list(ui, &self.state);
        });
    }
}
