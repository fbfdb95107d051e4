use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, HLine, Legend, Plot};

use hall_risk::risk::{LOW_RISK_MAX, MAX_SCORE, MEDIUM_RISK_MAX};
use hall_risk::state::AppState;

// ---------------------------------------------------------------------------
// Hall average chart (bottom panel)
// ---------------------------------------------------------------------------

/// Bar chart of each hall's average score, with the category thresholds.
pub fn hall_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    Plot::new("hall_chart")
        .legend(Legend::default())
        .y_axis_label("Average risk score")
        .include_y(0.0)
        .include_y(f64::from(MAX_SCORE))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, hall) in dataset.halls.iter().enumerate() {
                let color = state.hall_colors.color_for(&hall.hall_name);
                let bar = Bar::new(i as f64, f64::from(hall.average_score))
                    .name(format!("{} ({})", hall.hall_name, hall.category))
                    .fill(color)
                    .width(0.7);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(&hall.hall_name).color(color));
            }
            plot_ui.hline(HLine::new(f64::from(LOW_RISK_MAX)).name("Low / Medium"));
            plot_ui.hline(HLine::new(f64::from(MEDIUM_RISK_MAX)).name("Medium / High"));
        });
}
