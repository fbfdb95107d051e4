use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use hall_risk::color::{category_color, highlight_color};
use hall_risk::data::model::ScoredItem;
use hall_risk::highlight::highlight;
use hall_risk::risk::RiskCategory;
use hall_risk::state::AppState;

// ---------------------------------------------------------------------------
// Item cards (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered item list.
pub fn item_list(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                match &state.status_message {
                    Some(msg) => ui.label(RichText::new(msg).weak()),
                    None => ui.heading("Open a menu file to begin  (File → Open…)"),
                };
            });
            return;
        }
    };

    ui.label(format!("{} items shown", state.visible_indices.len()));
    ui.separator();

    if state.visible_indices.is_empty() {
        ui.label(RichText::new("No items match your filters.").weak());
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.visible_indices {
                item_card(ui, &dataset.items[idx], &state.tables.highlight_terms);
                ui.add_space(6.0);
            }
        });
}

fn item_card(ui: &mut Ui, scored: &ScoredItem, highlight_terms: &[String]) {
    let item = &scored.item;
    let risk = &scored.risk;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.strong(&item.item_name);
                ui.label(RichText::new(&item.hall_name).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui: &mut Ui| {
                badge(ui, risk.category, risk.raw_score);
            });
        });

        ui.label(
            RichText::new(format!(
                "Allergen severity: {} · Hazard score: {}",
                risk.allergen_score, risk.hazard_score
            ))
            .small(),
        );

        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong("Allergens:");
            if item.allergens.is_empty() {
                ui.label(RichText::new("None listed").weak());
            } else {
                ui.label(item.allergens.join(", "));
            }
        });

        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong("Ingredients:");
            let job = ingredients_job(ui, &item.ingredients, highlight_terms);
            ui.add(egui::Label::new(job).wrap());
        });
    });
}

/// Ingredient text with every highlight term marked.
fn ingredients_job(ui: &Ui, text: &str, terms: &[String]) -> LayoutJob {
    let text_color = ui.visuals().text_color();
    let mut job = LayoutJob::default();
    for seg in highlight(text, terms) {
        let format = if seg.is_marked() {
            TextFormat {
                color: Color32::BLACK,
                background: highlight_color(seg.depth),
                ..Default::default()
            }
        } else {
            TextFormat {
                color: text_color,
                ..Default::default()
            }
        };
        job.append(seg.text, 0.0, format);
    }
    job
}

/// `"<category> (<score>/100)"` on the category colour.
pub fn badge(ui: &mut Ui, category: RiskCategory, score: u32) {
    ui.label(
        RichText::new(format!("{category} ({score}/100)"))
            .color(Color32::WHITE)
            .background_color(category_color(category)),
    );
}
