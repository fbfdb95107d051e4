mod app;
mod ui;

use std::path::PathBuf;

use app::HallRiskApp;
use clap::Parser;
use eframe::egui;
use hall_risk::config::Tables;
use hall_risk::state::AppState;

/// Browse dining-hall menu items by allergen risk.
#[derive(Parser)]
#[command(name = "hall-risk")]
struct Args {
    /// Menu items JSON produced by `import_menu` / `filter_menu`.
    #[arg(default_value = "menuItems.json")]
    data: PathBuf,

    /// JSON file overriding the built-in weight and keyword tables.
    #[arg(long)]
    tables: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let tables = Tables::load(args.tables.as_deref()).unwrap_or_else(|e| {
        log::warn!("Using built-in tables: {e}");
        Tables::default()
    });

    let mut state = AppState::new(tables);
    state.load(&args.data);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hall Risk – Dining Allergen Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(HallRiskApp::new(state)))),
    )
}
