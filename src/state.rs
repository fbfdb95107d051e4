use std::path::{Path, PathBuf};

use crate::color::HallColors;
use crate::config::Tables;
use crate::data::filter::{visible_indices, Query};
use crate::data::loader::load_items;
use crate::data::model::MenuDataset;
use crate::risk::RiskCategory;

/// Shown instead of the item list when a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load menu items. Check the log for details.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every mutation goes through a method that ends in [`AppState::refilter`],
/// so `visible_indices` always reflects the current query.
pub struct AppState {
    /// Lookup tables, loaded once at startup.
    pub tables: Tables,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<MenuDataset>,

    /// File the dataset came from, used by Reload.
    pub source: Option<PathBuf>,

    /// Current search / hall / risk selection.
    pub query: Query,

    /// Indices of items passing the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Per-hall colours for the overview chart.
    pub hall_colors: HallColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables,
            dataset: None,
            source: None,
            query: Query::default(),
            visible_indices: Vec::new(),
            hall_colors: HallColors::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reapply the current query.
    pub fn set_dataset(&mut self, dataset: MenuDataset) {
        self.hall_colors = HallColors::new(&dataset.hall_names);
        if let Some(hall) = &self.query.hall {
            if !dataset.hall_names.contains(hall) {
                self.query.hall = None;
            }
        }
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Load and score the JSON artifact at `path`.
    ///
    /// On failure the previous dataset is dropped, a fallback message is set
    /// and the error is logged; the session keeps running.
    pub fn load(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
        match load_items(path) {
            Ok(items) => {
                let dataset = MenuDataset::from_items(items, &self.tables);
                log::info!(
                    "Loaded {} items across {} halls from {}",
                    dataset.len(),
                    dataset.halls.len(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Error loading data: {e}");
                self.dataset = None;
                self.visible_indices.clear();
                self.status_message = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Load the last source again, recomputing every score.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load(&path);
        }
    }

    /// Recompute `visible_indices` after a query or data change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => visible_indices(ds, &self.query),
            None => Vec::new(),
        };
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.refilter();
    }

    /// `None` selects all halls.
    pub fn set_hall_filter(&mut self, hall: Option<String>) {
        self.query.hall = hall;
        self.refilter();
    }

    /// `None` selects all risk categories.
    pub fn set_risk_filter(&mut self, risk: Option<RiskCategory>) {
        self.query.risk = risk;
        self.refilter();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Tables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MenuItem;

    fn item(id: u64, hall: &str, name: &str, allergens: &[&str]) -> MenuItem {
        MenuItem {
            id,
            hall_name: hall.into(),
            item_name: name.into(),
            allergens: allergens.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn loaded() -> AppState {
        let mut state = AppState::default();
        let items = vec![
            item(1, "D2", "Pad Thai", &["peanuts", "soy"]),
            item(2, "Owens", "Pancakes", &["milk", "eggs", "wheat"]),
            item(3, "D2", "Fruit Cup", &[]),
        ];
        let ds = MenuDataset::from_items(items, &state.tables);
        state.set_dataset(ds);
        state
    }

    #[test]
    fn setters_recompute_visible_items() {
        let mut state = loaded();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);

        state.set_hall_filter(Some("D2".into()));
        assert_eq!(state.visible_indices, vec![0, 2]);

        state.set_search("pad");
        assert_eq!(state.visible_indices, vec![0]);

        state.set_risk_filter(Some(RiskCategory::High));
        assert!(state.visible_indices.is_empty());

        state.set_risk_filter(None);
        state.set_search("");
        state.set_hall_filter(None);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn failed_load_sets_fallback_message() {
        let mut state = loaded();
        state.load(Path::new("/nonexistent/menuItems.json"));
        assert!(state.dataset.is_none());
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.status_message.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn stale_hall_selection_is_cleared_on_new_data() {
        let mut state = loaded();
        state.set_hall_filter(Some("Owens".into()));
        let ds = MenuDataset::from_items(vec![item(1, "Turner", "Soup", &[])], &state.tables);
        state.set_dataset(ds);
        assert_eq!(state.query.hall, None);
        assert_eq!(state.visible_indices, vec![0]);
    }
}
