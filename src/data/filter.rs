use super::model::{MenuDataset, ScoredItem};
use crate::risk::{hall_label, RiskCategory};

// ---------------------------------------------------------------------------
// Query state: search text, hall and risk selection
// ---------------------------------------------------------------------------

/// What the user is currently looking for. `None` selections mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub hall: Option<String>,
    pub risk: Option<RiskCategory>,
}

impl Query {
    /// Empty search, or the item name contains it (case-insensitive).
    pub fn matches_search(&self, item: &ScoredItem) -> bool {
        self.search.is_empty()
            || item
                .item
                .item_name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn matches_hall(&self, item: &ScoredItem) -> bool {
        self.hall
            .as_deref()
            .map_or(true, |hall| hall_label(&item.item) == hall)
    }

    pub fn matches_risk(&self, item: &ScoredItem) -> bool {
        self.risk.map_or(true, |risk| item.risk.category == risk)
    }

    /// All three predicates AND-ed.
    pub fn matches(&self, item: &ScoredItem) -> bool {
        self.matches_search(item) && self.matches_hall(item) && self.matches_risk(item)
    }
}

/// Return indices of items that pass the query, in load order.
pub fn visible_indices(dataset: &MenuDataset, query: &Query) -> Vec<usize> {
    dataset
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.matches(item))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tables;
    use crate::data::model::MenuItem;

    fn dataset() -> MenuDataset {
        let rows = [
            ("D2", "Peanut Noodles", vec!["peanuts"], ""),
            ("Owens", "Garden Salad", vec![], ""),
            ("D2", "Shrimp Tacos", vec!["shellfish", "wheat", "milk", "soy"], "shared fryer"),
        ];
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(i, (hall, name, allergens, ingredients))| MenuItem {
                id: i as u64 + 1,
                hall_name: hall.into(),
                item_name: name.into(),
                allergens: allergens.into_iter().map(String::from).collect(),
                ingredients: ingredients.into(),
                ..Default::default()
            })
            .collect();
        MenuDataset::from_items(items, &Tables::default())
    }

    #[test]
    fn default_query_shows_everything() {
        assert_eq!(visible_indices(&dataset(), &Query::default()), vec![0, 1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_on_item_name() {
        let q = Query {
            search: "NOODLE".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&dataset(), &q), vec![0]);
    }

    #[test]
    fn matches_lowercases_mixed_case_search() {
        let ds = dataset();
        let q = Query {
            search: "sHrImP".into(),
            ..Default::default()
        };
        assert!(q.matches(&ds.items[2]));
        assert!(!q.matches(&ds.items[0]));
    }

    #[test]
    fn filters_are_and_ed() {
        let ds = dataset();
        let q = Query {
            search: String::new(),
            hall: Some("D2".into()),
            risk: Some(RiskCategory::Medium),
        };
        // Shrimp Tacos: 8 + 4 + 5 + 4 + 12 = 33
        assert_eq!(ds.items[2].risk.raw_score, 33);
        assert_eq!(visible_indices(&ds, &q), vec![2]);

        let q = Query {
            hall: Some("Owens".into()),
            risk: Some(RiskCategory::Medium),
            ..Default::default()
        };
        assert!(visible_indices(&ds, &q).is_empty());
    }
}
