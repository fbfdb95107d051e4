use super::model::MenuItem;

// ---------------------------------------------------------------------------
// Keyword exclusion: drop cereals, sauces/condiments and pickles
// ---------------------------------------------------------------------------

/// Result of running the exclusion filter over an item list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub kept: Vec<MenuItem>,
    pub removed: Vec<MenuItem>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.kept.len() + self.removed.len()
    }
}

/// Whether any term occurs in the lowercased name, ingredients or category.
///
/// `terms` must already be lowercase.
pub fn looks_excluded<S: AsRef<str>>(item: &MenuItem, terms: &[S]) -> bool {
    let name = item.display_name().to_lowercase();
    let ingredients = item.ingredients.to_lowercase();
    let category = item.category_text().to_lowercase();

    terms.iter().any(|term| {
        let term: &str = term.as_ref();
        name.contains(term) || ingredients.contains(term) || category.contains(term)
    })
}

/// Split `items` into kept and removed, preserving order within each side.
pub fn partition<S: AsRef<str>>(items: Vec<MenuItem>, terms: &[S]) -> Partition {
    let (removed, kept): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|it| looks_excluded(it, terms));
    log::debug!("Exclusion filter kept {}, removed {}", kept.len(), removed.len());
    Partition { kept, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tables;

    fn named(name: &str, ingredients: &str) -> MenuItem {
        MenuItem {
            hall_name: "D2".into(),
            item_name: name.into(),
            ingredients: ingredients.into(),
            ..Default::default()
        }
    }

    #[test]
    fn matches_name_ingredients_and_category() {
        let terms = Tables::default().exclusion_terms;
        assert!(looks_excluded(&named("Honey Nut Cereal", ""), &terms));
        assert!(looks_excluded(&named("Fries", "potatoes, KETCHUP packet"), &terms));

        let mut item = named("Chicken Tenders", "chicken, flour");
        assert!(!looks_excluded(&item, &terms));
        item.station = Some("Dipping Sauces".into());
        assert!(looks_excluded(&item, &terms));
    }

    #[test]
    fn substring_matches_are_intentional() {
        // "jam" inside "pajamas" still counts.
        let terms = Tables::default().exclusion_terms;
        assert!(looks_excluded(&named("Pajamas Pancake", ""), &terms));
    }

    #[test]
    fn partition_keeps_order() {
        let items = vec![
            named("Burger", ""),
            named("BBQ Sauce", ""),
            named("Salad", ""),
            named("Dill Pickle", ""),
        ];
        let p = partition(items, &Tables::default().exclusion_terms);
        let kept: Vec<&str> = p.kept.iter().map(|i| i.item_name.as_str()).collect();
        let removed: Vec<&str> = p.removed.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(kept, vec!["Burger", "Salad"]);
        assert_eq!(removed, vec!["BBQ Sauce", "Dill Pickle"]);
        assert_eq!(p.total(), 4);
    }
}
