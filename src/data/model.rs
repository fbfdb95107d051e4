use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::config::Tables;
use crate::risk::{compute_hall_risk, compute_item_risk, hall_label, HallSummary, RiskAssessment};

// ---------------------------------------------------------------------------
// MenuRow – one record of the scraped tabular input
// ---------------------------------------------------------------------------

/// A raw scraped row. Every column is optional; empty cells read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuRow {
    pub hall_name: Option<String>,
    pub item_name: Option<String>,
    pub allergens_inline: Option<String>,
    pub ingredients_text: Option<String>,
}

// ---------------------------------------------------------------------------
// MenuItem – one element of the intermediate / filtered JSON artifacts
// ---------------------------------------------------------------------------

/// A deduplicated menu item.
///
/// Reading is lenient: absent or `null` fields become empty values and
/// non-string scalars are read as their text. Fields the pipeline does not
/// know about are kept in `extra` and written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hall_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub allergens: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ingredients: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub station: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text form of a scalar: strings as-is, numbers and booleans printed,
/// arrays joined with `,`. `null` has no text.
fn value_text(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        JsonValue::Array(values) => Some(
            values
                .into_iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<JsonValue>::deserialize(deserializer)?.and_then(value_text))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// A list of scalars; `null` entries are dropped and a lone scalar becomes a
/// one-element list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::Array(values)) => values.into_iter().filter_map(value_text).collect(),
        Some(other) => value_text(other).into_iter().collect(),
        None => Vec::new(),
    })
}

impl MenuItem {
    /// `itemName`, falling back to a legacy `name` field.
    pub fn display_name(&self) -> &str {
        if !self.item_name.is_empty() {
            return &self.item_name;
        }
        self.extra
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or("")
    }

    /// `category`, falling back to `station` when the category is absent or empty.
    pub fn category_text(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.station.as_deref())
            .unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// ScoredItem / MenuDataset – what the viewer works on
// ---------------------------------------------------------------------------

/// A menu item with its risk attached. Recomputed on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub item: MenuItem,
    pub risk: RiskAssessment,
}

/// A loaded, scored dataset with its derived hall summaries.
#[derive(Debug, Clone)]
pub struct MenuDataset {
    /// Items in load order.
    pub items: Vec<ScoredItem>,
    /// Hall summaries in first-seen order.
    pub halls: Vec<HallSummary>,
    /// Distinct hall names, sorted alphabetically (hall filter options).
    pub hall_names: Vec<String>,
}

impl MenuDataset {
    /// Score every item and build the hall summaries.
    pub fn from_items(items: Vec<MenuItem>, tables: &Tables) -> Self {
        let items: Vec<ScoredItem> = items
            .into_iter()
            .map(|item| {
                let risk = compute_item_risk(&item, tables);
                ScoredItem { item, risk }
            })
            .collect();
        let halls = compute_hall_risk(&items);
        let hall_names: Vec<String> = items
            .iter()
            .map(|s| hall_label(&s.item).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        MenuDataset {
            items,
            halls,
            hall_names,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_read_as_empty() {
        let item: MenuItem =
            serde_json::from_str(r#"{ "id": 4, "hallName": null, "allergens": null }"#).unwrap();
        assert_eq!(item.id, 4);
        assert_eq!(item.hall_name, "");
        assert_eq!(item.item_name, "");
        assert!(item.allergens.is_empty());
        assert_eq!(item.ingredients, "");
    }

    #[test]
    fn non_string_scalars_read_as_text() {
        let item: MenuItem = serde_json::from_str(
            r#"{ "hallName": "D2", "itemName": 42, "category": 7, "station": true,
                 "allergens": ["milk", 3, null], "ingredients": 1.5 }"#,
        )
        .unwrap();
        assert_eq!(item.item_name, "42");
        assert_eq!(item.category.as_deref(), Some("7"));
        assert_eq!(item.station.as_deref(), Some("true"));
        assert_eq!(item.allergens, vec!["milk", "3"]);
        assert_eq!(item.ingredients, "1.5");
        assert_eq!(item.category_text(), "7");
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let src = r#"{"id":1,"hallName":"D2","itemName":"Soup","allergens":[],"ingredients":"","calories":120}"#;
        let item: MenuItem = serde_json::from_str(src).unwrap();
        assert_eq!(item.extra["calories"], 120);
        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["calories"], 120);
        assert_eq!(out["itemName"], "Soup");
        assert!(out.get("category").is_none());
    }

    #[test]
    fn display_name_falls_back_to_legacy_name() {
        let item: MenuItem = serde_json::from_str(r#"{ "name": "Waffle" }"#).unwrap();
        assert_eq!(item.display_name(), "Waffle");
    }

    #[test]
    fn category_text_prefers_non_empty_category() {
        let mut item = MenuItem {
            category: Some(String::new()),
            station: Some("Sauce Bar".into()),
            ..Default::default()
        };
        assert_eq!(item.category_text(), "Sauce Bar");
        item.category = Some("Grill".into());
        assert_eq!(item.category_text(), "Grill");
    }

    #[test]
    fn dataset_lists_sorted_distinct_halls() {
        let items = ["Owens", "D2", "Owens", "Turner"]
            .iter()
            .enumerate()
            .map(|(i, hall)| MenuItem {
                id: i as u64 + 1,
                hall_name: hall.to_string(),
                item_name: format!("item {i}"),
                ..Default::default()
            })
            .collect();
        let ds = MenuDataset::from_items(items, &Tables::default());
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.hall_names, vec!["D2", "Owens", "Turner"]);
        let order: Vec<&str> = ds.halls.iter().map(|h| h.hall_name.as_str()).collect();
        assert_eq!(order, vec!["Owens", "D2", "Turner"]);
    }
}
