//! Heuristic allergen / cross-contact risk scoring.
//!
//! Every function here is pure: tables in, numbers out. Absent fields are
//! treated as empty, so there is no error path.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Tables;
use crate::data::model::{MenuItem, ScoredItem};

/// Highest score that still counts as low risk (inclusive).
pub const LOW_RISK_MAX: u32 = 30;
/// Highest score that still counts as medium risk (inclusive).
pub const MEDIUM_RISK_MAX: u32 = 60;
/// Scores are clamped to `0..=MAX_SCORE`.
pub const MAX_SCORE: u32 = 100;

/// Label used to group items whose hall name is empty.
pub const UNKNOWN_HALL: &str = "Unknown Hall";

// ---------------------------------------------------------------------------
// RiskCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    /// Three-tier thresholding shared by items and halls.
    pub fn from_score(score: u32) -> Self {
        if score <= LOW_RISK_MAX {
            RiskCategory::Low
        } else if score <= MEDIUM_RISK_MAX {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Medium => "Medium Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Item scoring
// ---------------------------------------------------------------------------

/// Risk attached to one menu item.
///
/// `allergen_score` and `hazard_score` are reported unclamped; only
/// `raw_score` is clamped. Their sum may therefore exceed `raw_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub allergen_score: u32,
    pub hazard_score: u32,
    pub raw_score: u32,
    pub category: RiskCategory,
}

/// Sum of severity weights for the listed allergens.
///
/// Names are matched lowercased and trimmed. Unknown non-empty names add the
/// table's fallback weight; empty names add nothing. No cap is applied.
pub fn allergen_score<S: AsRef<str>>(allergens: &[S], tables: &Tables) -> u32 {
    allergens
        .iter()
        .map(|a| {
            let key = a.as_ref().trim().to_lowercase();
            match tables.allergen_weights.get(&key) {
                Some(&w) => w,
                None if !key.is_empty() => tables.unknown_allergen_weight,
                None => 0,
            }
        })
        .fold(0u32, u32::saturating_add)
}

/// Sum of weights of the hazard phrases present in `ingredients`.
///
/// Each phrase counts at most once however often it occurs.
pub fn hazard_score(ingredients: &str, tables: &Tables) -> u32 {
    let text = ingredients.to_lowercase();
    tables
        .hazard_phrases
        .iter()
        .filter(|p| text.contains(p.pattern.as_str()))
        .map(|p| p.weight)
        .fold(0u32, u32::saturating_add)
}

pub fn compute_item_risk(item: &MenuItem, tables: &Tables) -> RiskAssessment {
    let allergen_score = allergen_score(&item.allergens, tables);
    let hazard_score = hazard_score(&item.ingredients, tables);
    let raw_score = allergen_score.saturating_add(hazard_score).min(MAX_SCORE);

    RiskAssessment {
        allergen_score,
        hazard_score,
        raw_score,
        category: RiskCategory::from_score(raw_score),
    }
}

// ---------------------------------------------------------------------------
// Hall aggregation
// ---------------------------------------------------------------------------

/// Per-hall aggregate of member item scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallSummary {
    pub hall_name: String,
    /// Mean member `raw_score`, rounded half away from zero.
    pub average_score: u32,
    pub category: RiskCategory,
    /// Indices of member items in the scored item list, in load order.
    pub items: Vec<usize>,
}

/// Hall label used for grouping and hall filtering.
pub fn hall_label(item: &MenuItem) -> &str {
    if item.hall_name.is_empty() {
        UNKNOWN_HALL
    } else {
        &item.hall_name
    }
}

/// Group scored items by hall, in first-seen order.
pub fn compute_hall_risk(items: &[ScoredItem]) -> Vec<HallSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, u64, Vec<usize>)> = Vec::new();

    for (i, scored) in items.iter().enumerate() {
        let hall = hall_label(&scored.item);
        let slot = *index.entry(hall).or_insert_with(|| {
            groups.push((hall, 0, Vec::new()));
            groups.len() - 1
        });
        let (_, total, members) = &mut groups[slot];
        *total += u64::from(scored.risk.raw_score);
        members.push(i);
    }

    groups
        .into_iter()
        .map(|(hall, total, members)| {
            let count = members.len().max(1) as f64;
            let average_score = (total as f64 / count).round() as u32;
            HallSummary {
                hall_name: hall.to_string(),
                average_score,
                category: RiskCategory::from_score(average_score),
                items: members,
            }
        })
        .collect()
}
