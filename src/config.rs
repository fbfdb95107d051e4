use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

// ---------------------------------------------------------------------------
// Keyword and weight tables
// ---------------------------------------------------------------------------

/// A phrase searched for in lowercased ingredient text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardPhrase {
    pub pattern: String,
    pub weight: u32,
}

/// Every static table the pipeline consults.
///
/// Built once at startup (defaults, optionally overridden from a JSON file)
/// and passed by reference to scoring, exclusion and highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    /// Allergen name (lowercase, trimmed) → severity weight.
    pub allergen_weights: BTreeMap<String, u32>,
    /// Weight for a non-empty allergen missing from `allergen_weights`.
    pub unknown_allergen_weight: u32,
    pub hazard_phrases: Vec<HazardPhrase>,
    pub exclusion_terms: Vec<String>,
    pub highlight_terms: Vec<String>,
}

const ALLERGEN_WEIGHTS: &[(&str, u32)] = &[
    ("peanuts", 10),
    ("peanut", 10),
    ("tree nuts", 8),
    ("tree nut", 8),
    ("treenuts", 8),
    ("shellfish", 8),
    ("shell fish", 8),
    ("fish", 6),
    ("eggs", 5),
    ("egg", 5),
    ("milk", 5),
    ("dairy", 5),
    ("soy", 4),
    ("soybeans", 4),
    ("wheat", 4),
    ("gluten", 4),
    ("sesame", 5),
];

const HAZARD_PHRASES: &[(&str, u32)] = &[
    ("may contain", 10),
    ("made in a facility that also processes", 8),
    ("processed in a facility that also handles", 8),
    ("shared fryer", 12),
    ("same fryer", 12),
    ("same equipment", 12),
    ("cross contamination", 12),
    ("cross-contamination", 12),
    ("cannot guarantee", 8),
];

const EXCLUSION_TERMS: &[&str] = &[
    "cereal", "cereals", "granola", "oatmeal", "muesli", "granola bar", "cereal bar",
    "sauce", "sauces", "gravy", "marinade", "marinades", "dressing", "dressings",
    "condiment", "condiments", "ketchup", "mustard", "relish", "jam", "jelly", "syrup",
    "topping", "toppings", "pickle", "pickles",
];

const HIGHLIGHT_TERMS: &[&str] = &[
    "peanut", "tree nut", "nut", "gluten", "wheat", "milk", "egg", "soy", "shellfish", "fish",
    "sesame", "dairy",
];

impl Default for Tables {
    fn default() -> Self {
        Self {
            allergen_weights: ALLERGEN_WEIGHTS
                .iter()
                .map(|&(name, w)| (name.to_string(), w))
                .collect(),
            unknown_allergen_weight: 3,
            hazard_phrases: HAZARD_PHRASES
                .iter()
                .map(|&(pattern, weight)| HazardPhrase {
                    pattern: pattern.to_string(),
                    weight,
                })
                .collect(),
            exclusion_terms: EXCLUSION_TERMS.iter().map(|s| s.to_string()).collect(),
            highlight_terms: HIGHLIGHT_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Tables {
    /// Load tables from `path` if given, otherwise use the built-in ones.
    ///
    /// Tables missing from the file keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| MenuError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let tables: Tables =
            serde_json::from_str(&text).map_err(|e| MenuError::malformed(path, e))?;
        log::info!("Loaded lookup tables from {}", path.display());
        Ok(tables.normalized())
    }

    /// Lowercase every matching key so lookups can stay case-insensitive.
    pub fn normalized(mut self) -> Self {
        self.allergen_weights = self
            .allergen_weights
            .into_iter()
            .map(|(k, w)| (k.trim().to_lowercase(), w))
            .collect();
        for phrase in &mut self.hazard_phrases {
            phrase.pattern = phrase.pattern.to_lowercase();
        }
        for term in self
            .exclusion_terms
            .iter_mut()
            .chain(self.highlight_terms.iter_mut())
        {
            *term = term.to_lowercase();
        }
        self
    }
}
