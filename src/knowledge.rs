//! # Safety Knowledge Base Module
//!
//! A fixed, ordered mapping from canonical ingredient names to safety
//! records covering common safe/caution/avoid ingredients. The table is
//! built once at first access and never mutated afterwards, so it can be
//! shared unsynchronized across any number of concurrent scans.
//!
//! ## Lookup algorithm
//!
//! 1. Exact match on the canonical name — return its record.
//! 2. Fallback: iterate records in table insertion order and return the
//!    first whose key is a substring of the input name, or whose key
//!    contains the input name. Either direction matches; the first hit in
//!    iteration order wins, with no specificity ranking.
//! 3. No match: return the Caution default record.
//!
//! Unknown ingredients are therefore never marked Safe. The asymmetric
//! fallback keeps partial OCR reads ("odium benzoate") classifiable while
//! still surfacing a lower confidence for them (see `confidence`).

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Safety classification for a single ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyRating {
    /// Generally recognized as safe
    Safe,
    /// Acceptable in moderation or insufficiently studied
    Caution,
    /// Linked to documented health concerns
    Avoid,
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyRating::Safe => write!(f, "safe"),
            SafetyRating::Caution => write!(f, "caution"),
            SafetyRating::Avoid => write!(f, "avoid"),
        }
    }
}

/// Immutable safety record stored in the knowledge base
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyRecord {
    /// The safety classification
    pub rating: SafetyRating,
    /// Human-readable explanation shown to the user
    pub explanation: &'static str,
    /// Citation tags for the bodies the record is sourced from
    pub sources: &'static [&'static str],
}

/// How a lookup resolved against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The canonical name matched a table key exactly
    Exact,
    /// Resolved through the either-direction substring fallback
    Partial,
    /// Nothing matched; the Caution default record was returned
    Default,
}

/// Result of a knowledge-base lookup
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyLookup {
    /// The resolved record
    pub record: &'static SafetyRecord,
    /// How the record was found
    pub match_kind: MatchKind,
}

struct KnowledgeEntry {
    key: &'static str,
    record: SafetyRecord,
}

/// Fallback record for ingredients absent from the table. Defaulting to
/// Caution rather than Safe is deliberate: the absence of evidence is not
/// evidence of safety.
static DEFAULT_RECORD: SafetyRecord = SafetyRecord {
    rating: SafetyRating::Caution,
    explanation: "not in database, prefer simpler ingredient lists",
    sources: &[],
};

macro_rules! entry {
    ($key:expr, $rating:ident, $explanation:expr, [$($source:expr),*]) => {
        KnowledgeEntry {
            key: $key,
            record: SafetyRecord {
                rating: SafetyRating::$rating,
                explanation: $explanation,
                sources: &[$($source),*],
            },
        }
    };
}

// Insertion order is load-bearing: the substring fallback returns the first
// hit in this order, so multi-word keys sit above the shorter keys they
// embed (e.g. "high fructose corn syrup" above "corn syrup").
static ENTRIES: &[KnowledgeEntry] = &[
    entry!("water", Safe, "essential, no safety concerns", ["FDA"]),
    entry!("salt", Safe, "safe, watch total sodium intake", ["FDA"]),
    entry!("olive oil", Safe, "heart-healthy fat, generally recognized as safe", ["FDA"]),
    entry!("ascorbic acid", Safe, "vitamin C, commonly added as antioxidant", ["FDA", "EFSA"]),
    entry!("citric acid", Safe, "common acidity regulator, generally recognized as safe", ["FDA"]),
    entry!("baking soda", Safe, "sodium bicarbonate, standard leavening agent", ["FDA"]),
    entry!("honey", Safe, "natural sweetener, not suitable for infants under one", ["FDA"]),
    entry!("oats", Safe, "whole grain, widely tolerated", ["FDA"]),
    entry!("wheat flour", Safe, "staple grain, contains gluten", ["FDA"]),
    entry!("rice flour", Safe, "gluten-free staple grain", ["FDA"]),
    entry!("yeast", Safe, "standard fermentation organism", ["FDA"]),
    entry!("cocoa butter", Safe, "natural fat pressed from cocoa beans", ["FDA"]),
    entry!("vanilla extract", Safe, "natural flavoring, long history of safe use", ["FDA"]),
    entry!("pectin", Safe, "fruit-derived gelling agent", ["EFSA"]),
    entry!("milk", Safe, "common dairy base, a major allergen", ["FDA"]),
    entry!("eggs", Safe, "whole food, a major allergen", ["FDA"]),
    entry!("sugar", Caution, "added sugar, consume in moderation", ["WHO", "FDA"]),
    entry!("high fructose corn syrup", Avoid, "heavily processed sweetener linked to metabolic harm", ["CSPI", "EWG"]),
    entry!("corn syrup", Caution, "refined sweetener, adds empty calories", ["WHO"]),
    entry!("natural flavors", Caution, "umbrella term, composition undisclosed", ["EWG"]),
    entry!("soy lecithin", Caution, "common emulsifier, a soy-derived allergen source", ["FDA"]),
    entry!("caramel color", Caution, "some manufacturing classes contain 4-MEI", ["CSPI", "IARC"]),
    entry!("maltodextrin", Caution, "highly processed starch with high glycemic index", ["EWG"]),
    entry!("palm oil", Caution, "high in saturated fat, refining can form contaminants", ["EFSA"]),
    entry!("carrageenan", Caution, "seaweed-derived thickener, digestive concerns debated", ["CSPI"]),
    entry!("dextrose", Caution, "refined sugar under another name", ["WHO"]),
    entry!("modified corn starch", Caution, "processed thickener, nutritionally empty", ["EWG"]),
    entry!("sodium benzoate", Avoid, "preservative that can form benzene with vitamin C", ["CSPI", "FDA"]),
    entry!("red dye 40", Avoid, "synthetic dye linked to hyperactivity in children", ["CSPI", "EFSA"]),
    entry!("yellow 5", Avoid, "synthetic dye, hyperactivity and sensitivity concerns", ["CSPI", "EFSA"]),
    entry!("blue 1", Avoid, "synthetic dye with limited long-term safety data", ["CSPI"]),
    entry!("aspartame", Avoid, "artificial sweetener classified possibly carcinogenic", ["IARC", "WHO"]),
    entry!("monosodium glutamate", Avoid, "flavor enhancer, sensitivity reactions reported", ["FDA", "CSPI"]),
    entry!("sodium nitrite", Avoid, "curing agent that can form nitrosamines", ["IARC", "WHO"]),
    entry!("potassium bromate", Avoid, "dough conditioner, banned in many jurisdictions", ["IARC", "EWG"]),
    entry!("partially hydrogenated oil", Avoid, "primary source of artificial trans fat", ["FDA", "WHO"]),
    entry!("bha", Avoid, "synthetic antioxidant, reasonably anticipated carcinogen", ["IARC", "CSPI"]),
    entry!("bht", Avoid, "synthetic antioxidant with disputed safety profile", ["EWG", "CSPI"]),
    entry!("titanium dioxide", Avoid, "whitening agent no longer considered safe in the EU", ["EFSA"]),
];

/// Static, read-only table mapping canonical names to safety records
pub struct SafetyKnowledgeBase {
    entries: &'static [KnowledgeEntry],
    exact_index: HashMap<&'static str, usize>,
}

lazy_static! {
    static ref KNOWLEDGE_BASE: SafetyKnowledgeBase = SafetyKnowledgeBase::build();
}

impl SafetyKnowledgeBase {
    fn build() -> Self {
        let exact_index = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key, i))
            .collect::<HashMap<_, _>>();

        debug!("Safety knowledge base built with {} entries", ENTRIES.len());
        Self {
            entries: ENTRIES,
            exact_index,
        }
    }

    /// Get the shared knowledge base, built once at first access
    pub fn global() -> &'static SafetyKnowledgeBase {
        &KNOWLEDGE_BASE
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the canonical name has an exact key in the table
    pub fn has_exact_match(&self, canonical_name: &str) -> bool {
        self.exact_index.contains_key(canonical_name)
    }

    /// Resolve a canonical ingredient name to a safety record
    ///
    /// Exact match first, then the either-direction substring fallback in
    /// insertion order, then the Caution default. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use label_lens::knowledge::{MatchKind, SafetyKnowledgeBase, SafetyRating};
    ///
    /// let kb = SafetyKnowledgeBase::global();
    ///
    /// let exact = kb.lookup("water");
    /// assert_eq!(exact.record.rating, SafetyRating::Safe);
    /// assert_eq!(exact.match_kind, MatchKind::Exact);
    ///
    /// let unknown = kb.lookup("xanthan gum");
    /// assert_eq!(unknown.record.rating, SafetyRating::Caution);
    /// assert_eq!(unknown.match_kind, MatchKind::Default);
    /// ```
    pub fn lookup(&self, canonical_name: &str) -> SafetyLookup {
        if let Some(&index) = self.exact_index.get(canonical_name) {
            trace!("Exact knowledge-base match for '{}'", canonical_name);
            return SafetyLookup {
                record: &self.entries[index].record,
                match_kind: MatchKind::Exact,
            };
        }

        for entry in self.entries {
            if canonical_name.contains(entry.key) || entry.key.contains(canonical_name) {
                trace!(
                    "Partial knowledge-base match for '{}' via key '{}'",
                    canonical_name,
                    entry.key
                );
                return SafetyLookup {
                    record: &entry.record,
                    match_kind: MatchKind::Partial,
                };
            }
        }

        trace!("No knowledge-base match for '{}', using default", canonical_name);
        SafetyLookup {
            record: &DEFAULT_RECORD,
            match_kind: MatchKind::Default,
        }
    }
}
