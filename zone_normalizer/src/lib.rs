mod catalog;
mod corrections;

use log::debug;

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

pub use crate::catalog::{barrio_name, barrios};

/// Normalizes a free-text zone label for comparison purposes.
///
/// The label is compatibility-decomposed, stripped of everything outside the
/// 7-bit ASCII range (which drops the combining diacritics), trimmed,
/// upper-cased, and internal whitespace runs are collapsed to single spaces.
///
/// The function is total and idempotent. Note that the decomposition step
/// transliterates tilded letters: "Peñarol" becomes "PENAROL".
pub fn normalize(input: &str) -> String {
    let ascii: String = input.nfkd().filter(|c| c.is_ascii()).collect();
    ascii
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_uppercase()
}

/// The table of manual corrections from zone labels to canonical barrio names.
///
/// Keys are stored in normalized form, so lookups are insensitive to case,
/// accents and spacing. The table is built once at startup and passed
/// explicitly to the call sites that need it; it is never mutated afterwards.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    /// The curated table for the Montevideo electoral series exports.
    pub fn montevideo() -> CorrectionTable {
        CorrectionTable::from_pairs(
            corrections::MANUAL_CORRECTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Builds a table from (label, canonical name) pairs. The labels are
    /// normalized on insertion; a later pair with the same normalized label
    /// replaces the earlier one.
    pub fn from_pairs<I>(pairs: I) -> CorrectionTable
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries: HashMap<String, String> = pairs
            .into_iter()
            .map(|(label, canonical)| (normalize(&label), canonical))
            .collect();
        CorrectionTable { entries }
    }

    /// Looks up an already-normalized key.
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(|s| s.as_str())
    }

    /// Resolves a raw zone label to its canonical barrio name.
    ///
    /// On a miss the raw label is returned unchanged (original casing and
    /// accents), not its normalized form. Downstream consumers prefer an
    /// untouched label over a half-normalized one.
    pub fn resolve(&self, raw: &str) -> String {
        let key = normalize(raw);
        match self.entries.get(&key) {
            Some(canonical) => canonical.clone(),
            None => {
                debug!("resolve: no correction entry for {:?} (from {:?})", key, raw);
                raw.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
