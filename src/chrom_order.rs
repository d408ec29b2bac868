//! Chromosome ordering.
//!
//! Ranks are 1-based and assigned in first-appearance order of the
//! governing chromosome list, case-insensitively. Labels outside the
//! list are unranked: they sort after every ranked label, compared
//! against each other case-insensitively by name. That fallback is a
//! policy choice, kept deterministic so merge grouping stays stable.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// The human reference chromosome order: autosomes, then X, Y, MT.
pub const HUMAN_CHROM_ORDER: [&str; 25] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];

/// Build a 1-based rank map from a chromosome list.
///
/// Keys are lowercased; the first occurrence of a label wins. Building
/// the map is total over whatever labels are supplied and never fails.
pub fn chrom_order_to_map(order: &[String]) -> FxHashMap<String, u32> {
    let mut ranks = FxHashMap::default();
    for chrom in order {
        let key = chrom.to_lowercase();
        let next = ranks.len() as u32 + 1;
        ranks.entry(key).or_insert(next);
    }
    ranks
}

/// Case-insensitive comparison without allocating.
pub fn cmp_chrom_labels(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Total order over chromosome labels driven by a rank map.
#[derive(Debug, Clone, Default)]
pub struct ChromRanks {
    ranks: FxHashMap<String, u32>,
}

impl ChromRanks {
    /// Build ranks from a chromosome list.
    pub fn from_order(order: &[String]) -> Self {
        Self {
            ranks: chrom_order_to_map(order),
        }
    }

    /// Rank of a label, if it appears in the governing list.
    #[inline]
    pub fn rank(&self, chrom: &str) -> Option<u32> {
        self.ranks.get(&chrom.to_lowercase()).copied()
    }

    /// Compare two labels: ranked before unranked, unranked pairs fall
    /// back to case-insensitive name comparison.
    pub fn cmp(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => cmp_chrom_labels(a, b),
        }
    }
}
