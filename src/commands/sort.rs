//! Sort command implementation.
//!
//! Sort order:
//! 1. Primary: chromosome (case-insensitive lexicographic, or rank order
//!    for ccs/fidx sorting; unranked chromosomes go last, compared by name)
//! 2. Secondary: start coordinate (ascending, numeric)
//! 3. Ties: input order preserved (stable sort)
//!
//! Stability matters: the merger relies on equal-key lines staying in
//! their input order so grouping runs are reproducible.

use crate::chrom_order::{cmp_chrom_labels, ChromRanks};
use crate::record::BedLine;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How chromosomes are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    /// Case-insensitive lexicographic chromosome order (default).
    #[default]
    Lex,
    /// Custom chromosome sorting: a user-supplied list, or the built-in
    /// human reference order when none is given.
    Ccs,
    /// Chromosome order taken from the fasta index / genome file.
    Fidx,
}

impl FromStr for SortType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lex" => Ok(SortType::Lex),
            "ccs" => Ok(SortType::Ccs),
            "fidx" => Ok(SortType::Fidx),
            _ => Err(format!("unknown sort type '{}' (expected lex, ccs or fidx)", s)),
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortType::Lex => write!(f, "lex"),
            SortType::Ccs => write!(f, "ccs"),
            SortType::Fidx => write!(f, "fidx"),
        }
    }
}

/// Sort command configuration.
#[derive(Debug, Clone, Default)]
pub struct SortCommand {
    /// Chromosome rank order; `None` means plain lexicographic sorting.
    ranks: Option<ChromRanks>,
}

impl SortCommand {
    /// Case-insensitive lexicographic chromosome order.
    pub fn lexicographic() -> Self {
        Self { ranks: None }
    }

    /// Rank-driven chromosome order (ccs or fidx).
    pub fn with_chrom_order(order: &[String]) -> Self {
        Self {
            ranks: Some(ChromRanks::from_order(order)),
        }
    }

    /// Compare two chromosome labels under this ordering.
    #[inline]
    pub fn cmp_chroms(&self, a: &str, b: &str) -> Ordering {
        match &self.ranks {
            Some(ranks) => ranks.cmp(a, b),
            None => cmp_chrom_labels(a, b),
        }
    }

    /// Compare two lines by (chromosome, start).
    #[inline]
    pub fn cmp_lines(&self, a: &BedLine, b: &BedLine) -> Ordering {
        self.cmp_chroms(&a.chrom, &b.chrom)
            .then_with(|| a.start.cmp(&b.start))
    }

    /// Stably sort lines by (chromosome, start).
    pub fn sort(&self, mut lines: Vec<BedLine>) -> Vec<BedLine> {
        lines.sort_by(|a, b| self.cmp_lines(a, b));
        lines
    }
}

/// Drop consecutive lines whose columns are identical.
///
/// Run after sorting on the no-merge path, where exact duplicates would
/// otherwise survive to the output.
pub fn dedup_sorted(mut lines: Vec<BedLine>) -> Vec<BedLine> {
    lines.dedup_by(|a, b| a.fields == b.fields);
    lines
}
