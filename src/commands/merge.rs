//! Merge command implementation.
//!
//! O(n log n) sort + O(n) single-pass sweep-line merge. Lines are first
//! sorted with the grouping key (strand, feature) ahead of chromosome
//! and start, so every mergeable run is contiguous; the sweep then
//! coalesces a run into one line, unioning its optional columns.

use crate::commands::sort::SortCommand;
use crate::record::{BedLine, STOP_COL};
use std::cmp::Ordering;

/// Merge command configuration.
#[derive(Debug, Clone, Default)]
pub struct MergeCommand {
    /// Signed gap tolerance: 0 merges touching intervals, positive
    /// merges across a gap, negative requires that much overlap.
    pub overlap: i64,
    /// Chromosome ordering used to arrange runs.
    pub sorter: SortCommand,
}

impl MergeCommand {
    pub fn new(overlap: i64, sorter: SortCommand) -> Self {
        Self { overlap, sorter }
    }

    /// Sort order for merging: grouping key first, then position.
    fn cmp_for_merge(&self, a: &BedLine, b: &BedLine) -> Ordering {
        a.strand
            .cmp(&b.strand)
            .then_with(|| a.feat.cmp(&b.feat))
            .then_with(|| self.sorter.cmp_chroms(&a.chrom, &b.chrom))
            .then_with(|| a.start.cmp(&b.start))
    }

    /// Whether `line` joins the run accumulated in `merged`.
    #[inline]
    fn should_merge(&self, merged: &BedLine, line: &BedLine) -> bool {
        merged.chrom == line.chrom
            && merged.strand == line.strand
            && merged.feat == line.feat
            && merged.stop + self.overlap >= line.start - 1
    }

    /// Sort and coalesce a collection of lines.
    ///
    /// The merged stop is the run's maximum stop; the start stays at the
    /// run's first line (input is sorted ascending by start, so later
    /// lines cannot start earlier). Optional columns are unioned.
    pub fn merge(&self, mut lines: Vec<BedLine>) -> Vec<BedLine> {
        lines.sort_by(|a, b| self.cmp_for_merge(a, b));

        let mut merged_lines = Vec::new();
        let mut merged: Option<BedLine> = None;
        for line in lines {
            match merged {
                Some(ref mut m) if self.should_merge(m, &line) => {
                    if line.stop > m.stop {
                        m.set_stop(line.stop);
                    }
                    union_optional_columns(m, &line);
                }
                _ => {
                    if let Some(m) = merged.take() {
                        merged_lines.push(m);
                    }
                    merged = Some(line);
                }
            }
        }
        if let Some(m) = merged {
            merged_lines.push(m);
        }
        merged_lines
    }
}

/// Union `line`'s optional columns into `merged`, comma-separated.
///
/// A value is appended only if it is not already among the accumulated
/// comma-split values of that column (exact string match, first-seen
/// order).
fn union_optional_columns(merged: &mut BedLine, line: &BedLine) {
    for (offset, col) in line.fields[STOP_COL + 1..].iter().enumerate() {
        let idx = offset + STOP_COL + 1;
        match merged.fields.get_mut(idx) {
            Some(existing) => {
                if !existing.split(',').any(|v| v == col) {
                    existing.push(',');
                    existing.push_str(col);
                }
            }
            None => merged.fields.push(col.clone()),
        }
    }
}
