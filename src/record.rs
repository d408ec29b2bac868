//! Core record type for BED lines.
//!
//! A `BedLine` keeps every original column verbatim in `fields` so that
//! untouched annotation columns survive a sort/merge/pad round trip.
//! The numeric `start`/`stop` are mirrored into `fields[START_COL]` and
//! `fields[STOP_COL]` whenever they change.

use std::fmt;

/// Index of the start coordinate within `fields`.
pub const START_COL: usize = 1;
/// Index of the stop coordinate within `fields`.
pub const STOP_COL: usize = 2;

/// A single BED line: chromosome, coordinates, optional strand/feature
/// annotation, and all original columns.
///
/// Coordinates are signed so that padding arithmetic can go below zero
/// before clamping. The coordinate convention (0- or 1-based) is the
/// caller's business; see `PadCommand::first_base`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BedLine {
    pub chrom: String,
    pub start: i64,
    pub stop: i64,
    /// Strand value, empty unless a strand column is configured.
    pub strand: String,
    /// Feature value, empty unless a feature column is configured.
    pub feat: String,
    /// All columns of the original line, verbatim.
    pub fields: Vec<String>,
}

impl BedLine {
    /// Create a minimal three-column line.
    pub fn new(chrom: impl Into<String>, start: i64, stop: i64) -> Self {
        let chrom = chrom.into();
        let fields = vec![chrom.clone(), start.to_string(), stop.to_string()];
        Self {
            chrom,
            start,
            stop,
            strand: String::new(),
            feat: String::new(),
            fields,
        }
    }

    /// Set the start coordinate, keeping `fields` in sync.
    #[inline]
    pub fn set_start(&mut self, start: i64) {
        self.start = start;
        self.fields[START_COL] = start.to_string();
    }

    /// Set the stop coordinate, keeping `fields` in sync.
    #[inline]
    pub fn set_stop(&mut self, stop: i64) {
        self.stop = stop;
        self.fields[STOP_COL] = stop.to_string();
    }

    /// Columns after the stop column.
    #[inline]
    pub fn optional_fields(&self) -> &[String] {
        &self.fields[STOP_COL + 1..]
    }
}

impl fmt::Display for BedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join("\t"))
    }
}
