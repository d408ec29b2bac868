//! Chromosome length source.
//!
//! Parses tab-delimited chromosome-length files: two-column .genome
//! files (chrom\tlength) and fasta indexes (.fai, five columns of which
//! only the first two are used).

use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::bed::BedError;

/// Chromosome lengths plus the order chromosomes appear in the file.
///
/// Length lookups are case-insensitive (keys are lowercased); the order
/// keeps the labels verbatim so it can drive fidx sorting.
#[derive(Debug, Clone, Default)]
pub struct Genome {
    lengths: FxHashMap<String, i64>,
    order: Vec<String>,
}

impl Genome {
    /// Create an empty genome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load chromosome lengths from a .genome or .fai file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BedError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut genome = Self::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                return Err(BedError::Parse {
                    line: line_num + 1,
                    message: "Chromosome length file requires at least two columns: chrom and length"
                        .to_string(),
                });
            }

            let length: i64 = fields[1].parse().map_err(|_| BedError::Parse {
                line: line_num + 1,
                message: format!("Invalid chromosome length: {}", fields[1]),
            })?;

            genome.insert(fields[0].to_string(), length);
        }

        Ok(genome)
    }

    /// Get the length of a chromosome, case-insensitively.
    #[inline]
    pub fn chrom_length(&self, chrom: &str) -> Option<i64> {
        self.lengths.get(&chrom.to_lowercase()).copied()
    }

    /// Check if a chromosome is present.
    #[inline]
    pub fn has_chrom(&self, chrom: &str) -> bool {
        self.lengths.contains_key(&chrom.to_lowercase())
    }

    /// Chromosome labels in file order, verbatim.
    pub fn chromosomes(&self) -> &[String] {
        &self.order
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Insert a chromosome length (appends to order if new).
    pub fn insert(&mut self, chrom: String, length: i64) {
        let key = chrom.to_lowercase();
        if !self.lengths.contains_key(&key) {
            self.order.push(chrom);
        }
        self.lengths.insert(key, length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_genome_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chr1\t1000000").unwrap();
        writeln!(file, "chr2\t500000").unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file, "chr3\t250000").unwrap();

        let genome = Genome::from_file(file.path()).unwrap();

        assert_eq!(genome.chrom_length("chr1"), Some(1000000));
        assert_eq!(genome.chrom_length("chr2"), Some(500000));
        assert_eq!(genome.chrom_length("chr3"), Some(250000));
        assert_eq!(genome.chrom_length("chr4"), None);
        assert_eq!(genome.len(), 3);
        assert_eq!(genome.chromosomes(), &["chr1", "chr2", "chr3"]);
    }

    #[test]
    fn test_fasta_index_extra_columns_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chr1\t248956422\t112\t70\t71").unwrap();
        writeln!(file, "chrX\t156040895\t253105810\t70\t71").unwrap();

        let genome = Genome::from_file(file.path()).unwrap();

        assert_eq!(genome.chrom_length("chr1"), Some(248956422));
        assert_eq!(genome.chrom_length("chrx"), Some(156040895));
        assert_eq!(genome.chromosomes(), &["chr1", "chrX"]);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let mut genome = Genome::new();
        genome.insert("chrMT".to_string(), 16569);

        assert!(genome.has_chrom("CHRMT"));
        assert_eq!(genome.chrom_length("chrmt"), Some(16569));
        // Order keeps the verbatim label
        assert_eq!(genome.chromosomes(), &["chrMT"]);
    }

    #[test]
    fn test_single_column_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chr1").unwrap();
        assert!(Genome::from_file(file.path()).is_err());
    }
}
