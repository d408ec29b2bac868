//! Pad command implementation.
//!
//! Extends (or, with negative padding, shrinks) interval boundaries by a
//! fixed margin. The lower bound is always clamped to the coordinate
//! origin; the upper bound is clamped to the chromosome length when the
//! chromosome is known. What happens for unknown chromosomes is decided
//! by the padding policy.

use crate::bed::{BedError, Result};
use crate::genome::Genome;
use crate::record::BedLine;
use std::fmt;
use std::str::FromStr;

/// Behavior when a chromosome's length is unknown during padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Fail on the first unknown chromosome.
    #[default]
    Safe,
    /// Leave lines on unknown chromosomes unpadded.
    Lax,
    /// Pad without an upper clamp.
    Force,
}

impl FromStr for PaddingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // "err" and "warn" are the legacy names for safe and lax
        match s.to_lowercase().as_str() {
            "safe" | "err" => Ok(PaddingPolicy::Safe),
            "lax" | "warn" => Ok(PaddingPolicy::Lax),
            "force" => Ok(PaddingPolicy::Force),
            _ => Err(format!(
                "unknown padding policy '{}' (expected safe, lax or force)",
                s
            )),
        }
    }
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingPolicy::Safe => write!(f, "safe"),
            PaddingPolicy::Lax => write!(f, "lax"),
            PaddingPolicy::Force => write!(f, "force"),
        }
    }
}

/// Pad command configuration.
#[derive(Debug, Clone, Default)]
pub struct PadCommand {
    /// Margin added to both sides; negative values shrink.
    pub padding: i64,
    /// Coordinate origin (0 or 1), the lower clamp for start positions.
    pub first_base: i64,
    /// Policy for chromosomes missing from the length source.
    pub policy: PaddingPolicy,
    /// Chromosome lengths for boundary clamping.
    pub genome: Genome,
}

impl PadCommand {
    pub fn new(padding: i64, first_base: i64, policy: PaddingPolicy) -> Self {
        Self {
            padding,
            first_base,
            policy,
            genome: Genome::new(),
        }
    }

    /// Use the given chromosome lengths for clamping.
    pub fn with_genome(mut self, genome: Genome) -> Self {
        self.genome = genome;
        self
    }

    /// Pad a single line, clamping against the chromosome length.
    ///
    /// Returns the padded line and whether the chromosome was found in
    /// the length map. The lower clamp to `first_base` applies either
    /// way; the upper clamp needs the length. An inverted result
    /// (start > stop) is an error no matter what.
    pub fn pad_line(&self, line: &BedLine) -> Result<(BedLine, bool)> {
        let mut new_start = line.start - self.padding;
        let mut new_stop = line.stop + self.padding;

        if new_start < self.first_base {
            new_start = self.first_base;
        }
        let chrom_in_map = match self.genome.chrom_length(&line.chrom) {
            Some(length) => {
                if new_stop > length {
                    new_stop = length;
                }
                true
            }
            None => false,
        };

        if new_start > new_stop {
            return Err(BedError::InvertedInterval {
                chrom: line.chrom.clone(),
                start: new_start,
                stop: new_stop,
            });
        }

        let mut padded = line.clone();
        padded.set_start(new_start);
        padded.set_stop(new_stop);
        Ok((padded, chrom_in_map))
    }

    /// Pad a line under the configured policy, recording chromosomes
    /// missing from the length map in `missing` (append-if-absent,
    /// verbatim labels).
    pub fn pad_line_with_policy(
        &self,
        line: &BedLine,
        missing: &mut Vec<String>,
    ) -> Result<BedLine> {
        let (padded, chrom_in_map) = self.pad_line(line)?;
        if chrom_in_map {
            return Ok(padded);
        }
        match self.policy {
            PaddingPolicy::Safe => Err(BedError::UnknownChromLength {
                chrom: line.chrom.clone(),
            }),
            PaddingPolicy::Lax => {
                record_missing(missing, &line.chrom);
                Ok(line.clone())
            }
            PaddingPolicy::Force => {
                record_missing(missing, &line.chrom);
                Ok(padded)
            }
        }
    }

    /// Pad a whole collection.
    ///
    /// All-or-nothing: any error (unknown chromosome under Safe, or an
    /// inverted interval under any policy) aborts without producing a
    /// half-padded collection. On success returns the padded lines plus
    /// the deduplicated list of chromosomes absent from the length map.
    pub fn pad(&self, lines: Vec<BedLine>) -> Result<(Vec<BedLine>, Vec<String>)> {
        let mut padded_lines = Vec::with_capacity(lines.len());
        let mut missing = Vec::new();
        for line in &lines {
            padded_lines.push(self.pad_line_with_policy(line, &mut missing)?);
        }
        Ok((padded_lines, missing))
    }
}

fn record_missing(missing: &mut Vec<String>, chrom: &str) {
    if !missing.iter().any(|c| c == chrom) {
        missing.push(chrom.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_genome() -> Genome {
        let mut genome = Genome::new();
        genome.insert("1".to_string(), 100);
        genome.insert("2".to_string(), 200);
        genome.insert("3".to_string(), 300);
        genome.insert("4".to_string(), 400);
        genome
    }

    fn lines_to_pad() -> Vec<BedLine> {
        vec![
            BedLine::new("1", 50, 51),
            BedLine::new("2", 150, 151),
            BedLine::new("3", 250, 251),
            BedLine::new("4", 350, 351),
        ]
    }

    fn starts_stops(lines: &[BedLine]) -> Vec<(i64, i64)> {
        lines.iter().map(|l| (l.start, l.stop)).collect()
    }

    #[test]
    fn test_padding_policy_parsing() {
        assert_eq!("safe".parse::<PaddingPolicy>().unwrap(), PaddingPolicy::Safe);
        assert_eq!("err".parse::<PaddingPolicy>().unwrap(), PaddingPolicy::Safe);
        assert_eq!("lax".parse::<PaddingPolicy>().unwrap(), PaddingPolicy::Lax);
        assert_eq!("warn".parse::<PaddingPolicy>().unwrap(), PaddingPolicy::Lax);
        assert_eq!(
            "FORCE".parse::<PaddingPolicy>().unwrap(),
            PaddingPolicy::Force
        );
        assert!("test".parse::<PaddingPolicy>().is_err());
    }

    #[test]
    fn test_pad_within_chromosome_same_for_all_policies() {
        for policy in [PaddingPolicy::Safe, PaddingPolicy::Lax, PaddingPolicy::Force] {
            let cmd = PadCommand::new(10, 1, policy).with_genome(test_genome());
            let (padded, missing) = cmd.pad(lines_to_pad()).unwrap();

            assert_eq!(
                starts_stops(&padded),
                vec![(40, 61), (140, 161), (240, 261), (340, 361)]
            );
            assert!(missing.is_empty());
            // fields stay in sync
            assert_eq!(padded[0].fields, vec!["1", "40", "61"]);
        }
    }

    #[test]
    fn test_pad_beyond_chromosome_clamps_for_all_policies() {
        for policy in [PaddingPolicy::Safe, PaddingPolicy::Lax, PaddingPolicy::Force] {
            let cmd = PadCommand::new(1000, 1, policy).with_genome(test_genome());
            let (padded, missing) = cmd.pad(lines_to_pad()).unwrap();

            assert_eq!(
                starts_stops(&padded),
                vec![(1, 100), (1, 200), (1, 300), (1, 400)]
            );
            assert!(missing.is_empty());
        }
    }

    #[test]
    fn test_pad_missing_chromosome_safe_fails() {
        let cmd = PadCommand::new(1000, 1, PaddingPolicy::Safe);
        let err = cmd.pad(lines_to_pad()).unwrap_err();
        assert!(matches!(err, BedError::UnknownChromLength { .. }));
    }

    #[test]
    fn test_pad_missing_chromosome_lax_leaves_lines_unchanged() {
        let cmd = PadCommand::new(1000, 1, PaddingPolicy::Lax);
        let (padded, missing) = cmd.pad(lines_to_pad()).unwrap();

        assert_eq!(
            starts_stops(&padded),
            vec![(50, 51), (150, 151), (250, 251), (350, 351)]
        );
        assert_eq!(missing, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pad_missing_chromosome_force_pads_unclamped() {
        let cmd = PadCommand::new(1000, 1, PaddingPolicy::Force);
        let (padded, missing) = cmd.pad(lines_to_pad()).unwrap();

        assert_eq!(
            starts_stops(&padded),
            vec![(1, 1051), (1, 1151), (1, 1251), (1, 1351)]
        );
        assert_eq!(missing, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_missing_registry_deduplicates() {
        let cmd = PadCommand::new(10, 1, PaddingPolicy::Lax);
        let lines = vec![
            BedLine::new("5", 50, 51),
            BedLine::new("5", 70, 71),
            BedLine::new("6", 50, 51),
        ];
        let (_, missing) = cmd.pad(lines).unwrap();
        assert_eq!(missing, vec!["5", "6"]);
    }

    #[test]
    fn test_pad_line_first_base_zero() {
        let cmd = PadCommand::new(1000, 0, PaddingPolicy::Safe).with_genome(test_genome());
        let (padded, in_map) = cmd.pad_line(&BedLine::new("1", 50, 51)).unwrap();
        assert_eq!((padded.start, padded.stop), (0, 100));
        assert!(in_map);
    }

    #[test]
    fn test_pad_line_first_base_one() {
        let cmd = PadCommand::new(1000, 1, PaddingPolicy::Safe).with_genome(test_genome());
        let (padded, in_map) = cmd.pad_line(&BedLine::new("1", 50, 51)).unwrap();
        assert_eq!((padded.start, padded.stop), (1, 100));
        assert!(in_map);
    }

    #[test]
    fn test_pad_line_unknown_chromosome_reports_not_in_map() {
        let cmd = PadCommand::new(10, 0, PaddingPolicy::Safe).with_genome(test_genome());
        let (padded, in_map) = cmd.pad_line(&BedLine::new("unplaced", 50, 51)).unwrap();
        assert_eq!((padded.start, padded.stop), (40, 61));
        assert!(!in_map);
    }

    #[test]
    fn test_pad_line_does_not_mutate_input() {
        let cmd = PadCommand::new(10, 1, PaddingPolicy::Safe).with_genome(test_genome());
        let line = BedLine::new("1", 50, 51);
        let _ = cmd.pad_line(&line).unwrap();
        assert_eq!((line.start, line.stop), (50, 51));
        assert_eq!(line.fields, vec!["1", "50", "51"]);
    }

    #[test]
    fn test_negative_padding_shrinks() {
        let cmd = PadCommand::new(-10, 1, PaddingPolicy::Safe).with_genome(test_genome());
        let (padded, _) = cmd.pad_line(&BedLine::new("1", 40, 70)).unwrap();
        assert_eq!((padded.start, padded.stop), (50, 60));
    }

    #[test]
    fn test_negative_padding_inversion_fails() {
        let cmd = PadCommand::new(-100, 0, PaddingPolicy::Safe).with_genome(test_genome());
        let err = cmd.pad_line(&BedLine::new("1", 40, 70)).unwrap_err();
        assert!(matches!(err, BedError::InvertedInterval { .. }));
    }

    #[test]
    fn test_inversion_fails_under_every_policy() {
        for policy in [PaddingPolicy::Safe, PaddingPolicy::Lax, PaddingPolicy::Force] {
            let cmd = PadCommand::new(-100, 0, policy).with_genome(test_genome());
            assert!(cmd.pad(vec![BedLine::new("1", 40, 70)]).is_err());
        }
    }

    #[test]
    fn test_pad_then_unpad_restores_when_unclamped() {
        let mut genome = Genome::new();
        genome.insert("1".to_string(), 10_000);
        let original = BedLine::new("1", 400, 700);

        let pad = PadCommand::new(50, 1, PaddingPolicy::Safe).with_genome(genome.clone());
        let unpad = PadCommand::new(-50, 1, PaddingPolicy::Safe).with_genome(genome);

        let (padded, _) = pad.pad(vec![original.clone()]).unwrap();
        let (restored, _) = unpad.pad(padded).unwrap();
        assert_eq!(restored, vec![original]);
    }
}
