//! Configuration validation.
//!
//! These checks run once, before any file is parsed, so the pipeline
//! itself can assume a valid configuration.

use crate::bed::{BedError, Result};
use crate::commands::pad::PaddingPolicy;
use crate::commands::sort::SortType;
use std::path::Path;

/// Minimum 1-based column index for strand/feature columns; the first
/// three columns are chrom, start and stop.
const MIN_ANNOTATION_COL: usize = 3;

/// Validate the strand/feature column choice and convert both indices
/// from the 1-based CLI form to 0-based.
pub fn verify_columns(
    strand_col: Option<usize>,
    feat_col: Option<usize>,
) -> Result<(Option<usize>, Option<usize>)> {
    if let Some(col) = strand_col {
        if col < MIN_ANNOTATION_COL {
            return Err(BedError::Config(format!(
                "strand column must be at least {}, got {}",
                MIN_ANNOTATION_COL, col
            )));
        }
    }
    if let Some(col) = feat_col {
        if col < MIN_ANNOTATION_COL {
            return Err(BedError::Config(format!(
                "feature column must be at least {}, got {}",
                MIN_ANNOTATION_COL, col
            )));
        }
    }
    if let (Some(s), Some(f)) = (strand_col, feat_col) {
        if s == f {
            return Err(BedError::Config(format!(
                "strand and feature columns overlap (both are {})",
                s
            )));
        }
    }
    Ok((strand_col.map(|c| c - 1), feat_col.map(|c| c - 1)))
}

/// Padding clamps against chromosome lengths, so it needs a length
/// source unless the policy is Force. Fidx sorting needs one too.
pub fn verify_length_source(
    padding: i64,
    policy: PaddingPolicy,
    sort_type: SortType,
    fasta_idx: Option<&Path>,
) -> Result<()> {
    if padding != 0 && fasta_idx.is_none() && policy != PaddingPolicy::Force {
        return Err(BedError::Config(format!(
            "padding with policy '{}' requires a fasta index or genome file",
            policy
        )));
    }
    if sort_type == SortType::Fidx && fasta_idx.is_none() {
        return Err(BedError::Config(
            "sort type 'fidx' requires a fasta index or genome file".to_string(),
        ));
    }
    Ok(())
}

/// Fission needs a positive split size.
pub fn verify_fission(fission: bool, split_size: i64) -> Result<()> {
    if fission && split_size <= 0 {
        return Err(BedError::Config(format!(
            "split size must be positive, got {}",
            split_size
        )));
    }
    Ok(())
}

/// The coordinate origin is either 0 or 1.
pub fn verify_first_base(first_base: i64) -> Result<()> {
    if first_base != 0 && first_base != 1 {
        return Err(BedError::Config(format!(
            "first base must be 0 or 1, got {}",
            first_base
        )));
    }
    Ok(())
}
