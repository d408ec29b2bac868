//! Fission: split output into fixed-size chunk files.
//!
//! Chunk files are written next to the requested output path as
//! `<stem>_<n>.<ext>`, numbered from 1. Chunk writes are independent,
//! so they run in parallel.

use crate::bed::{write_lines, BedError, Result};
use crate::record::BedLine;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Split command configuration.
#[derive(Debug, Clone)]
pub struct SplitCommand {
    /// Maximum number of lines per chunk file.
    pub split_size: usize,
}

impl SplitCommand {
    pub fn new(split_size: usize) -> Self {
        Self { split_size }
    }

    /// Path of the n-th chunk file (1-based) for a given output path.
    pub fn chunk_path(&self, output: &Path, n: usize) -> PathBuf {
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match output.extension() {
            Some(ext) => format!("{}_{}.{}", stem, n, ext.to_string_lossy()),
            None => format!("{}_{}", stem, n),
        };
        output.with_file_name(name)
    }

    /// Write lines as numbered chunk files, returning the paths written.
    pub fn write_files(&self, lines: &[BedLine], output: &Path) -> Result<Vec<PathBuf>> {
        let chunks: Vec<&[BedLine]> = lines.chunks(self.split_size).collect();

        let paths: Vec<PathBuf> = (1..=chunks.len())
            .map(|n| self.chunk_path(output, n))
            .collect();

        chunks
            .par_iter()
            .zip(paths.par_iter())
            .try_for_each(|(chunk, path)| -> Result<()> {
                let file = File::create(path)?;
                let mut writer = BufWriter::new(file);
                write_lines(&mut writer, chunk).map_err(BedError::Io)?;
                Ok(())
            })?;

        Ok(paths)
    }
}
