//! BED file parsing and writing.

use crate::record::BedLine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors produced while parsing, validating or transforming BED data.
#[derive(Error, Debug)]
pub enum BedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid BED format: {0}")]
    InvalidFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("length of chromosome '{chrom}' is unknown, cannot pad safely")]
    UnknownChromLength { chrom: String },

    #[error("interval on '{chrom}' inverted after padding: start {start} > stop {stop}")]
    InvertedInterval {
        chrom: String,
        start: i64,
        stop: i64,
    },
}

pub type Result<T> = std::result::Result<T, BedError>;

/// A streaming BED line reader.
///
/// Strand and feature columns are optional; when configured (0-based
/// indices), the corresponding column values are copied into
/// `BedLine::strand` / `BedLine::feat` so the merger can group on them.
pub struct BedReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
    strand_col: Option<usize>,
    feat_col: Option<usize>,
}

impl BedReader<File> {
    /// Open a BED file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> BedReader<R> {
    /// Create a new BED reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
            strand_col: None,
            feat_col: None,
        }
    }

    /// Configure the strand and feature columns (0-based indices).
    pub fn with_columns(mut self, strand_col: Option<usize>, feat_col: Option<usize>) -> Self {
        self.strand_col = strand_col;
        self.feat_col = feat_col;
        self
    }

    /// Read the next BED line.
    pub fn read_line(&mut self) -> Result<Option<BedLine>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            // Skip empty lines and comments
            let line = self.buffer.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with("track")
                || line.starts_with("browser")
            {
                continue;
            }

            return self.parse_line(line).map(Some);
        }
    }

    /// Parse a single BED line.
    fn parse_line(&self, line: &str) -> Result<BedLine> {
        let fields: Vec<String> = line.split('\t').map(|s| s.to_string()).collect();

        if fields.len() < 3 {
            return Err(BedError::Parse {
                line: self.line_number,
                message: format!("Expected at least 3 fields, got {}", fields.len()),
            });
        }

        let chrom = fields[0].clone();
        let start = self.parse_position(&fields[1], "start")?;
        let stop = self.parse_position(&fields[2], "stop")?;

        if start > stop {
            return Err(BedError::Parse {
                line: self.line_number,
                message: format!("Start ({}) > stop ({})", start, stop),
            });
        }

        let strand = self.column_value(&fields, self.strand_col, "strand")?;
        let feat = self.column_value(&fields, self.feat_col, "feature")?;

        Ok(BedLine {
            chrom,
            start,
            stop,
            strand,
            feat,
            fields,
        })
    }

    fn column_value(&self, fields: &[String], col: Option<usize>, name: &str) -> Result<String> {
        match col {
            Some(idx) => fields.get(idx).cloned().ok_or_else(|| BedError::Parse {
                line: self.line_number,
                message: format!(
                    "{} column {} out of range (line has {} columns)",
                    name,
                    idx + 1,
                    fields.len()
                ),
            }),
            None => Ok(String::new()),
        }
    }

    fn parse_position(&self, s: &str, field_name: &str) -> Result<i64> {
        s.parse().map_err(|_| BedError::Parse {
            line: self.line_number,
            message: format!("Invalid {} position: '{}'", field_name, s),
        })
    }

    /// Get an iterator over all lines.
    pub fn lines(self) -> BedLineIter<R> {
        BedLineIter { reader: self }
    }
}

/// Iterator over BED lines.
pub struct BedLineIter<R: Read> {
    reader: BedReader<R>,
}

impl<R: Read> Iterator for BedLineIter<R> {
    type Item = Result<BedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all lines from a BED file.
pub fn read_lines<P: AsRef<Path>>(
    path: P,
    strand_col: Option<usize>,
    feat_col: Option<usize>,
) -> Result<Vec<BedLine>> {
    let reader = BedReader::from_path(path)?.with_columns(strand_col, feat_col);
    reader.lines().collect()
}

/// Parse lines from a string (useful for testing).
pub fn parse_lines(
    content: &str,
    strand_col: Option<usize>,
    feat_col: Option<usize>,
) -> Result<Vec<BedLine>> {
    let reader = BedReader::new(content.as_bytes()).with_columns(strand_col, feat_col);
    reader.lines().collect()
}

/// Write BED lines to a writer.
pub fn write_lines<W: io::Write>(writer: &mut W, lines: &[BedLine]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
