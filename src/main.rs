//! bedkit: sort, merge and pad BED interval files.
//!
//! Usage: bedkit [OPTIONS] <INPUTS>...

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use bedkit::bed::{read_lines, write_lines, BedError};
use bedkit::chrom_order::HUMAN_CHROM_ORDER;
use bedkit::commands::{
    dedup_sorted, MergeCommand, PadCommand, PaddingPolicy, PipelineCommand, SortCommand, SortType,
    SplitCommand,
};
use bedkit::config;
use bedkit::genome::Genome;
use bedkit::record::BedLine;

#[derive(Parser)]
#[command(name = "bedkit")]
#[command(version)]
#[command(about = "Sort, merge and pad BED-format genomic interval files", long_about = None)]
struct Cli {
    /// Input BED files, processed as one concatenated collection
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chromosome ordering: lex, ccs (custom chromosome sorting)
    /// or fidx (fasta index order)
    #[arg(short = 's', long, default_value_t = SortType::Lex)]
    sort_type: SortType,

    /// Comma-separated chromosome order for ccs sorting
    /// (default: human reference order 1-22, X, Y, MT)
    #[arg(long)]
    chr_order: Option<String>,

    /// Fasta index (.fai) or genome file with chromosome lengths
    #[arg(long)]
    fasta_idx: Option<PathBuf>,

    /// Bases added to both interval boundaries (negative shrinks)
    #[arg(short, long, default_value_t = 0)]
    padding: i64,

    /// Policy for chromosomes with unknown length: safe, lax or force
    #[arg(long, default_value_t = PaddingPolicy::Safe)]
    padding_type: PaddingPolicy,

    /// Coordinate origin, 0 or 1; the lower clamp when padding
    #[arg(long, default_value_t = 1)]
    first_base: i64,

    /// Gap tolerance for merging: 0 merges touching intervals,
    /// negative requires overlap, positive bridges gaps
    #[arg(long, default_value_t = 0)]
    overlap: i64,

    /// 1-based column holding the strand; merging then groups on it
    #[arg(long)]
    strand_col: Option<usize>,

    /// 1-based column holding a feature label; merging then groups on it
    #[arg(long)]
    feat_col: Option<usize>,

    /// Sort and deduplicate only, skip merging
    #[arg(long)]
    no_merge: bool,

    /// Split the output into chunk files (implies --no-merge)
    #[arg(long)]
    fission: bool,

    /// Lines per chunk file when using --fission
    #[arg(long, default_value_t = 100)]
    split_size: i64,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BedError> {
    let (strand_col, feat_col) = config::verify_columns(cli.strand_col, cli.feat_col)?;
    config::verify_length_source(
        cli.padding,
        cli.padding_type,
        cli.sort_type,
        cli.fasta_idx.as_deref(),
    )?;
    config::verify_fission(cli.fission, cli.split_size)?;
    config::verify_first_base(cli.first_base)?;

    let genome = cli
        .fasta_idx
        .as_ref()
        .map(Genome::from_file)
        .transpose()?
        .unwrap_or_default();

    let sorter = build_sorter(cli.sort_type, cli.chr_order.as_deref(), &genome);

    let mut lines: Vec<BedLine> = Vec::new();
    for input in &cli.inputs {
        lines.extend(read_lines(input, strand_col, feat_col)?);
    }

    // Fission chunks must keep their source lines, so it never merges
    let no_merge = cli.no_merge || cli.fission;

    let pad = (cli.padding != 0)
        .then(|| PadCommand::new(cli.padding, cli.first_base, cli.padding_type).with_genome(genome));

    let (lines, missing) = if no_merge {
        let (lines, missing) = match &pad {
            Some(pad) => pad.pad(lines)?,
            None => (lines, Vec::new()),
        };
        (dedup_sorted(sorter.sort(lines)), missing)
    } else {
        let pipeline = PipelineCommand::new(pad, MergeCommand::new(cli.overlap, sorter));
        pipeline.run(lines)?
    };

    if !missing.is_empty() {
        eprintln!(
            "Warning: chromosomes missing from the length map were not clamped: {}",
            missing.join(", ")
        );
    }

    if cli.fission {
        let output = cli.output.unwrap_or_else(|| PathBuf::from("out.bed"));
        let split = SplitCommand::new(cli.split_size as usize);
        split.write_files(&lines, &output)?;
        return Ok(());
    }

    match cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_lines(&mut writer, &lines)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = BufWriter::new(stdout.lock());
            write_lines(&mut handle, &lines)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Build the sorter for the requested sort type.
///
/// For ccs sorting an explicit --chr-order wins; otherwise the built-in
/// human reference order applies. Fidx sorting follows the chromosome
/// order of the fasta index file.
fn build_sorter(sort_type: SortType, chr_order: Option<&str>, genome: &Genome) -> SortCommand {
    match sort_type {
        SortType::Lex => SortCommand::lexicographic(),
        SortType::Ccs => {
            let order: Vec<String> = match chr_order {
                Some(list) => list
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect(),
                None => HUMAN_CHROM_ORDER.iter().map(|c| c.to_string()).collect(),
            };
            SortCommand::with_chrom_order(&order)
        }
        SortType::Fidx => SortCommand::with_chrom_order(genome.chromosomes()),
    }
}
