use crate::cli::args::{Cli, LayoutArg};
use crate::cli::input::{Prompter, SeqId, parse_length};
use crate::core::generate::{insert_signature, random_dna};
use crate::core::model::{DEFAULT_SIGNATURE, DNA_ALPHABET, Layout, Stats};
use crate::core::stats::calc_statistics;
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct RunConfig {
    pub length: usize,
    pub seq_id: SeqId,
    pub description: String,
    pub signature: Option<String>,
    pub layout: Layout,
    pub width: usize,
    pub out_dir: PathBuf,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn fasta_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.fasta", self.seq_id))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}_stats.csv", self.seq_id))
    }

    pub fn header(&self) -> String {
        format!("{} {}", self.seq_id, self.description)
    }
}

pub struct RunOutput {
    pub sequence: String,
    pub final_sequence: String,
    pub stats: Stats,
    pub fasta_path: PathBuf,
    pub csv_path: PathBuf,
}

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    run(cli, &mut input, &mut stdout)?;
    Ok(())
}

pub fn run(args: Cli, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<RunOutput> {
    let t_input = Instant::now();
    let config = collect(args, input, out)?;
    stage_done("input", t_input);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let output = execute(&config, &mut rng)?;

    report::summary_txt::write(
        out,
        &output.stats,
        config.layout,
        &output.fasta_path,
        &output.csv_path,
    )
    .context("failed to print summary")?;
    Ok(output)
}

/// Merges command-line values with prompted ones, validating each before the
/// next is asked for.
pub fn collect(args: Cli, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<RunConfig> {
    let layout = match args.layout {
        LayoutArg::Basic => Layout::Basic,
        LayoutArg::Extended => Layout::Extended,
    };
    let mut prompter = Prompter::new(input, out);

    let raw_length = prompter.ask(
        "sequence length",
        "Enter the sequence length (positive integer): ",
        args.length,
    )?;
    let length = parse_length(&raw_length)?;

    let raw_id = prompter.ask("sequence ID", "Enter the sequence ID: ", args.id)?;
    let seq_id = SeqId::parse(&raw_id)?;

    let description = prompter.ask(
        "description",
        "Enter the sequence description: ",
        args.description,
    )?;

    let signature = if args.no_signature {
        None
    } else {
        match (layout, args.signature) {
            (Layout::Basic, None) => Some(DEFAULT_SIGNATURE.to_string()),
            (_, preset) => Some(prompter.ask(
                "signature",
                "Enter the signature to embed: ",
                preset,
            )?),
        }
    };

    Ok(RunConfig {
        length,
        seq_id,
        description,
        signature,
        layout,
        width: args.width,
        out_dir: args.out_dir,
        seed: args.seed,
    })
}

/// Generates, analyses and writes both output files for a validated config.
pub fn execute<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<RunOutput> {
    let t_gen = Instant::now();
    let sequence = random_dna(&DNA_ALPHABET, config.length, rng);
    stage_done("generate", t_gen);

    let t_stats = Instant::now();
    let stats = calc_statistics(&sequence);
    stage_done("stats", t_stats);

    let final_sequence = match &config.signature {
        Some(sig) => insert_signature(&sequence, sig, rng),
        None => sequence.clone(),
    };

    let fasta_path = config.fasta_path();
    let t_fasta = Instant::now();
    report::fasta::write(&fasta_path, &config.header(), &final_sequence, config.width)
        .with_context(|| format!("failed to write {}", fasta_path.display()))?;
    stage_done("fasta", t_fasta);
    info!(
        "wrote {} ({} nt)",
        fasta_path.display(),
        final_sequence.chars().count()
    );

    let csv_path = config.csv_path();
    let t_csv = Instant::now();
    report::stats_csv::append(&csv_path, &stats, config.seq_id.as_str(), config.layout)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    stage_done("csv", t_csv);
    info!("appended statistics for {} to {}", config.seq_id, csv_path.display());

    Ok(RunOutput {
        sequence,
        final_sequence,
        stats,
        fasta_path,
        csv_path,
    })
}

fn stage_done(name: &str, t: Instant) {
    debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
