use crate::report::fasta::DEFAULT_LINE_WIDTH;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqgen",
    version,
    about = "Generate a random DNA sequence, save it as FASTA and append its statistics to CSV"
)]
pub struct Cli {
    /// Sequence length; prompted for when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Run identifier ([A-Za-z0-9_.-]); prompted for when omitted
    #[arg(long)]
    pub id: Option<String>,

    /// Free-text FASTA description; prompted for when omitted
    #[arg(long)]
    pub description: Option<String>,

    /// Text embedded at a random offset of the FASTA sequence
    #[arg(long, conflicts_with = "no_signature")]
    pub signature: Option<String>,

    #[arg(long, default_value_t = false)]
    pub no_signature: bool,

    #[arg(long, value_enum, default_value_t = LayoutArg::Basic)]
    pub layout: LayoutArg,

    /// FASTA line width, 0 writes the sequence on a single line
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub width: usize,

    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LayoutArg {
    #[value(name = "basic")]
    Basic,
    #[value(name = "extended")]
    Extended,
}
