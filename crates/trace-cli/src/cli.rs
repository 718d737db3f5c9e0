use carbontrace::engine::config::FinalBond;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Carbon Trace Developers",
    version,
    about = "Carbon Trace CLI - Reconstruct C-alpha backbone traces from generated internal-coordinate feature vectors.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct the chain encoded by one feature vector.
    Decode(DecodeArgs),
    /// Reconstruct a population of sampled vectors and keep the one closest to a target span.
    Select(SelectArgs),
    /// Summarize bend and dihedral angles by secondary structure.
    Stats(StatsArgs),
}

/// How the last bond of a chain is sized.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalBondArg {
    /// The last bond is as long as the encoded displacement norm.
    DisplacementNorm,
    /// The first-to-last distance equals the encoded displacement norm.
    SpanClosure,
}

impl From<FinalBondArg> for FinalBond {
    fn from(arg: FinalBondArg) -> Self {
        match arg {
            FinalBondArg::DisplacementNorm => FinalBond::DisplacementNorm,
            FinalBondArg::SpanClosure => FinalBond::SpanClosure,
        }
    }
}

/// Reconstruction overrides shared by `decode` and `select`.
#[derive(Args, Debug, Clone, Default)]
pub struct ReconstructionArgs {
    /// Override the C-alpha to C-alpha bond length, in Angstroms.
    #[arg(short = 'b', long, value_name = "FLOAT")]
    pub bond_length: Option<f64>,

    /// Override how the last bond of the chain is sized.
    #[arg(long, value_enum, value_name = "MODE")]
    pub final_bond: Option<FinalBondArg>,
}

/// Options controlling the PDB output.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path for the output PDB file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// One-letter amino acid sequence used for residue names.
    #[arg(long = "sequence", value_name = "AA")]
    pub sequence: Option<String>,

    /// Chain identifier written to every record.
    #[arg(long, value_name = "CHAR", default_value_t = 'A')]
    pub chain_id: char,
}

/// Arguments for the `decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the file of generated feature vectors (CSV, TSV or whitespace separated).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// 1-based row of the input file to decode.
    #[arg(short, long, value_name = "INT", default_value_t = 1)]
    pub row: usize,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also print the decoded vector in degrees (displacement, then alpha/theta pairs).
    #[arg(long)]
    pub original: bool,

    #[command(flatten)]
    pub reconstruction: ReconstructionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Path to the pool of generated feature vectors to sample from.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Target distance from the first atom to the last one, in Angstroms.
    #[arg(short, long, required = true, value_name = "FLOAT")]
    pub span: f64,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of candidates generated.
    #[arg(short, long, value_name = "INT")]
    pub population: Option<usize>,

    /// Seed for reproducible random sampling from the pool.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Take candidates from the pool in file order instead of at random.
    #[arg(long)]
    pub sequential: bool,

    /// Skip candidates that cannot be reconstructed instead of aborting.
    #[arg(long)]
    pub skip_failed: bool,

    #[command(flatten)]
    pub reconstruction: ReconstructionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the file of generated feature vectors.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub structure: StructureSource,
}

/// Where the secondary structure of each vector comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct StructureSource {
    /// Secondary structure strings (H, E, C), one per vector or a single one for all.
    #[arg(long = "ss", value_name = "HEC", num_args(1..))]
    pub ss: Vec<String>,

    /// File of one-hot conditioning labels, one row per vector.
    #[arg(long, value_name = "PATH")]
    pub labels: Option<PathBuf>,
}
