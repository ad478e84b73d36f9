use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Debug, Parser)]
#[command(name = "ballotlab", about = "Ranked-voting tabulation and ballot synthesis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tabulate a ranking for a set of ballots under one voting method.
    Tabulate(TabulateArgs),
    /// Synthesize a minimal ballot set realizing a pairwise-ordering statement.
    Solve(SolveArgs),
}

#[derive(Debug, Parser)]
pub struct TabulateArgs {
    /// File of ballot lines, one per line (§6.2 format); reads stdin when omitted.
    #[arg(long)]
    pub ballots: Option<PathBuf>,

    /// Candidate universe, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub candidates: Vec<String>,

    /// Tabulation method to run.
    #[arg(long)]
    pub method: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    Lp,
    Iterative,
}

#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Candidate universe, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub candidates: Vec<String>,

    /// Pairwise-ordering statement (§6.3), e.g. "AB>CD>BD>AD>BC>AC".
    #[arg(long)]
    pub statement: String,

    /// Pin a plurality winner.
    #[arg(long)]
    pub plurality_winner: Option<String>,

    /// Pin a Borda winner.
    #[arg(long)]
    pub borda_winner: Option<String>,

    /// Which solver backend to use.
    #[arg(long, value_enum, default_value_t = BackendArg::Lp)]
    pub backend: BackendArg,

    /// Run every tabulation method over the synthesized election and include the
    /// rankings in the report.
    #[arg(long)]
    pub verify: bool,
}
