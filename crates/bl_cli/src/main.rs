mod args;

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use args::{BackendArg, Cli, Command, SolveArgs, TabulateArgs};
use bl_core::CandidateId;
use bl_io::{parse_ballot_line, parse_statement, render_solver_report, BallotLineError, StatementError};
use bl_methods::{Method, UnknownMethod};
use bl_solver::{Backend, SolverError};

#[derive(Error, Debug)]
enum CliError {
    #[error("reading ballots: {0}")]
    Io(#[from] io::Error),
    #[error("parsing ballot line: {0}")]
    BallotLine(#[from] BallotLineError),
    #[error("parsing statement: {0}")]
    Statement(#[from] StatementError),
    #[error("{0}")]
    Method(#[from] UnknownMethod),
    #[error("solver: {0}")]
    Solver(#[from] SolverError),
    #[error("serializing report: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.verbosity.log_level_filter().to_string())),
        )
        .init();

    let result = match cli.command {
        Command::Tabulate(args) => run_tabulate(args),
        Command::Solve(args) => run_solve(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("ballotlab: error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_ballot_lines(path: Option<&std::path::Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run_tabulate(args: TabulateArgs) -> Result<(), CliError> {
    tracing::info!(method = %args.method, "starting tabulate run");

    let method: Method = args.method.parse()?;
    let candidates: BTreeSet<CandidateId> =
        args.candidates.iter().map(|s| CandidateId::new(s.trim())).collect();

    let text = read_ballot_lines(args.ballots.as_deref())?;
    let mut ballots = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        ballots.push(parse_ballot_line(line)?);
    }

    let ranking = method.tabulate(&ballots, &candidates);
    for row in &ranking {
        let mut ids: Vec<&str> = row.as_set().iter().map(CandidateId::as_str).collect();
        ids.sort_unstable();
        println!("{}", ids.join("="));
    }

    tracing::info!(ballots = ballots.len(), "tabulate run complete");
    Ok(())
}

fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    tracing::info!(statement = %args.statement, "starting solve run");

    let candidates: BTreeSet<CandidateId> =
        args.candidates.iter().map(|s| CandidateId::new(s.trim())).collect();
    let statement = parse_statement(&args.statement)?;
    let plurality_winner = args.plurality_winner.as_deref().map(CandidateId::new);
    let borda_winner = args.borda_winner.as_deref().map(CandidateId::new);

    let backend = match args.backend {
        BackendArg::Lp => Backend::Lp,
        BackendArg::Iterative => Backend::Iterative,
    };

    let mut report = bl_solver::solve(
        &candidates,
        &statement,
        plurality_winner.as_ref(),
        borda_winner.as_ref(),
        backend,
    )?;

    if args.verify {
        report.run_methods(&Method::ALL, &candidates);
    }

    println!("{}", render_solver_report(&report)?);

    tracing::info!(status = ?report.status, "solve run complete");
    Ok(())
}
