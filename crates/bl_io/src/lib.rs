//! The textual wire-format layer: parsers for the two input formats (ballot lines,
//! solver statements) and the solver report's JSON serialization. Library crates
//! upstream of this one never touch text; text enters and leaves the system only here.

pub mod ballot_format;
pub mod errors;
pub mod solver_output;
pub mod statement_parse;

pub use ballot_format::{parse_ballot_line, render_ballot_line};
pub use errors::{BallotLineError, StatementError};
pub use solver_output::render_solver_report;
pub use statement_parse::parse_statement;
