//! Candidate identifier newtype.
//!
//! A concrete, string-backed identifier rather than a generic type parameter threaded
//! through every method. An opaque identity only needs `Eq + Hash + Ord + Clone`; a
//! `String` newtype gives us all three along with a human-readable `Display`/`FromStr`.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// An opaque candidate identity. Ordering is lexicographic over the backing string
/// and is used only for deterministic tie-break reporting, never for election outcomes.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn new(s: impl Into<String>) -> Self {
        CandidateId(s.into())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CandidateId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoreError::EmptyCandidateToken);
        }
        Ok(CandidateId(s.to_string()))
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        CandidateId(s.to_string())
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        CandidateId(s)
    }
}
