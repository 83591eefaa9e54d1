//! Bulk ingestion of refuel candidates.
//!
//! CSV structure (delimiters, headers, locale number formats) is the
//! collaborator's problem: by the time records reach this crate their
//! dates and numerics are parsed and their text fields are plain strings.
//! This crate owns everything after that: per-record validation, creating
//! registry entities the candidate references for the first time, running
//! the same write-time derivation as manual entry, and reporting failures
//! per record while the batch continues.

pub mod candidate;
pub mod error;
pub mod ingest;

pub use candidate::CandidateRefuel;
pub use error::ImportError;
pub use ingest::{import_candidates, ImportIssue, ImportReport};
