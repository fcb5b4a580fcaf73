//! Disclosure report assembly.
//!
//! This module turns a ledger and its journal entries into:
//! - Political-fund statements (organization-bound ledgers)
//! - Election-fund statements (election-bound ledgers)

pub mod error;
pub mod normalize;
pub mod service;
pub mod summary;
pub mod types;


pub use error::{MissingRecord, ReportError};
pub use normalize::{
    JournalNormalizer, election_entry_type, election_public_expense, political_public_expense,
};
pub use service::ReportService;
pub use types::*;
