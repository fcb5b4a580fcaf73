//! Read-only data model.
//!
//! Ledgers and journal entries are produced by an external sync process;
//! reference records describe the politician, organization, election, and
//! district a ledger reports on.

mod journal;
mod ledger;
mod reference;

pub use journal::{Classification, JournalEntry};
pub use ledger::{Ledger, LedgerScope, ScopeKind};
pub use reference::{District, Election, ElectionTypeRecord, Organization, Politician};
