//! `SeaORM` entity definitions for the public disclosure tables.

pub mod account_codes;
pub mod districts;
pub mod election_types;
pub mod elections;
pub mod organizations;
pub mod politicians;
pub mod public_journals;
pub mod public_ledgers;
