//! Disclosure category derivation.
//!
//! Maps raw account codes to the closed set of disclosure categories and
//! their display names:
//! - Exact-match table for known account codes
//! - Prefix heuristics for unknown `REV_` / `EXP_` codes
//! - Per-report catalog overrides for display names
//! - Election type display names

mod election_type;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

pub use election_type::{election_type_name, resolve_election_type_name};
pub use resolver::{CategoryResolver, ResolvedCategory, category_display_name, derive_category};
pub use types::Category;
