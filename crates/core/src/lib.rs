//! Core business logic for Polimoney.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It turns raw public ledgers and journals into disclosure reports.
//!
//! # Modules
//!
//! - `category` - Account code to disclosure category derivation
//! - `model` - Ledgers, journal entries, and reference records
//! - `loader` - Read-only record source abstraction
//! - `reports` - Political-fund and election-fund report assembly

pub mod category;
pub mod loader;
pub mod model;
pub mod reports;
