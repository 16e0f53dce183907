//! `stockledger-core`: domain primitives shared by the stock ledger crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use item::ItemName;
