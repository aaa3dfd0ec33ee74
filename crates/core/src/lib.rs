//! `gadgetshop-core` — shared building blocks for the catalog domain.
//!
//! This crate contains **pure domain** primitives (no IO, no randomness).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Money;
