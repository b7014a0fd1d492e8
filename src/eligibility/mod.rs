//! Candidate pool computation.
//!
//! Given the full roster snapshot and an [`EligibilityQuery`], produces
//! the pool of doctors a rotation or indication may choose from. The
//! filter is a pure function: no side effects, deterministic, and an
//! empty pool is a value, not an error — the caller decides how to
//! surface it.

mod filter;
mod types;

pub use filter::eligible_doctors;
pub use types::EligibilityQuery;
