//! optional: a container for a value that may be missing.
//!
//! `Optional::of` is the only place that decides between the two variants,
//! `Present` and `Absent`. Everything else goes through the `Maybe` contract,
//! which both variants (and `Optional` itself) implement with identical
//! signatures.

pub mod absent;
pub mod contract;
pub mod error;
pub mod optional;
pub mod present;

pub use absent::Absent;
pub use contract::Maybe;
pub use error::OptionalError;
pub use optional::Optional;
pub use present::Present;
