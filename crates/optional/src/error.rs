use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// `get()` was called on an absent value.
    #[error("no value present")]
    NoValuePresent,
    /// A `try_flat_map` mapper produced nothing instead of an `Optional`.
    #[error("mapper does not return an Optional")]
    MapperContract,
}
