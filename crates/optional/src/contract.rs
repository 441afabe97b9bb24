//! The capability set shared by every variant of an optional value.

use crate::error::OptionalError;
use crate::optional::Optional;

/// Operations available on a value that may or may not be present.
///
/// `Present`, `Absent` and `Optional` all implement this trait with the same
/// signatures, so calling code never needs to know which one it holds.
/// Every transforming operation consumes the receiver and hands back a new
/// `Optional`; use [`Optional::as_ref`] to work on a borrow instead.
pub trait Maybe<T>: Sized {
    fn is_present(&self) -> bool;

    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns the wrapped value, or [`OptionalError::NoValuePresent`].
    fn get(self) -> Result<T, OptionalError>;

    fn or_else(self, default: T) -> T;

    fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T;

    /// Passes a present value through unchanged, still wrapped.
    ///
    /// On an absent value the supplied error is returned as-is.
    fn or_else_throw<E, F>(self, error: F) -> Result<Optional<T>, E>
    where
        F: FnOnce() -> E;

    /// Applies `mapper` to a present value. The result is always present.
    fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U;

    /// Applies `mapper` to a present value and rewraps the result through
    /// [`Optional::of`], so a `None` from the mapper yields an absent value.
    fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>;

    fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>;

    /// Like [`Maybe::flat_map`], for mappers that may fail to produce an
    /// `Optional` at all. A `None` from the mapper is reported as
    /// [`OptionalError::MapperContract`].
    fn try_flat_map<U, F>(self, mapper: F) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>;

    fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool;

    /// Observes a present value without changing it.
    fn peek<F>(self, action: F) -> Optional<T>
    where
        F: FnOnce(&T);

    fn if_present<F>(self, action: F)
    where
        F: FnOnce(T);

    /// Runs exactly one of the two callbacks.
    fn if_present_or_else<F, G>(self, action: F, empty_action: G)
    where
        F: FnOnce(T),
        G: FnOnce();

    /// Falls back to `supplier` only when absent.
    fn or<F>(self, supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>;
}
