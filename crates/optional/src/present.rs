//! The populated variant.

use crate::contract::Maybe;
use crate::error::OptionalError;
use crate::optional::Optional;

/// Exactly one value, fixed at construction.
///
/// Only this crate builds a `Present`, so [`Optional::of`] stays the single
/// place where presence is decided.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Present<T>(T);

impl<T> Present<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self { Self(value) }

    #[inline]
    pub fn value(&self) -> &T { &self.0 }

    #[inline]
    pub fn into_inner(self) -> T { self.0 }
}

impl<T> Maybe<T> for Present<T> {
    #[inline]
    fn is_present(&self) -> bool { true }

    #[inline]
    fn get(self) -> Result<T, OptionalError> { Ok(self.0) }

    #[inline]
    fn or_else(self, _default: T) -> T { self.0 }

    #[inline]
    fn or_else_get<F>(self, _supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0
    }

    #[inline]
    fn or_else_throw<E, F>(self, _error: F) -> Result<Optional<T>, E>
    where
        F: FnOnce() -> E,
    {
        Ok(Optional::Present(self))
    }

    #[inline]
    fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::of(Some(mapper(self.0)))
    }

    #[inline]
    fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::of(mapper(self.0))
    }

    #[inline]
    fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        mapper(self.0)
    }

    #[inline]
    fn try_flat_map<U, F>(self, mapper: F) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        mapper(self.0).ok_or(OptionalError::MapperContract)
    }

    #[inline]
    fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.0) { Optional::Present(self) } else { Optional::EMPTY }
    }

    #[inline]
    fn peek<F>(self, action: F) -> Optional<T>
    where
        F: FnOnce(&T),
    {
        action(&self.0);
        Optional::Present(self)
    }

    #[inline]
    fn if_present<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        action(self.0)
    }

    #[inline]
    fn if_present_or_else<F, G>(self, action: F, _empty_action: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        action(self.0)
    }

    #[inline]
    fn or<F>(self, _supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        Optional::Present(self)
    }
}
