//! The container callers hold: a closed sum over `Present` and `Absent`.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::absent::Absent;
use crate::contract::Maybe;
use crate::error::OptionalError;
use crate::present::Present;

/// A value that may be missing.
///
/// The variant is fixed when the value is built and never changes; every
/// operation in [`Maybe`] dispatches to the variant's own implementation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(Present<T>),
    Absent(Absent<T>),
}

impl<T> Optional<T> {
    /// The shared absent value.
    pub const EMPTY: Self = Optional::Absent(Absent::INSTANCE);

    /// `Some(v)` is present, whatever `v` is (`0`, `""` and `false` included);
    /// only `None` is absent.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(Present::new(v)),
            None => Self::EMPTY,
        }
    }

    #[inline]
    pub fn empty() -> Self { Self::EMPTY }

    /// Borrows the payload so the contract can be used without consuming `self`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(p) => Optional::Present(Present::new(p.value())),
            Optional::Absent(a) => Optional::Absent(a.cast()),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(p) => Some(p.into_inner()),
            Optional::Absent(_) => None,
        }
    }
}

impl<T> Maybe<T> for Optional<T> {
    #[inline]
    fn is_present(&self) -> bool {
        match self {
            Optional::Present(p) => p.is_present(),
            Optional::Absent(a) => a.is_present(),
        }
    }

    #[inline]
    fn get(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(p) => p.get(),
            Optional::Absent(a) => a.get(),
        }
    }

    #[inline]
    fn or_else(self, default: T) -> T {
        match self {
            Optional::Present(p) => p.or_else(default),
            Optional::Absent(a) => a.or_else(default),
        }
    }

    #[inline]
    fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(p) => p.or_else_get(supplier),
            Optional::Absent(a) => a.or_else_get(supplier),
        }
    }

    #[inline]
    fn or_else_throw<E, F>(self, error: F) -> Result<Optional<T>, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(p) => p.or_else_throw(error),
            Optional::Absent(a) => a.or_else_throw(error),
        }
    }

    #[inline]
    fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(p) => p.map(mapper),
            Optional::Absent(a) => a.map(mapper),
        }
    }

    #[inline]
    fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Present(p) => p.map_nullable(mapper),
            Optional::Absent(a) => a.map_nullable(mapper),
        }
    }

    #[inline]
    fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(p) => p.flat_map(mapper),
            Optional::Absent(a) => a.flat_map(mapper),
        }
    }

    #[inline]
    fn try_flat_map<U, F>(self, mapper: F) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        match self {
            Optional::Present(p) => p.try_flat_map(mapper),
            Optional::Absent(a) => a.try_flat_map(mapper),
        }
    }

    #[inline]
    fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(p) => p.filter(predicate),
            Optional::Absent(a) => a.filter(predicate),
        }
    }

    #[inline]
    fn peek<F>(self, action: F) -> Optional<T>
    where
        F: FnOnce(&T),
    {
        match self {
            Optional::Present(p) => p.peek(action),
            Optional::Absent(a) => a.peek(action),
        }
    }

    #[inline]
    fn if_present<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        match self {
            Optional::Present(p) => p.if_present(action),
            Optional::Absent(a) => a.if_present(action),
        }
    }

    #[inline]
    fn if_present_or_else<F, G>(self, action: F, empty_action: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(p) => p.if_present_or_else(action, empty_action),
            Optional::Absent(a) => a.if_present_or_else(action, empty_action),
        }
    }

    #[inline]
    fn or<F>(self, supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(p) => p.or(supplier),
            Optional::Absent(a) => a.or(supplier),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self { Self::EMPTY }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self { Self::of(value) }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self { value.into_option() }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(p) => p.fmt(f),
            Optional::Absent(a) => a.fmt(f),
        }
    }
}

// Same shape as `Option<T>` on the wire: the value itself, or null.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(p) => serializer.serialize_some(p.value()),
            Optional::Absent(_) => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::of)
    }
}
