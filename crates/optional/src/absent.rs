//! The absent variant: no payload, one shared zero-sized instance.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::contract::Maybe;
use crate::error::OptionalError;
use crate::optional::Optional;

/// No value. Zero-sized, carrying only type information.
///
/// Every `Absent<T>` is the same value regardless of `T`, so it is `Copy`,
/// `Send` and `Sync` for any element type. `fn() -> T` keeps the marker from
/// borrowing auto traits off `T`.
pub struct Absent<T>(PhantomData<fn() -> T>);

impl<T> Absent<T> {
    /// The shared instance.
    pub const INSTANCE: Self = Absent(PhantomData);

    /// Re-types the absent value; nothing is read or moved.
    #[inline]
    pub fn cast<U>(self) -> Absent<U> { Absent::INSTANCE }
}

impl<T> Clone for Absent<T> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Absent<T> {}

impl<T> Default for Absent<T> {
    #[inline]
    fn default() -> Self { Self::INSTANCE }
}

impl<T> PartialEq for Absent<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool { true }
}

impl<T> Eq for Absent<T> {}

impl<T> Hash for Absent<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T> fmt::Debug for Absent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Absent")
    }
}

impl<T> Maybe<T> for Absent<T> {
    #[inline]
    fn is_present(&self) -> bool { false }

    #[inline]
    fn get(self) -> Result<T, OptionalError> { Err(OptionalError::NoValuePresent) }

    #[inline]
    fn or_else(self, default: T) -> T { default }

    #[inline]
    fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        supplier()
    }

    #[inline]
    fn or_else_throw<E, F>(self, error: F) -> Result<Optional<T>, E>
    where
        F: FnOnce() -> E,
    {
        Err(error())
    }

    #[inline]
    fn map<U, F>(self, _mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::Absent(self.cast())
    }

    #[inline]
    fn map_nullable<U, F>(self, _mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::Absent(self.cast())
    }

    #[inline]
    fn flat_map<U, F>(self, _mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        Optional::Absent(self.cast())
    }

    #[inline]
    fn try_flat_map<U, F>(self, _mapper: F) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        Ok(Optional::Absent(self.cast()))
    }

    #[inline]
    fn filter<P>(self, _predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        Optional::Absent(self)
    }

    #[inline]
    fn peek<F>(self, _action: F) -> Optional<T>
    where
        F: FnOnce(&T),
    {
        Optional::Absent(self)
    }

    #[inline]
    fn if_present<F>(self, _action: F)
    where
        F: FnOnce(T),
    {
    }

    #[inline]
    fn if_present_or_else<F, G>(self, _action: F, empty_action: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        empty_action()
    }

    #[inline]
    fn or<F>(self, supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        supplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn shared_instance_is_zero_sized() {
        assert_eq!(core::mem::size_of::<Absent<[u8; 1024]>>(), 0);
        assert_eq!(Absent::<u8>::INSTANCE, Absent::<u16>::INSTANCE.cast());
    }

    #[test]
    fn shareable_even_for_non_send_payloads() {
        assert_send_sync::<Absent<Rc<u8>>>();
    }

    #[test]
    fn callbacks_other_than_fallbacks_never_run() {
        let a = Absent::<u32>::INSTANCE;
        assert!(a.map(|_| -> u32 { unreachable!() }).is_empty());
        assert!(a.filter(|_| unreachable!()).is_empty());
        assert!(a.peek(|_| unreachable!()).is_empty());
        a.if_present(|_| unreachable!());
        assert_eq!(a.try_flat_map(|_| -> Option<Optional<u8>> { unreachable!() }), Ok(Optional::EMPTY));
    }

    #[test]
    fn fallbacks_run() {
        let a = Absent::<&str>::INSTANCE;
        assert_eq!(a.get(), Err(OptionalError::NoValuePresent));
        assert_eq!(a.or_else("fallback"), "fallback");
        assert_eq!(a.or_else_get(|| "supplied"), "supplied");
        assert_eq!(a.or_else_throw(|| 7u8), Err(7));
        assert_eq!(a.or(|| Optional::of(Some("other"))).get(), Ok("other"));
    }
}
