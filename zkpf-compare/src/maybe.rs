//! Witness containers that exist only in the prover pass.
//!
//! Gadget code runs twice: once to lay out the constraint shape, once to
//! fill in a witness. Instead of `Option<T>`, witness values are stored in a
//! `Maybe<T>` whose concrete type is picked by the driver at compile time:
//!
//! - `Always<T>`: a transparent wrapper, the value is always there
//! - `Empty<T>`: a zero-sized type, the value never exists
//!
//! Closures passed to [`Maybe::just`] and [`Maybe::with`] are never called
//! for `Empty`, so witness computations vanish from the shape pass.
//!
//! ```rust,ignore
//! let value: Always<F> = Always(field_element);
//! let x = value.take();
//!
//! let value: Empty<F> = Empty::new();
//! // `value.take()` would be a bug: the shape pass has no witness.
//! ```

use crate::error::Error;

/// Kind marker for `Maybe<T>` types.
///
/// Emulates a higher-kinded type: the inner type can be rebound while the
/// "always" or "empty" nature of the container is preserved.
pub trait MaybeKind: Copy + Clone + core::fmt::Debug {
    /// Rebind this kind to wrap a different type.
    type Rebind<T>: Maybe<T, Kind = Self>;
}

/// Option-like operations with compile-time variant selection.
pub trait Maybe<T>: Sized {
    /// The kind of this Maybe (Always or Empty).
    type Kind: MaybeKind;

    /// Build a `Maybe<R>` from the closure, which only runs for `Always`.
    fn just<R>(f: impl FnOnce() -> R) -> <Self::Kind as MaybeKind>::Rebind<R>;

    /// Like `just` but the closure may fail. Errors propagate upward.
    fn with<R>(
        f: impl FnOnce() -> Result<R, Error>,
    ) -> Result<<Self::Kind as MaybeKind>::Rebind<R>, Error>;

    /// Extract the contained value.
    ///
    /// # Panics
    ///
    /// Panics for `Empty`. Only call this from closures handed to `just`,
    /// `with` or a driver, which never run without a witness.
    fn take(self) -> T;

    /// Borrow the contained value. Same contract as [`Maybe::take`].
    fn snag(&self) -> &T;

    /// Map a function over the contained value.
    fn map<U, F>(self, f: F) -> <Self::Kind as MaybeKind>::Rebind<U>
    where
        F: FnOnce(T) -> U;

    /// Zip two `Maybe` values together.
    fn zip<U>(
        self,
        other: <Self::Kind as MaybeKind>::Rebind<U>,
    ) -> <Self::Kind as MaybeKind>::Rebind<(T, U)>;

    /// Convert to a standard `Option<T>`.
    fn into_option(self) -> Option<T>;
}

// =============================================================================
// Always<T>
// =============================================================================

/// A `Maybe<T>` that always contains a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Always<T>(pub T);

/// Kind marker for `Always<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlwaysKind;

impl MaybeKind for AlwaysKind {
    type Rebind<T> = Always<T>;
}

impl<T> Maybe<T> for Always<T> {
    type Kind = AlwaysKind;

    #[inline(always)]
    fn just<R>(f: impl FnOnce() -> R) -> Always<R> {
        Always(f())
    }

    #[inline(always)]
    fn with<R>(f: impl FnOnce() -> Result<R, Error>) -> Result<Always<R>, Error> {
        f().map(Always)
    }

    #[inline(always)]
    fn take(self) -> T {
        self.0
    }

    #[inline(always)]
    fn snag(&self) -> &T {
        &self.0
    }

    #[inline(always)]
    fn map<U, F>(self, f: F) -> Always<U>
    where
        F: FnOnce(T) -> U,
    {
        Always(f(self.0))
    }

    #[inline(always)]
    fn zip<U>(self, other: Always<U>) -> Always<(T, U)> {
        Always((self.0, other.0))
    }

    #[inline(always)]
    fn into_option(self) -> Option<T> {
        Some(self.0)
    }
}

// =============================================================================
// Empty<T>
// =============================================================================

/// A `Maybe<T>` that never contains a value.
///
/// Generic over `T` only so it can stand in for `Always<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Empty<T>(core::marker::PhantomData<T>);

/// Kind marker for `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyKind;

impl MaybeKind for EmptyKind {
    type Rebind<T> = Empty<T>;
}

impl<T> Empty<T> {
    /// Create a new empty value.
    #[inline(always)]
    pub const fn new() -> Self {
        Empty(core::marker::PhantomData)
    }
}

impl<T> Maybe<T> for Empty<T> {
    type Kind = EmptyKind;

    #[inline(always)]
    fn just<R>(_f: impl FnOnce() -> R) -> Empty<R> {
        Empty::new()
    }

    #[inline(always)]
    fn with<R>(_f: impl FnOnce() -> Result<R, Error>) -> Result<Empty<R>, Error> {
        Ok(Empty::new())
    }

    #[inline(always)]
    fn take(self) -> T {
        unreachable!("Empty::take() called outside a witness closure")
    }

    #[inline(always)]
    fn snag(&self) -> &T {
        unreachable!("Empty::snag() called outside a witness closure")
    }

    #[inline(always)]
    fn map<U, F>(self, _f: F) -> Empty<U>
    where
        F: FnOnce(T) -> U,
    {
        Empty::new()
    }

    #[inline(always)]
    fn zip<U>(self, _other: Empty<U>) -> Empty<(T, U)> {
        Empty::new()
    }

    #[inline(always)]
    fn into_option(self) -> Option<T> {
        None
    }
}
