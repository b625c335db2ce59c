//! Defaults that enable chainset's [`OrderedSet`] to order its elements as the
//! standard library's sets do, namely using the [`Ord`] trait for comparisons
//! rather than any user-supplied [`TotalOrder`].
//!
//! [`OrderedSet`]: crate::OrderedSet

use crate::{LookupKey, TotalOrder};
use alloc::{boxed::Box, vec::Vec};
use core::{borrow::Borrow, cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized + Ord>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> OrdTotalOrder<T> {
    /// Makes the order that delegates to `T`'s implementation of [`Ord`].
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }

    // `cmp` is overridden so that three-way comparisons make one call to `T`'s
    // implementation of [`Ord`] instead of two calls to `lt`.
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }
}

impl<T: ?Sized + Ord, K: ?Sized + Borrow<T>> LookupKey<OrdTotalOrder<T>> for K {
    fn key(&self) -> &T {
        self.borrow()
    }
}

/// A helper trait implemented on potential element types, used to identify their
/// default comparison type for [`Ord`]-based comparisons.
///
/// This is only used when [`OrderedSet::new`] selects the default [`OrdTotalOrder`].
/// For example, a set that stores [`String`] under the default order will use
/// [`str`] as the comparison type owing to the implementation of this trait for
/// [`String`], so it can be queried with `&str`.
///
/// [`OrderedSet::new`]: crate::OrderedSet::new
/// [`String`]: alloc::string::String
pub trait OrdStoredKey: LookupKey<OrdTotalOrder<Self::DefaultComparisonKey>> {
    /// The comparison type to be used by sets storing elements of `Self` type and
    /// using the default [`OrdTotalOrder`].
    type DefaultComparisonKey: ?Sized + Ord;
}

macro_rules! ord_keys {
    // end of recursion
    () => {};

    // implement type and recurse
    ($(#[$attrs:meta])* $({$($g:tt)+})? $t:ty => $m:ty $(, $($rest:tt)*)?) => {
        $(#[$attrs])*
        impl$(<$($g)+>)? OrdStoredKey for $t {
            type DefaultComparisonKey = $m;
        }

        $(ord_keys!($($rest)*);)?
    };

    // reflexive comparison when no comparison type is specified
    ($(#[$attrs:meta])* $({$($g:tt)+})? $t:ty $(, $($rest:tt)*)?) => {
        ord_keys!($(#[$attrs])* $({$($g)+})? $t => Self $(, $($rest)*)?);
    };
}

ord_keys! {
    (),
    bool, char,
    i8, u8,
    i16, u16,
    i32, u32,
    i64, u64,
    i128, u128,
    isize, usize,
    alloc::string::String => str, str,
    alloc::ffi::CString => core::ffi::CStr, core::ffi::CStr,
    {B: ?Sized + Ord + alloc::borrow::ToOwned} alloc::borrow::Cow<'_, B> => B,
    {T: ?Sized + Ord} &T => T,
    {T: ?Sized + Ord} &mut T => T,
    {T: ?Sized + Ord} alloc::rc::Rc<T> => T,
    {T: ?Sized + Ord} alloc::sync::Arc<T> => T,
    {T: Ord, const N: usize} [T; N] => [T], {T: Ord} [T],
    {T: Ord} core::cmp::Reverse<T>,
    #[cfg(feature = "std")] std::ffi::OsString => std::ffi::OsStr, #[cfg(feature = "std")] std::ffi::OsStr,
    #[cfg(feature = "std")] std::path::PathBuf => std::path::Path, #[cfg(feature = "std")] std::path::Path,
    {T: Ord} Vec<T> => [T],
    {T: Ord + ?Sized} Box<T> => T,
}
