//! An ordered set kept as a sorted, singly-linked chain of nodes, that sorts its
//! elements according to a specified [`TotalOrder`] rather than the [`Ord`] trait.
//!
//! Every operation is a linear walk from the head of the chain: insertion and
//! removal scan for the splice point, lookups and bound queries scan for the
//! first element that does not order before the probe. There is no balancing
//! and no index, so [`OrderedSet`] is best suited to small sets, or to sets
//! whose ordering needs runtime state that the [`Ord`] trait cannot carry.
//!
//! # Example
//!
//! ```
//! use chainset::{OrderedSet, OrdTotalOrder, ReverseOrder};
//!
//! let mut letters = OrderedSet::new();
//! letters.insert("b".to_string());
//! letters.insert("a".to_string());
//! letters.insert("c".to_string());
//! assert!(!letters.insert("b".to_string()));
//! assert_eq!(letters.to_string(), "{a, b, c}");
//! assert!(letters.contains("a"));
//!
//! let mut descending = OrderedSet::with_order(ReverseOrder(OrdTotalOrder::<i32>::new()));
//! descending.extend([1, 3, 2]);
//! assert_eq!(descending.to_string(), "{3, 2, 1}");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "hasher_prefixfree_extras", feature(hasher_prefixfree_extras))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

use core::cmp::Ordering;

#[macro_use]
mod polyfill;

mod default;
mod list;
mod order;

pub use default::{OrdStoredKey, OrdTotalOrder};
pub use list::list_set;
pub use list_set::OrderedSet;
pub use order::{OrderBy, ReverseOrder};

#[cfg(test)]
mod testing;

/// A strict weak order over [`OrderedType`](TotalOrder::OrderedType).
///
/// Implementors need only supply [`lt`](TotalOrder::lt), the predicate that
/// decides whether one value orders strictly before another. Two values for
/// which neither orders before the other are *equivalent*, and an
/// [`OrderedSet`] holds at most one value from each equivalence class.
///
/// It is a logic error for `lt` to be anything other than a strict weak order
/// (irreflexive, transitive, with transitive incomparability). The behavior
/// resulting from such a logic error is not specified, but will not result in
/// undefined behavior.
pub trait TotalOrder {
    /// The type over which this order is defined.
    type OrderedType: ?Sized;

    /// Returns `true` if `this` orders strictly before `that`.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool;

    /// Returns `true` if `this` orders strictly after `that`.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.lt(that, this)
    }

    /// Returns `true` if `this` does not order after `that`.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        !self.lt(that, this)
    }

    /// Returns `true` if `this` does not order before `that`.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        !self.lt(this, that)
    }

    /// Returns `true` if neither value orders before the other.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        !self.lt(this, that) && !self.lt(that, this)
    }

    /// Returns `true` if one of the values orders before the other.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        !self.eq(this, that)
    }

    /// Returns the [`Ordering`] between `this` and `that`.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        if self.lt(this, that) {
            Ordering::Less
        } else if self.lt(that, this) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// A type that can be compared under the total order `O`.
///
/// Both the elements stored in an [`OrderedSet<T, O>`] and the values used to
/// look them up must implement `LookupKey<O>`, which is what allows, say, a set
/// of `String` to be queried with a `&str`.
///
/// # Example
///
/// ```
/// use chainset::{LookupKey, OrderedSet, TotalOrder};
///
/// // orders byte strings by their length alone
/// struct ByLength;
///
/// impl TotalOrder for ByLength {
///     type OrderedType = [u8];
///     fn lt(&self, this: &[u8], that: &[u8]) -> bool {
///         this.len() < that.len()
///     }
/// }
///
/// impl LookupKey<ByLength> for str {
///     fn key(&self) -> &[u8] { self.as_bytes() }
/// }
/// impl LookupKey<ByLength> for String {
///     fn key(&self) -> &[u8] { self.as_bytes() }
/// }
///
/// let mut set = OrderedSet::with_order(ByLength);
/// assert!(set.insert("abc".to_string()));
/// assert!(!set.insert("xyz".to_string()));
/// assert!(set.contains("def"));
/// ```
pub trait LookupKey<O: TotalOrder + ?Sized> {
    /// The value under which `self` is ordered by `O`.
    fn key(&self) -> &O::OrderedType;
}

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Copied from `std::test_helpers::test_rng`, since these tests rely on the
    /// seed not being the same for every RNG invocation too.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
