use crate::{LookupKey, TotalOrder};
use core::{borrow::Borrow, cmp::Ordering, fmt, marker::PhantomData};

/// A total order that reverses the order `O`.
///
/// # Examples
///
/// ```
/// use chainset::{OrderedSet, OrdTotalOrder, ReverseOrder};
///
/// let mut set = OrderedSet::with_order(ReverseOrder(OrdTotalOrder::<i32>::new()));
/// set.insert(1);
/// set.insert(3);
/// set.insert(2);
/// assert!(set.iter().eq(&[3, 2, 1]));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder<O>(pub O);

impl<O: TotalOrder> TotalOrder for ReverseOrder<O> {
    type OrderedType = O::OrderedType;

    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.lt(that, this)
    }

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.0.cmp(that, this)
    }
}

impl<O: TotalOrder, K: ?Sized + LookupKey<O>> LookupKey<ReverseOrder<O>> for K {
    fn key(&self) -> &O::OrderedType {
        LookupKey::<O>::key(self)
    }
}

/// A total order given by a "less than" predicate over `T`.
///
/// The predicate must be a strict weak order. Values for which it returns
/// `false` in both directions are equivalent, so the set keeps only the first
/// of them to be inserted.
///
/// # Examples
///
/// ```
/// use chainset::{OrderBy, OrderedSet};
///
/// let mut set = OrderedSet::with_order(OrderBy::new(|a: &str, b: &str| {
///     a.to_ascii_lowercase() < b.to_ascii_lowercase()
/// }));
/// set.insert("Banana");
/// set.insert("apple");
/// assert!(!set.insert("APPLE"));
/// assert!(set.contains("BANANA"));
/// assert_eq!(set.to_string(), "{apple, Banana}");
/// ```
pub struct OrderBy<T: ?Sized, F> {
    less: F,
    marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> OrderBy<T, F> {
    /// Makes the order in which `a` precedes `b` whenever `less(a, b)`.
    pub const fn new(less: F) -> Self {
        OrderBy { less, marker: PhantomData }
    }
}

impl<T: ?Sized, F: Clone> Clone for OrderBy<T, F> {
    fn clone(&self) -> Self {
        OrderBy { less: self.less.clone(), marker: PhantomData }
    }
}

impl<T: ?Sized, F: Copy> Copy for OrderBy<T, F> {}

impl<T: ?Sized, F> fmt::Debug for OrderBy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> TotalOrder for OrderBy<T, F> {
    type OrderedType = T;

    fn lt(&self, this: &T, that: &T) -> bool {
        (self.less)(this, that)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool, K: ?Sized + Borrow<T>> LookupKey<OrderBy<T, F>> for K {
    fn key(&self) -> &T {
        self.borrow()
    }
}
