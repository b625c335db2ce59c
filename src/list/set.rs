use crate::{LookupKey, OrdStoredKey, OrdTotalOrder, TotalOrder};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::mem;
use core::ops::{BitAnd, BitOr, BitXor, Sub};
use core::ptr;

use super::node::{self, Link, Node};

use crate::polyfill::*;

/// An ordered set based on a sorted singly-linked list.
///
/// Elements are kept in strictly ascending order under the set's total order `O`,
/// and at most one element of each equivalence class of `O` is stored. Every
/// operation that locates an element (insertion, removal, lookup and the bound
/// queries) walks the chain from its head, so each costs time linear in the
/// length of the set.
///
/// It is a logic error for an element or total order to be modified in such a way
/// that the element's ordering relative to any other element, as determined by
/// that total order, changes while they are in the set. This is normally only
/// possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `OrderedSet` that observed the logic error and not result
/// in undefined behavior.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use chainset::OrderedSet;
///
/// let mut books = OrderedSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.remove("The Odyssey");
///
/// // Iterate over everything.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
pub struct OrderedSet<T, O = OrdTotalOrder<<T as OrdStoredKey>::DefaultComparisonKey>> {
    head: Link<T>,
    len: usize,
    order: O,
}

/// An iterator over the elements of an `OrderedSet`, and a position within it.
///
/// This `struct` is created by the [`iter`], [`lower_bound`] and [`upper_bound`]
/// methods on [`OrderedSet`]. See their documentation for more.
///
/// Two iterators are equal when they stand at the same node of the same set, or
/// when both are exhausted; the values of the elements play no part.
///
/// [`iter`]: OrderedSet::iter
/// [`lower_bound`]: OrderedSet::lower_bound
/// [`upper_bound`]: OrderedSet::upper_bound
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    node: Option<&'a Node<T>>,
    len: usize,
}

/// An owning iterator over the elements of an `OrderedSet`.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: OrderedSet#method.into_iter
pub struct IntoIter<T> {
    head: Link<T>,
    len: usize,
}

impl<T: OrdStoredKey> OrderedSet<T> {
    /// Makes a new, empty `OrderedSet` ordered by the [`Ord`] implementation of
    /// `T`'s default comparison type.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OrderedSet::with_order(OrdTotalOrder::new())
    }
}

impl<T, O> OrderedSet<T, O> {
    /// Makes a new, empty `OrderedSet` ordered by the given `order`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::{OrderedSet, OrdTotalOrder, ReverseOrder};
    ///
    /// let mut set = OrderedSet::with_order(ReverseOrder(OrdTotalOrder::<u8>::new()));
    /// set.insert(1);
    /// set.insert(3);
    /// set.insert(2);
    /// assert_eq!(set.to_string(), "{3, 2, 1}");
    /// ```
    #[must_use]
    pub const fn with_order(order: O) -> Self {
        OrderedSet { head: None, len: 0, order }
    }

    /// Returns a reference to the total order by which the set is sorted.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// assert!(v.is_empty());
    /// v.insert(1);
    /// assert!(!v.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing and dropping all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let released = node::release(self.head.take());
        debug_assert_eq!(released, len);
        debug_event!(released, "cleared");
    }

    /// Gets an iterator that visits the elements in the `OrderedSet` in ascending
    /// order, starting from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: self.head.as_deref(), len: self.len }
    }

    /// Returns a reference to the first element in the set, if any.
    /// This element is always the minimum of all elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a reference to the last element in the set, if any.
    /// This element is always the maximum of all elements in the set.
    ///
    /// Unlike [`first`](OrderedSet::first), this walks the whole chain.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Removes the first element from the set and returns it, if any.
    /// The first element is always the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([2, 1]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        let value = node::unlink(&mut self.head)?;
        self.len -= 1;
        trace_event!(len = self.len, "removed");
        Some(value)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// The elements are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3, 4, 5, 6]);
    /// // Keep only the even numbers.
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut link = &mut self.head;
        while let Some(keep) = link.as_deref().map(|current| f(&current.value)) {
            if keep {
                if let Some(current) = link {
                    link = &mut current.next;
                }
            } else {
                let rejected = node::unlink(link);
                self.len -= 1;
                drop(rejected);
            }
        }
        debug_event!(len = self.len, "retained");
    }

    /// Clones every element of `other` onto the end of `self`, which must be
    /// empty, preserving their order.
    fn clone_chain_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.is_empty());
        let mut tail = &mut self.head;
        for value in other {
            tail = &mut tail.insert(Node::boxed(value.clone(), None)).next;
            self.len += 1;
        }
    }

    fn iter_after<F>(&self, before: F) -> Iter<'_, T>
    where
        F: FnMut(&T) -> bool,
    {
        let (node, skipped) = node::skip_while(self.head.as_deref(), before);
        Iter { node, len: self.len - skipped }
    }
}

impl<T: LookupKey<O>, O: TotalOrder> OrderedSet<T, O> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equivalent value, `true` is
    ///   returned.
    /// - If the set already contained an equivalent value, `false` is returned,
    ///   and the set is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let link = node::seek_mut(&mut self.head, &self.order, &value);
        if let Some(present) = link.as_deref() {
            if !self.order.lt(value.key(), present.value.key()) {
                trace_event!(len = self.len, "insert skipped; equivalent present");
                return false;
            }
        }
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        trace_event!(len = self.len, "inserted");
        true
    }

    /// Removes and returns the element in the set, if any, that is equivalent to
    /// the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q: ?Sized + LookupKey<O>>(&mut self, value: &Q) -> Option<T> {
        let link = node::seek_mut(&mut self.head, &self.order, value);
        match link.as_deref() {
            Some(present) if !self.order.lt(value.key(), present.value.key()) => {}
            _ => return None,
        }
        let taken = node::unlink(link)?;
        self.len -= 1;
        trace_event!(len = self.len, "removed");
        Some(taken)
    }

    /// If the set contains an element equivalent to the value, removes it from
    /// the set and drops it. Returns whether such an element was present.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q: ?Sized + LookupKey<O>>(&mut self, value: &Q) -> bool {
        self.take(value).is_some()
    }

    /// Returns a reference to the element in the set, if any, that is
    /// equivalent to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q: ?Sized + LookupKey<O>>(&self, value: &Q) -> Option<&T> {
        self.lower_bound(value)
            .peek()
            .filter(|&found| !self.order.lt(value.key(), found.key()))
    }

    /// Returns `true` if the set contains an element equivalent to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q: ?Sized + LookupKey<O>>(&self, value: &Q) -> bool {
        self.get(value).is_some()
    }

    /// Returns an iterator positioned at the first element that does not order
    /// before the value, or an exhausted iterator if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 3, 5]);
    /// assert_eq!(set.lower_bound(&3).peek(), Some(&3));
    /// assert_eq!(set.lower_bound(&4).peek(), Some(&5));
    /// assert_eq!(set.lower_bound(&6).peek(), None);
    /// ```
    pub fn lower_bound<Q: ?Sized + LookupKey<O>>(&self, value: &Q) -> Iter<'_, T> {
        let order = &self.order;
        self.iter_after(|elem| order.lt(elem.key(), value.key()))
    }

    /// Returns an iterator positioned at the first element that orders after the
    /// value, or an exhausted iterator if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 3, 5]);
    /// assert_eq!(set.upper_bound(&3).peek(), Some(&5));
    /// assert_eq!(set.upper_bound(&0).peek(), Some(&1));
    /// assert_eq!(set.upper_bound(&5).peek(), None);
    /// ```
    pub fn upper_bound<Q: ?Sized + LookupKey<O>>(&self, value: &Q) -> Iter<'_, T> {
        let order = &self.order;
        self.iter_after(|elem| !order.lt(value.key(), elem.key()))
    }

    /// Returns a new set holding every element of `self` and every element of
    /// `other`, ordered by a clone of `self`'s order.
    ///
    /// Where both sets hold equivalent elements, the one from `self` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from(["a", "b", "c"]);
    /// let b = OrderedSet::from(["b", "c", "d"]);
    /// assert_eq!(a.union(&b).to_string(), "{a, b, c, d}");
    /// ```
    #[must_use = "this returns the union as a new set, without modifying either input set"]
    pub fn union(&self, other: &OrderedSet<T, O>) -> OrderedSet<T, O>
    where
        T: Clone,
        O: Clone,
    {
        let mut result = OrderedSet::with_order(self.order.clone());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns a new set holding the elements of `self` that have no equivalent
    /// in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from(["a", "b", "c"]);
    /// let b = OrderedSet::from(["b", "c", "d"]);
    /// assert_eq!(a.difference(&b).to_string(), "{a}");
    /// ```
    #[must_use = "this returns the difference as a new set, without modifying either input set"]
    pub fn difference(&self, other: &OrderedSet<T, O>) -> OrderedSet<T, O>
    where
        T: Clone,
        O: Clone,
    {
        let mut result = OrderedSet::with_order(self.order.clone());
        result.extend(self.iter().filter(|&elem| !other.contains(elem)).cloned());
        result
    }

    /// Returns a new set holding the elements of `self` that have an equivalent
    /// in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from(["a", "b", "c"]);
    /// let b = OrderedSet::from(["b", "c", "d"]);
    /// assert_eq!(a.intersection(&b).to_string(), "{b, c}");
    /// ```
    #[must_use = "this returns the intersection as a new set, without modifying either input set"]
    pub fn intersection(&self, other: &OrderedSet<T, O>) -> OrderedSet<T, O>
    where
        T: Clone,
        O: Clone,
    {
        let mut result = OrderedSet::with_order(self.order.clone());
        result.extend(self.iter().filter(|&elem| other.contains(elem)).cloned());
        result
    }

    /// Returns a new set holding the elements that are in `self` or in `other`,
    /// but not in both.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([2, 3, 4]);
    /// assert!(a.symmetric_difference(&b).iter().eq(&[1, 4]));
    /// ```
    #[must_use = "this returns the difference as a new set, without modifying either input set"]
    pub fn symmetric_difference(&self, other: &OrderedSet<T, O>) -> OrderedSet<T, O>
    where
        T: Clone,
        O: Clone,
    {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|&elem| !self.contains(elem)).cloned());
        result
    }

    /// Returns `true` if the set is a subset of another,
    /// i.e., `other` contains an equivalent of every element in `self`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let sup = OrderedSet::from([1, 2, 3]);
    /// let mut set = OrderedSet::new();
    ///
    /// assert_eq!(set.is_subset(&sup), true);
    /// set.insert(2);
    /// assert_eq!(set.is_subset(&sup), true);
    /// set.insert(4);
    /// assert_eq!(set.is_subset(&sup), false);
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &OrderedSet<T, O>) -> bool {
        self.len <= other.len && self.iter().all(|elem| other.contains(elem))
    }

    /// Returns `true` if the set is a superset of another,
    /// i.e., `self` contains an equivalent of every element in `other`.
    #[must_use]
    pub fn is_superset(&self, other: &OrderedSet<T, O>) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let mut b = OrderedSet::new();
    ///
    /// assert_eq!(a.is_disjoint(&b), true);
    /// b.insert(4);
    /// assert_eq!(a.is_disjoint(&b), true);
    /// b.insert(1);
    /// assert_eq!(a.is_disjoint(&b), false);
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &OrderedSet<T, O>) -> bool {
        !self.iter().any(|elem| other.contains(elem))
    }
}

impl<T, O> Drop for OrderedSet<T, O> {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

impl<T: Clone, O: Clone> Clone for OrderedSet<T, O> {
    fn clone(&self) -> Self {
        let mut clone = OrderedSet::with_order(self.order.clone());
        clone.clone_chain_from(self);
        clone
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.order.clone_from(&other.order);
        self.clone_chain_from(other);
    }
}

impl<T: Hash, O> Hash for OrderedSet<T, O> {
    #[allow(unstable_name_collisions)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_length_prefix(self.len);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T: PartialEq, O> PartialEq for OrderedSet<T, O> {
    fn eq(&self, other: &OrderedSet<T, O>) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq, O> Eq for OrderedSet<T, O> {}

impl<T: PartialOrd, O> PartialOrd for OrderedSet<T, O> {
    fn partial_cmp(&self, other: &OrderedSet<T, O>) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, O> Ord for OrderedSet<T, O> {
    fn cmp(&self, other: &OrderedSet<T, O>) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, O: Default> Default for OrderedSet<T, O> {
    /// Creates an empty `OrderedSet` ordered by the default value of `O`.
    fn default() -> OrderedSet<T, O> {
        OrderedSet::with_order(O::default())
    }
}

impl<T: Debug, O> Debug for OrderedSet<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `{e1, e2, ..., en}`, in the set's order.
///
/// ```
/// use chainset::OrderedSet;
///
/// assert_eq!(OrderedSet::from([2, 1]).to_string(), "{1, 2}");
/// assert_eq!(OrderedSet::<u8>::new().to_string(), "{}");
/// ```
impl<T: Display, O> Display for OrderedSet<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(elem, f)?;
        }
        f.write_str("}")
    }
}

impl<T: LookupKey<O>, O: TotalOrder + Default> FromIterator<T> for OrderedSet<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> OrderedSet<T, O> {
        let mut set = OrderedSet::default();
        set.extend(iter);
        set
    }
}

impl<T: OrdStoredKey, const N: usize> From<[T; N]> for OrderedSet<T> {
    /// Converts a `[T; N]` into an `OrderedSet<T>`.
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set1 = OrderedSet::from([1, 2, 3, 4]);
    /// let set2: OrderedSet<_> = [4, 1, 3, 2, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let mut set = OrderedSet::new();
        set.extend(arr);
        set
    }
}

impl<T: LookupKey<O>, O: TotalOrder> Extend<T> for OrderedSet<T, O> {
    #[inline]
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        iter.into_iter().for_each(move |elem| {
            self.insert(elem);
        });
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, elem: T) {
        self.insert(elem);
    }
}

impl<'a, T: 'a + LookupKey<O> + Copy, O: TotalOrder> Extend<&'a T> for OrderedSet<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &elem: &'a T) {
        self.insert(elem);
    }
}

impl<T, O> IntoIterator for OrderedSet<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `OrderedSet`'s contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter { head: self.head.take(), len: mem::replace(&mut self.len, 0) }
    }
}

impl<'a, T, O> IntoIterator for &'a OrderedSet<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: LookupKey<O> + Clone, O: TotalOrder + Clone> Sub<&OrderedSet<T, O>> for &OrderedSet<T, O> {
    type Output = OrderedSet<T, O>;

    /// Returns the difference of `self` and `rhs` as a new `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([3, 4, 5]);
    ///
    /// let result = &a - &b;
    /// assert_eq!(result, OrderedSet::from([1, 2]));
    /// ```
    fn sub(self, rhs: &OrderedSet<T, O>) -> OrderedSet<T, O> {
        self.difference(rhs)
    }
}

impl<T: LookupKey<O> + Clone, O: TotalOrder + Clone> BitXor<&OrderedSet<T, O>>
    for &OrderedSet<T, O>
{
    type Output = OrderedSet<T, O>;

    /// Returns the symmetric difference of `self` and `rhs` as a new `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([2, 3, 4]);
    ///
    /// let result = &a ^ &b;
    /// assert_eq!(result, OrderedSet::from([1, 4]));
    /// ```
    fn bitxor(self, rhs: &OrderedSet<T, O>) -> OrderedSet<T, O> {
        self.symmetric_difference(rhs)
    }
}

impl<T: LookupKey<O> + Clone, O: TotalOrder + Clone> BitAnd<&OrderedSet<T, O>>
    for &OrderedSet<T, O>
{
    type Output = OrderedSet<T, O>;

    /// Returns the intersection of `self` and `rhs` as a new `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([2, 3, 4]);
    ///
    /// let result = &a & &b;
    /// assert_eq!(result, OrderedSet::from([2, 3]));
    /// ```
    fn bitand(self, rhs: &OrderedSet<T, O>) -> OrderedSet<T, O> {
        self.intersection(rhs)
    }
}

impl<T: LookupKey<O> + Clone, O: TotalOrder + Clone> BitOr<&OrderedSet<T, O>>
    for &OrderedSet<T, O>
{
    type Output = OrderedSet<T, O>;

    /// Returns the union of `self` and `rhs` as a new `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([3, 4, 5]);
    ///
    /// let result = &a | &b;
    /// assert_eq!(result, OrderedSet::from([1, 2, 3, 4, 5]));
    /// ```
    fn bitor(self, rhs: &OrderedSet<T, O>) -> OrderedSet<T, O> {
        self.union(rhs)
    }
}

impl<'a, T> Iter<'a, T> {
    /// Returns the element at the iterator's position without advancing it, or
    /// `None` if the iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.peek(), Some(&1));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.node.map(|node| &node.value)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { node: self.node, len: self.len }
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an exhausted iterator, equal to the end position of every set.
    fn default() -> Self {
        Iter { node: None, len: 0 }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(this), Some(that)) => ptr::eq(this, that),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&Remaining(self.clone())).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn count(self) -> usize {
        self.len
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T> core::iter::TrustedLen for Iter<'_, T> {}

// Lists the elements an iterator has yet to yield.
struct Remaining<'a, T>(Iter<'a, T>);

impl<T: Debug> Debug for Remaining<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = node::unlink(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining = Iter { node: self.head.as_deref(), len: self.len };
        f.debug_tuple("IntoIter").field(&Remaining(remaining)).finish()
    }
}
