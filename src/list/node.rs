use crate::{LookupKey, TotalOrder};
use alloc::boxed::Box;

/// An owning slot in the chain: either the set's head or some node's `next`.
pub(super) type Link<T> = Option<Box<Node<T>>>;

pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    pub(super) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }
}

/// Walks from `link` to the first link whose node does not order strictly before
/// `key`, or to the trailing empty link if every node does.
///
/// The returned link is where a value equivalent to `key` is stored if the chain
/// holds one, and where such a value must be spliced in otherwise.
pub(super) fn seek_mut<'a, T, O, Q>(
    mut link: &'a mut Link<T>,
    order: &O,
    key: &Q,
) -> &'a mut Link<T>
where
    T: LookupKey<O>,
    Q: ?Sized + LookupKey<O>,
    O: TotalOrder,
{
    while link
        .as_deref()
        .map_or(false, |node| order.lt(node.value.key(), key.key()))
    {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// Skips nodes from `node` onward for as long as `before` holds of their values.
///
/// Returns the node the walk stopped at, together with the number of nodes
/// skipped.
pub(super) fn skip_while<'a, T, F>(
    mut node: Option<&'a Node<T>>,
    mut before: F,
) -> (Option<&'a Node<T>>, usize)
where
    F: FnMut(&T) -> bool,
{
    let mut skipped = 0;
    while let Some(current) = node {
        if !before(&current.value) {
            break;
        }
        node = current.next.as_deref();
        skipped += 1;
    }
    (node, skipped)
}

/// Detaches the node held in `link`, relinking its successor in its place.
pub(super) fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;
    *link = node.next.take();
    Some(node.value)
}

/// Releases every node of the chain starting at `link`, one node at a time, and
/// returns how many were released.
///
/// Each node's successor is detached before the node itself is dropped, so that
/// dropping a node never recurses down the rest of the chain.
pub(super) fn release<T>(mut link: Link<T>) -> usize {
    let mut released = 0;
    while let Some(mut node) = link {
        link = node.next.take();
        released += 1;
    }
    released
}
