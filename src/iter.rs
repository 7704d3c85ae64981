use std::{
    cmp::Ordering,
    fmt,
    iter::{FromIterator, FusedIterator},
    ops::Bound,
};

use crate::compare::{Comparator, Natural};
use crate::llrb::{Node, SortedMap};

/// Iterator over entries of a [`SortedMap`], in ascending key order from
/// the front and descending key order from the back.
///
/// Nodes are visited lazily, one per call to `next()` or `next_back()`,
/// using an explicit stack of pending ancestors for either end.
pub struct Iter<'a, K, V> {
    root: Option<&'a Node<K, V>>,
    front: Option<Vec<&'a Node<K, V>>>,
    back: Option<Vec<&'a Node<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Iter<'a, K, V> {
        Iter {
            root,
            front: None,
            back: None,
            remaining: len,
        }
    }
}

fn push_lefts<'a, K, V>(stack: &mut Vec<&'a Node<K, V>>, mut node: Option<&'a Node<K, V>>) {
    while let Some(nref) = node {
        stack.push(nref);
        node = nref.left_deref();
    }
}

fn push_rights<'a, K, V>(stack: &mut Vec<&'a Node<K, V>>, mut node: Option<&'a Node<K, V>>) {
    while let Some(nref) = node {
        stack.push(nref);
        node = nref.right_deref();
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let root = self.root;
        let stack = self.front.get_or_insert_with(|| {
            let mut stack = vec![];
            push_lefts(&mut stack, root);
            stack
        });
        let node = stack.pop()?;
        push_lefts(stack, node.right_deref());
        self.remaining -= 1;
        Some(node.as_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let root = self.root;
        let stack = self.back.get_or_insert_with(|| {
            let mut stack = vec![];
            push_rights(&mut stack, root);
            stack
        });
        let node = stack.pop()?;
        push_rights(stack, node.left_deref());
        self.remaining -= 1;
        Some(node.as_entry())
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Iterator over keys of a [`SortedMap`], in ascending order.
pub struct Keys<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(iter: Iter<'a, K, V>) -> Keys<'a, K, V> {
        Keys { iter }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(key, _)| key)
    }
}

/// Iterator over values of a [`SortedMap`], in ascending key order.
pub struct Values<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(iter: Iter<'a, K, V>) -> Values<'a, K, V> {
        Values { iter }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

fn above_low<K, C>(cmp: &C, low: &Bound<K>, key: &K) -> bool
where
    C: Comparator<K>,
{
    match low {
        Bound::Included(low) => cmp.compare(key, low) != Ordering::Less,
        Bound::Excluded(low) => cmp.compare(key, low) == Ordering::Greater,
        Bound::Unbounded => true,
    }
}

fn below_high<K, C>(cmp: &C, high: &Bound<K>, key: &K) -> bool
where
    C: Comparator<K>,
{
    match high {
        Bound::Included(high) => cmp.compare(key, high) != Ordering::Greater,
        Bound::Excluded(high) => cmp.compare(key, high) == Ordering::Less,
        Bound::Unbounded => true,
    }
}

/// Iterator over a sub-set of entries in [`SortedMap`], in ascending key
/// order. Created by [`SortedMap::range`].
///
/// Sub-trees that fall entirely below the low bound are never descended,
/// and iteration stops at the first key beyond the high bound.
pub struct Range<'a, K, V, C> {
    cmp: &'a C,
    root: Option<&'a Node<K, V>>,
    stack: Option<Vec<&'a Node<K, V>>>,
    low: Bound<K>,
    high: Bound<K>,
}

impl<'a, K, V, C> Range<'a, K, V, C>
where
    C: Comparator<K>,
{
    pub(crate) fn new(
        cmp: &'a C,
        root: Option<&'a Node<K, V>>,
        low: Bound<K>,
        high: Bound<K>,
    ) -> Range<'a, K, V, C> {
        Range {
            cmp,
            root,
            stack: None,
            low,
            high,
        }
    }

    /// Iterate the same bounds in descending key order, starting afresh
    /// from the high end.
    pub fn rev(self) -> RangeRev<'a, K, V, C> {
        RangeRev {
            cmp: self.cmp,
            root: self.root,
            stack: None,
            low: self.low,
            high: self.high,
        }
    }
}

// push nodes that satisfy the low bound along the left spine, skip to
// the right child of nodes that don't.
fn descend_low<'a, K, V, C>(
    cmp: &C,
    low: &Bound<K>,
    stack: &mut Vec<&'a Node<K, V>>,
    mut node: Option<&'a Node<K, V>>,
) where
    C: Comparator<K>,
{
    while let Some(nref) = node {
        if above_low(cmp, low, &nref.key) {
            stack.push(nref);
            node = nref.left_deref();
        } else {
            node = nref.right_deref();
        }
    }
}

fn descend_high<'a, K, V, C>(
    cmp: &C,
    high: &Bound<K>,
    stack: &mut Vec<&'a Node<K, V>>,
    mut node: Option<&'a Node<K, V>>,
) where
    C: Comparator<K>,
{
    while let Some(nref) = node {
        if below_high(cmp, high, &nref.key) {
            stack.push(nref);
            node = nref.right_deref();
        } else {
            node = nref.left_deref();
        }
    }
}

impl<'a, K, V, C> Iterator for Range<'a, K, V, C>
where
    C: Comparator<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (cmp, root, low) = (self.cmp, self.root, &self.low);
        let stack = self.stack.get_or_insert_with(|| {
            let mut stack = vec![];
            descend_low(cmp, low, &mut stack, root);
            stack
        });
        let node = stack.pop()?;
        if !below_high(cmp, &self.high, &node.key) {
            stack.clear();
            return None;
        }
        descend_low(cmp, &self.low, stack, node.right_deref());
        Some(node.as_entry())
    }
}

impl<'a, K, V, C> FusedIterator for Range<'a, K, V, C> where C: Comparator<K> {}

/// Iterator over a sub-set of entries in [`SortedMap`], in descending key
/// order. Created by [`Range::rev`].
pub struct RangeRev<'a, K, V, C> {
    cmp: &'a C,
    root: Option<&'a Node<K, V>>,
    stack: Option<Vec<&'a Node<K, V>>>,
    low: Bound<K>,
    high: Bound<K>,
}

impl<'a, K, V, C> Iterator for RangeRev<'a, K, V, C>
where
    C: Comparator<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (cmp, root, high) = (self.cmp, self.root, &self.high);
        let stack = self.stack.get_or_insert_with(|| {
            let mut stack = vec![];
            descend_high(cmp, high, &mut stack, root);
            stack
        });
        let node = stack.pop()?;
        if !above_low(cmp, &self.low, &node.key) {
            stack.clear();
            return None;
        }
        descend_high(cmp, &self.high, stack, node.left_deref());
        Some(node.as_entry())
    }
}

impl<'a, K, V, C> FusedIterator for RangeRev<'a, K, V, C> where C: Comparator<K> {}

impl<'a, K, V, C> IntoIterator for &'a SortedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Render entries in ascending key order, as `{k1: v1, k2: v2}`.
impl<K, V, C> fmt::Display for SortedMap<K, V, C>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K, V, C> fmt::Debug for SortedMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for SortedMap<K, V, Natural>
where
    K: Ord,
{
    fn default() -> Self {
        SortedMap::new()
    }
}

impl<K, V> FromIterator<(K, V)> for SortedMap<K, V, Natural>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        SortedMap::load_from(Natural, iter)
    }
}

impl<K, V, C> Extend<(K, V)> for SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
