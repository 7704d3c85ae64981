use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt, mem,
    ops::{Bound, DerefMut, RangeBounds},
};

use log::{debug, error, trace};

use crate::compare::{Comparator, Natural};
use crate::depth::Depth;
use crate::error::Error;
use crate::iter::{Iter, Keys, Range, Values};

/// SortedMap manage a single instance of in-memory ordered map using
/// [left-leaning-red-black][llrb] tree.
///
/// Keys are ordered by a [`Comparator`], which defaults to the key's
/// natural [`Ord`] ordering. Put, get, delete and the ordered queries
/// (min, max, floor, ceiling) are all O(log n).
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct SortedMap<K, V, C = Natural> {
    root: Option<Box<Node<K, V>>>,
    n_count: usize, // number of entries in the tree.
    cmp: C,
}

/// Different ways to construct a new SortedMap instance.
impl<K, V> SortedMap<K, V, Natural>
where
    K: Ord,
{
    /// Create an empty instance of SortedMap, keys are sorted in their
    /// natural order.
    pub fn new() -> SortedMap<K, V> {
        SortedMap::with_comparator(Natural)
    }
}

impl<K, V, C> SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Create an empty instance of SortedMap, keys are sorted using
    /// `cmp`.
    pub fn with_comparator(cmp: C) -> SortedMap<K, V, C> {
        SortedMap {
            root: Default::default(),
            n_count: Default::default(),
            cmp,
        }
    }

    /// Create a new instance of SortedMap, sorted using `cmp`, and load it
    /// with entries from `iter`. Later entries overwrite earlier entries
    /// for the same key.
    pub fn load_from<I>(cmp: C, iter: I) -> SortedMap<K, V, C>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = SortedMap::with_comparator(cmp);
        for (key, value) in iter {
            map.set(key, value);
        }
        debug!("load_from(): loaded {} entries", map.n_count);
        map
    }
}

/// Maintenance API.
impl<K, V, C> SortedMap<K, V, C> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this instance is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        debug!("clear(): dropping {} entries", self.n_count);
        self.root = None;
        self.n_count = 0;
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }
}

type Upsert<K, V> = (Box<Node<K, V>>, Option<V>);

type Delete<K, V> = (Option<Box<Node<K, V>>>, Option<V>);

type Delmin<K, V> = (Option<Box<Node<K, V>>>, Option<Box<Node<K, V>>>);

/// Write operations on SortedMap instance.
impl<K, V, C> SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old_value) = Self::upsert(&self.cmp, self.root.take(), key, value);
        root.set_black();
        self.root = Some(root);
        if old_value.is_none() {
            self.n_count += 1;
        }
        old_value
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root is black and no red link leans right.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Entry count matches the number of nodes.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>>
    where
        K: Clone + fmt::Debug,
    {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());
        match self.validate_all(&mut stats) {
            Ok(()) => Ok(stats),
            Err(err) => {
                error!("validate(): {}", err);
                Err(err)
            }
        }
    }
}

/// Range operations on SortedMap instance.
impl<K, V, C> SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Range over all entries from low to high, both bounds follow the
    /// [`RangeBounds`] they are given in. `map.range(from..=to)` iterates
    /// keys in the closed interval.
    pub fn range<Q, R>(&self, range: R) -> Range<K, V, C>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: ToOwned<Owned = K> + ?Sized,
    {
        let low: Bound<K> = match range.start_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let high: Bound<K> = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        Range::new(&self.cmp, self.root.as_deref(), low, high)
    }
}

/// Delete and read operations on SortedMap instance. Lookups accept any
/// borrowed form of the key that the comparator can order.
impl<K, V, C> SortedMap<K, V, C> {
    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is a no-op and returns None.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        if !self.contains_key(key) {
            trace!("delete(): key not found");
            return None;
        }

        let mut root = self.root.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, old_value) = Self::do_delete(&self.cmp, root, key);
        self.root = blacken(root);
        if old_value.is_some() {
            self.n_count -= 1;
        }
        old_value
    }

    /// Delete the entry with smallest key and return it.
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, old_node) = Self::do_delete_min(Some(root));
        self.root = blacken(root);
        old_node.map(|node| {
            self.n_count -= 1;
            node.into_entry()
        })
    }

    /// Delete the entry with largest key and return it.
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, old_node) = Self::do_delete_max(Some(root));
        self.root = blacken(root);
        old_node.map(|node| {
            self.n_count -= 1;
            node.into_entry()
        })
    }

    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_node(key).map(|node| &node.value)
    }

    /// Get a mutable reference to the value for key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let cmp = &self.cmp;
        let mut node = self.root.as_deref_mut();
        while let Some(nref) = node {
            node = match cmp.compare(key, nref.key.borrow()) {
                Ordering::Less => nref.left.as_deref_mut(),
                Ordering::Greater => nref.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut nref.value),
            };
        }
        None
    }

    /// Check whether key is present in this instance.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_node(key).is_some()
    }

    /// Return the entry with smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left_deref() {
            node = left;
        }
        Some(node.as_entry())
    }

    /// Return the entry with largest key.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right_deref() {
            node = right;
        }
        Some(node.as_entry())
    }

    /// Return the entry with largest key less than or equal to `key`.
    pub fn floor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Self::floor_node(&self.cmp, self.root.as_deref(), key).map(Node::as_entry)
    }

    /// Return the entry with smallest key greater than or equal to `key`.
    pub fn ceiling<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        Self::ceiling_node(&self.cmp, self.root.as_deref(), key).map(Node::as_entry)
    }
}

/// Traversal over SortedMap instance, independent of the comparator.
impl<K, V, C> SortedMap<K, V, C> {
    /// Return an iterator over all entries in ascending key order. The
    /// iterator is double ended, `iter().rev()` walks in descending order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(self.root.as_deref(), self.n_count)
    }

    /// Return an iterator over all entries in descending key order.
    pub fn reverse(&self) -> std::iter::Rev<Iter<K, V>> {
        self.iter().rev()
    }

    /// Return an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys::new(self.iter())
    }

    /// Return an iterator over all values in ascending key order.
    pub fn values(&self) -> Values<K, V> {
        Values::new(self.iter())
    }
}

impl<K, V, C> SortedMap<K, V, C> {
    fn get_node<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = match self.cmp.compare(key, nref.key.borrow()) {
                Ordering::Less => nref.left_deref(),
                Ordering::Greater => nref.right_deref(),
                Ordering::Equal => return Some(nref),
            };
        }
        None
    }

    fn floor_node<'a, Q>(
        cmp: &C,
        node: Option<&'a Node<K, V>>,
        key: &Q,
    ) -> Option<&'a Node<K, V>>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let node = node?;
        match cmp.compare(key, node.key.borrow()) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::floor_node(cmp, node.left_deref(), key),
            Ordering::Greater => Self::floor_node(cmp, node.right_deref(), key).or(Some(node)),
        }
    }

    fn ceiling_node<'a, Q>(
        cmp: &C,
        node: Option<&'a Node<K, V>>,
        key: &Q,
    ) -> Option<&'a Node<K, V>>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let node = node?;
        match cmp.compare(key, node.key.borrow()) {
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::ceiling_node(cmp, node.right_deref(), key),
            Ordering::Less => Self::ceiling_node(cmp, node.left_deref(), key).or(Some(node)),
        }
    }

    // key must be present in the sub-tree rooted at node.
    fn do_delete<Q>(cmp: &C, mut node: Box<Node<K, V>>, key: &Q) -> Delete<K, V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        if cmp.compare(key, node.key.borrow()) == Ordering::Less {
            let left = node.left_deref();
            if !is_red(left) && !is_red(left.and_then(Node::left_deref)) {
                node = Self::move_red_left(node);
            }
            let (left, old_value) = match node.left.take() {
                Some(left) => Self::do_delete(cmp, left, key),
                None => (None, None),
            };
            node.left = left;
            return (Some(Self::fixup(node)), old_value);
        }

        if is_red(node.left_deref()) {
            node = Self::rotate_right(node);
        }

        if cmp.compare(key, node.key.borrow()) == Ordering::Equal && node.right.is_none() {
            let (_, value) = node.into_entry();
            return (None, Some(value));
        }

        let right = node.right_deref();
        if right.is_some() && !is_red(right) && !is_red(right.and_then(Node::left_deref)) {
            node = Self::move_red_right(node);
        }

        if cmp.compare(key, node.key.borrow()) == Ordering::Equal {
            // replace this entry with its in-order successor.
            let (right, successor) = Self::do_delete_min(node.right.take());
            node.right = right;
            let old_value = successor.map(|successor| {
                let (skey, svalue) = successor.into_entry();
                node.key = skey;
                node.set_value(svalue)
            });
            (Some(Self::fixup(node)), old_value)
        } else {
            let (right, old_value) = match node.right.take() {
                Some(right) => Self::do_delete(cmp, right, key),
                None => (None, None),
            };
            node.right = right;
            (Some(Self::fixup(node)), old_value)
        }
    }

    fn do_delete_min(node: Option<Box<Node<K, V>>>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            return (node.right.take(), Some(node));
        }
        let left = node.left_deref();
        if !is_red(left) && !is_red(left.and_then(Node::left_deref)) {
            node = Self::move_red_left(node);
        }
        let (left, old_node) = Self::do_delete_min(node.left.take());
        node.left = left;
        (Some(Self::fixup(node)), old_node)
    }

    fn do_delete_max(node: Option<Box<Node<K, V>>>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if is_red(node.left_deref()) {
            node = Self::rotate_right(node);
        }
        if node.right.is_none() {
            return (node.left.take(), Some(node));
        }
        let right = node.right_deref();
        if !is_red(right) && !is_red(right.and_then(Node::left_deref)) {
            node = Self::move_red_right(node);
        }
        let (right, old_node) = Self::do_delete_max(node.right.take());
        node.right = right;
        (Some(Self::fixup(node)), old_node)
    }

    fn validate_tree(
        node: Option<&Node<K, V>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        nodes: &mut usize,
        stats: &mut Stats,
    ) -> Result<usize, Error<K>> {
        let node = match node {
            None => {
                if let Some(depths) = stats.depths.as_mut() {
                    depths.sample(depth);
                }
                return Ok(nb);
            }
            Some(node) => node,
        };
        *nodes += 1;

        let red = node.is_red();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if is_red(node.right_deref()) {
            return Err(Error::RightLeaningRed);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left_deref(), node.right_deref());
        let lblacks = Self::validate_tree(left, red, nb, depth + 1, nodes, stats)?;
        let rblacks = Self::validate_tree(right, red, nb, depth + 1, nodes, stats)?;
        if lblacks != rblacks {
            return Err(Error::UnbalancedBlacks {
                left: lblacks,
                right: rblacks,
            });
        }
        Ok(lblacks)
    }

    //--------- rotation routines for 2-3 algorithm ----------------

    fn walkuprot_23(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            node = Self::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_red(left.and_then(Node::left_deref)) {
            node = Self::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Self::flip(node.deref_mut())
        }
        node
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match node.right.take() {
            Some(x) => x,
            None => panic!("rotate_left(): rotating a missing link ? Call the programmer"),
        };
        node.right = x.left.take();
        x.color = node.color;
        node.set_red();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match node.left.take() {
            Some(x) => x,
            None => panic!("rotate_right(): rotating a missing link ? Call the programmer"),
        };
        node.left = x.right.take();
        x.color = node.color;
        node.set_red();
        x.right = Some(node);
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //     /      \              /      \
    //   left    right         left    right
    //
    fn flip(node: &mut Node<K, V>) {
        if let Some(left) = node.left.as_mut() {
            left.toggle_link();
        }
        if let Some(right) = node.right.as_mut() {
            right.toggle_link();
        }
        node.toggle_link();
    }

    // Same as walkuprot_23, except that a red right link is always rotated,
    // delete can hand back a red right child alongside a red left chain.
    fn fixup(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node = if is_red(node.right_deref()) {
            Self::rotate_left(node)
        } else {
            node
        };
        node = {
            let left = node.left_deref();
            if is_red(left) && is_red(left.and_then(Node::left_deref)) {
                Self::rotate_right(node)
            } else {
                node
            }
        };
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Self::flip(node.deref_mut());
        }
        node
    }

    fn move_red_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Self::flip(node.deref_mut());
        let right = node.right_deref();
        if is_red(right.and_then(Node::left_deref)) {
            node.right = node.right.take().map(Self::rotate_right);
            node = Self::rotate_left(node);
            Self::flip(node.deref_mut());
        }
        node
    }

    fn move_red_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Self::flip(node.deref_mut());
        let left = node.left_deref();
        if is_red(left.and_then(Node::left_deref)) {
            node = Self::rotate_right(node);
            Self::flip(node.deref_mut());
        }
        node
    }
}

impl<K, V, C> SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    fn upsert(cmp: &C, node: Option<Box<Node<K, V>>>, key: K, value: V) -> Upsert<K, V> {
        let mut node = match node {
            None => return (Node::new(key, value, Color::Red), None),
            Some(node) => node,
        };

        let old_value = match cmp.compare(&key, &node.key) {
            Ordering::Less => {
                let (left, o) = Self::upsert(cmp, node.left.take(), key, value);
                node.left = Some(left);
                o
            }
            Ordering::Greater => {
                let (right, o) = Self::upsert(cmp, node.right.take(), key, value);
                node.right = Some(right);
                o
            }
            Ordering::Equal => Some(node.set_value(value)),
        };
        (Self::walkuprot_23(node), old_value)
    }

    fn validate_all(&self, stats: &mut Stats) -> Result<(), Error<K>>
    where
        K: Clone,
    {
        let root = self.root.as_deref();
        if is_red(root) {
            return Err(Error::RedRoot);
        }

        let mut nodes = 0;
        let blacks = Self::validate_tree(root, false, 0, 0, &mut nodes, stats)?;
        stats.set_blacks(blacks);
        if nodes != self.n_count {
            let count = self.n_count;
            return Err(Error::CountMismatch { count, nodes });
        }

        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(prev) = prev {
                if self.cmp.compare(prev, key) != Ordering::Less {
                    return Err(Error::SortError(prev.clone(), key.clone()));
                }
            }
            prev = Some(key);
        }
        Ok(())
    }
}

fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, Node::is_red)
}

fn blacken<K, V>(root: Option<Box<Node<K, V>>>) -> Option<Box<Node<K, V>>> {
    root.map(|mut root| {
        root.set_black();
        root
    })
}

/// Color of the link from parent to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Node corresponds to a single entry in SortedMap instance.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    color: Color,                   // store: color of the link from parent
    left: Option<Box<Node<K, V>>>,  // store: left child
    right: Option<Box<Node<K, V>>>, // store: right child
}

// Primary operations on a single node.
impl<K, V> Node<K, V> {
    // CREATE operation
    fn new(key: K, value: V, color: Color) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            color,
            left: None,
            right: None,
        })
    }

    // detach this node from the tree, and return its entry.
    fn into_entry(self: Box<Self>) -> (K, V) {
        let node = *self;
        (node.key, node.value)
    }

    #[inline]
    pub(crate) fn as_entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(crate) fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    // overwrite value in place and return the old value.
    #[inline]
    fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    #[inline]
    fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.color = match self.color {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    #[inline]
    fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Statistics on [`SortedMap`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`SortedMap::stats`] method.
/// * To get full statisics via [`SortedMap::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`SortedMap`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `SortedMap<K, V>`.
    /// Although the node overhead is constant, the node size varies based
    /// on key and value types. EG:
    ///
    /// ```
    /// use llrb_sortedmap::SortedMap;
    /// let map: SortedMap<u64, i128> = SortedMap::new();
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// // two child links and the color tag fill the rest.
    /// assert!(map.stats().node_size() >= 8 + 16 + 16 + 1);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black links from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
