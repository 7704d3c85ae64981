use std::{
    collections::{hash_set, HashSet},
    fmt,
    hash::Hash,
    iter::FromIterator,
};

/// Set is an unordered collection of unique elements, backed by a hash
/// table. Membership, insert and remove are O(1) on average.
///
/// Set shares nothing with [`SortedMap`](crate::SortedMap), iteration
/// order is unspecified.
#[derive(Clone)]
pub struct Set<T>
where
    T: Eq + Hash,
{
    items: HashSet<T>,
}

/// Different ways to construct a new Set instance.
impl<T> Set<T>
where
    T: Eq + Hash,
{
    /// Create an empty set.
    pub fn new() -> Set<T> {
        Set {
            items: HashSet::new(),
        }
    }

    /// Create an empty set, with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Set<T> {
        Set {
            items: HashSet::with_capacity(capacity),
        }
    }
}

/// Element operations.
impl<T> Set<T>
where
    T: Eq + Hash,
{
    /// Insert elem, return false if it was already present.
    pub fn insert(&mut self, elem: T) -> bool {
        self.items.insert(elem)
    }

    /// Remove elem, return false if it was not present.
    pub fn remove(&mut self, elem: &T) -> bool {
        self.items.remove(elem)
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.items.contains(elem)
    }

    /// Check whether every one of `elems` is in this set. True for an
    /// empty `elems`.
    pub fn contains_all<'a, I>(&self, elems: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elems.into_iter().all(|elem| self.items.contains(elem))
    }

    /// Check whether at least one of `elems` is in this set. False for an
    /// empty `elems`.
    pub fn contains_any<'a, I>(&self, elems: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elems.into_iter().any(|elem| self.items.contains(elem))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Return an iterator over all elements, in no particular order.
    pub fn iter(&self) -> hash_set::Iter<T> {
        self.items.iter()
    }

    /// Return a copy of all elements, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

/// Set algebra, each operation returns a new set.
impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let (big, small) = if self.len() < other.len() {
            (other, self)
        } else {
            (self, other)
        };
        let mut out = big.clone();
        out.items.extend(small.items.iter().cloned());
        out
    }

    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (small, big) = if self.len() > other.len() {
            (other, self)
        } else {
            (self, other)
        };
        let items = small.items.iter().filter(|elem| big.items.contains(*elem));
        items.cloned().collect()
    }

    /// Elements in this set that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        let items = self.items.iter().filter(|elem| !other.items.contains(*elem));
        items.cloned().collect()
    }

    /// Elements in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        let items = self.items.symmetric_difference(&other.items);
        items.cloned().collect()
    }
}

/// Containment predicates.
impl<T> Set<T>
where
    T: Eq + Hash,
{
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.items.iter().all(|elem| other.items.contains(elem))
    }

    /// Subset of `other` and not equal to it.
    pub fn is_proper_subset(&self, other: &Set<T>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    /// Superset of `other` and not equal to it.
    pub fn is_proper_superset(&self, other: &Set<T>) -> bool {
        other.is_proper_subset(self)
    }

    /// No element in common.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        let (small, big) = if self.len() > other.len() {
            (other, self)
        } else {
            (self, other)
        };
        !small.items.iter().any(|elem| big.items.contains(elem))
    }
}

/// In-place variants of union, difference and intersection.
impl<T> Set<T>
where
    T: Eq + Hash,
{
    /// Add every element of `other` into this set.
    pub fn extend_from(&mut self, other: &Set<T>)
    where
        T: Clone,
    {
        self.items.extend(other.items.iter().cloned());
    }

    /// Remove every element of `other` from this set.
    pub fn remove_all(&mut self, other: &Set<T>) {
        if self.len() < other.len() {
            self.items.retain(|elem| !other.items.contains(elem));
        } else {
            for elem in other.items.iter() {
                self.items.remove(elem);
            }
        }
    }

    /// Keep only the elements that are also in `other`.
    pub fn retain_all(&mut self, other: &Set<T>) {
        self.items.retain(|elem| other.items.contains(elem));
    }
}

impl<T> PartialEq for Set<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Eq for Set<T> where T: Eq + Hash {}

impl<T> Default for Set<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Set::new()
    }
}

impl<T> FromIterator<T> for Set<T>
where
    T: Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Set {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Set<T>
where
    T: Eq + Hash,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter)
    }
}

impl<'a, T> IntoIterator for &'a Set<T>
where
    T: Eq + Hash,
{
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> hash_set::Iter<'a, T> {
        self.items.iter()
    }
}

/// Render elements as `[a, b, c]`, in no particular order.
impl<T> fmt::Display for Set<T>
where
    T: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", elem)?;
        }
        f.write_str("]")
    }
}

impl<T> fmt::Debug for Set<T>
where
    T: Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
