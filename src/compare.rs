use std::cmp::Ordering;

/// Comparator defines the total order used to sort keys in a
/// [`SortedMap`](crate::SortedMap).
///
/// Implementations must be consistent with a strict total order, that is
/// antisymmetric, transitive and trichotomous. This is not checked at
/// runtime, a comparator that breaks the contract leaves the tree in an
/// unspecified, though memory safe, state.
///
/// Any closure of the shape `Fn(&K, &K) -> Ordering` is a comparator:
///
/// ```
/// use llrb_sortedmap::SortedMap;
///
/// let mut map = SortedMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.set(1, "one");
/// map.set(2, "two");
/// assert_eq!(map.min(), Some((&2, &"two")));
/// ```
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural ordering, as defined by the key's [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K> Comparator<K> for Natural
where
    K: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
