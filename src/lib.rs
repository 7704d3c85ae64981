//! Ordered key-value map on a left-leaning-red-black tree, and an
//! unordered hash set.
//!
//! ```
//! use llrb_sortedmap::SortedMap;
//!
//! let mut map = SortedMap::new();
//! map.set(2, "two");
//! map.set(1, "one");
//! assert_eq!(map.to_string(), "{1: one, 2: two}");
//! assert_eq!(map.floor(&5), Some((&2, &"two")));
//! ```

mod compare;
mod depth;
mod error;
mod iter;
mod llrb;
mod set;

pub use crate::compare::{Comparator, Natural};
pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::iter::{Iter, Keys, Range, RangeRev, Values};
pub use crate::llrb::{SortedMap, Stats};
pub use crate::set::Set;

#[cfg(test)]
mod set_test;
