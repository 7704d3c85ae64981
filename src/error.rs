use thiserror::Error as ThisError;

/// Error enumerates over all invariant violations that
/// [`SortedMap::validate`](crate::SortedMap::validate) can detect.
#[derive(Debug, PartialEq, ThisError)]
pub enum Error<K> {
    /// Fatal case, a red node has a red left child.
    #[error("consecutive red links")]
    ConsecutiveReds,
    /// Fatal case, a red link leans right.
    #[error("right leaning red link")]
    RightLeaningRed,
    /// Fatal case, root is left red after a mutation.
    #[error("root is red")]
    RedRoot,
    /// Fatal case, number of black links differ between left and right
    /// sub-tree of a node.
    #[error("unbalanced blacks, left: {left} right: {right}")]
    UnbalancedBlacks { left: usize, right: usize },
    /// Fatal case, entries are not in sort-order. Carries the offending
    /// pair of keys, in the order they were found.
    #[error("sort error, {0:?} followed by {1:?}")]
    SortError(K, K),
    /// Fatal case, entry count is out of sync with the node graph.
    #[error("count mismatch, count: {count} nodes: {nodes}")]
    CountMismatch { count: usize, nodes: usize },
}
