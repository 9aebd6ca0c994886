use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-heap of candidate nodes keyed by tentative distance
///
/// Entries are never decreased in place: a better distance is pushed as a new
/// entry and the outdated one is left behind, to be discarded by the caller
/// when it surfaces (lazy deletion). Equal distances pop in ascending node
/// order.
#[derive(Debug)]
pub struct Frontier<N, D>
where
    N: Copy + Ord + Debug,
    D: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(D, N)>>,
    peak_len: usize,
}

impl<N, D> Frontier<N, D>
where
    N: Copy + Ord + Debug,
    D: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            peak_len: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest number of entries held at once since creation
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    /// Pushes a node with its tentative distance, returning the new length
    pub fn push(&mut self, node: N, distance: D) -> usize {
        self.heap.push(Reverse((distance, node)));
        self.peak_len = self.peak_len.max(self.heap.len());
        self.heap.len()
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, D)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(N, D)> {
        self.heap.peek().map(|Reverse((distance, node))| (*node, *distance))
    }
}

impl<N, D> Default for Frontier<N, D>
where
    N: Copy + Ord + Debug,
    D: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> Extend<(N, D)> for Frontier<N, D>
where
    N: Copy + Ord + Debug,
    D: Copy + Ord + Debug,
{
    fn extend<I: IntoIterator<Item = (N, D)>>(&mut self, entries: I) {
        for (node, distance) in entries {
            self.push(node, distance);
        }
    }
}
