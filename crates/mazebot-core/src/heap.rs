//! Binary min-heap priority queue over `(cell, priority)` pairs, ported
//! from `binary_heap_t`/`insert`/`delete_min`/`heapify_up`/`heapify_down`
//! in the original. Array-backed; A* and flood-fill each own one for the
//! duration of a single search and never let it escape.

use crate::alloc_shim::Vec;
use crate::grid::CellId;

/// Sentinel returned by [`MinHeap::find_index_of_cell`] when the cell is
/// not present, matching the original's out-of-band index constant.
pub const NOT_FOUND: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapNode {
    cell: CellId,
    priority: u32,
}

/// A binary min-heap with a fixed capacity, matching the original's
/// array-backed heap with an explicit `capacity` field rather than a
/// growable allocation — A* and flood-fill never hold more than `R*C`
/// entries open at once, so callers size the heap to the grid up front.
pub struct MinHeap {
    nodes: Vec<HeapNode>,
    capacity: usize,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn children(i: usize) -> (usize, usize) {
        (2 * i + 1, 2 * i + 2)
    }

    /// `insert(h, cell, priority)`: append and sift up. Fails silently and
    /// logs if the heap is at capacity — in a correctly-sized heap
    /// (`capacity == R*C`) this is unreachable, matching the error
    /// taxonomy's "heap full" policy.
    pub fn insert(&mut self, cell: CellId, priority: u32) {
        if self.nodes.len() >= self.capacity {
            log::warn!("heap at capacity ({}), dropping insert of cell {cell}", self.capacity);
            return;
        }
        self.nodes.push(HeapNode { cell, priority });
        self.sift_up(self.nodes.len() - 1);
    }

    /// `peek(h)`: the root cell without removal.
    pub fn peek(&self) -> Option<CellId> {
        self.nodes.first().map(|n| n.cell)
    }

    /// `pop_min(h)`: remove and return the root's cell, sifting down.
    pub fn pop_min(&mut self) -> Option<CellId> {
        if self.nodes.is_empty() {
            return None;
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = self.nodes.pop().unwrap();
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(min.cell)
    }

    /// `find_index_of_cell(h, cell)`: linear scan, [`NOT_FOUND`] when
    /// absent.
    pub fn find_index_of_cell(&self, cell: CellId) -> usize {
        self.nodes
            .iter()
            .position(|n| n.cell == cell)
            .unwrap_or(NOT_FOUND)
    }

    /// Update an existing entry's priority in place and restore heap
    /// order. Used by A*/flood-fill when a cheaper path to an open-set
    /// member is found, rather than removing and reinserting it.
    pub fn update_priority(&mut self, index: usize, priority: u32) {
        self.nodes[index].priority = priority;
        self.sift_up(index);
        self.sift_down(index);
    }

    /// `sift_up(h, i)`: maintain heap order after an append or priority
    /// decrease. Exposed publicly because callers sometimes mutate an
    /// entry's priority directly before restoring order themselves.
    pub fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.nodes[p].priority <= self.nodes[i].priority {
                break;
            }
            self.nodes.swap(p, i);
            i = p;
        }
    }

    /// `sift_down(h, i)`: maintain heap order after removing the root or
    /// increasing an entry's priority. Smallest-priority child wins;
    /// equal priorities do not swap.
    pub fn sift_down(&mut self, mut i: usize) {
        loop {
            let (l, r) = Self::children(i);
            let mut smallest = i;
            if l < self.nodes.len() && self.nodes[l].priority < self.nodes[smallest].priority {
                smallest = l;
            }
            if r < self.nodes.len() && self.nodes[r].priority < self.nodes[smallest].priority {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.nodes.swap(i, smallest);
            i = smallest;
        }
    }
}
