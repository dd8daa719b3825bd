use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::distance::distance;
use crate::domain::types::{Load, Point};

#[derive(Debug, Clone, Copy)]
struct QueuedLoad {
    depot_distance: f64,
    load: Load,
}

// Reversed so the max-heap pops the closest pickup first; equal distances pop the lowest id.
impl Ord for QueuedLoad {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .depot_distance
            .total_cmp(&self.depot_distance)
            .then_with(|| other.load.id.cmp(&self.load.id))
    }
}

impl PartialOrd for QueuedLoad {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedLoad {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedLoad {}

/// One-shot priority sequence of loads, nearest pickup to the depot first.
#[derive(Debug, Clone)]
pub struct LoadQueue {
    heap: BinaryHeap<QueuedLoad>,
}

impl LoadQueue {
    pub fn new(depot: Point, loads: impl IntoIterator<Item = Load>) -> Self {
        let heap = loads
            .into_iter()
            .map(|load| QueuedLoad {
                depot_distance: distance(depot, load.pickup),
                load,
            })
            .collect();
        Self { heap }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Iterator for LoadQueue {
    type Item = Load;

    fn next(&mut self) -> Option<Load> {
        self.heap.pop().map(|queued| queued.load)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for LoadQueue {}
