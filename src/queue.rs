// Joseph Prichard
// 10/16/2026
// Min priority queue of partial trees ordered by weight then creation id

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use serde::Serialize;
use crate::tree::{NodeSummary, TreeNode};

// heap entry ordering nodes so the binary heap pops the lightest, oldest node first
struct QueueEntry(Box<TreeNode>);

impl QueueEntry {
    fn key(&self) -> (u64, u32) {
        (self.0.weight(), self.0.id().0)
    }
}

impl Eq for QueueEntry {}

impl PartialEq<Self> for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl PartialOrd<Self> for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max heap
        other.key().cmp(&self.key())
    }
}

#[derive(Default)]
pub struct NodeQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl NodeQueue {
    pub fn new() -> NodeQueue {
        NodeQueue::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, node: Box<TreeNode>) {
        self.heap.push(QueueEntry(node));
    }

    pub fn pop(&mut self) -> Option<Box<TreeNode>> {
        self.heap.pop().map(|entry| entry.0)
    }

    // copies the logical content of the queue in pop order, independent of the heap layout
    pub fn snapshot(&self) -> QueueSnapshot {
        let mut nodes: Vec<NodeSummary> = self.heap.iter()
            .map(|entry| entry.0.summary())
            .collect();
        nodes.sort_by_key(|node| (node.weight, node.id));
        QueueSnapshot { nodes }
    }
}

// the contents of the queue at one point of a build, ascending by weight
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueueSnapshot {
    nodes: Vec<NodeSummary>,
}

impl QueueSnapshot {
    pub fn nodes(&self) -> &[NodeSummary] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn weights(&self) -> Vec<u64> {
        self.nodes.iter().map(|node| node.weight).collect()
    }
}
