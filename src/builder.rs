// Joseph Prichard
// 10/16/2026
// Greedy huffman tree construction recording every merge for replay

use serde::Serialize;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::queue::{NodeQueue, QueueSnapshot};
use crate::tree::{NodeId, NodeSummary, TreeNode};

// one merge of the two lightest nodes in the queue
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MergeStep {
    // popped first, becomes the left child
    pub left: NodeSummary,
    // popped second, becomes the right child
    pub right: NodeSummary,
    pub merged: NodeSummary,
    // queue contents right after the merged node was inserted
    pub queue: QueueSnapshot,
}

/// Result of a build: the tree plus the history of how it was reached.
///
/// `snapshots[0]` is the sorted leaf queue before any merge and `snapshots[i]`
/// is the queue after `steps[i - 1]`, so there is always one more snapshot than
/// there are steps and the last snapshot holds only the root.
#[derive(Clone, Debug, Serialize)]
pub struct HuffmanBuild {
    pub root: TreeNode,
    pub steps: Vec<MergeStep>,
    pub snapshots: Vec<QueueSnapshot>,
}

impl HuffmanBuild {
    // the partial trees waiting in the queue at a snapshot, in queue order
    pub fn forest(&self, snapshot: usize) -> Option<Vec<&TreeNode>> {
        let snapshot = self.snapshots.get(snapshot)?;
        snapshot.nodes()
            .iter()
            .map(|node| self.root.find(node.id))
            .collect()
    }
}

pub fn build_huffman_tree(freq: &FrequencyTable) -> Result<HuffmanBuild> {
    if freq.is_empty() {
        return Err(HuffmanError::InvalidInput);
    }

    // add the frequency table nodes to priority queue, ids follow the table order
    let mut queue = NodeQueue::new();
    let mut next_id = 0u32;
    for (symbol, weight) in freq.iter() {
        queue.push(Box::new(TreeNode::leaf(NodeId(next_id), symbol, weight)));
        next_id += 1;
    }

    let mut snapshots = vec![queue.snapshot()];
    let mut steps = Vec::with_capacity(freq.len() - 1);

    // huffman coding algorithm
    while queue.len() >= 2 {
        // invariant: the queue should never have 1 or 0 elements at this point
        let left = queue.pop()
            .expect("Expected first node to be Some after checking length");
        let right = queue.pop()
            .expect("Expected second node to be Some after checking length");
        let (left_summary, right_summary) = (left.summary(), right.summary());

        // a fresh id is larger than any id in the queue so the new node loses ties against equal weights
        // the weights of a table whose total overflows u64 cannot be merged
        let merged = TreeNode::internal(NodeId(next_id), left, right)
            .ok_or(HuffmanError::InvalidInput)?;
        next_id += 1;
        let merged_summary = merged.summary();
        queue.push(Box::new(merged));

        let snapshot = queue.snapshot();
        steps.push(MergeStep {
            left: left_summary,
            right: right_summary,
            merged: merged_summary,
            queue: snapshot.clone(),
        });
        snapshots.push(snapshot);
    }

    let root = queue.pop().ok_or(HuffmanError::InvalidInput)?;
    Ok(HuffmanBuild { root: *root, steps, snapshots })
}
