// Joseph Prichard
// 10/16/2026
// Type definitions and utilities for the binary tree structure used for huffman coding

use std::fmt;
use serde::Serialize;
use crate::error::{HuffmanError, Result};

// creation sequence number of a node within one build, only used to correlate nodes across snapshots
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TreeNode {
    id: NodeId,
    symbol: Option<char>,
    weight: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Box<TreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    // creates a leaf structure with no children
    pub fn leaf(id: NodeId, symbol: char, weight: u64) -> TreeNode {
        TreeNode {
            id,
            symbol: Some(symbol),
            weight,
            left: None,
            right: None,
        }
    }

    // moves the left and right nodes under a new parent carrying their combined weight, None when the sum overflows
    pub fn internal(id: NodeId, left: Box<TreeNode>, right: Box<TreeNode>) -> Option<TreeNode> {
        let weight = left.weight.checked_add(right.weight)?;
        Some(TreeNode {
            id,
            symbol: None,
            weight,
            left: Some(left),
            right: Some(right),
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            id: self.id,
            symbol: self.symbol,
            weight: self.weight,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => left.leaf_count() + right.leaf_count(),
            _ => 1,
        }
    }

    // number of edges on the longest path from this node to a leaf
    pub fn depth(&self) -> usize {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => 1 + left.depth().max(right.depth()),
            _ => 0,
        }
    }

    // symbols of the leaves under this node from left to right
    pub fn leaf_symbols(&self) -> Vec<char> {
        let mut symbols = vec![];
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut Vec<char>) {
        if let Some(symbol) = self.symbol {
            symbols.push(symbol);
        }
        if let Some(left) = self.left() {
            left.collect_symbols(symbols);
        }
        if let Some(right) = self.right() {
            right.collect_symbols(symbols);
        }
    }

    // finds the node created with the given id within this subtree
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        // ids of a subtree are never greater than the id of its root
        if id > self.id {
            return None;
        }
        self.left()
            .and_then(|left| left.find(id))
            .or_else(|| self.right().and_then(|right| right.find(id)))
    }

    pub fn print_structure(&self) {
        println!("Huffman Tree Structure:");
        self.print_node(0, "root");
    }

    fn print_node(&self, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        match self.symbol {
            Some(symbol) => println!("{}{}-> Leaf {}: {:?} [weight: {}]", indent, label, self.id, symbol, self.weight),
            None => println!("{}{}-> Internal {} [weight: {}]", indent, label, self.id, self.weight),
        }
        if let Some(left) = self.left() {
            left.print_node(depth + 1, "L");
        }
        if let Some(right) = self.right() {
            right.print_node(depth + 1, "R");
        }
    }
}

// a copy of the scalar fields of a node, used by history records so they never point into the tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub id: NodeId,
    pub symbol: Option<char>,
    pub weight: u64,
}

impl NodeSummary {
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

impl fmt::Display for NodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "{:?}:{}", symbol, self.weight),
            None => write!(f, "{}{}", self.weight, self.id),
        }
    }
}

// decodes a string of '0' and '1' characters by walking the tree from the root, resetting at each leaf
pub fn decode(root: &TreeNode, bits: &str) -> Result<String> {
    if root.is_leaf() {
        return Err(HuffmanError::DegenerateTree);
    }
    let mut decoded = String::new();
    let mut node = root;
    for bit in bits.chars() {
        // invariant: a non-leaf has both a left and right node in a full tree
        let next = match bit {
            '0' => node.left(),
            '1' => node.right(),
            _ => return Err(HuffmanError::InvalidBit(bit)),
        };
        node = next.ok_or(HuffmanError::IncompleteCode)?;
        if let Some(symbol) = node.symbol() {
            decoded.push(symbol);
            node = root;
        }
    }
    if !std::ptr::eq(node, root) {
        return Err(HuffmanError::IncompleteCode);
    }
    Ok(decoded)
}
