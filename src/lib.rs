// Joseph Prichard
// 10/16/2026
// Huffman tree construction with a replayable history of every merge

pub mod bitwise;
pub mod builder;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod options;
pub mod queue;
pub mod report;
pub mod threading;
pub mod trace;
pub mod tree;
pub mod utils;

pub use builder::{build_huffman_tree, HuffmanBuild, MergeStep};
pub use codes::{generate_codes, CodeTable};
pub use error::HuffmanError;
pub use frequency::{count_frequencies, FrequencyTable};
pub use queue::QueueSnapshot;
pub use tree::{decode, NodeId, NodeSummary, TreeNode};
