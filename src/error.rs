// Joseph Prichard
// 10/16/2026
// Error kinds raised while building trees and encoding or decoding with them

use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    // no symbols were supplied so there is nothing to build a tree from
    #[error("cannot build a huffman tree from an empty frequency table")]
    InvalidInput,

    #[error("symbol {0:?} has no code in this table")]
    UnknownSymbol(char),

    #[error("invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),

    // the bit string ended in the middle of a code
    #[error("bit string ends inside a code")]
    IncompleteCode,

    // a single leaf tree has an empty code and cannot be bit encoded
    #[error("a single symbol tree has no bit level encoding")]
    DegenerateTree,
}

// lets the io driven parts of the tool use ? on core results
impl From<HuffmanError> for io::Error {
    fn from(e: HuffmanError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
