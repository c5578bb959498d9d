// Joseph Prichard
// 10/16/2026
// Code table derived from the leaf paths of a huffman tree

use std::collections::BTreeMap;
use serde::Serialize;
use crate::bitwise::{BitPacker, SymbolCode};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::TreeNode;

// symbol to code string, ordered by symbol
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_str()))
    }

    // the table of a single leaf tree, whose only code is empty
    pub fn is_degenerate(&self) -> bool {
        self.codes.values().any(|code| code.is_empty())
    }

    pub fn symbol_code(&self, symbol: char) -> Option<SymbolCode> {
        self.code(symbol).and_then(|code| SymbolCode::from_code(symbol, code))
    }

    // concatenates the code of every symbol of the text
    pub fn encode(&self, text: &str) -> Result<String> {
        if self.is_degenerate() {
            return Err(HuffmanError::DegenerateTree);
        }
        let mut bits = String::new();
        for symbol in text.chars() {
            let code = self.code(symbol).ok_or(HuffmanError::UnknownSymbol(symbol))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    // writes the code of every symbol of the text into bytes through its packed symbol code
    pub fn pack(&self, text: &str) -> Result<Vec<u8>> {
        if self.is_degenerate() {
            return Err(HuffmanError::DegenerateTree);
        }
        let mut packer = BitPacker::new();
        for symbol in text.chars() {
            match self.symbol_code(symbol) {
                Some(symbol_code) => packer.write_symbol(&symbol_code),
                // codes past 32 bits do not fit a symbol code and are written bit by bit
                None => {
                    let code = self.code(symbol).ok_or(HuffmanError::UnknownSymbol(symbol))?;
                    packer.write_code(code)?;
                }
            }
        }
        Ok(packer.finish())
    }

    // encoded length in bits of a text with the given symbol counts
    pub fn weighted_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .map(|(symbol, count)| count.saturating_mul(self.code(symbol).map_or(0, |code| code.len() as u64)))
            .fold(0, u64::saturating_add)
    }

    pub fn is_prefix_free(&self) -> bool {
        // in lexicographic order a code that prefixes others sorts directly before one of them
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

pub fn generate_codes(root: &TreeNode) -> CodeTable {
    let mut table = CodeTable::default();
    walk_code_tree(root, &mut String::new(), &mut table.codes);
    table
}

fn walk_code_tree(node: &TreeNode, prefix: &mut String, codes: &mut BTreeMap<char, String>) {
    if let Some(symbol) = node.symbol() {
        codes.insert(symbol, prefix.clone());
    }
    if let Some(left) = node.left() {
        prefix.push('0');
        walk_code_tree(left, prefix, codes);
        prefix.pop();
    }
    if let Some(right) = node.right() {
        prefix.push('1');
        walk_code_tree(right, prefix, codes);
        prefix.pop();
    }
}
