// Joseph Prichard
// 10/16/2026
// Bit level helpers, the packed form of a symbol code and an in-memory bit writer

use serde::Serialize;
use crate::error::{HuffmanError, Result};

pub fn set_bit(num: u32, n: u32) -> u8 {
    ((1 << n) | num) as u8
}

pub fn get_bit(num: u32, n: u32) -> u8 {
    ((num >> n) & 1) as u8
}

// a code packed into an integer, the first bit of the code is bit 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolCode {
    pub plain_symbol: char,
    pub encoded_symbol: u32,
    pub bit_len: u8,
}

impl SymbolCode {
    pub fn new(plain_symbol: char) -> SymbolCode {
        SymbolCode { plain_symbol, encoded_symbol: 0, bit_len: 0 }
    }

    pub fn append_bit(&self, bit: u32) -> SymbolCode {
        SymbolCode {
            plain_symbol: self.plain_symbol,
            encoded_symbol: self.encoded_symbol ^ (bit << self.bit_len),
            bit_len: self.bit_len + 1,
        }
    }

    // packs a code string, None when it is longer than the 32 bits the integer holds
    pub fn from_code(plain_symbol: char, code: &str) -> Option<SymbolCode> {
        if code.len() > 32 {
            return None;
        }
        let mut symbol_code = SymbolCode::new(plain_symbol);
        for bit in code.chars() {
            symbol_code = symbol_code.append_bit(if bit == '1' { 1 } else { 0 });
        }
        Some(symbol_code)
    }

    pub fn to_code(&self) -> String {
        (0..self.bit_len as u32)
            .map(|i| if get_bit(self.encoded_symbol, i) > 0 { '1' } else { '0' })
            .collect()
    }
}

// bit writer over a byte vector, bit i of a byte is the i-th bit written to it
#[derive(Default)]
pub struct BitPacker {
    bytes: Vec<u8>,
    // the total number of bits written
    bit_position: usize,
}

impl BitPacker {
    pub fn new() -> BitPacker {
        BitPacker::default()
    }

    pub fn bit_len(&self) -> usize {
        self.bit_position
    }

    pub fn write_bit(&mut self, bit: u8) {
        // start a new byte when the last one is full
        if self.bit_position % 8 == 0 {
            self.bytes.push(0);
        }
        if bit > 0 {
            let i = self.bit_position / 8;
            self.bytes[i] = set_bit(self.bytes[i] as u32, (self.bit_position % 8) as u32);
        }
        self.bit_position += 1;
    }

    pub fn write_symbol(&mut self, symbol: &SymbolCode) {
        for i in 0..symbol.bit_len {
            let bit = get_bit(symbol.encoded_symbol, i as u32);
            self.write_bit(bit);
        }
    }

    // writes a string of '0' and '1' characters
    pub fn write_code(&mut self, code: &str) -> Result<()> {
        for bit in code.chars() {
            match bit {
                '0' => self.write_bit(0),
                '1' => self.write_bit(1),
                _ => return Err(HuffmanError::InvalidBit(bit)),
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

pub fn pack_bits(bits: &str) -> Result<Vec<u8>> {
    let mut packer = BitPacker::new();
    packer.write_code(bits)?;
    Ok(packer.finish())
}
