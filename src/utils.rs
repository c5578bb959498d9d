// Joseph Prichard
// 10/16/2026
// Utilities for reading entries and temporary files

use std::fs;
use std::io;

// an entry is either the text itself or a path to a utf-8 file holding it
pub fn read_entry(entry: &str, from_file: bool) -> io::Result<String> {
    if from_file {
        fs::read_to_string(entry)
    } else {
        Ok(String::from(entry))
    }
}
