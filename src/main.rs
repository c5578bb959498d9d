// Joseph Prichard
// 10/16/2026
// Application to trace how huffman trees are built for texts or files

use std::env;
use std::process;
use hufftrace::{options, trace};

fn main() {
    let args: Vec<String> = env::args().collect();

    let options = match options::parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match trace::trace_entries(&options) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Fatal: {}", e);
            process::exit(1);
        }
    }
}
