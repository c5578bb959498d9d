// Joseph Prichard
// 10/16/2026
// Builds and prints the full huffman trace of each entry

use std::io;
use std::time::Instant;
use rayon::prelude::*;
use serde::Serialize;
use crate::builder::{build_huffman_tree, HuffmanBuild};
use crate::codes::{generate_codes, CodeTable};
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::options::{Mode, Options};
use crate::report::{list_report, CodeReport};
use crate::{threading, utils};

// everything derived from one entry, serialized as is for -j
#[derive(Debug, Serialize)]
pub struct Trace {
    pub entry: String,
    pub frequencies: FrequencyTable,
    pub build: HuffmanBuild,
    pub codes: CodeTable,
    pub report: CodeReport,
    // size of the encoded text packed into bytes, none for a single symbol alphabet
    pub packed_bytes: Option<usize>,
}

pub fn create_trace(entry: &str, from_file: bool, skip_spaces: bool) -> io::Result<Trace> {
    let text = utils::read_entry(entry, from_file)?;
    let mut frequencies = count_frequencies(text.chars());
    if skip_spaces {
        frequencies = frequencies.without(&[' ']);
    }
    let build = build_huffman_tree(&frequencies)?;
    let codes = generate_codes(&build.root);
    let report = CodeReport::new(&frequencies, &codes);
    let packed_bytes = if codes.is_degenerate() {
        None
    } else {
        Some(pack_text(&text, &codes, skip_spaces)?.len())
    };
    Ok(Trace { entry: String::from(entry), frequencies, build, codes, report, packed_bytes })
}

fn pack_text(text: &str, codes: &CodeTable, skip_spaces: bool) -> io::Result<Vec<u8>> {
    let kept: String = text.chars()
        .filter(|&c| !(skip_spaces && c == ' '))
        .collect();
    Ok(codes.pack(&kept)?)
}

pub fn create_traces(options: &Options) -> io::Result<Vec<io::Result<Trace>>> {
    // each entry is an independent build so they can run in parallel, results keep the entry order
    let pool = threading::configure_thread_pool(options.multithreaded, options.entries.len())?;
    let traces: Vec<io::Result<Trace>> = pool.install(|| {
        options.entries.par_iter()
            .map(|entry| create_trace(entry, options.from_files, options.skip_spaces))
            .collect()
    });
    Ok(traces)
}

// runs every entry and prints it, returns false when any entry failed
// status lines go to stderr so that stdout only holds the traces
pub fn trace_entries(options: &Options) -> io::Result<bool> {
    let now = Instant::now();

    let traces = create_traces(options)?;
    let mut all_ok = true;
    let mut succeeded = vec![];
    for (entry, trace) in options.entries.iter().zip(traces) {
        match trace {
            Ok(trace) => succeeded.push(trace),
            Err(e) => {
                eprintln!("Failed to trace {:?}: {}", entry, e);
                all_ok = false;
            }
        }
    }

    match options.mode {
        // a single json document holding every trace
        Mode::Json => println!("{}", to_json(&succeeded)?),
        Mode::Tree => succeeded.iter().for_each(print_tree),
        Mode::Steps => succeeded.iter().for_each(print_steps),
    }

    let elapsed = now.elapsed();
    eprintln!("Finished tracing in {:.2?}", elapsed);
    Ok(all_ok)
}

pub fn to_json(traces: &[Trace]) -> io::Result<String> {
    Ok(serde_json::to_string_pretty(traces)?)
}

fn print_tree(trace: &Trace) {
    let root = &trace.build.root;
    println!("Entry: {:?} ({} leaves, depth {})", trace.entry, root.leaf_count(), root.depth());
    root.print_structure();
    println!();
}

fn print_steps(trace: &Trace) {
    println!("Entry: {:?}", trace.entry);

    let frequencies: Vec<String> = trace.frequencies.iter()
        .map(|(symbol, count)| format!("{:?}: {}", symbol, count))
        .collect();
    println!("Frequencies: {}", frequencies.join(", "));

    println!("Queue: {}", join_queue(&trace.build, 0));
    for (i, step) in trace.build.steps.iter().enumerate() {
        println!("Step {}/{}: merge {} + {} -> {}", i + 1, trace.build.steps.len(), step.left, step.right, step.merged);
        println!("Queue: {}", join_queue(&trace.build, i + 1));
    }
    println!();

    list_report(&trace.report);
    if let Some(packed_bytes) = trace.packed_bytes {
        println!("Packed into {} bytes", packed_bytes);
        println!();
    }
}

fn join_queue(build: &HuffmanBuild, snapshot: usize) -> String {
    build.snapshots[snapshot].nodes()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::decode;
    use crate::utils::temp::{create_temp_file, teardown_temp_file};

    fn options(entries: &[&str], multithreaded: bool) -> Options {
        Options {
            entries: entries.iter().map(|s| String::from(*s)).collect(),
            mode: Mode::Steps,
            multithreaded,
            from_files: false,
            skip_spaces: false,
        }
    }

    #[test]
    fn test_create_trace() {
        let trace = create_trace("huffman animation example", false, false).unwrap();
        assert_eq!(trace.frequencies.get(' '), Some(2));
        assert_eq!(trace.build.steps.len(), trace.frequencies.len() - 1);
        assert_eq!(trace.codes.len(), trace.frequencies.len());

        let bits = trace.codes.encode("huffman animation example").unwrap();
        assert_eq!(decode(&trace.build.root, &bits).unwrap(), "huffman animation example");
    }

    #[test]
    fn test_skip_spaces() {
        let trace = create_trace("huffman animation example", false, true).unwrap();
        assert_eq!(trace.frequencies.get(' '), None);
        assert!(trace.codes.code(' ').is_none());
        assert_eq!(trace.build.root.weight(), 23);
        assert_eq!(trace.packed_bytes, Some(((trace.report.encoded_bits + 7) / 8) as usize));
    }

    #[test]
    fn test_empty_entry_fails() {
        let err = create_trace("", false, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = create_trace("   ", false, true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_trace_from_file() {
        let path = create_temp_file("abracadabra");
        let entry = path.to_str().expect("Expected temp path to be valid string");
        let trace = create_trace(entry, true, false).unwrap();
        assert_eq!(trace.frequencies.get('a'), Some(5));
        assert_eq!(trace.build.root.weight(), 11);
        assert_eq!(trace.report.encoded_bits, 23);
        assert_eq!(trace.packed_bytes, Some(3));
        teardown_temp_file(&path);
    }

    #[test]
    fn test_create_traces_keeps_order() {
        let traces = create_traces(&options(&["aab", "", "xyz"], true)).unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0].as_ref().unwrap().entry, "aab");
        assert!(traces[1].is_err());
        assert_eq!(traces[2].as_ref().unwrap().build.root.weight(), 3);
    }

    #[test]
    fn test_trace_entries_reports_failures() {
        assert!(trace_entries(&options(&["abc"], false)).unwrap());
        assert!(!trace_entries(&options(&["abc", ""], false)).unwrap());

        for mode in [Mode::Json, Mode::Tree] {
            let options = Options { mode, ..options(&["abc", ""], false) };
            assert!(!trace_entries(&options).unwrap());
        }
    }

    #[test]
    fn test_json() {
        let trace = create_trace("aab", false, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&[trace]).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        let json = &json[0];

        assert_eq!(json["entry"], "aab");
        assert_eq!(json["codes"]["a"], "1");
        assert_eq!(json["codes"]["b"], "0");
        assert_eq!(json["build"]["steps"].as_array().unwrap().len(), 1);
        assert_eq!(json["build"]["snapshots"].as_array().unwrap().len(), 2);
        assert_eq!(json["build"]["root"]["weight"], 3);
        assert_eq!(json["build"]["root"]["left"]["symbol"], "b");
        assert_eq!(json["build"]["steps"][0]["merged"]["id"], 2);
        assert_eq!(json["report"]["encoded_bits"], 3);
        assert_eq!(json["packed_bytes"], 1);
    }
}
