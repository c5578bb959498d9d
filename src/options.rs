// Joseph Prichard
// 10/16/2026
// Command line flags for the trace tool

use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    // frequencies, every merge with its queue, codes and the size report
    Steps,
    // indented final tree
    Tree,
    // whole history as json
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub entries: Vec<String>,
    pub mode: Mode,
    pub multithreaded: bool,
    // entries are file paths instead of literal text
    pub from_files: bool,
    pub skip_spaces: bool,
}

pub const USAGE: &str = "usage: hufftrace [-mt] [-f] [-s] [-j|-t] <text|file>...";

pub fn parse_args(args: &[String]) -> io::Result<Options> {
    let mut options = Options {
        entries: vec![],
        mode: Mode::Steps,
        multithreaded: false,
        from_files: false,
        skip_spaces: false,
    };

    // skip the program name, any arg starting with a - is a flag and the rest are entries
    for arg in args.iter().skip(1) {
        if arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "-mt" => options.multithreaded = true,
                "-f" => options.from_files = true,
                "-s" => options.skip_spaces = true,
                "-j" => options.mode = Mode::Json,
                "-t" => options.mode = Mode::Tree,
                _ => return Err(io::Error::new(
                    io::ErrorKind::InvalidInput, format!("Unknown flag {}\n{}", arg, USAGE))),
            }
        } else {
            options.entries.push(String::from(arg));
        }
    }

    if options.entries.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput, format!("Needs at least one text or file path as an argument\n{}", USAGE)));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&args(&["hufftrace", "abracadabra"])).unwrap();
        assert_eq!(options.entries, vec!["abracadabra"]);
        assert_eq!(options.mode, Mode::Steps);
        assert!(!options.multithreaded);
        assert!(!options.from_files);
        assert!(!options.skip_spaces);
    }

    #[test]
    fn test_flags() {
        let options = parse_args(&args(&["hufftrace", "-mt", "-f", "a.txt", "-s", "-j", "b.txt"])).unwrap();
        assert_eq!(options.entries, vec!["a.txt", "b.txt"]);
        assert_eq!(options.mode, Mode::Json);
        assert!(options.multithreaded);
        assert!(options.from_files);
        assert!(options.skip_spaces);

        let options = parse_args(&args(&["hufftrace", "-t", "x"])).unwrap();
        assert_eq!(options.mode, Mode::Tree);
    }

    #[test]
    fn test_lone_dash_is_an_entry() {
        let options = parse_args(&args(&["hufftrace", "-"])).unwrap();
        assert_eq!(options.entries, vec!["-"]);
    }

    #[test]
    fn test_errors() {
        let err = parse_args(&args(&["hufftrace", "-mt"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = parse_args(&args(&["hufftrace", "-x", "text"])).unwrap_err();
        assert!(err.to_string().contains("Unknown flag -x"));
    }
}
