//! Command-line options for `stok` commands.
//!
//! Options use the `--key=value` form. Unknown options and unparsable values
//! produce a warning on stderr and leave the default in place.

/// Default synthetic input size for `stok bench` (128 MiB).
pub const DEFAULT_BENCH_SIZE: usize = 1 << 27;

/// Fixed seed so benchmark inputs are reproducible across runs.
pub const DEFAULT_SEED: u64 = 12345;

pub const DEFAULT_DELIMITERS: &[u8] = b";";

/// Configuration for `stok bench`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Target size of the generated buffer in bytes.
    pub size: usize,
    /// Seed for the input generator.
    pub seed: u64,
    /// Delimiter set; the first byte is also the separator the generator writes.
    pub delimiters: Vec<u8>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: DEFAULT_BENCH_SIZE,
            seed: DEFAULT_SEED,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

/// Configuration for `stok split` and `stok count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    pub delimiters: Vec<u8>,
    /// Maximum number of tokens to produce.
    pub max_count: usize,
    /// Tokenize in place and report substring handles instead of records.
    pub handles: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            max_count: usize::MAX,
            handles: false,
        }
    }
}

/// Parse `stok bench` options.
pub fn parse_bench_options(args: &[String]) -> BenchConfig {
    let mut config = BenchConfig::default();

    for arg in args {
        if let Some(size) = arg.strip_prefix("--size=") {
            if let Some(n) = parse_size(size) {
                config.size = n;
            } else {
                eprintln!("warning: invalid size '{size}', using {}", config.size);
            }
        } else if let Some(seed) = arg.strip_prefix("--seed=") {
            if let Ok(n) = seed.parse() {
                config.seed = n;
            } else {
                eprintln!("warning: invalid seed '{seed}', using {}", config.seed);
            }
        } else if let Some(delims) = arg.strip_prefix("--delims=") {
            config.delimiters = unescape_delimiters(delims);
        } else {
            eprintln!("warning: unknown bench option '{arg}'");
        }
    }

    config
}

/// Parse `stok split` / `stok count` options.
///
/// Positional arguments (the input path) are skipped; the caller picks them out.
pub fn parse_split_options(args: &[String]) -> SplitConfig {
    let mut config = SplitConfig::default();

    for arg in args {
        if let Some(delims) = arg.strip_prefix("--delims=") {
            config.delimiters = unescape_delimiters(delims);
        } else if let Some(max) = arg.strip_prefix("--max=") {
            if let Ok(n) = max.parse() {
                config.max_count = n;
            } else {
                eprintln!("warning: invalid max count '{max}', using no limit");
            }
        } else if arg == "--handles" {
            config.handles = true;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    config
}

/// Parse a byte size: plain decimal, or with a `k`/`m`/`g` binary suffix.
pub fn parse_size(s: &str) -> Option<usize> {
    let s = s.trim();
    let (digits, shift) = match s.as_bytes().last()? {
        b'k' | b'K' => (&s[..s.len() - 1], 10),
        b'm' | b'M' => (&s[..s.len() - 1], 20),
        b'g' | b'G' => (&s[..s.len() - 1], 30),
        _ => (s, 0),
    };
    let n: usize = digits.parse().ok()?;
    n.checked_mul(1usize << shift)
}

/// Decode a delimiter argument, accepting `\t`, `\n`, `\r`, `\s` (space)
/// and `\\` escapes. Any other backslash sequence is kept literally.
pub fn unescape_delimiters(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b't') => out.push(b'\t'),
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b's') => out.push(b' '),
            Some(b'\\') => out.push(b'\\'),
            Some(other) => out.extend_from_slice(&[b'\\', other]),
            None => out.push(b'\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn bench_defaults() {
        let config = parse_bench_options(&[]);
        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.size, 1 << 27);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.delimiters, b";".to_vec());
    }

    #[test]
    fn bench_options_override_defaults() {
        let config = parse_bench_options(&args(&["--size=4k", "--seed=7", "--delims=,\\t"]));
        assert_eq!(
            config,
            BenchConfig {
                size: 4096,
                seed: 7,
                delimiters: b",\t".to_vec(),
            }
        );
    }

    #[test]
    fn bench_invalid_values_keep_defaults() {
        let config = parse_bench_options(&args(&["--size=lots", "--seed=-1", "--bogus"]));
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn split_options() {
        let config = parse_split_options(&args(&["input.txt", "--max=3", "--handles", "--delims=\\s"]));
        assert_eq!(
            config,
            SplitConfig {
                delimiters: b" ".to_vec(),
                max_count: 3,
                handles: true,
            }
        );
    }

    #[test]
    fn split_invalid_max_means_unlimited() {
        let config = parse_split_options(&args(&["--max=many"]));
        assert_eq!(config.max_count, usize::MAX);
    }

    #[test]
    fn sizes_with_suffixes() {
        assert_eq!(parse_size("100"), Some(100));
        assert_eq!(parse_size("2k"), Some(2048));
        assert_eq!(parse_size("1M"), Some(1 << 20));
        assert_eq!(parse_size("1g"), Some(1 << 30));
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("k"), None);
        assert_eq!(parse_size("x1"), None);
    }

    #[test]
    fn delimiter_escapes() {
        assert_eq!(unescape_delimiters(";,"), b";,".to_vec());
        assert_eq!(unescape_delimiters("\\t\\n\\r\\s\\\\"), b"\t\n\r \\".to_vec());
        assert_eq!(unescape_delimiters("\\q"), b"\\q".to_vec());
        assert_eq!(unescape_delimiters("a\\"), b"a\\".to_vec());
        assert!(unescape_delimiters("").is_empty());
    }
}
