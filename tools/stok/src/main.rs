//! Stok CLI
//!
//! Benchmark and inspect the in-place tokenizer.

use stok::commands::{count_file, run_bench, split_file};
use stok::config::{parse_bench_options, parse_split_options};

fn main() {
    stok::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "bench" => {
            let config = parse_bench_options(&args[2..]);
            run_bench(&config);
        }
        "split" | "count" => {
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: stok {command} <file> [--delims=<bytes>] [--max=<n>]");
                std::process::exit(1);
            };
            let config = parse_split_options(&args[2..]);
            if command == "split" {
                split_file(path, &config);
            } else {
                if config.handles {
                    eprintln!("warning: --handles has no effect on count");
                }
                count_file(path, &config);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("stok {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Stok: in-place byte tokenizer");
    println!();
    println!("Usage: stok <command> [options]");
    println!();
    println!("Commands:");
    println!("  bench                Run the three-phase benchmark on synthetic input");
    println!("  split <file>         Tokenize a file and list its tokens");
    println!("  count <file>         Count the tokens in a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Bench options:");
    println!("  --size=<bytes>      Input size, with optional k/m/g suffix (default: 128m)");
    println!("  --seed=<n>          Generator seed (default: 12345)");
    println!("  --delims=<bytes>    Delimiter set; first byte separates tokens (default: ;)");
    println!();
    println!("Split/count options:");
    println!("  --delims=<bytes>    Delimiter set (escapes: \\t \\n \\r \\s \\\\)");
    println!("  --max=<n>           Stop after n tokens");
    println!("  --handles           Tokenize in place and list substring handles");
    println!();
    println!("Examples:");
    println!("  stok bench --size=16m");
    println!("  stok split data.csv --delims=,\\n");
    println!("  stok count words.txt --delims=\\s\\t\\n --max=1000");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=stok_core=debug) to enable tracing output.");
}
