//! Command handlers for the `stok` CLI.
//!
//! Each submodule implements one command. Shared utilities like `read_file`
//! live here in the module root.

mod bench;
mod inspect;

pub use bench::{measure, run_bench, BenchReport, PhaseTiming};
pub use inspect::{count_content, count_file, render_tokens, split_file};

/// Read an input file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Report a tokenizer error and exit.
pub(crate) fn fail(err: &stok_core::TokenizeError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
