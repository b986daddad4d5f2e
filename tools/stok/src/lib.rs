//! Benchmark harness and inspection commands for `stok_core`.
//!
//! The binary (`stok`) is a thin argument dispatcher; everything it runs
//! lives here so the commands can be exercised from tests and benches.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to enable tracing output on stderr, e.g.
//! `RUST_LOG=stok_core=debug stok bench --size=1m`.

pub mod commands;
pub mod config;
pub mod generate;
mod tracing_setup;

pub use tracing_setup::init_tracing;
