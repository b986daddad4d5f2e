//! `stok bench`: three-phase tokenizer benchmark on synthetic input.
//!
//! 1. Allocation only: reserve one slot per token.
//! 2. Tokenization only: in-place tokenize into the pre-allocated slots.
//! 3. Full operation: in-place tokenize with self-allocated storage
//!    (counting pre-pass + exact allocation + scan).
//!
//! Every phase works on a fresh copy of the generated buffer, since
//! tokenization overwrites separators.

use std::hint::black_box;
use std::time::{Duration, Instant};

use stok_core::{
    count_tokens, tokenize, DelimiterSet, Storage, Token, TokenBuffer, TokenizeError,
};

use crate::config::BenchConfig;
use crate::generate::{random_buffer, MAX_TOKEN_LEN};

/// Time and output of one tokenization phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseTiming {
    pub elapsed: Duration,
    pub tokens: usize,
}

#[allow(
    clippy::cast_precision_loss,
    reason = "throughput figures are reported, not computed with"
)]
impl PhaseTiming {
    /// Input throughput in MiB per second.
    pub fn mib_per_sec(&self, bytes: usize) -> f64 {
        bytes as f64 / self.elapsed.as_secs_f64() / (1024.0 * 1024.0)
    }

    /// Token rate in millions per second.
    pub fn mtok_per_sec(&self) -> f64 {
        self.tokens as f64 / self.elapsed.as_secs_f64() / 1e6
    }
}

/// Results of a full benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BenchReport {
    pub buffer_len: usize,
    pub token_count: usize,
    pub alloc_time: Duration,
    /// Phase 2: caller-provided storage.
    pub provided: PhaseTiming,
    /// Phase 3: self-allocated storage.
    pub allocated: PhaseTiming,
}

/// Generate the input and run all three phases.
pub fn measure(config: &BenchConfig) -> Result<BenchReport, TokenizeError> {
    let delims = DelimiterSet::new(&config.delimiters)?;
    let Some(&separator) = config.delimiters.first() else {
        return Err(TokenizeError::InvalidArgument {
            reason: "benchmark input needs at least one delimiter".to_string(),
        });
    };

    let input = random_buffer(config.size, separator, config.seed);
    let token_count = count_tokens(&input, &delims, usize::MAX);
    tracing::debug!(len = input.len(), token_count, "generated benchmark input");

    // Phase 1: allocation only
    let start = Instant::now();
    let mut slots = black_box(vec![Token::default(); token_count]);
    let alloc_time = start.elapsed();

    // Phase 2: tokenization only
    let mut copy = TokenBuffer::new(&input);
    let start = Instant::now();
    let tokens = tokenize(Storage::Provided(&mut slots), token_count, &delims, &mut copy)?;
    let provided = PhaseTiming {
        elapsed: start.elapsed(),
        tokens: black_box(tokens.count()),
    };

    // Phase 3: allocation + tokenization
    let mut copy = TokenBuffer::new(&input);
    let start = Instant::now();
    let tokens = tokenize(Storage::Allocate, token_count, &delims, &mut copy)?;
    let allocated = PhaseTiming {
        elapsed: start.elapsed(),
        tokens: black_box(tokens.count()),
    };

    Ok(BenchReport {
        buffer_len: input.len(),
        token_count,
        alloc_time,
        provided,
        allocated,
    })
}

/// Run `stok bench` and print the report.
pub fn run_bench(config: &BenchConfig) {
    println!();
    println!("=== Tokenizer Benchmark: Randomized Input ===");
    println!(
        "Input: random tokens of 1-{MAX_TOKEN_LEN} chars, seed {}",
        config.seed
    );
    println!("Delimiters: {:?}", String::from_utf8_lossy(&config.delimiters));
    println!();
    println!("--- Generating random buffer (~{} bytes) ---", config.size);

    let report = match measure(config) {
        Ok(report) => report,
        Err(err) => super::fail(&err),
    };

    println!("Actual buffer length: {} bytes", report.buffer_len);
    println!("Actual token count: {}", report.token_count);
    println!();

    println!("--- PHASE 1: Allocation Only ---");
    println!("Allocation time: {:.9} sec", report.alloc_time.as_secs_f64());
    println!();

    println!("--- PHASE 2: Tokenization Only (pre-allocated storage) ---");
    print_phase("Tokenization time", &report.provided, report.buffer_len);
    println!();

    println!("--- PHASE 3: Full Operation (Allocation + Tokenization) ---");
    print_phase("Full operation time", &report.allocated, report.buffer_len);
}

fn print_phase(label: &str, phase: &PhaseTiming, bytes: usize) {
    println!("{label}: {:.9} sec", phase.elapsed.as_secs_f64());
    println!("Tokens parsed: {}", phase.tokens);
    println!("Throughput: {:.2} MiB/s", phase.mib_per_sec(bytes));
    println!("Token rate: {:.2} million tokens/sec", phase.mtok_per_sec());
}
