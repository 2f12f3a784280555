//! Benchmark harness: wheel sieve vs `primal` vs `primes`.
//!
//! Usage: cargo run --release --bin sieve-bench -- [--iterations K] [SIZES...]

use std::fmt;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};

use wheel_sieve::report::{format_bytes, format_duration, format_with_commas};
use wheel_sieve::Sieve;

// ─── Configuration ─────────────────────────────────────────────────────────

const DEFAULT_SIZES: [u32; 6] = [10_000, 100_000, 500_000, 1_000_000, 10_000_000, 50_000_000];

/// The `primes` crate grows its sieve by trial division; beyond this it
/// dominates the whole run.
const PRIMES_CRATE_CEILING: u32 = 1_000_000;

#[derive(Debug, Parser)]
#[command(name = "sieve-bench", about = "Time the wheel sieve against primal and primes")]
struct Args {
    /// Timed runs per implementation and size.
    #[arg(short, long, default_value_t = 25)]
    iterations: usize,

    /// Bounds to sieve up to.
    sizes: Vec<u32>,
}

// ─── Contenders ────────────────────────────────────────────────────────────

/// Each contender returns π(n) and the bytes its sieve held.
type Contender = fn(u32) -> (usize, usize);

fn wheel(n: u32) -> (usize, usize) {
    match Sieve::up_to(n) {
        Ok(sieve) => (sieve.count(), sieve.byte_len()),
        Err(_) => (0, 0),
    }
}

fn primal_sieve(n: u32) -> (usize, usize) {
    let sieve = primal::Sieve::new(n as usize);
    // primal keeps odd numbers only, roughly n / 16 bytes
    (sieve.prime_pi(n as usize), n as usize / 16)
}

fn primes_iter(n: u32) -> (usize, usize) {
    use primes::PrimeSet;
    let mut set = primes::Sieve::new();
    let count = set.iter().take_while(|&p| p <= u64::from(n)).count();
    (count, 0)
}

// ─── Measurement ───────────────────────────────────────────────────────────

struct Timing {
    name: &'static str,
    prime_count: usize,
    sieve_bytes: usize,
    times: Vec<Duration>,
}

impl Timing {
    fn sorted(&self) -> Vec<Duration> {
        let mut t = self.times.clone();
        t.sort();
        t
    }

    fn min(&self) -> Duration {
        self.times.iter().copied().min().unwrap_or_default()
    }

    fn max(&self) -> Duration {
        self.times.iter().copied().max().unwrap_or_default()
    }

    fn median(&self) -> Duration {
        let t = self.sorted();
        t.get(t.len() / 2).copied().unwrap_or_default()
    }

    fn mean(&self) -> Duration {
        match u32::try_from(self.times.len()) {
            Ok(len) if len > 0 => self.times.iter().sum::<Duration>() / len,
            _ => Duration::ZERO,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │ {:>9}",
            self.name,
            format_duration(self.min()),
            format_duration(self.median()),
            format_duration(self.mean()),
            format_duration(self.max()),
            format_bytes(self.sieve_bytes),
        )
    }
}

fn time(name: &'static str, n: u32, iterations: usize, f: Contender) -> Timing {
    // warmup
    std::hint::black_box(f(n));

    let mut times = Vec::with_capacity(iterations);
    let mut last = (0, 0);
    for _ in 0..iterations {
        let start = Instant::now();
        last = std::hint::black_box(f(n));
        times.push(start.elapsed());
    }
    Timing { name, prime_count: last.0, sieve_bytes: last.1, times }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();
    let sizes = if args.sizes.is_empty() { DEFAULT_SIZES.to_vec() } else { args.sizes };
    let iterations = args.iterations.max(1);

    println!("Prime sieve benchmark, {} iterations per size", iterations);
    println!();

    let mut mismatches = 0;
    for &n in &sizes {
        println!("┌─ n = {} ─────────────────────────────────────────────", format_with_commas(u64::from(n)));
        println!(
            "{:<20} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │ {:>9}",
            "Implementation", "Min", "Median", "Mean", "Max", "Sieve"
        );
        println!("{}", "─".repeat(88));

        let mut rows = vec![
            time("wheel (mod 30)", n, iterations, wheel),
            time("primal::Sieve", n, iterations, primal_sieve),
        ];
        if n <= PRIMES_CRATE_CEILING {
            rows.push(time("primes (iter)", n, iterations, primes_iter));
        } else {
            info!(n, "skipping primes crate above {}", PRIMES_CRATE_CEILING);
        }
        for row in &rows {
            println!("{}", row);
        }

        let reference = rows[0].prime_count;
        for row in &rows[1..] {
            if row.prime_count != reference {
                warn!(n, wheel = reference, other = row.prime_count, name = row.name, "prime count mismatch");
                mismatches += 1;
            }
        }

        let fastest = rows.iter().map(Timing::median).min().unwrap_or_default();
        println!("│");
        println!("│  π({}) = {}", format_with_commas(u64::from(n)), format_with_commas(reference as u64));
        for row in &rows {
            let ratio = row.median().as_nanos() as f64 / fastest.as_nanos().max(1) as f64;
            if ratio <= 1.01 {
                println!("│  {:<16} : fastest", row.name);
            } else {
                println!("│  {:<16} : {:.2}x slower", row.name, ratio);
            }
        }
        println!("└──────────────────────────────────────────────────────────");
        println!();
    }

    if mismatches > 0 {
        eprintln!("error: {} prime count mismatch(es)", mismatches);
        return ExitCode::FAILURE;
    }
    println!("All implementations agree.");
    ExitCode::SUCCESS
}
