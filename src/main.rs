//! `wheel-sieve`: count the primes up to a bound and report time and memory.
//!
//! Usage: wheel-sieve [BOUND] [--list]
//! Without BOUND the bound is read interactively.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::error;

use wheel_sieve::prompt::{read_bound, BANNER};
use wheel_sieve::{Bound, Report, Sieve};

#[derive(Debug, Parser)]
#[command(name = "wheel-sieve", version, about = "Primes up to N with a mod-30 wheel sieve")]
struct Args {
    /// Inclusive upper bound (2 ..= 4294967294). Prompted for when omitted.
    bound: Option<String>,

    /// Print every prime found, one per line, after the summary.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    let bound = match args.bound.as_deref() {
        Some(text) => match Bound::parse(text) {
            Ok(bound) => bound,
            Err(err) => {
                eprintln!("error: invalid bound: {}", err);
                return ExitCode::from(2);
            }
        },
        None => {
            println!("{}", BANNER);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            match read_bound(&mut input, &mut output) {
                Ok(bound) => bound,
                Err(err) => {
                    error!(%err, "no bound");
                    eprintln!("error: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let start = Instant::now();
    let sieve = Sieve::run(bound);
    let elapsed = start.elapsed();

    println!("{}", Report::new(bound, sieve.count(), elapsed));

    if args.list {
        if let Err(err) = list_primes(&sieve) {
            // `| head` closes the pipe early
            if err.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn list_primes(sieve: &Sieve) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for p in sieve.primes() {
        writeln!(out, "{}", p)?;
    }
    out.flush()
}
