//! Corpus Normalization Benchmark
//!
//! Measures throughput of the normalization pipeline on a large UTF-8 text
//! file, per language pass. Use a corpus in the script being measured (an
//! Arabic news dump for `ar`, a Hebrew Bible text for `he`, and so on) to get
//! numbers that reflect how often the language rules actually fire.
//!
//! ## Usage
//!
//! ```bash
//! # Generic pass only
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # One language pass + generic pass
//! ./target/release/corpus_bench /path/to/corpus.txt he
//!
//! # Generic pass, then every language in turn
//! ./target/release/corpus_bench /path/to/corpus.txt all
//! ```
//!
//! Set `RUST_LOG=debug` for per-run timings.
//!
//! ## Example Output
//!
//! ```text
//! === he ===
//! --------------------------------
//! Mode        : he
//! Elapsed     : 0.184 s
//! Throughput  : 0.742 GiB/s
//! Output      : 131.20 MiB (92.4% of input)
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use scriptnorm_core::{Language, NormalizerConfig, TextNormalizer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [ar|he|el|la|sy|all]");
        std::process::exit(1);
    }

    let path = &args[1];

    let modes: Vec<Option<Language>> = match args.get(2).map(String::as_str) {
        None => vec![None],
        Some("all") => std::iter::once(None)
            .chain(Language::ALL.into_iter().map(Some))
            .collect(),
        Some(tag) => match tag.parse::<Language>() {
            Ok(language) => vec![Some(language)],
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    info!(path = %path, "loading corpus");
    let bytes = fs::read(path)?;
    let input = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    for language in modes {
        bench_normalize(&input, language);
    }

    Ok(())
}

fn bench_normalize(input: &str, language: Option<Language>) {
    let normalizer = TextNormalizer::new(NormalizerConfig { language });
    let label = language.map_or("generic", Language::as_tag);
    let mut out = String::with_capacity(input.len());

    println!("=== {label} ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
    });

    print_perf(label, input.len(), out.len(), elapsed);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for run in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        let took = start.elapsed();
        debug!(run, elapsed_ms = took.as_secs_f64() * 1e3, "measured run");
        total += took;
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, output_bytes: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    let ratio = if input_bytes > 0 {
        output_bytes as f64 * 100.0 / input_bytes as f64
    } else {
        100.0
    };

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.3} GiB/s", gib / secs);
    println!("Output      : {} ({ratio:.1}% of input)", fmt_bytes(output_bytes as u64));
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    match b {
        b if b >= GIB => format!("{:.2} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.2} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.2} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}
