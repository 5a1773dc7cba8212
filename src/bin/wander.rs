//! Random-walk simulation CLI.
//!
//! Runs the wander simulation and writes its JSON report.
//!
//! Usage:
//!   cargo run --release --bin wander -- [OPTIONS]
//!
//! Options:
//!   --size N        Map side length, at most 1024 (default: 16)
//!   --units N       Number of units (default: 8)
//!   --turns N       Number of turns (default: 100)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing::{error, info};

use tilewalk::wander::{self, WanderConfig};

fn main() {
    tilewalk::logging::init("info");

    let args: Vec<String> = env::args().collect();
    let mut config = WanderConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => config.map_size = flag_value(&args, &mut i),
            "--units" => config.units = flag_value(&args, &mut i),
            "--turns" => config.turns = flag_value(&args, &mut i),
            "--seed" => config.seed = flag_value(&args, &mut i),
            "--output" => output_path = Some(flag_value(&args, &mut i)),
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    info!(
        map_size = config.map_size,
        units = config.units,
        turns = config.turns,
        seed = config.seed,
        "starting wander"
    );
    let start = Instant::now();
    let report = match wander::run_wander(&config) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "wander failed");
            process::exit(1);
        }
    };
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "wander complete");

    let result = match &output_path {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            wander::write_report(&report, &mut writer)?;
            writer.flush()
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            wander::write_report(&report, &mut writer).and_then(|()| writer.flush())
        }
    };
    if let Err(e) = result {
        error!(error = %e, "failed to write report");
        process::exit(1);
    }
}

/// Consumes and parses the value following the flag at `args[*i]`.
fn flag_value<T: FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid or missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: wander [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N         Map side length, at most 1024 (default: 16)");
    eprintln!("  --units N        Number of units (default: 8)");
    eprintln!("  --turns N        Number of turns (default: 100)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --help           Show this help");
}
