//! Benchmark harness: times the `solver` binary over every `.cnf` file in a
//! directory and writes a timing CSV.
//!
//! Grounded on `examples/original_source/analysis/run_cbs_analysis.c`,
//! using `std::process::Command`/`std::time::Instant` in place of
//! `fork`/`execl`/`gettimeofday`.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn, LevelFilter};

use cdclsat::generator::generate_planted_formula;
use cdclsat::solver::{solve, Mode};
use cdclsat::verify::is_satisfied;
use cdclsat::Outcome;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Times the SAT solver binary over a directory of `.cnf` files.
#[derive(Parser, Debug)]
#[command(name = "bench")]
struct Args {
    /// Directory name under `examples/` to scan for `*.cnf` files.
    subdir: String,

    /// Instead of timing files, generate N planted-satisfiable formulas and
    /// assert the solver returns a verifying SAT assignment for each.
    #[arg(long, value_name = "N")]
    self_check: Option<usize>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn self_check(n: usize) -> ExitCode {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for i in 0..n {
        let (mut formula, _planted) = generate_planted_formula(&mut rng, 12, 35, 3);
        match solve(&mut formula, Mode::Cdcl) {
            Outcome::Sat(trail) if is_satisfied(&formula, &trail) => {
                info!("self-check {}/{}: OK", i + 1, n);
            }
            Outcome::Sat(_) => {
                error!("self-check {}/{}: SAT claimed but assignment falsifies a clause", i + 1, n);
                return ExitCode::FAILURE;
            }
            Outcome::Unsat => {
                error!("self-check {}/{}: planted formula reported UNSAT", i + 1, n);
                return ExitCode::FAILURE;
            }
        }
    }
    info!("self-check: all {n} planted formulas solved and verified");
    ExitCode::SUCCESS
}

fn solver_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().expect("current executable path must be available");
    path.set_file_name(if cfg!(windows) { "solver.exe" } else { "solver" });
    path
}

fn run_timing(subdir: &str) -> anyhow::Result<()> {
    let target_dir = PathBuf::from("examples").join(subdir);
    let solver_path = solver_binary_path();
    let output_path = format!("{subdir}_timing_analysis.csv");

    if !solver_path.is_file() {
        anyhow::bail!(
            "solver binary not found at {}; build it first",
            solver_path.display()
        );
    }
    if !target_dir.is_dir() {
        anyhow::bail!("directory {} does not exist", target_dir.display());
    }

    let mut output = File::create(&output_path)?;
    writeln!(output, "Filename,Execution Time (seconds)")?;

    let mut entries: Vec<PathBuf> = fs::read_dir(&target_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "cnf"))
        .collect();
    entries.sort();

    let mut file_count = 0usize;
    for path in &entries {
        let filename = path
            .file_name()
            .expect("path was read from a directory listing")
            .to_string_lossy()
            .into_owned();

        info!("processing {filename}");
        let start = Instant::now();
        let status = Command::new(&solver_path).arg(path).status();
        let elapsed = start.elapsed();

        match status {
            Ok(status) if status.success() => {
                writeln!(output, "{filename},{:.6}", elapsed.as_secs_f64())?;
                file_count += 1;
            }
            Ok(status) => {
                warn!("{filename} exited with {status}");
                writeln!(output, "{filename},ERROR")?;
            }
            Err(e) => {
                warn!("failed to spawn solver for {filename}: {e}");
                writeln!(output, "{filename},ERROR")?;
            }
        }
        output.flush()?;
    }

    if file_count > 0 {
        info!("processed {file_count} files, results written to {output_path}");
    } else {
        warn!("no .cnf files found in {}", target_dir.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(level_filter(args.verbose))
        .init();

    if let Some(n) = args.self_check {
        return self_check(n);
    }

    match run_timing(&args.subdir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
