//! CLI entry point: parse a DIMACS CNF file, echo it, solve it, print and
//! verify the result.
//!
//! Grounded on `examples/original_source/src/main.c`, enriched with the
//! corpus's `clap` + `log`/`env_logger` idiom (`otter_cli`, `munchkin`,
//! `varisat-cli`).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};

use cdclsat::clause::Clause;
use cdclsat::dimacs;
use cdclsat::formula::Formula;
use cdclsat::solver::{self, Mode};
use cdclsat::verify::is_satisfied;
use cdclsat::Outcome;

/// A CDCL SAT solver with a DPLL baseline mode.
#[derive(Parser, Debug)]
#[command(name = "solver")]
struct Args {
    /// Path to a CNF formula file in DIMACS format.
    cnf_file: PathBuf,

    /// Which search driver to use.
    #[arg(long, value_enum, default_value = "cdcl")]
    mode: CliMode,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum CliMode {
    Cdcl,
    Dpll,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Mode {
        match mode {
            CliMode::Cdcl => Mode::Cdcl,
            CliMode::Dpll => Mode::Dpll,
        }
    }
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_formula(formula: &Formula) {
    println!(
        "CNF Formula with {} variables and {} clauses:",
        formula.num_variables(),
        formula.num_clauses()
    );
    for (id, clause) in formula.iter() {
        println!("Clause {}: {}", id + 1, render_clause(clause));
    }
}

fn render_clause(clause: &Clause) -> String {
    let parts: Vec<String> = clause.iter().map(|lit| lit.to_string()).collect();
    format!("({})", parts.join(" \u{2228} "))
}

fn print_assignment(formula: &Formula, trail: &cdclsat::Trail) {
    print!("ASSIGNMENT: ");
    for var_index in 0..formula.num_variables() {
        match trail.value(var_index) {
            Some(value) => print!("{}={} ", var_index + 1, value as u8),
            None => print!("{}=NOT ASSIGNED ", var_index + 1),
        }
    }
    println!();
}

fn run(args: Args) -> Result<(), anyhow::Error> {
    let file = File::open(&args.cnf_file)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {e}", args.cnf_file.display()))?;
    let mut formula = dimacs::parse(BufReader::new(file))?;

    print_formula(&formula);

    info!("solving with mode {}", Mode::from(args.mode));
    println!("\nSolving...");
    match solver::solve(&mut formula, args.mode.into()) {
        Outcome::Sat(trail) => {
            println!("\nRESULT: SAT");
            print_assignment(&formula, &trail);

            if is_satisfied(&formula, &trail) {
                println!("\nVerification: The assignment satisfies all clauses.");
            } else {
                error!("verification failed: a claimed SAT assignment falsifies a clause");
                println!("\nVerification Error: The assignment does not satisfy all clauses!");
            }
        }
        Outcome::Unsat => {
            println!("\nRESULT: UNSAT");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(level_filter(args.verbose))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
