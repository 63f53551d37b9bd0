//! DIMACS CNF text parsing.
//!
//! Grounded on `examples/original_source/src/parser.c`, reframed as a
//! `Read`-based, line-oriented parser. See `SPEC_FULL.md` §4.8 for the full
//! contract; the short version: comments and the problem line are handled
//! up front, then every remaining non-comment line contributes tokens to a
//! single flat stream of signed integers, `0`-terminated per clause. A
//! clause-count mismatch is a warning, not an error.

use std::io::BufRead;

use log::warn;
use thiserror::Error;

use crate::clause::Clause;
use crate::formula::Formula;
use crate::literal::Literal;

/// Failure parsing a DIMACS CNF document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no problem line (\"p cnf <vars> <clauses>\") found before clause data")]
    MissingProblemLine,
    #[error("malformed problem line: {0:?}")]
    MalformedProblemLine(String),
    #[error("I/O error while reading CNF input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a complete DIMACS CNF document from `reader`.
pub fn parse(reader: impl BufRead) -> Result<Formula, ParseError> {
    let mut lines = reader.lines();
    let mut num_variables = None;
    let mut num_clauses_declared = None;

    for line in &mut lines {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.starts_with('c') {
            // Comment line, skip.
            continue;
        } else if trimmed.starts_with('p') {
            // Problem line, parse number of variables and clauses.
            let rest = &trimmed[1..];
            let mut fields = rest.split_whitespace();
            let cnf_tag = fields.next();
            let vars = fields.next().and_then(|s| s.parse::<usize>().ok());
            let clauses = fields.next().and_then(|s| s.parse::<usize>().ok());
            match (cnf_tag, vars, clauses) {
                (Some("cnf"), Some(v), Some(c)) => {
                    num_variables = Some(v);
                    num_clauses_declared = Some(c);
                    break;
                }
                _ => return Err(ParseError::MalformedProblemLine(line)),
            }
        }
        // Any other line (blank, or stray text before the problem line) is
        // skipped and the scan keeps looking for the problem line.
    }

    let num_variables = num_variables.ok_or(ParseError::MissingProblemLine)?;
    let num_clauses_declared = num_clauses_declared.ok_or(ParseError::MissingProblemLine)?;

    let mut formula = Formula::new(num_variables);
    let mut current: Vec<Literal> = Vec::new();

    for line in lines {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let value: i32 = match token.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if value == 0 {
                if !current.is_empty() {
                    let clause = std::mem::take(&mut current);
                    formula.push_clause(
                        Clause::from_vec(clause).expect("non-empty by the check above"),
                    );
                }
                // An empty clause (a lone 0) is skipped, not stored.
            } else {
                current.push(Literal::new(value));
            }
        }
    }

    if !current.is_empty() {
        warn!("input ended mid-clause without a trailing 0; discarding the truncated clause");
    }

    if formula.num_clauses() != num_clauses_declared {
        warn!(
            "declared {} clauses but parsed {}",
            num_clauses_declared,
            formula.num_clauses()
        );
    }

    Ok(formula)
}
