//! Top-level solving facade dispatching to the CDCL or DPLL driver.

use std::fmt;
use std::str::FromStr;

use crate::cdcl::{solve_cdcl, Outcome};
use crate::dpll::solve_dpll;
use crate::formula::Formula;

/// Which driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Conflict-driven clause learning with non-chronological backtracking.
    Cdcl,
    /// Unit propagation with chronological backtracking, no learning.
    Dpll,
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Mode, UnknownMode> {
        match s {
            "cdcl" => Ok(Mode::Cdcl),
            "dpll" => Ok(Mode::Dpll),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown solving mode {0:?}, expected \"cdcl\" or \"dpll\"")]
pub struct UnknownMode(String);

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cdcl => write!(f, "cdcl"),
            Mode::Dpll => write!(f, "dpll"),
        }
    }
}

/// Solves `formula` with the given `mode`, consuming it: CDCL mode may
/// append learned clauses, so ownership (or a caller-held `&mut`) avoids
/// leaving the formula in a mode-dependent half-grown state.
pub fn solve(formula: &mut Formula, mode: Mode) -> Outcome {
    match mode {
        Mode::Cdcl => solve_cdcl(formula),
        Mode::Dpll => solve_dpll(formula),
    }
}
