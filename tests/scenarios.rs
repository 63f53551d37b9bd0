//! Literal end-to-end scenarios from `SPEC_FULL.md` §8.

use cdclsat::dimacs::parse;
use cdclsat::solver::{solve, Mode};
use cdclsat::verify::is_satisfied;
use cdclsat::Outcome;

fn solve_text(cnf: &str, mode: Mode) -> Outcome {
    let mut formula = parse(cnf.as_bytes()).expect("scenario text is well-formed DIMACS");
    solve(&mut formula, mode)
}

#[test]
fn scenario_1_single_unit_clause_is_sat_with_forced_assignment() {
    let outcome = solve_text("p cnf 1 1\n1 0\n", Mode::Cdcl);
    match outcome {
        Outcome::Sat(trail) => assert_eq!(trail.value(0), Some(true)),
        Outcome::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn scenario_2_conflicting_unit_clauses_are_unsat_at_root() {
    let outcome = solve_text("p cnf 1 2\n1 0\n-1 0\n", Mode::Cdcl);
    assert!(matches!(outcome, Outcome::Unsat));
}

#[test]
fn scenario_3_three_clauses_over_three_vars_is_sat_any_valid_assignment_accepted() {
    let cnf = "p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n";
    let mut formula = parse(cnf.as_bytes()).unwrap();
    match solve(&mut formula, Mode::Cdcl) {
        Outcome::Sat(trail) => assert!(is_satisfied(&formula, &trail)),
        Outcome::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn scenario_4_two_var_all_combinations_excluded_is_unsat() {
    let outcome = solve_text("p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n", Mode::Cdcl);
    assert!(matches!(outcome, Outcome::Unsat));
}

#[test]
fn scenario_5_pigeonhole_php_3_into_2_is_unsat() {
    let cnf = "\
p cnf 6 9
1 2 0
3 4 0
5 6 0
-1 -3 0
-1 -5 0
-3 -5 0
-2 -4 0
-2 -6 0
-4 -6 0
";
    let outcome = solve_text(cnf, Mode::Cdcl);
    assert!(matches!(outcome, Outcome::Unsat));
}

#[test]
fn scenario_6_planted_random_formula_is_always_sat_and_verifies() {
    use cdclsat::generator::generate_planted_formula;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let (mut formula, _planted) = generate_planted_formula(&mut rng, 15, 45, 3);
        match solve(&mut formula, Mode::Cdcl) {
            Outcome::Sat(trail) => assert!(is_satisfied(&formula, &trail)),
            Outcome::Unsat => panic!("planted formula must be satisfiable"),
        }
    }
}

#[test]
fn dpll_and_cdcl_agree_on_all_literal_scenarios() {
    let cases = [
        ("p cnf 1 1\n1 0\n", true),
        ("p cnf 1 2\n1 0\n-1 0\n", false),
        ("p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n", true),
        ("p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n", false),
    ];

    for (cnf, expect_sat) in cases {
        let cdcl_sat = matches!(solve_text(cnf, Mode::Cdcl), Outcome::Sat(_));
        let dpll_sat = matches!(solve_text(cnf, Mode::Dpll), Outcome::Sat(_));
        assert_eq!(cdcl_sat, expect_sat);
        assert_eq!(dpll_sat, expect_sat);
    }
}
