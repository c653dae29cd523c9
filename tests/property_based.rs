#![allow(non_snake_case)]
//! Property-based tests over small random problems with positive data.
//!
//! Every generated problem is bounded (all constraint coefficients are positive) and leaves room for the default
//! interior starting point (every right-hand side exceeds its row sum).

use lp_methods::prelude::*;
use ndarray::{Array1, Array2};
use proptest::prelude::*;

/// Tolerance on constraints and objective, `eps = 5` rounding accumulates over the pivots
const TOL: f64 = 1e-2;

#[derive(Debug, Clone)]
struct RandomProblem {
    A: Array2<f64>,
    b: Array1<f64>,
    c: Array1<f64>,
}

fn problem_strategy() -> impl Strategy<Value = RandomProblem> {
    sized_problem_strategy(1..5)
}

fn sized_problem_strategy(rows: std::ops::Range<usize>) -> impl Strategy<Value = RandomProblem> {
    (rows, 1usize..5)
        .prop_flat_map(|(m, n)| {
            (
                prop::collection::vec(1u32..10, m * n),
                prop::collection::vec(1u32..100, m),
                prop::collection::vec(-5i32..10, n),
                Just((m, n)),
            )
        })
        .prop_map(|(a, extra, c, (m, n))| {
            let A = Array2::from_shape_vec((m, n), a.into_iter().map(f64::from).collect())
                .expect("m * n coefficients");
            let b = A.sum_axis(ndarray::Axis(1)) + Array1::from_iter(extra.into_iter().map(f64::from));
            let c = Array1::from_iter(c.into_iter().map(f64::from));
            RandomProblem { A, b, c }
        })
}

impl RandomProblem {
    fn problem(&self) -> Problem<f64> {
        Problem::maximize(&self.c).ub(&self.A, &self.b).build().unwrap()
    }

    fn is_feasible(&self, x: &Array1<f64>) -> bool {
        x.iter().all(|x| *x >= 0.)
            && self
                .A
                .dot(x)
                .iter()
                .zip(self.b.iter())
                .all(|(lhs, rhs)| *lhs <= rhs + TOL)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The simplex method never reports a bounded problem as unbounded, and its value matches its assignment
    #[test]
    fn simplex_value_matches_assignment(rp in problem_strategy()) {
        let res = match Simplex::default().solve(&rp.problem()).unwrap() {
            Outcome::Optimal(res) => res,
            other => return Err(TestCaseError::fail(format!("expected an optimum, got {other:?}"))),
        };
        prop_assert!(res.x().iter().all(|x| *x >= 0.));
        prop_assert!((rp.c.dot(res.x()) - res.fun()).abs() < TOL);
    }

    /// Without ties in the ratio test every pivot stays inside the feasible set
    #[test]
    fn simplex_single_constraint_is_feasible(rp in sized_problem_strategy(1..2)) {
        let res = Simplex::default().solve(&rp.problem()).unwrap().into_optimal();
        prop_assert!(res.is_some());
        let res = res.unwrap();
        prop_assert!(rp.is_feasible(res.x()), "infeasible x = {}", res.x());
    }

    /// Interior point iterates stay feasible, including after rounding
    #[test]
    fn interior_point_solutions_are_feasible(rp in problem_strategy(), alpha in 0.1f64..0.95) {
        let solver = InteriorPoint::custom().alpha(alpha).build().unwrap();
        if let Outcome::Optimal(res) = solver.solve(&rp.problem()).unwrap() {
            prop_assert!(rp.is_feasible(res.x()), "infeasible x = {}", res.x());
            prop_assert!((rp.c.dot(res.x()) - res.fun()).abs() < TOL);
        }
    }

    /// Solving is deterministic and does not depend on earlier solves
    #[test]
    fn solving_is_repeatable(rp in problem_strategy()) {
        let problem = rp.problem();
        let simplex = Simplex::default();
        let interior_point = InteriorPoint::<f64>::default();

        prop_assert_eq!(simplex.solve(&problem).unwrap(), simplex.solve(&rp.problem()).unwrap());
        prop_assert_eq!(
            interior_point.solve(&problem).unwrap(),
            interior_point.solve(&rp.problem()).unwrap()
        );
    }
}
