#![allow(non_snake_case)]
//! Small textbook problems, solved by the simplex method and by the interior point method with two step sizes.

use approx::assert_abs_diff_eq;
use lp_methods::prelude::*;
use ndarray::{array, Array1, Array2};

struct Case {
    mode: Mode,
    c: Array1<f64>,
    A: Array2<f64>,
    b: Array1<f64>,
    start: Array1<f64>,
}

impl Case {
    fn problem(&self) -> Problem<f64> {
        Problem::target(self.mode, &self.c)
            .ub(&self.A, &self.b)
            .build()
            .unwrap()
    }

    fn interior_point(&self, alpha: f64) -> InteriorPoint<f64> {
        InteriorPoint::custom()
            .start(self.start.clone())
            .alpha(alpha)
            .eps(5)
            .build()
            .unwrap()
    }

    fn simplex(&self) -> Simplex {
        Simplex::custom().eps(5).build().unwrap()
    }

    /// Optimal results of the simplex method and the interior point method with alpha 0.5 and 0.9.
    fn solve_all(&self) -> Vec<OptimizeResult<f64>> {
        let problem = self.problem();
        let outcomes = [
            self.simplex().solve(&problem).unwrap(),
            self.interior_point(0.5).solve(&problem).unwrap(),
            self.interior_point(0.9).solve(&problem).unwrap(),
        ];
        outcomes
            .into_iter()
            .map(|outcome| match outcome {
                Outcome::Optimal(res) => res,
                other => panic!("expected an optimal solution, got {other:?}"),
            })
            .collect()
    }

    fn assert_feasible(&self, x: &Array1<f64>) {
        assert!(x.iter().all(|x| *x >= 0.), "negative variable in {x}");
        for (row, (lhs, rhs)) in self.A.dot(x).iter().zip(self.b.iter()).enumerate() {
            assert!(*lhs <= rhs + 1e-3, "constraint {row} violated: {lhs} > {rhs}");
        }
    }
}

fn production() -> Case {
    Case {
        mode: Mode::Maximize,
        c: array![9., 10., 16.],
        A: array![[18., 15., 12.], [6., 4., 8.], [5., 3., 3.]],
        b: array![360., 192., 180.],
        start: array![1., 1., 1., 315., 174., 169.],
    }
}

fn four_constraints() -> Case {
    Case {
        mode: Mode::Maximize,
        c: array![100., 140., 120.],
        A: array![[3., 6., 7.], [2., 1., 8.], [1., 1., 1.], [5., 3., 3.]],
        b: array![135., 260., 220., 360.],
        start: array![1., 1., 1., 119., 249., 217., 349.],
    }
}

fn minimization() -> Case {
    Case {
        mode: Mode::Minimize,
        c: array![-2., 2., -6.],
        A: array![[2., 1., -2.], [1., 2., 4.], [1., -1., 2.]],
        b: array![24., 23., 10.],
        start: array![1., 1., 1., 23., 16., 8.],
    }
}

fn unbounded() -> Case {
    Case {
        mode: Mode::Maximize,
        c: array![5., 4.],
        A: array![[1., 0.], [1., -1.]],
        b: array![7., 8.],
        start: array![1., 1., 6., 8.],
    }
}

#[test]
fn production_plan() {
    let case = production();
    let results = case.solve_all();

    assert_abs_diff_eq!(*results[0].x(), array![0., 8., 20.], epsilon = 1e-9);
    for res in &results {
        assert_abs_diff_eq!(*res.fun(), 400., epsilon = 1e-3);
        case.assert_feasible(res.x());
    }
}

#[test]
fn four_constraint_plan() {
    let case = four_constraints();
    for res in case.solve_all() {
        assert_abs_diff_eq!(*res.fun(), 4500., epsilon = 1e-3);
        assert_abs_diff_eq!(*res.x(), array![45., 0., 0.], epsilon = 1e-3);
        case.assert_feasible(res.x());
    }
}

#[test]
fn minimization_agrees() {
    let case = minimization();
    let results = case.solve_all();

    assert_abs_diff_eq!(*results[0].fun(), -30.75, epsilon = 1e-9);
    for res in &results[1..] {
        assert_abs_diff_eq!(*res.fun(), *results[0].fun(), epsilon = 1e-3);
    }
    for res in &results {
        case.assert_feasible(res.x());
    }
}

#[test]
fn long_steps_reach_the_production_optimum() {
    let case = production();
    let res = case
        .interior_point(0.9)
        .solve(&case.problem())
        .unwrap()
        .into_optimal()
        .unwrap();

    assert_abs_diff_eq!(*res.fun(), 400., epsilon = 1e-3);
    assert_abs_diff_eq!(*res.x(), array![0., 8., 20.], epsilon = 1e-3);
}

#[test]
fn value_matches_assignment() {
    for case in [production(), four_constraints(), minimization()] {
        for res in case.solve_all() {
            assert_abs_diff_eq!(case.c.dot(res.x()), *res.fun(), epsilon = 1e-3);
        }
    }
}

#[test]
fn unbounded_objective() {
    let case = unbounded();
    let problem = case.problem();

    assert_eq!(case.simplex().solve(&problem).unwrap(), Outcome::Unbounded);
    // the interior point iterate runs off to infinity
    for alpha in [0.5, 0.9] {
        assert_eq!(
            case.interior_point(alpha).solve(&problem).unwrap(),
            Outcome::NoSolution(NoSolution::NonFinite)
        );
    }
}

#[test]
fn ray_is_unbounded() {
    let c = array![1., 1.];
    let A = array![[1., -1.]];
    let b = array![1.];
    let problem = Problem::maximize(&c).ub(&A, &b).build().unwrap();

    assert_eq!(Simplex::default().solve(&problem).unwrap(), Outcome::Unbounded);
}

#[test]
fn fresh_solvers_agree() {
    for case in [production(), minimization()] {
        let problem = case.problem();
        assert_eq!(
            case.simplex().solve(&problem).unwrap(),
            case.simplex().solve(&case.problem()).unwrap()
        );
        assert_eq!(
            case.interior_point(0.9).solve(&problem).unwrap(),
            case.interior_point(0.9).solve(&case.problem()).unwrap()
        );
    }
}

#[test]
fn solving_leaves_problem_untouched() {
    let case = production();
    let problem = case.problem();
    let before = problem.clone();

    case.simplex().solve(&problem).unwrap();
    case.interior_point(0.5).solve(&problem).unwrap();

    assert_eq!(problem, before);
}

#[test]
fn zero_digits_terminates() {
    for case in [production(), minimization()] {
        let problem = case.problem();
        let simplex = Simplex::custom().eps(0).build().unwrap();
        let interior_point = InteriorPoint::custom()
            .start(case.start.clone())
            .eps(0)
            .build()
            .unwrap();

        assert!(simplex.solve(&problem).unwrap().is_optimal());
        assert!(interior_point.solve(&problem).unwrap().is_optimal());
    }
}
