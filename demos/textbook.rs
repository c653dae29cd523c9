#![allow(non_snake_case)]
//! Solves a few textbook problems with the simplex method and with the interior point method for two step sizes,
//! and prints what each configuration reports.

use lp_methods::prelude::*;
use ndarray::prelude::*;

fn describe(outcome: &Outcome<f64>) -> String {
    match outcome {
        Outcome::Optimal(res) => format!(
            "value {} at x* = {} after {} iterations",
            res.fun(),
            res.x(),
            res.iteration()
        ),
        Outcome::Unbounded => "the objective is unbounded".to_string(),
        Outcome::NoSolution(reason) => format!("no solution ({reason:?})"),
        Outcome::NotApplicable(reason) => format!("the method is not applicable ({reason:?})"),
        Outcome::DidNotConverge(x) => format!("no convergence, last point {x}"),
    }
}

fn report(name: &str, problem: &Problem<f64>, start: Array1<f64>) {
    println!("{name}: {:?} {} subject to A x <= {}", problem.mode(), problem.c(), problem.b());

    let simplex = Simplex::custom().eps(5).build().unwrap();
    println!("  simplex:                {}", describe(&simplex.solve(problem).unwrap()));

    for alpha in [0.5, 0.9] {
        let interior_point = InteriorPoint::custom()
            .start(start.clone())
            .alpha(alpha)
            .eps(5)
            .build()
            .unwrap();
        println!(
            "  interior point, a = {alpha}: {}",
            describe(&interior_point.solve(problem).unwrap())
        );
    }
}

fn main() {
    let c = array![9., 10., 16.];
    let A_ub = array![[18., 15., 12.], [6., 4., 8.], [5., 3., 3.]];
    let b_ub = array![360., 192., 180.];
    let problem = Problem::maximize(&c).ub(&A_ub, &b_ub).build().unwrap();
    report("production", &problem, array![1., 1., 1., 315., 174., 169.]);

    let c = array![5., 4.];
    let A_ub = array![[1., 0.], [1., -1.]];
    let b_ub = array![7., 8.];
    let problem = Problem::maximize(&c).ub(&A_ub, &b_ub).build().unwrap();
    report("unbounded", &problem, array![1., 1., 6., 8.]);

    let c = array![100., 140., 120.];
    let A_ub = array![[3., 6., 7.], [2., 1., 8.], [1., 1., 1.], [5., 3., 3.]];
    let b_ub = array![135., 260., 220., 360.];
    let problem = Problem::maximize(&c).ub(&A_ub, &b_ub).build().unwrap();
    report("four constraints", &problem, array![1., 1., 1., 119., 249., 217., 349.]);

    let c = array![-2., 2., -6.];
    let A_ub = array![[2., 1., -2.], [1., 2., 4.], [1., -1., 2.]];
    let b_ub = array![24., 23., 10.];
    let problem = Problem::minimize(&c).ub(&A_ub, &b_ub).build().unwrap();
    report("minimization", &problem, array![1., 1., 1., 23., 16., 8.]);
}
