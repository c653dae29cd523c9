#![allow(non_snake_case)]
//! Primal affine scaling interior point method, due to Dikin.
//!
//! Starting from a strictly positive point of the slack form, every iteration rescales the problem so that the current
//! point becomes the all-ones vector, projects the scaled cost onto the null space of the scaled constraints and
//! moves along that projection until the most decreasing coordinate has shrunk by a factor `alpha`. The iteration
//! stops once a step moves the point less than `tol`.
//!
//! The method needs an interior starting point. Unless one is supplied through [`InteriorPointBuilder::start`], every
//! original variable starts at one and the slacks take up the remainder of the right-hand side.
//!
//! The method breaks down when the scaling system becomes singular or the projected gradient vanishes, and reports
//! that the problem has no solution when the iterate runs off to infinity or no coordinate of the projected gradient
//! is negative. None of these states is recovered from.
mod feasible_point;
mod indicators;
mod projection;

use log::debug;
use ndarray::{Array1, Array2};

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{OptimizeResult, Outcome, Solver};

use feasible_point::FeasiblePoint;
use indicators::{Indicators, Status};

/// Builder struct to customize the [`InteriorPoint`] solver.
///
/// After constructing the default solver with [`InteriorPoint::custom`],
/// use the other methods to update specific settings, and finally call [`build`](InteriorPointBuilder::build) to validate
/// the customized settings and create the solver.
pub struct InteriorPointBuilder<F> {
    start: Option<Array1<F>>,
    alpha: F,
    eps: u32,
    tol: F,
    max_iter: usize,
}

impl<F: Float> InteriorPointBuilder<F> {
    pub(crate) fn new() -> InteriorPointBuilder<F> {
        InteriorPointBuilder {
            start: None,
            alpha: F::cast(0.5),
            eps: 5,
            tol: F::cast(1e-5),
            max_iter: 1000,
        }
    }

    /// Starting point in slack form: one strictly positive value per variable, followed by one per constraint for its
    /// slack, such that every constraint holds with equality.
    pub fn start(mut self, start: Array1<F>) -> Self {
        self.start = Some(start);
        self
    }

    /// Step size multiplier.
    ///
    /// At each iteration the point moves along the projected gradient until the coordinate that decreases fastest
    /// has shrunk to a fraction `1 - alpha` of its scaled value. Since this is an _interior_ point method the point
    /// must never reach the boundary of the feasible set, so 0 < `alpha` < 1. Smaller `alpha` values result in more
    /// iterations but potentially a more stable search path.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.alpha = alpha;
        self
    }

    /// Number of decimal digits the final point is rounded to.
    pub fn eps(mut self, eps: u32) -> Self {
        self.eps = eps;
        self
    }

    /// Set the convergence tolerance. Optimization is successfully terminated once a step moves the point less than
    /// `tol` in Euclidean distance. Should be a small positive value.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Maximum number of iterations before we give up on trying to solve the problem.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Validate the settings and create the solver.
    /// Returns an `InvalidParameter` error if one of the settings is out of range.
    ///
    /// The starting point can only be checked against a problem, which happens when solving.
    pub fn build(self) -> Result<InteriorPoint<F>, LinearProgramError> {
        if !(self.alpha > F::zero() && self.alpha < F::one()) {
            return Err(LinearProgramError::InvalidParameter(
                "Alpha must be between 0 and 1 (exclusive).",
            ));
        }
        if !(self.tol > F::zero()) {
            return Err(LinearProgramError::InvalidParameter(
                "The tolerance must be positive.",
            ));
        }
        if self.max_iter == 0 {
            return Err(LinearProgramError::InvalidParameter(
                "The iteration limit must be positive.",
            ));
        }
        Ok(InteriorPoint {
            start: self.start,
            alpha: self.alpha,
            eps: self.eps,
            tol: self.tol,
            max_iter: self.max_iter,
        })
    }
}

/// Interior point struct that can be used to solve linear programs.
///
/// To get started quickly, use the [`default`](InteriorPoint::default()) method to initialize the solver with default parameters.
/// See the [`custom`](InteriorPoint::custom()) for customization options through the builder pattern.
#[derive(PartialEq, Debug, Clone)]
pub struct InteriorPoint<F> {
    start: Option<Array1<F>>,
    alpha: F,
    eps: u32,
    tol: F,
    max_iter: usize,
}

impl<F: Float> Default for InteriorPoint<F> {
    /// The interior point solver with default configuration.
    fn default() -> Self {
        let InteriorPointBuilder {
            start,
            alpha,
            eps,
            tol,
            max_iter,
        } = InteriorPointBuilder::new();
        InteriorPoint {
            start,
            alpha,
            eps,
            tol,
            max_iter,
        }
    }
}

impl<F: Float> Solver<F> for InteriorPoint<F> {
    fn solve(&self, problem: &Problem<F>) -> Result<Outcome<F>, LinearProgramError> {
        let (A, c) = problem.slack_form();
        let point = match &self.start {
            Some(start) => FeasiblePoint::from_start(start, problem, &A)?,
            None => FeasiblePoint::blind_start(problem)?,
        };
        Ok(self.solve_slack_form(problem, &A, &c, point))
    }
}

impl<F: Float> InteriorPoint<F> {
    /// Construct a new interior point solver, to be customized through the builder pattern.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use lp_methods::prelude::*;
    /// use ndarray::array;
    ///
    /// let A = array![[18f64, 15., 12.], [6., 4., 8.], [5., 3., 3.]];
    /// let b = array![360., 192., 180.];
    /// let c = array![9., 10., 16.];
    ///
    /// let problem = Problem::maximize(&c).ub(&A, &b).build().unwrap();
    /// let solver = InteriorPoint::custom()
    ///     .start(array![1., 1., 1., 315., 174., 169.])
    ///     .alpha(0.9)
    ///     .build()
    ///     .unwrap();
    /// let res = solver.solve(&problem).unwrap().into_optimal().unwrap();
    ///
    /// assert_abs_diff_eq!(*res.fun(), 400., epsilon = 1e-3);
    /// ```
    pub fn custom() -> InteriorPointBuilder<F> {
        InteriorPointBuilder::new()
    }

    fn solve_slack_form(
        &self,
        problem: &Problem<F>,
        A: &Array2<F>,
        c: &Array1<F>,
        mut point: FeasiblePoint<F>,
    ) -> Outcome<F> {
        debug!("iter \tstep      \tnu        \tobj       ");
        for iteration in 1..=self.max_iter {
            let status = match point.get_direction(A, c) {
                Ok(direction) => {
                    let next = point.do_step(&direction, self.alpha);
                    let indicators = Indicators::from_step(&point, &next, &direction, c);
                    debug!("{iteration:5}\t{indicators}");
                    point = next;
                    indicators.status(self.tol)
                }
                Err(status) => status,
            };
            match status {
                Status::Converged => return Outcome::Optimal(self.finish(problem, c, point, iteration)),
                Status::NoSolution(reason) => {
                    debug!("interior point stopped at iteration {iteration}: no solution ({reason:?})");
                    return Outcome::NoSolution(reason);
                }
                Status::NotApplicable(reason) => {
                    debug!("interior point stopped at iteration {iteration}: not applicable ({reason:?})");
                    return Outcome::NotApplicable(reason);
                }
                Status::Unfinished => {}
            }
        }
        debug!("interior point hit the iteration limit of {}", self.max_iter);
        Outcome::DidNotConverge(problem.denormalize_x_into(point.x))
    }

    /// Round the converged point to `eps` digits and evaluate the objective there.
    fn finish(
        &self,
        problem: &Problem<F>,
        c: &Array1<F>,
        point: FeasiblePoint<F>,
        iteration: usize,
    ) -> OptimizeResult<F> {
        let x = point.x.mapv(|x| x.round_to(self.eps));
        let fun = problem.denormalize_target(c.dot(&x));
        OptimizeResult::new(problem.denormalize_x_into(x), fun, iteration)
    }
}
