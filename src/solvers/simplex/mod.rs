//! Tableau simplex method.
//!
//! The primal simplex method without a first phase: the problem is brought in standard form by adding one slack
//! variable per constraint, and the slack basis (the origin) is the starting vertex. This requires every right-hand
//! side to be nonnegative.
//!
//! Each iteration enters the column with the most negative objective row entry and leaves the row that wins the ratio
//! test, ties going to the lowest index. No anti-cycling rule is applied; the iteration limit guards against cycling.
//!
//! Every arithmetic result in a pivot is rounded to `eps` decimal digits, which keeps the tableau from accumulating
//! floating point noise but also means the solution is only accurate to `eps` digits.
mod tableau;

use log::{debug, trace};

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{OptimizeResult, Outcome, Solver};

use tableau::{Status, Tableau};

const DEFAULT_EPS: u32 = 5;
const DEFAULT_MAX_ITER: usize = 1000;

/// Builder struct to customize the [`Simplex`] solver.
///
/// After constructing the default solver with [`Simplex::custom`], use the other methods to update specific
/// settings, and finally call [`build`](SimplexBuilder::build) to validate the customized settings and create the
/// solver.
pub struct SimplexBuilder {
    eps: u32,
    max_iter: usize,
}

impl SimplexBuilder {
    pub(crate) fn new() -> SimplexBuilder {
        SimplexBuilder {
            eps: DEFAULT_EPS,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Number of decimal digits every intermediate value of a pivot is rounded to.
    pub fn eps(mut self, eps: u32) -> Self {
        self.eps = eps;
        self
    }

    /// Maximum number of iterations before we give up on trying to solve the problem.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Validate the settings and create the solver.
    /// Returns an `InvalidParameter` error if the iteration limit is zero.
    pub fn build(self) -> Result<Simplex, LinearProgramError> {
        if self.max_iter == 0 {
            return Err(LinearProgramError::InvalidParameter(
                "The iteration limit must be positive.",
            ));
        }
        Ok(Simplex {
            eps: self.eps,
            max_iter: self.max_iter,
        })
    }
}

/// Simplex struct that can be used to solve linear programs.
///
/// To get started quickly, use the [`default`](Simplex::default()) method to initialize the solver with default
/// parameters. See [`custom`](Simplex::custom()) for customization options through the builder pattern.
///
/// ```rust
/// use lp_methods::prelude::*;
/// use ndarray::array;
///
/// let A = array![[1f64, 0.], [1., -1.]];
/// let b = array![7., 8.];
/// let c = array![5., 4.];
///
/// let problem = Problem::maximize(&c).ub(&A, &b).build().unwrap();
/// let solver = Simplex::custom().eps(5).build().unwrap();
///
/// assert_eq!(solver.solve(&problem).unwrap(), Outcome::Unbounded);
/// ```
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Simplex {
    eps: u32,
    max_iter: usize,
}

impl Default for Simplex {
    /// The simplex solver with default configuration.
    fn default() -> Self {
        let SimplexBuilder { eps, max_iter } = SimplexBuilder::new();
        Simplex { eps, max_iter }
    }
}

impl<F: Float> Solver<F> for Simplex {
    fn solve(&self, problem: &Problem<F>) -> Result<Outcome<F>, LinearProgramError> {
        if problem.b().iter().any(|b| *b < F::zero()) {
            return Err(LinearProgramError::InfeasibleOrigin);
        }

        let mut tableau = Tableau::standardize(problem, self.eps);
        let mut iteration = 0;
        loop {
            match tableau.next_pivot() {
                Status::Pivot { row, column } if iteration < self.max_iter => {
                    tableau.pivot(row, column);
                    iteration += 1;
                    debug!(
                        "simplex iteration {iteration}: pivot on row {row}, column {column}, objective {}",
                        tableau.solution()
                    );
                    trace!("basis {:?}", tableau.base());
                }
                Status::Pivot { .. } => {
                    debug!("simplex hit the iteration limit of {}", self.max_iter);
                    return Ok(Outcome::DidNotConverge(
                        tableau.assignment(problem.n_vars()),
                    ));
                }
                status @ (Status::Optimal | Status::Degenerate) => {
                    debug!("simplex finished after {iteration} pivots ({status:?})");
                    let x = tableau.assignment(problem.n_vars());
                    let fun = problem.denormalize_target(tableau.solution());
                    return Ok(Outcome::Optimal(OptimizeResult::new(x, fun, iteration)));
                }
                Status::Unbounded => {
                    debug!("simplex found an unbounded column after {iteration} pivots");
                    return Ok(Outcome::Unbounded);
                }
            }
        }
    }
}

impl Simplex {
    /// Construct a new simplex solver, to be customized through the builder pattern.
    pub fn custom() -> SimplexBuilder {
        SimplexBuilder::new()
    }
}
