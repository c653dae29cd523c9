//! Solvers for linear programs.
pub mod interior_point;
pub mod simplex;

pub use interior_point::InteriorPoint;
pub use simplex::Simplex;

use ndarray::Array1;

use crate::{error::LinearProgramError, linear_program::Problem};

/// Solver trait that any solver should implement to make experimentation with different solvers more easy.
pub trait Solver<F> {
    /// Solve a linear programming problem.
    ///
    /// Returns a [`LinearProgramError`] if the problem does not meet the preconditions of the solver. Every way the
    /// algorithm itself can terminate is reported as an [`Outcome`].
    fn solve(&self, problem: &Problem<F>) -> Result<Outcome<F>, LinearProgramError>;
}

/// Terminal state of a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<F> {
    /// An optimal solution was found.
    Optimal(OptimizeResult<F>),
    /// The objective grows without bound along a pivot column. Reported by the simplex method.
    Unbounded,
    /// The interior point method found no point to move to. Reported by the interior point method.
    NoSolution(NoSolution),
    /// The interior point method broke down numerically at the current point.
    NotApplicable(Breakdown),
    /// The iteration limit was reached. Holds the assignment of the original variables after the final iteration.
    DidNotConverge(Array1<F>),
}

/// Why the interior point method reports that the problem has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolution {
    /// The scaling system or the projected gradient contains NaN or infinite values, which happens when the
    /// iterate runs off to infinity.
    NonFinite,
    /// No coordinate of the projected gradient is negative, so there is no direction to step into.
    ///
    /// For the maximization the solvers perform internally this usually means the objective is unbounded,
    /// rather than that the problem is infeasible.
    NoImprovingDirection,
}

/// Why the interior point method is not applicable from the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakdown {
    /// The scaling system `A D D A'` is singular, the point lies on a degenerate face.
    SingularScaling,
    /// The smallest projected gradient coordinate vanished, the method stagnates.
    VanishingGradient,
}

impl<F> Outcome<F> {
    /// Whether an optimal solution was found.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }

    /// The optimal solution, if one was found.
    pub fn optimal(&self) -> Option<&OptimizeResult<F>> {
        match self {
            Outcome::Optimal(res) => Some(res),
            _ => None,
        }
    }

    /// Take the optimal solution, if one was found.
    pub fn into_optimal(self) -> Option<OptimizeResult<F>> {
        match self {
            Outcome::Optimal(res) => Some(res),
            _ => None,
        }
    }
}

/// Outcome of a successful solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult<F> {
    /// The solution vector
    x: Array1<F>,

    /// The cost function value
    fun: F,

    /// The number of iterations needed to find the solution
    iteration: usize,
}

impl<F> OptimizeResult<F> {
    pub(crate) fn new(x: Array1<F>, fun: F, iteration: usize) -> Self {
        Self { x, fun, iteration }
    }

    /// The number of iterations needed to find the solution
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The cost function value
    pub fn fun(&self) -> &F {
        &self.fun
    }

    /// The solution vector
    pub fn x(&self) -> &Array1<F> {
        &self.x
    }
}
