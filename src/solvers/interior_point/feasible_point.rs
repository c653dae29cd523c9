#![allow(non_snake_case)]
use ndarray::{concatenate, Array1, Array2, Axis, Zip};

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{Breakdown, NoSolution};

use super::indicators::Status;
use super::projection::ScaledSystem;

/// Below this magnitude the most negative projected gradient coordinate is treated as zero.
const VANISHING_GRADIENT: f64 = 1e-10;

/// Relative tolerance on `[A I] x == b` for a user supplied starting point.
const START_TOLERANCE: f64 = 1e-6;

/// A strictly positive point of the slack form, satisfying `[A I] x == b`.
pub(crate) struct FeasiblePoint<F> {
    pub(crate) x: Array1<F>,
}

/// Search direction in scaled coordinates.
pub(crate) struct Direction<F> {
    pub(crate) cp: Array1<F>,
    pub(crate) nu: F,
}

impl<F: Float> FeasiblePoint<F> {
    /// Every original variable at one, the slack of each row takes up the remainder of its right-hand side.
    pub(crate) fn blind_start(problem: &Problem<F>) -> Result<FeasiblePoint<F>, LinearProgramError> {
        let ones = Array1::ones(problem.n_vars());
        let slack = problem.b() - &problem.A().dot(&ones);
        if slack.iter().any(|s| !(*s > F::zero())) {
            return Err(LinearProgramError::InvalidStartingPoint(
                "setting every variable to one violates a constraint, supply a starting point",
            ));
        }
        let x = concatenate(Axis(0), &[ones.view(), slack.view()])
            .or(Err(LinearProgramError::IncompatibleInputDimensions))?;
        Ok(FeasiblePoint { x })
    }

    /// Validate a caller supplied point against the slack form `[A I] x == b`.
    pub(crate) fn from_start(
        start: &Array1<F>,
        problem: &Problem<F>,
        A: &Array2<F>,
    ) -> Result<FeasiblePoint<F>, LinearProgramError> {
        if start.len() != A.ncols() {
            return Err(LinearProgramError::InvalidStartingPoint(
                "expected one coordinate per variable followed by one per constraint",
            ));
        }
        if start.iter().any(|x| !(*x > F::zero() && x.is_finite())) {
            return Err(LinearProgramError::InvalidStartingPoint(
                "every coordinate must be strictly positive and finite",
            ));
        }
        let tol = F::cast(START_TOLERANCE);
        let residual = &A.dot(start) - problem.b();
        let feasible = Zip::from(&residual)
            .and(problem.b())
            .all(|r, b| abs(*r) <= tol * (F::one() + abs(*b)));
        if !feasible {
            return Err(LinearProgramError::InvalidStartingPoint(
                "the slack coordinates do not match the constraints",
            ));
        }
        Ok(FeasiblePoint { x: start.to_owned() })
    }

    /// Projected gradient of the scaled problem around this point.
    ///
    /// Fails with the terminal status of the method if the projection breaks down, if no coordinate of the
    /// projected gradient is negative, or if the most negative one vanishes.
    pub(crate) fn get_direction(&self, A: &Array2<F>, c: &Array1<F>) -> Result<Direction<F>, Status> {
        let cp = ScaledSystem::new(A, c, &self.x).projected_gradient()?;

        if cp.iter().all(|e| *e >= F::zero()) {
            return Err(Status::NoSolution(NoSolution::NoImprovingDirection));
        }
        let nu = abs(cp.fold(F::infinity(), |min, e| min.min(*e)));
        if nu < F::cast(VANISHING_GRADIENT) {
            return Err(Status::NotApplicable(Breakdown::VanishingGradient));
        }
        Ok(Direction { cp, nu })
    }

    /// Step to `D (1 + alpha / nu * cp)`. The scaled point moves a fraction `alpha` of the way to the nearest bound.
    pub(crate) fn do_step(&self, direction: &Direction<F>, alpha: F) -> FeasiblePoint<F> {
        let scale = alpha / direction.nu;
        let y = direction.cp.mapv(|e| F::one() + scale * e);
        FeasiblePoint { x: &self.x * &y }
    }
}

/// `abs` of `num_traits`, the LAPACK scalar trait brings its own with the `blas` feature.
fn abs<F: Float>(x: F) -> F {
    num_traits::Float::abs(x)
}
