use std::fmt::Display;

use ndarray::Array1;

use crate::float::Float;
use crate::solvers::{Breakdown, NoSolution};

use super::feasible_point::{Direction, FeasiblePoint};

/// Progress of a single affine scaling step.
pub(crate) struct Indicators<F> {
    /// Euclidean length of the step taken
    step: F,
    /// magnitude of the most negative projected gradient coordinate
    nu: F,
    /// objective of the internal maximization at the new point
    obj: F,
}

impl<F: Display> Display for Indicators<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:3.8}\t{:3.8}\t{:8.3}", self.step, self.nu, self.obj)
    }
}

impl<F: Float> Indicators<F> {
    pub(crate) fn from_step(
        previous: &FeasiblePoint<F>,
        next: &FeasiblePoint<F>,
        direction: &Direction<F>,
        c: &Array1<F>,
    ) -> Indicators<F> {
        let diff = &next.x - &previous.x;
        Indicators {
            step: num_traits::Float::sqrt(diff.dot(&diff)),
            nu: direction.nu,
            obj: c.dot(&next.x),
        }
    }

    /// The method has converged once a step barely moves the point.
    pub(crate) fn status(&self, tol: F) -> Status {
        if self.step < tol {
            Status::Converged
        } else {
            Status::Unfinished
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Converged,
    NoSolution(NoSolution),
    NotApplicable(Breakdown),
    Unfinished,
}
