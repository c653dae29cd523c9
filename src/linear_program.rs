#![allow(non_snake_case)]
//! Definition of a linear program.
//!
//! To get started, see the documentation of [`Problem`] on how to build a [`Problem`] through the builder pattern.
use crate::{error::LinearProgramError, float::Float};
use ndarray::prelude::*;

/// Direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Maximize,
    Minimize,
}

impl Mode {
    /// Both solvers always maximize internally. Minimization negates the cost vector on the way in and the
    /// objective value on the way out, both through this map.
    pub(crate) fn orient<F: Float>(self, value: F) -> F {
        match self {
            Mode::Maximize => value,
            Mode::Minimize => -value,
        }
    }
}

/// A linear program in normal form, with only `<=` constraints and nonnegative variables.
///
/// ```text
/// max_x / min_x c ' x
/// st            A ' x <= b
///                   x >= 0
/// ```
///
/// The solvers convert it to slack form (with only equality constraints) by adding one slack variable per row:
///
/// ```text
/// max_{x,s} c'x + 0's
///        st \[ A I \] \[x s\]' == b
///                       x,s >= 0
/// ```
///
/// The problem itself is immutable. Every solve call builds its own working copy, so one [`Problem`] can be passed
/// to any number of solvers, any number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    mode: Mode,
    A: Array2<F>,
    b: Array1<F>,
    c: Array1<F>,
}

impl<F: Float> Problem<F> {
    /// Build a problem using the builder pattern.
    ///
    /// Specify whether `c'x` should be maximized or minimized, and the cost vector `c`.
    /// Returns a [`ProblemBuilder`] object that must be given the inequality constraints.
    pub fn target(mode: Mode, c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(mode, c)
    }

    /// Shorthand for [`Problem::target`] with [`Mode::Maximize`].
    pub fn maximize(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(Mode::Maximize, c)
    }

    /// Shorthand for [`Problem::target`] with [`Mode::Minimize`].
    pub fn minimize(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(Mode::Minimize, c)
    }

    /// Return the direction of optimization
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return the constraint matrix
    pub fn A(&self) -> &Array2<F> {
        &self.A
    }

    /// Return the constraint vector
    pub fn b(&self) -> &Array1<F> {
        &self.b
    }

    /// Return the cost vector
    pub fn c(&self) -> &Array1<F> {
        &self.c
    }

    /// Number of decision variables, excluding slacks
    pub fn n_vars(&self) -> usize {
        self.c.len()
    }

    /// Number of `<=` constraints, which is also the number of slack variables
    pub fn n_constraints(&self) -> usize {
        self.b.len()
    }

    /// Cost vector oriented for maximization.
    pub(crate) fn internal_c(&self) -> Array1<F> {
        self.c.mapv(|c| self.mode.orient(c))
    }

    /// Constraint matrix `[A I]` and the oriented cost vector `[c 0]` of the slack form.
    pub(crate) fn slack_form(&self) -> (Array2<F>, Array1<F>) {
        let (m, n) = self.A.dim();
        let mut A = Array2::zeros((m, n + m));
        A.slice_mut(s![.., ..n]).assign(&self.A);
        A.slice_mut(s![.., n..]).assign(&Array2::eye(m));

        let mut c = Array1::zeros(n + m);
        c.slice_mut(s![..n]).assign(&self.internal_c());
        (A, c)
    }

    /// Map an objective value of the internal maximization back to the caller's direction.
    pub(crate) fn denormalize_target(&self, internal: F) -> F {
        self.mode.orient(internal)
    }

    /// Drop the slack variables from a slack-form point.
    pub(crate) fn denormalize_x_into(&self, x_slack: Array1<F>) -> Array1<F> {
        x_slack.slice(s![..self.n_vars()]).into_owned()
    }
}

/// Construct a problem from a cost vector and inequality constraints.
pub struct ProblemBuilder<'a, F> {
    mode: Mode,
    c: &'a Array1<F>,
    ub: Option<(&'a Array2<F>, &'a Array1<F>)>,
}

impl<'a, F: Float> ProblemBuilder<'a, F> {
    /// Start building a problem. Takes the direction and the cost vector `c` of the target `c'x`.
    pub fn new(mode: Mode, c: &'a Array1<F>) -> ProblemBuilder<'a, F> {
        ProblemBuilder { mode, c, ub: None }
    }

    /// Set the constraints of the problem, such that `A ' x <= b`.
    /// To prevent numerical problems, it is advisable to remove redundant constraints and to scale all constraints to
    /// roughly the same order of magnitude.
    pub fn ub(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.ub = Some((A, b));
        self
    }

    /// Construct a linear program from the provided inputs, validating the input values.
    ///
    /// Returns an error if there are no constraints, if the dimensions of `c`, `A` and `b` do not conform, or if any
    /// of them contains NaN or infinite values.
    pub fn build(self) -> Result<Problem<F>, LinearProgramError> {
        let (A, b) = match self.ub {
            Some((A, b)) if A.nrows() > 0 => (A, b),
            _ => return Err(LinearProgramError::Unconstrained),
        };

        let (nrows, ncols) = A.dim();
        if self.c.is_empty() || ncols != self.c.len() || nrows != b.len() {
            return Err(LinearProgramError::IncompatibleInputDimensions);
        }

        let finite = |x: &F| x.is_finite();
        if !(self.c.iter().all(finite) && A.iter().all(finite) && b.iter().all(finite)) {
            return Err(LinearProgramError::NonFiniteInput);
        }

        Ok(Problem {
            mode: self.mode,
            A: A.to_owned(),
            b: b.to_owned(),
            c: self.c.to_owned(),
        })
    }
}
