//! Dense solvers for linear programs: the tableau Simplex method and the affine scaling Interior Point method.
//!
//! # Linear programs
//!
//! A linear program is a mathematical optimization problem defined as:
//!
//! ```text
//!    max_x / min_x c'x
//!    st            A'x <= b
//!                    x >= 0
//! ```
//!
//! Both solvers bring the problem in slack form by adding one slack variable per constraint, and maximize internally;
//! minimization problems have their cost vector negated on the way in and their objective value on the way out.
//!
//! * [`Simplex`](solvers::Simplex) pivots a tableau starting from the slack basis, so every right-hand side must be
//!   nonnegative. Every pivot is rounded to a fixed number of decimal digits.
//! * [`InteriorPoint`](solvers::InteriorPoint) walks through the interior of the feasible set along projected
//!   gradients of the rescaled problem, starting from a strictly positive point.
//!
//! Solving never mutates the problem. Algorithmic terminal states (optimal, unbounded, numerical breakdown, iteration
//! limit) are reported as an [`Outcome`]; invalid input is reported as a [`LinearProgramError`](error::LinearProgramError).
//!
//! # Example
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::array;
//!
//! use lp_methods::{Outcome, Problem};
//! use lp_methods::solvers::{InteriorPoint, Simplex, Solver};
//!
//! let A_ub = array![[2f64, 1., -2.], [1., 2., 4.], [1., -1., 2.]];
//! let b_ub = array![24., 23., 10.];
//! let c = array![-2., 2., -6.];
//!
//! let problem = Problem::minimize(&c)
//!     .ub(&A_ub, &b_ub)
//!     .build()
//!     .unwrap();
//!
//! // These are the default values you can overwrite.
//! // You may omit any option for which the default is good enough for you
//! let simplex = Simplex::custom()
//!     .eps(5)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//! let interior_point = InteriorPoint::custom()
//!     .alpha(0.5)
//!     .eps(5)
//!     .tol(1e-5)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//!
//! let exact = simplex.solve(&problem).unwrap().into_optimal().unwrap();
//! let approximate = interior_point.solve(&problem).unwrap().into_optimal().unwrap();
//!
//! assert_abs_diff_eq!(*exact.fun(), -30.75, epsilon = 1e-6);
//! assert_abs_diff_eq!(*approximate.fun(), *exact.fun(), epsilon = 1e-3);
//!
//! // `x1 - x2 <= 1` does not stop `x1 + x2` from growing
//! let A_ub = array![[1., -1.]];
//! let b_ub = array![1.];
//! let c = array![1., 1.];
//! let problem = Problem::maximize(&c).ub(&A_ub, &b_ub).build().unwrap();
//! assert_eq!(simplex.solve(&problem).unwrap(), Outcome::Unbounded);
//! ```
//!
//! # Feature flags
//!
//! ### `[blas]`
//! By default the scaling system of the interior point method is factorized with a pure-Rust Cholesky decomposition.
//! Set the `blas` feature to factorize it through LAPACK instead.

pub mod error;
pub(crate) mod float;
pub mod linear_program;
pub mod prelude;
pub mod solvers;

pub use linear_program::{Mode, Problem, ProblemBuilder};
pub use solvers::{OptimizeResult, Outcome};
