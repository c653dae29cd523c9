#[doc(no_inline)]
pub use crate::error::LinearProgramError;
#[doc(no_inline)]
pub use crate::linear_program::{Mode, Problem};
#[doc(no_inline)]
pub use crate::solvers::interior_point::InteriorPoint;
#[doc(no_inline)]
pub use crate::solvers::simplex::Simplex;
#[doc(no_inline)]
pub use crate::solvers::{Breakdown, NoSolution, OptimizeResult, Outcome, Solver};
