#![allow(non_snake_case)]
#[cfg(not(feature = "blas"))]
use linfa_linalg::{
    cholesky::Cholesky,
    triangular::{SolveTriangularInplace, UPLO},
};
#[cfg(feature = "blas")]
use ndarray_linalg::{Determinant, Factorize, LUFactorized, Solve};

use ndarray::prelude::*;

use crate::float::Float;
use crate::solvers::{Breakdown, NoSolution};

use super::indicators::Status;

/// The slack form rescaled around the current point: `Ã = A D` and `c̃ = D c`, with `D = diag(x)`.
///
/// In scaled coordinates the current point is the all-ones vector, which sits far enough from every bound that a
/// long step along the projected gradient stays interior.
pub(crate) struct ScaledSystem<F> {
    A: Array2<F>,
    c: Array1<F>,
}

impl<F: Float> ScaledSystem<F> {
    pub(crate) fn new(A: &Array2<F>, c: &Array1<F>, x: &Array1<F>) -> ScaledSystem<F> {
        let D = Array2::from_diag(x);
        ScaledSystem {
            A: A.dot(&D),
            c: D.dot(c),
        }
    }

    /// Projection of the scaled cost onto the null space of `Ã`:
    ///
    /// ```text
    /// cp = c̃ - Ã' z,   (Ã Ã') z = Ã c̃
    /// ```
    ///
    /// The projection is applied a second time to the result, which removes the component in the row space of `Ã`
    /// left behind by rounding.
    ///
    /// Fails with the terminal status of the method when `Ã Ã'` is not finite or singular, or when the projection
    /// is not finite.
    pub(crate) fn projected_gradient(&self) -> Result<Array1<F>, Status> {
        let M = self.A.dot(&self.A.t());
        if !all_finite(&M) {
            return Err(Status::NoSolution(NoSolution::NonFinite));
        }
        let singular = Status::NotApplicable(Breakdown::SingularScaling);
        let factor = Factor::new(&M).ok_or(singular)?;

        let cp = self.project(&factor, &self.c).ok_or(singular)?;
        let cp = self.project(&factor, &cp).ok_or(singular)?;
        if !all_finite(&cp) {
            return Err(Status::NoSolution(NoSolution::NonFinite));
        }
        Ok(cp)
    }

    fn project(&self, factor: &Factor<F>, v: &Array1<F>) -> Option<Array1<F>> {
        let z = factor.solve(&self.A.dot(v))?;
        Some(v - &self.A.t().dot(&z))
    }
}

fn all_finite<F: Float, D: Dimension>(a: &Array<F, D>) -> bool {
    a.iter().all(|e| e.is_finite())
}

/// Factorization of the symmetric scaling matrix `M = Ã Ã'`, only built when `M` is nonsingular.
#[cfg(not(feature = "blas"))]
struct Factor<F> {
    L: Array2<F>,
}

#[cfg(not(feature = "blas"))]
impl<F: Float> Factor<F> {
    /// `M = L L'`, so the determinant is the product of the squared diagonal of `L`. A matrix that cannot be
    /// factorized is not positive definite, which for `Ã Ã'` means it is singular.
    fn new(M: &Array2<F>) -> Option<Factor<F>> {
        let L = M.cholesky().ok()?;
        let det = L.diag().fold(F::one(), |det, l| det * *l * *l);
        if det.is_nan() || det <= F::zero() {
            return None;
        }
        Some(Factor { L })
    }

    /// Solve `M z = r` by forward and backward substitution on the factor.
    fn solve(&self, r: &Array1<F>) -> Option<Array1<F>> {
        let mut z = r.to_owned().insert_axis(Axis(1));
        self.L.solve_triangular_inplace(&mut z, UPLO::Lower).ok()?;
        self.L.t().solve_triangular_inplace(&mut z, UPLO::Upper).ok()?;
        Some(z.remove_axis(Axis(1)))
    }
}

#[cfg(feature = "blas")]
struct Factor<F: Float> {
    lu: LUFactorized<ndarray::OwnedRepr<F>>,
}

#[cfg(feature = "blas")]
impl<F: Float> Factor<F> {
    fn new(M: &Array2<F>) -> Option<Factor<F>> {
        let lu = M.factorize().ok()?;
        if lu.det().ok()? == F::zero() {
            return None;
        }
        Some(Factor { lu })
    }

    fn solve(&self, r: &Array1<F>) -> Option<Array1<F>> {
        self.lu.solve(r).ok()
    }
}
