use ndarray::{Array1, Array2, Zip};

use crate::float::Float;
use crate::linear_program::Problem;

/// What the next simplex iteration does from the current basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Pivot on `(row, column)`.
    Pivot { row: usize, column: usize },
    /// No column can improve the objective any further.
    Optimal,
    /// No row qualifies for the ratio test, the iteration stops at a degenerate vertex.
    Degenerate,
    Unbounded,
}

/// Working tableau of the simplex method.
///
/// Owned by a single solve call; the problem it was built from is never touched.
pub(crate) struct Tableau<F> {
    /// Constraint rows, original columns followed by one slack column per row.
    a: Array2<F>,
    /// Right-hand side of each row.
    b: Array1<F>,
    /// Objective row, `-c` for the internal maximization.
    z: Array1<F>,
    /// Column of the basic variable of each row, `None` while the row's own slack is basic.
    base: Vec<Option<usize>>,
    /// Objective value of the current basis, not rounded.
    solution: F,
    eps: u32,
}

impl<F: Float> Tableau<F> {
    /// Bring the problem in standard form: one slack column per row, with the slack basis as the starting basis.
    pub(crate) fn standardize(problem: &Problem<F>, eps: u32) -> Tableau<F> {
        let (a, c) = problem.slack_form();
        Tableau {
            base: vec![None; a.nrows()],
            a,
            b: problem.b().to_owned(),
            z: c.mapv(|c| -c),
            solution: F::zero(),
            eps,
        }
    }

    /// Column with the most negative objective row entry, the first one on ties.
    pub(crate) fn pivot_column(&self) -> Option<usize> {
        self.z
            .iter()
            .enumerate()
            .filter(|(_, z)| **z < F::zero())
            .fold(None, |best: Option<(usize, F)>, (j, &z)| match best {
                Some((_, lowest)) if lowest <= z => best,
                _ => Some((j, z)),
            })
            .map(|(j, _)| j)
    }

    /// A column without any positive entry can be increased indefinitely.
    pub(crate) fn is_unbounded_column(&self, column: usize) -> bool {
        self.a.column(column).iter().all(|a| *a <= F::zero())
    }

    /// Ratio test: the row with the smallest strictly positive `b[i] / a[i][column]` among rows with a positive entry
    /// in `column`, the first one on ties.
    pub(crate) fn pivot_row(&self, column: usize) -> Option<usize> {
        self.a
            .column(column)
            .iter()
            .zip(self.b.iter())
            .enumerate()
            .filter(|(_, (a, _))| **a > F::zero())
            .map(|(i, (&a, &b))| (i, b / a))
            .filter(|(_, ratio)| *ratio > F::zero())
            .fold(None, |best: Option<(usize, F)>, (i, ratio)| match best {
                Some((_, lowest)) if lowest <= ratio => best,
                _ => Some((i, ratio)),
            })
            .map(|(i, _)| i)
    }

    /// Gauss-Jordan elimination of `column` around `(row, column)`. Every intermediate result is rounded to `eps`
    /// digits.
    pub(crate) fn pivot(&mut self, row: usize, column: usize) {
        let eps = self.eps;
        let k = self.a[[row, column]];
        self.base[row] = Some(column);

        self.a.row_mut(row).mapv_inplace(|a| (a / k).round_to(eps));
        self.b[row] = (self.b[row] / k).round_to(eps);

        let pivot_row = self.a.row(row).to_owned();
        let pivot_rhs = self.b[row];

        for (i, (mut a_row, b)) in self
            .a
            .rows_mut()
            .into_iter()
            .zip(self.b.iter_mut())
            .enumerate()
        {
            if i == row {
                continue;
            }
            let m = (a_row[column] / pivot_row[column]).round_to(eps);
            Zip::from(&mut a_row)
                .and(&pivot_row)
                .for_each(|a, &p| *a = (*a - m * p).round_to(eps));
            *b = (*b - m * pivot_rhs).round_to(eps);
        }

        let m = self.z[column];
        Zip::from(&mut self.z)
            .and(&pivot_row)
            .for_each(|z, &p| *z = (*z - m * p).round_to(eps));
        self.solution = self.solution - m * pivot_rhs;
    }

    /// Select the pivot of the next iteration, or the reason there is none.
    pub(crate) fn next_pivot(&self) -> Status {
        let column = match self.pivot_column() {
            Some(column) => column,
            None => return Status::Optimal,
        };
        if self.is_unbounded_column(column) {
            return Status::Unbounded;
        }
        let row = match self.pivot_row(column) {
            Some(row) => row,
            None => return Status::Degenerate,
        };
        Status::Pivot { row, column }
    }

    /// Values of the first `n_vars` variables: basic variables read their row's right-hand side, the rest are zero.
    pub(crate) fn assignment(&self, n_vars: usize) -> Array1<F> {
        let mut x = Array1::zeros(n_vars);
        for (column, b) in self.base.iter().zip(self.b.iter()) {
            if let Some(j) = column.filter(|j| *j < n_vars) {
                x[j] = *b;
            }
        }
        x
    }

    /// Objective value of the internal maximization.
    pub(crate) fn solution(&self) -> F {
        self.solution
    }

    pub(crate) fn base(&self) -> &[Option<usize>] {
        &self.base
    }
}
