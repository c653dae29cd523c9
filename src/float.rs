use ndarray::NdFloat;
use num_traits::NumCast;

#[cfg(not(feature = "blas"))]
pub trait Float: NdFloat {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }

    /// Round to `digits` decimal places, ties to even.
    ///
    /// Values that overflow when scaled are returned unchanged.
    fn round_to(self, digits: u32) -> Self {
        round_half_even(self, digits)
    }
}

#[cfg(feature = "blas")]
pub trait Float: NdFloat + ndarray_linalg::Lapack + ndarray_linalg::Scalar<Real = Self> {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }

    /// Round to `digits` decimal places, ties to even.
    ///
    /// Values that overflow when scaled are returned unchanged.
    fn round_to(self, digits: u32) -> Self {
        round_half_even(self, digits)
    }
}

fn round_half_even<F: NdFloat>(x: F, digits: u32) -> F {
    let ten: F = NumCast::from(10).unwrap();
    let two: F = NumCast::from(2).unwrap();
    let half: F = NumCast::from(0.5).unwrap();

    let scale = ten.powi(digits as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || !scale.is_finite() {
        return x;
    }
    let mut rounded = scaled.round();
    if (rounded - scaled).abs() == half {
        rounded = (scaled / two).round() * two;
    }
    rounded / scale
}

impl Float for f64 {}
impl Float for f32 {}
