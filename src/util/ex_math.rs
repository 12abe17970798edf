//! Scalar helpers shared by the vector and rectangle types.

use crate::core::prelude::*;
use crate::util::linalg::Scalar;

/// The smaller of `a` and `b`. A NaN float operand makes the result NaN.
pub fn min<T: Scalar>(a: T, b: T) -> T {
    a.scalar_min(b)
}
pub fn min3<T: Scalar>(a: T, b: T, c: T) -> T {
    min(min(a, b), c)
}
pub fn min4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    min(min(a, b), min(c, d))
}

/// The larger of `a` and `b`. A NaN float operand makes the result NaN.
pub fn max<T: Scalar>(a: T, b: T) -> T {
    a.scalar_max(b)
}
pub fn max3<T: Scalar>(a: T, b: T, c: T) -> T {
    max(max(a, b), c)
}
pub fn max4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    max(max(a, b), max(c, d))
}

/// The smallest element of `values`.
///
/// # Errors
/// [`NumericsError::InvalidArgument`] if `values` is empty.
///
/// # Examples
/// ```
/// use tesseract_numerics::util::ex_math;
/// assert_eq!(ex_math::min_of(&[4, -2, 7]).unwrap(), -2);
/// assert!(ex_math::min_of::<i32>(&[]).is_err());
/// ```
pub fn min_of<T: Scalar>(values: &[T]) -> Result<T> {
    values
        .iter()
        .copied()
        .reduce(min)
        .ok_or_else(|| empty_values("cannot find minimum of zero-length slice"))
}

/// The largest element of `values`.
///
/// # Errors
/// [`NumericsError::InvalidArgument`] if `values` is empty.
pub fn max_of<T: Scalar>(values: &[T]) -> Result<T> {
    values
        .iter()
        .copied()
        .reduce(max)
        .ok_or_else(|| empty_values("cannot find maximum of zero-length slice"))
}

fn empty_values(reason: &'static str) -> anyhow::Error {
    NumericsError::InvalidArgument {
        name: "values",
        reason,
    }
    .into()
}

/// Reorders the pair in place so that `*lo <= *hi` afterwards.
pub fn min_max<T: PartialOrd>(lo: &mut T, hi: &mut T) {
    if *lo > *hi {
        std::mem::swap(lo, hi);
    }
}

/// Approximate equality for floating-point scalars.
pub trait EqualsAbout: Copy {
    const DEFAULT_EPSILON: Self;

    /// True if `self` and `other` differ by at most `epsilon`.
    fn equals_about(self, other: Self, epsilon: Self) -> bool;

    fn almost_eq(self, other: Self) -> bool {
        self.equals_about(other, Self::DEFAULT_EPSILON)
    }
}

impl EqualsAbout for f32 {
    const DEFAULT_EPSILON: Self = EPSILON;

    fn equals_about(self, other: Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}

impl EqualsAbout for f64 {
    const DEFAULT_EPSILON: Self = EPSILON_F64;

    fn equals_about(self, other: Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}

pub fn equals_about<F: EqualsAbout>(a: F, b: F, epsilon: F) -> bool {
    a.equals_about(b, epsilon)
}
