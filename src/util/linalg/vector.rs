use crate::core::prelude::*;
use crate::util::log::warn_every_seconds;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, Shl,
    Shr, Sub, SubAssign,
};

/// Operations shared by every fixed-size vector, whatever its dimension or element type.
///
/// Arithmetic is componentwise. Each binary operator accepts either another vector or a single
/// scalar, which is applied to every component:
/// ```
/// use tesseract_numerics::core::prelude::*;
/// let v = Vec3i::new(1, 2, 3);
/// assert_eq!(v * Vec3i::new(2, 2, 0), Vec3i::new(2, 4, 0));
/// assert_eq!(v + 1, Vec3i::new(2, 3, 4));
/// assert_eq!(v.dot(v), 14);
/// ```
pub trait Vector<T: Scalar>:
    Copy
    + Debug
    + Default
    + PartialEq
    + IndexerMut<T>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Add<T, Output = Self>
    + Sub<T, Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + AddAssign<T>
    + SubAssign<T>
    + MulAssign<T>
    + DivAssign<T>
    + Neg<Output = Self>
{
    /// Number of components.
    const DIM: usize;

    /// A vector with every component set to `value`.
    fn splat(value: T) -> Self;
    #[must_use]
    fn zero() -> Self {
        Self::splat(T::zero())
    }
    #[must_use]
    fn one() -> Self {
        Self::splat(T::one())
    }

    /// Applies `f` to each component.
    #[must_use]
    fn map(self, f: impl FnMut(T) -> T) -> Self;
    /// True if `f` holds for every component.
    fn all(self, f: impl FnMut(T) -> bool) -> bool;

    #[must_use]
    fn abs(self) -> Self {
        self.map(Scalar::absolute)
    }
    /// Componentwise minimum.
    #[must_use]
    fn min(self, other: Self) -> Self;
    /// Componentwise maximum.
    #[must_use]
    fn max(self, other: Self) -> Self;
    /// Reorders each component pair in place so that `lo <= hi` componentwise afterwards.
    fn min_max(lo: &mut Self, hi: &mut Self);

    /// The sum of the components.
    fn sum(self) -> T;
    fn dot(self, other: Self) -> T {
        (self * other).sum()
    }
    fn length_squared(self) -> T {
        self.dot(self)
    }
    fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }
    fn is_zero_length(self) -> bool {
        self.all(|c| c.is_zero())
    }

    /// Unary plus: returns `self` unchanged.
    #[must_use]
    fn pos(self) -> Self {
        self
    }
    #[must_use]
    fn increment(self) -> Self {
        self + Self::one()
    }
    #[must_use]
    fn decrement(self) -> Self {
        self - Self::one()
    }
}

/// Vector operations that need a floating-point element type.
pub trait VectorFloat<T: FloatScalar>: Vector<T> {
    fn length(self) -> T {
        self.length_squared().sqrt()
    }
    fn distance(self, other: Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Scales `self` to unit length.
    ///
    /// A zero-length vector has no direction: the result is the componentwise `0 / 0`, i.e. all
    /// NaN, and a rate-limited warning is logged.
    #[must_use]
    fn normalize(self) -> Self {
        let length = self.length();
        if length.is_zero() {
            warn_every_seconds!(
                WARN_INTERVAL_SECS,
                "normalize(): zero-length vector {:?}",
                self
            );
        }
        self / length
    }

    #[must_use]
    fn sqrt(self) -> Self {
        self.map(Float::sqrt)
    }
    #[must_use]
    fn round(self) -> Self {
        self.map(Float::round)
    }
    #[must_use]
    fn floor(self) -> Self {
        self.map(Float::floor)
    }
    #[must_use]
    fn ceil(self) -> Self {
        self.map(Float::ceil)
    }

    /// Linear interpolation from `self` towards `to`, with `t` clamped to `[0, 1]`.
    #[must_use]
    fn lerp(self, to: Self, t: T) -> Self {
        let t = t.max(T::zero()).min(T::one());
        self + (to - self) * t
    }

    /// True if every component differs from `other`'s by at most `epsilon`.
    fn equals_about(self, other: Self, epsilon: T) -> bool {
        (self - other).abs().all(|d| d <= epsilon)
    }
    fn is_finite(self) -> bool {
        self.all(Float::is_finite)
    }
}

/// Vector operations that need a primitive integer element type.
///
/// Shift amounts, whether a single `u32` or a per-component vector, are reduced the way
/// [`IntScalar`] describes: modulo the bit width for 32- and 64-bit elements, and modulo 32 with
/// truncation for narrower ones.
pub trait VectorInt<T: IntScalar>:
    Vector<T>
    + Rem<Output = Self>
    + Rem<T, Output = Self>
    + BitAnd<Output = Self>
    + BitAnd<T, Output = Self>
    + BitOr<Output = Self>
    + BitOr<T, Output = Self>
    + BitXor<Output = Self>
    + BitXor<T, Output = Self>
    + Shl<u32, Output = Self>
    + Shl<Output = Self>
    + Shr<u32, Output = Self>
    + Shr<Output = Self>
    + Not<Output = Self>
    + Eq
{
    /// Logical right shift of every component by `n`, regardless of signedness.
    #[must_use]
    fn unsigned_shr(self, n: u32) -> Self {
        self.map(|c| c.wrapping_unsigned_shift_right(n))
    }
    /// Logical right shift of each component by the matching component of `amounts`.
    #[must_use]
    fn unsigned_shr_by(self, amounts: Self) -> Self;
}

pub trait Vector2D<T: Scalar>: Vector<T> + Tuple2<T> {
    fn create(x: T, y: T) -> Self;

    /// Builds a vector from components of `self` chosen by index.
    ///
    /// # Errors
    /// [`NumericsError::IndexOutOfRange`] if any index is not below 2.
    fn swizzle(&self, x: usize, y: usize) -> Result<Self> {
        Ok(Self::create(self.get(x)?, self.get(y)?))
    }
}

pub trait Vector3D<T: Scalar>: Vector<T> + Tuple3<T> {
    fn create(x: T, y: T, z: T) -> Self;

    /// # Errors
    /// [`NumericsError::IndexOutOfRange`] if any index is not below 3.
    fn swizzle(&self, x: usize, y: usize, z: usize) -> Result<Self> {
        Ok(Self::create(self.get(x)?, self.get(y)?, self.get(z)?))
    }
}

pub trait Vector4D<T: Scalar>: Vector<T> + Tuple4<T> {
    fn create(x: T, y: T, z: T, w: T) -> Self;

    /// # Errors
    /// [`NumericsError::IndexOutOfRange`] if any index is not below 4.
    fn swizzle(&self, x: usize, y: usize, z: usize, w: usize) -> Result<Self> {
        Ok(Self::create(
            self.get(x)?,
            self.get(y)?,
            self.get(z)?,
            self.get(w)?,
        ))
    }
}
