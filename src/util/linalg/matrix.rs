use crate::core::prelude::*;
use crate::util::log::warn_every_seconds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2x2 matrix laid out row by row:
/// ```text
/// | m11 m12 |
/// | m21 m22 |
/// ```
///
/// # Examples
/// ```
/// use tesseract_numerics::core::prelude::*;
///
/// let m = Mat2f::new(2.0, 0.0, 0.0, 4.0);
/// assert_eq!(m * Vec2f::new(1.0, 1.0), Vec2f::new(2.0, 4.0));
/// assert_eq!(m.inverse() * m, Mat2f::identity());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
#[must_use]
pub struct Matrix2<T> {
    pub m11: T,
    pub m12: T,
    pub m21: T,
    pub m22: T,
}

pub type Mat2f = Matrix2<f32>;
pub type Mat2d = Matrix2<f64>;

impl<T: FloatScalar> Matrix2<T> {
    pub const fn new(m11: T, m12: T, m21: T, m22: T) -> Self {
        Self { m11, m12, m21, m22 }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one())
    }

    pub fn from_rows(r1: Vector2<T>, r2: Vector2<T>) -> Self {
        Self::new(r1.x, r1.y, r2.x, r2.y)
    }
    pub fn from_columns(c1: Vector2<T>, c2: Vector2<T>) -> Self {
        Self::new(c1.x, c2.x, c1.y, c2.y)
    }

    pub fn r1(&self) -> Vector2<T> {
        Vector2::new(self.m11, self.m12)
    }
    pub fn r2(&self) -> Vector2<T> {
        Vector2::new(self.m21, self.m22)
    }
    pub fn c1(&self) -> Vector2<T> {
        Vector2::new(self.m11, self.m21)
    }
    pub fn c2(&self) -> Vector2<T> {
        Vector2::new(self.m12, self.m22)
    }

    pub fn set_r1(&mut self, row: Vector2<T>) {
        self.m11 = row.x;
        self.m12 = row.y;
    }
    pub fn set_r2(&mut self, row: Vector2<T>) {
        self.m21 = row.x;
        self.m22 = row.y;
    }
    pub fn set_c1(&mut self, column: Vector2<T>) {
        self.m11 = column.x;
        self.m21 = column.y;
    }
    pub fn set_c2(&mut self, column: Vector2<T>) {
        self.m12 = column.x;
        self.m22 = column.y;
    }

    /// Exact comparison against [`identity`](Self::identity).
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn determinant(&self) -> T {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// The inverse matrix. A singular matrix has no inverse; it maps to
    /// [`zero`](Self::zero) and a rate-limited warning is logged.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det.is_zero() {
            warn_every_seconds!(
                WARN_INTERVAL_SECS,
                "inverse(): singular matrix {:?}",
                self
            );
            return Self::zero();
        }
        let inv_det = T::one() / det;
        Self::new(
            self.m22 * inv_det,
            -self.m12 * inv_det,
            -self.m21 * inv_det,
            self.m11 * inv_det,
        )
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.m11, self.m21, self.m12, self.m22)
    }

    /// True if every element differs from `rhs`'s by at most `epsilon`.
    pub fn equals_about(&self, rhs: Self, epsilon: T) -> bool {
        self.r1().equals_about(rhs.r1(), epsilon) && self.r2().equals_about(rhs.r2(), epsilon)
    }
}

impl<T: FloatScalar> num_traits::Zero for Matrix2<T> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<T: FloatScalar> num_traits::One for Matrix2<T> {
    fn one() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Add for Matrix2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_rows(self.r1() + rhs.r1(), self.r2() + rhs.r2())
    }
}

impl<T: FloatScalar> Sub for Matrix2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(self.r1() - rhs.r1(), self.r2() - rhs.r2())
    }
}

impl<T: FloatScalar> Neg for Matrix2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.m11, -self.m12, -self.m21, -self.m22)
    }
}

impl<T: FloatScalar> Mul for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r1().dot(rhs.c1()),
            self.r1().dot(rhs.c2()),
            self.r2().dot(rhs.c1()),
            self.r2().dot(rhs.c2()),
        )
    }
}

impl<T: FloatScalar> Mul<T> for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_rows(self.r1() * rhs, self.r2() * rhs)
    }
}

impl<T: FloatScalar> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.r1().dot(rhs), self.r2().dot(rhs))
    }
}

impl<T: FloatScalar> Hash for Matrix2<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .m11
            .hash_bits()
            .wrapping_add(self.m12.hash_bits().wrapping_mul(5))
            .wrapping_add(self.m21.hash_bits().wrapping_mul(10))
            .wrapping_add(self.m22.hash_bits().wrapping_mul(15));
        state.write_u64(combined);
    }
}

impl<T: FloatScalar> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "mat2({}, {})", self.r1(), self.r2())
    }
}
