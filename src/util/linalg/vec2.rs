use crate::core::prelude::*;
use crate::util::linalg::macros::impl_vector;
use half::f16;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A two-component vector.
///
/// Component arithmetic follows the element type: see [`Scalar`]. For operations see
/// [`Vector`], [`VectorFloat`] and [`VectorInt`].
///
/// # Examples
/// ```
/// use tesseract_numerics::core::prelude::*;
/// let v = Vec2i::new(3, 4);
/// assert_eq!(v.length_squared(), 25);
/// assert_eq!(v.swizzle(1, 0).unwrap(), Vec2i::new(4, 3));
/// assert_eq!(format!("{:.1}", Vec2f::new(1.0, 0.5)), "vec(1.0, 0.5)");
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl_vector!(Vector2, 2; x: 0, y: 1);

impl<T: Scalar> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_tuple(tuple: &impl ReadOnlyTuple2<T>) -> Self {
        Self::new(tuple.x(), tuple.y())
    }

    /// The z-component of the 3D cross product of `self` and `other`, i.e. the signed area of the
    /// parallelogram they span.
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// `self` rotated a quarter turn, so that `self.orthog().dot(self)` is zero.
    #[must_use]
    pub fn orthog(&self) -> Self {
        Self::new(self.y, self.x.negated())
    }

    #[must_use]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: IntScalar> Vector2<T> {
    /// Every integer point `p` with `start <= p < end` componentwise, row by row.
    pub fn range(start: Self, end: Self) -> impl Iterator<Item = Self> {
        linalg::span(start.y, end.y)
            .cartesian_product(linalg::span(start.x, end.x))
            .map(|(y, x)| Self::new(x, y))
    }
}

impl<T: Scalar> Vector2D<T> for Vector2<T> {
    fn create(x: T, y: T) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> ReadOnlyTuple2<T> for Vector2<T> {
    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
}
impl<T: Scalar> Tuple2<T> for Vector2<T> {
    fn set_x(&mut self, value: T) {
        self.x = value;
    }
    fn set_y(&mut self, value: T) {
        self.y = value;
    }
}

pub type Vec2b = Vector2<u8>;
pub type Vec2sb = Vector2<i8>;
pub type Vec2s = Vector2<i16>;
pub type Vec2us = Vector2<u16>;
pub type Vec2i = Vector2<i32>;
pub type Vec2ui = Vector2<u32>;
pub type Vec2l = Vector2<i64>;
pub type Vec2ul = Vector2<u64>;
pub type Vec2n = Vector2<isize>;
pub type Vec2un = Vector2<usize>;
pub type Vec2h = Vector2<f16>;
pub type Vec2f = Vector2<f32>;
pub type Vec2d = Vector2<f64>;
pub type Vec2m = Vector2<Decimal>;
