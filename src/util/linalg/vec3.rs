use crate::core::prelude::*;
use crate::util::linalg::macros::impl_vector;
use half::f16;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A three-component vector.
///
/// # Examples
/// ```
/// use tesseract_numerics::core::prelude::*;
/// let v = Vec3i::new(1, 2, 3);
/// assert_eq!(v.sum(), 6);
/// assert_eq!(v.xy(), Vec2i::new(1, 2));
/// assert_eq!(Vec3i::from(Vec2i::new(1, 2)), Vec3i::new(1, 2, 0));
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector!(Vector3, 3; x: 0, y: 1, z: 2);

impl<T: Scalar> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn from_tuple(tuple: &impl ReadOnlyTuple3<T>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z())
    }

    /// The right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
    /// Drops `z`.
    #[must_use]
    pub fn truncate(self) -> Vector2<T> {
        self.xy()
    }
    #[must_use]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Scalar> Vector3D<T> for Vector3<T> {
    fn create(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> ReadOnlyTuple2<T> for Vector3<T> {
    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
}
impl<T: Scalar> ReadOnlyTuple3<T> for Vector3<T> {
    fn z(&self) -> T {
        self.z
    }
}
impl<T: Scalar> Tuple2<T> for Vector3<T> {
    fn set_x(&mut self, value: T) {
        self.x = value;
    }
    fn set_y(&mut self, value: T) {
        self.y = value;
    }
}
impl<T: Scalar> Tuple3<T> for Vector3<T> {
    fn set_z(&mut self, value: T) {
        self.z = value;
    }
}

pub type Vec3b = Vector3<u8>;
pub type Vec3sb = Vector3<i8>;
pub type Vec3s = Vector3<i16>;
pub type Vec3us = Vector3<u16>;
pub type Vec3i = Vector3<i32>;
pub type Vec3ui = Vector3<u32>;
pub type Vec3l = Vector3<i64>;
pub type Vec3ul = Vector3<u64>;
pub type Vec3n = Vector3<isize>;
pub type Vec3un = Vector3<usize>;
pub type Vec3h = Vector3<f16>;
pub type Vec3f = Vector3<f32>;
pub type Vec3d = Vector3<f64>;
pub type Vec3m = Vector3<Decimal>;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // ==================== Construction and access ====================

    #[test]
    fn construction_round_trips_every_element_type() {
        macro_rules! round_trip {
            ($($t:ty: $a:expr, $b:expr, $c:expr);+ $(;)?) => { $(
                let v = Vector3::<$t>::new($a, $b, $c);
                assert_eq!((v.x, v.y, v.z), ($a, $b, $c));
                assert_eq!((v[0], v[1], v[2]), ($a, $b, $c));
                assert_eq!(v.get(2).unwrap(), $c);
                assert_eq!(<Vector3<$t> as Vector3D<$t>>::create($a, $b, $c), v);
            )+ };
        }
        round_trip!(
            u8: 1, 2, 3;
            i8: -1, 0, 1;
            i16: -300, 0, 300;
            u16: 1, 2, 65_535;
            i32: -5, 5, 6;
            u32: 0, 1, 2;
            i64: -1, 0, 1;
            u64: 1, 2, 3;
            isize: -9, 9, 0;
            usize: 3, 4, 5;
            f16: f16::ONE, f16::ZERO, f16::NEG_ONE;
            f32: 1.5, -2.25, 0.0;
            f64: 1.0, 2.0, 3.0;
            Decimal: Decimal::ONE, Decimal::TWO, Decimal::TEN;
        );
    }

    #[test]
    fn indexer_and_tuples() {
        let mut v = Vec3i::new(1, 2, 3);
        assert!(v.get(3).is_err());
        v.set(2, 9).unwrap();
        v.set_x(0);
        assert_eq!(v, Vec3i::new(0, 2, 9));
        assert_eq!(Vec3i::from_tuple(&(4, 5, 6)), Vec3i::new(4, 5, 6));
        assert_eq!(Vec3i::from([4, 5, 6]), Vec3i::new(4, 5, 6));
        assert_eq!(<(i32, i32, i32)>::from(v), (0, 2, 9));
    }

    #[test]
    fn swizzles() {
        let v = Vec3i::new(1, 2, 3);
        assert_eq!(v.swizzle(2, 1, 0).unwrap(), Vec3i::new(3, 2, 1));
        assert_eq!(v.swizzle2(2, 2).unwrap(), Vec2i::new(3, 3));
        assert_eq!(v.swizzle4(0, 1, 2, 0).unwrap(), Vec4i::new(1, 2, 3, 1));
        assert!(v.swizzle(0, 1, 3).is_err());
    }

    // ==================== Arithmetic ====================

    #[test]
    fn reductions() {
        let v = Vec3i::new(1, 2, 3);
        assert_eq!(v.sum(), 6);
        assert_eq!(v.dot(Vec3i::one()), 6);
        assert_eq!(v.length_squared(), 14);
        assert_eq!(v * 2 - v, v);
        assert_eq!(3 * v, Vec3i::new(3, 6, 9));
    }

    #[test]
    fn cross_product() {
        let x = Vec3f::new(1.0, 0.0, 0.0);
        let y = Vec3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3f::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3f::new(0.0, 0.0, -1.0));
        let v = Vec3i::new(2, -3, 5);
        assert_eq!(v.cross(v), Vec3i::zero());
    }

    #[test]
    fn dimension_changes() {
        let v = Vec3d::new(1.0, 2.0, 3.0);
        assert_eq!(v.truncate(), Vec2d::new(1.0, 2.0));
        assert_eq!(v.extend(4.0), Vec4d::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vec4d::from(v), Vec4d::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn float_operations() {
        let v = Vec3f::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert!(ex_math::equals_about(v.normalize().length(), 1.0, EPSILON));
        let a = Vec3d::new(0.1, 0.2, 0.3);
        assert!(a.equals_about(Vec3d::new(0.1, 0.2, 0.3 + 1e-12), EPSILON_F64));
        assert!(!a.equals_about(Vec3d::new(0.1, 0.2, 0.4), EPSILON_F64));
    }

    #[test]
    fn integer_operations() {
        let v = Vec3s::new(-1, 2, 0x4000);
        assert_eq!(v << 1, Vec3s::new(-2, 4, i16::MIN));
        assert_eq!(v.unsigned_shr(15), Vec3s::new(-1, 0, 0));
        assert_eq!(v.unsigned_shr(17), Vec3s::new(0x7fff, 0, 0));
        assert_eq!(v << 16, Vec3s::zero());
        assert_eq!(v & Vec3s::new(0xff, 0xff, 0xff), Vec3s::new(0xff, 2, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Vec3i::new(1, 2, 3).to_string(), "vec(1, 2, 3)");
    }

    // ==================== Properties ====================

    #[test]
    fn algebraic_properties() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let a = Vec3l::new(
                rng.gen_range(-99..99),
                rng.gen_range(-99..99),
                rng.gen_range(-99..99),
            );
            let b = Vec3l::new(
                rng.gen_range(-99..99),
                rng.gen_range(-99..99),
                rng.gen_range(-99..99),
            );
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a.min(b) + a.max(b), a + b);
            assert_eq!(a.cross(b).dot(a), 0);

            let u = Vec3us::from(rng.gen::<[u16; 3]>());
            assert_eq!(u.abs(), u);
        }
    }
}
