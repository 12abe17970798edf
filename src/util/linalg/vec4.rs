use crate::core::prelude::*;
use crate::util::linalg::macros::impl_vector;
use half::f16;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A four-component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector!(Vector4, 4; x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> Vector4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn from_tuple(tuple: &impl ReadOnlyTuple4<T>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z(), tuple.w())
    }

    /// Drops `w`.
    #[must_use]
    pub fn truncate(self) -> Vector3<T> {
        self.xyz()
    }
    #[must_use]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
    #[must_use]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Scalar> Vector4D<T> for Vector4<T> {
    fn create(x: T, y: T, z: T, w: T) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> ReadOnlyTuple2<T> for Vector4<T> {
    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
}
impl<T: Scalar> ReadOnlyTuple3<T> for Vector4<T> {
    fn z(&self) -> T {
        self.z
    }
}
impl<T: Scalar> ReadOnlyTuple4<T> for Vector4<T> {
    fn w(&self) -> T {
        self.w
    }
}
impl<T: Scalar> Tuple2<T> for Vector4<T> {
    fn set_x(&mut self, value: T) {
        self.x = value;
    }
    fn set_y(&mut self, value: T) {
        self.y = value;
    }
}
impl<T: Scalar> Tuple3<T> for Vector4<T> {
    fn set_z(&mut self, value: T) {
        self.z = value;
    }
}
impl<T: Scalar> Tuple4<T> for Vector4<T> {
    fn set_w(&mut self, value: T) {
        self.w = value;
    }
}

pub type Vec4b = Vector4<u8>;
pub type Vec4sb = Vector4<i8>;
pub type Vec4s = Vector4<i16>;
pub type Vec4us = Vector4<u16>;
pub type Vec4i = Vector4<i32>;
pub type Vec4ui = Vector4<u32>;
pub type Vec4l = Vector4<i64>;
pub type Vec4ul = Vector4<u64>;
pub type Vec4n = Vector4<isize>;
pub type Vec4un = Vector4<usize>;
pub type Vec4h = Vector4<f16>;
pub type Vec4f = Vector4<f32>;
pub type Vec4d = Vector4<f64>;
pub type Vec4m = Vector4<Decimal>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn construction_round_trips_every_element_type() {
        macro_rules! round_trip {
            ($($t:ty: $a:expr, $b:expr, $c:expr, $d:expr);+ $(;)?) => { $(
                let v = Vector4::<$t>::new($a, $b, $c, $d);
                assert_eq!((v.x, v.y, v.z, v.w), ($a, $b, $c, $d));
                assert_eq!((v[0], v[1], v[2], v[3]), ($a, $b, $c, $d));
                assert_eq!(v.get(3).unwrap(), $d);
                assert_eq!(<Vector4<$t> as Vector4D<$t>>::create($a, $b, $c, $d), v);
            )+ };
        }
        round_trip!(
            u8: 1, 2, 3, 255;
            i8: -128, 0, 1, 127;
            i16: -300, 0, 300, 1;
            u16: 1, 2, 3, 4;
            i32: -5, 5, 6, 7;
            u32: 0, 1, 2, 3;
            i64: -1, 0, 1, 2;
            u64: 1, 2, 3, 4;
            isize: -9, 9, 0, 1;
            usize: 3, 4, 5, 6;
            f16: f16::ONE, f16::ZERO, f16::NEG_ONE, f16::MAX;
            f32: 1.5, -2.25, 0.0, 8.0;
            f64: 1.0, 2.0, 3.0, 4.0;
            Decimal: Decimal::ONE, Decimal::TWO, Decimal::TEN, Decimal::ZERO;
        );
    }

    #[test]
    fn indexer_and_tuples() {
        let mut v = Vec4i::new(1, 2, 3, 4);
        assert!(v.get(4).is_err());
        assert!(v.set(4, 0).is_err());
        v.set(3, 0).unwrap();
        v.set_w(5);
        v.set_z(-1);
        assert_eq!(v, Vec4i::new(1, 2, -1, 5));
        assert_eq!(v.w(), 5);
        assert_eq!(Vec4i::from_tuple(&[9, 8, 7, 6]), Vec4i::new(9, 8, 7, 6));
        assert_eq!(Vec4i::from((9, 8, 7, 6)), Vec4i::new(9, 8, 7, 6));
    }

    #[test]
    fn swizzles_and_truncation() {
        let v = Vec4i::new(1, 2, 3, 4);
        assert_eq!(v.swizzle(3, 2, 1, 0).unwrap(), Vec4i::new(4, 3, 2, 1));
        assert_eq!(v.swizzle2(3, 0).unwrap(), Vec2i::new(4, 1));
        assert_eq!(v.swizzle3(0, 0, 0).unwrap(), Vec3i::new(1, 1, 1));
        assert!(v.swizzle(0, 1, 2, 4).is_err());
        assert_eq!(v.truncate(), Vec3i::new(1, 2, 3));
        assert_eq!(v.xy(), Vec2i::new(1, 2));
        assert_eq!(Vec4i::from(Vec2i::new(1, 2)), Vec4i::new(1, 2, 0, 0));
    }

    #[test]
    fn arithmetic() {
        let a = Vec4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.sum(), 10.0);
        assert_eq!(a.dot(a), 30.0);
        assert_eq!(a / 2.0, Vec4f::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a + a, Vec4f::zero());
        assert_eq!((a * 0.5).floor(), Vec4f::new(0.0, 1.0, 1.0, 2.0));
        let b = Vec4b::new(0b1100, 0, 255, 1);
        assert_eq!(b ^ Vec4b::splat(0b1010), Vec4b::new(0b0110, 0b1010, 0b1111_0101, 0b1011));
        assert_eq!(b >> 2, Vec4b::new(3, 0, 63, 0));
    }

    #[test]
    fn hashing_uses_all_components() {
        fn hash_of(v: Vec4i) -> u64 {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }
        assert_ne!(hash_of(Vec4i::new(0, 0, 0, 1)), hash_of(Vec4i::new(0, 0, 1, 0)));
        assert_eq!(hash_of(Vec4i::new(1, 2, 3, 4)), hash_of(Vec4i::from([1, 2, 3, 4])));
    }

    #[test]
    fn display_with_precision() {
        assert_eq!(
            format!("{:.1}", Vec4d::new(1.0, 2.0, 3.0, 4.0)),
            "vec(1.0, 2.0, 3.0, 4.0)"
        );
    }
}
