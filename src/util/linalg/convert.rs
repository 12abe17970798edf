//! Lossless conversions between vectors.
//!
//! Element widening is implicit (`From`) exactly where the element types themselves convert
//! losslessly. Everything else goes through [`Vector2::cast`] (checked) or
//! [`Vector2::as_lossy`] (`as`-style), and their `Vector3`/`Vector4` counterparts.

use crate::core::prelude::*;
use half::f16;
use rust_decimal::Decimal;

macro_rules! impl_widening {
    ($from:ty => $($to:ty),+) => { $(
        impl From<Vector2<$from>> for Vector2<$to> {
            fn from(v: Vector2<$from>) -> Self {
                Self::new(v.x.into(), v.y.into())
            }
        }
        impl From<Vector3<$from>> for Vector3<$to> {
            fn from(v: Vector3<$from>) -> Self {
                Self::new(v.x.into(), v.y.into(), v.z.into())
            }
        }
        impl From<Vector4<$from>> for Vector4<$to> {
            fn from(v: Vector4<$from>) -> Self {
                Self::new(v.x.into(), v.y.into(), v.z.into(), v.w.into())
            }
        }
    )+ };
}

impl_widening!(i8 => i16, i32, i64, isize, f16, f32, f64, Decimal);
impl_widening!(i16 => i32, i64, isize, f32, f64, Decimal);
impl_widening!(i32 => i64, f64, Decimal);
impl_widening!(i64 => Decimal);
impl_widening!(isize => Decimal);
impl_widening!(u8 => u16, u32, u64, usize, i16, i32, i64, isize, f16, f32, f64, Decimal);
impl_widening!(u16 => u32, u64, usize, i32, i64, f32, f64, Decimal);
impl_widening!(u32 => u64, i64, f64, Decimal);
impl_widening!(u64 => Decimal);
impl_widening!(usize => Decimal);
impl_widening!(f16 => f32, f64);
impl_widening!(f32 => f64);

// Embedding into a higher dimension pads with zero.
impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    fn from(v: Vector2<T>) -> Self {
        v.extend(T::zero())
    }
}
impl<T: Scalar> From<Vector2<T>> for Vector4<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y, T::zero(), T::zero())
    }
}
impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    fn from(v: Vector3<T>) -> Self {
        v.extend(T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(Vec2i::from(Vec2s::new(-3, 4)), Vec2i::new(-3, 4));
        assert_eq!(Vec3us::from(Vec3b::new(1, 2, 255)), Vec3us::new(1, 2, 255));
        assert_eq!(Vec2d::from(Vec2i::new(i32::MIN, 7)), Vec2d::new(-2_147_483_648.0, 7.0));
        assert_eq!(
            Vec4f::from(Vec4h::new(f16::ONE, f16::ZERO, f16::NEG_ONE, f16::from_f32(0.5))),
            Vec4f::new(1.0, 0.0, -1.0, 0.5)
        );
        assert_eq!(Vec2m::from(Vec2l::new(-1, 2)), Vec2m::new(Decimal::NEGATIVE_ONE, Decimal::TWO));
        let widened: Vec2l = Vec2ui::new(u32::MAX, 0).into();
        assert_eq!(widened, Vec2l::new(4_294_967_295, 0));
    }

    #[test]
    fn checked_narrowing() {
        assert_eq!(Vec2i::new(1, 255).cast::<u8>(), Some(Vec2b::new(1, 255)));
        assert_eq!(Vec2i::new(1, 256).cast::<u8>(), None);
        assert_eq!(Vec3i::new(-1, 0, 1).cast::<u32>(), None);
        assert_eq!(Vec2f::new(1.5, -2.5).cast::<i32>(), Some(Vec2i::new(1, -2)));
        assert_eq!(Vec2f::new(f32::NAN, 0.0).cast::<i32>(), None);
        assert_eq!(Vec4d::new(1.0, 2.0, 3.0, 4.0).cast::<f32>(), Some(Vec4f::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn lossy_casts() {
        assert_eq!(Vec2i::new(-1, 256).as_lossy::<u8>(), Vec2b::new(255, 0));
        assert_eq!(Vec2f::new(1.9, -1.9).as_lossy::<i32>(), Vec2i::new(1, -1));
        assert_eq!(Vec3ui::new(u32::MAX, 1, 2).as_lossy::<i32>(), Vec3i::new(-1, 1, 2));
        assert_eq!(Vec2d::new(1e40, 0.5).as_lossy::<f32>(), Vec2f::new(f32::INFINITY, 0.5));
    }

    #[test]
    fn dimension_padding_and_truncation() {
        assert_eq!(Vec3i::from(Vec2i::new(1, 2)), Vec3i::new(1, 2, 0));
        assert_eq!(Vec4i::from(Vec2i::new(1, 2)), Vec4i::new(1, 2, 0, 0));
        assert_eq!(Vec4i::from(Vec3i::new(1, 2, 3)), Vec4i::new(1, 2, 3, 0));
        assert_eq!(Vec4i::from(Vec3i::new(1, 2, 3)).truncate(), Vec3i::new(1, 2, 3));
        assert_eq!(Vec3i::new(1, 2, 3).xy(), Vec2i::new(1, 2));
    }
}
