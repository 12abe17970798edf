//! Generic fixed-size vectors and axis-aligned rectangles.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] are plain `#[repr(C)]` structs generic over any
//! [`Scalar`] element type. Shared operations live on the [`Vector`] trait, with
//! [`VectorFloat`] and [`VectorInt`] adding the ones that depend on the element kind, and the
//! per-dimension [`Vector2D`], [`Vector3D`] and [`Vector4D`] adding construction and swizzling.
//!
//! # Examples
//! ```
//! use tesseract_numerics::core::prelude::*;
//!
//! let a = Vec2f::new(3.0, 4.0);
//! assert_eq!(a.length(), 5.0);
//! assert!(a.normalize().equals_about(Vec2f::new(0.6, 0.8), EPSILON));
//!
//! let grid = Recti::new(0, 0, 2, 2);
//! assert_eq!(grid.cells().count(), 4);
//! ```

pub(crate) mod macros;

mod convert;
pub mod matrix;
pub mod rect;
pub mod scalar;
pub mod tuple;
pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod vector;

pub use matrix::{Mat2d, Mat2f, Matrix2};
pub use rect::{CentredRect, ReadOnlyRect, Rect, RectMut, Rectd, Rectf, Recti, Rectui};
pub use scalar::{FloatScalar, IntScalar, Scalar};
pub use tuple::{
    aos_to_soa2, aos_to_soa3, aos_to_soa4, soa_to_aos2, soa_to_aos2_into, soa_to_aos3,
    soa_to_aos3_into, soa_to_aos4, soa_to_aos4_into, Indexer, IndexerMut, ReadOnlyTuple2,
    ReadOnlyTuple3, ReadOnlyTuple4, Tuple2, Tuple3, Tuple4,
};
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
pub use vector::{Vector, Vector2D, Vector3D, Vector4D, VectorFloat, VectorInt};

/// Integers from `start` up to but excluding `end`; empty if `start >= end`.
pub(crate) fn span<T: IntScalar>(start: T, end: T) -> impl Iterator<Item = T> + Clone {
    std::iter::successors((start < end).then_some(start), move |&value| {
        let next = value + T::one();
        (next < end).then_some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn span_bounds() {
        assert_eq!(span(2, 5).collect_vec(), vec![2, 3, 4]);
        assert_eq!(span(5, 5).count(), 0);
        assert_eq!(span(6, 5).count(), 0);
        assert_eq!(span(254_u8, 255).collect_vec(), vec![254]);
        assert_eq!(span(-2_i8, 0).collect_vec(), vec![-2, -1]);
    }

    #[test]
    fn generic_code_over_the_traits() {
        fn centroid<T: FloatScalar, V: VectorFloat<T>>(points: &[V]) -> Option<V> {
            let n = <T as num_traits::NumCast>::from(points.len())?;
            Some(points.iter().fold(V::zero(), |acc, &p| acc + p) / n)
        }
        let c = centroid(&[Vec3f::new(0.0, 0.0, 0.0), Vec3f::new(2.0, 4.0, 6.0)]);
        assert_eq!(c, Some(Vec3f::new(1.0, 2.0, 3.0)));

        fn mask_low<T: IntScalar, V: VectorInt<T>>(v: V, bits: u32) -> V {
            v & !(V::splat(T::max_value()) << bits)
        }
        assert_eq!(mask_low(Vec2i::new(0xff, -1), 4), Vec2i::new(0xf, 0xf));
    }
}
