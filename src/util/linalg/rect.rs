use crate::core::prelude::*;
use crate::util::assert::check_ge;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};

/// Read access to an axis-aligned rectangle.
///
/// Rectangles are half-open: they contain their [`minimum`](Self::minimum) corner but not
/// their [`maximum`](Self::maximum) corner. `y` grows downward, so `y0` is the top edge.
///
/// Any two implementations can be compared with [`rect_eq`](Self::rect_eq), which looks only at
/// position and size.
pub trait ReadOnlyRect<T: Scalar> {
    /// The top-left corner.
    fn position(&self) -> Vector2<T>;
    fn size(&self) -> Vector2<T>;

    fn minimum(&self) -> Vector2<T> {
        self.position()
    }
    fn maximum(&self) -> Vector2<T> {
        self.position() + self.size()
    }

    fn x0(&self) -> T {
        self.minimum().x
    }
    fn y0(&self) -> T {
        self.minimum().y
    }
    fn x1(&self) -> T {
        self.maximum().x
    }
    fn y1(&self) -> T {
        self.maximum().y
    }

    /// True if either dimension is zero.
    fn is_empty(&self) -> bool {
        let size = self.size();
        size.x.is_zero() || size.y.is_zero()
    }
    fn area(&self) -> T {
        let size = self.size();
        size.x * size.y
    }

    fn rect_eq(&self, other: &impl ReadOnlyRect<T>) -> bool {
        self.position() == other.position() && self.size() == other.size()
    }
    fn contains_point(&self, point: Vector2<T>) -> bool {
        let (min, max) = (self.minimum(), self.maximum());
        min.x <= point.x && point.x < max.x && min.y <= point.y && point.y < max.y
    }
    fn contains_rect(&self, other: &impl ReadOnlyRect<T>) -> bool {
        let (min, max) = (self.minimum(), self.maximum());
        let (other_min, other_max) = (other.minimum(), other.maximum());
        min.x <= other_min.x && max.x >= other_max.x && min.y <= other_min.y && max.y >= other_max.y
    }
}

/// A rectangle that can be built and reshaped from a position and size.
pub trait RectMut<T: Scalar>: ReadOnlyRect<T> + Sized {
    fn from_parts(position: Vector2<T>, size: Vector2<T>) -> Self;
    fn set_position(&mut self, position: Vector2<T>);
    fn set_size(&mut self, size: Vector2<T>);

    #[must_use]
    fn zero() -> Self {
        Self::from_parts(Vector2::zero(), Vector2::zero())
    }

    /// The overlap of `self` and `other`, or [`zero`](Self::zero) if they do not overlap.
    ///
    /// Rectangles that only share an edge do not overlap.
    #[must_use]
    fn intersect(&self, other: &impl ReadOnlyRect<T>) -> Self {
        let (min, max) = (self.minimum(), self.maximum());
        let (other_min, other_max) = (other.minimum(), other.maximum());
        let left = ex_math::max(min.x, other_min.x);
        let right = ex_math::min(max.x, other_max.x);
        let top = ex_math::max(min.y, other_min.y);
        let bottom = ex_math::min(max.y, other_max.y);
        if left < right && top < bottom {
            Self::from_parts(
                Vector2::new(left, top),
                Vector2::new(right - left, bottom - top),
            )
        } else {
            Self::zero()
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    #[must_use]
    fn union(&self, other: &impl ReadOnlyRect<T>) -> Self {
        let min = self.minimum().min(other.minimum());
        let max = self.maximum().max(other.maximum());
        Self::from_parts(min, max - min)
    }
}

/// An axis-aligned rectangle stored as its top-left corner and size.
///
/// # Examples
/// ```
/// use tesseract_numerics::core::prelude::*;
/// let a = Recti::new(0, 0, 10, 10);
/// let b = Recti::new(5, 5, 10, 10);
/// assert_eq!(a.intersect(&b), Recti::new(5, 5, 5, 5));
/// assert_eq!(a.union(&b), Recti::new(0, 0, 15, 15));
/// assert!(a.intersect(&Recti::new(10, 10, 5, 5)).is_empty());
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub position: Vector2<T>,
    pub size: Vector2<T>,
}

impl<T: Scalar> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            position: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }
    /// A rectangle of the given size at the origin.
    pub fn from_size(width: T, height: T) -> Self {
        Self::new(T::zero(), T::zero(), width, height)
    }
    pub fn from_tuples(position: &impl ReadOnlyTuple2<T>, size: &impl ReadOnlyTuple2<T>) -> Self {
        Self::new(position.x(), position.y(), size.x(), size.y())
    }
    /// A rectangle spanning two opposite corners.
    pub fn from_coords(top_left: Vector2<T>, bottom_right: Vector2<T>) -> Self {
        Self {
            position: top_left,
            size: bottom_right - top_left,
        }
    }
    /// Copies position and size from any other rectangle.
    pub fn from_rect(other: &impl ReadOnlyRect<T>) -> Self {
        Self::from_parts(other.position(), other.size())
    }

    #[must_use]
    pub fn with_position(mut self, position: Vector2<T>) -> Self {
        self.position = position;
        self
    }
    #[must_use]
    pub fn with_size(mut self, size: Vector2<T>) -> Self {
        self.size = size;
        self
    }
    #[must_use]
    pub fn translated(self, by: Vector2<T>) -> Self {
        self.with_position(self.position + by)
    }
}

impl<T: IntScalar> Rect<T> {
    /// Every integer point inside the rectangle, row by row.
    ///
    /// # Panics
    /// If either dimension is negative.
    pub fn cells(&self) -> impl Iterator<Item = Vector2<T>> {
        check_ge!(self.size.x, T::zero());
        check_ge!(self.size.y, T::zero());
        Vector2::range(self.minimum(), self.maximum())
    }
}

impl<T: Scalar> ReadOnlyRect<T> for Rect<T> {
    fn position(&self) -> Vector2<T> {
        self.position
    }
    fn size(&self) -> Vector2<T> {
        self.size
    }
}

impl<T: Scalar> RectMut<T> for Rect<T> {
    fn from_parts(position: Vector2<T>, size: Vector2<T>) -> Self {
        Self { position, size }
    }
    fn set_position(&mut self, position: Vector2<T>) {
        self.position = position;
    }
    fn set_size(&mut self, size: Vector2<T>) {
        self.size = size;
    }
}

impl<T: Scalar + Eq> Eq for Rect<T> {}

impl<T: Scalar> Hash for Rect<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.size.hash(state);
    }
}

impl<T: Scalar> Mul<T> for Rect<T> {
    type Output = Rect<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Self::Output {
            position: self.position * rhs,
            size: self.size * rhs,
        }
    }
}
impl<T: Scalar> Div<T> for Rect<T> {
    type Output = Rect<T>;

    fn div(self, rhs: T) -> Self::Output {
        Self::Output {
            position: self.position / rhs,
            size: self.size / rhs,
        }
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{}@{}]", self.size, self.position)
    }
}

pub type Recti = Rect<i32>;
pub type Rectui = Rect<u32>;
pub type Rectf = Rect<f32>;
pub type Rectd = Rect<f64>;

/// An axis-aligned rectangle stored as its centre and half-widths.
///
/// Convenient for objects positioned by their middle. Only floating-point element types can be
/// built from a position and size, since halving an odd integer size is lossy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CentredRect<T> {
    centre: Vector2<T>,
    half_widths: Vector2<T>,
}

impl<T: Scalar> CentredRect<T> {
    /// Half-widths are expected to be non-negative; a negative one is kept as given and logged.
    pub fn new(centre: Vector2<T>, half_widths: Vector2<T>) -> Self {
        if half_widths.x < T::zero() || half_widths.y < T::zero() {
            warn!("CentredRect::new(): negative half-widths {half_widths:?}");
        }
        Self {
            centre,
            half_widths,
        }
    }

    pub fn centre(&self) -> Vector2<T> {
        self.centre
    }
    pub fn half_widths(&self) -> Vector2<T> {
        self.half_widths
    }
    /// Full width and height.
    pub fn extent(&self) -> Vector2<T> {
        self.half_widths + self.half_widths
    }

    #[must_use]
    pub fn with_centre(mut self, centre: Vector2<T>) -> Self {
        self.centre = centre;
        self
    }
}

impl<T: FloatScalar> CentredRect<T> {
    pub fn from_coords(top_left: Vector2<T>, bottom_right: Vector2<T>) -> Self {
        let two = T::one() + T::one();
        let half_widths = (bottom_right - top_left) / two;
        Self::new(top_left + half_widths, half_widths)
    }

    /// Resizes about the current centre.
    #[must_use]
    pub fn with_extent(mut self, extent: Vector2<T>) -> Self {
        let two = T::one() + T::one();
        self.half_widths = extent / two;
        self
    }
}

impl<T: Scalar> ReadOnlyRect<T> for CentredRect<T> {
    fn position(&self) -> Vector2<T> {
        self.centre - self.half_widths
    }
    fn size(&self) -> Vector2<T> {
        self.extent()
    }
}

impl<T: FloatScalar> RectMut<T> for CentredRect<T> {
    fn from_parts(position: Vector2<T>, size: Vector2<T>) -> Self {
        Self::from_coords(position, position + size)
    }
    fn set_position(&mut self, position: Vector2<T>) {
        self.centre = position + self.half_widths;
    }
    fn set_size(&mut self, size: Vector2<T>) {
        let position = self.position();
        *self = Self::from_parts(position, size);
    }
}

impl<T: Scalar> From<CentredRect<T>> for Rect<T> {
    fn from(value: CentredRect<T>) -> Self {
        Rect::from_rect(&value)
    }
}
impl<T: FloatScalar> From<Rect<T>> for CentredRect<T> {
    fn from(value: Rect<T>) -> Self {
        CentredRect::from_parts(value.position, value.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;
    use rand::{Rng, SeedableRng};

    // ==================== Rect ====================

    #[test]
    fn accessors() {
        let r = Recti::new(1, 2, 3, 4);
        assert_eq!(r.position(), Vec2i::new(1, 2));
        assert_eq!(r.size(), Vec2i::new(3, 4));
        assert_eq!(r.minimum(), Vec2i::new(1, 2));
        assert_eq!(r.maximum(), Vec2i::new(4, 6));
        assert_eq!((r.x0(), r.y0(), r.x1(), r.y1()), (1, 2, 4, 6));
        assert_eq!(r.area(), 12);
        assert!(!r.is_empty());
        assert!(Recti::new(1, 2, 0, 4).is_empty());
        assert!(Recti::new(1, 2, 3, 0).is_empty());
        assert_eq!(Recti::from_size(3, 4), Recti::new(0, 0, 3, 4));
        assert_eq!(Recti::from_tuples(&(1, 2), &[3, 4]), r);
        assert_eq!(Recti::from_coords(Vec2i::new(1, 2), Vec2i::new(4, 6)), r);
        assert_eq!(Recti::zero(), Recti::default());
    }

    #[test]
    fn construction_round_trips_every_element_type() {
        macro_rules! round_trip {
            ($($t:ty: $x:expr, $y:expr, $w:expr, $h:expr);+ $(;)?) => { $(
                let r = Rect::<$t>::new($x, $y, $w, $h);
                assert_eq!((r.position.x, r.position.y), ($x, $y));
                assert_eq!((r.size[0], r.size[1]), ($w, $h));
                assert_eq!((r.x0(), r.y0()), ($x, $y));
                assert_eq!(Rect::<$t>::from_parts(r.position(), r.size()), r);
            )+ };
        }
        round_trip!(
            u8: 1, 2, 3, 4;
            i8: -1, -2, 3, 4;
            i16: -300, 2, 3, 4;
            u16: 1, 2, 300, 4;
            i32: -5, 5, 6, 7;
            u32: 0, 1, 2, 3;
            i64: -1, 0, 1, 2;
            u64: 1, 2, 3, 4;
            isize: -9, 9, 0, 1;
            usize: 3, 4, 5, 6;
            f16: f16::ONE, f16::ZERO, f16::ONE, f16::MAX;
            f32: 1.5, -2.25, 0.0, 8.0;
            f64: 1.0, 2.0, 3.0, 4.0;
            Decimal: Decimal::ONE, Decimal::TWO, Decimal::TEN, Decimal::ZERO;
        );
    }

    #[test]
    fn mutation() {
        let mut r = Rectf::zero();
        r.set_position(Vec2f::new(1.0, 1.0));
        r.set_size(Vec2f::new(2.0, 3.0));
        assert_eq!(r, Rectf::new(1.0, 1.0, 2.0, 3.0));
        assert_eq!(r.translated(Vec2f::one()), Rectf::new(2.0, 2.0, 2.0, 3.0));
        assert_eq!(r * 2.0, Rectf::new(2.0, 2.0, 4.0, 6.0));
        assert_eq!(r / 2.0, Rectf::new(0.5, 0.5, 1.0, 1.5));
    }

    #[test]
    fn intersection() {
        let a = Recti::new(0, 0, 10, 10);
        assert_eq!(a.intersect(&Recti::new(5, 5, 10, 10)), Recti::new(5, 5, 5, 5));
        assert_eq!(a.intersect(&Recti::new(2, 3, 4, 5)), Recti::new(2, 3, 4, 5));
        // Non-square overlap, so a swapped height would show.
        assert_eq!(a.intersect(&Recti::new(-5, 8, 20, 10)), Recti::new(0, 8, 10, 2));

        let disjoint = Recti::new(0, 0, 5, 5).intersect(&Recti::new(10, 10, 5, 5));
        assert_eq!(disjoint.area(), 0);
        assert_eq!(disjoint, Recti::zero());
        let touching = Recti::new(0, 0, 5, 5).intersect(&Recti::new(5, 0, 5, 5));
        assert!(touching.is_empty());
    }

    #[test]
    fn union() {
        let a = Rectd::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectd::new(2.0, -1.0, 1.0, 1.0);
        assert_eq!(a.union(&b), Rectd::new(0.0, -1.0, 3.0, 2.0));
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn containment() {
        let r = Recti::new(0, 0, 4, 4);
        assert!(r.contains_point(Vec2i::new(0, 0)));
        assert!(r.contains_point(Vec2i::new(3, 3)));
        assert!(!r.contains_point(Vec2i::new(4, 0)));
        assert!(r.contains_rect(&Recti::new(1, 1, 3, 3)));
        assert!(!r.contains_rect(&Recti::new(1, 1, 4, 3)));
    }

    #[test]
    fn cells_row_by_row() {
        let r = Rectui::new(1, 1, 2, 2);
        assert_eq!(
            r.cells().collect_vec(),
            vec![
                Vector2::new(1, 1),
                Vector2::new(2, 1),
                Vector2::new(1, 2),
                Vector2::new(2, 2),
            ]
        );
        assert_eq!(Recti::new(0, 0, 5, 0).cells().count(), 0);
        assert_eq!(Recti::new(-2, -2, 3, 4).cells().count(), 12);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn cells_reject_negative_size() {
        let _ = Recti::new(0, 0, -1, 2).cells();
    }

    #[test]
    fn display() {
        assert_eq!(Recti::new(1, 2, 3, 4).to_string(), "Rect[vec(3, 4)@vec(1, 2)]");
    }

    #[test]
    fn serde_round_trip() {
        let r = Recti::new(-1, 2, 3, 4);
        let bytes = bincode::serialize(&r).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bincode::deserialize::<Recti>(&bytes).unwrap(), r);
    }

    // ==================== CentredRect ====================

    #[test]
    fn centred_rect() {
        let c = CentredRect::new(Vec2f::new(0.0, 0.0), Vec2f::new(2.0, 1.5));
        assert_eq!(c.extent(), Vec2f::new(4.0, 3.0));
        assert_eq!(c.position(), Vec2f::new(-2.0, -1.5));
        assert!(c.contains_point(Vec2f::new(1.0, 0.5)));
        assert!(!c.contains_point(Vec2f::new(3.0, 2.0)));

        let from_coords = CentredRect::from_coords(Vec2f::new(-1.0, -2.0), Vec2f::new(3.0, 4.0));
        assert_eq!(from_coords.centre(), Vec2f::new(1.0, 1.0));
        assert_eq!(from_coords.half_widths(), Vec2f::new(2.0, 3.0));

        let moved = c.with_centre(Vec2f::new(10.0, 10.0)).with_extent(Vec2f::new(2.0, 2.0));
        assert_eq!(moved.position(), Vec2f::new(9.0, 9.0));
    }

    #[test]
    fn centred_rect_equals_rect() {
        let c = CentredRect::new(Vec2d::new(1.0, 1.0), Vec2d::new(1.0, 1.0));
        let r = Rectd::new(0.0, 0.0, 2.0, 2.0);
        assert!(c.rect_eq(&r));
        assert!(r.rect_eq(&c));
        assert!(!r.rect_eq(&Rectd::new(0.0, 0.0, 2.0, 3.0)));
        assert_eq!(Rectd::from(c), r);
        assert!(CentredRect::from(r).rect_eq(&c));

        let mut m = CentredRect::<f64>::zero();
        m.set_size(Vec2d::new(4.0, 2.0));
        m.set_position(Vec2d::new(1.0, 1.0));
        assert_eq!(m.centre(), Vec2d::new(3.0, 2.0));
        assert_eq!(m.intersect(&r), CentredRect::from(Rectd::new(1.0, 1.0, 1.0, 1.0)));
    }

    // ==================== Properties ====================

    #[test]
    fn union_and_intersect_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let r = Recti::new(
                rng.gen_range(-100..100),
                rng.gen_range(-100..100),
                rng.gen_range(1..50),
                rng.gen_range(1..50),
            );
            assert_eq!(r.union(&r), r);
            assert_eq!(r.intersect(&r), r);

            let other = Recti::new(
                rng.gen_range(-100..100),
                rng.gen_range(-100..100),
                rng.gen_range(1..50),
                rng.gen_range(1..50),
            );
            let overlap = r.intersect(&other);
            assert_eq!(overlap, other.intersect(&r));
            let hull = r.union(&other);
            assert!(hull.contains_rect(&r) && hull.contains_rect(&other));
            if !overlap.is_empty() {
                assert!(r.contains_rect(&overlap) && other.contains_rect(&overlap));
            }
        }
    }
}
