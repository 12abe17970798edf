//! Code generation shared by [`Vector2`](super::Vector2), [`Vector3`](super::Vector3) and
//! [`Vector4`](super::Vector4). Each dimension has one generic struct; everything that only
//! differs in the component list is generated here.

macro_rules! sum_fields {
    ($v:ident; $first:ident $(, $rest:ident)*) => {
        $v.$first $(+ $v.$rest)*
    };
}
pub(crate) use sum_fields;

macro_rules! elem_type {
    ($_field:ident, $t:ty) => {
        $t
    };
}
pub(crate) use elem_type;

macro_rules! impl_vector_binop_one {
    ($name:ident { $($field:ident),+ }, $bound:path;
     $op:ident $method:ident $op_assign:ident $method_assign:ident) => {
        impl<T: $bound> std::ops::$op for $name<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self { $($field: std::ops::$op::$method(self.$field, rhs.$field)),+ }
            }
        }
        impl<T: $bound> std::ops::$op<&$name<T>> for $name<T> {
            type Output = Self;

            fn $method(self, rhs: &$name<T>) -> Self {
                std::ops::$op::$method(self, *rhs)
            }
        }
        impl<T: $bound> std::ops::$op<T> for $name<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                Self { $($field: std::ops::$op::$method(self.$field, rhs)),+ }
            }
        }
        impl<T: $bound> std::ops::$op_assign for $name<T> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = std::ops::$op::$method(*self, rhs);
            }
        }
        impl<T: $bound> std::ops::$op_assign<T> for $name<T> {
            fn $method_assign(&mut self, rhs: T) {
                *self = std::ops::$op::$method(*self, rhs);
            }
        }
    };
}
pub(crate) use impl_vector_binop_one;

/// Componentwise binary operators, in both vector-vector and vector-scalar forms, plus the
/// matching compound assignment operators.
macro_rules! impl_vector_binop {
    ($name:ident $fields:tt, $bound:path;
     $($op:ident $method:ident $op_assign:ident $method_assign:ident),+ $(,)?) => { $(
        $crate::util::linalg::macros::impl_vector_binop_one!(
            $name $fields, $bound; $op $method $op_assign $method_assign
        );
    )+ };
}
pub(crate) use impl_vector_binop;

/// `scalar * vector` for each concrete element type; a blanket impl is not allowed for foreign
/// left-hand types.
macro_rules! impl_scalar_lhs_mul {
    ($name:ident; $($t:ty),+ $(,)?) => { $(
        impl std::ops::Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            fn mul(self, rhs: $name<$t>) -> $name<$t> {
                rhs * self
            }
        }
        impl std::ops::Mul<&$name<$t>> for $t {
            type Output = $name<$t>;

            fn mul(self, rhs: &$name<$t>) -> $name<$t> {
                *rhs * self
            }
        }
    )+ };
}
pub(crate) use impl_scalar_lhs_mul;

/// Everything a vector type needs beyond its struct definition, constructor and tuple traits.
macro_rules! impl_vector {
    ($name:ident, $dim:literal; $($field:ident : $idx:literal),+) => {
        impl<T: $crate::util::linalg::Scalar> $crate::util::linalg::Indexer<T> for $name<T> {
            const LEN: usize = $dim;

            fn get(&self, index: usize) -> anyhow::Result<T> {
                match index {
                    $($idx => Ok(self.$field),)+
                    _ => Err($crate::core::error::NumericsError::index_out_of_range(index, $dim)),
                }
            }
        }

        impl<T: $crate::util::linalg::Scalar> $crate::util::linalg::IndexerMut<T> for $name<T> {
            fn set(&mut self, index: usize, value: T) -> anyhow::Result<()> {
                match index {
                    $($idx => self.$field = value,)+
                    _ => return Err(
                        $crate::core::error::NumericsError::index_out_of_range(index, $dim)
                    ),
                }
                Ok(())
            }
        }

        impl<T: $crate::util::linalg::Scalar> std::ops::Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                $crate::util::assert::check_lt!(index, $dim);
                match index {
                    $($idx => &self.$field,)+
                    _ => unreachable!(),
                }
            }
        }

        impl<T: $crate::util::linalg::Scalar> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                $crate::util::assert::check_lt!(index, $dim);
                match index {
                    $($idx => &mut self.$field,)+
                    _ => unreachable!(),
                }
            }
        }

        $crate::util::linalg::macros::impl_vector_binop!(
            $name { $($field),+ }, $crate::util::linalg::Scalar;
            Add add AddAssign add_assign,
            Sub sub SubAssign sub_assign,
            Mul mul MulAssign mul_assign,
            Div div DivAssign div_assign,
        );
        $crate::util::linalg::macros::impl_vector_binop!(
            $name { $($field),+ }, $crate::util::linalg::IntScalar;
            Rem rem RemAssign rem_assign,
            BitAnd bitand BitAndAssign bitand_assign,
            BitOr bitor BitOrAssign bitor_assign,
            BitXor bitxor BitXorAssign bitxor_assign,
        );
        $crate::util::linalg::macros::impl_scalar_lhs_mul!(
            $name;
            i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
            half::f16, f32, f64, rust_decimal::Decimal,
        );

        impl<T: $crate::util::linalg::Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: $crate::util::linalg::Scalar::negated(self.$field)),+ }
            }
        }
        impl<T: $crate::util::linalg::Scalar> std::ops::Neg for &$name<T> {
            type Output = $name<T>;

            fn neg(self) -> $name<T> {
                -*self
            }
        }

        impl<T: $crate::util::linalg::IntScalar> std::ops::Not for $name<T> {
            type Output = Self;

            fn not(self) -> Self {
                Self { $($field: !self.$field),+ }
            }
        }
        impl<T: $crate::util::linalg::IntScalar> std::ops::Shl<u32> for $name<T> {
            type Output = Self;

            fn shl(self, rhs: u32) -> Self {
                Self { $($field: self.$field.wrapping_shift_left(rhs)),+ }
            }
        }
        impl<T: $crate::util::linalg::IntScalar> std::ops::Shl for $name<T> {
            type Output = Self;

            fn shl(self, rhs: Self) -> Self {
                Self { $($field: self.$field.wrapping_shift_left(rhs.$field.shift_count())),+ }
            }
        }
        impl<T: $crate::util::linalg::IntScalar> std::ops::Shr<u32> for $name<T> {
            type Output = Self;

            fn shr(self, rhs: u32) -> Self {
                Self { $($field: self.$field.wrapping_shift_right(rhs)),+ }
            }
        }
        impl<T: $crate::util::linalg::IntScalar> std::ops::Shr for $name<T> {
            type Output = Self;

            fn shr(self, rhs: Self) -> Self {
                Self { $($field: self.$field.wrapping_shift_right(rhs.$field.shift_count())),+ }
            }
        }

        impl<T: $crate::util::linalg::Scalar> $crate::util::linalg::Vector<T> for $name<T> {
            const DIM: usize = $dim;

            fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }
            fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
            fn all(self, mut f: impl FnMut(T) -> bool) -> bool {
                $(f(self.$field))&&+
            }
            fn min(self, other: Self) -> Self {
                Self { $($field: $crate::util::ex_math::min(self.$field, other.$field)),+ }
            }
            fn max(self, other: Self) -> Self {
                Self { $($field: $crate::util::ex_math::max(self.$field, other.$field)),+ }
            }
            fn min_max(lo: &mut Self, hi: &mut Self) {
                $($crate::util::ex_math::min_max(&mut lo.$field, &mut hi.$field);)+
            }
            fn sum(self) -> T {
                $crate::util::linalg::macros::sum_fields!(self; $($field),+)
            }
        }

        impl<T: $crate::util::linalg::FloatScalar> $crate::util::linalg::VectorFloat<T>
            for $name<T>
        {
        }

        impl<T: $crate::util::linalg::IntScalar> $crate::util::linalg::VectorInt<T> for $name<T> {
            fn unsigned_shr_by(self, amounts: Self) -> Self {
                Self {
                    $($field: self.$field.wrapping_unsigned_shift_right(amounts.$field.shift_count())),+
                }
            }
        }

        impl<T: $crate::util::linalg::Scalar + Eq> Eq for $name<T> {}

        impl<T: $crate::util::linalg::Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                let mut combined = 0_u64;
                $(
                    combined = combined.wrapping_add(
                        $crate::util::linalg::Scalar::hash_bits(self.$field)
                            .wrapping_mul($crate::util::linalg::macros::HASH_MULTIPLIERS[$idx]),
                    );
                )+
                state.write_u64(combined);
            }
        }

        impl<T: $crate::util::linalg::Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "vec(")?;
                for (i, c) in [$(self.$field),+].iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match f.precision() {
                        Some(precision) => write!(f, "{c:.precision$}")?,
                        None => write!(f, "{c}")?,
                    }
                }
                write!(f, ")")
            }
        }

        impl<T: $crate::util::linalg::Scalar> std::iter::Sum for $name<T> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::util::linalg::Vector<T>>::zero(), |acc, v| acc + v)
            }
        }
        impl<'a, T: $crate::util::linalg::Scalar> std::iter::Sum<&'a $name<T>> for $name<T> {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl<T: $crate::util::linalg::Scalar> From<[T; $dim]> for $name<T> {
            fn from(value: [T; $dim]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }
        impl<T: $crate::util::linalg::Scalar> From<$name<T>> for [T; $dim] {
            fn from(value: $name<T>) -> Self {
                [$(value.$field),+]
            }
        }
        impl<T: $crate::util::linalg::Scalar>
            From<($($crate::util::linalg::macros::elem_type!($field, T)),+)> for $name<T>
        {
            fn from(value: ($($crate::util::linalg::macros::elem_type!($field, T)),+)) -> Self {
                let ($($field),+) = value;
                Self { $($field),+ }
            }
        }
        impl<T: $crate::util::linalg::Scalar> From<$name<T>>
            for ($($crate::util::linalg::macros::elem_type!($field, T)),+)
        {
            fn from(value: $name<T>) -> Self {
                ($(value.$field),+)
            }
        }

        impl<T: $crate::util::linalg::Scalar> $name<T> {
            #[must_use]
            pub fn to_array(self) -> [T; $dim] {
                self.into()
            }

            /// Converts each component with [`num_traits::NumCast`], or returns `None` if any
            /// component is not representable in `U`.
            pub fn cast<U: $crate::util::linalg::Scalar + num_traits::NumCast>(
                self,
            ) -> Option<$name<U>>
            where
                T: num_traits::ToPrimitive,
            {
                Some($name { $($field: <U as num_traits::NumCast>::from(self.$field)?),+ })
            }

            /// Converts each component with an `as` cast, truncating or saturating as `as` does.
            #[must_use]
            pub fn as_lossy<U: $crate::util::linalg::Scalar>(self) -> $name<U>
            where
                T: num_traits::AsPrimitive<U>,
            {
                $name { $($field: num_traits::AsPrimitive::<U>::as_(self.$field)),+ }
            }

            /// # Errors
            /// [`NumericsError::IndexOutOfRange`](crate::core::error::NumericsError) if either
            /// index is out of range.
            pub fn swizzle2(&self, x: usize, y: usize) -> anyhow::Result<
                $crate::util::linalg::Vector2<T>
            > {
                use $crate::util::linalg::Indexer;
                Ok($crate::util::linalg::Vector2 { x: self.get(x)?, y: self.get(y)? })
            }
            /// # Errors
            /// [`NumericsError::IndexOutOfRange`](crate::core::error::NumericsError) if any index
            /// is out of range.
            pub fn swizzle3(&self, x: usize, y: usize, z: usize) -> anyhow::Result<
                $crate::util::linalg::Vector3<T>
            > {
                use $crate::util::linalg::Indexer;
                Ok($crate::util::linalg::Vector3 { x: self.get(x)?, y: self.get(y)?, z: self.get(z)? })
            }
            /// # Errors
            /// [`NumericsError::IndexOutOfRange`](crate::core::error::NumericsError) if any index
            /// is out of range.
            pub fn swizzle4(&self, x: usize, y: usize, z: usize, w: usize) -> anyhow::Result<
                $crate::util::linalg::Vector4<T>
            > {
                use $crate::util::linalg::Indexer;
                Ok($crate::util::linalg::Vector4 {
                    x: self.get(x)?,
                    y: self.get(y)?,
                    z: self.get(z)?,
                    w: self.get(w)?,
                })
            }
        }
    };
}
pub(crate) use impl_vector;

/// Per-component multipliers combined into a vector's hash.
pub(crate) const HASH_MULTIPLIERS: [u64; 4] = [1, 5, 7, 11];
