//! Positional and named access shared by vectors, native tuples and arrays.

use crate::core::prelude::*;
use itertools::izip;

/// Checked positional access to a fixed number of elements.
pub trait Indexer<T> {
    /// The number of elements.
    const LEN: usize;

    /// # Errors
    /// [`NumericsError::IndexOutOfRange`] if `index >= Self::LEN`.
    fn get(&self, index: usize) -> Result<T>;
}

pub trait IndexerMut<T>: Indexer<T> {
    /// # Errors
    /// [`NumericsError::IndexOutOfRange`] if `index >= Self::LEN`; `self` is left unchanged.
    fn set(&mut self, index: usize, value: T) -> Result<()>;
}

pub trait ReadOnlyTuple2<T> {
    fn x(&self) -> T;
    fn y(&self) -> T;
}
pub trait ReadOnlyTuple3<T>: ReadOnlyTuple2<T> {
    fn z(&self) -> T;
}
pub trait ReadOnlyTuple4<T>: ReadOnlyTuple3<T> {
    fn w(&self) -> T;
}

pub trait Tuple2<T>: ReadOnlyTuple2<T> {
    fn set_x(&mut self, value: T);
    fn set_y(&mut self, value: T);
}
pub trait Tuple3<T>: Tuple2<T> + ReadOnlyTuple3<T> {
    fn set_z(&mut self, value: T);
}
pub trait Tuple4<T>: Tuple3<T> + ReadOnlyTuple4<T> {
    fn set_w(&mut self, value: T);
}

// Native tuples and arrays, so they can be passed anywhere a tuple contract is accepted.
macro_rules! impl_native_tuple {
    ($ty:ty; $x:tt, $y:tt) => {
        impl<T: Copy> ReadOnlyTuple2<T> for $ty {
            fn x(&self) -> T {
                self.$x
            }
            fn y(&self) -> T {
                self.$y
            }
        }
        impl<T: Copy> Tuple2<T> for $ty {
            fn set_x(&mut self, value: T) {
                self.$x = value;
            }
            fn set_y(&mut self, value: T) {
                self.$y = value;
            }
        }
    };
    ($ty:ty; $x:tt, $y:tt, $z:tt) => {
        impl_native_tuple!($ty; $x, $y);
        impl<T: Copy> ReadOnlyTuple3<T> for $ty {
            fn z(&self) -> T {
                self.$z
            }
        }
        impl<T: Copy> Tuple3<T> for $ty {
            fn set_z(&mut self, value: T) {
                self.$z = value;
            }
        }
    };
    ($ty:ty; $x:tt, $y:tt, $z:tt, $w:tt) => {
        impl_native_tuple!($ty; $x, $y, $z);
        impl<T: Copy> ReadOnlyTuple4<T> for $ty {
            fn w(&self) -> T {
                self.$w
            }
        }
        impl<T: Copy> Tuple4<T> for $ty {
            fn set_w(&mut self, value: T) {
                self.$w = value;
            }
        }
    };
}

impl_native_tuple!((T, T); 0, 1);
impl_native_tuple!((T, T, T); 0, 1, 2);
impl_native_tuple!((T, T, T, T); 0, 1, 2, 3);

macro_rules! impl_array_tuple {
    ($n:literal; $x:literal, $y:literal $(, $z:literal $(, $w:literal)?)?) => {
        impl<T: Copy> ReadOnlyTuple2<T> for [T; $n] {
            fn x(&self) -> T {
                self[$x]
            }
            fn y(&self) -> T {
                self[$y]
            }
        }
        impl<T: Copy> Tuple2<T> for [T; $n] {
            fn set_x(&mut self, value: T) {
                self[$x] = value;
            }
            fn set_y(&mut self, value: T) {
                self[$y] = value;
            }
        }
        $(
            impl<T: Copy> ReadOnlyTuple3<T> for [T; $n] {
                fn z(&self) -> T {
                    self[$z]
                }
            }
            impl<T: Copy> Tuple3<T> for [T; $n] {
                fn set_z(&mut self, value: T) {
                    self[$z] = value;
                }
            }
            $(
                impl<T: Copy> ReadOnlyTuple4<T> for [T; $n] {
                    fn w(&self) -> T {
                        self[$w]
                    }
                }
                impl<T: Copy> Tuple4<T> for [T; $n] {
                    fn set_w(&mut self, value: T) {
                        self[$w] = value;
                    }
                }
            )?
        )?
    };
}

impl_array_tuple!(2; 0, 1);
impl_array_tuple!(3; 0, 1, 2);
impl_array_tuple!(4; 0, 1, 2, 3);

// Structure-of-arrays <-> array-of-structures. Component slices of unequal length are truncated
// to the shortest.

/// Builds one tuple per index from separate `x` and `y` slices.
pub fn soa_to_aos2<T: Copy, V: Tuple2<T> + Default>(xs: &[T], ys: &[T]) -> Vec<V> {
    izip!(xs, ys)
        .map(|(&x, &y)| {
            let mut v = V::default();
            v.set_x(x);
            v.set_y(y);
            v
        })
        .collect()
}
pub fn soa_to_aos3<T: Copy, V: Tuple3<T> + Default>(xs: &[T], ys: &[T], zs: &[T]) -> Vec<V> {
    izip!(xs, ys, zs)
        .map(|(&x, &y, &z)| {
            let mut v = V::default();
            v.set_x(x);
            v.set_y(y);
            v.set_z(z);
            v
        })
        .collect()
}
pub fn soa_to_aos4<T: Copy, V: Tuple4<T> + Default>(
    xs: &[T],
    ys: &[T],
    zs: &[T],
    ws: &[T],
) -> Vec<V> {
    izip!(xs, ys, zs, ws)
        .map(|(&x, &y, &z, &w)| {
            let mut v = V::default();
            v.set_x(x);
            v.set_y(y);
            v.set_z(z);
            v.set_w(w);
            v
        })
        .collect()
}

/// Overwrites the leading elements of `aos` from separate `x` and `y` slices, returning how many
/// were written. Elements past the shortest input keep their values.
pub fn soa_to_aos2_into<T: Copy, V: Tuple2<T>>(aos: &mut [V], xs: &[T], ys: &[T]) -> usize {
    let mut written = 0;
    for (v, &x, &y) in izip!(aos.iter_mut(), xs, ys) {
        v.set_x(x);
        v.set_y(y);
        written += 1;
    }
    written
}
pub fn soa_to_aos3_into<T: Copy, V: Tuple3<T>>(
    aos: &mut [V],
    xs: &[T],
    ys: &[T],
    zs: &[T],
) -> usize {
    let mut written = 0;
    for (v, &x, &y, &z) in izip!(aos.iter_mut(), xs, ys, zs) {
        v.set_x(x);
        v.set_y(y);
        v.set_z(z);
        written += 1;
    }
    written
}
pub fn soa_to_aos4_into<T: Copy, V: Tuple4<T>>(
    aos: &mut [V],
    xs: &[T],
    ys: &[T],
    zs: &[T],
    ws: &[T],
) -> usize {
    let mut written = 0;
    for (v, &x, &y, &z, &w) in izip!(aos.iter_mut(), xs, ys, zs, ws) {
        v.set_x(x);
        v.set_y(y);
        v.set_z(z);
        v.set_w(w);
        written += 1;
    }
    written
}

/// Splits tuples into one `Vec` per component.
pub fn aos_to_soa2<T, V: ReadOnlyTuple2<T>>(aos: &[V]) -> (Vec<T>, Vec<T>) {
    aos.iter().map(|v| (v.x(), v.y())).multiunzip()
}
pub fn aos_to_soa3<T, V: ReadOnlyTuple3<T>>(aos: &[V]) -> (Vec<T>, Vec<T>, Vec<T>) {
    aos.iter().map(|v| (v.x(), v.y(), v.z())).multiunzip()
}
pub fn aos_to_soa4<T, V: ReadOnlyTuple4<T>>(aos: &[V]) -> (Vec<T>, Vec<T>, Vec<T>, Vec<T>) {
    aos.iter().map(|v| (v.x(), v.y(), v.z(), v.w())).multiunzip()
}
