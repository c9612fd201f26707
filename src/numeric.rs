/*

    Declare numeric types used throughout this repo.

    A bounding box is parameterized by a scalar kind T (f32 or f64)
    and a dimension N (2, 3 or 4). Dimension<T> maps the pair to a
    concrete bevy_math vector, so BBox<f64, 3> stores DVec3 corners.
    Any other combination has no Dimension impl and does not compile.

    WARNING: If you like to use f32 instead of f64 as the crate
    default, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    @date: 19 Oct, 2026
*/

use std::fmt::Debug;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use bevy_math::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};

pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update the vector types
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
pub type Vector4 = DVec4;

/// Numeric kind stored in a bounding box.
///
/// Only implemented for `f32` and `f64`: centers are computed as
/// `(min + max) * 0.5`, which has no meaning for integer types.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const HALF: Self;
    const TWO: Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
}

/// Point/vector type a box is built from. Axes are read and written
/// through indexing, which panics past `DIM`, so callers stay in range.
pub trait BoxVector<T: Scalar>:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<T, Output = Self>
    + Index<usize, Output = T>
    + IndexMut<usize>
    + Send
    + Sync
    + 'static
{
    const DIM: usize;
    const ZERO: Self;
}

/// Type level dimension marker, see `Dimension`.
#[derive(Debug, Clone, Copy)]
pub struct Dim<const N: usize>;

/// Maps a scalar kind to the vector type of dimension N.
pub trait Dimension<T: Scalar> {
    type Vector: BoxVector<T>;
}

/// Vector of N components of type T.
pub type VecN<T, const N: usize> = <Dim<N> as Dimension<T>>::Vector;

macro_rules! impl_box_vector {
    ($t:ty: $($v:ty => $n:literal),+) => {
        $(
            impl BoxVector<$t> for $v {
                const DIM: usize = $n;
                const ZERO: Self = <$v>::ZERO;
            }

            impl Dimension<$t> for Dim<$n> {
                type Vector = $v;
            }
        )+
    };
}

impl_box_vector!(f32: Vec2 => 2, Vec3 => 3, Vec4 => 4);
impl_box_vector!(f64: DVec2 => 2, DVec3 => 3, DVec4 => 4);
