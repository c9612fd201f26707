/*

    Component-wise min/max used to grow a box.

    The 2D impl only touches x and y. 3D and 4D share the same
    x/y/z routine, so the w component of a 4D vector is never
    updated here.

    Each axis keeps the current bound only when it is strictly
    smaller (larger) than the candidate, otherwise it takes the
    candidate. A NaN candidate therefore replaces the bound, and a
    NaN bound is replaced by the next candidate.

    @date: 19 Oct, 2026
*/

use crate::numeric::{BoxVector, Dim, Dimension, Scalar};

pub trait BoxMinMax<T: Scalar>: Dimension<T> {
    /// `vec[i] = min(vec[i], other[i])` on the handled axes.
    fn cwise_min(vec: &mut Self::Vector, other: &Self::Vector);

    /// `vec[i] = max(vec[i], other[i])` on the handled axes.
    fn cwise_max(vec: &mut Self::Vector, other: &Self::Vector);
}

#[inline]
fn min_axes<T: Scalar, V: BoxVector<T>>(vec: &mut V, other: &V, axes: usize) {
    for axis in 0..axes {
        vec[axis] = if vec[axis] < other[axis] { vec[axis] } else { other[axis] };
    }
}

#[inline]
fn max_axes<T: Scalar, V: BoxVector<T>>(vec: &mut V, other: &V, axes: usize) {
    for axis in 0..axes {
        vec[axis] = if vec[axis] > other[axis] { vec[axis] } else { other[axis] };
    }
}

impl<T: Scalar> BoxMinMax<T> for Dim<2>
where
    Dim<2>: Dimension<T>,
{
    fn cwise_min(vec: &mut Self::Vector, other: &Self::Vector) {
        min_axes::<T, _>(vec, other, 2);
    }

    fn cwise_max(vec: &mut Self::Vector, other: &Self::Vector) {
        max_axes::<T, _>(vec, other, 2);
    }
}

impl<T: Scalar> BoxMinMax<T> for Dim<3>
where
    Dim<3>: Dimension<T>,
{
    fn cwise_min(vec: &mut Self::Vector, other: &Self::Vector) {
        min_axes::<T, _>(vec, other, 3);
    }

    fn cwise_max(vec: &mut Self::Vector, other: &Self::Vector) {
        max_axes::<T, _>(vec, other, 3);
    }
}

// Same three axes as Dim<3>
impl<T: Scalar> BoxMinMax<T> for Dim<4>
where
    Dim<4>: Dimension<T>,
{
    fn cwise_min(vec: &mut Self::Vector, other: &Self::Vector) {
        min_axes::<T, _>(vec, other, 3);
    }

    fn cwise_max(vec: &mut Self::Vector, other: &Self::Vector) {
        max_axes::<T, _>(vec, other, 3);
    }
}
