/*

    Surface area of a box from its size (max - min).

    2D: rectangle area.
    3D: 2 * (xy + xz + zy).
    4D: same as 3D, the fourth component does not contribute.
        This is inherited behavior and has not been verified.

    @date: 19 Oct, 2026
*/

use crate::numeric::{BoxVector, Dim, Dimension, Scalar};

pub trait SurfaceCalculator<T: Scalar>: Dimension<T> {
    fn area(size: &Self::Vector) -> T;
}

#[inline]
fn xyz_area<T: Scalar, V: BoxVector<T>>(size: &V) -> T {
    (size[0] * size[1] + size[0] * size[2] + size[2] * size[1]) * T::TWO
}

impl<T: Scalar> SurfaceCalculator<T> for Dim<2>
where
    Dim<2>: Dimension<T>,
{
    fn area(size: &Self::Vector) -> T {
        size[0] * size[1]
    }
}

impl<T: Scalar> SurfaceCalculator<T> for Dim<3>
where
    Dim<3>: Dimension<T>,
{
    fn area(size: &Self::Vector) -> T {
        xyz_area(size)
    }
}

impl<T: Scalar> SurfaceCalculator<T> for Dim<4>
where
    Dim<4>: Dimension<T>,
{
    fn area(size: &Self::Vector) -> T {
        xyz_area(size)
    }
}
