/*

    Axis Aligned Bounding Box.

    BBox<T, N> holds a min corner, a max corner and an initialized
    flag. It starts empty, grows with add( ) and combine( ), and is
    the bounds primitive a BVH builder consumes.

    Queries never fail. An empty box reports the bounds of a zero
    sized box at the origin and an out of range axis gives zero, so
    check is_valid( ) first when that difference matters.

    @date: 19 Oct, 2026
*/

use std::iter::Sum;

use rayon::prelude::*;

use crate::center_axis::CenterAxis;
use crate::min_max::BoxMinMax;
use crate::prelude::*;
use crate::surface::SurfaceCalculator;

/// Per dimension algorithms a box needs; implemented by `Dim<2>`, `Dim<3>` and `Dim<4>`.
pub trait BoxTools<T: Scalar>: CenterAxis<T> + SurfaceCalculator<T> + BoxMinMax<T> {}

impl<T: Scalar, D> BoxTools<T> for D where D: CenterAxis<T> + SurfaceCalculator<T> + BoxMinMax<T> {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox<T: Scalar, const N: usize>
where
    Dim<N>: Dimension<T>,
{
    min_point: VecN<T, N>,
    max_point: VecN<T, N>,
    is_inited: bool,
}

pub type BBox2 = BBox<Float, 2>;
pub type BBox3 = BBox<Float, 3>;
pub type BBox4 = BBox<Float, 4>;

impl<T: Scalar, const N: usize> BBox<T, N>
where
    Dim<N>: Dimension<T>,
{
    /// Creates an empty (uninitialized) box with both corners at the origin.
    pub fn new() -> Self {
        Self {
            min_point: <VecN<T, N> as BoxVector<T>>::ZERO,
            max_point: <VecN<T, N> as BoxVector<T>>::ZERO,
            is_inited: false,
        }
    }

    /// Creates a degenerate box around a single point.
    pub fn from_point(point: VecN<T, N>) -> Self {
        Self {
            min_point: point,
            max_point: point,
            is_inited: true,
        }
    }

    /// Creates a box from its corners. The corners are taken as given,
    /// `min <= max` on every axis is up to the caller.
    pub fn from_corners(min: VecN<T, N>, max: VecN<T, N>) -> Self {
        let bbox = Self {
            min_point: min,
            max_point: max,
            is_inited: true,
        };

        if cfg!(debug_assertions) && !bbox.is_ordered() {
            warn!("Bounding box built from disordered corners min={:?} max={:?}", min, max);
        }

        bbox
    }

    /// Resets to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_valid(&self) -> bool {
        self.is_inited
    }

    /// True when `min <= max` holds on every axis. Empty boxes count as ordered.
    pub fn is_ordered(&self) -> bool {
        !self.is_inited || (0..N).all(|axis| self.min_point[axis] <= self.max_point[axis])
    }

    pub fn corner_min(&self) -> &VecN<T, N> {
        &self.min_point
    }

    pub fn corner_max(&self) -> &VecN<T, N> {
        &self.max_point
    }

    /// Direct access to the min corner.
    ///
    /// Escape hatch for code that edits bounds in place: the box does not
    /// re-check `min <= max` afterwards and editing an empty box does not
    /// make it valid.
    pub fn corner_min_mut(&mut self) -> &mut VecN<T, N> {
        &mut self.min_point
    }

    /// Direct access to the max corner, same contract as `corner_min_mut`.
    pub fn corner_max_mut(&mut self) -> &mut VecN<T, N> {
        &mut self.max_point
    }

    /// Diagonal of the box, `max - min`.
    pub fn size(&self) -> VecN<T, N> {
        self.max_point - self.min_point
    }

    pub fn center(&self) -> VecN<T, N> {
        (self.min_point + self.max_point) * T::HALF
    }
}

impl<T: Scalar, const N: usize> BBox<T, N>
where
    Dim<N>: BoxTools<T>,
{
    /// Grows the box to include `point`. The first point of an empty box
    /// becomes both corners.
    pub fn add(&mut self, point: VecN<T, N>) {
        if !self.is_inited {
            *self = Self::from_point(point);
        } else {
            <Dim<N> as BoxMinMax<T>>::cwise_min(&mut self.min_point, &point);
            <Dim<N> as BoxMinMax<T>>::cwise_max(&mut self.max_point, &point);
        }
    }

    /// Grows the box to include `other`. An empty `other` leaves `self` untouched.
    pub fn combine(&mut self, other: &Self) {
        if !other.is_inited {
            return;
        }

        if !self.is_inited {
            *self = *other;
        } else {
            <Dim<N> as BoxMinMax<T>>::cwise_min(&mut self.min_point, &other.min_point);
            <Dim<N> as BoxMinMax<T>>::cwise_max(&mut self.max_point, &other.max_point);
        }
    }

    /// By value `combine`.
    pub fn combined(mut self, other: Self) -> Self {
        self.combine(&other);
        self
    }

    /// Surface area, zero for an empty box.
    ///
    /// Unlike `size()` and `center()`, which read the raw corners, an empty
    /// box gives zero here even if its corners were edited through
    /// `corner_min_mut`/`corner_max_mut`.
    pub fn area(&self) -> T {
        if !self.is_inited {
            return T::ZERO;
        }
        <Dim<N> as SurfaceCalculator<T>>::area(&self.size())
    }

    /// Center along one axis. Zero for an axis the dimension does not handle.
    pub fn center_axis(&self, axis: usize) -> T {
        <Dim<N> as CenterAxis<T>>::center(&self.min_point, &self.max_point, axis)
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = VecN<T, N>>,
    {
        let mut bbox = Self::new();
        for point in points {
            bbox.add(point);
        }
        bbox
    }

    /// Bounds of a point slice, computed on the rayon pool.
    /// Gives the same box as `from_points`.
    pub fn par_from_points(points: &[VecN<T, N>]) -> Self {
        debug!("Bounding {} points in parallel", points.len());
        points
            .par_iter()
            .fold(Self::new, |mut bbox, point| {
                bbox.add(*point);
                bbox
            })
            .reduce(Self::new, Self::combined)
    }
}

impl<T: Scalar, const N: usize> Default for BBox<T, N>
where
    Dim<N>: Dimension<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const N: usize> FromIterator<VecN<T, N>> for BBox<T, N>
where
    Dim<N>: BoxTools<T>,
{
    fn from_iter<I: IntoIterator<Item = VecN<T, N>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<T: Scalar, const N: usize> Extend<VecN<T, N>> for BBox<T, N>
where
    Dim<N>: BoxTools<T>,
{
    fn extend<I: IntoIterator<Item = VecN<T, N>>>(&mut self, iter: I) {
        for point in iter {
            self.add(point);
        }
    }
}

impl<T: Scalar, const N: usize> Sum for BBox<T, N>
where
    Dim<N>: BoxTools<T>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Self::combined)
    }
}

impl<'a, T: Scalar, const N: usize> Sum<&'a BBox<T, N>> for BBox<T, N>
where
    Dim<N>: BoxTools<T>,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, bbox| acc.combined(*bbox))
    }
}
