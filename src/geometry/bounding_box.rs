use crate::error::{GeometryError, Result};
use crate::math::Length;

use super::direction::{Direction2, Direction3};
use super::point::{Point2, Point3};
use super::vector::{Vector2, Vector3};
use super::{Space, World2, World3};

/// An axis-aligned rectangle in 2D space, stored as per-axis extrema with
/// `min <= max` on each axis.
///
/// Construction always canonicalizes: corners may be given in any order,
/// and the extrema are taken per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox2<S: Space = World2> {
    min: Point2<S>,
    max: Point2<S>,
}

impl<S: Space> BoundingBox2<S> {
    /// Creates the bounding box of two arbitrary corner points.
    #[must_use]
    pub fn from_corners(a: Point2<S>, b: Point2<S>) -> Self {
        Self {
            min: Point2::new(a.x().min(b.x()), a.y().min(b.y())),
            max: Point2::new(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    /// Creates the bounding box of a set of points.
    ///
    /// # Errors
    ///
    /// Returns an error when the slice is empty.
    pub fn from_points(points: &[Point2<S>]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or_else(|| {
            GeometryError::Degenerate("bounding box of an empty point set".into())
        })?;
        let mut bounds = Self::from_corners(*first, *first);
        for p in rest {
            bounds = bounds.extended_to(*p);
        }
        Ok(bounds)
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point2<S> {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2<S> {
        self.max
    }

    /// Returns the extents along the X and Y axes.
    #[must_use]
    pub fn dimensions(&self) -> (Length, Length) {
        (self.max.x() - self.min.x(), self.max.y() - self.min.y())
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point2<S> {
        Point2::midpoint(self.min, self.max)
    }

    /// Returns whether the point lies inside or on the boundary of the
    /// box.
    #[must_use]
    pub fn contains(&self, point: Point2<S>) -> bool {
        self.min.x() <= point.x()
            && point.x() <= self.max.x()
            && self.min.y() <= point.y()
            && point.y() <= self.max.y()
    }

    /// Returns the smallest box containing this box and the given point.
    #[must_use]
    pub fn extended_to(&self, point: Point2<S>) -> Self {
        Self {
            min: Point2::new(self.min.x().min(point.x()), self.min.y().min(point.y())),
            max: Point2::new(self.max.x().max(point.x()), self.max.y().max(point.y())),
        }
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.extended_to(other.min).extended_to(other.max)
    }

    /// Returns whether the two boxes overlap (shared boundary counts).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x() <= other.max.x()
            && other.min.x() <= self.max.x()
            && self.min.y() <= other.max.y()
            && other.min.y() <= self.max.y()
    }

    /// Translates the box by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector2) -> Self {
        Self {
            min: self.min.translate_by(vector),
            max: self.max.translate_by(vector),
        }
    }

    /// Translates the box a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction2, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Scales the box about a center point by a factor.
    ///
    /// Negative factors are well-defined: the scaled corners are
    /// re-canonicalized into `min <= max` order.
    #[must_use]
    pub fn scale_about(&self, center: Point2<S>, factor: f64) -> Self {
        Self::from_corners(
            self.min.scale_about(center, factor),
            self.max.scale_about(center, factor),
        )
    }
}

/// An axis-aligned box in 3D space, stored as per-axis extrema with
/// `min <= max` on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox3<S: Space = World3> {
    min: Point3<S>,
    max: Point3<S>,
}

impl<S: Space> BoundingBox3<S> {
    /// Creates the bounding box of two arbitrary corner points.
    #[must_use]
    pub fn from_corners(a: Point3<S>, b: Point3<S>) -> Self {
        Self {
            min: Point3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z())),
            max: Point3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z())),
        }
    }

    /// Creates the bounding box of a set of points.
    ///
    /// # Errors
    ///
    /// Returns an error when the slice is empty.
    pub fn from_points(points: &[Point3<S>]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or_else(|| {
            GeometryError::Degenerate("bounding box of an empty point set".into())
        })?;
        let mut bounds = Self::from_corners(*first, *first);
        for p in rest {
            bounds = bounds.extended_to(*p);
        }
        Ok(bounds)
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point3<S> {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3<S> {
        self.max
    }

    /// Returns the extents along the X, Y and Z axes.
    #[must_use]
    pub fn dimensions(&self) -> (Length, Length, Length) {
        (
            self.max.x() - self.min.x(),
            self.max.y() - self.min.y(),
            self.max.z() - self.min.z(),
        )
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3<S> {
        Point3::midpoint(self.min, self.max)
    }

    /// Returns whether the point lies inside or on the boundary of the
    /// box.
    #[must_use]
    pub fn contains(&self, point: Point3<S>) -> bool {
        self.min.x() <= point.x()
            && point.x() <= self.max.x()
            && self.min.y() <= point.y()
            && point.y() <= self.max.y()
            && self.min.z() <= point.z()
            && point.z() <= self.max.z()
    }

    /// Returns the smallest box containing this box and the given point.
    #[must_use]
    pub fn extended_to(&self, point: Point3<S>) -> Self {
        Self {
            min: Point3::new(
                self.min.x().min(point.x()),
                self.min.y().min(point.y()),
                self.min.z().min(point.z()),
            ),
            max: Point3::new(
                self.max.x().max(point.x()),
                self.max.y().max(point.y()),
                self.max.z().max(point.z()),
            ),
        }
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.extended_to(other.min).extended_to(other.max)
    }

    /// Returns whether the two boxes overlap (shared boundary counts).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x() <= other.max.x()
            && other.min.x() <= self.max.x()
            && self.min.y() <= other.max.y()
            && other.min.y() <= self.max.y()
            && self.min.z() <= other.max.z()
            && other.min.z() <= self.max.z()
    }

    /// Translates the box by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector3) -> Self {
        Self {
            min: self.min.translate_by(vector),
            max: self.max.translate_by(vector),
        }
    }

    /// Translates the box a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction3, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Scales the box about a center point by a factor.
    ///
    /// Negative factors are well-defined: the scaled corners are
    /// re-canonicalized into `min <= max` order.
    #[must_use]
    pub fn scale_about(&self, center: Point3<S>, factor: f64) -> Self {
        Self::from_corners(
            self.min.scale_about(center, factor),
            self.max.scale_about(center, factor),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn corners_are_canonicalized() {
        let b = BoundingBox2::<World2>::from_corners(
            Point2::from_components(3.0, -1.0),
            Point2::from_components(1.0, 4.0),
        );
        assert_eq!(b.min(), Point2::from_components(1.0, -1.0));
        assert_eq!(b.max(), Point2::from_components(3.0, 4.0));
    }

    #[test]
    fn from_points_covers_all_inputs() {
        let points = [
            Point3::<World3>::from_components(1.0, 5.0, -2.0),
            Point3::from_components(-3.0, 2.0, 7.0),
            Point3::from_components(0.0, -4.0, 1.0),
        ];
        let b = BoundingBox3::from_points(&points).unwrap();
        for p in points {
            assert!(b.contains(p));
        }
        assert_eq!(b.min(), Point3::from_components(-3.0, -4.0, -2.0));
        assert_eq!(b.max(), Point3::from_components(1.0, 5.0, 7.0));
    }

    #[test]
    fn from_no_points_fails() {
        assert!(BoundingBox3::<World3>::from_points(&[]).is_err());
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let b = BoundingBox2::<World2>::from_corners(
            Point2::from_components(0.0, 0.0),
            Point2::from_components(1.0, 1.0),
        );
        assert!(b.contains(Point2::from_components(1.0, 0.5)));
        assert!(!b.contains(Point2::from_components(1.0 + 1e-9, 0.5)));
    }

    #[test]
    fn union_and_intersects() {
        let a = BoundingBox2::<World2>::from_corners(
            Point2::from_components(0.0, 0.0),
            Point2::from_components(2.0, 2.0),
        );
        let b = BoundingBox2::from_corners(
            Point2::from_components(3.0, 3.0),
            Point2::from_components(4.0, 4.0),
        );
        assert!(!a.intersects(&b));
        let u = a.union(&b);
        assert_eq!(u.min(), Point2::from_components(0.0, 0.0));
        assert_eq!(u.max(), Point2::from_components(4.0, 4.0));
        assert!(u.intersects(&a) && u.intersects(&b));
    }

    #[test]
    fn negative_scale_recanonicalizes() {
        let b = BoundingBox2::<World2>::from_corners(
            Point2::from_components(1.0, 1.0),
            Point2::from_components(2.0, 3.0),
        )
        .scale_about(Point2::origin(), -1.0);
        assert_eq!(b.min(), Point2::from_components(-2.0, -3.0));
        assert_eq!(b.max(), Point2::from_components(-1.0, -1.0));
        let (w, h) = b.dimensions();
        assert!((w.value() - 1.0).abs() < TOL);
        assert!((h.value() - 2.0).abs() < TOL);
    }
}
