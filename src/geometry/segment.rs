use crate::error::Result;
use crate::math::{Area, Length, TOLERANCE};

use super::axis::{Axis2, Axis3};
use super::bounding_box::{BoundingBox2, BoundingBox3};
use super::direction::{Direction2, Direction3};
use super::frame::SketchPlane3;
use super::point::{Point2, Point3};
use super::transform::{MapPoints2, MapPoints3};
use super::vector::{Vector2, Vector3};
use super::{Space, World2, World3};

/// A line segment in 2D space: an ordered pair of endpoints.
///
/// Zero-length segments are representable; queries that need a direction
/// fail explicitly on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment2<S: Space = World2> {
    start: Point2<S>,
    end: Point2<S>,
}

impl<S: Space> LineSegment2<S> {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point2<S>, end: Point2<S>) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2<S> {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2<S> {
        self.end
    }

    /// Returns the displacement from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> Length {
        self.vector().length()
    }

    /// Returns the squared length of the segment.
    #[must_use]
    pub fn squared_length(&self) -> Area {
        self.vector().squared_length()
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2<S> {
        Point2::midpoint(self.start, self.end)
    }

    /// Returns the point a fraction `t` of the way from start to end.
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Point2<S> {
        Point2::interpolate_from(self.start, self.end, t)
    }

    /// Returns the direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] for a zero-length
    /// segment.
    pub fn direction(&self) -> Result<Direction2> {
        self.vector().direction()
    }

    /// Returns the axis through the segment, oriented from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] for a zero-length
    /// segment.
    pub fn axis(&self) -> Result<Axis2<S>> {
        Ok(Axis2::new(self.start, self.direction()?))
    }

    /// Returns the segment traversed in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the closest point on the segment to the given point.
    ///
    /// The projection onto the supporting line is clamped to the segment;
    /// for a zero-length segment the start point is returned.
    #[must_use]
    pub fn closest_point_to(&self, point: Point2<S>) -> Point2<S> {
        let vector = self.vector();
        let length_squared = vector.squared_length();
        if length_squared.value() < TOLERANCE {
            return self.start;
        }
        let t = ((point - self.start).dot(&vector) / length_squared).clamp(0.0, 1.0);
        self.interpolate(t)
    }

    /// Returns the distance from the segment to the given point.
    #[must_use]
    pub fn distance_to(&self, point: Point2<S>) -> Length {
        self.closest_point_to(point).distance_to(&point)
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2<S> {
        BoundingBox2::from_corners(self.start, self.end)
    }
}

impl<S: Space> MapPoints2<S> for LineSegment2<S> {
    fn map_points<F: Fn(Point2<S>) -> Point2<S>>(&self, f: F) -> Self {
        Self::new(f(self.start), f(self.end))
    }
}

/// A line segment in 3D space: an ordered pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment3<S: Space = World3> {
    start: Point3<S>,
    end: Point3<S>,
}

impl<S: Space> LineSegment3<S> {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point3<S>, end: Point3<S>) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point3<S> {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3<S> {
        self.end
    }

    /// Returns the displacement from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> Length {
        self.vector().length()
    }

    /// Returns the squared length of the segment.
    #[must_use]
    pub fn squared_length(&self) -> Area {
        self.vector().squared_length()
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3<S> {
        Point3::midpoint(self.start, self.end)
    }

    /// Returns the point a fraction `t` of the way from start to end.
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Point3<S> {
        Point3::interpolate_from(self.start, self.end, t)
    }

    /// Returns the direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] for a zero-length
    /// segment.
    pub fn direction(&self) -> Result<Direction3> {
        self.vector().direction()
    }

    /// Returns the axis through the segment, oriented from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] for a zero-length
    /// segment.
    pub fn axis(&self) -> Result<Axis3<S>> {
        Ok(Axis3::new(self.start, self.direction()?))
    }

    /// Returns the segment traversed in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the closest point on the segment to the given point.
    ///
    /// The projection onto the supporting line is clamped to the segment;
    /// for a zero-length segment the start point is returned.
    #[must_use]
    pub fn closest_point_to(&self, point: Point3<S>) -> Point3<S> {
        let vector = self.vector();
        let length_squared = vector.squared_length();
        if length_squared.value() < TOLERANCE {
            return self.start;
        }
        let t = ((point - self.start).dot(&vector) / length_squared).clamp(0.0, 1.0);
        self.interpolate(t)
    }

    /// Returns the distance from the segment to the given point.
    #[must_use]
    pub fn distance_to(&self, point: Point3<S>) -> Length {
        self.closest_point_to(point).distance_to(&point)
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox3<S> {
        BoundingBox3::from_corners(self.start, self.end)
    }

    /// Projects the segment into a sketch plane's 2D coordinates.
    #[must_use]
    pub fn project_into<L: Space>(&self, sketch_plane: &SketchPlane3<S, L>) -> LineSegment2<L> {
        LineSegment2::new(
            self.start.project_into(sketch_plane),
            self.end.project_into(sketch_plane),
        )
    }
}

impl<S: Space> MapPoints3<S> for LineSegment3<S> {
    fn map_points<F: Fn(Point3<S>) -> Point3<S>>(&self, f: F) -> Self {
        Self::new(f(self.start), f(self.end))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::transform::Transform2;

    const TOL: f64 = 1e-9;

    fn segment() -> LineSegment2 {
        LineSegment2::new(
            Point2::from_components(0.0, 0.0),
            Point2::from_components(2.0, 0.0),
        )
    }

    #[test]
    fn length_and_midpoint() {
        let s = segment();
        assert!((s.length().value() - 2.0).abs() < TOL);
        assert_eq!(s.midpoint(), Point2::from_components(1.0, 0.0));
    }

    #[test]
    fn zero_length_segment_has_no_direction() {
        let p = Point3::<World3>::from_components(1.0, 2.0, 3.0);
        let s = LineSegment3::new(p, p);
        assert!(s.direction().is_err());
        assert!(s.axis().is_err());
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let s = segment();
        let beyond = Point2::from_components(5.0, 1.0);
        assert_eq!(s.closest_point_to(beyond), s.end());
        let before = Point2::from_components(-3.0, -1.0);
        assert_eq!(s.closest_point_to(before), s.start());
    }

    #[test]
    fn distance_to_interior_projection() {
        let s = segment();
        let d = s.distance_to(Point2::from_components(1.0, 1.5));
        assert!((d.value() - 1.5).abs() < TOL);
    }

    #[test]
    fn reversal_swaps_endpoints() {
        let s = segment().reversed();
        assert_eq!(s.start(), Point2::from_components(2.0, 0.0));
        assert_eq!(s.end(), Point2::from_components(0.0, 0.0));
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let s = segment().translate_by(Vector2::from_components(1.0, 1.0));
        assert_eq!(s.start(), Point2::from_components(1.0, 1.0));
        assert_eq!(s.end(), Point2::from_components(3.0, 1.0));
    }

    #[test]
    fn bounding_box_contains_endpoints() {
        let s = LineSegment3::new(
            Point3::<World3>::from_components(3.0, -1.0, 2.0),
            Point3::from_components(1.0, 4.0, -2.0),
        );
        let b = s.bounding_box();
        assert!(b.contains(s.start()));
        assert!(b.contains(s.end()));
    }
}
