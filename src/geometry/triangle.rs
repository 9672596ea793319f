use crate::error::Result;
use crate::math::{Area, Length};

use super::bounding_box::{BoundingBox2, BoundingBox3};
use super::circle::{Circle2, Circle3};
use super::direction::Direction3;
use super::frame::SketchPlane3;
use super::point::{Point2, Point3};
use super::segment::{LineSegment2, LineSegment3};
use super::transform::{MapPoints2, MapPoints3};
use super::vector::{Vector2, Vector3};
use super::{Space, World2, World3};

/// A triangle in 2D space: three vertices in a fixed, significant order.
///
/// The order defines the edge traversal `v1 -> v2 -> v3 -> v1` and the
/// sign of [`signed_area`](Self::signed_area). Degenerate (collinear)
/// triangles are representable; queries without an answer for them fail
/// explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle2<S: Space = World2> {
    vertices: [Point2<S>; 3],
}

impl<S: Space> Triangle2<S> {
    /// Creates a triangle from its vertices, preserving their order.
    #[must_use]
    pub fn from_vertices(v1: Point2<S>, v2: Point2<S>, v3: Point2<S>) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Returns the vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> [Point2<S>; 3] {
        self.vertices
    }

    /// Returns the boundary edges in traversal order
    /// (`v1 -> v2`, `v2 -> v3`, `v3 -> v1`).
    #[must_use]
    pub fn edges(&self) -> [LineSegment2<S>; 3] {
        let [v1, v2, v3] = self.vertices;
        [
            LineSegment2::new(v1, v2),
            LineSegment2::new(v2, v3),
            LineSegment2::new(v3, v1),
        ]
    }

    /// Returns the centroid (arithmetic mean of the vertices).
    #[must_use]
    pub fn centroid(&self) -> Point2<S> {
        let [v1, v2, v3] = self.vertices;
        let to_v2 = Vector2::from_points(v1, v2);
        let to_v3 = Vector2::from_points(v1, v3);
        v1.translate_by((to_v2 + to_v3) / 3.0)
    }

    /// Returns the signed area: positive when the vertices are in
    /// counterclockwise order, negative when clockwise.
    #[must_use]
    pub fn signed_area(&self) -> Area {
        let [v1, v2, v3] = self.vertices;
        Vector2::from_points(v1, v2).cross(&Vector2::from_points(v1, v3)) / 2.0
    }

    /// Returns the area of the triangle, non-negative for every vertex
    /// order.
    #[must_use]
    pub fn area(&self) -> Area {
        self.signed_area().abs()
    }

    /// Returns the perimeter of the triangle.
    #[must_use]
    pub fn perimeter(&self) -> Length {
        self.edges()
            .iter()
            .fold(Length::ZERO, |sum, edge| sum + edge.length())
    }

    /// Returns the circle through the three vertices.
    ///
    /// # Errors
    ///
    /// Returns an error when the vertices are collinear.
    pub fn circumcircle(&self) -> Result<Circle2<S>> {
        let [v1, v2, v3] = self.vertices;
        Circle2::through_points(v1, v2, v3)
    }

    /// Returns the axis-aligned bounding box of the triangle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2<S> {
        let [v1, v2, v3] = self.vertices;
        BoundingBox2::from_corners(v1, v2).extended_to(v3)
    }
}

impl<S: Space> MapPoints2<S> for Triangle2<S> {
    fn map_points<F: Fn(Point2<S>) -> Point2<S>>(&self, f: F) -> Self {
        let [v1, v2, v3] = self.vertices;
        Self::from_vertices(f(v1), f(v2), f(v3))
    }
}

/// A triangle in 3D space: three vertices in a fixed, significant order.
///
/// The order defines the edge traversal and, via the right-hand rule, the
/// sign of [`normal_direction`](Self::normal_direction): swapping two
/// vertices flips it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3<S: Space = World3> {
    vertices: [Point3<S>; 3],
}

impl<S: Space> Triangle3<S> {
    /// Creates a triangle from its vertices, preserving their order.
    #[must_use]
    pub fn from_vertices(v1: Point3<S>, v2: Point3<S>, v3: Point3<S>) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Returns the vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> [Point3<S>; 3] {
        self.vertices
    }

    /// Returns the boundary edges in traversal order
    /// (`v1 -> v2`, `v2 -> v3`, `v3 -> v1`).
    #[must_use]
    pub fn edges(&self) -> [LineSegment3<S>; 3] {
        let [v1, v2, v3] = self.vertices;
        [
            LineSegment3::new(v1, v2),
            LineSegment3::new(v2, v3),
            LineSegment3::new(v3, v1),
        ]
    }

    /// Returns the centroid (arithmetic mean of the vertices).
    #[must_use]
    pub fn centroid(&self) -> Point3<S> {
        let [v1, v2, v3] = self.vertices;
        let to_v2 = Vector3::from_points(v1, v2);
        let to_v3 = Vector3::from_points(v1, v3);
        v1.translate_by((to_v2 + to_v3) / 3.0)
    }

    /// Returns the area of the triangle (half the cross-product magnitude
    /// of two edge vectors), non-negative for every vertex order.
    #[must_use]
    pub fn area(&self) -> Area {
        let [v1, v2, v3] = self.vertices;
        Vector3::from_points(v1, v2)
            .cross(&Vector3::from_points(v1, v3))
            .magnitude()
            / 2.0
    }

    /// Returns the perimeter of the triangle.
    #[must_use]
    pub fn perimeter(&self) -> Length {
        self.edges()
            .iter()
            .fold(Length::ZERO, |sum, edge| sum + edge.length())
    }

    /// Returns the normal direction given by the right-hand rule applied
    /// to the first two edges in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] when the vertices are
    /// collinear (the cross product of the edges is zero).
    pub fn normal_direction(&self) -> Result<Direction3> {
        let [v1, v2, v3] = self.vertices;
        Vector3::from_points(v1, v2)
            .cross(&Vector3::from_points(v1, v3))
            .direction()
    }

    /// Returns the circle through the three vertices, lying in their
    /// plane.
    ///
    /// # Errors
    ///
    /// Returns an error when the vertices are collinear.
    pub fn circumcircle(&self) -> Result<Circle3<S>> {
        let [v1, v2, v3] = self.vertices;
        Circle3::through_points(v1, v2, v3)
    }

    /// Returns the axis-aligned bounding box of the triangle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox3<S> {
        let [v1, v2, v3] = self.vertices;
        BoundingBox3::from_corners(v1, v2).extended_to(v3)
    }

    /// Projects the triangle into a sketch plane's 2D coordinates.
    #[must_use]
    pub fn project_into<L: Space>(&self, sketch_plane: &SketchPlane3<S, L>) -> Triangle2<L> {
        let [v1, v2, v3] = self.vertices;
        Triangle2::from_vertices(
            v1.project_into(sketch_plane),
            v2.project_into(sketch_plane),
            v3.project_into(sketch_plane),
        )
    }
}

impl<S: Space> MapPoints3<S> for Triangle3<S> {
    fn map_points<F: Fn(Point3<S>) -> Point3<S>>(&self, f: F) -> Self {
        let [v1, v2, v3] = self.vertices;
        Self::from_vertices(f(v1), f(v2), f(v3))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::transform::{Transform2, Transform3};
    use crate::geometry::{Axis3, Plane3};
    use crate::math::Angle;

    const TOL: f64 = 1e-9;

    fn p3(x: f64, y: f64, z: f64) -> Point3 {
        Point3::from_components(x, y, z)
    }

    #[test]
    fn centroid_and_area_of_reference_triangle() {
        let t = Triangle3::from_vertices(p3(1.0, 0.0, 0.0), p3(2.0, 0.0, 0.0), p3(2.0, 1.0, 3.0));
        let c = t.centroid();
        assert_relative_eq!(c.x().value(), 5.0 / 3.0, epsilon = TOL);
        assert_relative_eq!(c.y().value(), 1.0 / 3.0, epsilon = TOL);
        assert_relative_eq!(c.z().value(), 1.0, epsilon = TOL);
        // Half the magnitude of (1,0,0) x (1,1,3) = (0,-3,1).
        assert_relative_eq!(t.area().value(), 10.0_f64.sqrt() / 2.0, epsilon = TOL);
        assert!((t.area().value() - 1.5811).abs() < 1e-4);
    }

    #[test]
    fn area_is_non_negative_for_both_orders() {
        let a = p3(0.0, 0.0, 0.0);
        let b = p3(3.0, 0.0, 0.0);
        let c = p3(0.0, 4.0, 0.0);
        let forward = Triangle3::from_vertices(a, b, c);
        let flipped = Triangle3::from_vertices(a, c, b);
        assert!((forward.area().value() - 6.0).abs() < TOL);
        assert!((flipped.area().value() - 6.0).abs() < TOL);
    }

    #[test]
    fn signed_area_follows_winding() {
        let a = Point2::<World2>::from_components(0.0, 0.0);
        let b = Point2::from_components(2.0, 0.0);
        let c = Point2::from_components(0.0, 2.0);
        assert!((Triangle2::from_vertices(a, b, c).signed_area().value() - 2.0).abs() < TOL);
        assert!((Triangle2::from_vertices(a, c, b).signed_area().value() + 2.0).abs() < TOL);
    }

    #[test]
    fn normal_flips_with_vertex_swap() {
        let a = p3(0.0, 0.0, 0.0);
        let b = p3(1.0, 0.0, 0.0);
        let c = p3(0.0, 1.0, 0.0);
        let up = Triangle3::from_vertices(a, b, c).normal_direction().unwrap();
        let down = Triangle3::from_vertices(a, c, b).normal_direction().unwrap();
        assert!((up.z_component() - 1.0).abs() < TOL);
        assert!((down.z_component() + 1.0).abs() < TOL);
    }

    #[test]
    fn collinear_triangle_has_no_normal_or_circumcircle() {
        let t = Triangle3::from_vertices(p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(2.0, 0.0, 0.0));
        assert!(t.normal_direction().is_err());
        assert!(t.circumcircle().is_err());
        assert!((t.area().value()).abs() < TOL);
    }

    #[test]
    fn edges_traverse_in_order() {
        let t = Triangle2::from_vertices(
            Point2::<World2>::from_components(0.0, 0.0),
            Point2::from_components(1.0, 0.0),
            Point2::from_components(0.0, 1.0),
        );
        let [e1, e2, e3] = t.edges();
        assert_eq!(e1.end(), e2.start());
        assert_eq!(e2.end(), e3.start());
        assert_eq!(e3.end(), e1.start());
    }

    #[test]
    fn scale_about_scales_area_quadratically() {
        let t = Triangle2::from_vertices(
            Point2::<World2>::from_components(0.0, 0.0),
            Point2::from_components(3.0, 0.0),
            Point2::from_components(1.0, 2.0),
        );
        let center = Point2::from_components(-1.0, 0.5);
        for k in [-2.0, -0.5, 0.0, 0.25, 1.0, 3.0] {
            let scaled = t.scale_about(center, k);
            assert!((scaled.area().value() - k * k * t.area().value()).abs() < TOL);
        }
    }

    #[test]
    fn rigid_transforms_preserve_area() {
        let t = Triangle3::from_vertices(p3(1.0, 0.0, 0.0), p3(2.0, 0.0, 0.0), p3(2.0, 1.0, 3.0));
        let rotated = t.rotate_around(&Axis3::z(), Angle::degrees(37.0));
        assert!((rotated.area().value() - t.area().value()).abs() < TOL);
        let mirrored = t.mirror_across(&Plane3::xy());
        assert!((mirrored.area().value() - t.area().value()).abs() < TOL);
    }

    #[test]
    fn bounding_box_contains_vertices() {
        let t = Triangle3::from_vertices(p3(1.0, 5.0, -2.0), p3(-3.0, 2.0, 7.0), p3(0.0, -4.0, 1.0));
        let b = t.bounding_box();
        for v in t.vertices() {
            assert!(b.contains(v));
        }
    }

    #[test]
    fn circumcircle_passes_through_vertices() {
        let t = Triangle2::from_vertices(
            Point2::<World2>::from_components(0.0, 0.0),
            Point2::from_components(2.0, 0.0),
            Point2::from_components(0.0, 2.0),
        );
        let circle = t.circumcircle().unwrap();
        for v in t.vertices() {
            assert!((circle.center().distance_to(&v) - circle.radius()).value().abs() < TOL);
        }
    }
}
