use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Angle, Area, Length, Volume, TOLERANCE};

use super::axis::Axis3;
use super::bounding_box::BoundingBox3;
use super::circle::Circle3;
use super::direction::Direction3;
use super::plane::Plane3;
use super::point::Point3;
use super::vector::Vector3;
use super::{Space, World3};

/// A sphere in 3D space: a center point and a non-negative radius.
///
/// A negative input radius is coerced to its absolute value at
/// construction; it is never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere3<S: Space = World3> {
    center: Point3<S>,
    radius: Length,
}

impl<S: Space> Sphere3<S> {
    /// Creates a sphere from a center and a radius.
    ///
    /// The absolute value of the radius is stored.
    #[must_use]
    pub fn new(center: Point3<S>, radius: Length) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Computes the unique sphere through four points.
    ///
    /// The sphere's center lies on the axis of the circle through the
    /// first three points. Writing `r` for that circle's radius, `y` for
    /// the fourth point's signed distance along the axis and `x` for its
    /// radial distance from the axis, the equal-distance constraints
    /// reduce to the single solve `d = (r^2 - x^2 - y^2) / (-2y)` for the
    /// center's axial offset `d`; the sphere radius is
    /// `sqrt(r^2 + d^2)`.
    ///
    /// Near-coplanar inputs (tiny but nonzero `y`) are not rejected; they
    /// produce large, finite spheres.
    ///
    /// # Errors
    ///
    /// Returns an error when the first three points are collinear, or when
    /// all four points are coplanar (`y` is zero, so no finite point on
    /// the axis is equidistant from all four).
    pub fn through_points(
        p1: Point3<S>,
        p2: Point3<S>,
        p3: Point3<S>,
        p4: Point3<S>,
    ) -> Result<Self> {
        let circle = Circle3::through_points(p1, p2, p3)?;
        let axis = circle.axis();
        let y = p4.signed_distance_along(&axis);
        if y.abs().value() < TOLERANCE {
            return Err(GeometryError::Degenerate("points are coplanar".into()));
        }
        let x = p4.distance_from_axis(&axis);
        let r = circle.radius();
        let d = (r.squared() - x.squared() - y.squared()) / (y * -2.0);
        Ok(Self::new(axis.point_at(d), (r.squared() + d.squared()).sqrt()))
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> Point3<S> {
        self.center
    }

    /// Returns the radius of the sphere.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Returns the diameter of the sphere.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.radius * 2.0
    }

    /// Returns the circumference of a great circle of the sphere.
    #[must_use]
    pub fn circumference(&self) -> Length {
        self.radius * (2.0 * PI)
    }

    /// Returns the surface area of the sphere.
    #[must_use]
    pub fn surface_area(&self) -> Area {
        self.radius.squared() * (4.0 * PI)
    }

    /// Returns the enclosed volume of the sphere.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.radius.squared() * self.radius * (4.0 / 3.0 * PI)
    }

    /// Returns whether the point lies inside or on the sphere
    /// (non-strict: boundary points are contained).
    #[must_use]
    pub fn contains(&self, point: Point3<S>) -> bool {
        self.center.squared_distance_to(&point) <= self.radius.squared()
    }

    /// Returns the axis-aligned bounding box of the sphere
    /// (center +/- radius along every axis).
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox3<S> {
        let half = Vector3::new(self.radius, self.radius, self.radius);
        BoundingBox3::from_corners(self.center - half, self.center + half)
    }

    /// Scales the sphere about a center point by a factor.
    ///
    /// The center follows the signed affine rule; the radius is scaled by
    /// the absolute value of the factor, preserving its non-negativity.
    #[must_use]
    pub fn scale_about(&self, center: Point3<S>, factor: f64) -> Self {
        Self::new(
            self.center.scale_about(center, factor),
            self.radius * factor.abs(),
        )
    }

    /// Rotates the sphere around an axis by an angle.
    #[must_use]
    pub fn rotate_around(&self, axis: &Axis3<S>, angle: Angle) -> Self {
        Self::new(self.center.rotate_around(axis, angle), self.radius)
    }

    /// Translates the sphere by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector3) -> Self {
        Self::new(self.center.translate_by(vector), self.radius)
    }

    /// Translates the sphere a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction3, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Mirrors the sphere across a plane.
    #[must_use]
    pub fn mirror_across(&self, plane: &Plane3<S>) -> Self {
        Self::new(self.center.mirror_across(plane), self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn p3(x: f64, y: f64, z: f64) -> Point3 {
        Point3::from_components(x, y, z)
    }

    #[test]
    fn negative_radius_is_coerced() {
        let s = Sphere3::new(Point3::<World3>::origin(), Length::new(-2.0));
        assert_eq!(s.radius(), Length::new(2.0));
    }

    #[test]
    fn through_four_points_reference_case() {
        let s = Sphere3::through_points(
            p3(1.0, 0.0, 0.0),
            p3(-1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.0, 0.0, 0.5),
        )
        .unwrap();
        assert_relative_eq!(s.radius().value(), 1.25, epsilon = TOL);
        assert!(s.center().x().value().abs() < TOL);
        assert!(s.center().y().value().abs() < TOL);
        assert_relative_eq!(s.center().z().value(), -0.75, epsilon = TOL);
    }

    #[test]
    fn through_points_is_equidistant_from_all_four() {
        let points = [
            p3(2.0, 1.0, 0.5),
            p3(-1.0, 3.0, 1.0),
            p3(0.0, -2.0, 2.0),
            p3(1.0, 1.0, 4.0),
        ];
        let s =
            Sphere3::through_points(points[0], points[1], points[2], points[3]).unwrap();
        for p in points {
            assert!((s.center().distance_to(&p) - s.radius()).value().abs() < TOL);
        }
    }

    #[test]
    fn through_coplanar_points_fails() {
        let r = Sphere3::through_points(
            p3(1.0, 0.0, 0.0),
            p3(-1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.0, -1.0, 0.0),
        );
        assert!(r.is_err());
    }

    #[test]
    fn through_points_with_collinear_triple_fails() {
        let r = Sphere3::through_points(
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(2.0, 0.0, 0.0),
            p3(0.0, 1.0, 1.0),
        );
        assert!(r.is_err());
    }

    #[test]
    fn contains_boundary_is_non_strict() {
        let s = Sphere3::new(Point3::<World3>::origin(), Length::new(2.0));
        assert!(s.contains(p3(2.0, 0.0, 0.0)));
        assert!(s.contains(p3(0.0, 0.0, 0.0)));
        assert!(!s.contains(p3(2.0 + 1e-9, 0.0, 0.0)));
    }

    #[test]
    fn bounding_box_is_center_plus_minus_radius() {
        let s = Sphere3::new(p3(1.0, -2.0, 3.0), Length::new(2.0));
        let b = s.bounding_box();
        assert_eq!(b.min(), p3(-1.0, -4.0, 1.0));
        assert_eq!(b.max(), p3(3.0, 0.0, 5.0));
    }

    #[test]
    fn metric_queries() {
        let s = Sphere3::new(Point3::<World3>::origin(), Length::new(2.0));
        assert_relative_eq!(s.surface_area().value(), 16.0 * PI, epsilon = TOL);
        assert_relative_eq!(s.volume().value(), 32.0 / 3.0 * PI, epsilon = TOL);
        assert_relative_eq!(s.circumference().value(), 4.0 * PI, epsilon = TOL);
        assert_relative_eq!(s.diameter().value(), 4.0, epsilon = TOL);
    }

    #[test]
    fn scale_about_negative_factor_keeps_radius_non_negative() {
        let s = Sphere3::new(p3(1.0, 0.0, 0.0), Length::new(1.0))
            .scale_about(Point3::origin(), -2.0);
        assert_eq!(s.radius(), Length::new(2.0));
        assert!((s.center().x().value() + 2.0).abs() < TOL);
    }
}
