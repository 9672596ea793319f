use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Angle, Area, Length, TOLERANCE};

use super::axis::{Axis2, Axis3};
use super::bounding_box::{BoundingBox2, BoundingBox3};
use super::direction::{Direction2, Direction3};
use super::plane::Plane3;
use super::point::{Point2, Point3};
use super::vector::{Vector2, Vector3};
use super::{Space, World2, World3};

/// A circle in 2D space: a center point and a non-negative radius.
///
/// A negative input radius is coerced to its absolute value at
/// construction; it is never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2<S: Space = World2> {
    center: Point2<S>,
    radius: Length,
}

impl<S: Space> Circle2<S> {
    /// Creates a circle from a center and a radius.
    ///
    /// The absolute value of the radius is stored.
    #[must_use]
    pub fn new(center: Point2<S>, radius: Length) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Computes the unique circle through three points.
    ///
    /// The center is the circumcenter, found where the perpendicular
    /// bisectors of the edges intersect.
    ///
    /// # Errors
    ///
    /// Returns an error when the points are collinear, detected as a zero
    /// cross product of the edge vectors.
    pub fn through_points(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Result<Self> {
        let b = p2 - p1;
        let c = p3 - p1;
        let d = 2.0 * b.cross(&c).value();
        if d.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("points are collinear".into()));
        }
        let b_sq = b.squared_length().value();
        let c_sq = c.squared_length().value();
        let offset = Vector2::from_components(
            (c.y().value() * b_sq - b.y().value() * c_sq) / d,
            (b.x().value() * c_sq - c.x().value() * b_sq) / d,
        );
        Ok(Self::new(p1.translate_by(offset), offset.length()))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2<S> {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Returns the diameter of the circle.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.radius * 2.0
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> Length {
        self.radius * (2.0 * PI)
    }

    /// Returns the area of the enclosed disc.
    #[must_use]
    pub fn area(&self) -> Area {
        self.radius.squared() * PI
    }

    /// Returns whether the point lies inside or on the circle
    /// (non-strict).
    #[must_use]
    pub fn contains(&self, point: Point2<S>) -> bool {
        self.center.squared_distance_to(&point) <= self.radius.squared()
    }

    /// Returns the axis-aligned bounding box of the circle.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2<S> {
        let half = Vector2::new(self.radius, self.radius);
        BoundingBox2::from_corners(self.center - half, self.center + half)
    }

    /// Scales the circle about a center point by a factor.
    ///
    /// The center follows the signed affine rule; the radius is scaled by
    /// the absolute value of the factor, preserving its non-negativity.
    #[must_use]
    pub fn scale_about(&self, center: Point2<S>, factor: f64) -> Self {
        Self::new(
            self.center.scale_about(center, factor),
            self.radius * factor.abs(),
        )
    }

    /// Rotates the circle counterclockwise around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Point2<S>, angle: Angle) -> Self {
        Self::new(self.center.rotate_around(center, angle), self.radius)
    }

    /// Translates the circle by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector2) -> Self {
        Self::new(self.center.translate_by(vector), self.radius)
    }

    /// Translates the circle a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction2, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Mirrors the circle across an axis.
    #[must_use]
    pub fn mirror_across(&self, axis: &Axis2<S>) -> Self {
        Self::new(self.center.mirror_across(axis), self.radius)
    }
}

/// A circle in 3D space: a center point, a non-negative radius and the
/// direction of the axis through the center, normal to the circle's
/// plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle3<S: Space = World3> {
    center: Point3<S>,
    radius: Length,
    axial_direction: Direction3,
}

impl<S: Space> Circle3<S> {
    /// Creates a circle from a center, a radius and an axial direction.
    ///
    /// The absolute value of the radius is stored.
    #[must_use]
    pub fn new(center: Point3<S>, radius: Length, axial_direction: Direction3) -> Self {
        Self {
            center,
            radius: radius.abs(),
            axial_direction,
        }
    }

    /// Computes the unique circle through three points, lying in their
    /// plane.
    ///
    /// # Errors
    ///
    /// Returns an error when the points are collinear, detected as a zero
    /// cross product of the edge vectors.
    pub fn through_points(p1: Point3<S>, p2: Point3<S>, p3: Point3<S>) -> Result<Self> {
        let e1 = (p2 - p1).inner;
        let e2 = (p3 - p1).inner;
        let normal = e1.cross(&e2);
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("points are collinear".into()));
        }
        let axial_direction = Direction3 {
            inner: nalgebra::Unit::new_normalize(normal),
        };
        // Circumcenter offset from p1, from the perpendicular-bisector
        // conditions |center - p1| = |center - p2| = |center - p3|.
        let offset = (e2.cross(&normal) * e1.norm_squared()
            + normal.cross(&e1) * e2.norm_squared())
            / (2.0 * normal.norm_squared());
        let center = p1.translate_by(Vector3 { inner: offset });
        Ok(Self::new(center, Length::new(offset.norm()), axial_direction))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point3<S> {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Returns the direction of the circle's axis (the normal of its
    /// plane).
    #[must_use]
    pub fn axial_direction(&self) -> Direction3 {
        self.axial_direction
    }

    /// Returns the axis through the center, normal to the circle's plane.
    #[must_use]
    pub fn axis(&self) -> Axis3<S> {
        Axis3::new(self.center, self.axial_direction)
    }

    /// Returns the plane the circle lies in.
    #[must_use]
    pub fn plane(&self) -> Plane3<S> {
        Plane3::new(self.center, self.axial_direction)
    }

    /// Returns the diameter of the circle.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.radius * 2.0
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> Length {
        self.radius * (2.0 * PI)
    }

    /// Returns the area of the enclosed disc.
    #[must_use]
    pub fn area(&self) -> Area {
        self.radius.squared() * PI
    }

    /// Returns the axis-aligned bounding box of the circle.
    ///
    /// The half-extent along each axis is `r * sqrt(1 - n_i^2)` where
    /// `n_i` is the corresponding component of the axial direction.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox3<S> {
        let n = self.axial_direction;
        let half = Vector3::new(
            self.radius * (1.0 - n.x_component() * n.x_component()).max(0.0).sqrt(),
            self.radius * (1.0 - n.y_component() * n.y_component()).max(0.0).sqrt(),
            self.radius * (1.0 - n.z_component() * n.z_component()).max(0.0).sqrt(),
        );
        BoundingBox3::from_corners(self.center - half, self.center + half)
    }

    /// Scales the circle about a center point by a factor.
    ///
    /// The center follows the signed affine rule; the radius is scaled by
    /// the absolute value of the factor, preserving its non-negativity.
    #[must_use]
    pub fn scale_about(&self, center: Point3<S>, factor: f64) -> Self {
        Self::new(
            self.center.scale_about(center, factor),
            self.radius * factor.abs(),
            self.axial_direction,
        )
    }

    /// Rotates the circle around an axis by an angle.
    #[must_use]
    pub fn rotate_around(&self, axis: &Axis3<S>, angle: Angle) -> Self {
        Self::new(
            self.center.rotate_around(axis, angle),
            self.radius,
            self.axial_direction.rotate_about(axis.direction(), angle),
        )
    }

    /// Translates the circle by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector3) -> Self {
        Self::new(self.center.translate_by(vector), self.radius, self.axial_direction)
    }

    /// Translates the circle a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction3, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Mirrors the circle across a plane.
    #[must_use]
    pub fn mirror_across(&self, plane: &Plane3<S>) -> Self {
        Self::new(
            self.center.mirror_across(plane),
            self.radius,
            self.axial_direction.mirror_in(plane.normal_direction()),
        )
    }
}
