//! The uniform transformation protocol.
//!
//! Primitives that are a fixed tuple of points implement [`MapPoints2`] /
//! [`MapPoints3`]; every rigid and affine transform is then provided once,
//! by the blanket [`Transform2`] / [`Transform3`] extension traits, as
//! "apply the point-level transform to every constituent point". Properties
//! such as the scale-area law hold automatically because there is a single
//! implementation path.

use crate::math::{Angle, Length};

use super::axis::{Axis2, Axis3};
use super::direction::{Direction2, Direction3};
use super::plane::Plane3;
use super::point::{Point2, Point3};
use super::vector::{Vector2, Vector3};
use super::Space;

/// A 2D primitive that is a fixed tuple of points.
pub trait MapPoints2<S: Space>: Sized {
    /// Applies a point transform to every constituent point and
    /// reassembles the primitive.
    fn map_points<F: Fn(Point2<S>) -> Point2<S>>(&self, f: F) -> Self;
}

/// A 3D primitive that is a fixed tuple of points.
pub trait MapPoints3<S: Space>: Sized {
    /// Applies a point transform to every constituent point and
    /// reassembles the primitive.
    fn map_points<F: Fn(Point3<S>) -> Point3<S>>(&self, f: F) -> Self;
}

/// Rigid and affine transforms for 2D point-tuple primitives.
pub trait Transform2<S: Space>: MapPoints2<S> {
    /// Scales every point about a center by a factor.
    ///
    /// Negative factors are well-defined.
    #[must_use]
    fn scale_about(&self, center: Point2<S>, factor: f64) -> Self {
        self.map_points(|p| p.scale_about(center, factor))
    }

    /// Rotates every point counterclockwise around a center point.
    #[must_use]
    fn rotate_around(&self, center: Point2<S>, angle: Angle) -> Self {
        self.map_points(|p| p.rotate_around(center, angle))
    }

    /// Translates every point by a vector.
    #[must_use]
    fn translate_by(&self, vector: Vector2) -> Self {
        self.map_points(|p| p.translate_by(vector))
    }

    /// Translates every point a distance along a direction.
    #[must_use]
    fn translate_in(&self, direction: Direction2, distance: Length) -> Self {
        self.map_points(|p| p.translate_in(direction, distance))
    }

    /// Mirrors every point across an axis.
    #[must_use]
    fn mirror_across(&self, axis: &Axis2<S>) -> Self {
        self.map_points(|p| p.mirror_across(axis))
    }

    /// Orthogonally projects every point onto an axis.
    #[must_use]
    fn project_onto(&self, axis: &Axis2<S>) -> Self {
        self.map_points(|p| p.project_onto(axis))
    }
}

impl<S: Space, T: MapPoints2<S>> Transform2<S> for T {}

/// Rigid and affine transforms for 3D point-tuple primitives.
pub trait Transform3<S: Space>: MapPoints3<S> {
    /// Scales every point about a center by a factor.
    ///
    /// Negative factors are well-defined.
    #[must_use]
    fn scale_about(&self, center: Point3<S>, factor: f64) -> Self {
        self.map_points(|p| p.scale_about(center, factor))
    }

    /// Rotates every point around an axis by an angle, following the
    /// right-hand rule.
    #[must_use]
    fn rotate_around(&self, axis: &Axis3<S>, angle: Angle) -> Self {
        self.map_points(|p| p.rotate_around(axis, angle))
    }

    /// Translates every point by a vector.
    #[must_use]
    fn translate_by(&self, vector: Vector3) -> Self {
        self.map_points(|p| p.translate_by(vector))
    }

    /// Translates every point a distance along a direction.
    #[must_use]
    fn translate_in(&self, direction: Direction3, distance: Length) -> Self {
        self.map_points(|p| p.translate_in(direction, distance))
    }

    /// Mirrors every point across a plane.
    #[must_use]
    fn mirror_across(&self, plane: &Plane3<S>) -> Self {
        self.map_points(|p| p.mirror_across(plane))
    }

    /// Orthogonally projects every point onto a plane, flattening the
    /// primitive into it.
    #[must_use]
    fn project_onto(&self, plane: &Plane3<S>) -> Self {
        self.map_points(|p| p.project_onto(plane))
    }
}

impl<S: Space, T: MapPoints3<S>> Transform3<S> for T {}
