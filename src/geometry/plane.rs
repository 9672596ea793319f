use crate::error::Result;
use crate::math::Length;

use super::direction::Direction3;
use super::point::Point3;
use super::vector::Vector3;
use super::{Space, World3};

/// An infinite plane in 3D space, described by an origin point and a unit
/// normal direction.
///
/// A plane has no in-plane axes of its own; use a
/// [`SketchPlane3`](super::frame::SketchPlane3) when 2D coordinates on the
/// plane are needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3<S: Space = World3> {
    origin: Point3<S>,
    normal: Direction3,
}

impl<S: Space> Plane3<S> {
    /// Creates a plane from an origin and a normal direction.
    #[must_use]
    pub fn new(origin: Point3<S>, normal: Direction3) -> Self {
        Self { origin, normal }
    }

    /// Creates a plane from an origin and an arbitrary normal vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::ZeroVector`] when the vector is
    /// zero-length.
    pub fn from_normal_vector(origin: Point3<S>, normal: Vector3) -> Result<Self> {
        Ok(Self::new(origin, normal.direction()?))
    }

    /// The XY plane through the coordinate-system origin (normal +Z).
    #[must_use]
    pub fn xy() -> Self {
        Self::new(Point3::origin(), Direction3::z())
    }

    /// The YZ plane through the coordinate-system origin (normal +X).
    #[must_use]
    pub fn yz() -> Self {
        Self::new(Point3::origin(), Direction3::x())
    }

    /// The ZX plane through the coordinate-system origin (normal +Y).
    #[must_use]
    pub fn zx() -> Self {
        Self::new(Point3::origin(), Direction3::y())
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Returns the unit normal direction.
    #[must_use]
    pub fn normal_direction(&self) -> Direction3 {
        self.normal
    }

    /// Returns the signed distance from the plane to a point, positive on
    /// the side the normal points to.
    #[must_use]
    pub fn signed_distance_to(&self, point: Point3<S>) -> Length {
        point.signed_distance_from(self)
    }

    /// Orthogonally projects a point onto the plane.
    #[must_use]
    pub fn project(&self, point: Point3<S>) -> Point3<S> {
        point.project_onto(self)
    }

    /// Returns the plane with the opposite normal and the same origin.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.origin, self.normal.reversed())
    }
}
