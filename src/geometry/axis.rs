use crate::math::Length;

use super::direction::{Direction2, Direction3};
use super::point::{Point2, Point3};
use super::{Space, World2, World3};

/// An infinite directed line in 2D space: an origin plus a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis2<S: Space = World2> {
    origin: Point2<S>,
    direction: Direction2,
}

impl<S: Space> Axis2<S> {
    /// Creates an axis from an origin and a direction.
    #[must_use]
    pub fn new(origin: Point2<S>, direction: Direction2) -> Self {
        Self { origin, direction }
    }

    /// The X axis through the coordinate-system origin.
    #[must_use]
    pub fn x() -> Self {
        Self::new(Point2::origin(), Direction2::x())
    }

    /// The Y axis through the coordinate-system origin.
    #[must_use]
    pub fn y() -> Self {
        Self::new(Point2::origin(), Direction2::y())
    }

    /// Returns the origin point of the axis.
    #[must_use]
    pub fn origin(&self) -> Point2<S> {
        self.origin
    }

    /// Returns the direction of the axis.
    #[must_use]
    pub fn direction(&self) -> Direction2 {
        self.direction
    }

    /// Returns the point at a signed distance from the origin along the
    /// axis.
    #[must_use]
    pub fn point_at(&self, distance: Length) -> Point2<S> {
        self.origin.translate_in(self.direction, distance)
    }

    /// Returns the axis with the opposite direction and the same origin.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, self.direction.reversed())
    }
}

/// An infinite directed line in 3D space: an origin plus a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis3<S: Space = World3> {
    origin: Point3<S>,
    direction: Direction3,
}

impl<S: Space> Axis3<S> {
    /// Creates an axis from an origin and a direction.
    #[must_use]
    pub fn new(origin: Point3<S>, direction: Direction3) -> Self {
        Self { origin, direction }
    }

    /// The X axis through the coordinate-system origin.
    #[must_use]
    pub fn x() -> Self {
        Self::new(Point3::origin(), Direction3::x())
    }

    /// The Y axis through the coordinate-system origin.
    #[must_use]
    pub fn y() -> Self {
        Self::new(Point3::origin(), Direction3::y())
    }

    /// The Z axis through the coordinate-system origin.
    #[must_use]
    pub fn z() -> Self {
        Self::new(Point3::origin(), Direction3::z())
    }

    /// Returns the origin point of the axis.
    #[must_use]
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Returns the direction of the axis.
    #[must_use]
    pub fn direction(&self) -> Direction3 {
        self.direction
    }

    /// Returns the point at a signed distance from the origin along the
    /// axis.
    #[must_use]
    pub fn point_at(&self, distance: Length) -> Point3<S> {
        self.origin.translate_in(self.direction, distance)
    }

    /// Returns the axis with the opposite direction and the same origin.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, self.direction.reversed())
    }
}
