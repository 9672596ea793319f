use std::marker::PhantomData;

use crate::error::{GeometryError, Result};
use crate::math::{Angle, Area, Length};

use super::axis::{Axis2, Axis3};
use super::direction::{Direction2, Direction3};
use super::frame::{Frame2, Frame3, SketchPlane3};
use super::plane::Plane3;
use super::vector::{Vector2, Vector3};
use super::{Space, World2, World3};

/// A position in 2D space.
///
/// The `S` parameter tags the coordinate system the position is expressed
/// in; points tagged with different spaces cannot be combined without an
/// explicit [`Frame2`] conversion. The tag is a zero-sized phantom, not a
/// runtime field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2<S: Space = World2> {
    pub(crate) inner: nalgebra::Point2<f64>,
    space: PhantomData<S>,
}

impl<S: Space> Point2<S> {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            inner: nalgebra::Point2::new(x.value(), y.value()),
            space: PhantomData,
        }
    }

    /// Creates a point from raw coordinate values in world units.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Self {
        Self {
            inner: nalgebra::Point2::new(x, y),
            space: PhantomData,
        }
    }

    pub(crate) fn from_inner(inner: nalgebra::Point2<f64>) -> Self {
        Self {
            inner,
            space: PhantomData,
        }
    }

    /// The origin of the coordinate system.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_inner(nalgebra::Point2::origin())
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> Length {
        Length::new(self.inner.x)
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> Length {
        Length::new(self.inner.y)
    }

    /// Returns the distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Length {
        Length::new((other.inner - self.inner).norm())
    }

    /// Returns the squared distance to another point.
    #[must_use]
    pub fn squared_distance_to(&self, other: &Self) -> Area {
        Area::new((other.inner - self.inner).norm_squared())
    }

    /// Returns the point halfway between two points.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::from_inner(nalgebra::center(&a.inner, &b.inner))
    }

    /// Returns the arithmetic mean of a set of points.
    ///
    /// # Errors
    ///
    /// Returns an error when the slice is empty.
    pub fn centroid(points: &[Self]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::Degenerate(
                "centroid of an empty point set".into(),
            ));
        }
        #[allow(clippy::cast_precision_loss)]
        let inv_n = 1.0 / points.len() as f64;
        let sum = points
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.inner.coords);
        Ok(Self::from_inner(nalgebra::Point2::from(sum * inv_n)))
    }

    /// Linearly interpolates from `a` (at `t = 0`) to `b` (at `t = 1`).
    ///
    /// Values of `t` outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn interpolate_from(a: Self, b: Self, t: f64) -> Self {
        Self::from_inner(a.inner + (b.inner - a.inner) * t)
    }

    /// Scales the point about a center by a factor.
    ///
    /// Negative factors are well-defined and place the result on the
    /// opposite side of the center.
    #[must_use]
    pub fn scale_about(&self, center: Self, factor: f64) -> Self {
        Self::from_inner(center.inner + (self.inner - center.inner) * factor)
    }

    /// Rotates the point counterclockwise around a center point.
    #[must_use]
    pub fn rotate_around(&self, center: Self, angle: Angle) -> Self {
        let rotation = nalgebra::Rotation2::new(angle.to_radians());
        Self::from_inner(center.inner + rotation * (self.inner - center.inner))
    }

    /// Translates the point by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector2) -> Self {
        Self::from_inner(self.inner + vector.inner)
    }

    /// Translates the point a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction2, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Mirrors the point across an axis.
    #[must_use]
    pub fn mirror_across(&self, axis: &Axis2<S>) -> Self {
        let displacement = *self - axis.origin();
        axis.origin()
            .translate_by(displacement.mirror_across_direction(axis.direction()))
    }

    /// Orthogonally projects the point onto an axis.
    #[must_use]
    pub fn project_onto(&self, axis: &Axis2<S>) -> Self {
        axis.point_at(self.signed_distance_along(axis))
    }

    /// Returns the signed distance along an axis (the projection of the
    /// point onto the axis direction, measured from the axis origin).
    #[must_use]
    pub fn signed_distance_along(&self, axis: &Axis2<S>) -> Length {
        (*self - axis.origin()).component_in(axis.direction())
    }

    /// Returns the signed perpendicular distance from an axis, positive on
    /// the side the axis direction's counterclockwise perpendicular points
    /// to.
    #[must_use]
    pub fn signed_distance_from(&self, axis: &Axis2<S>) -> Length {
        (*self - axis.origin()).component_in(axis.direction().perpendicular())
    }

    /// Expresses the point in the local coordinates of a frame.
    #[must_use]
    pub fn relative_to<L: Space>(&self, frame: &Frame2<S, L>) -> Point2<L> {
        let displacement = *self - frame.origin();
        Point2::new(
            displacement.component_in(frame.x_direction()),
            displacement.component_in(frame.y_direction()),
        )
    }

    /// Converts local frame coordinates back to the frame's outer space.
    ///
    /// Exact inverse of [`relative_to`](Self::relative_to).
    #[must_use]
    pub fn place_in<G: Space>(&self, frame: &Frame2<G, S>) -> Point2<G> {
        frame
            .origin()
            .translate_by(frame.x_direction().times(self.x()))
            .translate_by(frame.y_direction().times(self.y()))
    }

    /// Lifts the 2D point into 3D on a sketch plane.
    #[must_use]
    pub fn place_on<G: Space>(&self, sketch_plane: &SketchPlane3<G, S>) -> Point3<G> {
        sketch_plane
            .origin()
            .translate_by(sketch_plane.x_direction().times(self.x()))
            .translate_by(sketch_plane.y_direction().times(self.y()))
    }
}

impl<S: Space> std::ops::Sub for Point2<S> {
    type Output = Vector2;
    fn sub(self, rhs: Point2<S>) -> Vector2 {
        Vector2 {
            inner: self.inner - rhs.inner,
        }
    }
}

impl<S: Space> std::ops::Add<Vector2> for Point2<S> {
    type Output = Point2<S>;
    fn add(self, rhs: Vector2) -> Point2<S> {
        self.translate_by(rhs)
    }
}

impl<S: Space> std::ops::Sub<Vector2> for Point2<S> {
    type Output = Point2<S>;
    fn sub(self, rhs: Vector2) -> Point2<S> {
        self.translate_by(-rhs)
    }
}

/// A position in 3D space.
///
/// Carries the same compile-time space tag as [`Point2`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3<S: Space = World3> {
    pub(crate) inner: nalgebra::Point3<f64>,
    space: PhantomData<S>,
}

impl<S: Space> Point3<S> {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self {
            inner: nalgebra::Point3::new(x.value(), y.value(), z.value()),
            space: PhantomData,
        }
    }

    /// Creates a point from raw coordinate values in world units.
    #[must_use]
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: nalgebra::Point3::new(x, y, z),
            space: PhantomData,
        }
    }

    pub(crate) fn from_inner(inner: nalgebra::Point3<f64>) -> Self {
        Self {
            inner,
            space: PhantomData,
        }
    }

    /// The origin of the coordinate system.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_inner(nalgebra::Point3::origin())
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> Length {
        Length::new(self.inner.x)
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> Length {
        Length::new(self.inner.y)
    }

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> Length {
        Length::new(self.inner.z)
    }

    /// Returns the distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Length {
        Length::new((other.inner - self.inner).norm())
    }

    /// Returns the squared distance to another point.
    #[must_use]
    pub fn squared_distance_to(&self, other: &Self) -> Area {
        Area::new((other.inner - self.inner).norm_squared())
    }

    /// Returns the point halfway between two points.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::from_inner(nalgebra::center(&a.inner, &b.inner))
    }

    /// Returns the arithmetic mean of a set of points.
    ///
    /// # Errors
    ///
    /// Returns an error when the slice is empty.
    pub fn centroid(points: &[Self]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::Degenerate(
                "centroid of an empty point set".into(),
            ));
        }
        #[allow(clippy::cast_precision_loss)]
        let inv_n = 1.0 / points.len() as f64;
        let sum = points
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.inner.coords);
        Ok(Self::from_inner(nalgebra::Point3::from(sum * inv_n)))
    }

    /// Linearly interpolates from `a` (at `t = 0`) to `b` (at `t = 1`).
    ///
    /// Values of `t` outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn interpolate_from(a: Self, b: Self, t: f64) -> Self {
        Self::from_inner(a.inner + (b.inner - a.inner) * t)
    }

    /// Scales the point about a center by a factor.
    ///
    /// Negative factors are well-defined and place the result on the
    /// opposite side of the center.
    #[must_use]
    pub fn scale_about(&self, center: Self, factor: f64) -> Self {
        Self::from_inner(center.inner + (self.inner - center.inner) * factor)
    }

    /// Rotates the point around an axis by an angle, following the
    /// right-hand rule.
    #[must_use]
    pub fn rotate_around(&self, axis: &Axis3<S>, angle: Angle) -> Self {
        let displacement = *self - axis.origin();
        axis.origin()
            .translate_by(displacement.rotate_about(axis.direction(), angle))
    }

    /// Translates the point by a vector.
    #[must_use]
    pub fn translate_by(&self, vector: Vector3) -> Self {
        Self::from_inner(self.inner + vector.inner)
    }

    /// Translates the point a distance along a direction.
    #[must_use]
    pub fn translate_in(&self, direction: Direction3, distance: Length) -> Self {
        self.translate_by(direction.times(distance))
    }

    /// Mirrors the point across a plane.
    #[must_use]
    pub fn mirror_across(&self, plane: &Plane3<S>) -> Self {
        let distance = self.signed_distance_from(plane);
        self.translate_in(plane.normal_direction(), -(distance * 2.0))
    }

    /// Orthogonally projects the point onto a plane.
    ///
    /// The result stays in the same coordinate system, with zero remaining
    /// component along the plane normal.
    #[must_use]
    pub fn project_onto(&self, plane: &Plane3<S>) -> Self {
        let distance = self.signed_distance_from(plane);
        self.translate_in(plane.normal_direction(), -distance)
    }

    /// Orthogonally projects the point onto an axis.
    #[must_use]
    pub fn project_onto_axis(&self, axis: &Axis3<S>) -> Self {
        axis.point_at(self.signed_distance_along(axis))
    }

    /// Returns the signed distance along an axis (the projection of the
    /// point onto the axis direction, measured from the axis origin).
    #[must_use]
    pub fn signed_distance_along(&self, axis: &Axis3<S>) -> Length {
        (*self - axis.origin()).component_in(axis.direction())
    }

    /// Returns the perpendicular (radial) distance from an axis.
    ///
    /// The displacement from the axis origin decomposes into an axial and
    /// a radial component; this is the length of the radial part.
    #[must_use]
    pub fn distance_from_axis(&self, axis: &Axis3<S>) -> Length {
        let displacement = *self - axis.origin();
        let axial = axis.direction().times(displacement.component_in(axis.direction()));
        (displacement - axial).length()
    }

    /// Returns the signed distance from a plane, positive on the side its
    /// normal points to.
    #[must_use]
    pub fn signed_distance_from(&self, plane: &Plane3<S>) -> Length {
        (*self - plane.origin()).component_in(plane.normal_direction())
    }

    /// Expresses the point in the local coordinates of a frame.
    #[must_use]
    pub fn relative_to<L: Space>(&self, frame: &Frame3<S, L>) -> Point3<L> {
        let displacement = *self - frame.origin();
        Point3::new(
            displacement.component_in(frame.x_direction()),
            displacement.component_in(frame.y_direction()),
            displacement.component_in(frame.z_direction()),
        )
    }

    /// Converts local frame coordinates back to the frame's outer space.
    ///
    /// Exact inverse of [`relative_to`](Self::relative_to).
    #[must_use]
    pub fn place_in<G: Space>(&self, frame: &Frame3<G, S>) -> Point3<G> {
        frame
            .origin()
            .translate_by(frame.x_direction().times(self.x()))
            .translate_by(frame.y_direction().times(self.y()))
            .translate_by(frame.z_direction().times(self.z()))
    }

    /// Projects the point onto a sketch plane and expresses it in the
    /// plane's own 2D coordinates.
    ///
    /// The component along the plane normal is discarded, so this is not
    /// invertible; [`Point2::place_on`] lifts a 2D point back onto the
    /// plane itself.
    #[must_use]
    pub fn project_into<L: Space>(&self, sketch_plane: &SketchPlane3<S, L>) -> Point2<L> {
        let displacement = *self - sketch_plane.origin();
        Point2::new(
            displacement.component_in(sketch_plane.x_direction()),
            displacement.component_in(sketch_plane.y_direction()),
        )
    }
}

impl<S: Space> std::ops::Sub for Point3<S> {
    type Output = Vector3;
    fn sub(self, rhs: Point3<S>) -> Vector3 {
        Vector3 {
            inner: self.inner - rhs.inner,
        }
    }
}

impl<S: Space> std::ops::Add<Vector3> for Point3<S> {
    type Output = Point3<S>;
    fn add(self, rhs: Vector3) -> Point3<S> {
        self.translate_by(rhs)
    }
}

impl<S: Space> std::ops::Sub<Vector3> for Point3<S> {
    type Output = Point3<S>;
    fn sub(self, rhs: Vector3) -> Point3<S> {
        self.translate_by(-rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn p2(x: f64, y: f64) -> Point2 {
        Point2::from_components(x, y)
    }

    fn p3(x: f64, y: f64, z: f64) -> Point3 {
        Point3::from_components(x, y, z)
    }

    #[test]
    fn distance_between_points() {
        assert!((p3(1.0, 2.0, 3.0).distance_to(&p3(4.0, 6.0, 3.0)).value() - 5.0).abs() < TOL);
    }

    #[test]
    fn centroid_of_four_points() {
        let c = Point2::centroid(&[p2(0.0, 0.0), p2(2.0, 0.0), p2(2.0, 2.0), p2(0.0, 2.0)])
            .unwrap();
        assert!((c.x().value() - 1.0).abs() < TOL);
        assert!((c.y().value() - 1.0).abs() < TOL);
    }

    #[test]
    fn centroid_of_no_points_fails() {
        assert!(Point3::<crate::geometry::World3>::centroid(&[]).is_err());
    }

    #[test]
    fn interpolation_endpoints_and_midpoint() {
        let a = p3(0.0, 0.0, 0.0);
        let b = p3(2.0, 4.0, 6.0);
        assert_eq!(Point3::interpolate_from(a, b, 0.0), a);
        assert_eq!(Point3::interpolate_from(a, b, 1.0), b);
        assert_eq!(Point3::interpolate_from(a, b, 0.5), Point3::midpoint(a, b));
    }

    #[test]
    fn scale_about_negative_factor() {
        let scaled = p2(3.0, 1.0).scale_about(p2(1.0, 1.0), -2.0);
        assert!((scaled.x().value() + 3.0).abs() < TOL);
        assert!((scaled.y().value() - 1.0).abs() < TOL);
    }

    #[test]
    fn rotate_around_center() {
        let rotated = p2(2.0, 1.0).rotate_around(p2(1.0, 1.0), crate::math::Angle::degrees(90.0));
        assert!((rotated.x().value() - 1.0).abs() < TOL);
        assert!((rotated.y().value() - 2.0).abs() < TOL);
    }

    #[test]
    fn rotate_around_axis_3d() {
        let axis = Axis3::new(p3(1.0, 0.0, 0.0), Direction3::z());
        let rotated = p3(2.0, 0.0, 5.0).rotate_around(&axis, crate::math::Angle::degrees(90.0));
        assert!((rotated.x().value() - 1.0).abs() < TOL);
        assert!((rotated.y().value() - 1.0).abs() < TOL);
        assert!((rotated.z().value() - 5.0).abs() < TOL);
    }

    #[test]
    fn mirror_across_plane() {
        let plane = Plane3::new(p3(0.0, 0.0, 1.0), Direction3::z());
        let mirrored = p3(2.0, 3.0, 4.0).mirror_across(&plane);
        assert!((mirrored.z().value() + 2.0).abs() < TOL);
        assert!((mirrored.x().value() - 2.0).abs() < TOL);
    }

    #[test]
    fn project_onto_plane_kills_normal_component() {
        let plane = Plane3::new(p3(0.0, 0.0, 0.0), Direction3::z());
        let projected = p3(2.0, 3.0, 4.0).project_onto(&plane);
        assert!(projected.z().value().abs() < TOL);
        assert!(projected.signed_distance_from(&plane).value().abs() < TOL);
    }

    #[test]
    fn axis_decomposition() {
        let axis = Axis3::new(p3(0.0, 0.0, 0.0), Direction3::z());
        let p = p3(3.0, 4.0, 7.0);
        assert!((p.signed_distance_along(&axis).value() - 7.0).abs() < TOL);
        assert!((p.distance_from_axis(&axis).value() - 5.0).abs() < TOL);
    }

    #[test]
    fn point_difference_is_displacement() {
        let v = p3(4.0, 5.0, 6.0) - p3(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::from_components(3.0, 3.0, 3.0));
    }
}
