use std::marker::PhantomData;

use nalgebra::Unit;

use crate::error::{GeometryError, Result};

use super::direction::{Direction2, Direction3};
use super::plane::Plane3;
use super::point::{Point2, Point3};
use super::vector::{Vector2, Vector3};
use super::Space;

/// A local 2D coordinate system: an origin and an orthonormal direction
/// pair, both expressed in the outer space `S`.
///
/// The `L` parameter names the local space the frame defines. Conversions
/// between `S` and `L` go through
/// [`Point2::relative_to`]/[`Point2::place_in`], which are exact inverses
/// of each other.
///
/// All constructors produce orthonormal bases; there is no way to build a
/// skewed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame2<S: Space, L: Space> {
    origin: Point2<S>,
    x_direction: Direction2,
    y_direction: Direction2,
    local: PhantomData<L>,
}

impl<S: Space, L: Space> Frame2<S, L> {
    /// Creates an axis-aligned frame at the given origin.
    #[must_use]
    pub fn from_origin(origin: Point2<S>) -> Self {
        Self {
            origin,
            x_direction: Direction2::x(),
            y_direction: Direction2::y(),
            local: PhantomData,
        }
    }

    /// Creates a frame with the given X direction; the Y direction is its
    /// counterclockwise perpendicular.
    #[must_use]
    pub fn with_x_direction(origin: Point2<S>, x_direction: Direction2) -> Self {
        Self {
            origin,
            x_direction,
            y_direction: x_direction.perpendicular(),
            local: PhantomData,
        }
    }

    /// Creates a frame by orthonormalizing two arbitrary basis vectors
    /// (Gram-Schmidt).
    ///
    /// # Errors
    ///
    /// Returns an error when the vectors are parallel or either is
    /// zero-length.
    pub fn from_vectors(origin: Point2<S>, u: Vector2, v: Vector2) -> Result<Self> {
        let (x_direction, y_direction) = Direction2::orthonormalize(u, v)?;
        Ok(Self {
            origin,
            x_direction,
            y_direction,
            local: PhantomData,
        })
    }

    /// Returns the origin of the frame.
    #[must_use]
    pub fn origin(&self) -> Point2<S> {
        self.origin
    }

    /// Returns the local X direction, expressed in the outer space.
    #[must_use]
    pub fn x_direction(&self) -> Direction2 {
        self.x_direction
    }

    /// Returns the local Y direction, expressed in the outer space.
    #[must_use]
    pub fn y_direction(&self) -> Direction2 {
        self.y_direction
    }

    /// Expresses an outer-space vector in frame coordinates.
    #[must_use]
    pub fn relative_vector(&self, vector: Vector2) -> Vector2 {
        Vector2::new(
            vector.component_in(self.x_direction),
            vector.component_in(self.y_direction),
        )
    }

    /// Expresses a frame-local vector in the outer space.
    #[must_use]
    pub fn place_vector(&self, vector: Vector2) -> Vector2 {
        self.x_direction.times(vector.x()) + self.y_direction.times(vector.y())
    }
}

/// A local 3D coordinate system: an origin and a right-handed orthonormal
/// direction triple, all expressed in the outer space `S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame3<S: Space, L: Space> {
    origin: Point3<S>,
    x_direction: Direction3,
    y_direction: Direction3,
    z_direction: Direction3,
    local: PhantomData<L>,
}

impl<S: Space, L: Space> Frame3<S, L> {
    /// Creates an axis-aligned frame at the given origin.
    #[must_use]
    pub fn from_origin(origin: Point3<S>) -> Self {
        Self {
            origin,
            x_direction: Direction3::x(),
            y_direction: Direction3::y(),
            z_direction: Direction3::z(),
            local: PhantomData,
        }
    }

    /// Creates a frame with the given Z direction; the X and Y directions
    /// complete it into a right-handed basis deterministically.
    #[must_use]
    pub fn with_z_direction(origin: Point3<S>, z_direction: Direction3) -> Self {
        let (x_direction, y_direction) = z_direction.perpendicular_basis();
        Self {
            origin,
            x_direction,
            y_direction,
            z_direction,
            local: PhantomData,
        }
    }

    /// Creates a frame by orthonormalizing two arbitrary basis vectors:
    /// X follows `u`, Z follows `u x v`, and Y completes the right-handed
    /// triple.
    ///
    /// # Errors
    ///
    /// Returns an error when the vectors are parallel or either is
    /// zero-length.
    pub fn from_vectors(origin: Point3<S>, u: Vector3, v: Vector3) -> Result<Self> {
        let x_direction = u.direction()?;
        let z_direction = u.cross(&v).direction().map_err(|_| {
            GeometryError::Degenerate("cannot orthonormalize parallel vectors".into())
        })?;
        let y_direction = z_direction.cross(x_direction)?;
        Ok(Self {
            origin,
            x_direction,
            y_direction,
            z_direction,
            local: PhantomData,
        })
    }

    /// Returns the origin of the frame.
    #[must_use]
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Returns the local X direction, expressed in the outer space.
    #[must_use]
    pub fn x_direction(&self) -> Direction3 {
        self.x_direction
    }

    /// Returns the local Y direction, expressed in the outer space.
    #[must_use]
    pub fn y_direction(&self) -> Direction3 {
        self.y_direction
    }

    /// Returns the local Z direction, expressed in the outer space.
    #[must_use]
    pub fn z_direction(&self) -> Direction3 {
        self.z_direction
    }

    /// Expresses an outer-space vector in frame coordinates.
    #[must_use]
    pub fn relative_vector(&self, vector: Vector3) -> Vector3 {
        Vector3::new(
            vector.component_in(self.x_direction),
            vector.component_in(self.y_direction),
            vector.component_in(self.z_direction),
        )
    }

    /// Expresses a frame-local vector in the outer space.
    #[must_use]
    pub fn place_vector(&self, vector: Vector3) -> Vector3 {
        self.x_direction.times(vector.x())
            + self.y_direction.times(vector.y())
            + self.z_direction.times(vector.z())
    }
}

/// A plane in 3D space together with its own 2D coordinate system: an
/// origin and two orthonormal in-plane directions expressed in the outer
/// space `S`.
///
/// `L` names the 2D space of coordinates on the plane. A sketch plane
/// embeds 2D geometry in 3D ([`Point2::place_on`]) and flattens 3D
/// geometry into 2D ([`Point3::project_into`], which is lossy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchPlane3<S: Space, L: Space> {
    origin: Point3<S>,
    x_direction: Direction3,
    y_direction: Direction3,
    local: PhantomData<L>,
}

impl<S: Space, L: Space> SketchPlane3<S, L> {
    /// The XY sketch plane through the coordinate-system origin.
    #[must_use]
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            x_direction: Direction3::x(),
            y_direction: Direction3::y(),
            local: PhantomData,
        }
    }

    /// The YZ sketch plane through the coordinate-system origin.
    #[must_use]
    pub fn yz() -> Self {
        Self {
            origin: Point3::origin(),
            x_direction: Direction3::y(),
            y_direction: Direction3::z(),
            local: PhantomData,
        }
    }

    /// The ZX sketch plane through the coordinate-system origin.
    #[must_use]
    pub fn zx() -> Self {
        Self {
            origin: Point3::origin(),
            x_direction: Direction3::z(),
            y_direction: Direction3::x(),
            local: PhantomData,
        }
    }

    /// Creates a sketch plane with the given normal; the in-plane
    /// directions are chosen deterministically.
    #[must_use]
    pub fn with_normal_direction(origin: Point3<S>, normal: Direction3) -> Self {
        let (x_direction, y_direction) = normal.perpendicular_basis();
        Self {
            origin,
            x_direction,
            y_direction,
            local: PhantomData,
        }
    }

    /// Creates a sketch plane by orthonormalizing two in-plane vectors
    /// (Gram-Schmidt).
    ///
    /// # Errors
    ///
    /// Returns an error when the vectors are parallel or either is
    /// zero-length.
    pub fn from_vectors(origin: Point3<S>, u: Vector3, v: Vector3) -> Result<Self> {
        let x_direction = u.direction()?;
        let residual = v - x_direction.times(v.component_in(x_direction));
        let y_direction = residual.direction().map_err(|_| {
            GeometryError::Degenerate("cannot orthonormalize parallel vectors".into())
        })?;
        Ok(Self {
            origin,
            x_direction,
            y_direction,
            local: PhantomData,
        })
    }

    /// Returns the origin of the sketch plane.
    #[must_use]
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Returns the in-plane X direction, expressed in the outer space.
    #[must_use]
    pub fn x_direction(&self) -> Direction3 {
        self.x_direction
    }

    /// Returns the in-plane Y direction, expressed in the outer space.
    #[must_use]
    pub fn y_direction(&self) -> Direction3 {
        self.y_direction
    }

    /// Returns the plane normal (`x_direction x y_direction`).
    #[must_use]
    pub fn normal_direction(&self) -> Direction3 {
        Direction3 {
            inner: Unit::new_unchecked(
                self.x_direction.inner.cross(&self.y_direction.inner.into_inner()),
            ),
        }
    }

    /// Forgets the in-plane axes, leaving the underlying plane.
    #[must_use]
    pub fn plane(&self) -> Plane3<S> {
        Plane3::new(self.origin, self.normal_direction())
    }

    /// Lifts a 2D in-plane vector into the outer space.
    #[must_use]
    pub fn place_vector(&self, vector: Vector2) -> Vector3 {
        self.x_direction.times(vector.x()) + self.y_direction.times(vector.y())
    }

    /// Projects an outer-space vector into in-plane 2D coordinates,
    /// discarding its normal component.
    #[must_use]
    pub fn project_vector(&self, vector: Vector3) -> Vector2 {
        Vector2::new(
            vector.component_in(self.x_direction),
            vector.component_in(self.y_direction),
        )
    }

    /// Lifts a 2D in-plane direction into the outer space.
    #[must_use]
    pub fn place_direction(&self, direction: Direction2) -> Direction3 {
        let lifted = self.x_direction.inner.into_inner() * direction.x_component()
            + self.y_direction.inner.into_inner() * direction.y_component();
        Direction3 {
            inner: Unit::new_unchecked(lifted),
        }
    }

    /// Projects an outer-space direction into in-plane 2D coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the direction is
    /// perpendicular to the plane (its projection has zero length).
    pub fn project_direction(&self, direction: Direction3) -> Result<Direction2> {
        let unit_vector = Vector3 {
            inner: direction.inner.into_inner(),
        };
        self.project_vector(unit_vector).direction()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{World2, World3};
    use crate::math::Angle;

    const TOL: f64 = 1e-9;

    /// Local space markers used only by these tests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Sketch;
    impl Space for Sketch {}

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Local;
    impl Space for Local {}

    fn sample_frames_2d() -> Vec<Frame2<World2, Local>> {
        let mut frames = vec![Frame2::from_origin(Point2::from_components(3.0, -2.0))];
        for i in 0..8 {
            let x_direction = Direction2::from_angle(Angle::degrees(f64::from(i) * 45.0 + 13.0));
            frames.push(Frame2::with_x_direction(
                Point2::from_components(f64::from(i), -f64::from(i) * 0.5),
                x_direction,
            ));
        }
        frames
    }

    #[test]
    fn place_in_inverts_relative_to_2d() {
        let points = [
            Point2::from_components(0.0, 0.0),
            Point2::from_components(1.0, 2.0),
            Point2::from_components(-4.5, 3.25),
        ];
        for frame in sample_frames_2d() {
            for p in points {
                let round_tripped = p.relative_to(&frame).place_in(&frame);
                assert!(p.distance_to(&round_tripped).value() < TOL);
            }
        }
    }

    #[test]
    fn place_in_inverts_relative_to_3d() {
        let frames: Vec<Frame3<World3, Local>> = vec![
            Frame3::from_origin(Point3::from_components(1.0, 2.0, 3.0)),
            Frame3::with_z_direction(
                Point3::from_components(-2.0, 0.5, 4.0),
                Direction3::new(1.0, 1.0, 1.0).unwrap(),
            ),
            Frame3::from_vectors(
                Point3::from_components(0.0, -1.0, 2.0),
                Vector3::from_components(1.0, 2.0, 0.5),
                Vector3::from_components(-1.0, 0.5, 2.0),
            )
            .unwrap(),
        ];
        let points = [
            Point3::from_components(0.0, 0.0, 0.0),
            Point3::from_components(1.0, -2.0, 3.0),
            Point3::from_components(-0.25, 4.0, -1.5),
        ];
        for frame in frames {
            for p in points {
                let round_tripped = p.relative_to(&frame).place_in(&frame);
                assert!(p.distance_to(&round_tripped).value() < TOL);
            }
        }
    }

    #[test]
    fn from_vectors_is_orthonormal_and_right_handed() {
        let frame: Frame3<World3, Local> = Frame3::from_vectors(
            Point3::origin(),
            Vector3::from_components(2.0, 1.0, 0.0),
            Vector3::from_components(0.0, 3.0, 1.0),
        )
        .unwrap();
        let x = frame.x_direction();
        let y = frame.y_direction();
        let z = frame.z_direction();
        assert!(x.dot(y).abs() < TOL);
        assert!(y.dot(z).abs() < TOL);
        assert!(z.dot(x).abs() < TOL);
        assert!((x.cross(y).unwrap().dot(z) - 1.0).abs() < TOL);
    }

    #[test]
    fn from_parallel_vectors_fails() {
        let u = Vector3::from_components(1.0, 2.0, 3.0);
        let r: Result<Frame3<World3, Local>> = Frame3::from_vectors(Point3::origin(), u, u * -4.0);
        assert!(r.is_err());
    }

    #[test]
    fn sketch_plane_lift_then_project_round_trips() {
        let sketch: SketchPlane3<World3, Sketch> = SketchPlane3::with_normal_direction(
            Point3::from_components(1.0, 2.0, 3.0),
            Direction3::new(0.5, -1.0, 2.0).unwrap(),
        );
        let p = Point2::from_components(3.5, -1.25);
        let lifted = p.place_on(&sketch);
        let back = lifted.project_into(&sketch);
        assert!(p.distance_to(&back).value() < TOL);
    }

    #[test]
    fn project_into_is_lossy() {
        // Any point off the plane projects to the same 2D coordinates as
        // its on-plane shadow: information along the normal is gone.
        let sketch: SketchPlane3<World3, Sketch> = SketchPlane3::xy();
        let a = Point3::from_components(1.0, 2.0, 0.0);
        let b = Point3::from_components(1.0, 2.0, 7.0);
        assert_eq!(a.project_into(&sketch), b.project_into(&sketch));
    }

    #[test]
    fn sketch_plane_normal_is_perpendicular() {
        let sketch: SketchPlane3<World3, Sketch> = SketchPlane3::from_vectors(
            Point3::origin(),
            Vector3::from_components(1.0, 1.0, 0.0),
            Vector3::from_components(0.0, 1.0, 1.0),
        )
        .unwrap();
        let n = sketch.normal_direction();
        assert!(n.dot(sketch.x_direction()).abs() < TOL);
        assert!(n.dot(sketch.y_direction()).abs() < TOL);
    }

    #[test]
    fn project_direction_perpendicular_to_plane_fails() {
        let sketch: SketchPlane3<World3, Sketch> = SketchPlane3::xy();
        assert!(sketch.project_direction(Direction3::z()).is_err());
        let in_plane = sketch.project_direction(Direction3::x()).unwrap();
        assert!((in_plane.x_component() - 1.0).abs() < TOL);
    }
}
