use crate::error::{GeometryError, Result};
use crate::math::{Angle, Area, Length, TOLERANCE};

use super::direction::{Direction2, Direction3};
use super::point::{Point2, Point3};
use super::Space;

/// A displacement in 2D space.
///
/// Components are [`Length`] quantities. Unlike a [`Point2`], a vector is
/// not attached to any coordinate system and the zero vector is a valid
/// value; unlike a [`Direction2`], its length is arbitrary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub(crate) inner: nalgebra::Vector2<f64>,
}

impl Vector2 {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            inner: nalgebra::Vector2::new(x.value(), y.value()),
        }
    }

    /// Creates a vector from raw component values in world units.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Self {
        Self {
            inner: nalgebra::Vector2::new(x, y),
        }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            inner: nalgebra::Vector2::zeros(),
        }
    }

    /// Creates the displacement from one point to another (`to - from`).
    #[must_use]
    pub fn from_points<S: Space>(from: Point2<S>, to: Point2<S>) -> Self {
        Self {
            inner: to.inner - from.inner,
        }
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> Length {
        Length::new(self.inner.x)
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> Length {
        Length::new(self.inner.y)
    }

    /// Returns the length (magnitude) of the vector.
    #[must_use]
    pub fn length(&self) -> Length {
        Length::new(self.inner.norm())
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn squared_length(&self) -> Area {
        Area::new(self.inner.norm_squared())
    }

    /// Computes the dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Area {
        Area::new(self.inner.dot(&other.inner))
    }

    /// Computes the 2D cross product with another vector.
    ///
    /// The result is the signed area of the parallelogram spanned by the
    /// two vectors: positive when `other` lies counterclockwise of `self`,
    /// zero exactly when the vectors are parallel.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Area {
        Area::new(self.inner.perp(&other.inner))
    }

    /// Returns the length of the projection of this vector onto a direction.
    #[must_use]
    pub fn component_in(&self, direction: Direction2) -> Length {
        Length::new(self.inner.dot(&direction.inner.into_inner()))
    }

    /// Normalizes the vector into a [`Direction2`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the vector has zero
    /// length. This is the fundamental degeneracy guard of the crate:
    /// collinear triangles and zero-length segments all reduce to it.
    pub fn direction(&self) -> Result<Direction2> {
        if self.inner.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Direction2 {
            inner: nalgebra::Unit::new_normalize(self.inner),
        })
    }

    /// Rotates the vector counterclockwise by an angle.
    #[must_use]
    pub fn rotate_by(&self, angle: Angle) -> Self {
        Self {
            inner: nalgebra::Rotation2::new(angle.to_radians()) * self.inner,
        }
    }

    /// Mirrors the vector across the axis through the origin with the given
    /// direction.
    #[must_use]
    pub fn mirror_across_direction(&self, direction: Direction2) -> Self {
        let d = direction.inner.into_inner();
        Self {
            inner: d * (2.0 * self.inner.dot(&d)) - self.inner,
        }
    }
}

impl std::ops::Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2 {
            inner: self.inner + rhs.inner,
        }
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2 {
            inner: self.inner - rhs.inner,
        }
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2 { inner: -self.inner }
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2 {
            inner: self.inner * rhs,
        }
    }
}

impl std::ops::Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2 {
            inner: rhs.inner * self,
        }
    }
}

impl std::ops::Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f64) -> Vector2 {
        Vector2 {
            inner: self.inner / rhs,
        }
    }
}

/// A displacement in 3D space.
///
/// Components are [`Length`] quantities; the zero vector is a valid value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub(crate) inner: nalgebra::Vector3<f64>,
}

impl Vector3 {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self {
            inner: nalgebra::Vector3::new(x.value(), y.value(), z.value()),
        }
    }

    /// Creates a vector from raw component values in world units.
    #[must_use]
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: nalgebra::Vector3::new(x, y, z),
        }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            inner: nalgebra::Vector3::zeros(),
        }
    }

    /// Creates the displacement from one point to another (`to - from`).
    #[must_use]
    pub fn from_points<S: Space>(from: Point3<S>, to: Point3<S>) -> Self {
        Self {
            inner: to.inner - from.inner,
        }
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> Length {
        Length::new(self.inner.x)
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> Length {
        Length::new(self.inner.y)
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> Length {
        Length::new(self.inner.z)
    }

    /// Returns the length (magnitude) of the vector.
    #[must_use]
    pub fn length(&self) -> Length {
        Length::new(self.inner.norm())
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn squared_length(&self) -> Area {
        Area::new(self.inner.norm_squared())
    }

    /// Computes the dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Area {
        Area::new(self.inner.dot(&other.inner))
    }

    /// Computes the cross product with another vector.
    ///
    /// The result carries squared-length components; see [`AreaVector3`].
    #[must_use]
    pub fn cross(&self, other: &Self) -> AreaVector3 {
        AreaVector3 {
            inner: self.inner.cross(&other.inner),
        }
    }

    /// Returns the length of the projection of this vector onto a direction.
    #[must_use]
    pub fn component_in(&self, direction: Direction3) -> Length {
        Length::new(self.inner.dot(&direction.inner.into_inner()))
    }

    /// Normalizes the vector into a [`Direction3`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the vector has zero
    /// length.
    pub fn direction(&self) -> Result<Direction3> {
        if self.inner.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Direction3 {
            inner: nalgebra::Unit::new_normalize(self.inner),
        })
    }

    /// Rotates the vector about an axis direction by an angle, following
    /// the right-hand rule.
    #[must_use]
    pub fn rotate_about(&self, axis: Direction3, angle: Angle) -> Self {
        let rotation =
            nalgebra::Rotation3::from_axis_angle(&axis.inner, angle.to_radians());
        Self {
            inner: rotation * self.inner,
        }
    }

    /// Mirrors the vector across the plane through the origin with the
    /// given normal.
    #[must_use]
    pub fn mirror_in(&self, normal: Direction3) -> Self {
        let n = normal.inner.into_inner();
        Self {
            inner: self.inner - n * (2.0 * self.inner.dot(&n)),
        }
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: self.inner + rhs.inner,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: self.inner - rhs.inner,
        }
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3 { inner: -self.inner }
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3 {
            inner: self.inner * rhs,
        }
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: rhs.inner * self,
        }
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3 {
            inner: self.inner / rhs,
        }
    }
}

/// The result of a 3D cross product.
///
/// Its components are [`Area`] quantities (length times length), so it is a
/// distinct type from [`Vector3`]; only its magnitude and direction are
/// consumed by the rest of the crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaVector3 {
    pub(crate) inner: nalgebra::Vector3<f64>,
}

impl AreaVector3 {
    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> Area {
        Area::new(self.inner.x)
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> Area {
        Area::new(self.inner.y)
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> Area {
        Area::new(self.inner.z)
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Area {
        Area::new(self.inner.norm())
    }

    /// Normalizes into a [`Direction3`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the magnitude is zero,
    /// i.e. when the two crossed vectors were parallel.
    pub fn direction(&self) -> Result<Direction3> {
        if self.inner.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Direction3 {
            inner: nalgebra::Unit::new_normalize(self.inner),
        })
    }
}
