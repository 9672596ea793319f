use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::{Angle, Length, TOLERANCE};

use super::vector::{Vector2, Vector3};

/// A unit-length orientation in 2D space.
///
/// Distinct from a [`Vector2`], which may have any length: a direction is
/// always unit length, so there is no degenerate value to guard against
/// once one has been constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction2 {
    pub(crate) inner: Unit<nalgebra::Vector2<f64>>,
}

impl Direction2 {
    /// The positive X direction.
    #[must_use]
    pub fn x() -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector2::new(1.0, 0.0)),
        }
    }

    /// The positive Y direction.
    #[must_use]
    pub fn y() -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector2::new(0.0, 1.0)),
        }
    }

    /// Creates a direction from components, normalizing them.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the components are all
    /// zero; a zero vector is never silently normalized.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Vector2::from_components(x, y).direction()
    }

    /// Creates the direction at a counterclockwise angle from the positive
    /// X axis.
    #[must_use]
    pub fn from_angle(angle: Angle) -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector2::new(
                angle.cos(),
                angle.sin(),
            )),
        }
    }

    /// Returns the counterclockwise angle from the positive X axis, in
    /// `(-pi, pi]`.
    #[must_use]
    pub fn to_angle(self) -> Angle {
        Angle::radians(self.inner.y.atan2(self.inner.x))
    }

    /// Returns the X component.
    #[must_use]
    pub fn x_component(self) -> f64 {
        self.inner.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y_component(self) -> f64 {
        self.inner.y
    }

    /// Computes the dot product with another direction.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.inner.dot(&other.inner.into_inner())
    }

    /// Computes the 2D cross product with another direction.
    ///
    /// Equals the sine of the counterclockwise angle from `self` to
    /// `other`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.inner.perp(&other.inner.into_inner())
    }

    /// Rotates the direction counterclockwise by an angle.
    #[must_use]
    pub fn rotate_by(self, angle: Angle) -> Self {
        Self {
            inner: Unit::new_unchecked(
                nalgebra::Rotation2::new(angle.to_radians()) * self.inner.into_inner(),
            ),
        }
    }

    /// Returns the signed counterclockwise angle from `other` to `self`,
    /// in `(-pi, pi]`.
    ///
    /// Consistent with [`rotate_by`](Self::rotate_by):
    /// `other.rotate_by(self.angle_from(other))` reproduces `self`.
    #[must_use]
    pub fn angle_from(self, other: Self) -> Angle {
        Angle::radians(other.cross(self).atan2(other.dot(self)))
    }

    /// Returns the direction rotated a quarter turn counterclockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector2::new(
                -self.inner.y,
                self.inner.x,
            )),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            inner: Unit::new_unchecked(-self.inner.into_inner()),
        }
    }

    /// Returns the vector with this direction and the given length.
    #[must_use]
    pub fn times(self, length: Length) -> Vector2 {
        Vector2 {
            inner: self.inner.into_inner() * length.value(),
        }
    }

    /// Produces an orthonormal direction pair from two arbitrary vectors
    /// via Gram-Schmidt: the first direction follows `u`, the second is
    /// `v` with its component along `u` removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the vectors are parallel (their cross product
    /// is zero) or either is zero-length.
    pub fn orthonormalize(u: Vector2, v: Vector2) -> Result<(Self, Self)> {
        let x_direction = u.direction()?;
        let residual = v - x_direction.times(v.component_in(x_direction));
        let y_direction = residual.direction().map_err(|_| {
            GeometryError::Degenerate("cannot orthonormalize parallel vectors".into())
        })?;
        Ok((x_direction, y_direction))
    }
}

impl std::ops::Neg for Direction2 {
    type Output = Direction2;
    fn neg(self) -> Direction2 {
        self.reversed()
    }
}

/// A unit-length orientation in 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction3 {
    pub(crate) inner: Unit<nalgebra::Vector3<f64>>,
}

impl Direction3 {
    /// The positive X direction.
    #[must_use]
    pub fn x() -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector3::new(1.0, 0.0, 0.0)),
        }
    }

    /// The positive Y direction.
    #[must_use]
    pub fn y() -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector3::new(0.0, 1.0, 0.0)),
        }
    }

    /// The positive Z direction.
    #[must_use]
    pub fn z() -> Self {
        Self {
            inner: Unit::new_unchecked(nalgebra::Vector3::new(0.0, 0.0, 1.0)),
        }
    }

    /// Creates a direction from components, normalizing them.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the components are all
    /// zero.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Vector3::from_components(x, y, z).direction()
    }

    /// Returns the X component.
    #[must_use]
    pub fn x_component(self) -> f64 {
        self.inner.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y_component(self) -> f64 {
        self.inner.y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z_component(self) -> f64 {
        self.inner.z
    }

    /// Computes the dot product with another direction.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.inner.dot(&other.inner.into_inner())
    }

    /// Computes the normalized cross product with another direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the directions are
    /// parallel or opposite.
    pub fn cross(self, other: Self) -> Result<Self> {
        let cross = self.inner.cross(&other.inner.into_inner());
        if cross.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self {
            inner: Unit::new_normalize(cross),
        })
    }

    /// Returns the unsigned angle to another direction, in `[0, pi]`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> Angle {
        Angle::radians(self.dot(other).clamp(-1.0, 1.0).acos())
    }

    /// Returns a direction perpendicular to this one.
    ///
    /// Deterministic and defined for every input: the seed axis is chosen
    /// away from the dominant component to keep the cross product well
    /// conditioned.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        let reference = if self.inner.x.abs() < 0.9 {
            nalgebra::Vector3::new(1.0, 0.0, 0.0)
        } else {
            nalgebra::Vector3::new(0.0, 1.0, 0.0)
        };
        Self {
            inner: Unit::new_normalize(self.inner.cross(&reference)),
        }
    }

    /// Returns two directions that complete this one into a right-handed
    /// orthonormal basis `(self, first, second)`.
    #[must_use]
    pub fn perpendicular_basis(self) -> (Self, Self) {
        let first = self.perpendicular();
        let second = Self {
            inner: Unit::new_unchecked(self.inner.cross(&first.inner.into_inner())),
        };
        (first, second)
    }

    /// Rotates the direction about an axis direction by an angle, following
    /// the right-hand rule.
    #[must_use]
    pub fn rotate_about(self, axis: Self, angle: Angle) -> Self {
        let rotation = nalgebra::Rotation3::from_axis_angle(&axis.inner, angle.to_radians());
        Self {
            inner: Unit::new_unchecked(rotation * self.inner.into_inner()),
        }
    }

    /// Mirrors the direction across the plane through the origin with the
    /// given normal.
    #[must_use]
    pub fn mirror_in(self, normal: Self) -> Self {
        let n = normal.inner.into_inner();
        let d = self.inner.into_inner();
        Self {
            inner: Unit::new_unchecked(d - n * (2.0 * d.dot(&n))),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            inner: Unit::new_unchecked(-self.inner.into_inner()),
        }
    }

    /// Returns the vector with this direction and the given length.
    #[must_use]
    pub fn times(self, length: Length) -> Vector3 {
        Vector3 {
            inner: self.inner.into_inner() * length.value(),
        }
    }
}

impl std::ops::Neg for Direction3 {
    type Output = Direction3;
    fn neg(self) -> Direction3 {
        self.reversed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-9;

    #[test]
    fn zero_components_are_rejected() {
        assert_eq!(Direction2::new(0.0, 0.0), Err(GeometryError::ZeroVector));
        assert_eq!(
            Direction3::new(0.0, 0.0, 0.0),
            Err(GeometryError::ZeroVector)
        );
    }

    #[test]
    fn from_angle_to_angle_round_trip() {
        for i in -7..=7 {
            let angle = Angle::radians(f64::from(i) * PI / 7.5);
            let d = Direction2::from_angle(angle);
            assert!((d.to_angle().to_radians() - angle.to_radians()).abs() < TOL);
        }
    }

    #[test]
    fn rotate_by_angle_from_reproduces_target() {
        // Required consistency: rotating A by the angle from A to B gives B.
        for i in 0..12 {
            for j in 0..12 {
                let a = Direction2::from_angle(Angle::degrees(f64::from(i) * 30.0));
                let b = Direction2::from_angle(Angle::degrees(f64::from(j) * 30.0 + 10.0));
                let rotated = a.rotate_by(b.angle_from(a));
                assert!((rotated.x_component() - b.x_component()).abs() < TOL);
                assert!((rotated.y_component() - b.y_component()).abs() < TOL);
            }
        }
    }

    #[test]
    fn angle_from_sign() {
        let x = Direction2::x();
        let y = Direction2::y();
        assert!((y.angle_from(x).to_radians() - FRAC_PI_2).abs() < TOL);
        assert!((x.angle_from(y).to_radians() + FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn perpendicular_is_quarter_turn_ccw() {
        let d = Direction2::new(3.0, 4.0).unwrap();
        let p = d.perpendicular();
        assert!(d.dot(p).abs() < TOL);
        assert!((d.cross(p) - 1.0).abs() < TOL);
    }

    #[test]
    fn orthonormalize_produces_orthonormal_pair() {
        let u = Vector2::from_components(2.0, 1.0);
        let v = Vector2::from_components(-1.0, 3.0);
        let (a, b) = Direction2::orthonormalize(u, v).unwrap();
        assert!(a.dot(b).abs() < TOL);
        assert!((a.x_component() * 2.0f64.hypot(1.0) - 2.0).abs() < TOL);
    }

    #[test]
    fn orthonormalize_parallel_vectors_fails() {
        let u = Vector2::from_components(1.0, 2.0);
        let v = Vector2::from_components(-2.0, -4.0);
        assert!(Direction2::orthonormalize(u, v).is_err());
    }

    #[test]
    fn cross_of_parallel_directions_fails() {
        let d = Direction3::new(1.0, 1.0, 0.0).unwrap();
        assert_eq!(d.cross(d), Err(GeometryError::ZeroVector));
        assert_eq!(d.cross(d.reversed()), Err(GeometryError::ZeroVector));
    }

    #[test]
    fn perpendicular_basis_is_right_handed() {
        let samples = [
            Direction3::x(),
            Direction3::y(),
            Direction3::z(),
            Direction3::new(1.0, 1.0, 1.0).unwrap(),
            Direction3::new(-0.95, 0.1, 0.2).unwrap(),
            Direction3::new(0.0, 0.0, -1.0).unwrap(),
        ];
        for d in samples {
            let (a, b) = d.perpendicular_basis();
            assert!(d.dot(a).abs() < TOL);
            assert!(d.dot(b).abs() < TOL);
            assert!(a.dot(b).abs() < TOL);
            // a x b must point back along d for a right-handed triple.
            let n = a.cross(b).unwrap();
            assert!((n.dot(d) - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn angle_to_is_unsigned() {
        let x = Direction3::x();
        let d = Direction3::new(0.0, 1.0, 0.0).unwrap();
        assert!((x.angle_to(d).to_radians() - FRAC_PI_2).abs() < TOL);
        assert!((d.angle_to(x).to_radians() - FRAC_PI_2).abs() < TOL);
        assert!((x.angle_to(x.reversed()).to_radians() - PI).abs() < TOL);
    }

    #[test]
    fn rotate_about_preserves_axis() {
        let axis = Direction3::new(1.0, 1.0, 1.0).unwrap();
        let r = axis.rotate_about(axis, Angle::degrees(73.0));
        assert!((r.dot(axis) - 1.0).abs() < TOL);
    }

    #[test]
    fn mirror_in_flips_normal_component() {
        let d = Direction3::new(1.0, 0.0, 1.0).unwrap();
        let m = d.mirror_in(Direction3::z());
        assert!((m.x_component() - d.x_component()).abs() < TOL);
        assert!((m.z_component() + d.z_component()).abs() < TOL);
    }
}
