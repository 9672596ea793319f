//! Unit-dimension tagged scalar quantities.
//!
//! Arithmetic is only defined between compatible dimensions; the
//! dimension-changing operations (`Length * Length -> Area`,
//! `Area * Length -> Volume`, `Area::sqrt -> Length`, ...) are the only
//! way to move between them. All quantities are zero-cost newtypes over
//! `f64` in world units (meters, radians).

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A one-dimensional length quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Creates a length from a raw value in world units.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value in world units.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the square of this length.
    #[inline]
    #[must_use]
    pub fn squared(self) -> Area {
        Area(self.0 * self.0)
    }

    /// Returns the absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the smaller of two lengths.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the larger of two lengths.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}

impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// `Length * Length` changes dimension to [`Area`].
impl Mul for Length {
    type Output = Area;
    fn mul(self, rhs: Length) -> Area {
        Area(self.0 * rhs.0)
    }
}

/// `Length / Length` yields a unitless ratio.
impl Div for Length {
    type Output = f64;
    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// A two-dimensional area quantity (squared length).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Area(f64);

impl Area {
    pub const ZERO: Area = Area(0.0);

    /// Creates an area from a raw value in squared world units.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value in squared world units.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the square root of this area as a length.
    ///
    /// Negative input is a precondition violation: every in-crate caller
    /// feeds a sum of squares, which cannot be negative.
    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Length {
        debug_assert!(self.0 >= 0.0, "sqrt of negative area");
        Length(self.0.sqrt())
    }

    /// Returns the absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the smaller of two areas.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the larger of two areas.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Area {
    type Output = Area;
    fn add(self, rhs: Area) -> Area {
        Area(self.0 + rhs.0)
    }
}

impl Sub for Area {
    type Output = Area;
    fn sub(self, rhs: Area) -> Area {
        Area(self.0 - rhs.0)
    }
}

impl Neg for Area {
    type Output = Area;
    fn neg(self) -> Area {
        Area(-self.0)
    }
}

impl Mul<f64> for Area {
    type Output = Area;
    fn mul(self, rhs: f64) -> Area {
        Area(self.0 * rhs)
    }
}

impl Div<f64> for Area {
    type Output = Area;
    fn div(self, rhs: f64) -> Area {
        Area(self.0 / rhs)
    }
}

/// `Area * Length` changes dimension to [`Volume`].
impl Mul<Length> for Area {
    type Output = Volume;
    fn mul(self, rhs: Length) -> Volume {
        Volume(self.0 * rhs.0)
    }
}

/// `Area / Length` changes dimension back to [`Length`].
impl Div<Length> for Area {
    type Output = Length;
    fn div(self, rhs: Length) -> Length {
        Length(self.0 / rhs.0)
    }
}

/// `Area / Area` yields a unitless ratio.
impl Div for Area {
    type Output = f64;
    fn div(self, rhs: Area) -> f64 {
        self.0 / rhs.0
    }
}

/// A three-dimensional volume quantity (cubed length).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    pub const ZERO: Volume = Volume(0.0);

    /// Creates a volume from a raw value in cubed world units.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value in cubed world units.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Volume {
    type Output = Volume;
    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl Sub for Volume {
    type Output = Volume;
    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;
    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Div<f64> for Volume {
    type Output = Volume;
    fn div(self, rhs: f64) -> Volume {
        Volume(self.0 / rhs)
    }
}

/// An angle quantity, stored in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Creates an angle from radians.
    #[inline]
    #[must_use]
    pub const fn radians(value: f64) -> Self {
        Self(value)
    }

    /// Creates an angle from degrees.
    #[inline]
    #[must_use]
    pub fn degrees(value: f64) -> Self {
        Self(value.to_radians())
    }

    /// Returns the angle in radians.
    #[inline]
    #[must_use]
    pub const fn to_radians(self) -> f64 {
        self.0
    }

    /// Returns the angle in degrees.
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Computes the angle of the vector `(x, y)` from the positive X axis,
    /// in `(-pi, pi]`.
    #[inline]
    #[must_use]
    pub fn atan2(y: Length, x: Length) -> Self {
        Self(y.value().atan2(x.value()))
    }

    /// Returns the sine of the angle.
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Returns the absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn length_times_length_is_area() {
        let a = Length::new(3.0) * Length::new(4.0);
        assert!((a.value() - 12.0).abs() < TOL);
    }

    #[test]
    fn area_sqrt_inverts_squared() {
        let l = Length::new(2.5);
        assert!((l.squared().sqrt().value() - 2.5).abs() < TOL);
    }

    #[test]
    fn area_times_length_is_volume() {
        let v = Area::new(6.0) * Length::new(2.0);
        assert!((v.value() - 12.0).abs() < TOL);
    }

    #[test]
    fn area_over_length_is_length() {
        let l = Area::new(6.0) / Length::new(2.0);
        assert!((l.value() - 3.0).abs() < TOL);
    }

    #[test]
    fn length_ratio_is_unitless() {
        let r = Length::new(6.0) / Length::new(4.0);
        assert!((r - 1.5).abs() < TOL);
    }

    #[test]
    fn length_ordering_and_extrema() {
        let a = Length::new(-2.0);
        let b = Length::new(1.0);
        assert!(a < b);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(a.abs(), Length::new(2.0));
    }

    #[test]
    fn angle_degree_round_trip() {
        let a = Angle::degrees(90.0);
        assert!((a.to_radians() - std::f64::consts::FRAC_PI_2).abs() < TOL);
        assert!((a.to_degrees() - 90.0).abs() < TOL);
    }

    #[test]
    fn angle_atan2_quadrants() {
        let a = Angle::atan2(Length::new(1.0), Length::new(1.0));
        assert!((a.to_radians() - std::f64::consts::FRAC_PI_4).abs() < TOL);
        let b = Angle::atan2(Length::new(-1.0), Length::new(-1.0));
        assert!((b.to_radians() + 3.0 * std::f64::consts::FRAC_PI_4).abs() < TOL);
    }
}
