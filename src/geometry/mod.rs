use std::fmt;

pub mod axis;
pub mod bounding_box;
pub mod circle;
pub mod direction;
pub mod frame;
pub mod plane;
pub mod point;
pub mod segment;
pub mod sphere;
pub mod transform;
pub mod triangle;
pub mod vector;

pub use axis::{Axis2, Axis3};
pub use bounding_box::{BoundingBox2, BoundingBox3};
pub use circle::{Circle2, Circle3};
pub use direction::{Direction2, Direction3};
pub use frame::{Frame2, Frame3, SketchPlane3};
pub use plane::Plane3;
pub use point::{Point2, Point3};
pub use segment::{LineSegment2, LineSegment3};
pub use sphere::Sphere3;
pub use transform::{MapPoints2, MapPoints3, Transform2, Transform3};
pub use triangle::{Triangle2, Triangle3};
pub use vector::{AreaVector3, Vector2, Vector3};

/// Compile-time marker for a coordinate system.
///
/// Every point, and every primitive assembled from points, carries a `Space`
/// parameter as a zero-sized phantom tag. Values expressed in different
/// coordinate systems therefore cannot be mixed by accident; the only way to
/// move between spaces is an explicit conversion through a [`Frame2`],
/// [`Frame3`] or [`SketchPlane3`].
pub trait Space: Copy + fmt::Debug + PartialEq {}

/// The default global 2D coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct World2;

impl Space for World2 {}

/// The default global 3D coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct World3;

impl Space for World3 {}
