pub mod quantity;

pub use quantity::{Angle, Area, Length, Volume};

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
