//! The GJK algorithm for distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::simplex::Simplex;

mod closest_points;
mod cso_point;
mod gjk;
mod reduction;
mod simplex;
