//! Traits implemented by convex shapes usable with the GJK queries.

pub use self::support_map::SupportMap;

mod support_map;
