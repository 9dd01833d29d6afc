//! Intersection and closest-point queries between two convex shapes.

pub use self::gjk::{
    distance, intersection_test, query, query_with_max_iterations, QueryResult, QueryStatus,
    TerminationReason, MAX_ITERATIONS,
};

pub mod gjk;
