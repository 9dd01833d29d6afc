//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates entirely in the Minkowski-difference space of two convex
//! shapes: the shapes intersect if and only if the origin belongs to that
//! difference. The algorithm grows a simplex of up to four support points of
//! the difference, one per iteration, and lets the Voronoï-region reduction
//! rules shrink it toward the origin until either a tetrahedron encloses the
//! origin (intersection) or no further progress is possible (separation).
//!
//! In the separated case, the barycentric solver projects the origin onto
//! the simplex every iteration: the projection steers the search direction,
//! bounds the distance from above, and (blending the witness points carried
//! by each support point) yields the pair of closest points on the original
//! shapes. The support plane orthogonal to the search direction bounds the
//! distance from below; the iteration stops once the two bounds meet.
//!
//! The only capability required from the shapes is the
//! [`SupportMap`](crate::shape::SupportMap) trait; both shapes must be
//! expressed in one shared reference frame.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::closest_points::project_origin_and_reduce;
use crate::query::gjk::reduction::reduce;
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;

use num::Zero;

/// The default maximum number of iterations of the GJK algorithm.
///
/// The iteration cap is the only bound on the runtime of a query: it is a
/// safety valve against both true non-termination and floating-point
/// precision issues near geometric boundaries.
pub const MAX_ITERATIONS: u32 = 100;

// Relative gap between the projection and the support-plane bound under
// which the iteration is considered converged.
const RELATIVE_TOLERANCE: Real = DEFAULT_EPSILON * 100.0;

/// The outcome of a query, as far as the intersection status is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// The query could not be resolved.
    ///
    /// This never happens on well-formed inputs; it indicates an internal
    /// invariant violation.
    Unresolved,
    /// The two shapes intersect.
    Intersecting,
    /// The two shapes do not intersect.
    Separated,
}

/// The event that terminated the GJK iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// A tetrahedron of the simplex enclosed the origin of the
    /// Minkowski-difference space: the shapes intersect.
    Enclosed,
    /// The support plane found along the search direction met the current
    /// projection: no support point can bring the simplex any closer to the
    /// origin, so the projection is the distance up to the convergence
    /// tolerance.
    Converged,
    /// The support pair returned for the current search direction was
    /// already part of the simplex, so no further progress was possible.
    Cycled,
    /// The search direction became the zero vector: no support point can
    /// bring the simplex past the origin along it.
    DegenerateDirection,
    /// The iteration cap was reached before any of the other events.
    IterationLimitExceeded,
    /// The simplex reached a size no reduction rule exists for.
    ///
    /// This indicates an algorithm bug, not a caller error; it is reported
    /// (together with [`QueryStatus::Unresolved`]) instead of crashing the
    /// caller.
    InvalidSimplex,
}

/// The result of a GJK query between two convex shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueryResult {
    /// The intersection status of the two shapes.
    pub status: QueryStatus,
    /// The point of the first shape closest to the second shape.
    ///
    /// Meaningful only when `status` is [`QueryStatus::Separated`].
    pub point1: Point<Real>,
    /// The point of the second shape closest to the first shape.
    ///
    /// Meaningful only when `status` is [`QueryStatus::Separated`].
    pub point2: Point<Real>,
    /// The number of iterations the query ran for.
    pub iterations: u32,
    /// The event that terminated the iteration.
    pub reason: TerminationReason,
}

impl QueryResult {
    /// The distance between the two queried shapes.
    ///
    /// This is zero whenever the query did not end separated.
    pub fn distance(&self) -> Real {
        match self.status {
            QueryStatus::Separated => (self.point2 - self.point1).norm(),
            _ => 0.0,
        }
    }
}

/// Tests whether the two given convex shapes intersect.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    query(g1, g2).status == QueryStatus::Intersecting
}

/// Computes the distance separating the two given convex shapes.
///
/// Returns `0.0` if they intersect.
pub fn distance<G1, G2>(g1: &G1, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    query(g1, g2).distance()
}

/// Runs the GJK algorithm on the two given convex shapes.
///
/// Returns the intersection status and, when the shapes are separated, the
/// closest pair of points between them, together with the iteration count
/// and the reason the iteration stopped.
pub fn query<G1, G2>(g1: &G1, g2: &G2) -> QueryResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    query_with_max_iterations(g1, g2, MAX_ITERATIONS)
}

/// Same as [`query`] with a caller-provided iteration cap.
pub fn query_with_max_iterations<G1, G2>(g1: &G1, g2: &G2, max_iterations: u32) -> QueryResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    // Seed the simplex with a support point in an arbitrary fixed direction.
    let seed = CSOPoint::from_shapes(g1, g2, &Vector::y());
    let mut simplex = Simplex::new();
    simplex.reset(seed);
    let mut dir = -seed.point.coords;

    // Best projection found so far; the final answer always comes from
    // here, so a late mis-step of the region walk can never worsen the
    // result already at hand.
    let mut best = (seed.orig1, seed.orig2);
    let mut best_dist = seed.point.coords.norm();

    let mut niter = 0;

    while niter < max_iterations {
        niter += 1;

        let support = CSOPoint::from_shapes(g1, g2, &dir);

        // Getting the same support pair twice means the iteration would loop
        // forever without bringing the simplex any closer to the origin.
        if simplex.contains_support_pair(&support) {
            return separated(best, niter, TerminationReason::Cycled);
        }

        // A null search direction cannot cross the origin. This is a
        // distinct event from the cycle above and stays observable as such.
        if dir.norm_squared().is_zero() {
            return separated(best, niter, TerminationReason::DegenerateDirection);
        }

        // The support plane orthogonal to the search direction bounds the
        // distance from below. Once it reaches the projection, no support
        // point can improve the simplex and the projection is the answer.
        let lower_bound = -support.point.coords.dot(&dir) / dir.norm();
        if lower_bound > 0.0 && best_dist - lower_bound <= best_dist * RELATIVE_TOLERANCE {
            return separated(best, niter, TerminationReason::Converged);
        }

        simplex.push(support);
        let grown = simplex.clone();

        match reduce(&mut simplex, &mut dir) {
            Some(true) => {
                return QueryResult {
                    status: QueryStatus::Intersecting,
                    point1: Point::origin(),
                    point2: Point::origin(),
                    iterations: niter,
                    reason: TerminationReason::Enclosed,
                }
            }
            Some(false) => {
                let (p1, p2) = project_origin_and_reduce(&mut simplex);
                let mut witnesses = (p1, p2);
                let mut dist = (p1 - p2).norm();

                if dist >= best_dist {
                    // The region walk dropped the vertices supporting the
                    // improvement; take the closest feature of the unreduced
                    // simplex instead.
                    simplex = grown;
                    let (p1, p2) = project_origin_and_reduce(&mut simplex);
                    witnesses = (p1, p2);
                    dist = (p1 - p2).norm();
                }

                if dist < best_dist {
                    best = witnesses;
                    best_dist = dist;
                }

                // Search from the projection straight toward the origin. A
                // null projection means the origin lies on the simplex; the
                // direction produced by the region walk stands in then.
                if dist > 0.0 {
                    dir = witnesses.1 - witnesses.0;
                }
            }
            None => {
                log::debug!(
                    "Hit unexpected state in GJK: no reduction rule for a simplex of size {}.",
                    simplex.len()
                );
                return QueryResult {
                    status: QueryStatus::Unresolved,
                    point1: Point::origin(),
                    point2: Point::origin(),
                    iterations: niter,
                    reason: TerminationReason::InvalidSimplex,
                };
            }
        }
    }

    separated(best, niter, TerminationReason::IterationLimitExceeded)
}

fn separated(
    witnesses: (Point<Real>, Point<Real>),
    iterations: u32,
    reason: TerminationReason,
) -> QueryResult {
    QueryResult {
        status: QueryStatus::Separated,
        point1: witnesses.0,
        point2: witnesses.1,
        iterations,
        reason,
    }
}
