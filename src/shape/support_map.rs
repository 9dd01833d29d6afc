//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Trait of convex shapes representable by a support mapping function.
///
/// A support function is a function associating a vector to the shape point
/// which maximizes their dot product. This is the only geometric capability
/// the GJK queries consume: shapes never expose their vertex or face
/// topology.
///
/// # Contract
///
/// - Among all points describable by the shape, the returned point must
///   maximize its dot product with `dir`. Ties may be broken arbitrarily,
///   but deterministically: the same direction must always yield the same
///   point and identifier.
/// - The `u32` identifier must be stable for a given supporting vertex
///   across calls within one query, and unique within one shape. Identifiers
///   are only ever compared for equality (they drive the cycle guard of the
///   iteration); a provider that reuses an identifier for two geometrically
///   distinct vertices can cause a query to report separation prematurely.
///   Identifiers need not be unique across different shapes.
/// - Implementations must be reentrant: a query holds two shared borrows and
///   performs no synchronization. A shape that caches transformed geometry
///   must keep that cache immutable for the duration of a query or protect
///   it on its own.
pub trait SupportMap {
    /// Evaluates the support function of this shape, returning the
    /// supporting point together with its stable identifier.
    fn support_point_with_id(&self, dir: &Vector<Real>) -> (Point<Real>, u32);

    /// Evaluates the support function of this shape.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.support_point_with_id(dir).0
    }
}
