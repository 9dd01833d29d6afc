use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the Minkowski
/// difference of two solids. In other words, each of its points corresponds
/// to the difference of two points, each belonging to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is always equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
    /// Identifier of the supporting vertex on the first shape.
    ///
    /// Only ever compared for equality, to detect that the same support pair
    /// was returned twice.
    pub id1: u32,
    /// Identifier of the supporting vertex on the second shape.
    pub id2: u32,
    /// Barycentric weight written by the closest-point computation.
    ///
    /// Meaningless outside of it.
    pub weight: Real,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, id1: u32, orig2: Point<Real>, id2: u32) -> Self {
        CSOPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
            id1,
            id2,
            weight: 0.0,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the
    /// direction `dir`.
    ///
    /// This queries `g1` along `dir` and `g2` along `-dir`; it is the only
    /// place where the two shapes interact.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let (sp1, id1) = g1.support_point_with_id(dir);
        let (sp2, id2) = g2.support_point_with_id(&-*dir);

        CSOPoint::new(sp1, id1, sp2, id2)
    }

    /// Tests whether `self` and `other` were produced by the same pair of
    /// supporting vertices.
    pub fn same_support_pair(&self, other: &CSOPoint) -> bool {
        self.id1 == other.id1 && self.id2 == other.id2
    }
}

#[cfg(test)]
mod test {
    use super::CSOPoint;
    use crate::math::Point;

    #[test]
    fn difference_point_is_derived_from_witnesses() {
        let pt = CSOPoint::new(Point::new(1.0, 2.0, 3.0), 7, Point::new(0.5, -1.0, 3.0), 4);
        assert_eq!(pt.point, Point::new(0.5, 3.0, 0.0));
        assert!(pt.same_support_pair(&CSOPoint::new(Point::origin(), 7, Point::origin(), 4)));
        assert!(!pt.same_support_pair(&CSOPoint::new(Point::origin(), 7, Point::origin(), 5)));
    }
}
