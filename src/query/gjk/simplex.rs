use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// An ordered set of 1 to 4 CSO points used to bracket the origin within the
/// Minkowski difference of two shapes.
///
/// Index 0 holds the oldest retained vertex and the highest index the most
/// recently appended one. Every region test of the reduction step is written
/// against this convention; changing it silently flips the sign of every
/// cross product involved.
///
/// Reduction steps never splice this structure in place: they build a fresh
/// simplex from copies of the surviving vertices and replace it wholesale.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<CSOPoint, 4>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex {
            vertices: ArrayVec::new(),
        }
    }

    /// Builds a simplex from the given vertices, oldest first.
    pub fn from_vertices(vertices: &[CSOPoint]) -> Simplex {
        Simplex {
            vertices: vertices.iter().copied().collect(),
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.vertices.clear();
        self.vertices.push(pt);
    }

    /// Appends a vertex, which becomes the newest one.
    ///
    /// Panics if the simplex already holds four vertices.
    pub fn push(&mut self, pt: CSOPoint) {
        self.vertices.push(pt);
    }

    /// The number of vertices of this simplex.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex contain no vertex at all?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The i-th vertex of this simplex, oldest first.
    pub fn point(&self, i: usize) -> &CSOPoint {
        &self.vertices[i]
    }

    /// All the vertices of this simplex, oldest first.
    pub fn points(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// Tests whether a vertex produced by the same support pair as `pt` is
    /// already part of this simplex.
    pub fn contains_support_pair(&self, pt: &CSOPoint) -> bool {
        self.vertices.iter().any(|v| v.same_support_pair(pt))
    }
}

#[cfg(test)]
mod test {
    use super::Simplex;
    use crate::math::Point;
    use crate::query::gjk::CSOPoint;

    fn pt(x: f32, id: u32) -> CSOPoint {
        CSOPoint::new(Point::new(x, 0.0, 0.0), id, Point::origin(), 0)
    }

    #[test]
    fn ordering_is_oldest_first() {
        let mut simplex = Simplex::new();
        simplex.reset(pt(1.0, 1));
        simplex.push(pt(2.0, 2));
        simplex.push(pt(3.0, 3));

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex.point(0).id1, 1);
        assert_eq!(simplex.point(2).id1, 3);

        let rebuilt = Simplex::from_vertices(&[*simplex.point(2), *simplex.point(0)]);
        assert_eq!(rebuilt.len(), 2);
        assert_eq!(rebuilt.point(0).id1, 3);
        assert_eq!(rebuilt.point(1).id1, 1);
    }

    #[test]
    fn detects_known_support_pairs() {
        let mut simplex = Simplex::new();
        simplex.reset(pt(1.0, 1));
        simplex.push(pt(2.0, 2));

        assert!(simplex.contains_support_pair(&pt(-5.0, 2)));
        assert!(!simplex.contains_support_pair(&pt(1.0, 3)));
    }
}
