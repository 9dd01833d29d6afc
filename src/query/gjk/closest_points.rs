//! Barycentric projection of the origin onto the simplex.
//!
//! The solver locates the point of the simplex closest to the origin in
//! Minkowski-difference space, expresses it as barycentric weights of the
//! simplex vertices, and applies those weights to the witness points carried
//! by each vertex. The output is always a weighted combination of witness
//! points, never of the difference points themselves.
//!
//! Besides the witness pair, the projection identifies the supporting
//! feature (the vertices with a nonzero weight); the iteration shrinks its
//! simplex to that feature so that the next search direction always points
//! from the projection straight toward the origin.

use crate::math::{Point, Real};
use crate::query::gjk::{CSOPoint, Simplex};
use arrayvec::ArrayVec;

// Fallback divisor substituted for a zero-length edge, so that a degenerate
// segment yields its midpoint-ish blend instead of a division by zero.
const DEGENERATE_EDGE_DIVISOR: Real = 0.5;

// The vertices supporting a projection, oldest first.
type Feature = ArrayVec<CSOPoint, 3>;

/// Computes the closest pair of witness points described by the simplex and
/// shrinks it to the feature supporting that projection.
///
/// The simplex must have 1 to 4 vertices. With four vertices the origin must
/// lie outside of the tetrahedron, so that the projection falls on one of
/// its faces; the iteration only reaches this case after the enclosure test
/// has failed.
pub(crate) fn project_origin_and_reduce(simplex: &mut Simplex) -> (Point<Real>, Point<Real>) {
    let feature = match simplex.len() {
        1..=3 => closest_feature(simplex.points()),
        4 => closest_surface_feature(simplex.points()),
        _ => {
            log::debug!(
                "Hit unexpected state in GJK: projection on a simplex of size {}.",
                simplex.len()
            );
            return (Point::origin(), Point::origin());
        }
    };

    let witnesses = blend(&feature);
    *simplex = Simplex::from_vertices(&feature);
    witnesses
}

// Applies the barycentric weights carried by the vertices to both sets of
// witness points.
fn blend(vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
    let mut p1 = Point::origin();
    let mut p2 = Point::origin();

    for v in vertices {
        p1 += v.orig1.coords * v.weight;
        p2 += v.orig2.coords * v.weight;
    }

    (p1, p2)
}

fn closest_feature(vertices: &[CSOPoint]) -> Feature {
    match *vertices {
        [a] => vertex(a),
        [a, b] => solve_segment(a, b),
        [a, b, c] => solve_triangle(a, b, c),
        _ => Feature::new(),
    }
}

// Closest feature of a tetrahedron not containing the origin: the best of
// its four faces.
fn closest_surface_feature(vertices: &[CSOPoint]) -> Feature {
    let faces = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
    let mut best: Option<(Real, Feature)> = None;

    for [i, j, k] in faces {
        let feature = solve_triangle(vertices[i], vertices[j], vertices[k]);
        let (p1, p2) = blend(&feature);
        let dist = (p1 - p2).norm_squared();

        if best.as_ref().map_or(true, |(d, _)| dist < *d) {
            best = Some((dist, feature));
        }
    }

    best.map(|(_, feature)| feature).unwrap_or_default()
}

fn vertex(mut a: CSOPoint) -> Feature {
    a.weight = 1.0;
    let mut feature = Feature::new();
    feature.push(a);
    feature
}

fn solve_segment(mut a: CSOPoint, mut b: CSOPoint) -> Feature {
    // Unnormalized barycentric terms of the origin along `AB`.
    let u = (-b.point.coords).dot(&(a.point - b.point));
    let v = (-a.point.coords).dot(&(b.point - a.point));

    if v <= 0.0 {
        // Voronoï region of `A`.
        return vertex(a);
    }

    if u <= 0.0 {
        // Voronoï region of `B`.
        return vertex(b);
    }

    let mut denom = (b.point - a.point).norm_squared();
    if denom == 0.0 {
        denom = DEGENERATE_EDGE_DIVISOR;
    }

    a.weight = u / denom;
    b.weight = v / denom;

    let mut feature = Feature::new();
    feature.push(a);
    feature.push(b);
    feature
}

fn solve_triangle(mut a: CSOPoint, mut b: CSOPoint, mut c: CSOPoint) -> Feature {
    let ab = b.point - a.point;
    let ac = c.point - a.point;
    let n = ab.cross(&ac);

    if n.norm_squared() <= 0.0 {
        // The three points are effectively collinear; the two least-recent
        // vertices span the same segment.
        return solve_segment(a, b);
    }

    // Unnormalized barycentric terms of the origin along each edge. For an
    // edge `PQ`, `u` is the weight of `P` and `v` the weight of `Q`.
    let u_ab = (-b.point.coords).dot(&(a.point - b.point));
    let v_ab = (-a.point.coords).dot(&(b.point - a.point));
    let u_bc = (-c.point.coords).dot(&(b.point - c.point));
    let v_bc = (-b.point.coords).dot(&(c.point - b.point));
    let u_ca = (-a.point.coords).dot(&(c.point - a.point));
    let v_ca = (-c.point.coords).dot(&(a.point - c.point));

    // Vertex regions.
    if v_ab <= 0.0 && u_ca <= 0.0 {
        return vertex(a);
    }

    if u_ab <= 0.0 && v_bc <= 0.0 {
        return vertex(b);
    }

    if u_bc <= 0.0 && v_ca <= 0.0 {
        return vertex(c);
    }

    // Signed sub-areas of the triangles spanned by the origin and each edge.
    let u_abc = b.point.coords.cross(&c.point.coords).dot(&n);
    let v_abc = c.point.coords.cross(&a.point.coords).dot(&n);
    let w_abc = a.point.coords.cross(&b.point.coords).dot(&n);

    // Edge regions, keeping the retained vertices oldest first.
    if u_ab > 0.0 && v_ab > 0.0 && w_abc <= 0.0 {
        return solve_segment(a, b);
    }

    if u_bc > 0.0 && v_bc > 0.0 && u_abc <= 0.0 {
        return solve_segment(b, c);
    }

    if u_ca > 0.0 && v_ca > 0.0 && v_abc <= 0.0 {
        return solve_segment(a, c);
    }

    // Face region. The sub-areas sum to `n · n`, which the degeneracy check
    // guarantees to be positive.
    let denom = u_abc + v_abc + w_abc;
    a.weight = u_abc / denom;
    b.weight = v_abc / denom;
    c.weight = w_abc / denom;

    let mut feature = Feature::new();
    feature.push(a);
    feature.push(b);
    feature.push(c);
    feature
}

#[cfg(test)]
mod test {
    use super::project_origin_and_reduce;
    use crate::math::{Point, Real, Vector};
    use crate::query::gjk::{CSOPoint, Simplex};
    use approx::relative_eq;

    // A CSO point whose second witness sits at a fixed offset, so that the
    // tests can check that witness points (not difference points) get
    // blended.
    fn pt(x: Real, y: Real, z: Real) -> CSOPoint {
        let offset = Vector::new(1.0, 2.0, 3.0);
        let diff = Point::new(x, y, z);
        CSOPoint::new(diff + offset, 0, Point::origin() + offset, 0)
    }

    fn solve(points: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        let mut simplex = Simplex::from_vertices(points);
        project_origin_and_reduce(&mut simplex)
    }

    #[test]
    fn single_vertex_returns_its_witnesses() {
        let (p1, p2) = solve(&[pt(3.0, -1.0, 2.0)]);
        assert_eq!(p1, Point::new(4.0, 1.0, 5.0));
        assert_eq!(p2, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn segment_blends_interior_point() {
        let (p1, p2) = solve(&[pt(-1.0, 1.0, 0.0), pt(1.0, 1.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(0.0, 1.0, 0.0));
        assert_eq!(p2, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn segment_clamps_to_nearest_vertex() {
        let (p1, p2) = solve(&[pt(3.0, 0.0, 0.0), pt(1.0, 0.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(1.0, 0.0, 0.0));

        let (p1, p2) = solve(&[pt(1.0, 0.0, 0.0), pt(3.0, 0.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn projection_keeps_only_the_supporting_vertices() {
        // Clamped segment: only the nearest vertex supports the projection.
        let mut simplex = Simplex::from_vertices(&[pt(3.0, 0.0, 0.0), pt(1.0, 0.0, 0.0)]);
        let (p1, p2) = project_origin_and_reduce(&mut simplex);

        assert_eq!(simplex.len(), 1);
        assert_eq!(simplex.point(0).point, Point::new(1.0, 0.0, 0.0));
        assert_eq!(p1 - p2, Vector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn triangle_vertex_region() {
        let (p1, p2) = solve(&[pt(1.0, 0.0, 0.0), pt(2.0, 1.0, 0.0), pt(2.0, -1.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn triangle_edge_region() {
        let (p1, p2) = solve(&[pt(-1.0, 1.0, 0.0), pt(1.0, 1.0, 0.0), pt(0.0, 2.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn triangle_face_region() {
        let (p1, p2) = solve(&[pt(2.0, -1.0, 1.0), pt(-1.0, 2.0, 1.0), pt(-1.0, -1.0, 1.0)]);
        assert!(relative_eq!(
            p1 - p2,
            Vector::new(0.0, 0.0, 1.0),
            epsilon = 1.0e-6
        ));
    }

    #[test]
    fn collinear_triangle_collapses_to_oldest_segment() {
        let (p1, p2) = solve(&[pt(-1.0, 1.0, 0.0), pt(1.0, 1.0, 0.0), pt(0.0, 1.0, 0.0)]);
        assert_eq!(p1 - p2, Vector::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn tetrahedron_projects_to_its_nearest_face() {
        // Apex last: the nearest face is the base, which does not contain
        // the newest vertex.
        let base0 = pt(-1.0, -1.0, 1.0);
        let base1 = pt(1.0, -1.0, 1.0);
        let base2 = pt(0.0, 1.0, 1.0);
        let apex = pt(0.0, 0.0, 3.0);

        let mut simplex = Simplex::from_vertices(&[base0, base1, base2, apex]);
        let (p1, p2) = project_origin_and_reduce(&mut simplex);

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex.point(0).point, base0.point);
        assert_eq!(simplex.point(2).point, base2.point);
        assert_eq!(p1 - p2, Vector::new(0.0, 0.0, 1.0));
    }
}
