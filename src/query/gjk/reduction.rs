//! Voronoï-region reduction of the GJK simplex.
//!
//! After one support point has been appended, these rules determine which
//! sub-simplex is closest to the origin, rebuild the simplex to it and
//! produce the next search direction. The newest vertex is always called `A`
//! below; it is the one that was just appended and is therefore the closest
//! to the origin among the vertices, which is why only the regions adjacent
//! to `A` ever need to be examined.

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};

/// Runs the reduction rule matching the current simplex size.
///
/// Returns `Some(true)` if the simplex encloses the origin, `Some(false)`
/// with a rebuilt simplex and updated direction otherwise, and `None` if the
/// simplex has a size no rule exists for (an internal invariant violation).
pub(crate) fn reduce(simplex: &mut Simplex, dir: &mut Vector<Real>) -> Option<bool> {
    match simplex.len() {
        2 => {
            reduce_segment(simplex, dir);
            Some(false)
        }
        3 => {
            reduce_triangle(simplex, dir);
            Some(false)
        }
        4 => Some(reduce_tetrahedron(simplex, dir)),
        _ => None,
    }
}

fn reduce_segment(simplex: &mut Simplex, dir: &mut Vector<Real>) {
    let a = *simplex.point(1);
    let b = *simplex.point(0);

    let ab = b.point - a.point;
    let ao = -a.point.coords;

    if ab.dot(&ao) > 0.0 {
        // Origin in the edge region: keep the segment and search
        // perpendicular to it, in the plane of `AB` and `AO`.
        *simplex = Simplex::from_vertices(&[b, a]);
        *dir = ab.cross(&ao).cross(&ab);
    } else {
        // Origin behind `A`.
        *simplex = Simplex::from_vertices(&[a]);
        *dir = ao;
    }
}

fn reduce_triangle(simplex: &mut Simplex, dir: &mut Vector<Real>) {
    let a = *simplex.point(2);
    let b = *simplex.point(1);
    let c = *simplex.point(0);

    let ab = b.point - a.point;
    let ac = c.point - a.point;
    let ao = -a.point.coords;
    let abc = ab.cross(&ac);

    if abc.cross(&ac).dot(&ao) > 0.0 {
        if ac.dot(&ao) > 0.0 {
            // Voronoï region of the edge `AC`.
            *simplex = Simplex::from_vertices(&[c, a]);
            *dir = ac.cross(&ao).cross(&ac);
        } else {
            reduce_to_segment_ab(simplex, dir, b, a);
        }
    } else if ab.cross(&abc).dot(&ao) > 0.0 {
        reduce_to_segment_ab(simplex, dir, b, a);
    } else if abc.dot(&ao) > 0.0 {
        // Above the face.
        *simplex = Simplex::from_vertices(&[c, b, a]);
        *dir = abc;
    } else {
        // Below the face: keep it with the winding flipped.
        *simplex = Simplex::from_vertices(&[b, c, a]);
        *dir = -abc;
    }
}

// The `AB` fallthrough shared by two branches of the triangle rule.
fn reduce_to_segment_ab(simplex: &mut Simplex, dir: &mut Vector<Real>, b: CSOPoint, a: CSOPoint) {
    *simplex = Simplex::from_vertices(&[b, a]);
    reduce_segment(simplex, dir);
}

fn reduce_tetrahedron(simplex: &mut Simplex, dir: &mut Vector<Real>) -> bool {
    let a = *simplex.point(3);
    let b = *simplex.point(2);
    let c = *simplex.point(1);
    let d = *simplex.point(0);

    let ab = b.point - a.point;
    let ac = c.point - a.point;
    let ad = d.point - a.point;
    let ao = -a.point.coords;

    let abc = ab.cross(&ac);
    let acd = ac.cross(&ad);
    let adb = ad.cross(&ab);

    // The face `DCB` is not examined: it was already behind the search
    // direction on the step that produced `A`.
    if abc.dot(&ao) > 0.0 {
        *simplex = Simplex::from_vertices(&[c, b, a]);
        reduce_triangle(simplex, dir);
        return false;
    }

    if acd.dot(&ao) > 0.0 {
        *simplex = Simplex::from_vertices(&[d, c, a]);
        reduce_triangle(simplex, dir);
        return false;
    }

    if adb.dot(&ao) > 0.0 {
        *simplex = Simplex::from_vertices(&[b, d, a]);
        reduce_triangle(simplex, dir);
        return false;
    }

    true
}
