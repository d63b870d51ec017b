use super::distance_2d::point_to_segment_dist;
use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area-weighted centroid of a polygon.
///
/// Falls back to the vertex average for degenerate (zero-area) input.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    let n = points.len();
    if n == 0 {
        return Point2::new(0.0, 0.0);
    }
    let area = signed_area_2d(points);
    if area.abs() < 1e-20 {
        #[allow(clippy::cast_precision_loss)]
        let inv_n = 1.0 / n as f64;
        return Point2::new(
            points.iter().map(|p| p.x).sum::<f64>() * inv_n,
            points.iter().map(|p| p.y).sum::<f64>() * inv_n,
        );
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let a = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * a;
        cy += (points[i].y + points[j].y) * a;
    }
    Point2::new(cx / (6.0 * area), cy / (6.0 * area))
}

/// Signed crossing count of a ray from `point` against the polygon boundary.
///
/// +1 for a point enclosed by a simple CCW cycle, -1 for CW, 0 outside.
/// Behavior for points exactly on the boundary is not defined; probe points
/// come from [`interior_sample`], which rejects boundary hits.
#[must_use]
pub fn winding_number(point: &Point2, boundary: &[Point2]) -> i32 {
    let n = boundary.len();
    let mut wn = 0;
    for i in 0..n {
        let h = &boundary[i];
        let t = &boundary[(i + 1) % n];
        let left = (t.x - h.x) * (point.y - h.y) - (point.x - h.x) * (t.y - h.y);
        if h.y <= point.y && t.y > point.y && left > 0.0 {
            wn += 1;
        }
        if h.y > point.y && t.y <= point.y && left < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Whether `point` lies within `eps` of any boundary edge.
#[must_use]
pub fn point_on_boundary(point: &Point2, boundary: &[Point2], eps: f64) -> bool {
    boundary_edges(boundary)
        .iter()
        .any(|(a, b)| point_to_segment_dist(point, a, b) < eps)
}

/// Finds a point strictly inside the polygon, usable as a winding probe.
///
/// Scans consecutive vertex triples for a non-degenerate triangle and tests
/// its midpoint for containment. Returns `None` for polygons that degenerate
/// to a line or point.
#[must_use]
pub fn interior_sample(points: &[Point2], eps: f64) -> Option<Point2> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let c = &points[(i + 2) % n];
        let area2 = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
        if area2.abs() < eps {
            continue;
        }
        let mid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        if winding_number(&mid, points) != 0 && !point_on_boundary(&mid, points, eps) {
            return Some(mid);
        }
    }
    None
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2], eps: f64) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - eps || (pt.x - b.x).abs() < eps && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// The cyclic edge list of a polygon.
///
/// A 2-vertex polygon yields a single open edge rather than a doubled-back
/// cycle; fewer than 2 vertices yield nothing.
#[must_use]
pub fn boundary_edges(points: &[Point2]) -> Vec<(Point2, Point2)> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => vec![(points[0], points[1])],
        n => (0..n).map(|i| (points[i], points[(i + 1) % n])).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_relative_eq!(signed_area_2d(&unit_square()), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert_relative_eq!(signed_area_2d(&pts), -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid_2d(&unit_square());
        assert_relative_eq!(c.x, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(c.y, 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn centroid_orientation_independent() {
        let mut pts = unit_square();
        pts.reverse();
        let c = centroid_2d(&pts);
        assert_relative_eq!(c.x, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(c.y, 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn winding_inside_ccw_is_plus_one() {
        assert_eq!(winding_number(&p(0.5, 0.5), &unit_square()), 1);
    }

    #[test]
    fn winding_inside_cw_is_minus_one() {
        let mut pts = unit_square();
        pts.reverse();
        assert_eq!(winding_number(&p(0.5, 0.5), &pts), -1);
    }

    #[test]
    fn winding_outside_is_zero() {
        assert_eq!(winding_number(&p(2.0, 0.5), &unit_square()), 0);
        assert_eq!(winding_number(&p(-1.0, -1.0), &unit_square()), 0);
    }

    #[test]
    fn on_boundary_detects_edge_and_vertex() {
        let sq = unit_square();
        assert!(point_on_boundary(&p(0.5, 0.0), &sq, TOLERANCE));
        assert!(point_on_boundary(&p(1.0, 1.0), &sq, TOLERANCE));
        assert!(!point_on_boundary(&p(0.5, 0.5), &sq, TOLERANCE));
    }

    #[test]
    fn interior_sample_square() {
        let s = interior_sample(&unit_square(), TOLERANCE).unwrap();
        assert_eq!(winding_number(&s, &unit_square()), 1);
    }

    #[test]
    fn interior_sample_reflex_polygon() {
        // L-shape: the first triple's midpoint may fall outside; the scan
        // must keep looking.
        let ell = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 4.0),
            p(0.0, 4.0),
        ];
        let s = interior_sample(&ell, TOLERANCE).unwrap();
        assert_eq!(winding_number(&s, &ell), 1);
    }

    #[test]
    fn interior_sample_degenerate_line_is_none() {
        let line = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert!(interior_sample(&line, TOLERANCE).is_none());
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts, TOLERANCE);
        assert!(rotated[0].x.abs() < TOLERANCE);
        assert!(rotated[0].y.abs() < TOLERANCE);
        assert_eq!(rotated.len(), 4);
    }

    #[test]
    fn boundary_edges_of_segment_and_square() {
        assert!(boundary_edges(&[p(0.0, 0.0)]).is_empty());
        assert_eq!(boundary_edges(&[p(0.0, 0.0), p(1.0, 0.0)]).len(), 1);
        assert_eq!(boundary_edges(&unit_square()).len(), 4);
    }
}
