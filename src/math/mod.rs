pub mod angle_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// A polygon as an ordered, cyclic vertex list (edge `i` joins vertex `i` to
/// vertex `(i + 1) % n`; no explicit closing vertex). A 2-vertex polygon
/// denotes an open cutting segment.
pub type Polygon = Vec<Point2>;

/// Default geometric tolerance for floating-point vertex identity.
///
/// Every geometry call takes an explicit `eps`; this is the process-wide
/// default used by the convenience entry points.
pub const TOLERANCE: f64 = 1e-9;

/// Coordinate-wise tolerance equality of two points.
///
/// This governs all identity decisions in the intersection graph: node
/// merging, deduplication along a subdivided edge, and path closure.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}
