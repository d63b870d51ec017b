use tracing::debug;

use super::graph::IntersectionGraph;
use super::trace::trace_pair;
use super::weave::weave;
use crate::error::ShatterError;
use crate::math::polygon_2d::rotate_to_canonical_start;
use crate::math::{Point2, Polygon, TOLERANCE};

/// Shatters a glass polygon along a shard polyline with the default
/// tolerance. See [`shatter_with`].
pub fn shatter(glass: &[Point2], shard: &[Point2]) -> Result<Vec<Polygon>, ShatterError> {
    shatter_with(glass, shard, TOLERANCE)
}

/// Shatters a glass polygon along a shard, returning the closed regions the
/// cut partitions it into.
///
/// The glass must bound a region; the shard may be an open segment chain
/// (2 vertices upward) or a closed polygon. A shard that never crosses the
/// glass boundary, or has fewer than 2 vertices, leaves the glass uncut and
/// yields it back as the single result. Every returned face is in
/// counterclockwise order, starting from its leftmost-lowest vertex.
pub fn shatter_with(
    glass: &[Point2],
    shard: &[Point2],
    eps: f64,
) -> Result<Vec<Polygon>, ShatterError> {
    if glass.len() < 3 {
        return Err(ShatterError::DegenerateInput(format!(
            "glass polygon has {} vertices, need at least 3",
            glass.len()
        )));
    }
    if shard.len() < 2 {
        return Ok(vec![glass.to_vec()]);
    }

    let Some(mut graph) = IntersectionGraph::build(glass, shard, eps) else {
        debug!("shard does not cross the glass boundary, leaving it uncut");
        return Ok(vec![glass.to_vec()]);
    };

    let ceiling = graph.edge_count();
    let mut faces: Vec<Polygon> = Vec::new();
    while let Some(seed) = graph.next_unmarked() {
        if faces.len() >= ceiling {
            return Err(ShatterError::TraceDivergence {
                steps: ceiling,
                detail: format!("extracted {} faces without exhausting the graph", faces.len()),
            });
        }
        let chains = trace_pair(&graph, seed);
        let cycle = weave(&graph, seed, &chains)?;
        let fresh = graph.mark_face(&cycle);
        if fresh == 0 {
            return Err(ShatterError::IntersectionAmbiguous(format!(
                "face selection stalled: seed ({:.4}, {:.4})->({:.4}, {:.4}) rewove an already \
                 extracted face",
                graph.node(seed.0).x,
                graph.node(seed.0).y,
                graph.node(seed.1).x,
                graph.node(seed.1).y
            )));
        }
        let pts: Vec<Point2> = cycle.iter().map(|&i| *graph.node(i)).collect();
        faces.push(rotate_to_canonical_start(&pts, eps));
    }
    debug!(faces = faces.len(), "shatter complete");
    Ok(faces)
}
