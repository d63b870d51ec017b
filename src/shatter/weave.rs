use tracing::trace;

use super::graph::IntersectionGraph;
use super::trace::{ChainState, PathState, TraceAction};
use crate::error::ShatterError;
use crate::math::polygon_2d::{interior_sample, winding_number};
use crate::math::Point2;

/// Selects the face bounded by a seed edge from its pair of traced loops.
///
/// The left walk is checked first: a loop whose interior probe winds +1 is a
/// counterclockwise face and is taken as-is. Otherwise the right walk must
/// enclose its probe clockwise, and is reversed into counterclockwise order.
/// Any other outcome means the inputs do not bound a coherent region.
pub(crate) fn weave(
    graph: &IntersectionGraph,
    seed: (usize, usize),
    chains: &ChainState,
) -> Result<Vec<usize>, ShatterError> {
    if chains.left.action != TraceAction::Done || chains.right.action != TraceAction::Done {
        return Err(ShatterError::TraceDivergence {
            steps: 2 * graph.edge_count() + 4,
            detail: format!(
                "seed {} left={:?} right={:?}",
                describe_seed(graph, seed),
                chains.left.action,
                chains.right.action
            ),
        });
    }

    if let Some(w) = probe(graph, &chains.left) {
        if w == 1 {
            trace!(len = chains.left.path.len(), "left loop accepted");
            return Ok(chains.left.path.clone());
        }
    }
    if let Some(w) = probe(graph, &chains.right) {
        if w == -1 {
            trace!(len = chains.right.path.len(), "right loop accepted, reversing");
            let mut path = chains.right.path.clone();
            path.reverse();
            return Ok(path);
        }
        return Err(ShatterError::IntersectionAmbiguous(format!(
            "neither loop around seed {} winds a face: left {}, right {}",
            describe_seed(graph, seed),
            describe_path(graph, &chains.left),
            describe_path(graph, &chains.right)
        )));
    }
    Err(ShatterError::NoInteriorSample(format!(
        "loops around seed {} are degenerate: left {}, right {}",
        describe_seed(graph, seed),
        describe_path(graph, &chains.left),
        describe_path(graph, &chains.right)
    )))
}

/// Winding of a loop's own interior probe, `None` for degenerate loops.
fn probe(graph: &IntersectionGraph, state: &PathState) -> Option<i32> {
    let pts: Vec<Point2> = state.path.iter().map(|&i| *graph.node(i)).collect();
    interior_sample(&pts, graph.tolerance()).map(|s| winding_number(&s, &pts))
}

fn describe_seed(graph: &IntersectionGraph, seed: (usize, usize)) -> String {
    format!(
        "({:.4}, {:.4})->({:.4}, {:.4})",
        graph.node(seed.0).x,
        graph.node(seed.0).y,
        graph.node(seed.1).x,
        graph.node(seed.1).y
    )
}

fn describe_path(graph: &IntersectionGraph, state: &PathState) -> String {
    let verts: Vec<String> = state
        .path
        .iter()
        .map(|&i| format!("({:.4}, {:.4})", graph.node(i).x, graph.node(i).y))
        .collect();
    format!("[{}]", verts.join(", "))
}
