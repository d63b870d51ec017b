use std::cmp::Ordering;

use tracing::trace;

use super::graph::IntersectionGraph;
use crate::math::angle_2d::dirangle;
use crate::math::distance_2d::distance;

/// Angular tie-break direction for a boundary walk.
///
/// `Left` always takes the most counterclockwise turn available, `Right` the
/// most clockwise one. Walking "keep turning the same way" is what extracts a
/// single face boundary instead of wandering across the whole graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handedness {
    Left,
    Right,
}

/// What the tracer is doing after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraceAction {
    Run,
    Done,
    Error,
}

/// Step-by-step state of one boundary walk over the intersection graph.
///
/// `path` holds the node ids walked so far; its last element is always
/// `previous`. On closure, `path` is cut down to just the closed loop.
#[derive(Debug, Clone)]
pub(crate) struct PathState {
    pub action: TraceAction,
    pub path: Vec<usize>,
    pub current: usize,
    pub previous: usize,
    hand: Handedness,
}

/// The two walks seeded from the same edge, diverging in handedness.
#[derive(Debug)]
pub(crate) struct ChainState {
    pub left: PathState,
    pub right: PathState,
}

impl PathState {
    fn seeded(seed: (usize, usize), hand: Handedness) -> Self {
        Self {
            action: TraceAction::Run,
            path: vec![seed.0],
            current: seed.1,
            previous: seed.0,
            hand,
        }
    }

    /// One transition: detect cycle closure, otherwise pick the next
    /// neighbor by directed angle and advance.
    fn step(&mut self, graph: &IntersectionGraph) {
        // The edge (previous, current) closing a loop means the sub-path
        // from its earlier occurrence is a complete face boundary.
        if let Some(i) = self
            .path
            .windows(2)
            .position(|w| w[0] == self.previous && w[1] == self.current)
        {
            self.path.truncate(self.path.len() - 1);
            self.path.drain(..i);
            self.action = TraceAction::Done;
            return;
        }

        let neighbors = graph.neighbors(self.current);
        let mut candidates: Vec<usize> = neighbors
            .iter()
            .copied()
            .filter(|&n| n != self.previous)
            .collect();
        if candidates.is_empty() {
            // A dead end is only escapable by retreating.
            if neighbors.contains(&self.previous) {
                candidates.push(self.previous);
            } else {
                self.action = TraceAction::Error;
                return;
            }
        }

        let scored = candidates.into_iter().map(|n| {
            let angle = dirangle(
                graph.node(self.previous),
                graph.node(self.current),
                graph.node(n),
            );
            let dist = distance(graph.node(self.current), graph.node(n));
            (angle, dist, n)
        });
        let chosen = match self.hand {
            Handedness::Left => scored.min_by(|a, b| rank(a, b)),
            Handedness::Right => scored.max_by(|a, b| rank_far(a, b)),
        };
        let Some((_, _, next)) = chosen else {
            self.action = TraceAction::Error;
            return;
        };

        self.path.push(self.current);
        self.previous = self.current;
        self.current = next;
    }
}

/// Orders by angle, breaking coincident directions by nearest candidate.
fn rank(a: &(f64, f64, usize), b: &(f64, f64, usize)) -> Ordering {
    if (a.0 - b.0).abs() < 1e-9 {
        a.1.total_cmp(&b.1)
    } else {
        a.0.total_cmp(&b.0)
    }
}

/// As [`rank`], but suited for `max_by`: among coincident directions the
/// nearest candidate still wins.
fn rank_far(a: &(f64, f64, usize), b: &(f64, f64, usize)) -> Ordering {
    if (a.0 - b.0).abs() < 1e-9 {
        b.1.total_cmp(&a.1)
    } else {
        a.0.total_cmp(&b.0)
    }
}

/// Walks the graph from a seed edge until a loop closes or the step budget
/// runs out. Divergence is reported through the returned state's action,
/// never a panic.
pub(crate) fn trace(graph: &IntersectionGraph, seed: (usize, usize), hand: Handedness) -> PathState {
    let mut state = PathState::seeded(seed, hand);
    let budget = 2 * graph.edge_count() + 4;
    for _ in 0..budget {
        state.step(graph);
        if state.action != TraceAction::Run {
            trace!(?hand, len = state.path.len(), action = ?state.action, "trace finished");
            return state;
        }
    }
    state.action = TraceAction::Error;
    state
}

/// Runs both handedness walks from one seed.
pub(crate) fn trace_pair(graph: &IntersectionGraph, seed: (usize, usize)) -> ChainState {
    ChainState {
        left: trace(graph, seed, Handedness::Left),
        right: trace(graph, seed, Handedness::Right),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, TOLERANCE};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn cut_square() -> IntersectionGraph {
        let glass = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let shard = vec![p(-1.0, 2.0), p(5.0, 2.0)];
        IntersectionGraph::build(&glass, &shard, TOLERANCE).unwrap()
    }

    fn node_id(graph: &IntersectionGraph, target: Point2) -> usize {
        (0..)
            .find(|&i| crate::math::points_equal(graph.node(i), &target, TOLERANCE))
            .unwrap()
    }

    fn loop_points(graph: &IntersectionGraph, state: &PathState) -> Vec<Point2> {
        state.path.iter().map(|&i| *graph.node(i)).collect()
    }

    #[test]
    fn left_trace_closes_bottom_rectangle() {
        let graph = cut_square();
        let seed = (node_id(&graph, p(0.0, 0.0)), node_id(&graph, p(4.0, 0.0)));
        let state = trace(&graph, seed, Handedness::Left);
        assert_eq!(state.action, TraceAction::Done);
        let pts = loop_points(&graph, &state);
        assert_eq!(pts.len(), 4);
        let area = crate::math::polygon_2d::signed_area_2d(&pts);
        assert!((area - 8.0).abs() < 1e-9, "area={area}");
    }

    #[test]
    fn left_trace_from_reversed_seed_walks_outer_cycle() {
        // Walking the bottom edge westwards, the most counterclockwise turns
        // follow the whole boundary clockwise; the face selector will reject
        // this loop and fall back to the right walk.
        let graph = cut_square();
        let seed = (node_id(&graph, p(4.0, 0.0)), node_id(&graph, p(0.0, 0.0)));
        let state = trace(&graph, seed, Handedness::Left);
        assert_eq!(state.action, TraceAction::Done);
        let pts = loop_points(&graph, &state);
        assert_eq!(pts.len(), 6);
        let area = crate::math::polygon_2d::signed_area_2d(&pts);
        assert!((area + 16.0).abs() < 1e-9, "area={area}");
    }

    #[test]
    fn right_trace_closes_a_loop() {
        let graph = cut_square();
        let seed = (node_id(&graph, p(0.0, 0.0)), node_id(&graph, p(4.0, 0.0)));
        let state = trace(&graph, seed, Handedness::Right);
        assert_eq!(state.action, TraceAction::Done);
        assert!(state.path.len() >= 4);
    }

    #[test]
    fn uncut_square_traces_whole_boundary() {
        let glass = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let shard = vec![p(2.0, -1.0), p(2.0, 1.0)];
        let graph = IntersectionGraph::build(&glass, &shard, TOLERANCE).unwrap();
        // The shard dangles into the glass and is pruned, leaving the plain
        // boundary cycle subdivided at (2, 0).
        let seed = graph.next_unmarked().unwrap();
        let state = trace(&graph, seed, Handedness::Left);
        assert_eq!(state.action, TraceAction::Done);
        assert_eq!(state.path.len(), 5);
    }
}
