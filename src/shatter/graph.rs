use std::collections::HashSet;

use tracing::trace;

use crate::math::distance_2d::distance;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::{boundary_edges, point_on_boundary, winding_number};
use crate::math::{points_equal, Point2};

/// Which polygon a subdivision pass walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Glass,
    Shard,
}

/// The planar intersection graph of a glass/shard polygon pair.
///
/// Vertices are interned once into a dense node arena (tolerance-aware
/// lookup, stable `usize` ids); all later traversal work is pure integer
/// adjacency. The mark set records undirected edges already consumed by an
/// extracted face, so they can never seed a new trace.
#[derive(Debug)]
pub(crate) struct IntersectionGraph {
    nodes: Vec<Point2>,
    adjacency: Vec<Vec<usize>>,
    marks: HashSet<(usize, usize)>,
    eps: f64,
}

impl IntersectionGraph {
    /// Builds the graph for one shatter call.
    ///
    /// Returns `None` when no glass edge intersects any shard edge; the
    /// caller then leaves the glass uncut. This covers disjoint shards and
    /// shards fully inside or outside the glass.
    pub fn build(glass: &[Point2], shard: &[Point2], eps: f64) -> Option<Self> {
        let glass_edges = boundary_edges(glass);
        let shard_edges = boundary_edges(shard);

        let crossing = glass_edges.iter().any(|(a0, a1)| {
            shard_edges
                .iter()
                .any(|(b0, b1)| segment_segment_intersect_2d(a0, a1, b0, b1, eps).is_some())
        });
        if !crossing {
            return None;
        }

        let mut graph = Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            marks: HashSet::new(),
            eps,
        };
        graph.subdivide(&glass_edges, &shard_edges, Side::Glass, glass);
        graph.subdivide(&shard_edges, &glass_edges, Side::Shard, glass);
        graph.prune_dangling();
        trace!(
            nodes = graph.nodes.len(),
            edges = graph.edge_count(),
            premarked = graph.marks.len(),
            "built intersection graph"
        );
        Some(graph)
    }

    /// Splits every base edge at its crossings with the other polygon and
    /// links the resulting sub-edges.
    fn subdivide(
        &mut self,
        base: &[(Point2, Point2)],
        other: &[(Point2, Point2)],
        side: Side,
        glass: &[Point2],
    ) {
        for (i, edge) in base.iter().enumerate() {
            // A boundary edge that appears twice (either direction) doubles
            // back on itself; its sub-edges may never seed a face.
            let duplicated = base
                .iter()
                .enumerate()
                .any(|(j, e)| j != i && self.edges_equal(edge, e));

            let mut cuts: Vec<Point2> = vec![edge.0, edge.1];
            for (b0, b1) in other {
                if let Some(pt) = segment_segment_intersect_2d(&edge.0, &edge.1, b0, b1, self.eps)
                {
                    cuts.push(pt);
                }
            }
            cuts.sort_by(|a, b| distance(&edge.0, a).total_cmp(&distance(&edge.0, b)));
            cuts.dedup_by(|a, b| points_equal(a, b, self.eps));

            for k in 0..cuts.len().saturating_sub(1) {
                let (p, q) = (cuts[k], cuts[k + 1]);
                // Shard sub-edges contribute to the partition only inside the
                // glass; the rest would dangle off the result as antennas.
                if side == Side::Shard && !self.interior_to(&p, &q, glass) {
                    continue;
                }
                let a = self.intern(p);
                let b = self.intern(q);
                if a == b {
                    continue;
                }
                self.link(a, b);
                if duplicated {
                    self.marks.insert(Self::key(a, b));
                }
            }
        }
    }

    /// Whether the sub-edge `p`→`q` runs strictly inside the glass.
    fn interior_to(&self, p: &Point2, q: &Point2, glass: &[Point2]) -> bool {
        let mid = Point2::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0);
        !point_on_boundary(&mid, glass, self.eps) && winding_number(&mid, glass) != 0
    }

    /// Interns a vertex, merging tolerance-equal points into one node.
    fn intern(&mut self, p: Point2) -> usize {
        if let Some(i) = self.nodes.iter().position(|n| points_equal(n, &p, self.eps)) {
            return i;
        }
        self.nodes.push(p);
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Records an undirected adjacency exactly once.
    fn link(&mut self, a: usize, b: usize) {
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
        }
        if !self.adjacency[b].contains(&a) {
            self.adjacency[b].push(a);
        }
    }

    /// Removes edges hanging off degree-1 nodes until none remain.
    ///
    /// Cut segments that end inside the glass would otherwise leave a
    /// zero-width slit in the traced faces.
    fn prune_dangling(&mut self) {
        loop {
            let Some(leaf) = (0..self.nodes.len()).find(|&i| self.adjacency[i].len() == 1)
            else {
                break;
            };
            let neighbor = self.adjacency[leaf][0];
            self.adjacency[leaf].clear();
            self.adjacency[neighbor].retain(|&n| n != leaf);
        }
    }

    fn edges_equal(&self, a: &(Point2, Point2), b: &(Point2, Point2)) -> bool {
        (points_equal(&a.0, &b.0, self.eps) && points_equal(&a.1, &b.1, self.eps))
            || (points_equal(&a.0, &b.1, self.eps) && points_equal(&a.1, &b.0, self.eps))
    }

    fn key(a: usize, b: usize) -> (usize, usize) {
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn node(&self, i: usize) -> &Point2 {
        &self.nodes[i]
    }

    pub fn tolerance(&self) -> f64 {
        self.eps
    }

    /// Whether an undirected edge already belongs to an extracted face.
    pub fn is_marked(&self, a: usize, b: usize) -> bool {
        self.marks.contains(&Self::key(a, b))
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    /// Number of undirected edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Deterministic scan for the next seed: the first adjacency, in node
    /// index then insertion order, whose edge is not yet marked.
    pub fn next_unmarked(&self) -> Option<(usize, usize)> {
        for a in 0..self.adjacency.len() {
            for &b in &self.adjacency[a] {
                if !self.marks.contains(&Self::key(a, b)) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    /// Marks every edge of an extracted face; returns how many were fresh.
    pub fn mark_face(&mut self, cycle: &[usize]) -> usize {
        let n = cycle.len();
        let mut fresh = 0;
        for i in 0..n {
            if self.marks.insert(Self::key(cycle[i], cycle[(i + 1) % n])) {
                fresh += 1;
            }
        }
        fresh
    }
}
