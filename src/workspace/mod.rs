//! Segment workspace.
//!
//! Holds the evolving set of glass segments a composition is built from and
//! applies shatter cuts to them, keeping per-segment metadata and the
//! adjacency between touching segments up to date.

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use tracing::debug;

use crate::error::{Result, WorkspaceError};
use crate::math::polygon_2d::point_on_boundary;
use crate::math::{Point2, Polygon, TOLERANCE};
use crate::shatter::shatter_with;

new_key_type! {
    /// Stable handle for a segment in a [`Workspace`].
    pub struct SegmentId;
}

/// A named rendering constraint attached to a segment.
///
/// `mask` selects which operators the constraint applies to and `dial` is
/// its strength in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub mask: u32,
    pub dial: f64,
}

/// One closed region of the canvas, with its layer and constraints.
///
/// Cutting a segment copies its layer and constraint list onto every child.
#[derive(Debug, Clone)]
pub struct Segment {
    pub boundary: Polygon,
    pub layer: u32,
    pub constraints: Vec<Constraint>,
}

/// The segment arena plus the touching-segment relation.
#[derive(Debug)]
pub struct Workspace {
    segments: SlotMap<SegmentId, Segment>,
    adjacency: SecondaryMap<SegmentId, Vec<SegmentId>>,
    tolerance: f64,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerance(TOLERANCE)
    }

    /// A workspace whose geometric identity tests use `eps` instead of the
    /// default tolerance.
    #[must_use]
    pub fn with_tolerance(eps: f64) -> Self {
        Self {
            segments: SlotMap::with_key(),
            adjacency: SecondaryMap::new(),
            tolerance: eps,
        }
    }

    /// Inserts a segment and records its adjacency to existing segments.
    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let touching: Vec<SegmentId> = self
            .segments
            .iter()
            .filter(|(_, other)| touches(&segment.boundary, &other.boundary, self.tolerance))
            .map(|(id, _)| id)
            .collect();
        let id = self.segments.insert(segment);
        self.adjacency.insert(id, touching.clone());
        for other in touching {
            if let Some(list) = self.adjacency.get_mut(other) {
                list.push(id);
            }
        }
        id
    }

    /// Looks up a segment by id.
    pub fn segment(&self, id: SegmentId) -> Result<&Segment> {
        self.segments
            .get(id)
            .ok_or_else(|| WorkspaceError::SegmentNotFound(format!("{id:?}")).into())
    }

    /// Ids of the segments touching `id`.
    pub fn neighbors(&self, id: SegmentId) -> &[SegmentId] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.segments.iter()
    }

    /// Shatters one segment along a shard, replacing it with the resulting
    /// pieces.
    ///
    /// Children copy the parent's layer and constraints, and the adjacency
    /// relation is rebuilt for everything the cut touched. A cut that leaves
    /// the segment whole keeps the original id in place and returns it as
    /// the single element. On error the workspace is unmodified.
    pub fn apply_cut(&mut self, id: SegmentId, shard: &[Point2]) -> Result<Vec<SegmentId>> {
        let parent = self.segment(id)?;
        let pieces = shatter_with(&parent.boundary, shard, self.tolerance)?;
        if pieces.len() == 1 {
            debug!(?id, "cut left the segment whole");
            return Ok(vec![id]);
        }

        let template = self
            .segments
            .remove(id)
            .ok_or_else(|| WorkspaceError::SegmentNotFound(format!("{id:?}")))?;
        let former: Vec<SegmentId> = self.neighbors(id).to_vec();
        self.adjacency.remove(id);
        for other in &former {
            if let Some(list) = self.adjacency.get_mut(*other) {
                list.retain(|&n| n != id);
            }
        }

        let children: Vec<SegmentId> = pieces
            .into_iter()
            .map(|boundary| {
                self.add_segment(Segment {
                    boundary,
                    layer: template.layer,
                    constraints: template.constraints.clone(),
                })
            })
            .collect();
        debug!(?id, children = children.len(), "segment shattered");
        Ok(children)
    }
}

/// Whether two boundaries touch: some vertex of one lies on the other.
///
/// Children of a cut share the shard line, so a shared vertex or a vertex
/// resting on the other boundary is how contact always manifests here.
fn touches(a: &[Point2], b: &[Point2], eps: f64) -> bool {
    a.iter().any(|v| point_on_boundary(v, b, eps))
        || b.iter().any(|v| point_on_boundary(v, a, eps))
}
