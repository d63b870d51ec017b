//! Shatters a canvas-sized segment twice and prints the resulting pieces.
//!
//! Run with `RUST_LOG=tessella=debug cargo run --example shatter` to watch
//! the engine trace its work.

use tessella::math::polygon_2d::{centroid_2d, signed_area_2d};
use tessella::math::Point2;
use tessella::{Constraint, Segment, Workspace};
use tracing_subscriber::EnvFilter;

fn main() -> tessella::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut workspace = Workspace::new();
    let canvas = workspace.add_segment(Segment {
        boundary: vec![
            Point2::new(0.0, 0.0),
            Point2::new(800.0, 0.0),
            Point2::new(800.0, 600.0),
            Point2::new(0.0, 600.0),
        ],
        layer: 0,
        constraints: vec![Constraint {
            name: "base-wash".into(),
            mask: 0b0001,
            dial: 0.4,
        }],
    });

    // A slanted cut across the whole canvas, then a vertical cut through
    // the lower piece.
    let halves = workspace.apply_cut(
        canvas,
        &[Point2::new(-10.0, 420.0), Point2::new(810.0, 180.0)],
    )?;
    let mut lower = halves[0];
    for &h in &halves[1..] {
        let candidate = centroid_2d(&workspace.segment(h)?.boundary);
        let best = centroid_2d(&workspace.segment(lower)?.boundary);
        if candidate.y < best.y {
            lower = h;
        }
    }
    workspace.apply_cut(
        lower,
        &[Point2::new(300.0, -10.0), Point2::new(300.0, 610.0)],
    )?;

    for (id, segment) in workspace.iter() {
        let area = signed_area_2d(&segment.boundary);
        let c = centroid_2d(&segment.boundary);
        println!(
            "{id:?}: {} vertices, area {area:.1}, centroid ({:.1}, {:.1}), {} neighbors",
            segment.boundary.len(),
            c.x,
            c.y,
            workspace.neighbors(id).len()
        );
    }
    Ok(())
}
