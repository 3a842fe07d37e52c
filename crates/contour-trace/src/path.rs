//! Draw-command adapter for external path serializers.

use contour_core::{ContourSet, Point, Ring};
use serde::{Deserialize, Serialize};

/// One vector-path drawing step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Move { x: f64, y: f64 },
    Line { x: f64, y: f64 },
    Close,
}

/// Draw commands for all contours at one threshold level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourPath {
    pub threshold: f64,
    pub commands: Vec<DrawCommand>,
}

/// Emit commands for one ring: move to the first point, lines to the rest,
/// and an explicit close only when the ring's endpoints coincide. Open
/// chains are left unclosed rather than forced shut.
fn ring_commands(ring: &Ring, commands: &mut Vec<DrawCommand>) {
    let mut points = ring.points.iter();
    let Some(first) = points.next() else {
        return;
    };

    commands.push(DrawCommand::Move {
        x: first.x,
        y: first.y,
    });

    // A closed ring repeats its first point; the close command stands in
    // for that final line.
    let line_points: &[Point] = if ring.closed {
        &ring.points[1..ring.points.len() - 1]
    } else {
        &ring.points[1..]
    };
    for p in line_points {
        commands.push(DrawCommand::Line { x: p.x, y: p.y });
    }

    if ring.closed {
        commands.push(DrawCommand::Close);
    }
}

/// Turn one threshold's contour set into a flat command sequence.
pub fn to_path(set: &ContourSet) -> ContourPath {
    let mut commands = Vec::new();
    for polygon in &set.polygons {
        for ring in polygon {
            ring_commands(ring, &mut commands);
        }
    }
    ContourPath {
        threshold: set.threshold,
        commands,
    }
}
