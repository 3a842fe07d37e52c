//! Stitching independent cell segments into rings.
//!
//! Points are interned into an arena keyed by epsilon-grid quantized
//! coordinates, so segment endpoints match through integer identities
//! instead of raw floating-point comparisons. Each segment is consumed
//! exactly once while walking continuation chains.

use std::collections::HashMap;

use contour_core::{Point, Ring};

use crate::cell::Segment;

/// Quantization scale for point identity (snap grid of 1e-4, finer than
/// the 1e-3 ring-closure tolerance).
const SNAP_SCALE: f64 = 1.0e4;

/// Owned point store with quantized-coordinate deduplication.
struct PointArena {
    points: Vec<Point>,
    index: HashMap<(i64, i64), u32>,
}

impl PointArena {
    fn new() -> Self {
        Self {
            points: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn intern(&mut self, p: Point) -> u32 {
        let key = (
            (p.x * SNAP_SCALE).round() as i64,
            (p.y * SNAP_SCALE).round() as i64,
        );
        *self.index.entry(key).or_insert_with(|| {
            let id = self.points.len() as u32;
            self.points.push(p);
            id
        })
    }

    fn get(&self, id: u32) -> Point {
        self.points[id as usize]
    }
}

/// Walk segment continuation chains until every segment is consumed,
/// emitting one ring per chain in discovery order.
///
/// A chain closes when it returns to its starting point; a chain with no
/// continuation is emitted as an open ring rather than discarded.
pub fn assemble_rings(segments: &[Segment]) -> Vec<Ring> {
    if segments.is_empty() {
        return vec![];
    }

    let mut arena = PointArena::new();
    let segs: Vec<(u32, u32)> = segments
        .iter()
        .map(|s| (arena.intern(s.from), arena.intern(s.to)))
        .collect();

    // Outgoing-segment index per start point
    let mut outgoing: HashMap<u32, Vec<usize>> = HashMap::new();
    for (i, &(from, _)) in segs.iter().enumerate() {
        outgoing.entry(from).or_default().push(i);
    }

    let mut used = vec![false; segs.len()];
    let mut rings = Vec::new();

    for start_idx in 0..segs.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let (start, mut cur) = segs[start_idx];
        let mut points = vec![arena.get(start), arena.get(cur)];

        while cur != start {
            let next_idx = outgoing
                .get(&cur)
                .and_then(|candidates| candidates.iter().copied().find(|&i| !used[i]));
            let Some(next_idx) = next_idx else {
                break; // open chain, tolerated
            };
            used[next_idx] = true;
            cur = segs[next_idx].1;
            points.push(arena.get(cur));
        }

        rings.push(Ring::from_points(points));
    }

    rings
}
