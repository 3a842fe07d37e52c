//! Per-cell edge-crossing classification (marching squares).
//!
//! Each 2x2 cell gets a 4-bit code from comparing its corners against the
//! threshold; a fixed 16-entry table maps the code to 0-2 directed edge
//! crossings. Segments are oriented with the >= region on the right of
//! travel, so a segment ending on a shared edge always meets a segment
//! starting at the same point in the neighboring cell.

use contour_core::{Grid, Point};

/// Cell edges, numbered clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// One edge-crossing fragment produced within a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

use Edge::{Bottom, Left, Right, Top};

/// Directed edge-crossing pairs per corner code.
///
/// Code bits: 8 = top-left, 4 = top-right, 2 = bottom-right, 1 = bottom-left,
/// set when the corner is >= threshold. Codes 5 and 10 are saddles (diagonal
/// corners agree, adjacent disagree) and always split on the same fixed
/// diagonal; no center-value decider is consulted, so checkerboard-like data
/// can show disconnected diagonal artifacts. Preserved source behavior.
static CASE_TABLE: [&[(Edge, Edge)]; 16] = [
    &[],                             // 0: all below
    &[(Left, Bottom)],               // 1: bl
    &[(Bottom, Right)],              // 2: br
    &[(Left, Right)],                // 3: bl, br
    &[(Right, Top)],                 // 4: tr
    &[(Right, Top), (Left, Bottom)], // 5: tr, bl (saddle)
    &[(Bottom, Top)],                // 6: tr, br
    &[(Left, Top)],                  // 7: all but tl
    &[(Top, Left)],                  // 8: tl
    &[(Top, Bottom)],                // 9: tl, bl
    &[(Top, Left), (Bottom, Right)], // 10: tl, br (saddle)
    &[(Top, Right)],                 // 11: all but tr
    &[(Right, Left)],                // 12: tl, tr
    &[(Right, Bottom)],              // 13: all but br
    &[(Bottom, Left)],               // 14: all but bl
    &[],                             // 15: all above
];

/// Fractional position of the threshold crossing between two corner values.
///
/// With smoothing off the crossing sits at the edge midpoint; with it on,
/// linear interpolation is used, guarded against equal corner values. No
/// clamping is applied beyond that guard.
#[inline]
fn crossing(va: f64, vb: f64, threshold: f64, smooth: bool) -> f64 {
    if !smooth || va == vb {
        0.5
    } else {
        (threshold - va) / (vb - va)
    }
}

/// Threshold crossing point on one edge of the cell at `(x, y)`.
fn edge_point(
    edge: Edge,
    x: f64,
    y: f64,
    tl: f64,
    tr: f64,
    br: f64,
    bl: f64,
    threshold: f64,
    smooth: bool,
) -> Point {
    match edge {
        Top => Point::new(x + crossing(tl, tr, threshold, smooth), y),
        Right => Point::new(x + 1.0, y + crossing(tr, br, threshold, smooth)),
        Bottom => Point::new(x + crossing(bl, br, threshold, smooth), y + 1.0),
        Left => Point::new(x, y + crossing(tl, bl, threshold, smooth)),
    }
}

/// Classify every cell of the grid against `threshold` and emit the
/// resulting crossing segments. Cells touching a NaN corner are skipped.
pub fn march_cells(grid: &Grid, threshold: f64, smooth: bool) -> Vec<Segment> {
    let width = grid.width();
    let height = grid.height();
    if width < 2 || height < 2 {
        return vec![];
    }

    let mut segments = Vec::new();

    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let tl = grid.get(x, y);
            let tr = grid.get(x + 1, y);
            let br = grid.get(x + 1, y + 1);
            let bl = grid.get(x, y + 1);

            if tl.is_nan() || tr.is_nan() || br.is_nan() || bl.is_nan() {
                continue;
            }

            let mut code = 0usize;
            if tl >= threshold {
                code |= 8;
            }
            if tr >= threshold {
                code |= 4;
            }
            if br >= threshold {
                code |= 2;
            }
            if bl >= threshold {
                code |= 1;
            }

            let (fx, fy) = (x as f64, y as f64);
            for &(from, to) in CASE_TABLE[code] {
                segments.push(Segment {
                    from: edge_point(from, fx, fy, tl, tr, br, bl, threshold, smooth),
                    to: edge_point(to, fx, fy, tl, tr, br, bl, threshold, smooth),
                });
            }
        }
    }

    segments
}
