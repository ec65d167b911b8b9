//! Line aggregation: dedup, overlap removal, deterministic ordering.
//!
//! The four edge paths of a panel meet at its corners and - when
//! corner boxes are present - retrace parts of each other. Before a
//! face is committed, its lines are reduced so the cutter never
//! traces the same material twice.

use std::collections::BTreeMap;

use boxkit_core::error::{Error, Result};
use boxkit_core::geometry::{Line, Point, Rect, EPSILON};

use crate::layout::Face;

/// Reduce a set of segments to a sorted, deduplicated, overlap-free
/// set. Applying `reduce` twice yields the same result as once.
pub fn reduce(lines: Vec<Line>) -> Vec<Line> {
    let mut normalized: Vec<Line> = lines
        .into_iter()
        .filter(|line| line.length() > EPSILON)
        .map(|line| line.normalized())
        .collect();

    normalized = dedup(normalized);
    normalized = deoverlap(normalized);
    sort_lines(&mut normalized);
    normalized
}

/// Drop exact duplicates (endpoint order already normalized away).
fn dedup(lines: Vec<Line>) -> Vec<Line> {
    let mut kept: Vec<Line> = Vec::with_capacity(lines.len());
    for line in lines {
        if !kept.iter().any(|existing| existing.coincides_with(&line)) {
            kept.push(line);
        }
    }
    kept
}

/// Merge collinear segments that overlap or touch into their union
/// span. All cut lines in a box layout are axis-aligned; anything
/// else passes through untouched.
fn deoverlap(lines: Vec<Line>) -> Vec<Line> {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    let mut other = Vec::new();

    for line in lines {
        if line.is_horizontal() {
            horizontal.push(line);
        } else if line.is_vertical() {
            vertical.push(line);
        } else {
            other.push(line);
        }
    }

    let mut merged = merge_spans(horizontal, |p| (p.y, p.x), |fixed, at| Point::new(at, fixed));
    merged.extend(merge_spans(
        vertical,
        |p| (p.x, p.y),
        |fixed, at| Point::new(fixed, at),
    ));
    merged.extend(other);
    merged
}

/// Merge one orientation group. `key` projects a point to (fixed
/// coordinate, running coordinate); `build` reconstructs a point.
fn merge_spans(
    mut lines: Vec<Line>,
    key: impl Fn(&Point) -> (f64, f64),
    build: impl Fn(f64, f64) -> Point,
) -> Vec<Line> {
    lines.sort_by(|a, b| {
        let (fa, ra) = key(&a.p1);
        let (fb, rb) = key(&b.p1);
        fa.total_cmp(&fb).then(ra.total_cmp(&rb))
    });

    let mut merged: Vec<(f64, f64, f64)> = Vec::with_capacity(lines.len());
    for line in &lines {
        let (fixed, start) = key(&line.p1);
        let (_, end) = key(&line.p2);
        match merged.last_mut() {
            Some((f, _, e)) if (*f - fixed).abs() < EPSILON && start <= *e + EPSILON => {
                *e = e.max(end);
            }
            _ => merged.push((fixed, start, end)),
        }
    }

    merged
        .into_iter()
        .map(|(fixed, start, end)| Line::new(build(fixed, start), build(fixed, end)))
        .collect()
}

/// Deterministic total order over normalized endpoints.
fn sort_lines(lines: &mut [Line]) {
    lines.sort_by(|a, b| {
        a.p1.x
            .total_cmp(&b.p1.x)
            .then(a.p1.y.total_cmp(&b.p1.y))
            .then(a.p2.x.total_cmp(&b.p2.x))
            .then(a.p2.y.total_cmp(&b.p2.y))
    });
}

/// Minimal axis-aligned bounding rectangle over every committed face
/// line. The `top` face must already hold lines; a missing or empty
/// top face means the notches were never generated.
pub fn enclosure(faces: &BTreeMap<Face, Vec<Line>>) -> Result<Rect> {
    let top = faces.get(&Face::Top);
    if top.map_or(true, |lines| lines.is_empty()) {
        return Err(Error::NotGenerated);
    }

    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for lines in faces.values() {
        for line in lines {
            for p in [&line.normalized().p1, &line.normalized().p2] {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
        }
    }
    Ok(Rect::new(min, max))
}
