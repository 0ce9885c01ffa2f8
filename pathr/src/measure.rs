//! Arc length of a path.
//!
//! Lines and closes are measured exactly. A cubic is flattened into
//! [`CUBIC_SUBDIVISIONS`] chords at evenly spaced parameter values and the
//! chord lengths are summed, so the same path always measures the same.

use crate::error::{Error, Result};
use crate::types::{PathModel, Point, Segment};

/// Number of chords each cubic is split into.
pub const CUBIC_SUBDIVISIONS: usize = 64;

fn cubic_point(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;

    Point {
	x: a * p0.x + b * c1.x + c * c2.x + d * p3.x,
	y: a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    }
}

/// Chord-length approximation of a cubic Bézier.
pub fn cubic_length(p0: Point, c1: Point, c2: Point, p3: Point) -> f64 {
    let mut prev = p0;
    let mut len = 0.0;

    for i in 1..=CUBIC_SUBDIVISIONS {
	let t = i as f64 / CUBIC_SUBDIVISIONS as f64;
	let p = cubic_point(p0, c1, c2, p3, t);
	len += prev.distance(p);
	prev = p;
    }

    len
}

/// Sums the length of every segment in order.
///
/// Fails with [`Error::EmptyPath`] for a path without segments,
/// [`Error::InvalidPath`] when the first segment is not a move and
/// [`Error::OutOfRange`] when the coordinates overflow to a non-finite length.
pub fn measure(model: &PathModel) -> Result<f64> {
    let segments = model.segments();
    let start = match segments.first() {
	None => return Err(Error::EmptyPath),
	Some(Segment::MoveTo(p)) => *p,
	Some(other) => return Err(Error::InvalidPath(other.name())),
    };

    let mut current = start;
    let mut subpath_start = start;
    let mut total = 0.0;

    for seg in segments {
	match *seg {
	    Segment::MoveTo(p) => {
		current = p;
		subpath_start = p;
	    }
	    Segment::LineTo(p) => {
		total += current.distance(p);
		current = p;
	    }
	    Segment::CubicTo(c1, c2, p) => {
		total += cubic_length(current, c1, c2, p);
		current = p;
	    }
	    Segment::Close => {
		total += current.distance(subpath_start);
		current = subpath_start;
	    }
	}
    }

    if !total.is_finite() {
	return Err(Error::OutOfRange {
	    name: "length",
	    value: total,
	});
    }

    log::debug!("measured {} segments: length {}", segments.len(), total);
    Ok(total)
}
