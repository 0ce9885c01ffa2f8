use std::cell::Cell;
use std::fmt;

use svg::node::element::path::Data;
use svg::node::Value;

use crate::error::{Error, Result};
use crate::measure;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
	Point { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
	(other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
	Point { x, y }
    }
}

/// One drawing instruction. The start of every segment is the end point of
/// the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

impl Segment {
    pub fn name(&self) -> &'static str {
	match self {
	    Segment::MoveTo(_) => "M",
	    Segment::LineTo(_) => "L",
	    Segment::CubicTo(..) => "C",
	    Segment::Close => "z",
	}
    }

    fn map_points<F: Fn(Point) -> Point>(self, f: F) -> Segment {
	match self {
	    Segment::MoveTo(p) => Segment::MoveTo(f(p)),
	    Segment::LineTo(p) => Segment::LineTo(f(p)),
	    Segment::CubicTo(c1, c2, p) => Segment::CubicTo(f(c1), f(c2), f(p)),
	    Segment::Close => Segment::Close,
	}
    }
}

///Affine matrix in cairo's layout:
///x' = xx * x + xy * y + x0, y' = yx * x + yy * y + y0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    pub fn scale(sx: f64, sy: f64) -> Self {
	Transform {
	    xx: sx,
	    yx: 0.0,
	    xy: 0.0,
	    yy: sy,
	    x0: 0.0,
	    y0: 0.0,
	}
    }

    pub fn apply(&self, p: Point) -> Point {
	Point {
	    x: self.xx * p.x + self.xy * p.y + self.x0,
	    y: self.yx * p.x + self.yy * p.y + self.y0,
	}
    }
}

/// An ordered run of segments with a lazily measured length.
///
/// The length is cached on first read and dropped whenever the coordinates
/// change, so readers never observe a length for different geometry.
#[derive(Debug, Clone, Default)]
pub struct PathModel {
    segments: Vec<Segment>,
    length: Cell<Option<f64>>,
}

impl PathModel {
    pub fn new() -> Self {
	PathModel::default()
    }

    /// A path consisting of a single move to the origin. Its length is zero.
    pub fn origin() -> Self {
	PathModel::from_segments(vec![Segment::MoveTo(Point::ORIGIN)])
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
	PathModel {
	    segments,
	    length: Cell::new(None),
	}
    }

    /// Moves to the first point and draws straight lines through the rest.
    pub fn from_points<P: Into<Point> + Copy>(points: &[P]) -> Result<Self> {
	let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;

	let mut segments = Vec::with_capacity(points.len());
	segments.push(Segment::MoveTo((*first).into()));
	segments.extend(rest.iter().map(|p| Segment::LineTo((*p).into())));

	Ok(PathModel::from_segments(segments))
    }

    pub fn segments(&self) -> &[Segment] {
	&self.segments
    }

    pub fn is_empty(&self) -> bool {
	self.segments.is_empty()
    }

    /// Total arc length, measured on first use after a change.
    pub fn length(&self) -> Result<f64> {
	if let Some(len) = self.length.get() {
	    return Ok(len);
	}

	let len = measure::measure(self)?;
	self.length.set(Some(len));
	Ok(len)
    }

    pub fn is_measured(&self) -> bool {
	self.length.get().is_some()
    }

    pub fn transform(&mut self, matrix: &Transform) {
	for seg in self.segments.iter_mut() {
	    *seg = seg.map_points(|p| matrix.apply(p));
	}
	self.length.set(None);
    }

    /// Multiplies every x by `sx` and every y by `sy`, control points included.
    ///
    /// Non-finite factors are refused and leave the path as it was.
    pub fn scale(&mut self, sx: f64, sy: f64) -> Result<()> {
	for &(name, value) in &[("scale x", sx), ("scale y", sy)] {
	    if !value.is_finite() {
		return Err(Error::OutOfRange { name, value });
	    }
	}
	if sx == 0.0 || sy == 0.0 {
	    log::warn!("scaling path by ({}, {}) collapses it", sx, sy);
	}
	self.transform(&Transform::scale(sx, sy));
	log::debug!("scaled path by ({}, {})", sx, sy);
	Ok(())
    }

    /// Exports to svg path data. svg stores parameters as `f32`, so
    /// coordinates lose precision beyond that.
    pub fn to_svg_data(&self) -> Data {
	let xy = |p: Point| vec![p.x as f32, p.y as f32];

	self.segments.iter().fold(Data::new(), |data, seg| match *seg {
	    Segment::MoveTo(p) => data.move_to(xy(p)),
	    Segment::LineTo(p) => data.line_to(xy(p)),
	    Segment::CubicTo(c1, c2, p) => {
		let mut params = xy(c1);
		params.extend(xy(c2));
		params.extend(xy(p));
		data.cubic_curve_to(params)
	    }
	    Segment::Close => data.close(),
	})
    }
}

impl PartialEq for PathModel {
    fn eq(&self, other: &Self) -> bool {
	self.segments == other.segments
    }
}

/// Writes the path language form, e.g. `M0,0 L3,0 z`. Coordinates go through
/// [`PathModel::to_svg_data`] and are therefore rounded to `f32`.
impl fmt::Display for PathModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{}", Value::from(self.to_svg_data()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_from_points() {
	let path = PathModel::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]).unwrap();

	assert_eq!(
	    path.segments(),
	    &[
		Segment::MoveTo(Point::new(0.0, 0.0)),
		Segment::LineTo(Point::new(10.0, 0.0)),
		Segment::LineTo(Point::new(10.0, 5.0)),
	    ]
	);
    }

    #[test]
    fn no_points_is_an_error() {
	let points: [(f64, f64); 0] = [];
	assert_eq!(PathModel::from_points(&points), Err(Error::EmptyInput));
    }

    #[test]
    fn scale_touches_control_points() {
	let mut path = PathModel::from_segments(vec![
	    Segment::MoveTo(Point::new(1.0, 1.0)),
	    Segment::CubicTo(Point::new(2.0, 3.0), Point::new(4.0, 5.0), Point::new(6.0, 7.0)),
	    Segment::Close,
	]);
	path.scale(2.0, -1.0).unwrap();

	assert_eq!(
	    path.segments(),
	    &[
		Segment::MoveTo(Point::new(2.0, -1.0)),
		Segment::CubicTo(Point::new(4.0, -3.0), Point::new(8.0, -5.0), Point::new(12.0, -7.0)),
		Segment::Close,
	    ]
	);
    }

    #[test]
    fn scale_drops_cached_length() {
	let mut path = PathModel::from_points(&[(0.0, 0.0), (10.0, 0.0)]).unwrap();
	assert_eq!(path.length(), Ok(10.0));
	assert!(path.is_measured());

	path.scale(2.0, 1.0).unwrap();
	assert!(!path.is_measured());
	assert_eq!(path.length(), Ok(20.0));
    }

    #[test]
    fn non_finite_scale_is_refused() {
	let mut path = PathModel::from_points(&[(0.0, 0.0), (10.0, 0.0)]).unwrap();
	assert_eq!(path.length(), Ok(10.0));

	assert!(matches!(path.scale(f64::NAN, 1.0), Err(Error::OutOfRange { name: "scale x", .. })));
	assert!(matches!(path.scale(1.0, f64::INFINITY), Err(Error::OutOfRange { name: "scale y", .. })));

	assert!(path.is_measured());
	assert_eq!(path.length(), Ok(10.0));
	assert_eq!(path.segments()[1], Segment::LineTo(Point::new(10.0, 0.0)));
    }

    #[test]
    fn display_reads_back() {
	let path = PathModel::from_segments(vec![
	    Segment::MoveTo(Point::new(0.0, 0.0)),
	    Segment::LineTo(Point::new(3.0, 0.0)),
	    Segment::CubicTo(Point::new(3.0, 2.5), Point::new(1.5, 4.0), Point::new(0.0, 4.0)),
	    Segment::Close,
	]);

	let text = path.to_string();
	assert!(text.starts_with("M0,0"), "{}", text);
	assert_eq!(crate::parse::parse(&text).unwrap(), path);
    }
}
