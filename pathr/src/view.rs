//! The reveal view: owns the path and its stroke state, and hands the
//! host a dash pattern to stroke with on every redraw.

use crate::error::{Error, Result};
use crate::reveal::{check_progress, compute_dash, DashSpec};
use crate::style::{check_width, Color, StrokeStyle};
use crate::types::{PathModel, Point, Segment};

/// Host drawing primitive able to stroke a path with a two-entry dash
/// pattern.
pub trait StrokeSurface {
    fn stroke_path(
	&mut self,
	segments: &[Segment],
	dash: &DashSpec,
	style: &StrokeStyle,
	origin: Point,
    ) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent fixed the size.
    Exactly,
    /// Size is up to the content, bounded by `size`.
    AtMost,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub fn exactly(size: u32) -> Self {
	MeasureSpec { mode: MeasureMode::Exactly, size }
    }

    pub fn at_most(size: u32) -> Self {
	MeasureSpec { mode: MeasureMode::AtMost, size }
    }

    pub fn unspecified(size: u32) -> Self {
	MeasureSpec { mode: MeasureMode::Unspecified, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub progress: f64,
    pub style: StrokeStyle,
}

impl Default for RevealState {
    fn default() -> Self {
	RevealState {
	    progress: 0.0,
	    style: StrokeStyle::default(),
	}
    }
}

pub struct PathRevealView {
    path: PathModel,
    state: RevealState,
    padding: Point,
    invalidate: Option<Box<dyn FnMut()>>,
}

impl PathRevealView {
    pub fn new() -> Self {
	PathRevealView::with_style(StrokeStyle::default())
    }

    pub fn with_style(style: StrokeStyle) -> Self {
	PathRevealView {
	    path: PathModel::origin(),
	    state: RevealState {
		style,
		..RevealState::default()
	    },
	    padding: Point::ORIGIN,
	    invalidate: None,
	}
    }

    /// Registers the callback run whenever the view needs repainting.
    pub fn on_invalidate<F>(&mut self, f: F)
    where
	F: FnMut() + 'static,
    {
	self.invalidate = Some(Box::new(f));
    }

    fn invalidate(&mut self) {
	if let Some(f) = self.invalidate.as_mut() {
	    (f)();
	}
    }

    pub fn path(&self) -> &PathModel {
	&self.path
    }

    /// Replaces the path. The new path is measured first; if that fails the
    /// current path is kept.
    pub fn set_path(&mut self, path: PathModel) -> Result<()> {
	let len = path.length()?;
	log::debug!("new path: {} segments, length {}", path.segments().len(), len);

	self.path = path;
	self.invalidate();
	Ok(())
    }

    /// Builds a polyline through `points` and uses it as the path.
    pub fn set_points<P: Into<Point> + Copy>(&mut self, points: &[P]) -> Result<()> {
	self.set_path(PathModel::from_points(points)?)
    }

    /// Scales the path and re-measures it. On failure the current path and
    /// its length are kept.
    pub fn scale_path_by(&mut self, sx: f64, sy: f64) -> Result<()> {
	let mut scaled = self.path.clone();
	scaled.scale(sx, sy)?;
	scaled.length()?;

	self.path = scaled;
	self.invalidate();
	Ok(())
    }

    pub fn path_length(&self) -> Result<f64> {
	self.path.length()
    }

    pub fn progress(&self) -> f64 {
	self.state.progress
    }

    /// Sets how much of the path is stroked, from 0 to 1 inclusive.
    pub fn set_progress(&mut self, progress: f64) -> Result<()> {
	self.state.progress = check_progress(progress)?;
	self.invalidate();
	Ok(())
    }

    pub fn stroke_width(&self) -> f64 {
	self.state.style.width
    }

    pub fn set_stroke_width(&mut self, width: f64) -> Result<()> {
	self.state.style.width = check_width(width)?;
	self.invalidate();
	Ok(())
    }

    pub fn stroke_color(&self) -> Color {
	self.state.style.color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
	self.state.style.color = color;
	self.invalidate();
    }

    pub fn set_style(&mut self, style: StrokeStyle) -> Result<()> {
	check_width(style.width)?;
	self.state.style = style;
	self.invalidate();
	Ok(())
    }

    pub fn padding(&self) -> Point {
	self.padding
    }

    pub fn set_padding(&mut self, left: f64, top: f64) {
	self.padding = Point::new(left, top);
	self.invalidate();
    }

    pub fn dash(&self) -> Result<DashSpec> {
	compute_dash(self.path.length()?, self.state.progress)
    }

    /// Picks the view size from the parent's constraints.
    ///
    /// A path has no natural size, so a content-sized axis is refused.
    pub fn on_measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<(u32, u32)> {
	for (axis, spec) in &[("width", width), ("height", height)] {
	    if spec.mode == MeasureMode::AtMost {
		return Err(Error::Configuration(format!(
		    "path reveal view cannot size its {} to content",
		    axis
		)));
	    }
	}

	Ok((width.size, height.size))
    }

    pub fn draw<S: StrokeSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
	let dash = self.dash()?;
	log::trace!(
	    "draw progress {} -> dash {:?} phase {}",
	    self.state.progress,
	    dash.dashes(),
	    dash.phase
	);

	surface.stroke_path(self.path.segments(), &dash, &self.state.style, self.padding)
    }
}

impl Default for PathRevealView {
    fn default() -> Self {
	PathRevealView::new()
    }
}
