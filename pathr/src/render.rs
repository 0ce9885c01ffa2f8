use cairo;

use crate::error::Result;
use crate::reveal::DashSpec;
use crate::style::StrokeStyle;
use crate::types::{Point, Segment};
use crate::view::StrokeSurface;

fn trace_segments(cr: &cairo::Context, segments: &[Segment]) {
    cr.new_path();

    for seg in segments {
	match *seg {
	    Segment::MoveTo(p) => cr.move_to(p.x, p.y),
	    Segment::LineTo(p) => cr.line_to(p.x, p.y),
	    Segment::CubicTo(c1, c2, p) => cr.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
	    Segment::Close => cr.close_path(),
	}
    }
}

impl StrokeSurface for cairo::Context {
    fn stroke_path(
	&mut self,
	segments: &[Segment],
	dash: &DashSpec,
	style: &StrokeStyle,
	origin: Point,
    ) -> Result<()> {
	// cairo rejects a dash pattern whose entries are all zero
	if dash.on_length <= 0.0 {
	    log::trace!("nothing to reveal");
	    return Ok(());
	}

	let c = style.color;
	self.save();
	self.translate(origin.x, origin.y);

	trace_segments(self, segments);
	self.set_source_rgba(c.r, c.g, c.b, c.a);
	self.set_line_width(style.width);
	self.set_dash(&dash.dashes(), dash.phase);
	self.stroke();

	self.restore();
	Ok(())
    }
}
