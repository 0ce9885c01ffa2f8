//! Drives the view's progress over wall-clock time.

use std::time::{Duration, Instant};

use timing::{linear, TimingFn};

use crate::error::{Error, Result};
use crate::view::PathRevealView;

/// Something a generic animator can address by property name.
pub trait PropertyTarget {
    fn set_float_property(&mut self, name: &str, value: f64) -> Result<()>;
}

impl PropertyTarget for PathRevealView {
    fn set_float_property(&mut self, name: &str, value: f64) -> Result<()> {
	match name {
	    "percentage" | "progress" => self.set_progress(value),
	    other => Err(Error::UnknownProperty(String::from(other))),
	}
    }
}

///Ramps a value from 0 to 1 over `duration`, shaped by `timing_fn`
pub struct ProgressAnimation<'a> {
    duration: Duration,
    pub timing_fn: TimingFn<'a>,
    start: Option<Instant>,
}

impl<'a> ProgressAnimation<'a> {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    pub fn new(duration: Duration) -> Self {
	ProgressAnimation {
	    duration,
	    timing_fn: TimingFn::from(linear),
	    start: None,
	}
    }

    pub fn play(&mut self) {
	self.start = Some(Instant::now());
    }

    pub fn is_playing(&self) -> bool {
	self.start.is_some() && !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
	match self.start {
	    Some(t) => t.elapsed() >= self.duration,
	    None => false,
	}
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
	self.timing_fn.call(elapsed.min(self.duration), self.duration)
    }

    pub fn current_value(&self) -> f64 {
	match self.start {
	    Some(t) => self.value_at(t.elapsed()),
	    None => 0.0,
	}
    }

    /// Pushes the current value into `property` of `target`.
    pub fn apply<T: PropertyTarget + ?Sized>(&self, target: &mut T, property: &str) -> Result<()> {
	target.set_float_property(property, self.current_value())
    }
}

impl Default for ProgressAnimation<'_> {
    fn default() -> Self {
	ProgressAnimation::new(Self::DEFAULT_DURATION)
    }
}

pub mod timing {
    use std::time::Duration;

    ///The first duration signifies the duration since the start of the animation,
    ///the second, one the duration of the whole animation
    pub struct TimingFn<'a> (
	Box<dyn Fn(Duration, Duration) -> f64 + 'a>
    );

    impl <'a> TimingFn<'a> {
	pub fn call(&self, time: Duration, end_point: Duration) -> f64 {
	    (self.0)(time, end_point)
	}
    }

    impl <'a, F> From<F> for TimingFn<'a>
    where F: Fn(f64) -> f64 + 'a
    {
	fn from(f: F) -> Self {
	    TimingFn(Box::new(move |x, end_point| (f)(duration_to_ratio(x, end_point))))
	}
    }

    fn duration_to_ratio(x: Duration, end_point: Duration) -> f64 {
	let x = x.as_secs_f64();
	let end_point = end_point.as_secs_f64();

	if end_point <= 0.0 {
	    return 1.0;
	}

	x / end_point
    }

    pub fn linear(x: f64) -> f64 { x }

    pub fn ease_in(x: f64) -> f64 { x * x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ramp() {
	let anim = ProgressAnimation::new(Duration::from_secs(2));

	assert_eq!(anim.value_at(Duration::from_secs(0)), 0.0);
	assert_eq!(anim.value_at(Duration::from_millis(500)), 0.25);
	assert_eq!(anim.value_at(Duration::from_secs(2)), 1.0);
	assert_eq!(anim.value_at(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn custom_timing() {
	let mut anim = ProgressAnimation::new(Duration::from_secs(1));
	anim.timing_fn = TimingFn::from(timing::ease_in);

	assert_eq!(anim.value_at(Duration::from_millis(500)), 0.25);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
	let anim = ProgressAnimation::new(Duration::from_secs(0));
	assert_eq!(anim.value_at(Duration::from_secs(0)), 1.0);
    }

    #[test]
    fn not_started() {
	let anim = ProgressAnimation::default();
	assert!(!anim.is_playing());
	assert_eq!(anim.current_value(), 0.0);
    }

    #[test]
    fn property_bridge() {
	let mut view = PathRevealView::new();

	view.set_float_property("percentage", 0.75).unwrap();
	assert_eq!(view.progress(), 0.75);

	assert_eq!(
	    view.set_float_property("percentage", 1.5),
	    Err(Error::OutOfRange { name: "progress", value: 1.5 })
	);
	assert_eq!(
	    view.set_float_property("alpha", 0.5),
	    Err(Error::UnknownProperty(String::from("alpha")))
	);
    }

    #[test]
    fn overshooting_timing_is_rejected() {
	let mut view = PathRevealView::new();
	let mut anim = ProgressAnimation::default();
	anim.timing_fn = TimingFn::from(|x: f64| x * 2.0 - 0.5);
	anim.play();

	assert!(anim.apply(&mut view, "percentage").is_err());
    }
}
