use crate::error::{Error, Result};

/// Dash pattern a renderer strokes the path with: `on_length` drawn,
/// `off_length` skipped, starting `phase` units into the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashSpec {
    pub on_length: f64,
    pub off_length: f64,
    pub phase: f64,
}

impl DashSpec {
    /// Length of the path prefix this pattern leaves visible on a path of
    /// `on_length`.
    pub fn visible_length(&self) -> f64 {
	(self.on_length - self.phase).max(0.0)
    }

    pub fn dashes(&self) -> [f64; 2] {
	[self.on_length, self.off_length]
    }
}

pub fn check_progress(progress: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&progress) {
	Ok(progress)
    } else {
	Err(Error::OutOfRange {
	    name: "progress",
	    value: progress,
	})
    }
}

/// Dash parameters revealing the first `total_length * progress` units of a
/// path.
///
/// Both dashes are as long as the path, so at most one on/off cycle spans
/// it. The phase slides the "on" dash in from the end: `total_length` at
/// progress 0, zero at progress 1.
pub fn compute_dash(total_length: f64, progress: f64) -> Result<DashSpec> {
    let progress = check_progress(progress)?;

    if !total_length.is_finite() || total_length < 0.0 {
	return Err(Error::OutOfRange {
	    name: "length",
	    value: total_length,
	});
    }
    if total_length == 0.0 {
	log::debug!("zero-length path, nothing to reveal");
	return Ok(DashSpec::default());
    }

    Ok(DashSpec {
	on_length: total_length,
	off_length: total_length,
	phase: total_length - total_length * progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends() {
	for &len in &[0.5, 12.0, 1234.5] {
	    assert_eq!(compute_dash(len, 0.0).unwrap().phase, len);
	    assert_eq!(compute_dash(len, 1.0).unwrap().phase, 0.0);
	}
    }

    #[test]
    fn half_way() {
	let dash = compute_dash(20.0, 0.5).unwrap();

	assert_eq!(
	    dash,
	    DashSpec {
		on_length: 20.0,
		off_length: 20.0,
		phase: 10.0
	    }
	);
	assert_eq!(dash.visible_length(), 10.0);
    }

    #[test]
    fn visible_length_grows() {
	let len = 37.25;
	let mut last = -1.0;

	for i in 0..=100 {
	    let visible = compute_dash(len, i as f64 / 100.0).unwrap().visible_length();
	    assert!(visible >= last);
	    last = visible;
	}
	assert_eq!(last, len);
    }

    #[test]
    fn progress_bounds() {
	assert!(compute_dash(10.0, 0.0).is_ok());
	assert!(compute_dash(10.0, 1.0).is_ok());
	assert_eq!(
	    compute_dash(10.0, -0.1),
	    Err(Error::OutOfRange { name: "progress", value: -0.1 })
	);
	assert!(compute_dash(10.0, 1.1).is_err());
	assert!(compute_dash(10.0, f64::NAN).is_err());
    }

    #[test]
    fn zero_length_reveals_nothing() {
	let dash = compute_dash(0.0, 0.7).unwrap();
	assert_eq!(dash.visible_length(), 0.0);
    }

    #[test]
    fn negative_length() {
	assert!(compute_dash(-1.0, 0.5).is_err());
    }
}
