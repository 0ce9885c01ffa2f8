use std::str::FromStr;

use crate::error::{Error, Result};

/// Straight RGBA, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
	let unit = |v: u8| v as f64 / 255.0;
	Color {
	    r: unit(r),
	    g: unit(g),
	    b: unit(b),
	    a: unit(a),
	}
    }

    pub fn set_alpha(self, alpha: f64) -> Color {
	Color { a: alpha, ..self }
    }
}

impl FromStr for Color {
    type Err = Error;

    ///Accepts `#rrggbb` and `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self> {
	let err = || Error::Configuration(format!("invalid color: {}", s));
	let s = s.trim();
	let hex = s.strip_prefix('#').ok_or_else(err)?;

	if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
	    return Err(err());
	}

	let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
	let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };

	Ok(Color::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// How the revealed path is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
}

impl StrokeStyle {
    pub const DEFAULT_WIDTH: f64 = 8.0;

    pub fn default_color() -> Color {
	Color::rgba8(0x00, 0xff, 0x00, 0xff)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
	StrokeStyle {
	    width: StrokeStyle::DEFAULT_WIDTH,
	    color: StrokeStyle::default_color(),
	}
    }
}

pub fn check_width(width: f64) -> Result<f64> {
    if width.is_finite() && width > 0.0 {
	Ok(width)
    } else {
	Err(Error::OutOfRange {
	    name: "stroke width",
	    value: width,
	})
    }
}

impl FromStr for StrokeStyle {
    type Err = Error;

    /// Reads declarations like `stroke: #00ff00; stroke-width: 8`.
    /// Properties that do not concern the stroke are ignored.
    fn from_str(s: &str) -> Result<Self> {
	let decl_err = |decl: &str| Error::Configuration(format!("Invalid decl pair: {}", decl));
	let num_err = |val: &str| Error::Configuration(format!("Invalid number: {}", val));

	let mut result = StrokeStyle::default();
	let mut opacity = None;

	for decl in s.split(';').filter(|d| !d.trim().is_empty()) {
	    let mut decl_pair = decl.splitn(2, ':');
	    let prop_name = decl_pair.next().ok_or_else(|| decl_err(decl))?;
	    let val = decl_pair.next().ok_or_else(|| decl_err(decl))?.trim();

	    match prop_name.trim() {
		"stroke" => result.color = val.parse()?,
		"stroke-width" => {
		    let width = val.parse().map_err(|_| num_err(val))?;
		    result.width = check_width(width)?;
		}
		"stroke-opacity" => {
		    let a: f64 = val.parse().map_err(|_| num_err(val))?;
		    if !(0.0..=1.0).contains(&a) {
			return Err(num_err(val));
		    }
		    opacity = Some(a);
		}
		other => log::debug!("ignoring style property {}", other),
	    }
	}

	if let Some(a) = opacity {
	    result.color = result.color.set_alpha(a);
	}

	Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
	let style = StrokeStyle::default();
	assert_eq!(style.width, 8.0);
	assert_eq!(style.color, Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn hex_colors() {
	assert_eq!("#ff0000".parse(), Ok(Color::rgba8(0xff, 0, 0, 0xff)));
	assert_eq!("#0000ff80".parse(), Ok(Color::rgba8(0, 0, 0xff, 0x80)));
	assert!("ff0000".parse::<Color>().is_err());
	assert!("#ff00".parse::<Color>().is_err());
	assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn declarations() {
	let style: StrokeStyle = "fill: #ffffff; stroke:#ff0000 ; stroke-width: 2.5; stroke-opacity: 0.5;"
	    .parse()
	    .unwrap();

	assert_eq!(style.width, 2.5);
	assert_eq!(style.color, Color::rgba8(0xff, 0, 0, 0xff).set_alpha(0.5));
    }

    #[test]
    fn bad_declarations() {
	assert!("stroke".parse::<StrokeStyle>().is_err());
	assert!("stroke-width: wide".parse::<StrokeStyle>().is_err());
	assert!("stroke-width: 0".parse::<StrokeStyle>().is_err());
	assert!("stroke-opacity: 2".parse::<StrokeStyle>().is_err());
    }
}
