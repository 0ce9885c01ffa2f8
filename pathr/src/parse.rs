//! Reader for the restricted path language: absolute `M`, `L`, `C` and `z`.
//!
//! Input is tokenized in one pass into command letters and numbers, then the
//! commands are interpreted one at a time, each taking a fixed number of
//! operands. Whitespace and commas only separate tokens.

use nom::{
    branch::alt,
    character::complete::satisfy,
    combinator::{map_res, verify},
    number::complete::recognize_float,
    IResult, Parser,
};

use crate::error::{Error, Result};
use crate::types::{PathModel, Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Value {
    Command(char),
    Number(f64),
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    value: Value,
    text: &'a str,
    position: usize,
}

impl<'a> Token<'a> {
    fn error(&self, reason: &'static str) -> Error {
	Error::Parse {
	    position: self.position,
	    token: String::from(self.text),
	    reason,
	}
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn number(input: &str) -> IResult<&str, f64> {
    let value = map_res(recognize_float, |s: &str| s.parse::<f64>());
    verify(value, |n: &f64| n.is_finite())(input)
}

/// Byte length of the number-like run at the start of `input`, if it starts
/// like a number at all.
fn numeric_run(input: &str) -> Option<usize> {
    if !input.starts_with(|c: char| c.is_ascii_digit() || "+-.".contains(c)) {
	return None;
    }
    let numeric = |c: char| c.is_ascii_digit() || "+-.eE".contains(c);
    Some(input.find(|c: char| !numeric(c)).unwrap_or_else(|| input.len()))
}

fn command(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_alphabetic())(input)
}

fn tokenize(data: &str) -> Result<Vec<Token<'_>>> {
    let mut value = alt((number.map(Value::Number), command.map(Value::Command)));
    let mut tokens = Vec::new();
    let mut rest = data;

    loop {
	rest = rest.trim_start_matches(is_separator);
	if rest.is_empty() {
	    return Ok(tokens);
	}

	let position = data.len() - rest.len();
	match value.parse(rest) {
	    Ok((next, v)) => {
		tokens.push(Token {
		    value: v,
		    text: &rest[..rest.len() - next.len()],
		    position,
		});
		rest = next;
	    }
	    Err(_) => {
		let (len, reason) = match numeric_run(rest) {
		    Some(len) => (len, "expected number"),
		    None => (rest.chars().next().map_or(0, char::len_utf8), "unexpected character"),
		};
		return Err(Error::Parse {
		    position,
		    token: String::from(&rest[..len]),
		    reason,
		});
	    }
	}
    }
}

type Tokens<'t, 'a> = std::slice::Iter<'t, Token<'a>>;

fn operand(command: &Token<'_>, tokens: &mut Tokens<'_, '_>) -> Result<f64> {
    match tokens.next() {
	Some(Token { value: Value::Number(n), .. }) => Ok(*n),
	Some(other) => Err(other.error("expected number")),
	None => Err(command.error("missing operand")),
    }
}

fn point(command: &Token<'_>, tokens: &mut Tokens<'_, '_>) -> Result<Point> {
    let x = operand(command, tokens)?;
    let y = operand(command, tokens)?;
    Ok(Point { x, y })
}

/// Parses path data such as `"M 0,0 L 10,0 C 10,10 0,10 0,0 z"`.
///
/// Only uppercase `M`, `L`, `C` and lowercase `z` are understood. Any other
/// letter, a missing operand or a malformed number fails the whole parse.
/// The result is not checked for a leading `M`; measuring does that.
pub fn parse(data: &str) -> Result<PathModel> {
    let tokens = tokenize(data)?;
    let mut iter = tokens.iter();
    let mut segments = Vec::new();

    while let Some(token) = iter.next() {
	let letter = match token.value {
	    Value::Command(c) => c,
	    Value::Number(_) => return Err(token.error("expected command")),
	};

	let segment = match letter {
	    'M' => Segment::MoveTo(point(token, &mut iter)?),
	    'L' => Segment::LineTo(point(token, &mut iter)?),
	    'C' => {
		let c1 = point(token, &mut iter)?;
		let c2 = point(token, &mut iter)?;
		let to = point(token, &mut iter)?;
		Segment::CubicTo(c1, c2, to)
	    }
	    'z' => Segment::Close,
	    _ => return Err(token.error("unknown command")),
	};
	segments.push(segment);
    }

    log::debug!("parsed {} segments from {} tokens", segments.len(), tokens.len());
    Ok(PathModel::from_segments(segments))
}

impl std::str::FromStr for PathModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
	parse(s)
    }
}
