use thiserror::Error;

/// Errors raised by path parsing, measurement and the reveal view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The path string could not be read. `position` is the byte offset of
    /// the offending token in the input.
    #[error("bad path data at {position}: {reason} [{token}]")]
    Parse {
	position: usize,
	token: String,
	reason: &'static str,
    },
    #[error("path has no segments")]
    EmptyPath,
    /// A path must start with a move.
    #[error("path must start with M, found {0}")]
    InvalidPath(&'static str),
    #[error("at least one point is required")]
    EmptyInput,
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
    /// The host asked for a layout the view cannot honour.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
