//! Progressive stroke reveal for simple vector paths.
//!
//! A path is read from a small path language (absolute `M`, `L`, `C` and
//! `z`), measured, and stroked with a dash pattern whose phase follows an
//! animation progress between 0 and 1:
//!
//! ```
//! use pathr::{compute_dash, parse};
//!
//! let path = parse("M 0,0 L 3,0 L 3,4 z").unwrap();
//! let len = path.length().unwrap();
//! assert!((len - 12.0).abs() < 1e-9);
//!
//! let dash = compute_dash(len, 0.5).unwrap();
//! assert!((dash.visible_length() - 6.0).abs() < 1e-9);
//! ```

pub mod animation;
mod error;
pub mod measure;
pub mod parse;
#[cfg(feature = "cairo")]
mod render;
pub mod reveal;
pub mod style;
mod types;
pub mod view;

pub use animation::{PropertyTarget, ProgressAnimation};
pub use error::{Error, Result};
pub use measure::measure;
pub use parse::parse;
pub use reveal::{compute_dash, DashSpec};
pub use style::{Color, StrokeStyle};
pub use types::{PathModel, Point, Segment, Transform};
pub use view::{MeasureMode, MeasureSpec, PathRevealView, RevealState, StrokeSurface};
