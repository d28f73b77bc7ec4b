//! Single-line point parser.
//!
//! Accepted shape: `[-]digits SPACE [-]digits`, nothing else. No surrounding
//! whitespace, no alternate separators, ASCII digits only.

use crate::model::point::Point;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

static POINT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[0-9]+) (-?[0-9]+)$").expect("valid point line regex"));

/// Line does not match the accepted point shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError;

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line is not formatted as `x y`")
    }
}

impl Error for FormatError {}

/// Parses one line into an unvalidated point bound to `list_id`.
///
/// Digit runs that overflow `i32` saturate, so they surface later as range
/// violations instead of format errors.
pub fn parse_point_line(line: &str, list_id: &str) -> Result<Point, FormatError> {
    let captures = POINT_LINE_RE.captures(line).ok_or(FormatError)?;
    let x = parse_coordinate(&captures[1]);
    let y = parse_coordinate(&captures[2]);
    Ok(Point::new(x, y, list_id))
}

/// Formats a point the way `parse_point_line` reads it.
pub fn format_point_line(point: &Point) -> String {
    format!("{} {}", point.x(), point.y())
}

fn parse_coordinate(digits: &str) -> i32 {
    match digits.parse::<i32>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => i32::MIN,
            _ => i32::MAX,
        },
    }
}
