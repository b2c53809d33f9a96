use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::TraceError;

pub const BODY_SEPARATOR: char = '_';
pub const VALUE_SEPARATOR: char = '=';

/// One of the three coordinates a trace line can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    Z,
}

impl Component {
    /// Index of this component in a [`Point3D`](crate::Point3D).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Component::X),
            "y" => Ok(Component::Y),
            "z" => Ok(Component::Z),
            _ => Err(()),
        }
    }
}

/// A single `<body>_<component>=<value>` assignment.
///
/// The body name borrows from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'l> {
    pub body: &'l str,
    pub component: Component,
    pub value: f64,
}

/// Parse one line of a trace.
///
/// Returns `Ok(None)` for lines that are blank once the terminator and surrounding whitespace
/// are stripped. The body is everything up to the first `_`, the component is everything between
/// that and the first `=`, and the value is the rest.
///
/// # Errors
///
/// Fails with the offending `line` number if a separator is missing, the component is not one of
/// `x`, `y`, `z`, or the value is not a floating point number.
pub fn parse_record(text: &str, line: usize) -> Result<Option<Record<'_>>, TraceError> {
    // Strip only the terminator here. Body names may start with a space.
    let text = text.trim_end_matches(['\n', '\r']);
    if text.trim().is_empty() {
        return Ok(None);
    }

    let (body, rest) = text
        .split_once(BODY_SEPARATOR)
        .ok_or(TraceError::MissingSeparator {
            line,
            separator: BODY_SEPARATOR,
        })?;
    let (component, value) = rest
        .split_once(VALUE_SEPARATOR)
        .ok_or(TraceError::MissingSeparator {
            line,
            separator: VALUE_SEPARATOR,
        })?;

    let component = component
        .parse()
        .map_err(|()| TraceError::UnknownComponent {
            line,
            component: component.to_string(),
        })?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| TraceError::MalformedValue {
            line,
            value: value.trim().to_string(),
        })?;

    Ok(Some(Record {
        body,
        component,
        value,
    }))
}

/// Read the next line into `buf`, replacing its contents.
///
/// Returns the number of bytes read, which is zero at the end of the stream.
#[inline]
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<usize> {
    buf.clear();
    reader.read_line(buf)
}
