//! Errors produced while reading a trace.

use std::fmt;
use std::io;

use crate::reader::Component;

/// Errors that can occur while reading a trace file.
///
/// Line numbers are 1-based and count every line in the input, including blank ones.
#[derive(Debug)]
pub enum TraceError {
    /// The trace could not be opened or read.
    Io(io::Error),
    /// A non-blank line lacks the `_` between body and component, or the `=` before the value.
    MissingSeparator { line: usize, separator: char },
    /// The component is not one of `x`, `y` or `z`.
    UnknownComponent { line: usize, component: String },
    /// The value could not be converted to a floating point number.
    MalformedValue { line: usize, value: String },
    /// A `y` or `z` line for a body that has no point under construction yet.
    OrphanComponent {
        line: usize,
        body: String,
        component: Component,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(e) => write!(f, "I/O error: {e}"),
            TraceError::MissingSeparator { line, separator } => {
                write!(f, "line {line}: missing '{separator}' separator")
            }
            TraceError::UnknownComponent { line, component } => {
                write!(f, "line {line}: unknown component '{component}'")
            }
            TraceError::MalformedValue { line, value } => {
                write!(f, "line {line}: malformed numeric value '{value}'")
            }
            TraceError::OrphanComponent {
                line,
                body,
                component,
            } => write!(
                f,
                "line {line}: '{component}' component for body '{body}' before any 'x' component"
            ),
        }
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(err: io::Error) -> Self {
        TraceError::Io(err)
    }
}

impl TraceError {
    /// The line the error occurred on, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            TraceError::Io(_) => None,
            TraceError::MissingSeparator { line, .. }
            | TraceError::UnknownComponent { line, .. }
            | TraceError::MalformedValue { line, .. }
            | TraceError::OrphanComponent { line, .. } => Some(*line),
        }
    }
}

/// Result type alias for trace reading.
pub type TraceResult<T> = Result<T, TraceError>;
