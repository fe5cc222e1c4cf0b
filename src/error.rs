//! Setup-time error types.
//!
//! Only match setup can fail with an error: a malformed map file or a field
//! missing one of the four figure markers. Everything that goes wrong once
//! the match is running (illegal moves, agent timeouts, agent panics) is
//! folded into the round result instead of surfacing here.

use std::fmt;
use std::io;

use crate::game::Figure;

/// Fatal setup failure, surfaced to the caller before any round runs.
#[derive(Debug)]
pub enum SetupError {
    /// Reading the map file failed.
    Io(io::Error),
    /// The map file contained no rows.
    EmptyMap,
    /// Map dimensions outside the supported range.
    InvalidDimensions {
        /// Parsed width in cells.
        width: usize,
        /// Parsed height in cells.
        height: usize,
    },
    /// A map line did not match the width of the first line.
    RaggedLine {
        /// 1-based line number.
        line: usize,
        /// Width of the first line.
        expected: usize,
        /// Width of the offending line.
        got: usize,
    },
    /// A character outside the cell alphabet.
    UnknownCell {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// A figure has no live marker on the field.
    MissingFigure(Figure),
    /// A figure has more than one live marker on the field.
    DuplicateFigure(Figure),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Io(e) => write!(f, "map file I/O error: {e}"),
            SetupError::EmptyMap => write!(f, "map file is empty"),
            SetupError::InvalidDimensions { width, height } => {
                write!(f, "unsupported map dimensions {width}x{height}")
            }
            SetupError::RaggedLine {
                line,
                expected,
                got,
            } => write!(f, "map line {line} has width {got}, expected {expected}"),
            SetupError::UnknownCell { line, col, ch } => {
                write!(
                    f,
                    "unknown cell character {ch:?} at line {line}, column {col}"
                )
            }
            SetupError::MissingFigure(figure) => {
                write!(f, "map has no {figure} marker")
            }
            SetupError::DuplicateFigure(figure) => {
                write!(f, "map has more than one {figure} marker")
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SetupError {
    fn from(e: io::Error) -> Self {
        SetupError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_display_missing_figure() {
        let err = SetupError::MissingFigure(Figure::Sheep(Player::One));
        assert_eq!(format!("{err}"), "map has no sheep1 marker");
    }

    #[test]
    fn test_display_ragged_line() {
        let err = SetupError::RaggedLine {
            line: 3,
            expected: 19,
            got: 18,
        };
        let msg = format!("{err}");
        assert!(msg.contains("line 3"));
        assert!(msg.contains("19"));
    }
}
