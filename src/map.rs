//! Map file loading.
//!
//! Maps are plain text: one line per row, one cell character per column,
//! every line the same width. Parsing and figure validation happen before
//! any round runs; a bad map is the only way a match can fail.

use std::fs;
use std::path::Path;

use crate::error::SetupError;
use crate::game::{Cell, Coord, Field, Figure};

/// Field width of the standard tournament maps.
pub const DEFAULT_FIELD_WIDTH: u16 = 19;

/// Field height of the standard tournament maps.
pub const DEFAULT_FIELD_HEIGHT: u16 = 15;

/// Parse a map from its text form.
///
/// The parsed field re-renders to the same text through `Display`.
///
/// # Errors
///
/// Returns a [`SetupError`] for an empty map, a ragged line, a character
/// outside the cell alphabet, or a missing/duplicate figure marker.
pub fn parse_map(text: &str) -> Result<Field, SetupError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return Err(SetupError::EmptyMap);
    }

    let width = lines[0].chars().count();
    if width == 0 {
        return Err(SetupError::EmptyMap);
    }

    let height = lines.len();
    // Coordinates are i16, so both dimensions must fit in i16.
    let (Ok(w), Ok(h)) = (i16::try_from(width), i16::try_from(height)) else {
        return Err(SetupError::InvalidDimensions { width, height });
    };
    let mut field = Field::new(w.unsigned_abs(), h.unsigned_abs())
        .ok_or(SetupError::InvalidDimensions { width, height })?;

    for (row, line) in lines.iter().enumerate() {
        let got = line.chars().count();
        if got != width {
            return Err(SetupError::RaggedLine {
                line: row + 1,
                expected: width,
                got,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or(SetupError::UnknownCell {
                line: row + 1,
                col: col + 1,
                ch,
            })?;
            // Row and column are bounded by the i16 dimensions checked above.
            let coord = Coord::new(
                i16::try_from(row).unwrap_or(i16::MAX),
                i16::try_from(col).unwrap_or(i16::MAX),
            );
            field.set(coord, cell);
        }
    }

    validate_figures(&field)?;
    Ok(field)
}

/// Load and parse a map file.
///
/// # Errors
///
/// Returns a [`SetupError`] if the file cannot be read or fails to parse.
pub fn load_map(path: &Path) -> Result<Field, SetupError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Check that each of the four figures has exactly one live marker.
///
/// # Errors
///
/// Returns [`SetupError::MissingFigure`] or [`SetupError::DuplicateFigure`].
pub fn validate_figures(field: &Field) -> Result<(), SetupError> {
    for figure in Figure::ALL {
        let marker = figure.cell();
        let count = field.iter().filter(|&(_, cell)| cell == marker).count();
        match count {
            0 => return Err(SetupError::MissingFigure(figure)),
            1 => {}
            _ => return Err(SetupError::DuplicateFigure(figure)),
        }
    }
    Ok(())
}
