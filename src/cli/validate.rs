//! Validate command implementation.

use super::CliError;
use kingsheep::game::{Cell, Figure};
use kingsheep::map::load_map;
use std::path::PathBuf;

/// Execute the validate command: parse a map file and report its contents,
/// or the structured setup error.
///
/// # Errors
///
/// Returns an error if the map fails to load or validate.
pub(crate) fn execute(map: PathBuf) -> Result<(), CliError> {
    let field = load_map(&map).map_err(|e| CliError::new(e.to_string()))?;

    println!("Map: {}", map.display());
    println!("Dimensions: {}x{}", field.width(), field.height());

    for figure in Figure::ALL {
        if let Some(coord) = field.locate(figure) {
            println!("  {figure}: row {}, col {}", coord.row, coord.col);
        }
    }

    let grass = field.iter().filter(|&(_, c)| c == Cell::Grass).count();
    let rhubarb = field.iter().filter(|&(_, c)| c == Cell::Rhubarb).count();
    let fences = field.iter().filter(|&(_, c)| c == Cell::Fence).count();
    println!("  grass: {grass}, rhubarb: {rhubarb}, fences: {fences}");

    println!("OK");
    Ok(())
}
