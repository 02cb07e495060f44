//! Roster loading for the rescue shelter.
//!
//! A roster is a CSV file of animals to rescue before the menu starts. It is
//! only ever read; the shelter never writes anything back.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::{RescueError, Result};
use crate::models::RosterRow;

/// Parses roster rows from any reader.
///
/// # CSV Format
///
/// Expected columns: `name, species, priority`. A header row is required and
/// every field is trimmed.
///
/// # Example
///
/// ```
/// use animal_rescue::data::read_roster;
///
/// let csv = "name,species,priority\nRex, dog, 5\nMilo,cat,9\n";
/// let rows = read_roster(csv.as_bytes()).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].species, "dog");
/// assert_eq!(rows[1].priority, 9);
/// ```
pub fn read_roster<R: Read>(reader: R) -> std::result::Result<Vec<RosterRow>, csv::Error> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RosterRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Loads a roster file from disk.
///
/// # Arguments
///
/// * `path` - Path to the roster CSV file
///
/// # Returns
///
/// The rows in file order, or [`RescueError::Roster`] if the file cannot be
/// opened or a row fails to parse.
pub fn load_roster(path: &Path) -> Result<Vec<RosterRow>> {
    let roster_error = |source| RescueError::Roster {
        path: path.to_path_buf(),
        source,
    };

    let rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(roster_error)?;

    let mut rows = Vec::new();
    for result in rdr.into_deserialize() {
        let row: RosterRow = result.map_err(roster_error)?;
        rows.push(row);
    }

    info!(path = %path.display(), animals = rows.len(), "roster loaded");
    Ok(rows)
}
