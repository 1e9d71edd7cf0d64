//! Dataset loading.
//!
//! Streams the DB-IP range CSV into a [`GeoIndex`]. Parsing is best effort: a
//! malformed row degrades coverage by one range instead of aborting the run,
//! and every skip is a typed decision rather than a blanket suppression.

use std::path::Path;

use log::{debug, info};

use crate::error_handling::DatasetError;
use crate::geodb::index::{GeoIndex, RangeRecord};

/// Column layout of the dataset: range start, range end, five unused location
/// columns, then latitude and longitude text.
const MIN_COLUMNS: usize = 9;
const START_COLUMN: usize = 0;
const END_COLUMN: usize = 1;
const LATITUDE_COLUMN: usize = 7;
const LONGITUDE_COLUMN: usize = 8;

/// Why one dataset row was excluded from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    /// Fewer than the nine required columns.
    TooFewColumns,
    /// Range start or end failed to parse as an integer.
    BadRangeBound,
    /// Latitude or longitude column is empty.
    MissingCoordinates,
}

impl RowSkip {
    fn as_str(self) -> &'static str {
        match self {
            RowSkip::TooFewColumns => "too few columns",
            RowSkip::BadRangeBound => "non-numeric range bound",
            RowSkip::MissingCoordinates => "empty coordinates",
        }
    }
}

/// Loads the dataset at `path` into an index, preserving file row order.
///
/// The dataset is published pre-sorted by range start; order is carried
/// through to the builder and not re-verified. Lines starting with `#` are
/// comments.
///
/// # Errors
///
/// Returns [`DatasetError`] only for file-level failures (open or read). Row
/// level problems are skipped and counted.
pub fn load_index(path: &Path) -> Result<GeoIndex, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(skip) => {
                skipped += 1;
                debug!("Skipping dataset row ({}): {:?}", skip.as_str(), row);
            }
        }
    }

    if skipped > 0 {
        info!("Skipped {} malformed dataset rows", skipped);
    }
    Ok(GeoIndex::from_records(records))
}

/// Parses one CSV row into a range record, or decides why to skip it.
fn parse_row(row: &csv::StringRecord) -> Result<RangeRecord, RowSkip> {
    if row.len() < MIN_COLUMNS {
        return Err(RowSkip::TooFewColumns);
    }

    let start = parse_bound(&row[START_COLUMN])?;
    let end = parse_bound(&row[END_COLUMN])?;

    let latitude = row[LATITUDE_COLUMN].trim();
    let longitude = row[LONGITUDE_COLUMN].trim();
    if latitude.is_empty() || longitude.is_empty() {
        return Err(RowSkip::MissingCoordinates);
    }

    Ok(RangeRecord {
        start,
        end,
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
    })
}

fn parse_bound(field: &str) -> Result<u32, RowSkip> {
    field.trim().parse().map_err(|_| RowSkip::BadRangeBound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row_valid() {
        let record = parse_row(&row(&[
            "16777216", "16777471", "JP", "13", "Tokyo", "", "", "35.6895", "139.6917",
        ]))
        .unwrap();
        assert_eq!(record.start, 16_777_216);
        assert_eq!(record.end, 16_777_471);
        assert_eq!(record.latitude, "35.6895");
        assert_eq!(record.longitude, "139.6917");
    }

    #[test]
    fn test_parse_row_too_few_columns() {
        let result = parse_row(&row(&["1", "2", "JP", "35.6", "139.6"]));
        assert_eq!(result.unwrap_err(), RowSkip::TooFewColumns);
    }

    #[test]
    fn test_parse_row_bad_bounds() {
        let result = parse_row(&row(&[
            "not-a-number", "2", "", "", "", "", "", "35.6", "139.6",
        ]));
        assert_eq!(result.unwrap_err(), RowSkip::BadRangeBound);

        let result = parse_row(&row(&["1", "-5", "", "", "", "", "", "35.6", "139.6"]));
        assert_eq!(result.unwrap_err(), RowSkip::BadRangeBound);
    }

    #[test]
    fn test_parse_row_missing_coordinates() {
        let result = parse_row(&row(&["1", "2", "", "", "", "", "", "", "139.6"]));
        assert_eq!(result.unwrap_err(), RowSkip::MissingCoordinates);

        let result = parse_row(&row(&["1", "2", "", "", "", "", "", "35.6", ""]));
        assert_eq!(result.unwrap_err(), RowSkip::MissingCoordinates);
    }

    #[test]
    fn test_coordinate_text_is_not_reformatted() {
        // Trailing zeros must survive; coordinates are opaque payload.
        let record = parse_row(&row(&[
            "1", "2", "", "", "", "", "", "50.1100", "8.6820",
        ]))
        .unwrap();
        assert_eq!(record.latitude, "50.1100");
        assert_eq!(record.longitude, "8.6820");
    }
}
