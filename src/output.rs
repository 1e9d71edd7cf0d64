//! CSV output writing.
//!
//! One row per successfully located endpoint, in input order. Endpoints that
//! failed to resolve or locate are omitted entirely; the output schema never
//! grows error rows or extra columns.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::pipeline::Located;

/// Writes located endpoints to `path` as CSV.
///
/// The header `Relay URL,Latitude,Longitude` is always written, so an empty
/// run still produces a well-formed (header-only) file. Returns the number of
/// data rows written.
pub fn write_csv(path: &Path, located: &[Located]) -> Result<usize> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer
        .write_record(["Relay URL", "Latitude", "Longitude"])
        .context("Failed to write CSV header")?;

    for row in located {
        writer
            .write_record([
                row.endpoint.as_str(),
                row.latitude.as_str(),
                row.longitude.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", row.endpoint))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(located.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(endpoint: &str, lat: &str, lon: &str) -> Located {
        Located {
            endpoint: endpoint.to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
        }
    }

    #[test]
    fn test_write_csv_rows_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![
            located("wss://a.example.com", "1.0", "2.0"),
            located("wss://b.example.com", "-3.5", "4.25"),
        ];
        let written = write_csv(&path, &rows).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Relay URL,Latitude,Longitude",
                "wss://a.example.com,1.0,2.0",
                "wss://b.example.com,-3.5,4.25",
            ]
        );
    }

    #[test]
    fn test_write_csv_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let written = write_csv(&path, &[]).unwrap();
        assert_eq!(written, 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "Relay URL,Latitude,Longitude");
    }
}
