//! City data source parsing.
//!
//! Plain text, one record per line, three whitespace-separated fields:
//!
//! ```text
//! name latitude longitude
//! ```
//!
//! Coordinates are decimal degrees, sign indicating hemisphere. Parsing
//! is strict: any line that does not split into exactly three fields, or
//! whose coordinates fail to parse, fails the whole load. A blank line
//! splits into zero fields and is therefore a malformed record, not
//! skipped. There is no partial-load recovery — the dataset is a shared
//! precondition for every worker.

use std::path::Path;

use crate::error::{EvoError, EvoResult};
use crate::geo::City;

/// Parse one `name latitude longitude` record.
///
/// `path` and `line` are used only for error context.
fn parse_record(path: &str, line: usize, text: &str) -> EvoResult<City> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(EvoError::MalformedRecord {
            path: path.to_string(),
            line,
            found: fields.len(),
        });
    }
    let lat: f64 = fields[1]
        .parse()
        .map_err(|_| EvoError::InvalidCoordinate {
            path: path.to_string(),
            line,
            axis: "latitude",
            value: fields[1].to_string(),
        })?;
    let lon: f64 = fields[2]
        .parse()
        .map_err(|_| EvoError::InvalidCoordinate {
            path: path.to_string(),
            line,
            axis: "longitude",
            value: fields[2].to_string(),
        })?;
    Ok(City::new(fields[0], lat, lon))
}

/// Parse a whole dataset from in-memory text.
///
/// # Errors
///
/// Returns an error on any malformed record or if the text holds no
/// records at all.
pub fn parse(path: &str, text: &str) -> EvoResult<Vec<City>> {
    let mut cities = Vec::new();
    for (index, record) in text.lines().enumerate() {
        cities.push(parse_record(path, index + 1, record)?);
    }
    if cities.is_empty() {
        return Err(EvoError::EmptyDataset {
            path: path.to_string(),
        });
    }
    Ok(cities)
}

/// Load a city dataset from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, any record is
/// malformed, or the file contains no records.
pub fn load<P: AsRef<Path>>(path: P) -> EvoResult<Vec<City>> {
    let display = path.as_ref().display().to_string();
    let text = std::fs::read_to_string(&path).map_err(|source| EvoError::DatasetIo {
        path: display.clone(),
        source,
    })?;
    parse(&display, &text)
}
