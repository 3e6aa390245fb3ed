use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::core::IrisRecord;
use crate::error::{ChartError, ChartResult};

pub const SPECIES_COLUMN: &str = "Species";
pub const PETAL_LENGTH_COLUMN: &str = "PetalLength";
pub const PETAL_WIDTH_COLUMN: &str = "PetalWidth";

/// Loads Iris records from a CSV file with a header row.
pub fn load_records(path: impl AsRef<Path>) -> ChartResult<Vec<IrisRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    debug!(path = %path.display(), "loading iris csv");
    load_records_from_reader(file)
}

/// Loads Iris records from any CSV source with a header row.
///
/// `Species` and `PetalLength` are required columns. `PetalWidth` is read
/// when present; an empty cell loads as `None`. Numeric cells that do not
/// parse to a finite number fail the whole load.
pub fn load_records_from_reader<R: Read>(reader: R) -> ChartResult<Vec<IrisRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let species_index = column_index(&headers, SPECIES_COLUMN)?;
    let length_index = column_index(&headers, PETAL_LENGTH_COLUMN)?;
    let width_index = headers.iter().position(|name| name == PETAL_WIDTH_COLUMN);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);

        let species = row.get(species_index).unwrap_or_default();
        if species.is_empty() {
            return Err(ChartError::MissingField {
                line,
                field: SPECIES_COLUMN.to_owned(),
            });
        }

        let petal_length = match row.get(length_index).filter(|cell| !cell.is_empty()) {
            Some(cell) => parse_measurement(cell, line, PETAL_LENGTH_COLUMN)?,
            None => {
                return Err(ChartError::MissingField {
                    line,
                    field: PETAL_LENGTH_COLUMN.to_owned(),
                });
            }
        };

        let petal_width = width_index
            .and_then(|index| row.get(index))
            .filter(|cell| !cell.is_empty())
            .map(|cell| parse_measurement(cell, line, PETAL_WIDTH_COLUMN))
            .transpose()?;

        records.push(IrisRecord::new(species, petal_length, petal_width)?);
    }

    debug!(
        count = records.len(),
        has_petal_width = width_index.is_some(),
        "loaded iris records"
    );
    Ok(records)
}

fn column_index(headers: &StringRecord, name: &str) -> ChartResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ChartError::MissingColumn(name.to_owned()))
}

fn parse_measurement(cell: &str, line: u64, column: &str) -> ChartResult<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::Parse {
            line,
            column: column.to_owned(),
            value: cell.to_owned(),
        }),
    }
}
