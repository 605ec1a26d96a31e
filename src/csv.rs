use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, Code};
use crate::model::{Coin, Event, Product};
use crate::{Amount, VendingMachine};

/// Errors that can occur when reading session or catalog csv files
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open csv file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized event '{event}'")]
    UnrecognizedEvent { line: usize, event: String },

    #[error("line {line}: coin missing {field}")]
    MissingMeasurement { line: usize, field: &'static str },

    #[error("line {line}: press needs exactly one key, got '{key}'")]
    InvalidKey { line: usize, key: String },

    #[error("line {line}: {source}")]
    Catalog { line: usize, source: CatalogError },

    #[error("line {line}: price must be a finite amount, got {price}")]
    InvalidPrice { line: usize, price: f64 },

    #[error("failed to write csv: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush csv: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct EventRow {
    event: String,
    radius: Option<f64>,
    mass: Option<f64>,
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    code: String,
    name: String,
    price: f64,
}

#[derive(Debug, Serialize)]
struct TranscriptRow<'a> {
    channel: &'a str,
    line: &'a str,
}

fn reader(path: impl AsRef<Path>) -> Result<csv::Reader<std::fs::File>, CsvError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)
}

/// Read a session of machine events from a csv file
///
/// The returned iterator owns the open file and does not borrow `path`.
pub fn read_events(
    path: &Path,
) -> Result<impl Iterator<Item = Result<Event, CsvError>> + Send + use<>, CsvError> {
    let reader = reader(path)?;

    Ok(reader
        .into_deserialize::<EventRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            match row.event.as_str() {
                "coin" => {
                    let radius = row.radius.ok_or(CsvError::MissingMeasurement {
                        line,
                        field: "radius",
                    })?;
                    let mass = row.mass.ok_or(CsvError::MissingMeasurement {
                        line,
                        field: "mass",
                    })?;
                    Ok(Event::Coin(Coin::new(radius, mass)))
                }
                "press" => {
                    let key = row.key.unwrap_or_default();
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(Event::Button(c)),
                        _ => Err(CsvError::InvalidKey { line, key }),
                    }
                }
                other => Err(CsvError::UnrecognizedEvent {
                    line,
                    event: other.to_string(),
                }),
            }
        }))
}

/// Read a product catalog from a csv file; the first bad row fails the whole catalog
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog, CsvError> {
    let reader = reader(path)?;
    let mut catalog = Catalog::default();

    for (idx, result) in reader.into_deserialize::<CatalogRow>().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|source| CsvError::Parse { line, source })?;
        let price = Amount::checked_from_float(row.price).ok_or(CsvError::InvalidPrice {
            line,
            price: row.price,
        })?;
        let product = Product::new(row.name, price);
        row.code
            .parse::<Code>()
            .and_then(|code| catalog.insert(code, product))
            .map_err(|source| CsvError::Catalog { line, source })?;
    }

    Ok(catalog)
}

/// Write every channel of the machine in csv format
pub fn write_transcript(writer: impl io::Write, machine: &VendingMachine) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);

    let channels = [
        ("display", machine.display()),
        ("return", machine.return_slot()),
        ("product", machine.product_slot()),
    ];
    for (channel, lines) in channels {
        for line in lines.lines() {
            writer.serialize(TranscriptRow { channel, line })?;
        }
    }

    writer.flush()?;
    Ok(())
}
