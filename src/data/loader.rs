use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_VERSION,
];

/// Schema problems found while turning raw rows into [`LaunchRecord`]s.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Row {row}: empty '{column}' value")]
    MissingValue { row: usize, column: &'static str },
    #[error("Row {row}: 'class' must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },
    #[error("Row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; extra columns (flight number, index…) are ignored
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – columns named as in the CSV header
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Row conversion shared by every format
// ---------------------------------------------------------------------------

/// One row as read from disk, before validation.
#[derive(Debug, Deserialize)]
struct RawLaunch {
    #[serde(rename = "Launch Site")]
    launch_site: Option<String>,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "class")]
    class: Option<f64>,
    #[serde(rename = "Booster Version")]
    booster_version: Option<String>,
}

impl RawLaunch {
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        let launch_site = non_empty(self.launch_site, row, COL_LAUNCH_SITE)?;
        let booster_version = non_empty(self.booster_version, row, COL_BOOSTER_VERSION)?;

        let payload_mass_kg = self.payload_mass_kg.ok_or(LoadError::MissingValue {
            row,
            column: COL_PAYLOAD_MASS,
        })?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(LoadError::InvalidPayload {
                row,
                value: payload_mass_kg,
            });
        }

        let class = self.class.ok_or(LoadError::MissingValue {
            row,
            column: COL_CLASS,
        })?;
        let outcome =
            Outcome::from_class(class).ok_or(LoadError::InvalidClass { row, value: class })?;

        Ok(LaunchRecord {
            launch_site,
            payload_mass_kg,
            outcome,
            booster_version,
        })
    }
}

fn non_empty(value: Option<String>, row: usize, column: &'static str) -> Result<String, LoadError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(LoadError::MissingValue { row, column }),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunch>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<LaunchTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawLaunch> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas or Polars.
///
/// Numeric columns may be any integer or float type and string columns may
/// be `Utf8`, `LargeUtf8` or dictionary encoded; everything is cast before
/// reading.
fn load_parquet(path: &Path) -> Result<LaunchTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let sites = string_column(&batch, COL_LAUNCH_SITE)?;
        let payloads = f64_column(&batch, COL_PAYLOAD_MASS)?;
        let classes = f64_column(&batch, COL_CLASS)?;
        let boosters = string_column(&batch, COL_BOOSTER_VERSION)?;

        let rows = sites
            .into_iter()
            .zip(payloads)
            .zip(classes)
            .zip(boosters)
            .map(
                |(((launch_site, payload_mass_kg), class), booster_version)| RawLaunch {
                    launch_site,
                    payload_mass_kg,
                    class,
                    booster_version,
                },
            );

        for raw in rows {
            let row = records.len();
            records.push(raw.into_record(row)?);
        }
    }

    Ok(LaunchTable::from_records(records))
}

// -- Parquet / Arrow helpers --

fn cast_column(batch: &RecordBatch, name: &'static str, to: &DataType) -> Result<arrow::array::ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    arrow::compute::cast(batch.column(idx), to)
        .with_context(|| format!("column '{name}' cannot be read as {to:?}"))
}

fn f64_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<Option<f64>>> {
    let col = cast_column(batch, name, &DataType::Float64)?;
    let arr = col
        .as_any()
        .downcast_ref::<Float64Array>()
        .context("expected Float64Array")?;
    Ok(arr.iter().collect())
}

fn string_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<Option<String>>> {
    let col = cast_column(batch, name, &DataType::Utf8)?;
    let arr = col
        .as_any()
        .downcast_ref::<StringArray>()
        .context("expected StringArray")?;
    Ok(arr.iter().map(|v| v.map(str::to_string)).collect())
}
