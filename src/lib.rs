use std::fs::File;
use std::io::{BufReader, Read};

use chrono::Local;
use csv::ReaderBuilder;
use tracing::{debug, info};

mod classify;
mod config;
mod dump;
mod error;
mod renderer;
mod sql_generator;
mod type_inference;
mod utils;
mod writer;

pub use classify::{ValueClass, classify_cell, classify_sample};
pub use config::{DumpConfig, default_output_path};
pub use dump::{SqlDump, Table};
pub use error::{Ccsv2SqlError, Result};
pub use renderer::{render_row, render_rows, render_value};
pub use sql_generator::{create_table_sql, drop_table_sql, insert_sql, use_database_sql};
pub use type_inference::{Column, InferencePolicy, SqlType, infer_columns, infer_schema, infer_sql_type};
pub use writer::write_atomically;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// `<name> <version>`, written into the dump header.
pub fn signature() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// A csv file held fully in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub table: String,
    pub columns: usize,
    pub rows: usize,
}

/// Reads a whole csv into memory.
///
/// Rows may differ in width from the header; the first row is checked during
/// schema inference and later rows are rendered as they are.
pub fn load_csv<R: Read>(reader: R, separator: u8) -> Result<CsvTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(separator)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(Ccsv2SqlError::EmptyInput);
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded csv");
    Ok(CsvTable { headers, rows })
}

/// Builds the complete dump text for an already loaded table.
pub fn generate_dump(config: &DumpConfig, csv: &CsvTable, generated_at: &str) -> Result<String> {
    let table = Table::from_csv(config.table_name(), csv, config.policy)?;
    Ok(SqlDump::build(config, &table, generated_at).to_sql())
}

/// Reads `config.file`, writes the dump to `config.out`.
///
/// Nothing is written unless the whole dump was generated.
pub fn convert(config: &DumpConfig) -> Result<ConversionSummary> {
    let file = File::open(&config.file)?;
    let csv = load_csv(BufReader::new(file), config.separator)?;

    let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let sql = generate_dump(config, &csv, &generated_at)?;

    write_atomically(&config.out, &sql)?;
    info!(file = %config.file, out = %config.out, rows = csv.rows.len(), "wrote sql dump");

    Ok(ConversionSummary {
        table: config.table_name(),
        columns: csv.headers.len(),
        rows: csv.rows.len(),
    })
}
