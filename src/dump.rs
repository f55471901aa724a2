use tracing::debug;

use crate::config::DumpConfig;
use crate::error::Result;
use crate::renderer::render_rows;
use crate::sql_generator::{create_table_sql, drop_table_sql, insert_sql, use_database_sql};
use crate::type_inference::{Column, InferencePolicy, infer_schema};
use crate::{CsvTable, signature};

/// A loaded csv table with its inferred columns and rendered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    /// One rendered literal list per data row, in input order.
    pub rows: Vec<String>,
}

impl Table {
    pub fn from_csv(name: impl Into<String>, csv: &CsvTable, policy: InferencePolicy) -> Result<Self> {
        let name = name.into();
        let columns = infer_schema(&csv.headers, &csv.rows, policy)?;
        let rows = render_rows(&csv.rows);
        debug!(table = %name, columns = columns.len(), rows = rows.len(), "rendered table");

        Ok(Self { name, columns, rows })
    }
}

/// The output as an ordered list of lines, joined once when written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlDump {
    lines: Vec<String>,
}

impl SqlDump {
    pub fn build(config: &DumpConfig, table: &Table, generated_at: &str) -> Self {
        let mut dump = SqlDump::default();

        dump.push("--!");
        if config.comments {
            dump.push(format!(
                "-- SQL table dump from CSV file: {} ({} -> {})",
                config.source_name(),
                config.file,
                config.out
            ));
            dump.push(format!("-- Generated by: {}", signature()));
            dump.push(format!("-- Generated at: {}", generated_at));
            dump.push("");
        }
        if let Some(db) = &config.db {
            dump.push(use_database_sql(db));
        }
        dump.push(drop_table_sql(&table.name));
        dump.push(create_table_sql(&table.name, &table.columns));
        dump.push("");

        for row in &table.rows {
            dump.push(insert_sql(&table.name, row));
            dump.push("");
        }

        dump
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Every line newline-terminated.
    pub fn to_sql(&self) -> String {
        let mut sql = self.lines.join("\n");
        sql.push('\n');
        sql
    }
}
