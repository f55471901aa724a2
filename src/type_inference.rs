use std::fmt;

use tracing::debug;

use crate::classify::{ValueClass, classify_sample};
use crate::error::{Ccsv2SqlError, Result};

const TEXT_LENGTH: usize = 50;
const DESCRIPTION_LENGTH: usize = 100;
const OBJECT_ID_LENGTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Varchar(usize),
    Numeric,
    Timestamp,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Varchar(len) => write!(f, "VARCHAR({})", len),
            SqlType::Numeric => f.write_str("NUMERIC(15, 2)"),
            SqlType::Timestamp => f.write_str("TIMESTAMP"),
        }
    }
}

/// How many data rows decide a column's type.
///
/// Only `single-sample-type-inference` exists: the first data row fixes every
/// column type and later rows are never checked against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InferencePolicy {
    #[default]
    SingleSample,
}

impl InferencePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            InferencePolicy::SingleSample => "single-sample-type-inference",
        }
    }

    /// picks the row(s) the policy samples from.
    pub fn sample<'a>(&self, rows: &'a [Vec<String>]) -> Option<&'a [String]> {
        match self {
            InferencePolicy::SingleSample => rows.first().map(Vec::as_slice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
}

// maps one sampled value to a column type.
// object ids are fixed width, numbers become NUMERIC(15, 2), a leading yyyy-mm-dd
// becomes TIMESTAMP, and everything else is VARCHAR(50), widened to VARCHAR(100)
// for a column named exactly "description".
pub fn infer_sql_type(key: &str, value: &str) -> SqlType {
    match classify_sample(value) {
        ValueClass::ObjectId => SqlType::Varchar(OBJECT_ID_LENGTH),
        ValueClass::NumericLike => SqlType::Numeric,
        ValueClass::DateLike => SqlType::Timestamp,
        ValueClass::TextLike if key == "description" => SqlType::Varchar(DESCRIPTION_LENGTH),
        ValueClass::TextLike => SqlType::Varchar(TEXT_LENGTH),
    }
}

/// infers one column per header from the sampled first row, keeping header order.
pub fn infer_columns(headers: &[String], first_row: &[String]) -> Result<Vec<Column>> {
    if headers.len() != first_row.len() {
        return Err(Ccsv2SqlError::ColumnCountMismatch {
            headers: headers.len(),
            values: first_row.len(),
        });
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(first_row)
        .map(|(name, value)| Column {
            name: name.clone(),
            sql_type: infer_sql_type(name, value),
        })
        .collect();

    for column in &columns {
        debug!(column = %column.name, sql_type = %column.sql_type, "inferred column type");
    }

    Ok(columns)
}

/// infers the schema of a loaded table under `policy`.
pub fn infer_schema(
    headers: &[String],
    rows: &[Vec<String>],
    policy: InferencePolicy,
) -> Result<Vec<Column>> {
    let sample = policy.sample(rows).ok_or(Ccsv2SqlError::NoDataRows)?;
    debug!(policy = policy.name(), columns = headers.len(), "inferring schema");
    infer_columns(headers, sample)
}
