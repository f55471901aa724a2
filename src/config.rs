use std::path::Path;

use crate::error::{Ccsv2SqlError, Result};
use crate::type_inference::InferencePolicy;
use crate::utils::replace_csv_suffix;

/// Everything one conversion needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Input CSV path, as given.
    pub file: String,
    /// Output SQL path, as given or derived from `file`.
    pub out: String,
    /// Field delimiter byte (default: `,`).
    pub separator: u8,
    /// Database selected with a `USE` line, when present.
    pub db: Option<String>,
    /// Whether the comment header is written (default: `true`).
    pub comments: bool,
    pub verbose: bool,
    pub policy: InferencePolicy,
}

impl DumpConfig {
    /// Resolves the output path and checks both file suffixes.
    ///
    /// Without `out`, every `.csv` in `file` is replaced by `.sql`, so
    /// `data.csv.csv` becomes `data.sql.sql`.
    pub fn new(file: impl Into<String>, out: Option<String>) -> Result<Self> {
        let file = file.into();
        let out = out.unwrap_or_else(|| default_output_path(&file));

        if !file.ends_with(".csv") {
            return Err(Ccsv2SqlError::InputExtension(file));
        }
        if !out.ends_with(".sql") {
            return Err(Ccsv2SqlError::OutputExtension(out));
        }

        Ok(Self {
            file,
            out,
            separator: b',',
            db: None,
            comments: true,
            verbose: false,
            policy: InferencePolicy::default(),
        })
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_db(mut self, db: Option<String>) -> Self {
        self.db = db;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Table name: the input's base name with `.csv` removed.
    pub fn table_name(&self) -> String {
        let base = Path::new(&self.file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.clone());
        replace_csv_suffix(&base, "")
    }

    /// The input path with `.csv` removed, as shown in the dump comment.
    pub fn source_name(&self) -> String {
        replace_csv_suffix(&self.file, "")
    }
}

pub fn default_output_path(file: &str) -> String {
    replace_csv_suffix(file, ".sql")
}
