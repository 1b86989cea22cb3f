// Raw tabular layer: a header row plus string cells, with header trimming and
// missing-value filling applied at read time.

use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Value substituted for every missing cell, regardless of column type.
pub const FILL_VALUE: &str = "0";

/// Cell contents treated as missing, compared verbatim. An empty cell is
/// missing; a cell holding only whitespace is not.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Source name used in errors for tables read from an in-memory reader.
const READER_SOURCE: &str = "<input>";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{path}, row {row}: expected {expected} fields, found {found}")]
    RaggedRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column `{column}` not found")]
    MissingColumn { column: String },
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// An immutable snapshot of one CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Read a table from any CSV source. Header names are trimmed, missing
    /// cells become [`FILL_VALUE`], and short rows are padded to the header
    /// width. A row wider than the header is an error.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TableError> {
        read_table(rdr, Path::new(READER_SOURCE))
    }

    /// Read a table from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let file = std::fs::File::open(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        read_table(file, path)
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &StringRecord> {
        self.rows.iter()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Result<impl Iterator<Item = &'a str>, TableError> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| row.get(idx).unwrap_or(FILL_VALUE)))
    }

    /// Return a copy of this table without the named columns. Names that are
    /// not present are ignored.
    pub fn drop_columns(&self, columns: &[&str]) -> Table {
        let keep: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !columns.contains(h))
            .map(|(i, _)| i)
            .collect();

        if keep.len() == self.headers.len() {
            return self.clone();
        }

        let project = |record: &StringRecord| -> StringRecord {
            keep.iter().filter_map(|&i| record.get(i)).collect()
        };

        Table {
            headers: project(&self.headers),
            rows: self.rows.iter().map(project).collect(),
        }
    }

    /// Return a copy of this table keeping only the rows whose value in
    /// `column` satisfies `keep`.
    pub fn retain_rows<F>(&self, column: &str, mut keep: F) -> Result<Table, TableError>
    where
        F: FnMut(&str) -> bool,
    {
        let idx = self.require_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| keep(row.get(idx).unwrap_or(FILL_VALUE)))
            .cloned()
            .collect();
        Ok(Table {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Deserialize every row into `T`, matching fields by header name.
    pub fn deserialize<'a, T>(&'a self) -> impl Iterator<Item = Result<T, csv::Error>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        self.rows
            .iter()
            .map(move |row| row.deserialize::<T>(Some(&self.headers)))
    }

    fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_string(),
            })
    }
}

fn read_table<R: Read>(rdr: R, source: &Path) -> Result<Table, TableError> {
    let csv_error = |e: csv::Error| TableError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers: StringRecord = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::trim)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        if record.len() > width {
            return Err(TableError::RaggedRow {
                path: source.to_path_buf(),
                row: i + 1,
                expected: width,
                found: record.len(),
            });
        }
        let row: StringRecord = (0..width)
            .map(|i| fill_missing(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(Table { headers, rows })
}

fn fill_missing(cell: &str) -> &str {
    if MISSING_MARKERS.contains(&cell) {
        FILL_VALUE
    } else {
        cell
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
