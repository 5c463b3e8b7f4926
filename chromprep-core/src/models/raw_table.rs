use std::path::{Path, PathBuf};

use crate::errors::{ChromPrepError, Result};

///
/// A csv table kept as text cells, for consumers that coerce columns
/// themselves instead of relying on the typed [FamilyTable](super::FamilyTable) mapping.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub path: Option<PathBuf>,
}

impl RawTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ChromPrepError::MissingFile(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(RawTable {
            headers,
            rows,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ChromPrepError::MissingColumn {
                path: self.path.clone().unwrap_or_default(),
                column: column.to_string(),
            })
    }

    /// Cells of a column as text; short rows yield an empty cell.
    pub fn text_column(&self, column: &str) -> Result<Vec<&str>> {
        let idx = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or_default())
            .collect())
    }

    ///
    /// Cells of a column coerced to numbers. Cells that are empty or not
    /// numeric become `None`.
    ///
    pub fn numeric_column(&self, column: &str) -> Result<Vec<Option<f64>>> {
        Ok(self
            .text_column(column)?
            .into_iter()
            .map(coerce_numeric)
            .collect())
    }
}

pub fn coerce_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
