//! Reader
//!
//! Loads a [`Table`] from delimited text. The first record holds the
//! headers, the remaining records are rows, the last column is the class.
use crate::constants::DEFAULT_DELIMITER;
use crate::errors::InfoTreeError;
use crate::table::Table;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a comma separated file into a [`Table`].
///
/// * `path` - Path of the file to read.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table, InfoTreeError> {
    read_csv_with_delimiter(path, DEFAULT_DELIMITER)
}

/// Read a delimited file into a [`Table`].
///
/// * `path` - Path of the file to read.
/// * `delimiter` - Field separator, e.g. `b';'`.
pub fn read_csv_with_delimiter<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table, InfoTreeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InfoTreeError::UnableToRead(format!("{}: {}", path.display(), e)))?;
    Table::from_csv_reader(BufReader::new(file), delimiter)
}

impl Table {
    /// Build a table from any reader of delimited text.
    ///
    /// Rows with the wrong number of cells are reported as
    /// [`InfoTreeError::MalformedTable`]. Cells are kept verbatim.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Table, InfoTreeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .delimiter(delimiter)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| InfoTreeError::UnableToRead(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| InfoTreeError::UnableToRead(e.to_string()))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Table::new(headers, rows)
    }
}
