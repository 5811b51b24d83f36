//! Table
//!
//! Immutable tabular value of categorical cells. The last column is
//! always the class label. Every transformation returns a new `Table`.
use crate::errors::InfoTreeError;
use crate::utils::first_seen;
use std::fmt;

/// Ordered headers plus ordered rows of string cells.
///
/// A `Table` can only be built through [`Table::new`], which checks that
/// there is at least one column and that every row has one cell per
/// header. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table.
    ///
    /// * `headers` - Attribute names, the last one names the class column.
    /// * `rows` - Rows of cells, each with `headers.len()` values.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, InfoTreeError> {
        if headers.is_empty() {
            return Err(InfoTreeError::NoColumns);
        }
        let expected = headers.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(InfoTreeError::MalformedTable {
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Table { headers, rows })
    }

    /// Convenience constructor from string slices, mostly for tests and demos.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Result<Self, InfoTreeError> {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, class column included.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn class_index(&self) -> usize {
        self.headers.len() - 1
    }

    pub fn class_header(&self) -> &str {
        &self.headers[self.class_index()]
    }

    /// Class value of the given row, if the row exists.
    pub fn class_value(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r[self.class_index()].as_str())
    }

    /// Distinct values of a column in the order they first appear.
    pub fn distinct_values(&self, col: usize) -> Result<Vec<&str>, InfoTreeError> {
        self.check_column(col)?;
        Ok(first_seen(self.rows.iter().map(|r| r[col].as_str())))
    }

    /// Count of every class value, in first-seen order.
    pub fn class_counts(&self) -> Vec<(&str, usize)> {
        let class_index = self.class_index();
        let mut counts: hashbrown::HashMap<&str, usize> = hashbrown::HashMap::new();
        for r in &self.rows {
            *counts.entry(r[class_index].as_str()).or_insert(0) += 1;
        }
        first_seen(self.rows.iter().map(|r| r[class_index].as_str()))
            .into_iter()
            .map(|label| (label, counts[label]))
            .collect()
    }

    /// Keep only the rows whose `col` cell equals `value`.
    ///
    /// Headers are untouched, the tested column is kept and row order is
    /// preserved. An empty result is not an error.
    pub fn filter_by_value(&self, col: usize, value: &str) -> Result<Table, InfoTreeError> {
        self.check_column(col)?;
        let rows = self.rows.iter().filter(|r| r[col] == value).cloned().collect();
        Ok(Table {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Remove `col` from the headers and from every row.
    pub fn drop_column(&self, col: usize) -> Result<Table, InfoTreeError> {
        self.check_column(col)?;
        let headers = without(&self.headers, col);
        let rows = self.rows.iter().map(|r| without(r, col)).collect();
        Ok(Table { headers, rows })
    }

    /// Rows where `col == value`, with `col` removed afterwards.
    pub fn partition(&self, col: usize, value: &str) -> Result<Table, InfoTreeError> {
        self.filter_by_value(col, value)?.drop_column(col)
    }

    fn check_column(&self, col: usize) -> Result<(), InfoTreeError> {
        if col < self.width() {
            Ok(())
        } else {
            Err(InfoTreeError::ColumnOutOfRange(col, self.width()))
        }
    }
}

fn without(values: &[String], idx: usize) -> Vec<String> {
    values[..idx].iter().chain(values[idx + 1..].iter()).cloned().collect()
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.headers.join(","))?;
        for r in &self.rows {
            writeln!(f, "{}", r.join(","))?;
        }
        Ok(())
    }
}
