//! Information metrics
//!
//! Class entropy of a [`Table`] and the expected information left after
//! splitting it on one attribute.
use crate::errors::InfoTreeError;
use crate::table::Table;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the class entropy of a table is computed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyMethod {
    /// Two-class entropy: rows matching the first row's class against
    /// all others. More than two class values is an error.
    #[default]
    Binary,
    /// Shannon entropy over every class value present.
    Shannon,
}

impl FromStr for EntropyMethod {
    type Err = InfoTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Binary" => Ok(EntropyMethod::Binary),
            "Shannon" => Ok(EntropyMethod::Shannon),
            _ => Err(InfoTreeError::ParseString(
                s.to_string(),
                "EntropyMethod".to_string(),
                items_to_strings(vec!["Binary", "Shannon"]),
            )),
        }
    }
}

impl fmt::Display for EntropyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntropyMethod::Binary => "Binary",
            EntropyMethod::Shannon => "Shannon",
        };
        write!(f, "{name}")
    }
}

/// Expected information of one attribute, with the attribute's values
/// in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeInfo<'a> {
    pub expected_info: f64,
    pub values: Vec<&'a str>,
}

/// Class entropy using the two-class formula.
pub fn class_entropy(table: &Table) -> Result<f64, InfoTreeError> {
    class_entropy_with(table, EntropyMethod::Binary)
}

/// Class entropy of `table` in bits.
///
/// Fails with [`InfoTreeError::DegenerateDataset`] on a table without rows.
pub fn class_entropy_with(table: &Table, method: EntropyMethod) -> Result<f64, InfoTreeError> {
    if table.is_empty() {
        return Err(InfoTreeError::DegenerateDataset);
    }
    let size = table.size() as f64;
    let counts = table.class_counts();
    match method {
        EntropyMethod::Binary => {
            if counts.len() > 2 {
                return Err(InfoTreeError::UnsupportedClassCardinality(counts.len()));
            }
            // `counts[0]` is the class of the first row.
            let class_a = counts[0].1;
            let class_b = table.size() - class_a;
            let p1 = class_a as f64 / size;
            let p2 = class_b as f64 / size;
            if p2 == 0.0 {
                return Ok(0.0);
            }
            Ok(-p1 * p1.log2() - p2 * p2.log2())
        }
        EntropyMethod::Shannon => {
            if counts.len() == 1 {
                return Ok(0.0);
            }
            Ok(counts
                .iter()
                .map(|(_, c)| {
                    let p = *c as f64 / size;
                    -p * p.log2()
                })
                .sum())
        }
    }
}

/// Expected information of attribute `col` using the two-class formula.
pub fn attribute_information(table: &Table, col: usize) -> Result<AttributeInfo<'_>, InfoTreeError> {
    attribute_information_with(table, col, EntropyMethod::Binary)
}

/// Weighted class entropy of the subsets produced by splitting `table`
/// on every value of `col`.
pub fn attribute_information_with(
    table: &Table,
    col: usize,
    method: EntropyMethod,
) -> Result<AttributeInfo<'_>, InfoTreeError> {
    if table.is_empty() {
        return Err(InfoTreeError::DegenerateDataset);
    }
    let size = table.size() as f64;
    let values = table.distinct_values(col)?;
    let mut expected_info = 0.0;
    for value in values.iter() {
        let subset = table.filter_by_value(col, value)?;
        expected_info += class_entropy_with(&subset, method)? * (subset.size() as f64 / size);
    }
    Ok(AttributeInfo { expected_info, values })
}
