// File: crates/chartsmith-import/src/column.rs
// Summary: Typed columns and content-based type inference.
// Notes:
// - Inference is a priority ladder over whole columns: numeric, then boolean,
//   then date, then string. A column only takes a type when every cell
//   satisfies it, so "1"/"0" land as numeric before the boolean rung runs.

use chrono::NaiveDate;

/// Date layouts accepted by the date rung, probed in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Date,
    Text,
}

/// Cell values coerced to the inferred column type.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Boolean(Vec<bool>),
    Date(Vec<NaiveDate>),
    Text(Vec<String>),
}

/// One normalized column: header name plus typed cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Boolean(_) => ColumnKind::Boolean,
            ColumnData::Date(_) => ColumnKind::Date,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Date(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Infer a column type from its raw cells and coerce them.
pub fn infer(name: &str, cells: &[String]) -> Column {
    let data = if let Some(numbers) = all_numeric(cells) {
        ColumnData::Numeric(numbers)
    } else if let Some(flags) = all_boolean(cells) {
        ColumnData::Boolean(flags)
    } else if let Some(dates) = all_dates(cells) {
        ColumnData::Date(dates)
    } else {
        ColumnData::Text(cells.to_vec())
    };
    Column {
        name: name.to_string(),
        data,
    }
}

fn all_numeric(cells: &[String]) -> Option<Vec<f64>> {
    cells
        .iter()
        .map(|c| c.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

fn all_boolean(cells: &[String]) -> Option<Vec<bool>> {
    cells
        .iter()
        .map(|c| match c.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        })
        .collect()
}

fn all_dates(cells: &[String]) -> Option<Vec<NaiveDate>> {
    cells.iter().map(|c| parse_date(c.trim())).collect()
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
}
