//! Positional column schema for economic region tables.
//!
//! Each column is data: a cell index, the record field it fills and how the
//! cell text is coerced. Cells that fail to coerce leave the field at its
//! zero value.

use crate::domain::model::EconomicRegionRecord;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid integer pattern"));

static LEADING_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("valid decimal pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Province,
    EconomicRegionCode,
    EconomicRegionName,
    UnemploymentRate,
    InsuredHoursRequired,
    MinWeeksPayable,
    MaxWeeksPayable,
    BestWeeksRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Absent,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub index: usize,
    pub field: Field,
    pub coercion: Coercion,
}

pub const EI_TABLE_COLUMNS: [Column; 8] = [
    Column { index: 0, field: Field::Province, coercion: Coercion::Text },
    Column { index: 1, field: Field::EconomicRegionCode, coercion: Coercion::Integer },
    Column { index: 2, field: Field::EconomicRegionName, coercion: Coercion::Text },
    Column { index: 3, field: Field::UnemploymentRate, coercion: Coercion::Decimal },
    Column { index: 4, field: Field::InsuredHoursRequired, coercion: Coercion::Integer },
    Column { index: 5, field: Field::MinWeeksPayable, coercion: Coercion::Integer },
    Column { index: 6, field: Field::MaxWeeksPayable, coercion: Coercion::Integer },
    Column { index: 7, field: Field::BestWeeksRequired, coercion: Coercion::Integer },
];

/// Longest `[+-]?digits` prefix after leading whitespace.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    LEADING_INTEGER
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Longest decimal prefix after leading whitespace.
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    LEADING_DECIMAL
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl Coercion {
    pub fn coerce(self, text: &str) -> CellValue {
        match self {
            Coercion::Text => CellValue::Text(text.trim().to_string()),
            Coercion::Integer => parse_leading_integer(text)
                .map(CellValue::Integer)
                .unwrap_or(CellValue::Absent),
            Coercion::Decimal => parse_leading_decimal(text)
                .map(CellValue::Decimal)
                .unwrap_or(CellValue::Absent),
        }
    }
}

impl Field {
    /// Writes `value` into the record. Mismatched or absent values are ignored.
    pub fn assign(self, record: &mut EconomicRegionRecord, value: CellValue) {
        match (self, value) {
            (Field::Province, CellValue::Text(s)) => record.province = s,
            (Field::EconomicRegionName, CellValue::Text(s)) => record.economic_region_name = s,
            (Field::UnemploymentRate, CellValue::Decimal(v)) => record.unemployment_rate = v,
            (Field::EconomicRegionCode, CellValue::Integer(v)) => record.economic_region_code = v,
            (Field::InsuredHoursRequired, CellValue::Integer(v)) => {
                record.insured_hours_required = v
            }
            (Field::MinWeeksPayable, CellValue::Integer(v)) => record.min_weeks_payable = v,
            (Field::MaxWeeksPayable, CellValue::Integer(v)) => record.max_weeks_payable = v,
            (Field::BestWeeksRequired, CellValue::Integer(v)) => record.best_weeks_required = v,
            _ => {}
        }
    }
}

/// Builds a record from cell texts. Missing cells stay at zero, extra cells are ignored.
pub fn decode_row<S: AsRef<str>>(columns: &[Column], cells: &[S]) -> EconomicRegionRecord {
    let mut record = EconomicRegionRecord::default();
    for column in columns {
        if let Some(cell) = cells.get(column.index) {
            column
                .field
                .assign(&mut record, column.coercion.coerce(cell.as_ref()));
        }
    }
    record
}
