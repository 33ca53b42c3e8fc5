//! Tabular workbook collaborator: typed cell values, labeled rows, and the
//! codec contract the import/export paths depend on.
//!
//! The engine never touches a spreadsheet binary format directly. Hosts hand
//! it decoded rows (or bytes plus a [`WorkbookCodec`]); the bundled
//! [`CsvWorkbook`] covers the plain-text case.

use std::io::Cursor;

use chrono::NaiveDate;

use crate::errors::Result;

/// A single decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    /// Numeric cell, including spreadsheet date serials.
    Number(f64),
    Text(String),
    /// A cell the codec already resolved to a calendar date.
    Date(NaiveDate),
}

impl CellValue {
    /// Text content of the cell, if any. Numbers are rendered without a
    /// trailing `.0` so identifiers read back the way they were typed.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s.clone()),
            CellValue::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
            CellValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numeric content of the cell, coercing numeric-looking text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One spreadsheet row: cells keyed by their header label, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: CellValue) {
        self.cells.push((label.into(), value));
    }

    pub fn with(mut self, label: impl Into<String>, value: CellValue) -> Self {
        self.push(label, value);
        self
    }

    /// First cell under `label`, `Empty` when the column is absent.
    pub fn get(&self, label: &str) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
            .unwrap_or(&EMPTY)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(l, _)| l.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Contract for the external spreadsheet codec; binary formats such as XLSX
/// live outside the engine. Labels in decoded rows come from the header row;
/// cell typing is the codec's responsibility.
pub trait WorkbookCodec {
    fn read_workbook(&self, bytes: &[u8]) -> Result<Vec<Row>>;
    fn write_workbook(&self, rows: &[Row], sheet_name: &str) -> Result<Vec<u8>>;
}

/// CSV-backed [`WorkbookCodec`]. Cells that lex as numbers become
/// [`CellValue::Number`]; empty cells become [`CellValue::Empty`]; everything
/// else stays text. The sheet name is ignored (CSV has no sheets).
#[derive(Debug, Default, Clone)]
pub struct CsvWorkbook;

impl CsvWorkbook {
    fn parse_cell(raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            CellValue::Number(n)
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    fn render_cell(value: &CellValue) -> String {
        match value {
            CellValue::Empty => String::new(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%d/%m/%Y").to_string(),
        }
    }
}

impl WorkbookCodec for CsvWorkbook {
    fn read_workbook(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(Cursor::new(bytes));
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = Row::new();
            for (label, raw) in headers.iter().zip(record.iter()) {
                row.push(label.clone(), Self::parse_cell(raw));
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn write_workbook(&self, rows: &[Row], _sheet_name: &str) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if let Some(first) = rows.first() {
            writer.write_record(first.labels())?;
            for row in rows {
                let record: Vec<String> = first
                    .labels()
                    .map(|label| Self::render_cell(row.get(label)))
                    .collect();
                writer.write_record(&record)?;
            }
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|err| crate::errors::LedgerError::Io(err.into_error()))
    }
}
