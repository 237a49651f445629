use super::cell::CellValue;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One table row: column name → cell value.
///
/// Lookups of a column the row does not carry yield an empty cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Keep only `headers`, filling the missing ones with empty cells.
    pub fn project(&self, headers: &[String]) -> Row {
        Row {
            cells: headers
                .iter()
                .map(|h| (h.clone(), self.get(h).clone()))
                .collect(),
        }
    }
}

/// The editable table: a fixed header schema plus its ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Empty table with the given schema.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// 1-based access, as shown to the user.
    pub fn row_mut(&mut self, number: usize) -> AppResult<&mut Row> {
        number
            .checked_sub(1)
            .and_then(|idx| self.rows.get_mut(idx))
            .ok_or(AppError::InvalidRow(number))
    }

    /// 1-based removal, as shown to the user.
    pub fn remove_row(&mut self, number: usize) -> AppResult<Row> {
        if number == 0 || number > self.rows.len() {
            return Err(AppError::InvalidRow(number));
        }
        Ok(self.rows.remove(number - 1))
    }

    /// Cells of `row` in header order.
    pub fn cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.headers.iter().map(move |h| row.get(h))
    }

    /// Rows paired with the headers, serializable as ordered JSON objects.
    pub fn records(&self) -> Vec<RowRecord<'_>> {
        self.rows
            .iter()
            .map(|row| RowRecord {
                headers: &self.headers,
                row,
            })
            .collect()
    }
}

/// Serializes a row as a JSON object whose keys follow the header order.
pub struct RowRecord<'a> {
    headers: &'a [String],
    row: &'a Row,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for h in self.headers {
            map.serialize_entry(h, self.row.get(h))?;
        }
        map.end()
    }
}

/// Headers must be non-empty, non-blank and unique ignoring case
/// (SQLite column names are case-insensitive).
pub fn validate_headers(headers: &[String]) -> AppResult<()> {
    if headers.is_empty() {
        return Err(AppError::InvalidHeaders("at least one column is required".into()));
    }

    let mut seen = HashSet::new();
    for h in headers {
        if h.trim().is_empty() {
            return Err(AppError::InvalidHeaders("blank column name".into()));
        }
        if !seen.insert(h.to_lowercase()) {
            return Err(AppError::InvalidHeaders(format!("duplicate column '{h}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["A".into(), "B".into(), "Timestamp".into()]
    }

    #[test]
    fn missing_cells_read_as_empty() {
        let row = Row::from_pairs([("A", "x")]);
        assert_eq!(row.get("A"), &CellValue::from("x"));
        assert_eq!(row.get("B"), &CellValue::Empty);
    }

    #[test]
    fn project_drops_extra_and_fills_missing() {
        let row = Row::from_pairs([("A", "x"), ("Extra", "zzz")]);
        let projected = row.project(&headers());
        let mut cols: Vec<&str> = projected.columns().collect();
        cols.sort();
        assert_eq!(cols, vec!["A", "B", "Timestamp"]);
        assert_eq!(projected.get("B"), &CellValue::Empty);
    }

    #[test]
    fn row_numbers_are_one_based() {
        let mut t = Table::new(headers());
        t.push_row(Row::from_pairs([("A", "1")]));
        t.push_row(Row::from_pairs([("A", "2")]));

        assert!(matches!(t.remove_row(0), Err(AppError::InvalidRow(0))));
        assert!(matches!(t.remove_row(3), Err(AppError::InvalidRow(3))));

        let removed = t.remove_row(1).unwrap();
        assert_eq!(removed.get("A"), &CellValue::from("1"));
        assert_eq!(t.len(), 1);
        assert!(t.row_mut(2).is_err());
    }

    #[test]
    fn records_keep_header_order() {
        let mut t = Table::new(headers());
        t.push_row(Row::from_pairs([("Timestamp", "t"), ("B", "y"), ("A", "x")]));
        let json = serde_json::to_string(&t.records()).unwrap();
        assert_eq!(json, r#"[{"A":"x","B":"y","Timestamp":"t"}]"#);
    }

    #[test]
    fn header_validation() {
        assert!(validate_headers(&headers()).is_ok());
        assert!(validate_headers(&[]).is_err());
        assert!(validate_headers(&["A".into(), "A".into()]).is_err());
        assert!(validate_headers(&["A".into(), " ".into()]).is_err());
        assert!(matches!(
            validate_headers(&["Id".into(), "id".into(), "Qty".into()]),
            Err(AppError::InvalidHeaders(msg)) if msg.contains("'id'")
        ));
    }
}
