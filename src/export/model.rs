use crate::models::log_record::LOG_HEADERS;
use crate::models::{CellValue, LogRecord, Table};
use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

/// A rectangular, header-ordered view of what is being exported.
pub struct Sheet {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn from_table(table: &Table) -> Self {
        Self {
            title: "Main".to_string(),
            headers: table.headers().to_vec(),
            rows: table
                .rows()
                .iter()
                .map(|row| table.cells(row).cloned().collect())
                .collect(),
        }
    }

    pub fn from_log(records: &[LogRecord]) -> Self {
        Self {
            title: "Log".to_string(),
            headers: LOG_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records
                .iter()
                .map(|r| r.fields().iter().map(|f| CellValue::from(*f)).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// JSON shape: an array of objects keyed by header, in header order.
impl Serialize for Sheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowObject {
                headers: &self.headers,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct RowObject<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (h, c) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(h, c)?;
        }
        map.end()
    }
}
