// src/store.rs
// In-memory table shape shared by the scrape output and the file sink.

/// A typed row that knows its column order.
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_rows<T: TableRow>(rows: &[T]) -> Self {
        Self {
            headers: T::HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
