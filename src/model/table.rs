use std::fmt;

/// A raw spreadsheet value, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Spreadsheet error cell such as `#N/A` or `#REF!`
    Error(String),
}

/// Text that spreadsheet exports use as a stand-in for "no value".
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl Cell {
    /// Empty cells, error cells, NaN floats and NA marker text carry no value.
    /// Markers match exactly after trimming.
    pub fn is_null(&self) -> bool {
        match self {
            Cell::Empty | Cell::Error(_) => true,
            Cell::Float(f) => f.is_nan(),
            Cell::Text(s) => NA_MARKERS.contains(&s.trim()),
            Cell::Int(_) | Cell::Bool(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Int(n)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Error(s) => write!(f, "{}", s),
            Cell::Int(n) => write!(f, "{}", n),
            // Whole numbers read back from a sheet print without the ".0"
            Cell::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                write!(f, "{}", *x as i64)
            }
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(true) => write!(f, "True"),
            Cell::Bool(false) => write!(f, "False"),
        }
    }
}

/// The first worksheet of an inventory, fully materialized.
///
/// Rows are stored positionally against `columns`; use [`InventoryTable::column_index`]
/// to find a column by name.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl InventoryTable {
    /// Build a table from a header and its rows. Short rows are padded with
    /// [`Cell::Empty`], long rows are cut to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { cells })
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_padded_to_header_width() {
        let table = InventoryTable::new(
            vec!["From".into(), "To".into(), "Interface".into()],
            vec![vec!["A".into()], vec!["A".into(), "B".into(), "X".into(), "extra".into()]],
        );

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].cells(), &[Cell::from("A"), Cell::Empty, Cell::Empty]);
        assert_eq!(rows[1].cells(), &[Cell::from("A"), Cell::from("B"), Cell::from("X")]);
    }

    #[test]
    fn test_null_cells() {
        assert!(Cell::Empty.is_null());
        assert!(Cell::Error("#N/A".into()).is_null());
        assert!(Cell::Float(f64::NAN).is_null());
        assert!(Cell::Text(String::new()).is_null());
        assert!(!Cell::Int(0).is_null());
    }

    #[test]
    fn test_na_marker_text_is_null() {
        for marker in ["N/A", "n/a", "NA", "#N/A", "NULL", "null", "NaN", "nan", "None", "<NA>"] {
            assert!(Cell::from(marker).is_null(), "{:?}", marker);
        }
        assert!(Cell::from(" N/A ").is_null());
        assert!(!Cell::from("NAS").is_null());
        assert!(!Cell::from("none").is_null());
        assert!(!Cell::from("Nanny").is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Float(101.0).to_string(), "101");
        assert_eq!(Cell::Float(2.5).to_string(), "2.5");
        assert_eq!(Cell::Int(-3).to_string(), "-3");
        assert_eq!(Cell::Bool(true).to_string(), "True");
        assert_eq!(Cell::Empty.to_string(), "");
    }
}
