//! Spreadsheet loading via `calamine`.
//!
//! Only the first worksheet is read. Its first row is the header.

use crate::model::{Cell, InventoryTable};
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Spreadsheet contains no worksheets")]
    NoWorksheet,
}

/// Read the first worksheet of the workbook at `path` into memory.
pub fn load_inventory(path: &Path) -> Result<InventoryTable, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    let table = table_from_rows(range.rows());
    debug!(
        columns = table.columns().len(),
        rows = table.len(),
        "loaded inventory from {}",
        path.display()
    );
    Ok(table)
}

/// Build a table from raw sheet rows. The first row names the columns.
pub fn table_from_rows<'a, I>(rows: I) -> InventoryTable
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return InventoryTable::default();
    };

    let columns = header_names(header);
    let body = rows
        .map(|row| row.iter().map(to_cell).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.is_null()))
        .collect();

    InventoryTable::new(columns, body)
}

/// Header text for each column. Blank headers become `Unnamed: <index>` and
/// repeated names get a `.1`, `.2`, ... suffix so every column stays addressable.
fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(idx, data)| {
            let name = to_cell(data).to_string();
            let name = if name.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name
            };

            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            unique
        })
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_table_from_rows() {
        let rows = vec![
            vec![text("From_App"), text("To_App"), text("Interface_Name"), text("Direction")],
            vec![text("ERP"), text("CRM"), text("Orders"), Data::Float(2.0)],
            vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            vec![text("CRM"), text("BI"), text("Leads"), Data::Int(1)],
        ];

        let table = table_from_rows(rows.iter().map(Vec::as_slice));

        assert_eq!(table.columns(), ["From_App", "To_App", "Interface_Name", "Direction"]);
        assert_eq!(table.len(), 2);

        let first = table.rows().next().unwrap();
        assert_eq!(first.cells()[0], Cell::from("ERP"));
        assert_eq!(first.cells()[3], Cell::Float(2.0));
    }

    #[test]
    fn test_header_names_fill_blanks_and_dedupe() {
        let header = vec![text("Name"), Data::Empty, text("Name"), text("  "), text("Name")];
        assert_eq!(
            header_names(&header),
            vec!["Name", "Unnamed: 1", "Name.1", "Unnamed: 3", "Name.2"]
        );
    }

    #[test]
    fn test_empty_sheet_gives_empty_table() {
        let rows: Vec<Vec<Data>> = Vec::new();
        let table = table_from_rows(rows.iter().map(Vec::as_slice));
        assert!(table.columns().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_error_cells_are_null() {
        assert!(to_cell(&Data::Error(calamine::CellErrorType::NA)).is_null());
    }

    #[test]
    fn test_unreadable_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.xlsx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();

        assert!(matches!(load_inventory(&path), Err(LoadError::Workbook(_))));
    }
}
