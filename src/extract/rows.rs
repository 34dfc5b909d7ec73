//! Row normalization: turn raw cells into validated edges.
//!
//! A row missing a source, destination or interface name is ordinary data
//! sparsity and is skipped without error. Direction values are coerced on a
//! best-effort basis and degrade to `None` instead of failing.

use super::columns::ColumnMapping;
use crate::model::{Cell, Edge, InventoryTable};
use tracing::debug;

/// The raw cells of one row, already picked out by column.
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    pub source: &'a Cell,
    pub destination: &'a Cell,
    pub interface_name: &'a Cell,
    pub interface_type: Option<&'a Cell>,
    pub direction: Option<&'a Cell>,
}

/// Text form of a cell, trimmed. Null-equivalent or blank cells give `None`.
pub fn normalize_text(cell: &Cell) -> Option<String> {
    if cell.is_null() {
        return None;
    }
    let text = cell.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce a direction cell to an integer code.
///
/// Numbers (and numeric text such as `"2.0"`) are truncated toward zero. If
/// that fails, every ASCII digit in the text is concatenated and parsed, so
/// `"dir: 2 way"` yields `2`. Anything else is `None`.
pub fn coerce_direction(cell: &Cell) -> Option<i64> {
    if cell.is_null() {
        return None;
    }

    let numeric = match cell {
        Cell::Int(n) => Some(*n),
        Cell::Float(f) => truncate(*f),
        Cell::Bool(b) => Some(i64::from(*b)),
        Cell::Text(s) => s.trim().parse::<f64>().ok().and_then(truncate),
        Cell::Empty | Cell::Error(_) => None,
    };

    numeric.or_else(|| digits_only(&cell.to_string()))
}

fn truncate(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

fn digits_only(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Build an edge from one row, or `None` when a required field is blank.
pub fn normalize_row(fields: RowFields<'_>) -> Option<Edge> {
    let source = normalize_text(fields.source)?;
    let destination = normalize_text(fields.destination)?;
    let interface_name = normalize_text(fields.interface_name)?;

    Some(Edge {
        source,
        destination,
        interface_name,
        interface_type: fields.interface_type.and_then(normalize_text),
        direction: fields.direction.and_then(coerce_direction),
    })
}

/// Walk the table in row order and keep every row that forms a valid edge.
pub fn extract_edges(table: &InventoryTable, mapping: &ColumnMapping) -> Vec<Edge> {
    let lookup = |name: &str| table.column_index(name);

    let (Some(source), Some(destination), Some(interface_name)) = (
        lookup(mapping.source.as_str()),
        lookup(mapping.destination.as_str()),
        lookup(mapping.interface_name.as_str()),
    ) else {
        return Vec::new();
    };
    let interface_type = mapping.interface_type.as_deref().and_then(lookup);
    let direction = mapping.direction.as_deref().and_then(lookup);

    let mut edges = Vec::with_capacity(table.len());
    for (index, row) in table.rows().enumerate() {
        let cells = row.cells();
        let fields = RowFields {
            source: &cells[source],
            destination: &cells[destination],
            interface_name: &cells[interface_name],
            interface_type: interface_type.map(|i| &cells[i]),
            direction: direction.map(|i| &cells[i]),
        };

        match normalize_row(fields) {
            Some(edge) => edges.push(edge),
            None => debug!(row = index + 2, "skipping row with a blank required field"),
        }
    }
    edges
}

/// Keep edges with `focus` as an endpoint (case-insensitive, exact).
/// A blank focus keeps everything.
pub fn filter_focus(edges: &[Edge], focus: Option<&str>) -> Vec<Edge> {
    match focus.map(str::trim).filter(|f| !f.is_empty()) {
        Some(focus) => edges.iter().filter(|e| e.touches(focus)).cloned().collect(),
        None => edges.to_vec(),
    }
}
