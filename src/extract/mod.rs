//! Everything between a loaded table and the final edge list.

mod columns;
mod rows;

pub use columns::{ColumnMapping, UnresolvedColumns, find_column, resolve_columns};
pub use rows::{RowFields, coerce_direction, extract_edges, filter_focus, normalize_row, normalize_text};
