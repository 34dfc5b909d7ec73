mod edge;
mod table;

pub use edge::{Edge, InterfaceKind, TWO_WAY};
pub use table::{Cell, InventoryTable, Row};
