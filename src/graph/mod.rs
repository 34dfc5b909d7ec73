mod document;
mod dot;
mod legend;

pub use document::{Connection, GraphDocument};
pub use dot::GRAPH_NAME;
pub use legend::{LEGEND_ID, LEGEND_LABEL, LegendPlacement};
