pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod extract;
pub mod fs;
pub mod graph;
pub mod loader;
pub mod model;
pub mod output;
pub mod style;

pub use api::{
    EXIT_FAILURE, EXIT_MISSING_INPUT, EXIT_OK, EXIT_UNRESOLVED_COLUMNS, GenerateOptions,
    GenerateOutcome, GenerateReport, IfacemapError, collect_edges, generate, generate_from_table,
};
pub use cli::Cli;
pub use commands::cmd_generate;
pub use config::Config;
pub use graph::GraphDocument;
pub use model::{Cell, Edge, InventoryTable};
