//! Library API for ifacemap.
//!
//! The CLI prints messages and returns exit codes; these functions return
//! `Result`s and reports so the pipeline can be driven from other code.
//!
//! # Example
//!
//! ```no_run
//! use ifacemap::{GenerateOptions, GenerateOutcome, generate};
//!
//! let options = GenerateOptions {
//!     focus: Some("CRM".to_string()),
//!     ..Default::default()
//! };
//! match generate(&options)? {
//!     GenerateOutcome::Written(report) => println!("wrote {}", report.artifacts.dot.display()),
//!     GenerateOutcome::NoEdges => println!("nothing to draw"),
//! }
//! # Ok::<(), ifacemap::IfacemapError>(())
//! ```

use crate::config::{ColumnCandidates, Config};
use crate::extract::{self, ColumnMapping, UnresolvedColumns};
use crate::fs::{FileSystem, default_fs};
use crate::graph::GraphDocument;
use crate::loader::{self, LoadError};
use crate::model::{Edge, InventoryTable};
use crate::output::{self, Artifacts, Graphviz, ImageFormat, RenderError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_MISSING_INPUT: i32 = 2;
pub const EXIT_UNRESOLVED_COLUMNS: i32 = 3;

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum IfacemapError {
    /// The inventory spreadsheet does not exist.
    #[error("Excel file not found at {}", .0.display())]
    MissingInputFile(PathBuf),

    /// The spreadsheet exists but could not be parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A required column could not be matched to any header.
    #[error(transparent)]
    UnresolvedColumns(#[from] UnresolvedColumns),

    /// Writing the DOT description failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl IfacemapError {
    /// Stable process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            IfacemapError::MissingInputFile(_) => EXIT_MISSING_INPUT,
            IfacemapError::UnresolvedColumns(_) => EXIT_UNRESOLVED_COLUMNS,
            IfacemapError::Load(_) | IfacemapError::Io(_) => EXIT_FAILURE,
        }
    }
}

/// Options for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Inventory spreadsheet to read.
    pub input: PathBuf,

    /// Directory receiving the DOT file and images.
    pub output_dir: PathBuf,

    /// Restrict the map to interfaces touching this application.
    pub focus: Option<String>,

    /// Header candidates for each logical column.
    pub columns: ColumnCandidates,

    /// Ask Graphviz for SVG and PNG images after writing the DOT file.
    pub render: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            input: config.paths.input.clone(),
            output_dir: config.paths.output_dir.clone(),
            focus: None,
            columns: config.columns.clone(),
            render: true,
        }
    }

    /// The focus name, trimmed, or `None` when blank.
    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// No row survived normalization and filtering; nothing was written.
    NoEdges,
    Written(GenerateReport),
}

#[derive(Debug)]
pub struct GenerateReport {
    pub artifacts: Artifacts,
    pub mapping: ColumnMapping,
    pub node_count: usize,
    pub edge_count: usize,
    /// `None` when rendering was disabled.
    pub svg: Option<Result<(), RenderError>>,
    /// `None` when rendering was disabled.
    pub png: Option<Result<(), RenderError>>,
}

/// Run the whole pipeline against the real filesystem and Graphviz.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, IfacemapError> {
    let fs = default_fs();
    if !fs.exists(&options.input) {
        return Err(IfacemapError::MissingInputFile(options.input.clone()));
    }

    let table = loader::load_inventory(&options.input)?;
    generate_from_table(&table, options, fs, &Graphviz::default())
}

/// Run everything after loading: resolve, normalize, filter, emit.
pub fn generate_from_table(
    table: &InventoryTable,
    options: &GenerateOptions,
    fs: &dyn FileSystem,
    graphviz: &Graphviz,
) -> Result<GenerateOutcome, IfacemapError> {
    let (mapping, edges) = collect_edges(table, &options.columns, options.focus())?;

    if edges.is_empty() {
        info!("no valid edges, nothing to write");
        return Ok(GenerateOutcome::NoEdges);
    }

    let document = GraphDocument::from_edges(&edges);
    let artifacts = Artifacts::new(&options.output_dir, options.focus());
    output::write_dot(&document, &artifacts, fs)?;
    info!(
        nodes = document.node_count(),
        edges = document.connection_count(),
        "wrote {}",
        artifacts.dot.display()
    );

    let (svg, png) = if options.render {
        let svg = graphviz.render(&artifacts.dot, ImageFormat::Svg, &artifacts.svg);
        let png = graphviz.render(&artifacts.dot, ImageFormat::Png, &artifacts.png);
        if let Err(e) = &png {
            debug!("png render skipped: {}", e);
        }
        (Some(svg), Some(png))
    } else {
        (None, None)
    };

    Ok(GenerateOutcome::Written(GenerateReport {
        artifacts,
        mapping,
        node_count: document.node_count(),
        edge_count: document.connection_count(),
        svg,
        png,
    }))
}

/// Resolve columns and turn the table into the final, focus-filtered edge list.
pub fn collect_edges(
    table: &InventoryTable,
    columns: &ColumnCandidates,
    focus: Option<&str>,
) -> Result<(ColumnMapping, Vec<Edge>), UnresolvedColumns> {
    let mapping = extract::resolve_columns(table.columns(), columns)?;
    debug!(%mapping, "resolved columns");

    let edges = extract::extract_edges(table, &mapping);
    debug!(rows = table.len(), edges = edges.len(), "normalized rows");

    let edges = match focus {
        Some(_) => extract::filter_focus(&edges, focus),
        None => edges,
    };
    Ok((mapping, edges))
}
