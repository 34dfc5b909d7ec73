mod graphviz;

pub use graphviz::{Graphviz, ImageFormat, RenderError};

use crate::fs::FileSystem;
use crate::graph::GraphDocument;
use std::io;
use std::path::{Path, PathBuf};

/// Base file name for a run: `architecture` or `architecture_<focus>`.
pub fn base_name(focus: Option<&str>) -> String {
    match focus.map(str::trim).filter(|f| !f.is_empty()) {
        Some(focus) => format!("architecture_{}", focus.replace(' ', "_")),
        None => "architecture".to_string(),
    }
}

/// Paths of every artifact a run may produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub dir: PathBuf,
    pub dot: PathBuf,
    pub svg: PathBuf,
    pub png: PathBuf,
}

impl Artifacts {
    pub fn new(dir: &Path, focus: Option<&str>) -> Self {
        let base = base_name(focus);
        Self {
            dir: dir.to_path_buf(),
            dot: dir.join(format!("{}.dot", base)),
            svg: dir.join(format!("{}.{}", base, ImageFormat::Svg)),
            png: dir.join(format!("{}.{}", base, ImageFormat::Png)),
        }
    }

    pub fn image(&self, format: ImageFormat) -> &Path {
        match format {
            ImageFormat::Svg => &self.svg,
            ImageFormat::Png => &self.png,
        }
    }
}

/// Create the output directory and write the DOT description into it.
pub fn write_dot(document: &GraphDocument, artifacts: &Artifacts, fs: &dyn FileSystem) -> io::Result<()> {
    fs.create_dir_all(&artifacts.dir)?;
    fs.write(&artifacts.dot, &document.to_dot())
}
