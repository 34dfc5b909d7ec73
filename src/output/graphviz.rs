//! Image rendering through the Graphviz `dot` executable.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not run `{program}` (is Graphviz installed?): {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("render finished but {} was not written", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Handle to a Graphviz layout program.
#[derive(Debug, Clone)]
pub struct Graphviz {
    program: String,
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl Graphviz {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Render the DOT file at `source` into `output`.
    pub fn render(&self, source: &Path, format: ImageFormat, output: &Path) -> Result<(), RenderError> {
        debug!(program = %self.program, %format, "rendering {}", output.display());

        let result = Command::new(&self.program)
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(output)
            .arg(source)
            .output()
            .map_err(|err| RenderError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if !output.exists() {
            return Err(RenderError::Missing(output.to_path_buf()));
        }

        Ok(())
    }

    /// The command a user can run by hand to produce the same image.
    pub fn manual_command(&self, source: &Path, format: ImageFormat, output: &Path) -> String {
        format!(
            "{} -T{} -o {} {}",
            self.program,
            format,
            output.display(),
            source.display()
        )
    }
}
