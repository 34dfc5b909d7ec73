use crate::fs::FileSystem;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = ".ifacemap.toml";
pub const DEFAULT_INPUT: &str = "Input/Application_Inventory.xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "Output/Diagrams";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub paths: Paths,
    pub columns: ColumnCandidates,
}

#[derive(Debug, Clone)]
pub struct Paths {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

/// Priority-ordered header substrings for each logical field.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCandidates {
    pub source: Vec<String>,
    pub destination: Vec<String>,
    pub interface_name: Vec<String>,
    pub interface_type: Vec<String>,
    pub direction: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    paths: Option<RawPaths>,
    columns: Option<RawColumns>,
}

#[derive(Debug, Deserialize)]
struct RawPaths {
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawColumns {
    source: Option<Vec<String>>,
    destination: Option<Vec<String>>,
    interface_name: Option<Vec<String>>,
    interface_type: Option<Vec<String>>,
    direction: Option<Vec<String>>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Default for ColumnCandidates {
    fn default() -> Self {
        Self {
            source: strings(&["from_app", "from-app", "from", "from app", "source"]),
            destination: strings(&["to_app", "to-app", "to", "to app", "dest"]),
            interface_name: strings(&[
                "interface_name",
                "interface-name",
                "interface",
                "interface name",
                "if_name",
                "if name",
            ]),
            interface_type: strings(&[
                "int_type",
                "int-type",
                "interface_type",
                "interface-type",
                "int type",
                "interface type",
            ]),
            direction: strings(&["direction", "dir"]),
        }
    }
}

impl Config {
    /// Load `.ifacemap.toml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);

        if !fs.exists(&config_path) {
            return Ok(Self::default());
        }

        let content = fs.read_to_string(&config_path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;

        let paths = match raw.paths {
            Some(p) => {
                let defaults = Paths::default();
                Paths {
                    input: p.input.unwrap_or(defaults.input),
                    output_dir: p.output_dir.unwrap_or(defaults.output_dir),
                }
            }
            None => Paths::default(),
        };

        let columns = match raw.columns {
            Some(c) => {
                let defaults = ColumnCandidates::default();
                ColumnCandidates {
                    source: lowered(c.source).unwrap_or(defaults.source),
                    destination: lowered(c.destination).unwrap_or(defaults.destination),
                    interface_name: lowered(c.interface_name).unwrap_or(defaults.interface_name),
                    interface_type: lowered(c.interface_type).unwrap_or(defaults.interface_type),
                    direction: lowered(c.direction).unwrap_or(defaults.direction),
                }
            }
            None => ColumnCandidates::default(),
        };

        Ok(Self { paths, columns })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Headers are compared lowercased, so candidates must be too.
fn lowered(items: Option<Vec<String>>) -> Option<Vec<String>> {
    items.map(|v| v.into_iter().map(|s| s.trim().to_lowercase()).collect())
}
