use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ifacemap")]
#[command(about = "Render a system-to-system interface map from an application inventory")]
#[command(version)]
pub struct Cli {
    /// Only show interfaces where this application is source or destination (case-insensitive)
    #[arg(long)]
    pub focus: Option<String>,

    /// Inventory spreadsheet (defaults to Input/Application_Inventory.xlsx)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory for generated diagrams (defaults to Output/Diagrams)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write the DOT file only, without invoking Graphviz
    #[arg(long)]
    pub no_render: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
