use crate::api::{self, EXIT_OK, GenerateOutcome, GenerateReport, IfacemapError};
use crate::cli::Cli;
use crate::extract::UnresolvedColumns;
use crate::fs::default_fs;
use crate::output::{Graphviz, ImageFormat};
use crate::style;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use super::CommandContext;

pub fn cmd_generate(cli: Cli) -> i32 {
    let ctx = CommandContext::new(&cli, Path::new("."), default_fs());

    match api::generate(&ctx.options) {
        Ok(GenerateOutcome::NoEdges) => {
            style::status("No valid edges found in the spreadsheet.");
            if let Some(focus) = ctx.options.focus() {
                style::hint(&format!("No interface has '{}' as source or destination", focus));
            }
            EXIT_OK
        }
        Ok(GenerateOutcome::Written(report)) => {
            print_report(&report);
            EXIT_OK
        }
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    }
}

fn print_report(report: &GenerateReport) {
    let artifacts = &report.artifacts;
    style::success(&format!("Wrote DOT file to: {}", style::path(&artifacts.dot)));
    println!("{}", style::metric("applications", report.node_count));
    println!("{}", style::metric("interfaces", report.edge_count));

    match &report.svg {
        None => style::status("Rendering skipped (--no-render)"),
        Some(Ok(())) => style::success(&format!("Rendered SVG to: {}", style::path(&artifacts.svg))),
        Some(Err(e)) => {
            style::warning(&format!("Rendering failed: {}", e));
            style::hint("You still have the DOT file and can render it with the 'dot' tool:");
            style::hint(&Graphviz::default().manual_command(
                &artifacts.dot,
                ImageFormat::Svg,
                artifacts.image(ImageFormat::Svg),
            ));
        }
    }

    // PNG is a bonus; its failure was already logged at debug level.
    if let Some(Ok(())) = &report.png {
        style::success(&format!("Rendered PNG to: {}", style::path(&artifacts.png)));
    }
}

fn print_error(error: &IfacemapError) {
    match error {
        IfacemapError::UnresolvedColumns(unresolved) => {
            // Nothing useful to do if stderr itself is gone.
            let _ = write_unresolved(&mut io::stderr().lock(), unresolved);
        }
        IfacemapError::MissingInputFile(path) => {
            style::error(&format!("Excel file not found at {}", style::path(path)));
        }
        other => style::error(&other.to_string()),
    }
}

/// The whole unresolved-columns diagnostic, written to one stream.
fn write_unresolved(out: &mut dyn Write, unresolved: &UnresolvedColumns) -> io::Result<()> {
    writeln!(
        out,
        "{} Could not locate required columns. Found:",
        "error:".red().bold()
    )?;
    for (field, found) in unresolved.fields() {
        writeln!(out, "  {}: {}", field, found.unwrap_or("<not found>"))?;
    }
    writeln!(out, "\n{}", "Columns present in the sheet:".bold())?;
    for column in &unresolved.available {
        writeln!(out, "  - {}", column)?;
    }
    Ok(())
}
