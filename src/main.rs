use clap::Parser;
use ifacemap::{Cli, cmd_generate};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // Diagnostics go to stderr so stdout stays the user-facing report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    std::process::exit(cmd_generate(cli));
}
