//! Plot the trajectories in a cosmology simulation trace.
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cosmoplot::cli::{exit_code, init_logging, parse_or_usage, write_summary, RenderArgs};
use cosmoplot::render::plot_static;

const USAGE: &str = "Error: Must provide cosmology output file as command line argument";
const DEFAULT_OUTPUT: &str = "trace.png";

/// Draw the trajectory of every body in a simulation trace into a single image.
///
/// The trace holds one `<body>_<component>=<value>` assignment per line, for the components
/// `x`, `y` and `z`.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input path (simulation trace).
    input: PathBuf,

    #[command(flatten)]
    render: RenderArgs,
}

fn main() -> ExitCode {
    init_logging();
    match parse_or_usage::<Args>(USAGE) {
        Some(args) => exit_code(run(args)),
        None => ExitCode::SUCCESS,
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let trace_set = args.render.read(&args.input)?;
    if args.render.summary {
        write_summary(&trace_set, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let output = args
        .render
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    plot_static(&trace_set, &args.render.config(), output)?;
    Ok(())
}
