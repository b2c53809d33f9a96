//! Animate the trajectories in a cosmology simulation trace.
use std::error::Error;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cosmoplot::cli::{exit_code, init_logging, parse_or_usage, write_summary, RenderArgs};
use cosmoplot::render::animate;
use cosmoplot::FrameSelection;

const USAGE: &str = "Error: Must provide cosmology output file and frame step size (in number of frames) as command line arguments";
const DEFAULT_OUTPUT: &str = "trace.gif";

/// Write an animated GIF that traces out the trajectory of every body in a simulation trace.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input path (simulation trace).
    input: PathBuf,

    /// Keep every `frame_step`th recorded point as one frame.
    frame_step: NonZeroU64,

    /// Point selection in the format `start:stop:step`, replacing `frame_step`. Each of these
    /// values is optional.
    ///
    /// - `:1000` animates the first 1000 points.
    ///
    /// - `500::10` animates every tenth point, starting at the 501st.
    #[arg(long)]
    frames: Option<FrameSelection>,

    /// Time each frame is shown, in milliseconds.
    #[arg(long, default_value_t = 20)]
    delay: u32,

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
    let frame_selection = args
        .frames
        .unwrap_or_else(|| FrameSelection::every(args.frame_step));
    if args.render.summary {
        let selected = trace_set.select_frames(&frame_selection);
        write_summary(&selected, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let output = args
        .render
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let config = args.render.config().frame_delay_ms(args.delay);
    let stats = animate(&trace_set, &frame_selection, &config, &output)?;
    println!(
        "{} frames of {} bodies written to {}",
        stats.frames,
        stats.bodies,
        output.display()
    );
    Ok(())
}
