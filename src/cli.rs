//! Pieces shared by the `cosmoplot` and `cosmoplot-anim` binaries.
use std::error::Error;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::render::{AxisPolicy, ColourStrategy, RenderConfig};
use crate::{BodySelection, TraceReader, TraceResult, TraceSet};

/// Install a `tracing` subscriber that writes to standard error.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`, so standard output stays free for
/// `--summary`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse the command line arguments into `P`.
///
/// If an argument is missing or one too many is given, `usage` and the details are printed to
/// standard output and [`None`] is returned, so the caller can skip its work and still exit
/// successfully. Any other problem, as well as a request for help or the version, is handled by
/// clap as usual.
pub fn parse_or_usage<P: Parser>(usage: &str) -> Option<P> {
    match P::try_parse() {
        Ok(args) => Some(args),
        Err(err) if is_argument_count(&err) => {
            println!("{usage}");
            print!("{}", err.render());
            None
        }
        Err(err) => err.exit(),
    }
}

fn is_argument_count(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
    )
}

/// Turn the outcome of a binary's work into its exit code, printing a failure to standard error.
pub fn exit_code(result: Result<(), Box<dyn Error>>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Colours {
    /// Step through the palette in body order.
    #[default]
    Cycle,
    /// Pick from the palette at random. Bodies may share a colour.
    Random,
}

fn size_parser(size: &str) -> Result<(u32, u32), String> {
    let (width, height) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, found '{size}'"))?;
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|err: ParseIntError| err.to_string());
    Ok((parse(width)?, parse(height)?))
}

fn body_selection_parser(selection: &str) -> Result<BodySelection, String> {
    Ok(BodySelection::from_list(selection))
}

/// Options controlling which bodies are read and how they are drawn.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Output path. Defaults to a file in the working directory.
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// How bodies are coloured.
    #[arg(long, value_enum, default_value_t = Colours::Cycle)]
    pub colours: Colours,

    /// Seed for `--colours random`, for a reproducible assignment.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the symmetric axis range is derived.
    ///
    /// `peak-value` uses the largest coordinate value, which clips trajectories that reach
    /// further in the negative direction. `peak-magnitude` uses the largest absolute coordinate.
    #[arg(long, value_enum, default_value_t = AxisPolicy::PeakMagnitude)]
    pub axis: AxisPolicy,

    /// Comma-separated names of the bodies to include, such as `sun,earth,moon`.
    #[arg(short, long, value_parser = body_selection_parser)]
    pub bodies: Option<BodySelection>,

    /// Image size in the format `WIDTHxHEIGHT`.
    #[arg(long, value_parser = size_parser, default_value = "1024x768")]
    pub size: (u32, u32),

    /// Caption drawn above the chart.
    #[arg(long)]
    pub caption: Option<String>,

    /// Leave out the legend.
    #[arg(long)]
    pub no_legend: bool,

    /// Print the number of points per body to standard output instead of drawing.
    ///
    /// Each line holds the body name, the number of points, and the smallest and largest
    /// coordinate, separated by tabs.
    #[arg(long)]
    pub summary: bool,
}

impl RenderArgs {
    /// Read the trace at `path`, restricted to the selected bodies.
    pub fn read(&self, path: &Path) -> TraceResult<TraceSet> {
        let body_selection = self.bodies.clone().unwrap_or_default();
        TraceReader::open(path)?.read_trace_set_with_selection(&body_selection)
    }

    pub fn config(&self) -> RenderConfig {
        let colours = match self.colours {
            Colours::Cycle => ColourStrategy::Cycle,
            Colours::Random => ColourStrategy::Random { seed: self.seed },
        };
        let (width, height) = self.size;
        let mut config = RenderConfig::new()
            .image_size(width, height)
            .colours(colours)
            .axis(self.axis)
            .legend(!self.no_legend);
        if let Some(caption) = &self.caption {
            config = config.caption(caption);
        }
        config
    }
}

/// Write one tab-separated line per body: name, number of points, smallest and largest
/// coordinate.
pub fn write_summary(trace_set: &TraceSet, writer: &mut impl Write) -> io::Result<()> {
    for body in trace_set {
        write!(writer, "{}\t{}", body.name, body.trajectory.len())?;
        if let Some((min, max)) = body.trajectory.extrema() {
            write!(writer, "\t{min}\t{max}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
