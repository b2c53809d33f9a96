use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, warn};

use super::error::drawing;
use super::{RenderConfig, RenderError, RenderResult};
use crate::{FrameSelection, TraceSet};

/// What went into an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStats {
    /// Number of frames written.
    pub frames: usize,
    /// Number of bodies drawn.
    pub bodies: usize,
}

/// Draw the full trajectory of every body in `trace_set` into one image at `path`.
///
/// The image format follows the extension of `path`: `.svg` produces a vector image, anything
/// else is handed to the bitmap encoder (PNG for `.png`).
pub fn plot_static(
    trace_set: &TraceSet,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> RenderResult<()> {
    config.validate()?;
    let path = path.as_ref();
    if trace_set.npoints() == 0 {
        warn!("trace contains no points, the plot will only show axes");
    }

    let extent = config.axis.extent(trace_set);
    let colours = config.colours.assign(trace_set.len());

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, config.image_size).into_drawing_area();
        draw_frame(&root, trace_set, &colours, extent, config, None)?;
        root.present().map_err(drawing)?;
    } else {
        let root = BitMapBackend::new(path, config.image_size).into_drawing_area();
        draw_frame(&root, trace_set, &colours, extent, config, None)?;
        root.present().map_err(drawing)?;
    }

    info!(path = %path.display(), bodies = trace_set.len(), extent, "wrote plot");
    Ok(())
}

/// Write an animated GIF to `path` that reveals the trajectory of every body, one frame at a time.
///
/// Each trajectory is first reduced to the points in `frame_selection`. Frame `k` then shows the
/// first `k` of those points for every body, and the animation ends once the longest trajectory
/// is complete. The axis range is derived from the reduced trajectories.
///
/// # Errors
///
/// Returns [`RenderError::EmptyTrace`] if no body has a point left after selection.
pub fn animate(
    trace_set: &TraceSet,
    frame_selection: &FrameSelection,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> RenderResult<AnimationStats> {
    config.validate()?;
    let path = path.as_ref();

    let selected = trace_set.select_frames(frame_selection);
    for body in &selected {
        info!(body = %body.name, points = body.trajectory.len(), "animating body");
    }
    let nframes = selected
        .bodies()
        .iter()
        .map(|body| body.trajectory.len())
        .max()
        .unwrap_or_default();
    if nframes == 0 {
        return Err(RenderError::EmptyTrace);
    }

    let extent = config.axis.extent(&selected);
    let colours = config.colours.assign(selected.len());

    let root = BitMapBackend::gif(path, config.image_size, config.frame_delay_ms)
        .map_err(drawing)?
        .into_drawing_area();
    for frame in 1..=nframes {
        draw_frame(&root, &selected, &colours, extent, config, Some(frame))?;
        root.present().map_err(drawing)?;
        debug!(frame, nframes, "drew frame");
    }

    info!(path = %path.display(), frames = nframes, extent, "wrote animation");
    Ok(AnimationStats {
        frames: nframes,
        bodies: selected.len(),
    })
}

/// Draw one chart onto `root`.
///
/// If `reveal` is [`Some`] value `k`, only the first `k` points of each trajectory are drawn.
fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trace_set: &TraceSet,
    colours: &[RGBColor],
    extent: f64,
    config: &RenderConfig,
    reveal: Option<usize>,
) -> RenderResult<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(drawing)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if let Some(caption) = &config.caption {
        builder.caption(caption, ("sans-serif", 24).into_font());
    }
    let range = -extent..extent;
    let mut chart = builder
        .build_cartesian_3d(range.clone(), range.clone(), range)
        .map_err(drawing)?;
    chart.with_projection(|mut pb| {
        pb.yaw = config.yaw;
        pb.pitch = config.pitch;
        pb.scale = 0.8;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()
        .map_err(drawing)?;

    for (body, &colour) in trace_set.bodies().iter().zip(colours) {
        let points = &body.trajectory.points;
        let shown = reveal.map_or(points.len(), |k| k.min(points.len()));
        let series = chart
            .draw_series(LineSeries::new(
                points[..shown].iter().map(|p| (p.x, p.y, p.z)),
                colour.stroke_width(2),
            ))
            .map_err(drawing)?;
        if config.legend {
            series
                .label(body.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
        }
    }

    if config.legend && !trace_set.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing)?;
    }

    Ok(())
}
