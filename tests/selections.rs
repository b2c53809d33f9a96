use std::num::NonZeroU64;

use cosmoplot::selection::{FrameSelection as FS, Range};
use cosmoplot::{read_trace_set, TraceError, TraceSet};

mod common;
use common::{traces, SOLAR_BODIES, SOLAR_STEPS};

const PATH: &str = traces::SOLAR;

/// Select frames from the solar trace and return the number of points left for every body.
fn count_frames(trace_set: &TraceSet, frame_selection: FS) -> Vec<usize> {
    trace_set
        .select_frames(&frame_selection)
        .bodies()
        .iter()
        .map(|body| body.trajectory.len())
        .collect()
}

/// Select frames according to some [`FrameSelection`] and assert that every body keeps
/// `expected` points.
macro_rules! assert_frames {
    ($frame_selection:expr => $expected:expr) => {{
        let trace_set = read_trace_set(PATH)?;
        assert_eq!(
            count_frames(&trace_set, $frame_selection),
            [$expected; SOLAR_BODIES.len()]
        );
        Ok(())
    }};
}

fn step(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

mod frame_selection {
    use super::*;

    const NFRAMES: usize = SOLAR_STEPS;

    #[test]
    fn all_frames() -> Result<(), TraceError> {
        assert_frames!(FS::All => NFRAMES)
    }

    #[test]
    fn every_frame() -> Result<(), TraceError> {
        assert_frames!(FS::every(step(1)) => NFRAMES)
    }

    #[test]
    fn every_second() -> Result<(), TraceError> {
        assert_frames!(FS::every(step(2)) => 6)
    }

    /// 12 points with a step of 5 keep indices 0, 5 and 10.
    #[test]
    fn every_fifth_rounds_up() -> Result<(), TraceError> {
        assert_frames!(FS::every(step(5)) => 3)
    }

    #[test]
    fn step_larger_than_trace() -> Result<(), TraceError> {
        assert_frames!(FS::every(step(1000)) => 1)
    }

    #[test]
    fn first_four() -> Result<(), TraceError> {
        assert_frames!(FS::Range(Range::new(None, Some(4), None)) => 4)
    }

    #[test]
    fn from_four() -> Result<(), TraceError> {
        assert_frames!(FS::Range(Range::new(Some(4), None, None)) => NFRAMES - 4)
    }

    #[test]
    fn from_four_stepped() -> Result<(), TraceError> {
        // 4, 7 and 10.
        assert_frames!(FS::Range(Range::new(Some(4), None, Some(step(3)))) => 3)
    }

    #[test]
    fn beyond_the_end() -> Result<(), TraceError> {
        assert_frames!(FS::Range(Range::new(Some(100), None, None)) => 0)
    }

    #[test]
    fn list() -> Result<(), TraceError> {
        assert_frames!(FS::FrameList(vec![0, 3, 11, 50]) => 3)
    }

    #[test]
    fn parsed() -> Result<(), TraceError> {
        let selection: FS = "2:10:4".parse().unwrap();
        // 2 and 6.
        assert_frames!(selection => 2)
    }
}

#[test]
fn kept_points_are_the_stepped_ones() -> Result<(), TraceError> {
    let trace_set = read_trace_set(PATH)?;
    let earth = trace_set.get("earth").unwrap();
    let selected = trace_set.select_frames(&FS::every(step(4)));
    let kept = selected.get("earth").unwrap();
    assert_eq!(kept.points, [earth.points[0], earth.points[4], earth.points[8]]);
    Ok(())
}

#[test]
fn selection_keeps_body_order() -> Result<(), TraceError> {
    let trace_set = read_trace_set(PATH)?;
    let selected = trace_set.select_frames(&FS::every(step(3)));
    assert!(selected.names().eq(trace_set.names()));
    assert!(selected.contains("moon"));
    Ok(())
}
