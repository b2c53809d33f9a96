//! Read the body positions written by a cosmology simulation and plot their trajectories.
//!
//! A trace is a plain text file with one `<body>_<component>=<value>` assignment per line, as in
//!
//! ```text
//! earth_x=149597870700.000000
//! earth_y=0.000000
//! earth_z=0.000000
//! ```
//!
//! Every `x` line starts a new point for its body. The `y` and `z` lines that follow fill in the
//! rest of that point.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec3;
use tracing::{debug, info, warn};

use crate::reader::{parse_record, read_line, Component, Record};
pub use crate::error::{TraceError, TraceResult};
pub use crate::selection::{BodySelection, FrameSelection, Range};

pub mod cli;
pub mod error;
pub mod reader;
pub mod render;
pub mod selection;

/// A position in space. Fields that were never assigned in the trace stay zero.
pub type Point3D = DVec3;

/// The ordered positions recorded for one body. Insertion order is temporal order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trajectory {
    pub points: Vec<Point3D>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3D> + '_ {
        self.points.iter()
    }

    /// The points kept by a [`FrameSelection`], in order.
    pub fn select(&self, frame_selection: &FrameSelection) -> Trajectory {
        Trajectory {
            points: frame_selection.select(&self.points).copied().collect(),
        }
    }

    /// Smallest and largest coordinate over all components of all points.
    ///
    /// Returns [`None`] for an empty trajectory.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| {
            let (lo, hi) = (p.min_element(), p.max_element());
            Some(match acc {
                None => (lo, hi),
                Some((min, max)) => (f64::min(min, lo), f64::max(max, hi)),
            })
        })
    }
}

impl From<Vec<Point3D>> for Trajectory {
    fn from(points: Vec<Point3D>) -> Self {
        Self { points }
    }
}

/// A named body and its trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub trajectory: Trajectory,
}

/// The complete mapping from body name to [`Trajectory`] read from one trace.
///
/// Bodies iterate in the order in which they first appear in the trace.
#[derive(Debug, Default, Clone)]
pub struct TraceSet {
    bodies: Vec<Body>,
    index: HashMap<String, usize>,
}

impl TraceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Trajectory> {
        self.index.get(name).map(|&idx| &self.bodies[idx].trajectory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bodies.iter().map(|body| body.name.as_str())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Total number of points over all bodies.
    pub fn npoints(&self) -> usize {
        self.bodies.iter().map(|body| body.trajectory.len()).sum()
    }

    /// Smallest and largest coordinate over all bodies and components.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        self.bodies
            .iter()
            .filter_map(|body| body.trajectory.extrema())
            .reduce(|(min, max), (lo, hi)| (f64::min(min, lo), f64::max(max, hi)))
    }

    /// A new [`TraceSet`] where every trajectory is reduced to the points in the
    /// [`FrameSelection`].
    pub fn select_frames(&self, frame_selection: &FrameSelection) -> TraceSet {
        TraceSet {
            bodies: self
                .bodies
                .iter()
                .map(|body| Body {
                    name: body.name.clone(),
                    trajectory: body.trajectory.select(frame_selection),
                })
                .collect(),
            index: self.index.clone(),
        }
    }

    /// Returns the index of the body called `name`, inserting an empty one if it is new.
    fn entry(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.bodies.len();
        self.bodies.push(Body {
            name: name.to_string(),
            trajectory: Trajectory::default(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }
}

impl<'t> IntoIterator for &'t TraceSet {
    type Item = &'t Body;
    type IntoIter = std::slice::Iter<'t, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

/// Tracks which point of a body is currently under construction.
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    current: Option<usize>,
}

/// Assembles a [`TraceSet`] from [`Record`]s, one at a time.
///
/// Each body carries its own cursor. An `x` record appends a point and moves the cursor onto
/// it, and `y` and `z` records write into the point under the cursor. A `y` or `z` record for a
/// body without a cursor is an error.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    trace_set: TraceSet,
    // Parallel to `trace_set.bodies`.
    cursors: Vec<Cursor>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a record that was read from `line`.
    pub fn apply(&mut self, record: &Record, line: usize) -> TraceResult<()> {
        let idx = self.trace_set.entry(record.body);
        if idx == self.cursors.len() {
            debug!(body = record.body, line, "found new body");
            self.cursors.push(Cursor::default());
        }
        let cursor = &mut self.cursors[idx];
        let points = &mut self.trace_set.bodies[idx].trajectory.points;

        match record.component {
            Component::X => {
                points.push(DVec3::new(record.value, 0.0, 0.0));
                cursor.current = Some(points.len() - 1);
            }
            component @ (Component::Y | Component::Z) => {
                let current = cursor.current.ok_or_else(|| TraceError::OrphanComponent {
                    line,
                    body: record.body.to_string(),
                    component,
                })?;
                points[current][component.index()] = record.value;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> TraceSet {
        self.trace_set
    }
}

/// Reads a [`TraceSet`] from a line-oriented trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    pub file: R,
    /// Number of lines read so far.
    line: usize,
}

impl TraceReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            file: reader,
            line: 0,
        }
    }

    /// The number of lines that have been read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the whole trace into a [`TraceSet`].
    pub fn read_trace_set(&mut self) -> TraceResult<TraceSet> {
        self.read_trace_set_with_selection(&BodySelection::All)
    }

    /// Reads the whole trace into a [`TraceSet`], keeping only the bodies in the
    /// [`BodySelection`].
    ///
    /// Lines of bodies that are not selected are still checked for syntax errors.
    pub fn read_trace_set_with_selection(
        &mut self,
        body_selection: &BodySelection,
    ) -> TraceResult<TraceSet> {
        let mut builder = TraceBuilder::new();
        let mut buf = String::new();
        while read_line(&mut self.file, &mut buf)? != 0 {
            self.line += 1;
            let Some(record) = parse_record(&buf, self.line)? else {
                continue;
            };
            if body_selection.is_included(record.body) {
                builder.apply(&record, self.line)?;
            }
        }

        let trace_set = builder.finish();
        if let BodySelection::Names(names) = body_selection {
            for name in names.iter().filter(|name| !trace_set.contains(name)) {
                warn!(body = %name, "selected body does not occur in the trace");
            }
        }
        info!(
            bodies = trace_set.len(),
            points = trace_set.npoints(),
            lines = self.line,
            "read trace"
        );
        Ok(trace_set)
    }
}

/// A convenience function to read the trace at `path`.
///
/// The file is closed before this function returns, whether reading succeeded or not.
pub fn read_trace_set<P: AsRef<Path>>(path: P) -> TraceResult<TraceSet> {
    TraceReader::open(path)?.read_trace_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(trace: &str) -> TraceResult<TraceSet> {
        TraceReader::new(trace.as_bytes()).read_trace_set()
    }

    #[test]
    fn single_point() {
        let trace_set = read("earth_x=1.0\nearth_y=2.0\nearth_z=3.0\n").unwrap();
        assert_eq!(trace_set.len(), 1);
        assert_eq!(
            trace_set.get("earth").unwrap().points,
            [DVec3::new(1.0, 2.0, 3.0)]
        );
    }

    #[test]
    fn interleaved_bodies() {
        let trace_set = read("a_x=1\nb_x=2\na_y=5\nb_y=6\na_z=9\nb_z=10\n").unwrap();
        assert_eq!(trace_set.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(
            trace_set.get("a").unwrap().points,
            [DVec3::new(1.0, 5.0, 9.0)]
        );
        assert_eq!(
            trace_set.get("b").unwrap().points,
            [DVec3::new(2.0, 6.0, 10.0)]
        );
    }

    #[test]
    fn x_only_keeps_zero_default() {
        let trace_set = read("comet_x=4.5").unwrap();
        assert_eq!(
            trace_set.get("comet").unwrap().points,
            [DVec3::new(4.5, 0.0, 0.0)]
        );
    }

    #[test]
    fn y_before_x_fails() {
        let err = read("earth_x=1\nmoon_y=2\n").unwrap_err();
        match err {
            TraceError::OrphanComponent {
                line,
                body,
                component,
            } => {
                assert_eq!(line, 2);
                assert_eq!(body, "moon");
                assert_eq!(component, Component::Y);
            }
            other => panic!("expected an orphan component error, found {other:?}"),
        }
    }

    #[test]
    fn z_before_x_fails() {
        let err = read("a_z=1\n").unwrap_err();
        assert!(matches!(
            err,
            TraceError::OrphanComponent { line: 1, ref body, component: Component::Z } if body == "a"
        ));

        // Another body's point does not count.
        let err = read("a_x=1\nb_y=2\nb_z=3\n").unwrap_err();
        assert!(matches!(
            err,
            TraceError::OrphanComponent { line: 2, component: Component::Y, .. }
        ));
    }

    #[test]
    fn cursor_follows_latest_x() {
        // A `z` after the second `x` belongs to the second point, even if the first point never
        // got its own `z`.
        let trace_set = read("a_x=1\na_y=2\na_x=3\na_z=4\n").unwrap();
        assert_eq!(
            trace_set.get("a").unwrap().points,
            [DVec3::new(1.0, 2.0, 0.0), DVec3::new(3.0, 0.0, 4.0)]
        );
    }

    #[test]
    fn later_assignment_wins() {
        let trace_set = read("a_x=1\na_y=2\na_y=3\n").unwrap();
        assert_eq!(trace_set.get("a").unwrap().points[0].y, 3.0);
    }

    #[test]
    fn empty_trace() {
        let trace_set = read("").unwrap();
        assert!(trace_set.is_empty());
        assert_eq!(trace_set.npoints(), 0);
        assert_eq!(trace_set.extrema(), None);
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let mut reader = TraceReader::new("a_x=1\n\n\na_q=1\n".as_bytes());
        let err = reader.read_trace_set().unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn extrema() {
        let trace_set = read("a_x=-3\na_y=2\na_z=1\nb_x=0.5\nb_y=7\nb_z=-1\n").unwrap();
        assert_eq!(trace_set.get("a").unwrap().extrema(), Some((-3.0, 2.0)));
        assert_eq!(trace_set.extrema(), Some((-3.0, 7.0)));
    }

    #[test]
    fn unselected_bodies_are_dropped() {
        let trace = "a_x=1\nb_x=2\na_y=3\nb_y=4\n";
        let selection = BodySelection::from_list("b");
        let trace_set = TraceReader::new(trace.as_bytes())
            .read_trace_set_with_selection(&selection)
            .unwrap();
        assert_eq!(trace_set.names().collect::<Vec<_>>(), ["b"]);
        assert!(!trace_set.contains("a"));
    }

    #[test]
    fn unselected_bodies_are_still_checked() {
        let trace = "a_x=1\nb_x=oops\n";
        let selection = BodySelection::from_list("a");
        let err = TraceReader::new(trace.as_bytes())
            .read_trace_set_with_selection(&selection)
            .unwrap_err();
        assert!(matches!(err, TraceError::MalformedValue { line: 2, .. }));
    }
}
