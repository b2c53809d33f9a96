use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;

/// A selection of bodies.
#[derive(Debug, Default, Clone)]
pub enum BodySelection {
    /// Include all bodies.
    #[default]
    All,
    /// Include only bodies with one of these exact names.
    ///
    /// Names are compared verbatim, so a generated comet named `" 12"` must be selected with its
    /// leading space.
    Names(Vec<String>),
}

impl BodySelection {
    /// Create a selection from a comma-separated list of names, such as `earth,moon,sun`.
    pub fn from_list(list: &str) -> Self {
        Self::Names(list.split(',').map(str::to_string).collect())
    }

    /// Determine whether the body called `name` is included in this [`BodySelection`].
    pub fn is_included(&self, name: &str) -> bool {
        match self {
            BodySelection::All => true,
            BodySelection::Names(names) => names.iter().any(|n| n == name),
        }
    }
}

/// A selection of recorded points, each of which becomes an animation frame.
#[derive(Debug, Default, Clone)]
pub enum FrameSelection {
    /// Include every recorded point.
    #[default]
    All,
    /// Include points that lie within a certain [`Range`].
    Range(Range),
    /// Include points that match the indices in this list, in any order.
    FrameList(Vec<usize>),
}

impl FrameSelection {
    /// Keep every `step`th point, starting at the first one.
    pub fn every(step: NonZeroU64) -> Self {
        Self::Range(Range::new(None, None, Some(step)))
    }

    /// Determine whether some index `idx` is included in this [`FrameSelection`].
    ///
    /// Will return [`None`] once the index is beyond the scope of this `FrameSelection`.
    pub fn is_included(&self, idx: usize) -> Option<bool> {
        match self {
            FrameSelection::All => Some(true),
            FrameSelection::Range(range) => range.is_included(idx as u64),
            FrameSelection::FrameList(indices) => {
                if *indices.iter().max()? < idx {
                    None
                } else {
                    Some(indices.contains(&idx))
                }
            }
        }
    }

    /// Apply this selection to `items`, yielding the selected ones in order.
    pub fn select<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        items
            .iter()
            .enumerate()
            .map_while(|(idx, item)| self.is_included(idx).map(|included| (included, item)))
            .filter_map(|(included, item)| included.then_some(item))
    }
}

impl FromStr for FrameSelection {
    type Err = ParseIntError;

    /// Parse a selection in the format `start:stop:step`. Each of these values is optional.
    ///
    /// - `:100` selects the first 100 points.
    /// - `3:14` selects the 4th up to and including the 14th points, 11 in total.
    /// - `::5` selects every fifth point.
    fn from_str(selection: &str) -> Result<Self, Self::Err> {
        let mut components = selection.split(':');
        let mut bound = || {
            components
                .next()
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<u64>())
                .transpose()
        };
        let start = bound()?;
        let end = bound()?;
        let step = components
            .next()
            .filter(|s| !s.is_empty())
            .map(NonZeroU64::from_str)
            .transpose()?;
        Ok(FrameSelection::Range(Range::new(start, end, step)))
    }
}

/// A range of points to be turned into frames.
///
/// The `start` of a [`Range`] is always bounded, and is zero by default.
/// The `end` may be bounded or unbounded. In case the end is unbounded ([`None`]), every point up
/// to and including the last one is considered. If it is bounded by [`Some`] value, the points up
/// to that index are considered.
/// The `step` describes the number of points that pass in each stride.
/// The number of skipped points is equal to `step` - 1.
/// For instance, given a `step` of four, one point is kept and the following three are skipped.
///
/// # Note
///
/// An instance where `start` > `end` is a valid `Range`, but it will not make much sense,
/// since it will be understood to produce zero frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The `start` of a [`Range`] is always bounded, and is zero by default.
    pub start: u64,
    /// The `end` may be bounded or unbounded. When it is bounded, it is an exclusive bound.
    pub end: Option<u64>,
    /// The `step` describes the number of points that pass in each stride.
    pub step: NonZeroU64,
}

impl Range {
    pub fn new(start: Option<u64>, end: Option<u64>, step: Option<NonZeroU64>) -> Self {
        let mut sel = Self {
            end,
            ..Self::default()
        };
        if let Some(start) = start {
            sel.start = start;
        }
        if let Some(step) = step {
            sel.step = step;
        }
        sel
    }

    fn is_included(&self, idx: u64) -> Option<bool> {
        if let Some(end) = self.end {
            // Determine whether `idx` is already beyond the defined range.
            if end <= idx {
                return None;
            }
        }
        if idx < self.start {
            return Some(false);
        }
        Some((idx - self.start) % self.step == 0)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
            step: NonZeroU64::MIN,
        }
    }
}
