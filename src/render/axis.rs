use crate::TraceSet;

/// The half-width used for every axis when the trace gives no usable extent.
pub const FALLBACK_EXTENT: f64 = 1.0;

/// How the shared symmetric axis range `[-r, r]` is derived from a trace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AxisPolicy {
    /// `r` is the largest absolute coordinate, so every point is in view.
    #[default]
    PeakMagnitude,
    /// `r` is the largest coordinate value, and never negative.
    ///
    /// Trajectories that reach further in the negative direction than in the positive one are
    /// clipped.
    PeakValue,
}

impl AxisPolicy {
    /// The half-width `r` of the axis range for this `trace_set`.
    ///
    /// Falls back to [`FALLBACK_EXTENT`] when `r` would be zero or not finite.
    pub fn extent(&self, trace_set: &TraceSet) -> f64 {
        let r = match (self, trace_set.extrema()) {
            (_, None) => 0.0,
            (AxisPolicy::PeakMagnitude, Some((min, max))) => f64::max(min.abs(), max.abs()),
            (AxisPolicy::PeakValue, Some((_, max))) => f64::max(max, 0.0),
        };
        if r > 0.0 && r.is_finite() {
            r
        } else {
            FALLBACK_EXTENT
        }
    }
}
