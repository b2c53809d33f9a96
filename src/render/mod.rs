//! Trajectory renderer
//!
//! Draws a [`TraceSet`](crate::TraceSet) as 3D polylines through plotters, either as
//!
//! - **a static plot**: every body's full trajectory in one image (PNG, or SVG by extension), or
//! - **an animation**: an animated GIF that reveals each body's trajectory one frame at a time.
//!
//! All three axes share one symmetric range, derived from the trace by an [`AxisPolicy`].
//!
//! # Example
//!
//! ```no_run
//! use cosmoplot::render::{plot_static, RenderConfig};
//!
//! let trace_set = cosmoplot::read_trace_set("output.txt")?;
//! plot_static(&trace_set, &RenderConfig::default(), "trace.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod axis;
mod chart;
mod error;
mod palette;

pub use axis::{AxisPolicy, FALLBACK_EXTENT};
pub use chart::{animate, plot_static, AnimationStats};
pub use error::{RenderError, RenderResult};
pub use palette::{ColourStrategy, PALETTE};

/// Renderer configuration.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
    /// How bodies are coloured.
    pub colours: ColourStrategy,
    /// How the shared axis range is derived.
    pub axis: AxisPolicy,
    /// Time each animation frame is shown, in milliseconds.
    pub frame_delay_ms: u32,
    /// Optional caption drawn above the chart.
    pub caption: Option<String>,
    /// Draw a legend with the body names.
    pub legend: bool,
    /// Rotation of the view around the vertical axis, in radians.
    pub yaw: f64,
    /// Tilt of the view, in radians.
    pub pitch: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: (1024, 768),
            colours: ColourStrategy::default(),
            axis: AxisPolicy::default(),
            frame_delay_ms: 20,
            caption: None,
            legend: true,
            yaw: 0.5,
            pitch: 0.3,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image dimensions.
    pub fn image_size(mut self, width: u32, height: u32) -> Self {
        self.image_size = (width, height);
        self
    }

    /// Set the colour strategy.
    pub fn colours(mut self, colours: ColourStrategy) -> Self {
        self.colours = colours;
        self
    }

    /// Set the axis policy.
    pub fn axis(mut self, axis: AxisPolicy) -> Self {
        self.axis = axis;
        self
    }

    /// Set the animation frame delay.
    pub fn frame_delay_ms(mut self, delay: u32) -> Self {
        self.frame_delay_ms = delay;
        self
    }

    /// Set the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Enable or disable the legend.
    pub fn legend(mut self, enable: bool) -> Self {
        self.legend = enable;
        self
    }

    /// Set the view angles.
    pub fn view(mut self, yaw: f64, pitch: f64) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Check that an image can be produced with this configuration.
    pub fn validate(&self) -> RenderResult<()> {
        let (width, height) = self.image_size;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {width}x{height}"
            )));
        }
        if !(self.yaw.is_finite() && self.pitch.is_finite()) {
            return Err(RenderError::InvalidConfig(
                "view angles must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = RenderConfig::new()
            .image_size(640, 480)
            .colours(ColourStrategy::Random { seed: Some(3) })
            .axis(AxisPolicy::PeakValue)
            .frame_delay_ms(100)
            .caption("solar system")
            .legend(false)
            .view(0.1, 0.2);
        assert_eq!(config.image_size, (640, 480));
        assert_eq!(config.colours, ColourStrategy::Random { seed: Some(3) });
        assert_eq!(config.axis, AxisPolicy::PeakValue);
        assert_eq!(config.frame_delay_ms, 100);
        assert_eq!(config.caption.as_deref(), Some("solar system"));
        assert!(!config.legend);
        assert_eq!((config.yaw, config.pitch), (0.1, 0.2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_size() {
        let config = RenderConfig::new().image_size(0, 480);
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidConfig(_))
        ));
    }
}
