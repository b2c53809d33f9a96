//! Colour assignment for bodies.

use plotters::style::{RGBColor, BLUE, CYAN, GREEN, MAGENTA, RED, YELLOW};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The colours bodies are drawn in.
pub const PALETTE: [RGBColor; 6] = [RED, BLUE, GREEN, YELLOW, MAGENTA, CYAN];

/// How bodies are assigned a colour from the [`PALETTE`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColourStrategy {
    /// Body `i` gets palette entry `i % PALETTE.len()`.
    #[default]
    Cycle,
    /// Every body draws a colour uniformly from the palette, with replacement.
    ///
    /// Two bodies may end up sharing a colour. Given a `seed`, the assignment is reproducible.
    Random { seed: Option<u64> },
}

impl ColourStrategy {
    /// Assign colours to `n` bodies, in body order.
    pub fn assign(&self, n: usize) -> Vec<RGBColor> {
        match *self {
            ColourStrategy::Cycle => PALETTE.iter().copied().cycle().take(n).collect(),
            ColourStrategy::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                (0..n)
                    .map(|_| PALETTE[rng.random_range(0..PALETTE.len())])
                    .collect()
            }
        }
    }
}
