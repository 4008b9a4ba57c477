use crate::field::Field;

/// Default fill probability of [`SeedPattern::Random`].
pub const DEFAULT_FILL_RATE: f64 = 0.1;

/// Cell offsets of the runner shape relative to its anchor.
const RUNNER_CELLS: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Initial cell configuration, applied to interior cells only.
///
/// Halo cells are never seeded; they stay dead until the first
/// boundary update.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedPattern {
    /// Every interior cell becomes alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated),
    /// equal seeds reproduce the same fill.
    Random { fill_rate: f64, seed: Option<u64> },
    /// Five-cell asymmetric glider anchored at `(width / 3, height / 2)`.
    ///
    /// The shape is deliberately not symmetric, so its drift across
    /// the grid is observable from one generation to the next.
    Runner,
}

impl SeedPattern {
    pub fn apply(&self, field: &mut Field) {
        match self {
            Self::Random { fill_rate, seed } => {
                use rand::{Rng, SeedableRng};
                use rand_chacha::ChaCha8Rng;

                let mut rng = if let Some(x) = seed {
                    ChaCha8Rng::seed_from_u64(*x)
                } else {
                    ChaCha8Rng::from_entropy()
                };
                for y in 1..field.height() - 1 {
                    for x in 1..field.width() - 1 {
                        field.set(x, y, rng.gen_bool(*fill_rate));
                    }
                }
            }
            Self::Runner => {
                let (offset_x, offset_y) = (field.width() / 3, field.height() / 2);
                for (dx, dy) in RUNNER_CELLS {
                    field.set(offset_x + dx, offset_y + dy, true);
                }
            }
        }
    }
}

impl Default for SeedPattern {
    fn default() -> Self {
        Self::Runner
    }
}
