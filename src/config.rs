use crate::seed::SeedPattern;

/// Interior edge length used when the caller supplies a non-positive
/// dimension.
pub const DEFAULT_INTERIOR: usize = 32;

/// Run parameters for a [`Simulation`](crate::Simulation).
///
/// `width` and `height` are the full grid dimensions including the
/// one-cell halo on each side.
#[derive(Clone, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub steps: u64,
    pub pattern: SeedPattern,
}

impl Config {
    /// Build a config from caller-facing interior dimensions and a
    /// possibly negative timestep count.
    ///
    /// Non-positive dimensions fall back to a 32x32 interior. A
    /// negative step count runs zero steps, so only the initial
    /// snapshot is emitted.
    pub fn new(interior_width: i64, interior_height: i64, steps: i64, pattern: SeedPattern) -> Self {
        let clamp = |v: i64| {
            if v > 0 {
                v as usize
            } else {
                DEFAULT_INTERIOR
            }
        };
        Self {
            width: clamp(interior_width) + 2,
            height: clamp(interior_height) + 2,
            steps: steps.max(0) as u64,
            pattern,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_INTERIOR as i64,
            DEFAULT_INTERIOR as i64,
            0,
            SeedPattern::default(),
        )
    }
}
