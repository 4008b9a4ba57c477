use tracing::debug;

use crate::boundary::apply_periodic_boundaries;
use crate::config::Config;
use crate::error::SnapshotError;
use crate::evolve;
use crate::field::Field;
use crate::seed::SeedPattern;

/// Where the driver hands each generation for persistence.
///
/// Emission is synchronous and ordered; the driver calls `write` once
/// per generation with a strictly increasing timestep label. Any
/// error aborts the run.
pub trait SnapshotSink {
    fn write(&mut self, field: &Field, timestep: u64) -> Result<(), SnapshotError>;
}

/// Double-buffered timestep driver.
///
/// Owns both field buffers for the whole run. After every evolution
/// step the buffer roles swap; cell data is never copied between
/// generations.
pub struct Simulation {
    current: Field,
    next: Field,
    pattern: SeedPattern,
    steps: u64,
}

impl Simulation {
    /// Allocate both buffers for the halo-inclusive dimensions in
    /// `config`.
    pub fn new(config: Config) -> Self {
        Self {
            current: Field::blank(config.width, config.height),
            next: Field::blank(config.width, config.height),
            pattern: config.pattern,
            steps: config.steps,
        }
    }

    /// Run the whole simulation, emitting `steps + 1` snapshots
    /// labeled `0..=steps` into `sink`.
    ///
    /// Sequence per step: evolve into the back buffer, emit it, wrap
    /// its boundaries, swap buffer roles. The initial seeded state is
    /// emitted as snapshot 0 before its first boundary update, same
    /// as every later generation.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<(), SnapshotError> {
        self.pattern.apply(&mut self.current);
        sink.write(&self.current, 0)?;
        apply_periodic_boundaries(&mut self.current);

        for t in 1..=self.steps {
            evolve::step(&self.current, &mut self.next);
            sink.write(&self.next, t)?;
            apply_periodic_boundaries(&mut self.next);
            std::mem::swap(&mut self.current, &mut self.next);
            debug!(
                timestep = t,
                population = self.current.population(),
                "generation advanced"
            );
        }
        Ok(())
    }

    /// The buffer holding the most recently emitted generation.
    pub fn field(&self) -> &Field {
        &self.current
    }
}
