#![warn(clippy::all, clippy::cargo)]

mod boundary;
mod config;
mod driver;
mod error;
mod evolve;
mod field;
mod seed;
mod snapshot;
mod timing;

pub use boundary::apply_periodic_boundaries;
pub use config::{Config, DEFAULT_INTERIOR};
pub use driver::{Simulation, SnapshotSink};
pub use error::SnapshotError;
pub use evolve::step;
pub use field::Field;
pub use seed::{SeedPattern, DEFAULT_FILL_RATE};
pub use snapshot::{render_header, ByteOrder, ConsoleSink, VtkSink};
pub use timing::ScopedTimer;
