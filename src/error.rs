use thiserror::Error;

/// Failure raised by a snapshot sink.
///
/// Every variant is fatal to the run: the driver stops at the first
/// error and the binary turns it into a nonzero process exit. The
/// library itself never terminates the process, so it stays
/// embeddable and testable.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The sink could not create or write its output.
    #[error("could not write snapshot data: {0}")]
    Io(#[from] std::io::Error),
}
