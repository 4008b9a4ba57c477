use std::time::Instant;

use tracing::info;

/// Reports the elapsed wall-clock time of a scope when dropped.
///
/// Applied around the outermost simulation call only; not part of the
/// functional contract.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        info!("{} finished in {:?}", self.label, self.start.elapsed());
    }
}
