use std::io::{self, Write};
use std::time::Duration;

use crate::driver::SnapshotSink;
use crate::error::SnapshotError;
use crate::field::Field;

/// ANSI terminal renderer for watching a run live.
///
/// Debug aid, not part of the simulation contract: draws each
/// generation over the previous one with inverse-video cells and
/// holds every frame for `frame_delay`.
pub struct ConsoleSink<W: Write> {
    out: W,
    frame_delay: Duration,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout(), Duration::from_millis(80))
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(out: W, frame_delay: Duration) -> Self {
        Self { out, frame_delay }
    }
}

impl<W: Write> SnapshotSink for ConsoleSink<W> {
    fn write(&mut self, field: &Field, timestep: u64) -> Result<(), SnapshotError> {
        write!(self.out, "\x1b[H")?;
        for y in 0..field.height() {
            for x in 0..field.width() {
                if field.get(x, y) {
                    write!(self.out, "\x1b[07m  \x1b[m")?;
                } else {
                    write!(self.out, "  ")?;
                }
            }
            write!(self.out, "\x1b[E")?;
        }
        write!(self.out, "\ntimestep={timestep}")?;
        self.out.flush()?;
        std::thread::sleep(self.frame_delay);
        Ok(())
    }
}
