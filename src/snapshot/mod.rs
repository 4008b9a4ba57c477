mod console;
mod vtk;

pub use console::ConsoleSink;
pub use vtk::{render_header, ByteOrder, VtkSink};
