use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::driver::SnapshotSink;
use crate::error::SnapshotError;
use crate::field::Field;

/// Byte order advertised in the `.vti` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the running target. The appended payload is
    /// written with native endianness, so the header must match.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    fn vtk_name(self) -> &'static str {
        match self {
            Self::LittleEndian => "LittleEndian",
            Self::BigEndian => "BigEndian",
        }
    }
}

/// Render the XML preamble of an appended-raw `.vti` file.
///
/// Pure function of the grid extents and byte order. Ends with the
/// `_` marker; the length-prefixed raw data block follows it
/// immediately.
pub fn render_header(width: usize, height: usize, byte_order: ByteOrder) -> String {
    format!(
        concat!(
            "<VTKFile type=\"ImageData\" version=\"1.0\" byte_order=\"{bo}\" header_type=\"UInt64\">\n",
            "  <ImageData WholeExtent=\"0 {w} 0 {h} 0 0\" Origin=\"0 0 0\" Spacing=\"1 1 0\">\n",
            "    <Piece Extent=\"0 {w} 0 {h} 0 0\">\n",
            "      <PointData>\n",
            "      </PointData>\n",
            "      <CellData Scalars=\"GameOfLife\">\n",
            "        <DataArray type=\"UInt8\" Name=\"GameOfLife\" format=\"appended\" RangeMin=\"0\" RangeMax=\"0\" offset=\"0\"/>\n",
            "      </CellData>\n",
            "    </Piece>\n",
            "  </ImageData>\n",
            "  <AppendedData encoding=\"raw\">\n",
            "   _"
        ),
        bo = byte_order.vtk_name(),
        w = width,
        h = height,
    )
}

const VTK_TAIL: &str = "\n  </AppendedData>\n</VTKFile>\n";

/// Writes one `gol-<timestep>.vti` file per generation.
///
/// Layout per file: XML header, `u64` payload length in native byte
/// order, one byte per cell (1 = alive, 0 = dead, row-major, halo
/// included), fixed ASCII tail.
pub struct VtkSink {
    dir: PathBuf,
}

impl VtkSink {
    /// Create the sink, creating `dir` if it does not exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, timestep: u64) -> PathBuf {
        self.dir.join(format!("gol-{timestep:05}.vti"))
    }
}

impl SnapshotSink for VtkSink {
    fn write(&mut self, field: &Field, timestep: u64) -> Result<(), SnapshotError> {
        let path = self.path_for(timestep);
        let mut out = BufWriter::new(File::create(&path)?);

        let header = render_header(field.width(), field.height(), ByteOrder::native());
        out.write_all(header.as_bytes())?;

        let data: Vec<u8> = field.cells().iter().map(|&alive| alive as u8).collect();
        out.write_all(&(data.len() as u64).to_ne_bytes())?;
        out.write_all(&data)?;
        out.write_all(VTK_TAIL.as_bytes())?;
        out.flush()?;

        info!(timestep, path = %path.display(), "snapshot written");
        Ok(())
    }
}
