//! Export functionality for occupancy grids.

use std::io::Write;
use std::path::Path;

use super::OccupancyGrid;

impl OccupancyGrid {
    /// Export the probability view as grayscale image data.
    ///
    /// Returns (width, height, pixels) with one byte per cell, row-major.
    /// 0 = certainly a hit, 128 = unknown, 255 = certainly traversed.
    pub fn to_grayscale(&self) -> (usize, usize, Vec<u8>) {
        let pixels = self
            .probability_map()
            .iter()
            .map(|p| (p * 255.0).round() as u8)
            .collect();

        (self.width(), self.height(), pixels)
    }

    /// Write the probability view to a binary PGM (P5) file.
    ///
    /// Rows are emitted top-to-bottom from the highest cy so the image
    /// keeps the map's lower-left origin.
    pub fn save_pgm<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let (width, height, pixels) = self.to_grayscale();

        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        write!(file, "P5\n{} {}\n255\n", width, height)?;
        for cy in (0..height).rev() {
            file.write_all(&pixels[cy * width..(cy + 1) * width])?;
        }
        file.flush()
    }
}
