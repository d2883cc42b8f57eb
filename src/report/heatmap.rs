//! Board heat map
//!
//! The 40 squares are painted around the edge of an 11x11 grid laid out
//! like the physical board. Shade comes from rank, not raw frequency: the
//! most landed-on square is black and each rank down adds 6.25 to every
//! channel.

use std::io::Write;
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use image::{Rgb, RgbImage};

use crate::board::{Square, BOARD_SIZE};
use crate::core::error::Result;
use crate::simulation::ProbabilityDistribution;

pub const GRID_SIZE: usize = 11;

/// Colour of cells that are not a board square
pub const BOARD_FILL: [u8; 3] = [209, 194, 111];

/// Grey added per rank
pub const SHADE_STEP: f32 = 6.25;

/// Heat map over the 11x11 board layout
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    /// Grey level per cell, `None` for the board interior
    cells: [[Option<f32>; GRID_SIZE]; GRID_SIZE],
}

impl HeatmapGrid {
    pub fn from_distribution(dist: &ProbabilityDistribution) -> Self {
        let mut palette = [0.0f32; BOARD_SIZE];
        for (rank, (square, _)) in dist.ranked().into_iter().enumerate() {
            palette[square.index()] = rank as f32 * SHADE_STEP;
        }
        Self::from_palette(&palette)
    }

    /// Paint a grey level per square onto the board edges
    pub fn from_palette(palette: &[f32; BOARD_SIZE]) -> Self {
        let mut cells = [[None; GRID_SIZE]; GRID_SIZE];
        let last = GRID_SIZE - 1;

        // Top row runs Free Parking (20) to Go To Jail (30)
        for i in 0..GRID_SIZE {
            cells[0][i] = Some(palette[20 + i]);
        }
        // Bottom row runs Jail (10) down to Go (0)
        for i in 0..GRID_SIZE {
            cells[last][i] = Some(palette[10 - i]);
        }
        // Left column runs Free Parking (20) down to Jail (10)
        for i in 0..GRID_SIZE {
            cells[i][0] = Some(palette[20 - i]);
        }
        // Right column runs Go To Jail (30) to Boardwalk (39)
        for i in 0..last {
            cells[i][last] = Some(palette[30 + i]);
        }

        Self { cells }
    }

    /// Board square drawn at `row`, `col`, if any
    pub fn square_at(row: usize, col: usize) -> Option<Square> {
        let last = GRID_SIZE - 1;
        if row > last || col > last {
            return None;
        }
        let index = if row == 0 {
            20 + col
        } else if row == last {
            10 - col
        } else if col == 0 {
            20 - row
        } else if col == last {
            30 + row
        } else {
            return None;
        };
        Some(Square::new(index))
    }

    /// Grey level at a cell, `None` inside the board
    pub fn shade(&self, row: usize, col: usize) -> Option<f32> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// RGB colour of a cell
    pub fn color(&self, row: usize, col: usize) -> [u8; 3] {
        match self.shade(row, col) {
            Some(level) => {
                let g = level.clamp(0.0, 255.0) as u8;
                [g, g, g]
            }
            None => BOARD_FILL,
        }
    }

    /// Draw the grid with terminal background colours, two columns per cell
    pub fn render_terminal<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let [r, g, b] = self.color(row, col);
                queue!(out, SetBackgroundColor(Color::Rgb { r, g, b }), Print("  "))?;
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
        out.flush()
    }

    /// Rasterise with each cell as a `cell_px` square block
    pub fn to_image(&self, cell_px: u32) -> RgbImage {
        let cell_px = cell_px.max(1);
        let side = GRID_SIZE as u32 * cell_px;
        let mut img = RgbImage::from_pixel(side, side, Rgb(BOARD_FILL));
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let row = (y / cell_px) as usize;
            let col = (x / cell_px) as usize;
            *pixel = Rgb(self.color(row, col));
        }
        img
    }

    pub fn save_png(&self, path: impl AsRef<Path>, cell_px: u32) -> Result<()> {
        self.to_image(cell_px).save(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "Heat map written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::LandingCounts;

    fn indexed_palette() -> [f32; BOARD_SIZE] {
        let mut palette = [0.0; BOARD_SIZE];
        for (i, p) in palette.iter_mut().enumerate() {
            *p = i as f32;
        }
        palette
    }

    #[test]
    fn test_edge_mapping() {
        let grid = HeatmapGrid::from_palette(&indexed_palette());
        assert_eq!(grid.shade(0, 0), Some(20.0));
        assert_eq!(grid.shade(0, 10), Some(30.0));
        assert_eq!(grid.shade(10, 10), Some(0.0));
        assert_eq!(grid.shade(10, 0), Some(10.0));
        assert_eq!(grid.shade(9, 10), Some(39.0));
        assert_eq!(grid.shade(5, 0), Some(15.0));
        assert_eq!(grid.shade(10, 9), Some(1.0));
        assert_eq!(grid.shade(5, 5), None);
    }

    #[test]
    fn test_every_square_painted_once() {
        let mut seen = [0; BOARD_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if let Some(square) = HeatmapGrid::square_at(row, col) {
                    seen[square.index()] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_square_at_agrees_with_painting() {
        let grid = HeatmapGrid::from_palette(&indexed_palette());
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let expected = HeatmapGrid::square_at(row, col).map(|s| s.index() as f32);
                assert_eq!(grid.shade(row, col), expected, "cell {},{}", row, col);
            }
        }
    }

    #[test]
    fn test_rank_shading() {
        let mut totals = LandingCounts::new();
        for _ in 0..5 {
            totals.record(Square::JAIL);
        }
        totals.record(Square::GO);
        let dist = ProbabilityDistribution::from_counts(&totals, 1, 10, 0);
        let grid = HeatmapGrid::from_distribution(&dist);

        // Jail ranks first, Go second
        assert_eq!(grid.color(10, 0), [0, 0, 0]);
        assert_eq!(grid.color(10, 10), [6, 6, 6]);
        assert_eq!(grid.color(4, 4), BOARD_FILL);
    }

    #[test]
    fn test_terminal_render_has_one_line_per_row() {
        let grid = HeatmapGrid::from_palette(&indexed_palette());
        let mut out = Vec::new();
        grid.render_terminal(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), GRID_SIZE);
    }

    #[test]
    fn test_png_export() {
        let grid = HeatmapGrid::from_palette(&indexed_palette());
        let img = grid.to_image(4);
        assert_eq!(img.dimensions(), (44, 44));
        assert_eq!(img.get_pixel(0, 0).0, [20, 20, 20]);
        assert_eq!(img.get_pixel(20, 20).0, BOARD_FILL);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        grid.save_png(&path, 4).unwrap();
        assert!(path.exists());
    }
}
