use crate::error::SimulationError;
use crate::types::{Colour, InitPattern};
use rand::Rng;

pub struct Floor {
    pub tiles: Vec<Vec<Colour>>,
    pub rows: usize,
    pub cols: usize,
}

impl Floor {
    /// Allocates a rows x cols grid, every tile magenta. Rows already
    /// acquired are released by drop if a later reservation fails.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self, SimulationError> {
        let mut tiles: Vec<Vec<Colour>> = Vec::new();
        tiles.try_reserve_exact(rows).map_err(|_| {
            SimulationError::Allocation(format!("row table for {rows} rows"))
        })?;

        for i in 0..rows {
            let mut row: Vec<Colour> = Vec::new();
            row.try_reserve_exact(cols).map_err(|_| {
                SimulationError::Allocation(format!("row {i} of {cols} tiles"))
            })?;
            row.resize(cols, Colour::Magenta);
            tiles.push(row);
        }

        Ok(Self { tiles, rows, cols })
    }

    /// Allocates and applies the requested initialisation pattern in one go.
    pub fn new(
        rows: usize,
        cols: usize,
        pattern: InitPattern,
        rng: &mut impl Rng,
    ) -> Result<Self, SimulationError> {
        let mut floor = Self::allocate(rows, cols)?;

        match pattern {
            InitPattern::AllMagenta => floor.init_all_magenta(),
            InitPattern::Checkerboard => floor.init_checkerboard(),
            InitPattern::RandomStripes => floor.init_random_stripes(rng),
        }

        Ok(floor)
    }

    /// NOTE - Every tile magenta
    pub fn init_all_magenta(&mut self) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.tiles[i][j] = Colour::Magenta;
            }
        }
    }

    /// NOTE - Alternating 4x4 blocks of white and magenta
    pub fn init_checkerboard(&mut self) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.tiles[i][j] = if (i / 4 + j / 4) % 2 == 0 {
                    Colour::White
                } else {
                    Colour::Magenta
                };
            }
        }
    }

    /// NOTE - One random colour per column, replicated down every row
    pub fn init_random_stripes(&mut self, rng: &mut impl Rng) {
        for j in 0..self.cols {
            self.tiles[0][j] = Colour::ALL[rng.gen_range(0..6)];
        }

        // Copy first row to all rows (stripes)
        for i in 1..self.rows {
            for j in 0..self.cols {
                self.tiles[i][j] = self.tiles[0][j];
            }
        }
    }

    pub fn get_tile(&self, x: usize, y: usize) -> Colour {
        self.tiles[x][y]
    }

    pub fn set_tile(&mut self, x: usize, y: usize, colour: Colour) {
        self.tiles[x][y] = colour;
    }
}
