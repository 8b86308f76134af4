use crate::floor::Floor;
use crate::types::{BURST_STEPS, Colour, Direction};
use rand::Rng;

/// NOTE - State of a single painting robot
pub struct Robot {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub paint_colour: Colour,
}

impl Robot {
    /// Draws a starting state from the generator: x, y, heading, paint
    /// colour, in that order. The draw order fixes which values each
    /// robot receives for a given seed.
    pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..rows),
            y: rng.gen_range(0..cols),
            direction: Direction::ALL[rng.gen_range(0..4)],
            paint_colour: Colour::PAINTABLE[rng.gen_range(0..4)],
        }
    }

    /// Moves one cell in the current heading, wrapping toroidally.
    pub fn advance(&mut self, rows: usize, cols: usize) {
        match self.direction {
            Direction::North => self.x = (self.x + rows - 1) % rows,
            Direction::East => self.y = (self.y + 1) % cols,
            Direction::South => self.x = (self.x + 1) % rows,
            Direction::West => self.y = (self.y + cols - 1) % cols,
        }
    }

    /// One simulation tick for this robot: a fixed movement burst painting
    /// every tile landed on, then a new heading from the final tile colour.
    pub fn update(&mut self, floor: &mut Floor) {
        for _ in 0..BURST_STEPS {
            self.advance(floor.rows, floor.cols);
            floor.set_tile(self.x, self.y, self.paint_colour);
        }

        match floor.get_tile(self.x, self.y) {
            Colour::Red | Colour::Magenta => self.direction = self.direction.turned(1),
            Colour::Green | Colour::White => self.direction = self.direction.turned(2),
            Colour::Yellow => self.direction = self.direction.turned(3),
            Colour::Blue => {} // No change in heading on a blue tile
        }
    }
}

/// NOTE - Ordered set of robots; index is identity and update order
pub struct RobotSet {
    pub robots: Vec<Robot>,
}

impl RobotSet {
    /// Draws `count` robots in index order from the generator. The caller
    /// reseeds the generator immediately before this call.
    pub fn initialize(count: usize, rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let mut robots = Vec::with_capacity(count);
        for _ in 0..count {
            robots.push(Robot::random(rows, cols, rng));
        }
        Self { robots }
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }
}
