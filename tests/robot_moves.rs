//! Integration tests for robot movement and the colour-driven turn rule.
//!
//! Covers toroidal wrapping at all four floor edges, the fixed 4-step
//! paint burst, and the direction change table keyed on the final burst
//! tile colour.

use srpa::floor::Floor;
use srpa::robot::Robot;
use srpa::types::{Colour, Direction};

fn robot(x: usize, y: usize, direction: Direction, paint_colour: Colour) -> Robot {
    Robot { x, y, direction, paint_colour }
}

#[test]
fn advance_wraps_at_every_edge() {
    // North from row 0 re-enters at the bottom row
    let mut r = robot(0, 5, Direction::North, Colour::Blue);
    r.advance(12, 16);
    assert_eq!((r.x, r.y), (11, 5));

    // South from the bottom row re-enters at row 0
    let mut r = robot(11, 5, Direction::South, Colour::Blue);
    r.advance(12, 16);
    assert_eq!((r.x, r.y), (0, 5));

    // East from the last column re-enters at column 0
    let mut r = robot(3, 15, Direction::East, Colour::Blue);
    r.advance(12, 16);
    assert_eq!((r.x, r.y), (3, 0));

    // West from column 0 re-enters at the last column
    let mut r = robot(3, 0, Direction::West, Colour::Blue);
    r.advance(12, 16);
    assert_eq!((r.x, r.y), (3, 15));
}

#[test]
fn burst_paints_four_tiles_along_the_heading() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    let mut r = robot(3, 2, Direction::East, Colour::Blue);

    r.update(&mut floor);

    // Blue causes no turn, so the robot moved 4 cells east in a line
    assert_eq!((r.x, r.y), (3, 6));
    for j in 3..=6 {
        assert_eq!(floor.get_tile(3, j), Colour::Blue, "tile (3,{j})");
    }
    // Departure tile is untouched
    assert_eq!(floor.get_tile(3, 2), Colour::Magenta);
}

#[test]
fn red_final_tile_turns_one_quarter() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    let mut r = robot(5, 5, Direction::North, Colour::Red);

    r.update(&mut floor);

    // The burst ends on a tile the robot just painted red
    assert_eq!(floor.get_tile(r.x, r.y), Colour::Red);
    assert_eq!(r.direction, Direction::East);
}

#[test]
fn green_final_tile_reverses() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    let mut r = robot(5, 5, Direction::East, Colour::Green);

    r.update(&mut floor);

    assert_eq!(r.direction, Direction::West);
}

#[test]
fn yellow_final_tile_turns_three_quarters() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    let mut r = robot(5, 5, Direction::South, Colour::Yellow);

    r.update(&mut floor);

    // +3 quarter turns is one turn counter-clockwise
    assert_eq!(r.direction, Direction::East);
}

#[test]
fn blue_final_tile_keeps_heading() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    let mut r = robot(5, 5, Direction::West, Colour::Blue);

    r.update(&mut floor);

    assert_eq!(r.direction, Direction::West);
}

#[test]
fn turned_cycles_through_all_headings() {
    assert_eq!(Direction::North.turned(1), Direction::East);
    assert_eq!(Direction::North.turned(2), Direction::South);
    assert_eq!(Direction::North.turned(3), Direction::West);
    assert_eq!(Direction::North.turned(4), Direction::North);
    assert_eq!(Direction::West.turned(1), Direction::North);
}

#[test]
fn burst_wraps_across_the_edge_mid_sequence() {
    let mut floor = Floor::allocate(12, 12).unwrap();
    // Two cells from the east edge: steps land on columns 11, 0, 1, 2
    let mut r = robot(6, 10, Direction::East, Colour::Blue);

    r.update(&mut floor);

    assert_eq!((r.x, r.y), (6, 2));
    assert_eq!(floor.get_tile(6, 11), Colour::Blue);
    assert_eq!(floor.get_tile(6, 0), Colour::Blue);
    assert_eq!(floor.get_tile(6, 1), Colour::Blue);
    assert_eq!(floor.get_tile(6, 2), Colour::Blue);
}
