//! Face turns and the edge propagation rules relating the six faces.
//!
//! Turning a face carries the border lines of its four neighbors around a
//! fixed 4-cycle. The cycles are stored as data rather than written out as
//! per-face procedures, which makes the symmetry between the two turn
//! directions explicit: anticlockwise is the same cycle traversed the other
//! way.

use super::{Border, Color, Cube, FaceName};
use crate::error::ParseFaceError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The sense of a quarter turn, as viewed facing the turned face directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    /// Quarter turn clockwise
    Clockwise,
    /// Quarter turn anticlockwise
    AntiClockwise,
}

impl Direction {
    /// The opposite sense.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::AntiClockwise,
            Direction::AntiClockwise => Direction::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct FaceTurn {
    pub face: FaceName,
    pub direction: Direction,
}

impl FaceTurn {
    /// The turn undoing this one.
    pub fn inverse(self) -> FaceTurn {
        FaceTurn {
            face: self.face,
            direction: self.direction.opposite(),
        }
    }
}

/// For each turned face (indexed by `FaceName` discriminant), the border
/// lines of its four neighbors in cycle order. A clockwise turn moves each
/// line one slot backwards through the cycle, so slot `i` receives slot
/// `i + 1`'s line; an anticlockwise turn traverses the same cycle forwards.
const EDGE_CYCLES: [[(FaceName, Border); 4]; 6] = [
    // Up
    [
        (FaceName::Front, Border::Top),
        (FaceName::Right, Border::Top),
        (FaceName::Back, Border::Bottom),
        (FaceName::Left, Border::Top),
    ],
    // Down
    [
        (FaceName::Front, Border::Bottom),
        (FaceName::Left, Border::Bottom),
        (FaceName::Back, Border::Top),
        (FaceName::Right, Border::Bottom),
    ],
    // Front
    [
        (FaceName::Up, Border::Bottom),
        (FaceName::Left, Border::Right),
        (FaceName::Down, Border::Top),
        (FaceName::Right, Border::Left),
    ],
    // Back
    [
        (FaceName::Up, Border::Top),
        (FaceName::Right, Border::Right),
        (FaceName::Down, Border::Bottom),
        (FaceName::Left, Border::Left),
    ],
    // Left
    [
        (FaceName::Front, Border::Left),
        (FaceName::Up, Border::Left),
        (FaceName::Back, Border::Right),
        (FaceName::Down, Border::Left),
    ],
    // Right
    [
        (FaceName::Front, Border::Right),
        (FaceName::Down, Border::Right),
        (FaceName::Back, Border::Left),
        (FaceName::Up, Border::Right),
    ],
];

/// Whether the line moving between slots `i` and `i + 1` of the cycle is
/// reversed in transit. Two faces meeting at a mirrored edge in 3-D always
/// exchange reversed lines, so each flag belongs to a slot pair and applies
/// in both turn directions.
const EDGE_FLIPS: [[bool; 4]; 6] = [
    // Up
    [false, true, true, false],
    // Down
    [false, true, true, false],
    // Front
    [true, false, true, false],
    // Back
    [false, true, false, true],
    // Left
    [false, true, true, false],
    // Right
    [false, false, true, true],
];

impl Cube {
    /// Apply a quarter turn to the named face: the face's own grid rotates in
    /// place, then each neighbor border line in the face's edge cycle moves
    /// one slot. All four lines are captured before any write, since the
    /// cycle feeds each line into the next.
    ///
    /// ```
    /// use facelet_cube::cubenxn::{Cube, Direction, FaceName};
    ///
    /// let mut cube = Cube::new(3);
    /// cube.rotate(FaceName::Front, Direction::Clockwise);
    /// cube.rotate(FaceName::Front, Direction::AntiClockwise);
    /// assert_eq!(cube, Cube::new(3));
    /// ```
    pub fn rotate(&mut self, face: FaceName, direction: Direction) {
        self.faces[face as usize].rotate(direction);

        let cycle = &EDGE_CYCLES[face as usize];
        let flips = &EDGE_FLIPS[face as usize];
        let lines: [Vec<Color>; 4] =
            std::array::from_fn(|slot| self.face(cycle[slot].0).line(cycle[slot].1));

        for (dst, (name, border)) in cycle.iter().copied().enumerate() {
            let src = match direction {
                Direction::Clockwise => (dst + 1) % 4,
                Direction::AntiClockwise => (dst + 3) % 4,
            };
            // the flag sits between the pair of slots the line moves across
            let flip = match direction {
                Direction::Clockwise => flips[dst],
                Direction::AntiClockwise => flips[src],
            };
            let mut line = lines[src].clone();
            if flip {
                line.reverse();
            }
            self.faces[name as usize].set_line(border, &line);
        }
    }

    /// Apply a quarter turn to a face given by name. This is the string
    /// boundary for external input; an unknown name leaves the cube
    /// untouched.
    pub fn rotate_named(&mut self, name: &str, clockwise: bool) -> Result<(), ParseFaceError> {
        let face: FaceName = name.parse()?;
        let direction = if clockwise {
            Direction::Clockwise
        } else {
            Direction::AntiClockwise
        };
        self.rotate(face, direction);
        Ok(())
    }

    /// Apply a single turn.
    pub fn apply(&mut self, turn: FaceTurn) {
        self.rotate(turn.face, turn.direction);
    }

    /// Apply a sequence of turns in order.
    pub fn apply_all<I: IntoIterator<Item = FaceTurn>>(&mut self, turns: I) {
        for turn in turns {
            self.apply(turn);
        }
    }
}
