//! Facelet representation of an NxNxN Rubik's cube: six named faces, each an
//! owned color grid, and the turn logic that propagates border lines between
//! neighboring faces.

mod display;
mod face;
mod moves;

pub use face::{Border, Face};
pub use moves::{Direction, FaceTurn};

use crate::error::ParseFaceError;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A facelet color. Each face of a solved cube is monochrome in one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    /// `W`, the solved Up face
    White,
    /// `Y`, the solved Down face
    Yellow,
    /// `R`, the solved Front face
    Red,
    /// `O`, the solved Back face
    Orange,
    /// `G`, the solved Left face
    Green,
    /// `B`, the solved Right face
    Blue,
}

impl Color {
    /// The single letter form used in textual cube diagrams.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

/// Names one of the six faces of the cube. The enum is the key type for all
/// face lookups, so a caller holding a `FaceName` can never name a missing
/// face; only string input can fail, at the [`FromStr`] boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum FaceName {
    /// Up
    Up,
    /// Down
    Down,
    /// Front
    Front,
    /// Back
    Back,
    /// Left
    Left,
    /// Right
    Right,
}

impl FaceName {
    /// All six faces, in storage order.
    pub const ALL: [FaceName; 6] = [
        FaceName::Up,
        FaceName::Down,
        FaceName::Front,
        FaceName::Back,
        FaceName::Left,
        FaceName::Right,
    ];

    /// The color this face has on a solved cube.
    pub fn solved_color(self) -> Color {
        match self {
            FaceName::Up => Color::White,
            FaceName::Down => Color::Yellow,
            FaceName::Front => Color::Red,
            FaceName::Back => Color::Orange,
            FaceName::Left => Color::Green,
            FaceName::Right => Color::Blue,
        }
    }
}

impl FromStr for FaceName {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<FaceName, ParseFaceError> {
        match s {
            "Up" => Ok(FaceName::Up),
            "Down" => Ok(FaceName::Down),
            "Front" => Ok(FaceName::Front),
            "Back" => Ok(FaceName::Back),
            "Left" => Ok(FaceName::Left),
            "Right" => Ok(FaceName::Right),
            _ => Err(ParseFaceError::UnknownFace(s.to_string())),
        }
    }
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FaceName::Up => "Up",
            FaceName::Down => "Down",
            FaceName::Front => "Front",
            FaceName::Back => "Back",
            FaceName::Left => "Left",
            FaceName::Right => "Right",
        })
    }
}

/// The full facelet state of an NxNxN cube: six faces sharing one side
/// length. The cube exclusively owns its faces; they are created solved and
/// mutated only through [`Cube::rotate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    size: usize,
    faces: [Face; 6],
}

impl Cube {
    /// A solved cube with the given side length, each face monochrome in its
    /// designated color. A side length of 1 is degenerate but consistent;
    /// 0 is rejected.
    pub fn new(size: usize) -> Cube {
        assert!(size > 0, "a cube must have a positive side length");
        Cube {
            size,
            faces: FaceName::ALL.map(|name| Face::solid(size, name.solved_color())),
        }
    }

    /// The side length shared by all six faces.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow the named face.
    pub fn face(&self, name: FaceName) -> &Face {
        &self.faces[name as usize]
    }

    /// An immutable copy of the named face's grid, rows top to bottom, for
    /// display collaborators to consume.
    pub fn snapshot(&self, name: FaceName) -> Vec<Vec<Color>> {
        self.face(name).rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::new(3);
        assert_eq!(cube.size(), 3);
        for name in FaceName::ALL {
            let face = cube.face(name);
            assert_eq!(face.size(), 3);
            let expected = vec![name.solved_color(); 3];
            assert_eq!(cube.snapshot(name), vec![expected; 3]);
        }
    }

    #[test]
    fn facelet_count_is_six_n_squared() {
        for size in 1..=4 {
            let cube = Cube::new(size);
            let count: usize = FaceName::ALL
                .iter()
                .map(|&name| cube.snapshot(name).concat().len())
                .sum();
            assert_eq!(count, 6 * size * size);
        }
    }

    #[test]
    #[should_panic(expected = "positive side length")]
    fn zero_sized_cube_is_rejected() {
        Cube::new(0);
    }

    #[test]
    fn face_names_round_trip_through_strings() {
        for name in FaceName::ALL {
            assert_eq!(name.to_string().parse::<FaceName>(), Ok(name));
        }
        assert_eq!(
            "Middle".parse::<FaceName>(),
            Err(crate::error::ParseFaceError::UnknownFace("Middle".into())),
        );
    }
}
