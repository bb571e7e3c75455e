//! Plain text rendering of cube state, one face block at a time. Built only
//! on the public snapshot accessor, so the turn engine stays independent of
//! formatting.

use super::{Cube, FaceName};
use std::fmt;

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in FaceName::ALL {
            writeln!(f, "{name} Face:")?;
            for row in self.snapshot(name) {
                let mut sep = "";
                for color in row {
                    write!(f, "{sep}{}", color.letter())?;
                    sep = " ";
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cubenxn::{Cube, Direction, FaceName};

    #[test]
    fn solved_cube_renders_monochrome_blocks() {
        let text = Cube::new(2).to_string();
        assert!(text.starts_with("Up Face:\nW W\nW W\n\n"));
        assert!(text.contains("Front Face:\nR R\nR R\n\n"));
        assert!(text.ends_with("Right Face:\nB B\nB B\n\n"));
    }

    #[test]
    fn rendering_reflects_turned_state() {
        let mut cube = Cube::new(3);
        cube.rotate(FaceName::Front, Direction::Clockwise);
        // Front clockwise leaves the Up bottom row showing Left's green
        assert!(cube.to_string().contains("Up Face:\nW W W\nW W W\nG G G\n"));
    }
}
