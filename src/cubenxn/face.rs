//! One face of the cube: an owned square grid of facelet colors with rotation
//! and border line accessors.

use super::{Color, Direction};

/// Names one border line of a face, in the face's own local orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Border {
    /// Top row, left to right
    Top,
    /// Bottom row, left to right
    Bottom,
    /// Left column, top to bottom
    Left,
    /// Right column, top to bottom
    Right,
}

/// A size x size grid of facelet colors, stored row major. Faces are created
/// by [`Cube::new`](super::Cube::new) and mutated only through rotation and
/// border writes, so the grid never changes shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    size: usize,
    cells: Vec<Color>,
}

impl Face {
    /// A monochrome face.
    pub(super) fn solid(size: usize, color: Color) -> Face {
        Face {
            size,
            cells: vec![color; size * size],
        }
    }

    /// The side length of the face.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The color of the facelet at `(row, col)`, both indexed from the top
    /// left corner.
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.size + col]
    }

    /// The grid copied out as rows of colors, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Color>> {
        self.cells.chunks(self.size).map(<[Color]>::to_vec).collect()
    }

    /// Rotate the grid 90 degrees in place. Clockwise, each output row is an
    /// input column read top to bottom and then reversed; anticlockwise is the
    /// inverse mapping.
    pub fn rotate(&mut self, direction: Direction) {
        let n = self.size;
        self.cells = match direction {
            // out[r][c] = in[n - 1 - c][r]
            Direction::Clockwise => (0..n * n)
                .map(|i| self.cells[(n - 1 - i % n) * n + i / n])
                .collect(),
            // out[r][c] = in[c][n - 1 - r]
            Direction::AntiClockwise => (0..n * n)
                .map(|i| self.cells[(i % n) * n + (n - 1 - i / n)])
                .collect(),
        };
    }

    /// Copy out one border line. The returned line is owned, so later grid
    /// mutation cannot change it.
    pub fn line(&self, border: Border) -> Vec<Color> {
        let n = self.size;
        match border {
            Border::Top => self.cells[..n].to_vec(),
            Border::Bottom => self.cells[n * (n - 1)..].to_vec(),
            Border::Left => (0..n).map(|r| self.cells[r * n]).collect(),
            Border::Right => (0..n).map(|r| self.cells[r * n + n - 1]).collect(),
        }
    }

    /// Overwrite one border line. A line length other than the face size is a
    /// bug in the caller's propagation logic, never truncated or padded.
    pub fn set_line(&mut self, border: Border, line: &[Color]) {
        let n = self.size;
        assert_eq!(line.len(), n, "border line length must equal the face size");
        match border {
            Border::Top => self.cells[..n].copy_from_slice(line),
            Border::Bottom => self.cells[n * (n - 1)..].copy_from_slice(line),
            Border::Left => {
                for (r, &color) in line.iter().enumerate() {
                    self.cells[r * n] = color;
                }
            }
            Border::Right => {
                for (r, &color) in line.iter().enumerate() {
                    self.cells[r * n + n - 1] = color;
                }
            }
        }
    }

    /// Copy of the top row, left to right.
    pub fn top_row(&self) -> Vec<Color> {
        self.line(Border::Top)
    }

    /// Copy of the bottom row, left to right.
    pub fn bottom_row(&self) -> Vec<Color> {
        self.line(Border::Bottom)
    }

    /// Copy of the left column, top to bottom.
    pub fn left_col(&self) -> Vec<Color> {
        self.line(Border::Left)
    }

    /// Copy of the right column, top to bottom.
    pub fn right_col(&self) -> Vec<Color> {
        self.line(Border::Right)
    }

    /// Overwrite the top row, left to right.
    pub fn set_top_row(&mut self, line: &[Color]) {
        self.set_line(Border::Top, line);
    }

    /// Overwrite the bottom row, left to right.
    pub fn set_bottom_row(&mut self, line: &[Color]) {
        self.set_line(Border::Bottom, line);
    }

    /// Overwrite the left column, top to bottom.
    pub fn set_left_col(&mut self, line: &[Color]) {
        self.set_line(Border::Left, line);
    }

    /// Overwrite the right column, top to bottom.
    pub fn set_right_col(&mut self, line: &[Color]) {
        self.set_line(Border::Right, line);
    }
}
