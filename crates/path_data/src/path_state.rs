use crate::commands::Command;
use crate::math::{point, vector, Point, Vector};

/// Represents the current state of a path while its instructions are being
/// walked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathState {
    /// The current point.
    current: Point,
    /// The first point of the current sub-path.
    first: Point,
}

impl PathState {
    /// The state before the first instruction.
    pub fn new() -> Self {
        PathState {
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
        }
    }

    /// The current position.
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// The position at the start of the current sub-path.
    pub fn start_position(&self) -> Point {
        self.first
    }

    pub fn move_to(&mut self, to: Point) {
        self.current = to;
        self.first = to;
    }

    pub fn line_to(&mut self, to: Point) {
        self.current = to;
    }

    pub fn close(&mut self) {
        self.current = self.first;
    }

    pub fn relative_to_absolute(&self, v: Vector) -> Point {
        self.current + v
    }

    /// Resolves the end position of a command starting at the current position
    /// and advances to it.
    pub fn apply(&mut self, command: &Command) -> Point {
        match *command {
            Command::MoveTo(to) => self.move_to(to),
            Command::RelativeMoveTo(v) => {
                let to = self.relative_to_absolute(v);
                self.move_to(to);
            }
            Command::LineTo(to) => self.line_to(to),
            Command::RelativeLineTo(v) => {
                let to = self.relative_to_absolute(v);
                self.line_to(to);
            }
            Command::HorizontalLineTo(x) => {
                let to = point(x, self.current.y);
                self.line_to(to);
            }
            Command::RelativeHorizontalLineTo(dx) => {
                let to = self.relative_to_absolute(vector(dx, 0.0));
                self.line_to(to);
            }
            Command::VerticalLineTo(y) => {
                let to = point(self.current.x, y);
                self.line_to(to);
            }
            Command::RelativeVerticalLineTo(dy) => {
                let to = self.relative_to_absolute(vector(0.0, dy));
                self.line_to(to);
            }
            Command::Close | Command::RelativeClose => self.close(),
        }

        self.current
    }
}

impl Default for PathState {
    fn default() -> Self {
        PathState::new()
    }
}

#[test]
fn walk_commands() {
    let mut state = PathState::new();
    assert_eq!(state.apply(&Command::RelativeMoveTo(vector(1.0, 1.0))), point(1.0, 1.0));
    assert_eq!(state.apply(&Command::RelativeHorizontalLineTo(4.0)), point(5.0, 1.0));
    assert_eq!(state.apply(&Command::VerticalLineTo(-2.0)), point(5.0, -2.0));
    assert_eq!(state.apply(&Command::LineTo(point(3.0, 3.0))), point(3.0, 3.0));
    assert_eq!(state.start_position(), point(1.0, 1.0));
    assert_eq!(state.apply(&Command::Close), point(1.0, 1.0));

    // After a close, relative commands start from the sub-path's first point.
    assert_eq!(state.apply(&Command::RelativeLineTo(vector(1.0, 0.0))), point(2.0, 1.0));
}

#[test]
fn close_without_move_returns_to_origin() {
    let mut state = PathState::new();
    state.apply(&Command::LineTo(point(3.0, 4.0)));
    assert_eq!(state.apply(&Command::RelativeClose), point(0.0, 0.0));
}
