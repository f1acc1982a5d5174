//! Prints a [`PathData`](../struct.PathData.html) back into path data text.
//!
//! Instructions are separated by single spaces. An instruction prints its
//! letter only if its symbol is explicit, followed by its stored parameters:
//! positions for absolute instructions and offsets for relative ones. Numbers
//! use the shortest representation that parses back to the same value and
//! never use exponents, so the output can always be parsed again.
//!
//! ```
//! # extern crate path_data;
//! # fn main() {
//! let path = path_data::parse("M0,0 L10-10 20,20Z").unwrap();
//! assert_eq!(path_data::serialize(&path), "M 0 0 L 10 -10 20 20 Z");
//! # }
//! ```

use crate::commands::Command;
use crate::{Instruction, PathData};

use std::fmt;

/// Prints the path data text of a sequence of instructions.
pub fn serialize(path: &PathData) -> String {
    path.to_string()
}

fn write_parameters(command: &Command, f: &mut fmt::Formatter) -> fmt::Result {
    match *command {
        Command::MoveTo(to) | Command::LineTo(to) => write!(f, "{} {}", to.x, to.y),
        Command::RelativeMoveTo(v) | Command::RelativeLineTo(v) => write!(f, "{} {}", v.x, v.y),
        Command::HorizontalLineTo(val)
        | Command::RelativeHorizontalLineTo(val)
        | Command::VerticalLineTo(val)
        | Command::RelativeVerticalLineTo(val) => write!(f, "{}", val),
        Command::Close | Command::RelativeClose => Ok(()),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let command = self.command();
        if command.is_close() {
            return write!(f, "{}", command.letter());
        }

        if self.explicit_symbol() {
            write!(f, "{} ", command.letter())?;
        }

        write_parameters(&command, f)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (_, instruction)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", instruction)?;
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn empty() {
    assert_eq!(serialize(&PathData::new()), "");
}

#[test]
fn elided_symbols() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(0.0, 0.0)));
    path.push(Command::LineTo(point(10.0, 10.0)));
    path.push(Command::LineTo(point(20.0, 20.0)));
    path.push(Command::RelativeHorizontalLineTo(-5.5));
    path.push(Command::RelativeClose);

    assert_eq!(serialize(&path), "M 0 0 L 10 10 20 20 h -5.5 z");

    let last_line = path.instruction(path.first().unwrap()).next().unwrap();
    let last_line = path.instruction(last_line).next().unwrap();
    path.set_explicit_symbol(last_line, true);
    assert_eq!(serialize(&path), "M 0 0 L 10 10 L 20 20 h -5.5 z");
}

#[test]
fn instruction_display() {
    let mut path = PathData::new();
    let a = path.push(Command::RelativeMoveTo(vector(1.0, -2.0)));
    let b = path.push(Command::RelativeMoveTo(vector(0.25, 3.0)));
    let c = path.push(Command::VerticalLineTo(4.0));
    let d = path.push(Command::Close);

    assert_eq!(path.instruction(a).to_string(), "m 1 -2");
    assert_eq!(path.instruction(b).to_string(), "0.25 3");
    assert_eq!(path.instruction(c).to_string(), "V 4");
    assert_eq!(path.instruction(d).to_string(), "Z");
}

#[test]
fn numbers_parse_back() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(0.1 + 0.2, 1e-7)));
    path.push(Command::LineTo(point(-1e21, 1.0 / 3.0)));

    let text = serialize(&path);
    assert!(!text.contains('e'));
    assert_eq!(crate::parse(&text).unwrap(), path);
}
