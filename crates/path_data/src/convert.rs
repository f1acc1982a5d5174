//! Conversions between absolute and relative instructions.
//!
//! Conversions preserve geometry: the converted instruction resolves to the
//! same end position as the instruction it replaces. Relative offsets always
//! go from the start position to the end position (`end - start`), for moves
//! as well as for lines.

use crate::commands::Command;
use crate::math::Point;
use crate::{InstructionId, PathData};

impl Command {
    /// Returns the absolute equivalent of this command, given its resolved end
    /// position. Absolute commands are returned unchanged.
    pub fn to_absolute(&self, end: Point) -> Command {
        match *self {
            Command::RelativeMoveTo(..) => Command::MoveTo(end),
            Command::RelativeLineTo(..) => Command::LineTo(end),
            Command::RelativeHorizontalLineTo(..) => Command::HorizontalLineTo(end.x),
            Command::RelativeVerticalLineTo(..) => Command::VerticalLineTo(end.y),
            Command::RelativeClose => Command::Close,
            absolute => absolute,
        }
    }

    /// Returns the relative equivalent of this command, given its resolved
    /// start and end positions. Relative commands are returned unchanged.
    pub fn to_relative(&self, start: Point, end: Point) -> Command {
        match *self {
            Command::MoveTo(..) => Command::RelativeMoveTo(end - start),
            Command::LineTo(..) => Command::RelativeLineTo(end - start),
            Command::HorizontalLineTo(..) => Command::RelativeHorizontalLineTo(end.x - start.x),
            Command::VerticalLineTo(..) => Command::RelativeVerticalLineTo(end.y - start.y),
            Command::Close => Command::RelativeClose,
            relative => relative,
        }
    }
}

impl PathData {
    /// The absolute equivalent of an instruction's command.
    pub fn to_absolute(&self, id: InstructionId) -> Command {
        let command = self.instruction(id).command();
        if !command.is_relative() {
            return command;
        }

        command.to_absolute(self.end_position(id))
    }

    /// The relative equivalent of an instruction's command.
    pub fn to_relative(&self, id: InstructionId) -> Command {
        let command = self.instruction(id).command();
        if command.is_relative() {
            return command;
        }

        command.to_relative(self.start_position(id), self.end_position(id))
    }

    /// Replaces an instruction with its absolute equivalent.
    pub fn make_absolute(&mut self, id: InstructionId) {
        let command = self.to_absolute(id);
        self.set_command(id, command);
    }

    /// Replaces an instruction with its relative equivalent.
    pub fn make_relative(&mut self, id: InstructionId) {
        let command = self.to_relative(id);
        self.set_command(id, command);
    }

    /// Converts every instruction to its absolute equivalent in a single pass.
    pub fn make_all_absolute(&mut self) {
        self.rewrite_commands(|command, segment| command.to_absolute(segment.to));
    }

    /// Converts every instruction to its relative equivalent in a single pass.
    pub fn make_all_relative(&mut self) {
        self.rewrite_commands(|command, segment| command.to_relative(segment.from, segment.to));
    }
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn absolute_is_identity() {
    let path = crate::parse("M 1 2 L 3 4 H 5 V 6 Z").unwrap();
    for (id, instruction) in &path {
        let converted = path.to_absolute(id);
        assert_eq!(converted, instruction.command());
        assert_eq!(converted.to_absolute(path.end_position(id)), converted);
    }
}

#[test]
fn relative_to_absolute() {
    let path = crate::parse("m 1 1 l 5 5 h 2 v -1 z").unwrap();
    let ids: Vec<InstructionId> = path.iter().map(|(id, _)| id).collect();
    assert_eq!(path.to_absolute(ids[0]), Command::MoveTo(point(1.0, 1.0)));
    assert_eq!(path.to_absolute(ids[1]), Command::LineTo(point(6.0, 6.0)));
    assert_eq!(path.to_absolute(ids[2]), Command::HorizontalLineTo(8.0));
    assert_eq!(path.to_absolute(ids[3]), Command::VerticalLineTo(5.0));
    assert_eq!(path.to_absolute(ids[4]), Command::Close);
}

#[test]
fn relative_offset_goes_from_start_to_end() {
    let path = crate::parse("M 10 10 L 15 20").unwrap();
    let line = path.last().unwrap();
    assert_eq!(path.to_relative(line), Command::RelativeLineTo(vector(5.0, 10.0)));
}

#[test]
fn relative_move() {
    let path = crate::parse("M 10 10 M 15 5").unwrap();
    let first = path.first().unwrap();
    let last = path.last().unwrap();
    assert_eq!(path.to_relative(first), Command::RelativeMoveTo(vector(10.0, 10.0)));
    assert_eq!(path.to_relative(last), Command::RelativeMoveTo(vector(5.0, -5.0)));
}

#[test]
fn make_relative_keeps_geometry() {
    let mut path = crate::parse("M 1 1 L 4 5 H 0 V 2 Z L 3 3").unwrap();
    let before: Vec<_> = path.positions().collect();

    let ids: Vec<InstructionId> = path.iter().map(|(id, _)| id).collect();
    for &id in &ids {
        path.make_relative(id);
        assert!(path.instruction(id).is_relative());
    }

    let after: Vec<_> = path.positions().collect();
    assert_eq!(before, after);

    for &id in &ids {
        path.make_absolute(id);
        assert!(!path.instruction(id).is_relative());
    }
    let restored: Vec<_> = path.positions().collect();
    assert_eq!(before, restored);
}

#[test]
fn convert_whole_path() {
    let mut path = crate::parse("M 0 0 L 10 10 20 20").unwrap();
    path.make_all_relative();
    assert_eq!(path.to_string(), "m 0 0 l 10 10 10 10");

    path.make_all_absolute();
    assert_eq!(path.to_string(), "M 0 0 L 10 10 20 20");
}

#[test]
fn convert_single_instruction_splits_group() {
    let mut path = crate::parse("M 0 0 L 10 10 20 20 30 30").unwrap();
    let ids: Vec<InstructionId> = path.iter().map(|(id, _)| id).collect();
    path.make_relative(ids[2]);
    assert_eq!(path.to_string(), "M 0 0 L 10 10 l 10 10 L 30 30");
}
