//! The commands of the path data mini-language.
//!
//! The tokenizer recognizes the full set of SVG path letters (see
//! [`COMMAND_LETTERS`](constant.COMMAND_LETTERS.html)) but only move, line,
//! horizontal line, vertical line and close have a [`Command`](enum.Command.html)
//! variant. Curve and arc letters (`C S Q T A`) are reported as unsupported by
//! the parser. They are meant to become additional variants here, reusing the
//! same chain of derived start positions.

use crate::math::{point, vector, Point, Vector};

/// Letters that start a new command group.
pub const COMMAND_LETTERS: [char; 20] = [
    'M', 'm', 'Z', 'z', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't',
    'A', 'a',
];

#[inline]
pub fn is_command_letter(c: char) -> bool {
    COMMAND_LETTERS.contains(&c)
}

/// The stored payload of an instruction.
///
/// Absolute variants store the end position, relative variants store the
/// offset from the end of the previous instruction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Command {
    MoveTo(Point),
    RelativeMoveTo(Vector),
    LineTo(Point),
    RelativeLineTo(Vector),
    HorizontalLineTo(f64),
    RelativeHorizontalLineTo(f64),
    VerticalLineTo(f64),
    RelativeVerticalLineTo(f64),
    Close,
    RelativeClose,
}

/// The kind of a command, without its parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CommandKind {
    AbsoluteMove,
    RelativeMove,
    AbsoluteLine,
    RelativeLine,
    AbsoluteHorizontal,
    RelativeHorizontal,
    AbsoluteVertical,
    RelativeVertical,
    Close,
    RelativeClose,
}

impl CommandKind {
    /// Returns the kind associated with a command letter, or `None` if the
    /// letter is unknown or not supported.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'M' => CommandKind::AbsoluteMove,
            'm' => CommandKind::RelativeMove,
            'L' => CommandKind::AbsoluteLine,
            'l' => CommandKind::RelativeLine,
            'H' => CommandKind::AbsoluteHorizontal,
            'h' => CommandKind::RelativeHorizontal,
            'V' => CommandKind::AbsoluteVertical,
            'v' => CommandKind::RelativeVertical,
            'Z' => CommandKind::Close,
            'z' => CommandKind::RelativeClose,
            _ => {
                return None;
            }
        })
    }

    pub fn letter(self) -> char {
        match self {
            CommandKind::AbsoluteMove => 'M',
            CommandKind::RelativeMove => 'm',
            CommandKind::AbsoluteLine => 'L',
            CommandKind::RelativeLine => 'l',
            CommandKind::AbsoluteHorizontal => 'H',
            CommandKind::RelativeHorizontal => 'h',
            CommandKind::AbsoluteVertical => 'V',
            CommandKind::RelativeVertical => 'v',
            CommandKind::Close => 'Z',
            CommandKind::RelativeClose => 'z',
        }
    }

    pub fn is_relative(self) -> bool {
        self.letter().is_ascii_lowercase()
    }

    pub fn is_close(self) -> bool {
        match self {
            CommandKind::Close | CommandKind::RelativeClose => true,
            _ => false,
        }
    }

    /// Number of parameters consumed by a single instruction of this kind.
    pub fn num_parameters(self) -> usize {
        match self {
            CommandKind::AbsoluteMove
            | CommandKind::RelativeMove
            | CommandKind::AbsoluteLine
            | CommandKind::RelativeLine => 2,
            CommandKind::AbsoluteHorizontal
            | CommandKind::RelativeHorizontal
            | CommandKind::AbsoluteVertical
            | CommandKind::RelativeVertical => 1,
            CommandKind::Close | CommandKind::RelativeClose => 0,
        }
    }

    /// Builds a command of this kind.
    ///
    /// `params` must contain exactly `num_parameters()` values.
    pub fn with_parameters(self, params: &[f64]) -> Command {
        debug_assert_eq!(params.len(), self.num_parameters());
        match self {
            CommandKind::AbsoluteMove => Command::MoveTo(point(params[0], params[1])),
            CommandKind::RelativeMove => Command::RelativeMoveTo(vector(params[0], params[1])),
            CommandKind::AbsoluteLine => Command::LineTo(point(params[0], params[1])),
            CommandKind::RelativeLine => Command::RelativeLineTo(vector(params[0], params[1])),
            CommandKind::AbsoluteHorizontal => Command::HorizontalLineTo(params[0]),
            CommandKind::RelativeHorizontal => Command::RelativeHorizontalLineTo(params[0]),
            CommandKind::AbsoluteVertical => Command::VerticalLineTo(params[0]),
            CommandKind::RelativeVertical => Command::RelativeVerticalLineTo(params[0]),
            CommandKind::Close => Command::Close,
            CommandKind::RelativeClose => Command::RelativeClose,
        }
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match *self {
            Command::MoveTo(..) => CommandKind::AbsoluteMove,
            Command::RelativeMoveTo(..) => CommandKind::RelativeMove,
            Command::LineTo(..) => CommandKind::AbsoluteLine,
            Command::RelativeLineTo(..) => CommandKind::RelativeLine,
            Command::HorizontalLineTo(..) => CommandKind::AbsoluteHorizontal,
            Command::RelativeHorizontalLineTo(..) => CommandKind::RelativeHorizontal,
            Command::VerticalLineTo(..) => CommandKind::AbsoluteVertical,
            Command::RelativeVerticalLineTo(..) => CommandKind::RelativeVertical,
            Command::Close => CommandKind::Close,
            Command::RelativeClose => CommandKind::RelativeClose,
        }
    }

    /// The letter printed in front of this command.
    pub fn letter(&self) -> char {
        self.kind().letter()
    }

    pub fn is_relative(&self) -> bool {
        self.kind().is_relative()
    }

    pub fn is_close(&self) -> bool {
        self.kind().is_close()
    }

    /// Returns true if the end position does not depend on previous instructions.
    pub fn is_anchored(&self) -> bool {
        match self {
            Command::MoveTo(..) | Command::LineTo(..) => true,
            _ => false,
        }
    }
}

#[test]
fn letters_round_trip() {
    for &letter in &['M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'Z', 'z'] {
        let kind = CommandKind::from_letter(letter).unwrap();
        assert_eq!(kind.letter(), letter);
        assert_eq!(kind.is_relative(), letter.is_ascii_lowercase());
        assert!(is_command_letter(letter));
    }
}

#[test]
fn curves_are_recognized_but_unsupported() {
    for &letter in &['C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a'] {
        assert!(is_command_letter(letter));
        assert_eq!(CommandKind::from_letter(letter), None);
    }
    assert!(!is_command_letter('x'));
    assert!(!is_command_letter('e'));
}

#[test]
fn build_from_parameters() {
    assert_eq!(
        CommandKind::RelativeLine.with_parameters(&[1.0, -2.0]),
        Command::RelativeLineTo(vector(1.0, -2.0))
    );
    assert_eq!(
        CommandKind::AbsoluteVertical.with_parameters(&[3.5]),
        Command::VerticalLineTo(3.5)
    );
    assert_eq!(CommandKind::Close.with_parameters(&[]), Command::Close);
    assert_eq!(Command::HorizontalLineTo(1.0).letter(), 'H');
    assert!(Command::MoveTo(point(0.0, 0.0)).is_anchored());
    assert!(!Command::HorizontalLineTo(1.0).is_anchored());
}
