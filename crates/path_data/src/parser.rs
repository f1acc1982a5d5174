//! Builds a [`PathData`](../struct.PathData.html) from path data text.
//!
//! Each command group expands into as many instructions as it has parameter
//! sets. `L 1 1 2 2 3 3` gives three line instructions: the first one prints
//! its letter, the other two are implicit repetitions of it.
//!
//! # Examples
//!
//! ```
//! # extern crate path_data;
//! # fn main() {
//! use path_data::{parse, Command};
//! use path_data::math::point;
//!
//! let path = parse("M 0 0 L 10 10 20 20").unwrap();
//! let commands: Vec<Command> = path.iter().map(|(_, i)| i.command()).collect();
//! assert_eq!(
//!     commands,
//!     vec![
//!         Command::MoveTo(point(0.0, 0.0)),
//!         Command::LineTo(point(10.0, 10.0)),
//!         Command::LineTo(point(20.0, 20.0)),
//!     ]
//! );
//! # }
//! ```

use crate::commands::CommandKind;
use crate::error::ParseError;
use crate::tokenizer::{CommandGroup, Tokenizer};
use crate::PathData;

use std::str::FromStr;

/// Parses path data.
///
/// Parsing stops at the first invalid command group and no partial result is
/// returned. An empty source gives an empty path.
pub fn parse(src: &str) -> Result<PathData, ParseError> {
    let mut path = PathData::new();
    let mut num_groups = 0;
    for group in Tokenizer::new(src) {
        build_group(&group?, &mut path)?;
        num_groups += 1;
    }

    log::debug!(
        "Parsed {} instructions from {} command groups",
        path.len(),
        num_groups
    );

    Ok(path)
}

fn build_group(group: &CommandGroup, path: &mut PathData) -> Result<(), ParseError> {
    let kind = match CommandKind::from_letter(group.command) {
        Some(kind) => kind,
        None => {
            return Err(ParseError::UnsupportedCommand {
                command: group.command,
                group: group.group,
            });
        }
    };

    let count = group.parameters.len();
    let stride = kind.num_parameters();
    let valid_count = if stride == 0 {
        count == 0
    } else {
        count > 0 && count % stride == 0
    };
    if !valid_count {
        return Err(ParseError::MalformedParameterCount {
            command: group.command,
            group: group.group,
            count,
        });
    }

    if stride == 0 {
        let id = path.push(kind.with_parameters(&[]));
        path.set_explicit_symbol(id, true);
        return Ok(());
    }

    for (i, parameters) in group.parameters.chunks(stride).enumerate() {
        let id = path.push(kind.with_parameters(parameters));
        path.set_explicit_symbol(id, i == 0);
    }

    Ok(())
}

impl FromStr for PathData {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<PathData, ParseError> {
        parse(src)
    }
}

#[cfg(test)]
use crate::commands::Command;
#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn summary(path: &PathData) -> Vec<(Command, bool)> {
    path.iter()
        .map(|(_, instruction)| (instruction.command(), instruction.explicit_symbol()))
        .collect()
}

#[test]
fn empty() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   ").unwrap().is_empty());
}

#[test]
fn implicit_repetitions() {
    let path = parse("M 0 0 L 10 10 20 20").unwrap();
    assert_eq!(
        summary(&path),
        vec![
            (Command::MoveTo(point(0.0, 0.0)), true),
            (Command::LineTo(point(10.0, 10.0)), true),
            (Command::LineTo(point(20.0, 20.0)), false),
        ]
    );

    let third = path.last().unwrap();
    assert_eq!(path.start_position(third), point(10.0, 10.0));
}

#[test]
fn repeated_groups_stay_explicit() {
    let path = parse("L 1 1 L 2 2").unwrap();
    assert_eq!(
        summary(&path),
        vec![
            (Command::LineTo(point(1.0, 1.0)), true),
            (Command::LineTo(point(2.0, 2.0)), true),
        ]
    );
}

#[test]
fn relative_lines() {
    let path = parse("m 0 0 l 5 5 5 5").unwrap();
    let ends: Vec<_> = path.iter().map(|(id, _)| path.end_position(id)).collect();
    assert_eq!(ends, vec![point(0.0, 0.0), point(5.0, 5.0), point(10.0, 10.0)]);
}

#[test]
fn moves_repeat_as_moves() {
    let path = parse("M 0 0 10 10").unwrap();
    assert_eq!(
        summary(&path),
        vec![
            (Command::MoveTo(point(0.0, 0.0)), true),
            (Command::MoveTo(point(10.0, 10.0)), false),
        ]
    );
}

#[test]
fn separators() {
    let a = parse("M0,0L10-10l-5-5").unwrap();
    let b = parse("M 0 0 L 10 -10 l -5 -5").unwrap();
    assert_eq!(a, b);
    assert_eq!(
        summary(&a)[2],
        (Command::RelativeLineTo(vector(-5.0, -5.0)), true)
    );
}

#[test]
fn horizontal_vertical_close() {
    let path = parse("M 1 1 H 5 6 v 2 -1 z").unwrap();
    assert_eq!(
        summary(&path),
        vec![
            (Command::MoveTo(point(1.0, 1.0)), true),
            (Command::HorizontalLineTo(5.0), true),
            (Command::HorizontalLineTo(6.0), false),
            (Command::RelativeVerticalLineTo(2.0), true),
            (Command::RelativeVerticalLineTo(-1.0), false),
            (Command::RelativeClose, true),
        ]
    );
    let ends: Vec<_> = path.positions().map(|s| s.to).collect();
    assert_eq!(ends[4], point(6.0, 2.0));
    assert_eq!(ends[5], point(1.0, 1.0));
}

#[test]
fn odd_parameter_count() {
    assert_eq!(
        parse("L 1 2 3"),
        Err(ParseError::MalformedParameterCount {
            command: 'L',
            group: 1,
            count: 3
        })
    );
    assert_eq!(
        parse("M 0 0 l 1 2 3").err().and_then(|e| e.command()),
        Some('l')
    );
    assert_eq!(
        parse("M 0 0 m 1 2 3"),
        Err(ParseError::MalformedParameterCount {
            command: 'm',
            group: 2,
            count: 3
        })
    );
}

#[test]
fn missing_parameters() {
    let malformed = |src: &str| match parse(src) {
        Err(ParseError::MalformedParameterCount { .. }) => true,
        _ => false,
    };

    assert!(malformed("M"));
    assert!(malformed("M 0 0 L"));
    assert!(malformed("M 0 0 H"));
    assert!(malformed("M 0 0 Z 1"));
}

#[test]
fn unsupported_commands() {
    assert_eq!(
        parse("Q 1 2 3 4"),
        Err(ParseError::UnsupportedCommand {
            command: 'Q',
            group: 1
        })
    );

    for src in &[
        "M 0 0 C 1 1 2 2 3 3",
        "M 0 0 c 1 1 2 2 3 3",
        "M 0 0 S 1 1 2 2",
        "M 0 0 s 1 1 2 2",
        "M 0 0 q 1 1 2 2",
        "M 0 0 T 1 1",
        "M 0 0 t 1 1",
        "M 0 0 A 5 5 0 0 1 10 10",
        "M 0 0 a 5 5 0 0 1 10 10",
    ] {
        match parse(src) {
            Err(ParseError::UnsupportedCommand { group: 2, .. }) => {}
            r => panic!("{:?}: {:?}", src, r),
        }
    }
}

#[test]
fn invalid_number() {
    match parse("M 0 0 L 1 1x") {
        Err(ParseError::InvalidNumericToken { src, group: 2 }) => assert_eq!(src, "1x"),
        r => panic!("{:?}", r),
    }
}

#[test]
fn from_str() {
    let path: PathData = "M 1 2".parse().unwrap();
    assert_eq!(path.len(), 1);
    assert!("L 1".parse::<PathData>().is_err());
}
