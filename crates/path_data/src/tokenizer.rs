//! Splits path data into command groups.
//!
//! The grammar has no universal delimiter: numbers can be separated by
//! commas, whitespace, or nothing at all when the second one is negative
//! (`10-5` reads as `10` and `-5`), and command letters can be glued to their
//! parameters. The source is first normalized so that groups are separated by
//! commas and parameters by single spaces:
//!
//! 1. commas become spaces,
//! 2. a space is inserted before every `-`,
//! 3. a comma and a space surround every command letter (`,M `),
//! 4. whitespace runs collapse to a single space.
//!
//! Splitting the result on commas gives one piece per command group. The first
//! piece precedes the first command letter and must be empty.
//!
//! A consequence of step 2 is that exponents with a negative sign (`1e-5`) are
//! split in two and rejected.

use crate::commands::is_command_letter;
use crate::error::ParseError;

/// A command letter and its parameters, as written in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandGroup {
    pub command: char,
    /// Position of the group in the source, starting at 1.
    pub group: usize,
    pub parameters: Vec<f64>,
}

/// Rewrites the source so that command groups are separated by commas and
/// parameters by single spaces.
pub fn normalize(src: &str) -> String {
    let mut spaced = String::with_capacity(src.len() * 2);
    for c in src.chars() {
        match c {
            ',' => spaced.push(' '),
            '-' => spaced.push_str(" -"),
            c if is_command_letter(c) => {
                spaced.push(',');
                spaced.push(c);
                spaced.push(' ');
            }
            c => spaced.push(c),
        }
    }

    let mut normalized = String::with_capacity(spaced.len());
    for word in spaced.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }

    normalized
}

/// Splits the source into all of its command groups, failing on the first
/// invalid one.
pub fn tokenize(src: &str) -> Result<Vec<CommandGroup>, ParseError> {
    Tokenizer::new(src).collect()
}

/// An iterator over the command groups of some path data.
pub struct Tokenizer {
    normalized: String,
    cursor: usize,
    group: usize,
    leading: Option<String>,
}

impl Tokenizer {
    pub fn new(src: &str) -> Self {
        let normalized = normalize(src);
        let (leading, cursor) = match normalized.find(',') {
            Some(idx) => (normalized[..idx].trim(), idx + 1),
            None => (normalized.trim(), normalized.len()),
        };
        let leading = if leading.is_empty() {
            None
        } else {
            Some(leading.to_string())
        };

        Tokenizer {
            normalized,
            cursor,
            group: 0,
            leading,
        }
    }

    /// The normalized source.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    fn finish(&mut self) {
        self.cursor = self.normalized.len();
    }
}

impl Iterator for Tokenizer {
    type Item = Result<CommandGroup, ParseError>;

    fn next(&mut self) -> Option<Result<CommandGroup, ParseError>> {
        if let Some(src) = self.leading.take() {
            self.finish();
            return Some(Err(ParseError::MissingCommand { src }));
        }

        while self.cursor < self.normalized.len() {
            let rest = &self.normalized[self.cursor..];
            let (piece, advance) = match rest.find(',') {
                Some(idx) => (&rest[..idx], idx + 1),
                None => (rest, rest.len()),
            };
            self.cursor += advance;

            let piece = piece.trim_end();
            let command = match piece.chars().next() {
                Some(c) => c,
                None => continue,
            };

            self.group += 1;
            let group = self.group;

            let mut parameters = Vec::new();
            for token in piece[command.len_utf8()..].split_whitespace() {
                match token.parse::<f64>() {
                    Ok(value) if value.is_finite() => parameters.push(value),
                    _ => {
                        let src = token.to_string();
                        self.cursor = self.normalized.len();
                        return Some(Err(ParseError::InvalidNumericToken { src, group }));
                    }
                }
            }

            log::trace!("command group {}: {:?} {:?}", group, command, parameters);

            return Some(Ok(CommandGroup {
                command,
                group,
                parameters,
            }));
        }

        None
    }
}

#[test]
fn normalize_glued_numbers() {
    assert_eq!(normalize("M10-5L1,2"), ",M 10 -5,L 1 2");
    assert_eq!(normalize("  M 0,0\n\tL 1 1  "), ",M 0 0 ,L 1 1");
    assert_eq!(normalize(""), "");
}

#[test]
fn groups() {
    let groups = tokenize("M10-5L1,2 3 4z").unwrap();
    assert_eq!(
        groups,
        vec![
            CommandGroup {
                command: 'M',
                group: 1,
                parameters: vec![10.0, -5.0]
            },
            CommandGroup {
                command: 'L',
                group: 2,
                parameters: vec![1.0, 2.0, 3.0, 4.0]
            },
            CommandGroup {
                command: 'z',
                group: 3,
                parameters: vec![]
            },
        ]
    );
}

#[test]
fn empty() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize(" \n ,, ").unwrap(), vec![]);
}

#[test]
fn numbers() {
    let groups = tokenize("M .5 1. L 1e3 +2 -0.25-.5").unwrap();
    assert_eq!(groups[0].parameters, vec![0.5, 1.0]);
    assert_eq!(groups[1].parameters, vec![1000.0, 2.0, -0.25, -0.5]);
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match tokenize(src) {
        Err(ParseError::InvalidNumericToken { .. }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1e-5"));
    assert!(bad_number("M 0 0.6.5"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 x"));
    assert!(bad_number("M 0 inf"));
    assert!(bad_number("M 0 1ee2"));
}

#[test]
fn bad_number_reports_group() {
    assert_eq!(
        tokenize("M 0 0 L 1 1 L 2 #"),
        Err(ParseError::InvalidNumericToken {
            src: "#".to_string(),
            group: 3
        })
    );
}

#[test]
fn parameters_before_first_command() {
    assert_eq!(
        tokenize("5 5 M 0 0"),
        Err(ParseError::MissingCommand {
            src: "5 5".to_string()
        })
    );
    assert_eq!(
        tokenize("5"),
        Err(ParseError::MissingCommand {
            src: "5".to_string()
        })
    );

    // The error ends the iteration.
    let mut tokenizer = Tokenizer::new("1 M 0 0");
    assert!(tokenizer.next().unwrap().is_err());
    assert!(tokenizer.next().is_none());
}

#[test]
fn tokenizer_keeps_normalized_source() {
    let mut tokenizer = Tokenizer::new("M0,0\nL5-5");
    assert_eq!(tokenizer.normalized(), ",M 0 0 ,L 5 -5");
    assert_eq!(tokenizer.next().map(|group| group.map(|g| g.command)), Some(Ok('M')));
    assert_eq!(tokenizer.normalized(), normalize("M0,0\nL5-5"));
}
