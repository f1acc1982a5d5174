use thiserror::Error;

/// Errors which can occur while parsing path data.
///
/// Command groups are counted from 1 in the order they appear in the source.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Command group {group}: wrong number of parameters for {command:?}, got {count}.")]
    MalformedParameterCount {
        command: char,
        group: usize,
        count: usize,
    },
    #[error("Command group {group}: unsupported command {command:?}.")]
    UnsupportedCommand { command: char, group: usize },
    #[error("Command group {group}: expected number, got {src:?}.")]
    InvalidNumericToken { src: String, group: usize },
    #[error("Expected a command before {src:?}.")]
    MissingCommand { src: String },
}

impl ParseError {
    /// The command letter the error refers to, if any.
    pub fn command(&self) -> Option<char> {
        match *self {
            ParseError::MalformedParameterCount { command, .. }
            | ParseError::UnsupportedCommand { command, .. } => Some(command),
            _ => None,
        }
    }
}

#[test]
fn messages() {
    let err = ParseError::MalformedParameterCount {
        command: 'L',
        group: 2,
        count: 3,
    };
    assert_eq!(
        err.to_string(),
        "Command group 2: wrong number of parameters for 'L', got 3."
    );
    assert_eq!(err.command(), Some('L'));

    let err = ParseError::InvalidNumericToken {
        src: "1x".to_string(),
        group: 1,
    };
    assert_eq!(err.to_string(), "Command group 1: expected number, got \"1x\".");
    assert_eq!(err.command(), None);
}
