use crate::commands::{Action, PathCmd};
use path_data::{ParseError, PathData};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub fn transform(mut cmd: PathCmd) -> Result<(), CliError> {
    write_path(cmd.path, cmd.action, &mut *cmd.output)?;

    Ok(())
}

fn write_path(mut path: PathData, action: Action, output: &mut dyn io::Write) -> io::Result<()> {
    match action {
        Action::Normalize => {}
        Action::Absolute => path.make_all_absolute(),
        Action::Relative => path.make_all_relative(),
        Action::Positions => {
            for segment in path.positions() {
                let instruction = path.instruction(segment.id);
                writeln!(
                    output,
                    "{:?} {} {} {} {} {}",
                    segment.id,
                    instruction.letter(),
                    segment.from.x,
                    segment.from.y,
                    segment.to.x,
                    segment.to.y,
                )?;
            }
            return Ok(());
        }
    }

    log::debug!("Writing {} instructions", path.len());
    writeln!(output, "{}", path)
}

#[cfg(test)]
fn run(src: &str, action: Action) -> String {
    let mut output = Vec::new();
    write_path(path_data::parse(src).unwrap(), action, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn normalize() {
    assert_eq!(run("M0,0L10-10 20,20", Action::Normalize), "M 0 0 L 10 -10 20 20\n");
}

#[test]
fn absolute_and_relative() {
    assert_eq!(run("m 1 1 l 2 2 2 2 z", Action::Absolute), "M 1 1 L 3 3 5 5 Z\n");
    assert_eq!(run("M 1 1 L 3 3 5 5 Z", Action::Relative), "m 1 1 l 2 2 2 2 z\n");
}

#[test]
fn positions() {
    assert_eq!(
        run("M 1 1 l 2 0 V 5", Action::Positions),
        "#0 M 0 0 1 1\n#1 l 1 1 3 1\n#2 V 3 1 3 5\n"
    );
}
