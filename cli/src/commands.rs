use path_data::PathData;
use std::io;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    /// Prints the path back with single spaces and elided letters.
    Normalize,
    /// Converts every instruction to its absolute form.
    Absolute,
    /// Converts every instruction to its relative form.
    Relative,
    /// Prints the resolved start and end positions of each instruction.
    Positions,
}

pub struct PathCmd {
    pub path: PathData,
    pub action: Action,
    pub output: Box<dyn io::Write>,
}
