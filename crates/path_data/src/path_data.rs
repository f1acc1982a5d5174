//! The instruction sequence.
//!
//! # Representation
//!
//! Instructions live in a vector of slots and are addressed by
//! [`InstructionId`](../struct.InstructionId.html). Each instruction refers to
//! its neighbours by ID, so the sequence is a doubly linked list owned by a
//! single container. Removed slots are recycled by later insertions.
//!
//! ```ascii
//!  slots:  [ M 0 0 ][ l 5 5 ][  free  ][ l 5 5 ]
//!  chain:     #0 ───────► #1 ───────────────► #3
//! ```
//!
//! # Positions
//!
//! Only absolute move and line instructions store their end position. Every
//! other end position is derived from the predecessors: the start position of
//! an instruction is the end position of the previous one (or the origin),
//! relative instructions add their offset to it, and close instructions return
//! to the start of the current sub-path.
//!
//! Nothing is cached. Querying the end position of an instruction walks back
//! to the closest instruction that does not depend on its predecessors, which
//! costs O(k) for the k-th instruction of a relative run (and O(n²) to query
//! every instruction of a purely relative path one by one). Use
//! [`PathData::positions`](struct.PathData.html#method.positions) to resolve
//! the whole path in a single O(n) pass.

use crate::commands::{Command, CommandKind};
use crate::math::{point, Point};
use crate::path_state::PathState;
use crate::InstructionId;

use std::fmt;

/// A single instruction of a [`PathData`](struct.PathData.html).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Instruction {
    command: Command,
    explicit_symbol: bool,
    previous: Option<InstructionId>,
    next: Option<InstructionId>,
}

impl Instruction {
    /// The stored command (absolute position or relative offset).
    pub fn command(&self) -> Command {
        self.command
    }

    pub fn kind(&self) -> CommandKind {
        self.command.kind()
    }

    pub fn letter(&self) -> char {
        self.command.letter()
    }

    pub fn is_relative(&self) -> bool {
        self.command.is_relative()
    }

    /// Whether the command letter is printed when serializing.
    pub fn explicit_symbol(&self) -> bool {
        self.explicit_symbol
    }

    pub fn previous(&self) -> Option<InstructionId> {
        self.previous
    }

    pub fn next(&self) -> Option<InstructionId> {
        self.next
    }
}

/// A sequence of chained path instructions.
///
/// See the [module documentation](index.html) for how positions are resolved.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathData {
    slots: Vec<Option<Instruction>>,
    free_slots: Vec<InstructionId>,
    first: Option<InstructionId>,
    last: Option<InstructionId>,
    len: usize,
}

impl PathData {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        PathData::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PathData {
            slots: Vec::with_capacity(capacity),
            ..PathData::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<InstructionId> {
        self.first
    }

    pub fn last(&self) -> Option<InstructionId> {
        self.last
    }

    /// Returns the instruction if the ID refers to one.
    pub fn get(&self, id: InstructionId) -> Option<&Instruction> {
        self.slots.get(id.to_usize()).and_then(Option::as_ref)
    }

    /// Returns the instruction, panicking if the ID does not refer to one.
    pub fn instruction(&self, id: InstructionId) -> &Instruction {
        match self.get(id) {
            Some(instruction) => instruction,
            None => panic!("Invalid instruction id {:?}", id),
        }
    }

    fn instruction_mut(&mut self, id: InstructionId) -> &mut Instruction {
        match self.slots.get_mut(id.to_usize()) {
            Some(Some(instruction)) => instruction,
            _ => panic!("Invalid instruction id {:?}", id),
        }
    }

    /// Iterates over the instructions in path order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            path: self,
            next: self.first,
            remaining: self.len,
        }
    }

    /// Resolves the start and end positions of every instruction in a single
    /// pass.
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            path: self,
            next: self.first,
            state: PathState::new(),
        }
    }

    /// Appends an instruction at the end of the path.
    pub fn push(&mut self, command: Command) -> InstructionId {
        self.insert_between(self.last, None, command)
    }

    /// Inserts an instruction right after `id`.
    pub fn insert_after(&mut self, id: InstructionId, command: Command) -> InstructionId {
        let next = self.instruction(id).next;
        self.insert_between(Some(id), next, command)
    }

    /// Inserts an instruction right before `id`.
    pub fn insert_before(&mut self, id: InstructionId, command: Command) -> InstructionId {
        let previous = self.instruction(id).previous;
        self.insert_between(previous, Some(id), command)
    }

    fn insert_between(
        &mut self,
        previous: Option<InstructionId>,
        next: Option<InstructionId>,
        command: Command,
    ) -> InstructionId {
        let instruction = Instruction {
            command,
            explicit_symbol: false,
            previous,
            next,
        };

        let id = match self.free_slots.pop() {
            Some(id) => {
                self.slots[id.to_usize()] = Some(instruction);
                id
            }
            None => {
                self.slots.push(Some(instruction));
                InstructionId::from_usize(self.slots.len() - 1)
            }
        };

        match previous {
            Some(previous) => self.instruction_mut(previous).next = Some(id),
            None => self.first = Some(id),
        }
        match next {
            Some(next) => self.instruction_mut(next).previous = Some(id),
            None => self.last = Some(id),
        }
        self.len += 1;

        self.repair_symbol(id);
        if let Some(next) = next {
            self.repair_symbol(next);
        }

        id
    }

    /// Removes an instruction and links its neighbours together.
    ///
    /// The following instruction keeps its stored command: if it is relative,
    /// its offset now applies to the end of the removed instruction's
    /// predecessor.
    pub fn remove(&mut self, id: InstructionId) -> Command {
        let removed = match self.slots.get_mut(id.to_usize()).and_then(Option::take) {
            Some(instruction) => instruction,
            None => panic!("Invalid instruction id {:?}", id),
        };

        match removed.previous {
            Some(previous) => self.instruction_mut(previous).next = removed.next,
            None => self.first = removed.next,
        }
        match removed.next {
            Some(next) => self.instruction_mut(next).previous = removed.previous,
            None => self.last = removed.previous,
        }

        self.free_slots.push(id);
        self.len -= 1;

        if let Some(next) = removed.next {
            self.repair_symbol(next);
        }

        removed.command
    }

    /// Removes all instructions.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    /// Replaces the stored command of an instruction, keeping its position in
    /// the sequence.
    pub fn set_command(&mut self, id: InstructionId, command: Command) {
        self.instruction_mut(id).command = command;
        self.repair_symbol(id);
        if let Some(next) = self.instruction(id).next {
            self.repair_symbol(next);
        }
    }

    /// Returns true if the command letter of this instruction can't be elided
    /// when serializing.
    ///
    /// This is the case for the first instruction, for close instructions and
    /// for instructions with a different letter than their predecessor.
    pub fn requires_symbol(&self, id: InstructionId) -> bool {
        let instruction = self.instruction(id);
        if instruction.command.is_close() {
            return true;
        }

        match instruction.previous {
            Some(previous) => self.instruction(previous).letter() != instruction.letter(),
            None => true,
        }
    }

    /// Sets whether the command letter is printed.
    ///
    /// Instructions that [require](#method.requires_symbol) their letter stay
    /// explicit. Returns the resulting value.
    pub fn set_explicit_symbol(&mut self, id: InstructionId, explicit: bool) -> bool {
        let explicit = explicit || self.requires_symbol(id);
        self.instruction_mut(id).explicit_symbol = explicit;

        explicit
    }

    /// Rewrites every command from its resolved positions, keeping the explicit
    /// symbols unless the new letters require them.
    pub(crate) fn rewrite_commands<F>(&mut self, mut rewrite: F)
    where
        F: FnMut(&Command, &Segment) -> Command,
    {
        let segments: Vec<Segment> = self.positions().collect();
        for segment in &segments {
            let instruction = self.instruction_mut(segment.id);
            instruction.command = rewrite(&instruction.command, segment);
        }
        for segment in &segments {
            self.repair_symbol(segment.id);
        }
    }

    fn repair_symbol(&mut self, id: InstructionId) {
        if self.requires_symbol(id) {
            self.instruction_mut(id).explicit_symbol = true;
        }
    }

    /// The start position of an instruction: the end position of the previous
    /// instruction or the origin.
    pub fn start_position(&self, id: InstructionId) -> Point {
        match self.instruction(id).previous {
            Some(previous) => self.end_position(previous),
            None => point(0.0, 0.0),
        }
    }

    /// The absolute end position of an instruction.
    pub fn end_position(&self, id: InstructionId) -> Point {
        let instruction = self.instruction(id);
        let mut state = PathState::new();
        if instruction.command.is_anchored() {
            return state.apply(&instruction.command);
        }

        // Walk back until an instruction that doesn't depend on its
        // predecessors. A line can only serve as the anchor if no close
        // further down needs the start of its sub-path.
        let mut chain = vec![id];
        let mut needs_sub_path_start = instruction.command.is_close();
        let mut cursor = instruction.previous;
        while let Some(previous) = cursor {
            let instruction = self.instruction(previous);
            let command = &instruction.command;
            let starts_sub_path = command.kind() == CommandKind::AbsoluteMove;
            if command.is_anchored() && (starts_sub_path || !needs_sub_path_start) {
                state.apply(command);
                break;
            }

            match *command {
                Command::RelativeMoveTo(..) => {
                    needs_sub_path_start = false;
                }
                Command::Close | Command::RelativeClose => {
                    needs_sub_path_start = true;
                }
                _ => {}
            }

            chain.push(previous);
            cursor = instruction.previous;
        }

        for &id in chain.iter().rev() {
            state.apply(&self.instruction(id).command);
        }

        state.current_position()
    }

    /// Moves the end position of an instruction.
    ///
    /// Relative instructions store the new offset from their start position.
    /// Horizontal and vertical lines only take the relevant coordinate. Close
    /// instructions have no stored position and are left untouched.
    ///
    /// Relative instructions that follow keep their offsets and move along.
    pub fn set_end_position(&mut self, id: InstructionId, to: Point) {
        let command = match self.instruction(id).command {
            Command::MoveTo(..) => Command::MoveTo(to),
            Command::LineTo(..) => Command::LineTo(to),
            Command::HorizontalLineTo(..) => Command::HorizontalLineTo(to.x),
            Command::VerticalLineTo(..) => Command::VerticalLineTo(to.y),
            Command::RelativeMoveTo(..) => Command::RelativeMoveTo(to - self.start_position(id)),
            Command::RelativeLineTo(..) => Command::RelativeLineTo(to - self.start_position(id)),
            Command::RelativeHorizontalLineTo(..) => {
                Command::RelativeHorizontalLineTo(to.x - self.start_position(id).x)
            }
            Command::RelativeVerticalLineTo(..) => {
                Command::RelativeVerticalLineTo(to.y - self.start_position(id).y)
            }
            Command::Close | Command::RelativeClose => {
                log::warn!("Ignoring end position {:?} for close instruction {:?}", to, id);
                return;
            }
        };

        self.instruction_mut(id).command = command;
    }
}

impl fmt::Debug for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two sequences are equal if they hold the same commands with the same
/// explicit symbols in the same order, regardless of their IDs.
impl PartialEq for PathData {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().zip(other.iter()).all(|((_, a), (_, b))| {
                a.command == b.command && a.explicit_symbol == b.explicit_symbol
            })
    }
}

impl<'l> IntoIterator for &'l PathData {
    type Item = (InstructionId, &'l Instruction);
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// An iterator over the instructions of a path, in order.
#[derive(Clone)]
pub struct Iter<'l> {
    path: &'l PathData,
    next: Option<InstructionId>,
    remaining: usize,
}

impl<'l> Iterator for Iter<'l> {
    type Item = (InstructionId, &'l Instruction);

    fn next(&mut self) -> Option<(InstructionId, &'l Instruction)> {
        let id = self.next?;
        let instruction = self.path.instruction(id);
        self.next = instruction.next;
        self.remaining = self.remaining.saturating_sub(1);

        Some((id, instruction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l> ExactSizeIterator for Iter<'l> {}

/// The resolved positions of an instruction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub id: InstructionId,
    pub from: Point,
    pub to: Point,
}

/// An iterator resolving the positions of every instruction of a path.
#[derive(Clone)]
pub struct Positions<'l> {
    path: &'l PathData,
    next: Option<InstructionId>,
    state: PathState,
}

impl<'l> Iterator for Positions<'l> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let id = self.next?;
        let instruction = self.path.instruction(id);
        self.next = instruction.next;

        let from = self.state.current_position();
        let to = self.state.apply(&instruction.command);

        Some(Segment { id, from, to })
    }
}

#[cfg(test)]
use crate::math::vector;

#[cfg(test)]
fn relative_lines(n: usize) -> PathData {
    let mut path = PathData::new();
    for _ in 0..n {
        path.push(Command::RelativeLineTo(vector(1.0, 1.0)));
    }
    path
}

#[cfg(test)]
fn assert_chained(path: &PathData) {
    let mut expected_start = point(0.0, 0.0);
    let mut previous = None;
    for (id, instruction) in path {
        assert_eq!(instruction.previous(), previous);
        assert_eq!(path.start_position(id), expected_start);
        expected_start = path.end_position(id);
        previous = Some(id);
    }
    assert_eq!(path.last(), previous);
    if let Some(first) = path.first() {
        assert!(path.instruction(first).explicit_symbol());
    }
}

#[test]
fn empty() {
    let path = PathData::new();
    assert!(path.is_empty());
    assert_eq!(path.first(), None);
    assert_eq!(path.last(), None);
    assert_eq!(path.iter().next(), None);
    assert_eq!(path.positions().next(), None);
}

#[test]
fn push_links_instructions() {
    let mut path = PathData::new();
    let a = path.push(Command::MoveTo(point(1.0, 2.0)));
    let b = path.push(Command::LineTo(point(3.0, 4.0)));
    let c = path.push(Command::LineTo(point(5.0, 6.0)));

    assert_eq!(path.len(), 3);
    assert_eq!(path.first(), Some(a));
    assert_eq!(path.last(), Some(c));
    assert_eq!(path.instruction(a).next(), Some(b));
    assert_eq!(path.instruction(c).previous(), Some(b));

    assert!(path.instruction(a).explicit_symbol());
    assert!(path.instruction(b).explicit_symbol());
    assert!(!path.instruction(c).explicit_symbol());

    assert_eq!(path.start_position(a), point(0.0, 0.0));
    assert_eq!(path.start_position(c), point(3.0, 4.0));
    assert_chained(&path);
}

#[test]
fn long_relative_chain() {
    let n = 1000;
    let path = relative_lines(n);
    let last = path.last().unwrap();
    assert_eq!(path.end_position(last), point(n as f64, n as f64));
    assert_eq!(path.start_position(last), point(n as f64 - 1.0, n as f64 - 1.0));
}

#[test]
fn resolve_large_relative_chain() {
    let n = 100_000;
    let path = relative_lines(n);
    let segments: Vec<Segment> = path.positions().collect();
    assert_eq!(segments.len(), n);

    for &i in &[0, 1, 999, 54_321, n - 2, n - 1] {
        let segment = &segments[i];
        let expected = point((i + 1) as f64, (i + 1) as f64);
        assert_eq!(segment.to, expected);
        assert_eq!(segment.to, path.end_position(segment.id));
        assert_eq!(segment.from, path.start_position(segment.id));
    }
}

#[test]
fn anchors_stop_the_walk() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(1.0, 1.0)));
    path.push(Command::RelativeLineTo(vector(1.0, 0.0)));
    let line = path.push(Command::LineTo(point(5.0, 5.0)));
    let h = path.push(Command::RelativeHorizontalLineTo(2.0));
    let close = path.push(Command::Close);

    assert_eq!(path.end_position(line), point(5.0, 5.0));
    // The line anchors the horizontal line but not the close.
    assert_eq!(path.end_position(h), point(7.0, 5.0));
    assert_eq!(path.end_position(close), point(1.0, 1.0));
}

#[test]
fn iter_len_stays_in_bounds() {
    let path = relative_lines(3);
    let mut iter = path.iter();
    assert_eq!(iter.len(), 3);
    while iter.next().is_some() {}
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.len(), 0);
}

#[test]
fn positions_match_individual_queries() {
    let mut path = relative_lines(5);
    let first = path.first().unwrap();
    path.insert_before(first, Command::MoveTo(point(10.0, 0.0)));
    path.push(Command::RelativeClose);
    path.push(Command::HorizontalLineTo(-3.0));
    path.push(Command::RelativeVerticalLineTo(2.0));

    let segments: Vec<Segment> = path.positions().collect();
    assert_eq!(segments.len(), path.len());
    for segment in &segments {
        assert_eq!(segment.from, path.start_position(segment.id));
        assert_eq!(segment.to, path.end_position(segment.id));
    }

    let ends: Vec<Point> = segments.iter().map(|s| s.to).collect();
    assert_eq!(ends[5], point(15.0, 5.0));
    assert_eq!(ends[6], point(10.0, 0.0));
    assert_eq!(ends[7], point(-3.0, 0.0));
    assert_eq!(ends[8], point(-3.0, 2.0));
}

#[test]
fn close_returns_to_sub_path_start() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(1.0, 1.0)));
    path.push(Command::LineTo(point(5.0, 1.0)));
    path.push(Command::LineTo(point(5.0, 5.0)));
    let close = path.push(Command::Close);
    let after = path.push(Command::RelativeLineTo(vector(0.0, 2.0)));
    path.push(Command::RelativeMoveTo(vector(10.0, 0.0)));
    path.push(Command::LineTo(point(20.0, 20.0)));
    let second_close = path.push(Command::RelativeClose);

    assert_eq!(path.end_position(close), point(1.0, 1.0));
    assert_eq!(path.end_position(after), point(1.0, 3.0));
    assert_eq!(path.end_position(second_close), point(11.0, 3.0));
    assert_chained(&path);
}

#[test]
fn close_without_move() {
    let mut path = PathData::new();
    path.push(Command::LineTo(point(4.0, 4.0)));
    let close = path.push(Command::Close);
    assert_eq!(path.end_position(close), point(0.0, 0.0));
}

#[test]
fn editing_upstream_moves_downstream() {
    let mut path = PathData::new();
    let m = path.push(Command::RelativeMoveTo(vector(0.0, 0.0)));
    let a = path.push(Command::RelativeLineTo(vector(5.0, 5.0)));
    let b = path.push(Command::RelativeLineTo(vector(5.0, 5.0)));
    assert_eq!(path.end_position(b), point(10.0, 10.0));

    path.set_end_position(m, point(100.0, 0.0));
    assert_eq!(path.instruction(m).command(), Command::RelativeMoveTo(vector(100.0, 0.0)));
    assert_eq!(path.end_position(a), point(105.0, 5.0));
    assert_eq!(path.end_position(b), point(110.0, 10.0));

    // Setting the end of a relative instruction stores the offset from its start.
    path.set_end_position(a, point(100.0, 1.0));
    assert_eq!(path.instruction(a).command(), Command::RelativeLineTo(vector(0.0, 1.0)));
    assert_eq!(path.end_position(b), point(105.0, 6.0));
    assert_chained(&path);
}

#[test]
fn set_end_position_single_axis() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(1.0, 2.0)));
    let h = path.push(Command::HorizontalLineTo(3.0));
    let v = path.push(Command::RelativeVerticalLineTo(1.0));
    let z = path.push(Command::Close);

    path.set_end_position(h, point(7.0, 100.0));
    assert_eq!(path.end_position(h), point(7.0, 2.0));

    path.set_end_position(v, point(100.0, 10.0));
    assert_eq!(path.instruction(v).command(), Command::RelativeVerticalLineTo(8.0));
    assert_eq!(path.end_position(v), point(7.0, 10.0));

    path.set_end_position(z, point(50.0, 50.0));
    assert_eq!(path.instruction(z).command(), Command::Close);
    assert_eq!(path.end_position(z), point(1.0, 2.0));
}

#[test]
fn remove_repairs_links_and_symbols() {
    let mut path = PathData::new();
    let m = path.push(Command::MoveTo(point(0.0, 0.0)));
    let a = path.push(Command::LineTo(point(1.0, 1.0)));
    let b = path.push(Command::LineTo(point(2.0, 2.0)));
    let c = path.push(Command::RelativeLineTo(vector(1.0, 0.0)));
    assert!(!path.instruction(b).explicit_symbol());

    assert_eq!(path.remove(a), Command::LineTo(point(1.0, 1.0)));
    assert_eq!(path.len(), 3);
    assert_eq!(path.get(a), None);
    assert_eq!(path.instruction(m).next(), Some(b));
    assert_eq!(path.instruction(b).previous(), Some(m));
    // b follows a move now.
    assert!(path.instruction(b).explicit_symbol());
    assert_chained(&path);

    assert_eq!(path.remove(m), Command::MoveTo(point(0.0, 0.0)));
    assert_eq!(path.first(), Some(b));
    assert_chained(&path);

    assert_eq!(path.remove(c), Command::RelativeLineTo(vector(1.0, 0.0)));
    assert_eq!(path.last(), Some(b));
    assert_eq!(path.len(), 1);
    assert_chained(&path);

    path.remove(b);
    assert!(path.is_empty());
    assert_eq!(path.first(), None);
    assert_eq!(path.last(), None);
}

#[test]
fn remove_shifts_following_relative_instruction() {
    let mut path = relative_lines(3);
    let second = path.instruction(path.first().unwrap()).next().unwrap();
    let last = path.last().unwrap();
    path.remove(second);
    assert_eq!(path.end_position(last), point(2.0, 2.0));
}

#[test]
fn insert_reuses_slots() {
    let mut path = PathData::new();
    let a = path.push(Command::MoveTo(point(0.0, 0.0)));
    let b = path.push(Command::LineTo(point(1.0, 0.0)));
    path.remove(b);

    let c = path.insert_after(a, Command::LineTo(point(2.0, 0.0)));
    assert_eq!(c, b);
    assert_eq!(path.last(), Some(c));

    let d = path.insert_before(a, Command::MoveTo(point(-1.0, 0.0)));
    assert_eq!(path.first(), Some(d));
    // a now follows another move with the same letter but keeps its symbol.
    assert!(path.instruction(a).explicit_symbol());
    assert_eq!(path.start_position(a), point(-1.0, 0.0));

    let e = path.insert_after(a, Command::LineTo(point(1.5, 0.0)));
    // c keeps its letter even though it now repeats e's.
    assert!(path.instruction(e).explicit_symbol());
    assert!(path.instruction(c).explicit_symbol());
    assert_eq!(path.instruction(e).next(), Some(c));
    assert_chained(&path);
}

#[test]
fn explicit_symbol_invariants() {
    let mut path = PathData::new();
    let a = path.push(Command::MoveTo(point(0.0, 0.0)));
    let b = path.push(Command::MoveTo(point(1.0, 0.0)));
    let c = path.push(Command::Close);
    let d = path.push(Command::Close);

    assert!(!path.instruction(b).explicit_symbol());
    // The head and close instructions always print their letter.
    assert!(path.set_explicit_symbol(a, false));
    assert!(path.instruction(a).explicit_symbol());
    assert!(path.set_explicit_symbol(b, true));
    assert!(!path.set_explicit_symbol(b, false));
    assert!(path.instruction(c).explicit_symbol());
    assert!(path.set_explicit_symbol(d, false));
}

#[test]
fn set_command_repairs_symbols() {
    let mut path = PathData::new();
    path.push(Command::MoveTo(point(0.0, 0.0)));
    let a = path.push(Command::LineTo(point(1.0, 0.0)));
    let b = path.push(Command::LineTo(point(2.0, 0.0)));
    assert!(!path.instruction(b).explicit_symbol());

    path.set_command(a, Command::RelativeLineTo(vector(1.0, 0.0)));
    assert!(path.instruction(a).explicit_symbol());
    assert!(path.instruction(b).explicit_symbol());
    assert_eq!(path.end_position(b), point(2.0, 0.0));
}

#[test]
fn equality_ignores_ids() {
    let mut a = PathData::new();
    a.push(Command::MoveTo(point(0.0, 0.0)));
    let tmp = a.push(Command::LineTo(point(9.0, 9.0)));
    a.push(Command::LineTo(point(1.0, 1.0)));
    a.remove(tmp);

    let mut b = PathData::new();
    b.push(Command::MoveTo(point(0.0, 0.0)));
    b.push(Command::LineTo(point(1.0, 1.0)));

    assert_eq!(a, b);
    b.push(Command::Close);
    assert_ne!(a, b);
}

#[test]
#[should_panic]
fn invalid_id() {
    let path = relative_lines(2);
    path.end_position(InstructionId(7));
}

#[test]
fn clear() {
    let mut path = PathData::with_capacity(4);
    let a = path.push(Command::MoveTo(point(1.0, 1.0)));
    path.push(Command::RelativeLineTo(vector(1.0, 1.0)));
    path.remove(a);
    path.clear();
    assert!(path.is_empty());
    assert_eq!(path, PathData::new());

    let b = path.push(Command::LineTo(point(2.0, 2.0)));
    assert_eq!(b, InstructionId(0));
    assert_eq!(path.first(), Some(b));
    assert!(path.instruction(b).explicit_symbol());
}
