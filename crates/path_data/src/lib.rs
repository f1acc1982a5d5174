#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Parse, edit and print the path data mini-language (the `d` attribute of
//! SVG paths).
//!
//! Parsing produces a [`PathData`](struct.PathData.html): a doubly linked
//! sequence of instructions stored in an arena and addressed by
//! [`InstructionId`](struct.InstructionId.html). Only the end position of
//! absolute instructions is stored. The start position of an instruction is
//! always its predecessor's end position, and relative instructions store an
//! offset from it, so positions are resolved by walking the chain.
//!
//! # Examples
//!
//! ```
//! # extern crate path_data;
//! # fn main() {
//! use path_data::math::point;
//!
//! let mut path = path_data::parse("M 0 0 l 5 5 5 5").unwrap();
//!
//! let last = path.last().unwrap();
//! assert_eq!(path.end_position(last), point(10.0, 10.0));
//!
//! // Moving the start of the path drags the relative lines along.
//! let first = path.first().unwrap();
//! path.set_end_position(first, point(1.0, 0.0));
//! assert_eq!(path.end_position(last), point(11.0, 10.0));
//!
//! assert_eq!(path.to_string(), "M 1 0 l 5 5 5 5");
//! # }
//! ```

pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod convert;
mod error;
pub mod parser;
mod path_data;
mod path_state;
pub mod serializer;
pub mod tokenizer;

#[doc(inline)]
pub use crate::commands::{Command, CommandKind};
pub use crate::error::ParseError;
#[doc(inline)]
pub use crate::parser::parse;
#[doc(inline)]
pub use crate::path_data::{Instruction, Iter, PathData, Positions, Segment};
pub use crate::path_state::PathState;
#[doc(inline)]
pub use crate::serializer::serialize;

use std::fmt;

pub mod math {
    //! f64 versions of the euclid types used to describe positions.

    use crate::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// ID of an instruction in a [`PathData`](struct.PathData.html).
///
/// IDs stay valid until the instruction is removed. The slot of a removed
/// instruction can be reused by a later insertion.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct InstructionId(pub u32);

impl InstructionId {
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
    pub fn from_usize(val: usize) -> Self {
        InstructionId(val as u32)
    }
}

impl fmt::Debug for InstructionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
