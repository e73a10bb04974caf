//! Peirce's Alpha existential graphs.
//!
//! A graph is written in bracket notation: `(...)` is the sheet of assertion,
//! `[...]` is a cut (negation of its contents) and juxtaposition inside a
//! context is conjunction. For example `(a, [b, c])` asserts `a` and not
//! both `b` and `c`.
//!
//! The crate parses and canonicalizes graphs, addresses their elements, and
//! enumerates and applies the double cut, erasure and deiteration rules.

#[macro_use]
extern crate pest_derive;

pub mod err;
pub mod generation;
pub mod graph;
pub mod inference;
pub mod logging;
pub mod parser;

pub use graph::{Address, Element, Graph};
pub use inference::Inference;
pub use parser::parse;
