//! Error types used in the library.
//!
//! - Parse errors are external: the text handed to [parse](crate::parser::parse) was not a graph.
//! - Inference errors are raised when an address handed to a rule does not resolve to a
//!   suitable element. Addresses produced by the candidate enumerations always resolve.

use crate::graph::Address;
use crate::parser::Rule;
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Inference(InferenceError),
}

/// Noted errors when reading a graph from text.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The text is not wrapped in a matching `()` or `[]` pair.
    Delimiters {
        open: Option<char>,
        close: Option<char>,
    },

    /// The text inside the outer delimiters does not follow the grammar.
    Syntax(Box<pest::error::Error<Rule>>),
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        ParseError::Syntax(Box::new(e))
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when applying a rule at an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InferenceError {
    /// The empty address names the root, which no rule edits.
    EmptyAddress,

    /// Some index along the address is out of range.
    InvalidAddress(Address),

    /// The address resolves, but not to a cut whose only content is another cut.
    NotADoubleCut(Address),
}

impl From<InferenceError> for ErrorKind {
    fn from(e: InferenceError) -> Self {
        ErrorKind::Inference(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Delimiters { open, close } => {
                let show = |c: &Option<char>| c.map_or_else(|| String::from("nothing"), |c| format!("'{}'", c));
                write!(
                    f,
                    "expected a graph wrapped in () or [], found {} ... {}",
                    show(open),
                    show(close)
                )
            }
            ParseError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InferenceError::EmptyAddress => f.write_str("the empty address cannot be edited"),
            InferenceError::InvalidAddress(address) => write!(f, "invalid address [{}]", address),
            InferenceError::NotADoubleCut(address) => write!(f, "no double cut at [{}]", address),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "parse error: {}", e),
            ErrorKind::Inference(e) => write!(f, "inference error: {}", e),
        }
    }
}

impl Error for ParseError {}

impl Error for InferenceError {}

impl Error for ErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErrorKind::Parse(e) => Some(e),
            ErrorKind::Inference(e) => Some(e),
        }
    }
}
