pub use crate::error::{ParseError, ParseErrorKind, Result};
pub use crate::leaf::{Component, Leaf};
pub use crate::parser::parse;
pub use crate::tag::{CHAIN_TOKEN, INTERPOLATION, Parameter, TAG_TOKEN, TagTemplate};

pub mod error;
mod leaf;
mod lexer;
mod parser;
mod tag;
