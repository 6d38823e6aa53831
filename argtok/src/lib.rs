//! argtok, a `no_std` command-line argument tokenizer.
#![no_std]
#![deny(missing_docs)]

pub use argtok_parser as parser;

pub use parser::{Token, TokenKind, Tokenizer};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of a single option argument.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}
