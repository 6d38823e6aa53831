//! A one-shot parser for a single option-like argument.
//!
//! This is a deliberately small sibling of the tokenizer in
//! [`lexer`](crate::lexer): one argument in, one option out, no cluster
//! expansion and no value lookahead.

/// Defines the possible errors that may occur during parsing of a single
/// option argument.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The argument has no leading hyphen, so it cannot be an option.
    #[error("not an option")]
    NotAnOption,

    /// The argument is only hyphens, with no name behind them.
    #[error("empty option name")]
    EmptyName,
}

/// Whether an option was written in long or short form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OptionStyle {
    /// Two leading hyphens (e.g. --verbose).
    Long,

    /// One leading hyphen (e.g. -v).
    Short,
}

/// Defines the result of parsing one option argument: its name, its inline
/// value if any, and the style it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedOption<'a> {
    /// Option name without its hyphens.
    pub name: &'a str,

    /// Inline value, from a `name=value` form.
    pub value: Option<&'a str>,

    /// Long or short, decided by hyphen count.
    pub style: OptionStyle,
}

impl<'a> ParsedOption<'a> {
    /// Parse a single option argument.
    pub fn parse(arg: &'a str) -> Result<Self, Error> {
        let (style, rest) = if let Some(rest) = arg.strip_prefix("--") {
            (OptionStyle::Long, rest)
        } else if let Some(rest) = arg.strip_prefix('-') {
            (OptionStyle::Short, rest)
        } else {
            return Err(Error::NotAnOption);
        };

        if rest.is_empty() {
            return Err(Error::EmptyName);
        }

        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };

        Ok(ParsedOption { name, value, style })
    }
}
