//! Interface to grammar front ends.

use std::convert::Infallible;

use super::Grammar;

/// Anything that can produce a [`Grammar`], typically a parser for grammar text.
///
/// The factory only needs the resulting rules; how they are read (file,
/// embedded string, another tool's output) is up to the implementation.
pub trait GrammarSource {
    type Error: std::fmt::Display;

    fn load(&self) -> Result<Grammar, Self::Error>;
}

impl GrammarSource for Grammar {
    type Error = Infallible;

    fn load(&self) -> Result<Grammar, Self::Error> {
        Ok(self.clone())
    }
}
