//! Parse-time arguments passed to tags.
//!
//! Markup like `<repeat:3:->` hands the resolver the name `repeat` and the
//! argument tokens `3` and `-`. Tokenizing is the parser's job; this module
//! only models the tokens and the cursor a resolver consumes them with.

use crate::error::TagError;

/// A single argument token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    value: String,
}

impl Argument {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn lower_value(&self) -> String {
        self.value.to_lowercase()
    }

    /// Parses the token as an integer.
    pub fn as_int(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    /// Parses the token as a floating point number.
    pub fn as_float(&self) -> Option<f64> {
        self.value.parse().ok()
    }

    /// True for `true` and `on`.
    pub fn is_true(&self) -> bool {
        matches!(self.value.as_str(), "true" | "on")
    }

    /// True for `false` and `off`.
    pub fn is_false(&self) -> bool {
        matches!(self.value.as_str(), "false" | "off")
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::new(value)
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::new(value)
    }
}

/// The argument tokens of one tag invocation, consumed front to back.
///
/// # Example
///
/// ```rust
/// use weft_tags::ArgumentQueue;
///
/// let mut args = ArgumentQueue::new(["3", "-"]);
/// assert_eq!(args.pop().and_then(|a| a.as_int()), Some(3));
/// assert_eq!(args.peek().map(|a| a.value()), Some("-"));
/// assert!(args.has_next());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentQueue {
    arguments: Vec<Argument>,
    cursor: usize,
}

impl ArgumentQueue {
    pub fn new<I>(arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// A queue with no arguments, for name-only lookups.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Takes the next argument.
    pub fn pop(&mut self) -> Option<&Argument> {
        let argument = self.arguments.get(self.cursor)?;
        self.cursor += 1;
        Some(argument)
    }

    /// Takes the next argument, failing with `message` when none is left.
    pub fn pop_or(&mut self, message: impl Into<String>) -> Result<&Argument, TagError> {
        let argument = self
            .arguments
            .get(self.cursor)
            .ok_or_else(|| TagError::MissingArgument {
                message: message.into(),
            })?;
        self.cursor += 1;
        Ok(argument)
    }

    /// Returns the next argument without taking it.
    pub fn peek(&self) -> Option<&Argument> {
        self.arguments.get(self.cursor)
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.arguments.len()
    }

    /// Rewinds to the first argument.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Total number of arguments, consumed or not.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.arguments.len() - self.cursor
    }
}
