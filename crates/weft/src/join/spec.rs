//! The immutable join specification and the join algorithm.

use super::builder::JoinSpecBuilder;
use super::operator::Operator;
use crate::text::Text;

/// How to join a sequence of fragments into one.
///
/// Every field is optional. An unset separator contributes nothing, so a
/// spec with no fields set simply concatenates its elements.
///
/// # Separator Selection
///
/// | Elements | Before the last element |
/// |----------|-------------------------|
/// | 2 | `last_separator_if_serial`, else `last_separator`, else `separator` |
/// | 3+ | `last_separator`, else `separator` |
///
/// Interior elements of longer lists are always preceded by `separator`.
///
/// # Example
///
/// ```rust
/// use weft::JoinSpec;
///
/// let spec = JoinSpec::builder()
///     .separator(", ")
///     .last_separator(", and ")
///     .last_separator_if_serial(" and ")
///     .build();
///
/// assert_eq!(spec.join(["A", "B"]).plain_text(), "A and B");
/// assert_eq!(spec.join(["A", "B", "C"]).plain_text(), "A, B, and C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSpec {
    pub(crate) separator: Option<Text>,
    pub(crate) last_separator: Option<Text>,
    pub(crate) last_separator_if_serial: Option<Text>,
    pub(crate) prefix: Option<Text>,
    pub(crate) suffix: Option<Text>,
    pub(crate) operator: Operator,
}

impl JoinSpec {
    /// Creates a spec with every field unset and the identity operator.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts a builder from [`JoinSpec::empty`].
    pub fn builder() -> JoinSpecBuilder {
        JoinSpecBuilder::new()
    }

    /// Returns a builder holding a copy of every field of this spec.
    pub fn to_builder(&self) -> JoinSpecBuilder {
        JoinSpecBuilder::from_spec(self)
    }

    /// Joins with no separators at all.
    pub fn no_separators() -> Self {
        Self::empty()
    }

    /// Joins with `separator` between every pair of elements.
    pub fn with_separator(separator: impl Into<Text>) -> Self {
        Self::builder().separator(separator).build()
    }

    /// Joins with `separator` between elements and `last_separator` before the last.
    pub fn with_separators(separator: impl Into<Text>, last_separator: impl Into<Text>) -> Self {
        Self::builder()
            .separator(separator)
            .last_separator(last_separator)
            .build()
    }

    /// One element per line.
    pub fn newlines() -> Self {
        Self::with_separator("\n")
    }

    pub fn spaces() -> Self {
        Self::with_separator(" ")
    }

    /// Comma separated, optionally followed by a space.
    pub fn commas(spaces: bool) -> Self {
        Self::with_separator(if spaces { ", " } else { "," })
    }

    /// Renders like an array literal: `[a, b, c]`.
    pub fn array_like() -> Self {
        Self::builder()
            .separator(", ")
            .prefix("[")
            .suffix("]")
            .build()
    }

    pub fn separator(&self) -> Option<&Text> {
        self.separator.as_ref()
    }

    pub fn last_separator(&self) -> Option<&Text> {
        self.last_separator.as_ref()
    }

    pub fn last_separator_if_serial(&self) -> Option<&Text> {
        self.last_separator_if_serial.as_ref()
    }

    pub fn prefix(&self) -> Option<&Text> {
        self.prefix.as_ref()
    }

    pub fn suffix(&self) -> Option<&Text> {
        self.suffix.as_ref()
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Joins `items` into a single fragment.
    ///
    /// The result is an empty root whose children are, in order: the prefix,
    /// each transformed element with its preceding separator, and the
    /// suffix. Unset fields contribute no child. The operator runs exactly
    /// once per element and never on separators or framing.
    pub fn join<I>(&self, items: I) -> Text
    where
        I: IntoIterator,
        I::Item: Into<Text>,
    {
        let items: Vec<Text> = items.into_iter().map(Into::into).collect();
        let count = items.len();
        let last_separator = self.separator_before_last(count);

        let mut joined = Text::empty();
        if let Some(prefix) = &self.prefix {
            joined.push(prefix.clone());
        }

        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                let separator = if index + 1 == count {
                    last_separator
                } else {
                    self.separator.as_ref()
                };
                if let Some(separator) = separator {
                    joined.push(separator.clone());
                }
            }
            joined.push(self.operator.apply(item));
        }

        if let Some(suffix) = &self.suffix {
            joined.push(suffix.clone());
        }
        joined
    }

    /// Picks the separator placed before the final element of a `count`-long list.
    fn separator_before_last(&self, count: usize) -> Option<&Text> {
        let serial = if count == 2 {
            self.last_separator_if_serial.as_ref()
        } else {
            None
        };
        serial
            .or(self.last_separator.as_ref())
            .or(self.separator.as_ref())
    }
}
