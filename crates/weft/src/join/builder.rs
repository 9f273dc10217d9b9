//! Builder for [`JoinSpec`].

use super::error::JoinError;
use super::operator::Operator;
use super::spec::JoinSpec;
use crate::text::Text;

/// Names the optional fields of a [`JoinSpec`], for [`JoinSpecBuilder::unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinPart {
    Separator,
    LastSeparator,
    LastSeparatorIfSerial,
    Prefix,
    Suffix,
}

/// Mutable builder producing immutable [`JoinSpec`] snapshots.
///
/// [`build`](Self::build) copies every field, so the builder can keep being
/// changed and built again without affecting specs it already produced.
///
/// # Example
///
/// ```rust
/// use weft::JoinSpec;
///
/// let builder = JoinSpec::builder().separator(", ");
/// let plain = builder.build();
/// let framed = builder.prefix("[").suffix("]").build();
///
/// assert_eq!(plain.join(["a", "b"]).plain_text(), "a, b");
/// assert_eq!(framed.join(["a", "b"]).plain_text(), "[a, b]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSpecBuilder {
    separator: Option<Text>,
    last_separator: Option<Text>,
    last_separator_if_serial: Option<Text>,
    prefix: Option<Text>,
    suffix: Option<Text>,
    operator: Operator,
}

impl JoinSpecBuilder {
    /// Creates a builder with the fields of [`JoinSpec::empty`].
    pub fn new() -> Self {
        Self::from_spec(&JoinSpec::empty())
    }

    pub(crate) fn from_spec(spec: &JoinSpec) -> Self {
        Self {
            separator: spec.separator.clone(),
            last_separator: spec.last_separator.clone(),
            last_separator_if_serial: spec.last_separator_if_serial.clone(),
            prefix: spec.prefix.clone(),
            suffix: spec.suffix.clone(),
            operator: spec.operator.clone(),
        }
    }

    /// Sets the separator placed between consecutive elements.
    pub fn separator(mut self, separator: impl Into<Text>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Sets the separator placed before the last element of lists of three or more.
    pub fn last_separator(mut self, last_separator: impl Into<Text>) -> Self {
        self.last_separator = Some(last_separator.into());
        self
    }

    /// Sets the separator placed between the two elements of a two-element list.
    pub fn last_separator_if_serial(mut self, last_separator_if_serial: impl Into<Text>) -> Self {
        self.last_separator_if_serial = Some(last_separator_if_serial.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Text>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Text>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Returns one of the optional fields to its unset state.
    pub fn unset(mut self, part: JoinPart) -> Self {
        match part {
            JoinPart::Separator => self.separator = None,
            JoinPart::LastSeparator => self.last_separator = None,
            JoinPart::LastSeparatorIfSerial => self.last_separator_if_serial = None,
            JoinPart::Prefix => self.prefix = None,
            JoinPart::Suffix => self.suffix = None,
        }
        self
    }

    /// Sets the transform applied to every element.
    pub fn operator<F>(self, transform: F) -> Self
    where
        F: Fn(Text) -> Text + Send + Sync + 'static,
    {
        self.with_operator(Operator::new(transform))
    }

    /// Sets an existing [`Operator`], such as one shared between specs.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    /// Sets the operator from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::InvalidArgument`] when `operator` is `None`: the
    /// operator has no unset state. Use [`Operator::identity`] to restore the
    /// default.
    pub fn try_operator(self, operator: Option<Operator>) -> Result<Self, JoinError> {
        let operator = operator.ok_or(JoinError::InvalidArgument { field: "operator" })?;
        Ok(self.with_operator(operator))
    }

    /// Produces an immutable spec from the current field values.
    pub fn build(&self) -> JoinSpec {
        JoinSpec {
            separator: self.separator.clone(),
            last_separator: self.last_separator.clone(),
            last_separator_if_serial: self.last_separator_if_serial.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            operator: self.operator.clone(),
        }
    }
}
