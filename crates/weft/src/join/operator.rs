//! Per-element transforms applied while joining.

use std::fmt;
use std::sync::Arc;

use crate::text::Text;

type TransformFn = dyn Fn(Text) -> Text + Send + Sync;

/// A pure transform applied to every joined element.
///
/// Operators compare by identity: [`Operator::Identity`] equals itself, and a
/// custom operator equals only clones of itself (same allocation). Two
/// closures with the same body are never considered equal.
///
/// # Example
///
/// ```rust
/// use weft::{Operator, Text};
/// use console::Style;
///
/// let bold = Operator::new(|text: Text| text.with_style(Style::new().bold()));
/// assert_eq!(bold.apply(Text::plain("x")).style(), Some(&Style::new().bold()));
/// assert_eq!(bold, bold.clone());
/// ```
#[derive(Clone, Default)]
pub enum Operator {
    /// Returns each element unchanged.
    #[default]
    Identity,
    /// A caller-supplied transform.
    Custom(Arc<TransformFn>),
}

impl Operator {
    pub fn identity() -> Self {
        Operator::Identity
    }

    /// Wraps a transform function.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Text) -> Text + Send + Sync + 'static,
    {
        Operator::Custom(Arc::new(transform))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Operator::Identity)
    }

    /// Applies the transform to one element.
    pub fn apply(&self, text: Text) -> Text {
        match self {
            Operator::Identity => text,
            Operator::Custom(transform) => transform(text),
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operator::Identity, Operator::Identity) => true,
            (Operator::Custom(a), Operator::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Operator {}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Identity => f.write_str("Operator::Identity"),
            Operator::Custom(_) => f.write_str("Operator::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_input() {
        let text = Text::plain("same");
        assert_eq!(Operator::identity().apply(text.clone()), text);
    }

    #[test]
    fn test_identity_equals_default() {
        assert_eq!(Operator::identity(), Operator::default());
        assert!(Operator::default().is_identity());
    }

    #[test]
    fn test_custom_equality_is_by_allocation() {
        let upper = Operator::new(|t: Text| Text::plain(t.plain_text().to_uppercase()));
        let other = Operator::new(|t: Text| Text::plain(t.plain_text().to_uppercase()));

        assert_eq!(upper, upper.clone());
        assert_ne!(upper, other);
        assert_ne!(upper, Operator::identity());
    }

    #[test]
    fn test_custom_applies_transform() {
        let wrap = Operator::new(|t: Text| Text::plain("<").append(t).append(">"));
        assert_eq!(wrap.apply(Text::plain("x")).plain_text(), "<x>");
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Operator::identity()), "Operator::Identity");
        assert_eq!(
            format!("{:?}", Operator::new(|t| t)),
            "Operator::Custom(..)"
        );
    }
}
