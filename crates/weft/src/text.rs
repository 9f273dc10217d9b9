//! Styled text fragments.
//!
//! [`Text`] is the unit everything else in weft composes: a node with its own
//! content, an optional [`Style`], and an ordered list of children. Joining
//! and placeholder substitution both build new trees out of existing ones;
//! nothing mutates a fragment once it has been handed out.

use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::join::JoinSpec;

/// An immutable, possibly-empty styled text node.
///
/// # Example
///
/// ```rust
/// use weft::Text;
/// use console::Style;
///
/// let text = Text::plain("Hello, ")
///     .append(Text::styled("world", Style::new().bold()))
///     .append("!");
///
/// assert_eq!(text.plain_text(), "Hello, world!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
    style: Option<Style>,
    children: Vec<Text>,
}

impl Text {
    /// Creates a fragment with no content, style or children.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an unstyled fragment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Creates a fragment carrying a style.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
            children: Vec::new(),
        }
    }

    /// Returns this fragment with its style replaced.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns this fragment with `child` appended after its existing children.
    pub fn append(mut self, child: impl Into<Text>) -> Self {
        self.children.push(child.into());
        self
    }

    pub(crate) fn push(&mut self, child: Text) {
        self.children.push(child);
    }

    /// Joins `items` according to `spec`.
    ///
    /// Shorthand for [`JoinSpec::join`].
    pub fn join<I>(spec: &JoinSpec, items: I) -> Text
    where
        I: IntoIterator,
        I::Item: Into<Text>,
    {
        spec.join(items)
    }

    /// The text owned directly by this node, excluding children.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn children(&self) -> &[Text] {
        &self.children
    }

    /// Returns true when neither this node nor any descendant has content.
    ///
    /// Styles are ignored: a styled node without text renders nothing.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(Text::is_empty)
    }

    /// Concatenates the content of this node and all descendants, depth first.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.write_plain(out);
        }
    }

    /// Display width of [`plain_text`](Self::plain_text) in terminal columns.
    pub fn width(&self) -> usize {
        self.plain_text().width()
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::plain(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::plain(content)
    }
}

impl From<&String> for Text {
    fn from(content: &String) -> Self {
        Text::plain(content.as_str())
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.plain_text())
    }
}
