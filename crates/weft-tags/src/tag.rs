//! Resolved placeholder definitions.

use console::Style;
use weft::Text;

/// What a placeholder name stands for once resolved.
///
/// Resolution treats tags as opaque values; what each variant does to the
/// surrounding markup is up to the parser that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Replaced by a fragment.
    Insert(Text),
    /// Applies a style to the content it encloses.
    Style(Style),
    /// Raw markup that the parser reads again in place of the tag.
    PreProcess(String),
}

impl Tag {
    pub fn insert(text: impl Into<Text>) -> Self {
        Tag::Insert(text.into())
    }

    pub fn styling(style: Style) -> Self {
        Tag::Style(style)
    }

    pub fn pre_process(markup: impl Into<String>) -> Self {
        Tag::PreProcess(markup.into())
    }

    /// Returns the inserted fragment, if this tag inserts one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Tag::Insert(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Text> for Tag {
    fn from(text: Text) -> Self {
        Tag::Insert(text)
    }
}

impl From<Style> for Tag {
    fn from(style: Style) -> Self {
        Tag::Style(style)
    }
}
