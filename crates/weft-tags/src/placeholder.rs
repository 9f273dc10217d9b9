//! Shorthands for binding a single placeholder.
//!
//! Each function returns a [`TagResolver::Single`] ready to be layered with
//! other resolvers.
//!
//! ```rust
//! use weft_tags::{placeholder, TagResolver};
//!
//! let resolver = TagResolver::layered([
//!     placeholder::unparsed("player", "<Steve>"),
//!     placeholder::parsed("motd", "<green>Welcome!</green>"),
//! ]);
//!
//! assert!(resolver.has("player"));
//! assert!(resolver.has("motd"));
//! ```

use console::Style;
use weft::Text;

use crate::resolver::TagResolver;
use crate::tag::Tag;

/// Inserts `value` as literal text; markup inside it is not interpreted.
pub fn unparsed(name: impl Into<String>, value: impl Into<String>) -> TagResolver {
    TagResolver::single(name, Tag::Insert(Text::plain(value)))
}

/// Substitutes `markup` to be parsed in place of the tag.
pub fn parsed(name: impl Into<String>, markup: impl Into<String>) -> TagResolver {
    TagResolver::single(name, Tag::pre_process(markup))
}

/// Inserts an existing fragment.
pub fn component(name: impl Into<String>, text: impl Into<Text>) -> TagResolver {
    TagResolver::single(name, Tag::insert(text))
}

/// Styles the content enclosed by the tag.
pub fn styling(name: impl Into<String>, style: Style) -> TagResolver {
    TagResolver::single(name, Tag::styling(style))
}
