//! # weft-tags - placeholder resolution for weft markup
//!
//! When a markup parser meets `<name>` or `<name:arg1:arg2>`, it asks a
//! [`TagResolver`] what `name` stands for. This crate provides those
//! resolvers and the rules for layering them.
//!
//! ## Core Concepts
//!
//! - [`Tag`]: What a name resolves to: inserted text, a style, or markup
//! - [`TagResolver`]: A source of tags (single binding, table, caller logic,
//!   or a layered chain)
//! - [`ArgumentQueue`]: The argument tokens of one tag invocation
//! - [`PlaceholderTable`]: Placeholders declared in YAML or JSON
//!
//! ## Layering
//!
//! Resolvers are layered lowest precedence first; later layers win. Layers
//! that are plain tables are merged into one table when the chain is built,
//! so lookups stay cheap no matter how many layers a renderer stacks up.
//!
//! ```rust
//! use console::Style;
//! use weft_tags::{placeholder, ArgumentQueue, Tag, TagResolver};
//!
//! let builtin = TagResolver::builder()
//!     .tag("red", Tag::styling(Style::new().red()))
//!     .tag("bold", Tag::styling(Style::new().bold()))
//!     .build();
//!
//! let resolver = TagResolver::layered([
//!     builtin,
//!     placeholder::unparsed("player", "Steve"),
//!     placeholder::styling("red", Style::new().magenta()),
//! ]);
//!
//! assert_eq!(resolver.resolve_name("player"), Some(Tag::insert("Steve")));
//! assert_eq!(
//!     resolver.resolve_name("red"),
//!     Some(Tag::styling(Style::new().magenta()))
//! );
//! assert_eq!(resolver.resolve("unknown", &mut ArgumentQueue::empty()), Ok(None));
//! ```
//!
//! ## Unknown Names
//!
//! An unknown name resolves to `Ok(None)`. Whether that is an error, literal
//! text, or silently dropped is for the caller to decide.

mod argument;
mod error;
pub mod placeholder;
mod resolver;
mod table;
mod tag;

pub use argument::{Argument, ArgumentQueue};
pub use error::TagError;
pub use resolver::{
    DynamicResolver, FnResolver, MapTagResolver, MappableResolver, Resolve,
    ResolveWithoutArguments, SequentialResolver, SingleResolver, TagMap, TagResolver,
    TagResolverBuilder,
};
pub use table::{PlaceholderTable, PlaceholderValue};
pub use tag::Tag;
