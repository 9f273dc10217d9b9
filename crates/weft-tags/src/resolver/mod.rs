//! Placeholder name resolution.
//!
//! This module provides [`TagResolver`], which answers "what tag does this
//! name stand for?" for a markup parser. Resolvers come in a closed set of
//! shapes that share the same capabilities:
//!
//! | Variant | Backing | Mappable |
//! |---------|---------|----------|
//! | `Empty` | nothing | yes |
//! | `Single` | one name bound to one tag | yes |
//! | `Map` | a shared name→tag table | yes |
//! | `Dynamic` | caller logic, may read arguments | no |
//! | `Sequential` | ordered components, later wins | when every component is |
//!
//! # Capabilities
//!
//! - [`Resolve`]: lookup by name with parse-time arguments
//! - [`ResolveWithoutArguments`]: lookup by name alone
//! - [`MappableResolver`]: export the whole table in one batch
//!
//! A mappable resolver can be flattened: its entries are copied into one
//! combined table so that repeated lookups during a parse cost a single hash
//! probe instead of a walk down the chain. Dynamic resolvers cannot be
//! reduced to a table and stay in the chain.
//!
//! # Precedence
//!
//! When components are layered, later components win on name collisions:
//!
//! ```rust
//! use weft_tags::{Tag, TagResolver};
//!
//! let builtin = TagResolver::single("name", Tag::insert("default"));
//! let user = TagResolver::single("name", Tag::insert("Ada"));
//!
//! let resolver = TagResolver::layered([builtin, user]);
//! assert_eq!(resolver.resolve_name("name"), Some(Tag::insert("Ada")));
//! ```

mod builder;
mod dynamic;
mod map;
mod sequential;
mod single;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::argument::ArgumentQueue;
use crate::error::TagError;
use crate::tag::Tag;

pub use builder::TagResolverBuilder;
pub use dynamic::{DynamicResolver, FnResolver};
pub use map::MapTagResolver;
pub use sequential::SequentialResolver;
pub use single::SingleResolver;

/// A name→tag table, as exported by mappable resolvers.
pub type TagMap = HashMap<String, Tag>;

/// Lookup of a tag by name, with the invocation's arguments.
pub trait Resolve: Send + Sync + fmt::Debug {
    /// Resolves `name`.
    ///
    /// Returns `Ok(None)` when this resolver does not know `name`. Errors
    /// are reserved for known names invoked with unusable arguments.
    fn resolve(&self, name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError>;

    /// Returns true if this resolver handles `name`.
    fn has(&self, name: &str) -> bool;
}

/// Lookup that never needs argument tokens.
pub trait ResolveWithoutArguments {
    fn resolve_name(&self, name: &str) -> Option<Tag>;
}

/// A resolver that can export its whole table at once.
pub trait MappableResolver {
    /// Copies every entry into `map`, overwriting existing names, and
    /// returns true. A resolver that cannot be expressed as a static table
    /// must leave `map` untouched and return false.
    fn contribute_to_map(&self, map: &mut TagMap) -> bool;
}

/// A source of tags for a markup parser.
///
/// Resolvers are immutable once built and cheap to clone; tables are shared
/// behind [`Arc`]s.
#[derive(Debug, Clone, Default)]
pub enum TagResolver {
    /// Resolves nothing.
    #[default]
    Empty,
    Single(SingleResolver),
    Map(MapTagResolver),
    Dynamic(DynamicResolver),
    Sequential(SequentialResolver),
}

impl TagResolver {
    pub fn empty() -> Self {
        TagResolver::Empty
    }

    /// Starts a builder for a layered resolver.
    pub fn builder() -> TagResolverBuilder {
        TagResolverBuilder::new()
    }

    /// Binds one name to one tag.
    pub fn single(name: impl Into<String>, tag: Tag) -> Self {
        TagResolver::Single(SingleResolver::new(name, tag))
    }

    /// Resolves from a table shared with the caller.
    pub fn map(tags: impl Into<Arc<TagMap>>) -> Self {
        TagResolver::Map(MapTagResolver::new(tags))
    }

    /// Wraps caller-defined resolution logic.
    pub fn dynamic(resolver: impl Resolve + 'static) -> Self {
        TagResolver::Dynamic(DynamicResolver::new(resolver))
    }

    /// Resolves every name in `names` by calling `handler` with the
    /// invocation's arguments.
    ///
    /// ```rust
    /// use weft_tags::{ArgumentQueue, Tag, TagError, TagResolver};
    ///
    /// let repeat = TagResolver::from_fn(["repeat"], |args: &mut ArgumentQueue| {
    ///     let count = args
    ///         .pop_or("repeat needs a count")?
    ///         .as_int()
    ///         .ok_or_else(|| TagError::invalid_argument("repeat", "count must be a number"))?;
    ///     let word = args.pop_or("repeat needs a word")?.value().to_string();
    ///     Ok(Tag::insert(word.repeat(count.max(0) as usize)))
    /// });
    ///
    /// let mut args = ArgumentQueue::new(["3", "ab"]);
    /// assert_eq!(
    ///     repeat.resolve("repeat", &mut args).unwrap(),
    ///     Some(Tag::insert("ababab"))
    /// );
    /// ```
    pub fn from_fn<I, S, F>(names: I, handler: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut ArgumentQueue) -> Result<Tag, TagError> + Send + Sync + 'static,
    {
        Self::dynamic(FnResolver::new(names, handler))
    }

    /// Layers `components`, lowest precedence first.
    ///
    /// Equivalent to adding each component to a [`TagResolverBuilder`] in
    /// order.
    pub fn layered<I>(components: I) -> Self
    where
        I: IntoIterator<Item = TagResolver>,
    {
        Self::builder().resolvers(components).build()
    }

    /// Resolves `name` with the invocation's arguments.
    ///
    /// # Errors
    ///
    /// Only dynamic resolvers fail, and only for names they handle.
    pub fn resolve(
        &self,
        name: &str,
        arguments: &mut ArgumentQueue,
    ) -> Result<Option<Tag>, TagError> {
        match self {
            TagResolver::Empty => Ok(None),
            TagResolver::Single(single) => Ok(single.resolve_name(name)),
            TagResolver::Map(map) => Ok(map.resolve_name(name)),
            TagResolver::Dynamic(dynamic) => dynamic.resolve(name, arguments),
            TagResolver::Sequential(sequential) => sequential.resolve(name, arguments),
        }
    }

    /// Resolves `name` as an invocation without arguments.
    ///
    /// Dynamic resolvers that fail without arguments are reported as not
    /// found.
    pub fn resolve_name(&self, name: &str) -> Option<Tag> {
        self.resolve(name, &mut ArgumentQueue::empty())
            .ok()
            .flatten()
    }

    pub fn has(&self, name: &str) -> bool {
        match self {
            TagResolver::Empty => false,
            TagResolver::Single(single) => single.has(name),
            TagResolver::Map(map) => map.has(name),
            TagResolver::Dynamic(dynamic) => dynamic.has(name),
            TagResolver::Sequential(sequential) => sequential.has(name),
        }
    }

    /// Returns true if [`contribute_to_map`](MappableResolver::contribute_to_map)
    /// would succeed.
    pub fn is_mappable(&self) -> bool {
        match self {
            TagResolver::Empty | TagResolver::Single(_) | TagResolver::Map(_) => true,
            TagResolver::Dynamic(_) => false,
            TagResolver::Sequential(sequential) => sequential.is_mappable(),
        }
    }
}

impl MappableResolver for TagResolver {
    fn contribute_to_map(&self, map: &mut TagMap) -> bool {
        match self {
            TagResolver::Empty => true,
            TagResolver::Single(single) => single.contribute_to_map(map),
            TagResolver::Map(tags) => tags.contribute_to_map(map),
            TagResolver::Dynamic(_) => false,
            TagResolver::Sequential(sequential) => sequential.contribute_to_map(map),
        }
    }
}

impl Resolve for TagResolver {
    fn resolve(&self, name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError> {
        TagResolver::resolve(self, name, arguments)
    }

    fn has(&self, name: &str) -> bool {
        TagResolver::has(self, name)
    }
}

impl From<SingleResolver> for TagResolver {
    fn from(single: SingleResolver) -> Self {
        TagResolver::Single(single)
    }
}

impl From<MapTagResolver> for TagResolver {
    fn from(map: MapTagResolver) -> Self {
        TagResolver::Map(map)
    }
}

impl From<DynamicResolver> for TagResolver {
    fn from(dynamic: DynamicResolver) -> Self {
        TagResolver::Dynamic(dynamic)
    }
}

impl From<SequentialResolver> for TagResolver {
    fn from(sequential: SequentialResolver) -> Self {
        TagResolver::Sequential(sequential)
    }
}

impl From<TagMap> for TagResolver {
    fn from(tags: TagMap) -> Self {
        TagResolver::map(tags)
    }
}
