//! Table-backed resolution.
//!
//! [`MapTagResolver`] resolves names from a fixed table the caller built.
//! The table is shared, not copied: the resolver holds an [`Arc`] to it, so
//! cloning a resolver or handing the same table to several resolvers costs a
//! reference count. Because the table sits behind a shared pointer it cannot
//! change while any resolver can see it.
//!
//! # Equality
//!
//! Two map resolvers are equal when their tables are equal, regardless of
//! whether they share an allocation. Hashing is consistent with that: it
//! covers the sorted set of names, so resolvers can be deduplicated in hash
//! sets.
//!
//! # Example
//!
//! ```rust
//! use weft_tags::{MapTagResolver, Tag, TagMap};
//!
//! let mut tags = TagMap::new();
//! tags.insert("player".to_string(), Tag::insert("Steve"));
//! tags.insert("server".to_string(), Tag::insert("lobby-1"));
//!
//! let resolver = MapTagResolver::new(tags);
//! assert_eq!(resolver.get("player"), Some(&Tag::insert("Steve")));
//! assert_eq!(resolver.len(), 2);
//! ```

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{MappableResolver, ResolveWithoutArguments, TagMap};
use crate::tag::Tag;

/// Resolves names by direct lookup in a shared table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTagResolver {
    tags: Arc<TagMap>,
}

impl MapTagResolver {
    /// Wraps a table. Passing an existing `Arc` shares it without copying.
    pub fn new(tags: impl Into<Arc<TagMap>>) -> Self {
        Self { tags: tags.into() }
    }

    /// Looks up a tag by name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Returns the shared table.
    pub fn tags(&self) -> &Arc<TagMap> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns an iterator over all names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }
}

impl ResolveWithoutArguments for MapTagResolver {
    fn resolve_name(&self, name: &str) -> Option<Tag> {
        self.get(name).cloned()
    }
}

impl MappableResolver for MapTagResolver {
    fn contribute_to_map(&self, map: &mut TagMap) -> bool {
        map.extend(
            self.tags
                .iter()
                .map(|(name, tag)| (name.clone(), tag.clone())),
        );
        true
    }
}

impl Hash for MapTagResolver {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut names: Vec<&String> = self.tags.keys().collect();
        names.sort_unstable();
        names.hash(state);
    }
}

impl From<TagMap> for MapTagResolver {
    fn from(tags: TagMap) -> Self {
        Self::new(tags)
    }
}

impl From<Arc<TagMap>> for MapTagResolver {
    fn from(tags: Arc<TagMap>) -> Self {
        Self::new(tags)
    }
}
