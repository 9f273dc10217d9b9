//! A resolver for exactly one name.

use super::{MappableResolver, ResolveWithoutArguments, TagMap};
use crate::tag::Tag;

/// Binds a single name to a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleResolver {
    name: String,
    tag: Tag,
}

impl SingleResolver {
    pub fn new(name: impl Into<String>, tag: Tag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn has(&self, name: &str) -> bool {
        self.name == name
    }
}

impl ResolveWithoutArguments for SingleResolver {
    fn resolve_name(&self, name: &str) -> Option<Tag> {
        self.has(name).then(|| self.tag.clone())
    }
}

impl MappableResolver for SingleResolver {
    fn contribute_to_map(&self, map: &mut TagMap) -> bool {
        map.insert(self.name.clone(), self.tag.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_only_its_name() {
        let single = SingleResolver::new("player", Tag::insert("Steve"));
        assert_eq!(single.resolve_name("player"), Some(Tag::insert("Steve")));
        assert_eq!(single.resolve_name("players"), None);
        assert_eq!(single.name(), "player");
        assert_eq!(single.tag(), &Tag::insert("Steve"));
    }

    #[test]
    fn test_contribution_overwrites() {
        let mut map = TagMap::new();
        map.insert("player".to_string(), Tag::insert("Alex"));

        let single = SingleResolver::new("player", Tag::insert("Steve"));
        assert!(single.contribute_to_map(&mut map));
        assert_eq!(map.get("player"), Some(&Tag::insert("Steve")));
        assert_eq!(map.len(), 1);
    }
}
