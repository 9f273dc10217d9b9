//! Builder for layered resolvers.

use tracing::debug;

use super::sequential::TableRun;
use super::{MapTagResolver, SequentialResolver, TagResolver};
use crate::tag::Tag;

/// Collects tags and resolvers, later registrations winning on collisions.
///
/// Loose tags and mappable resolvers are merged into a pending table as they
/// arrive. A dynamic resolver closes that table first, so registration order
/// is preserved when the result is flattened. A map resolver registered on
/// its own keeps sharing the caller's table.
///
/// # Example
///
/// ```rust
/// use console::Style;
/// use weft_tags::{ArgumentQueue, Tag, TagResolver};
///
/// let resolver = TagResolver::builder()
///     .tag("red", Tag::styling(Style::new().red()))
///     .tag("player", Tag::insert("Steve"))
///     .resolver(TagResolver::from_fn(["upper"], |args: &mut ArgumentQueue| {
///         Ok(Tag::insert(args.pop_or("upper needs text")?.value().to_uppercase()))
///     }))
///     .tag("player", Tag::insert("Alex"))
///     .build();
///
/// assert_eq!(resolver.resolve_name("player"), Some(Tag::insert("Alex")));
/// assert!(resolver.has("upper"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagResolverBuilder {
    components: Vec<TagResolver>,
    pending: TableRun,
}

impl TagResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `tag`, replacing any earlier binding of `name`.
    pub fn tag(mut self, name: impl Into<String>, tag: Tag) -> Self {
        self.pending.insert(name.into(), tag);
        self
    }

    /// Adds a resolver above everything registered so far.
    pub fn resolver(mut self, resolver: TagResolver) -> Self {
        if !self.pending.absorb(&resolver) {
            self.close_table();
            self.components.push(resolver);
        }
        self
    }

    /// Adds several resolvers, lowest precedence first.
    pub fn resolvers<I>(self, resolvers: I) -> Self
    where
        I: IntoIterator<Item = TagResolver>,
    {
        resolvers.into_iter().fold(self, Self::resolver)
    }

    fn close_table(&mut self) {
        if let Some(tags) = self.pending.take() {
            self.components
                .push(TagResolver::Map(MapTagResolver::new(tags)));
        }
    }

    /// Builds the simplest resolver equivalent to the registrations.
    ///
    /// - Nothing registered: [`TagResolver::Empty`]
    /// - One component: that component (static registrations become a
    ///   [`TagResolver::Map`])
    /// - Otherwise: a flattened [`TagResolver::Sequential`]
    pub fn build(mut self) -> TagResolver {
        self.close_table();
        debug!(components = self.components.len(), "building tag resolver");
        match self.components.len() {
            0 => TagResolver::Empty,
            1 => self.components.remove(0),
            _ => TagResolver::Sequential(SequentialResolver::flattened(self.components)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentQueue;
    use crate::resolver::TagMap;
    use std::sync::Arc;

    fn echo() -> TagResolver {
        TagResolver::from_fn(["echo"], |args: &mut ArgumentQueue| {
            Ok(Tag::insert(args.pop_or("echo needs a value")?.value().to_string()))
        })
    }

    #[test]
    fn test_empty_builder() {
        assert!(matches!(TagResolverBuilder::new().build(), TagResolver::Empty));
    }

    #[test]
    fn test_static_registrations_become_map() {
        let resolver = TagResolver::builder()
            .tag("a", Tag::insert("1"))
            .resolver(TagResolver::single("b", Tag::insert("2")))
            .build();

        assert!(matches!(resolver, TagResolver::Map(_)));
        assert_eq!(resolver.resolve_name("a"), Some(Tag::insert("1")));
        assert_eq!(resolver.resolve_name("b"), Some(Tag::insert("2")));
    }

    #[test]
    fn test_single_dynamic_is_returned_as_is() {
        let resolver = TagResolver::builder().resolver(echo()).build();
        assert!(matches!(resolver, TagResolver::Dynamic(_)));
    }

    #[test]
    fn test_later_tag_wins() {
        let resolver = TagResolver::builder()
            .tag("x", Tag::insert("first"))
            .tag("x", Tag::insert("second"))
            .build();
        assert_eq!(resolver.resolve_name("x"), Some(Tag::insert("second")));
    }

    #[test]
    fn test_mixed_registrations_keep_order() {
        let shadowing_echo = TagResolver::single("echo", Tag::insert("static echo"));
        let resolver = TagResolver::builder()
            .tag("echo", Tag::insert("shadowed"))
            .resolver(echo())
            .resolver(shadowing_echo)
            .tag("other", Tag::insert("o"))
            .build();

        assert!(matches!(resolver, TagResolver::Sequential(_)));
        assert_eq!(resolver.resolve_name("echo"), Some(Tag::insert("static echo")));
        assert_eq!(resolver.resolve_name("other"), Some(Tag::insert("o")));
    }

    #[test]
    fn test_dynamic_overrides_earlier_static() {
        let resolver = TagResolver::builder()
            .tag("echo", Tag::insert("static"))
            .resolver(echo())
            .build();

        let mut args = ArgumentQueue::new(["dynamic"]);
        assert_eq!(
            resolver.resolve("echo", &mut args).unwrap(),
            Some(Tag::insert("dynamic"))
        );
    }

    #[test]
    fn test_resolvers_in_order() {
        let resolver = TagResolver::builder()
            .resolvers([
                TagResolver::single("x", Tag::insert("a")),
                TagResolver::single("x", Tag::insert("b")),
                TagResolver::single("x", Tag::insert("c")),
            ])
            .build();
        assert_eq!(resolver.resolve_name("x"), Some(Tag::insert("c")));
    }

    #[test]
    fn test_lone_map_keeps_caller_table() {
        let shared: Arc<TagMap> = Arc::new(
            [("a".to_string(), Tag::insert("1"))].into_iter().collect(),
        );
        let resolver = TagResolver::layered([TagResolver::map(Arc::clone(&shared))]);

        match &resolver {
            TagResolver::Map(map) => assert!(Arc::ptr_eq(map.tags(), &shared)),
            other => panic!("expected a map resolver, got {:?}", other),
        }
    }

    #[test]
    fn test_map_merged_with_tags_is_copied() {
        let shared: Arc<TagMap> = Arc::new(
            [("a".to_string(), Tag::insert("1"))].into_iter().collect(),
        );
        let resolver = TagResolver::builder()
            .resolver(TagResolver::map(Arc::clone(&shared)))
            .tag("b", Tag::insert("2"))
            .build();

        match &resolver {
            TagResolver::Map(map) => {
                assert!(!Arc::ptr_eq(map.tags(), &shared));
                assert_eq!(map.len(), 2);
            }
            other => panic!("expected a map resolver, got {:?}", other),
        }
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_layered_shorthand() {
        let resolver = TagResolver::layered([
            TagResolver::single("x", Tag::insert("a")),
            echo(),
            TagResolver::single("y", Tag::insert("b")),
        ]);
        assert!(resolver.has("x"));
        assert!(resolver.has("echo"));
        assert!(resolver.has("y"));
        assert!(!resolver.is_mappable());
    }
}
