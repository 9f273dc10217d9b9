//! Layered resolution over several components.
//!
//! A [`SequentialResolver`] combines resolvers given lowest precedence first;
//! on a name collision the later component wins.
//!
//! # Flattening
//!
//! [`SequentialResolver::flattened`] does the work up front. It walks the
//! components in order and pours every run of consecutive mappable components
//! into one table, later entries overwriting earlier ones. A component that
//! cannot be mapped ends the current run: the table built so far becomes a
//! segment, and the component becomes its own segment after it. Nested
//! sequential resolvers are spliced in place, segment by segment.
//!
//! Lookups scan segments from the last to the first and return the first
//! hit. Because segments keep the order of the components they came from,
//! a dynamic component overrides static entries registered before it and is
//! overridden by static entries registered after it, exactly as an
//! unflattened chain would behave.
//!
//! ```text
//! components:  [map A] [map B] [dynamic D] [map C]
//! segments:    [table A+B]     [D]         [table C]
//! lookup:      <---------------------------------- scan
//! ```
//!
//! Every component consulted during a lookup reads the arguments from the
//! start. A component that fails with a [`TagError`] does not stop the scan;
//! the error is reported only if no lower segment knows the name.
//!
//! Flattening happens once, at construction. The result is immutable, so it
//! can be shared between threads without synchronization.
//!
//! [`SequentialResolver::lazy`] keeps every component as its own segment, for
//! callers that want the unflattened chain.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{MappableResolver, Resolve, TagMap, TagResolver};
use crate::argument::ArgumentQueue;
use crate::error::TagError;
use crate::tag::Tag;

#[derive(Debug, Clone)]
enum Segment {
    /// Entries flattened from consecutive mappable components.
    Table(Arc<TagMap>),
    /// A component consulted as-is.
    Resolver(TagResolver),
}

impl Segment {
    fn is_mappable(&self) -> bool {
        match self {
            Segment::Table(_) => true,
            Segment::Resolver(resolver) => resolver.is_mappable(),
        }
    }
}

/// An ordered chain of resolvers where later components win.
#[derive(Debug, Clone, Default)]
pub struct SequentialResolver {
    /// Lowest precedence first.
    segments: Vec<Segment>,
}

impl SequentialResolver {
    /// Builds a chain, flattening runs of mappable components into tables.
    ///
    /// `components` are given lowest precedence first.
    pub fn flattened<I>(components: I) -> Self
    where
        I: IntoIterator<Item = TagResolver>,
    {
        let mut flattener = Flattener::default();
        for component in components {
            flattener.absorb(component);
        }
        let resolver = flattener.finish();

        debug!(
            segments = resolver.segments.len(),
            tables = resolver.table_count(),
            "built sequential tag resolver"
        );
        resolver
    }

    /// Builds a chain that consults every component in turn.
    ///
    /// `components` are given lowest precedence first.
    pub fn lazy<I>(components: I) -> Self
    where
        I: IntoIterator<Item = TagResolver>,
    {
        Self {
            segments: components.into_iter().map(Segment::Resolver).collect(),
        }
    }

    /// Number of segments a lookup may visit.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Number of flattened tables among the segments.
    pub fn table_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Table(_)))
            .count()
    }

    /// Returns true if every segment can be exported as a table.
    pub fn is_mappable(&self) -> bool {
        self.segments.iter().all(Segment::is_mappable)
    }

    /// Resolves `name`, scanning from the highest precedence segment down.
    ///
    /// Each component sees the arguments from the start. A component that
    /// fails does not hide lower segments: its error is returned only when
    /// no lower segment resolves the name.
    pub fn resolve(
        &self,
        name: &str,
        arguments: &mut ArgumentQueue,
    ) -> Result<Option<Tag>, TagError> {
        let mut first_error = None;
        for segment in self.segments.iter().rev() {
            let found = match segment {
                Segment::Table(tags) => tags.get(name).cloned(),
                Segment::Resolver(resolver) => {
                    arguments.reset();
                    match resolver.resolve(name, arguments) {
                        Ok(found) => found,
                        Err(err) => {
                            trace!(name, %err, "tag component failed, trying lower segments");
                            if first_error.is_none() {
                                first_error = Some(err);
                            }
                            None
                        }
                    }
                }
            };
            if found.is_some() {
                trace!(name, "resolved tag");
                return Ok(found);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.segments.iter().any(|segment| match segment {
            Segment::Table(tags) => tags.contains_key(name),
            Segment::Resolver(resolver) => resolver.has(name),
        })
    }
}

impl MappableResolver for SequentialResolver {
    fn contribute_to_map(&self, map: &mut TagMap) -> bool {
        // Check first so a partial contribution never reaches `map`.
        if !self.is_mappable() {
            return false;
        }
        for segment in &self.segments {
            match segment {
                Segment::Table(tags) => {
                    map.extend(tags.iter().map(|(name, tag)| (name.clone(), tag.clone())));
                }
                Segment::Resolver(resolver) => {
                    resolver.contribute_to_map(map);
                }
            }
        }
        true
    }
}

impl Resolve for SequentialResolver {
    fn resolve(&self, name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError> {
        SequentialResolver::resolve(self, name, arguments)
    }

    fn has(&self, name: &str) -> bool {
        SequentialResolver::has(self, name)
    }
}

/// Consecutive mappable entries waiting to become one table.
///
/// A run made of exactly one shared table keeps that table's allocation;
/// entries are copied only once a second source joins the run.
#[derive(Debug, Clone, Default)]
pub(super) struct TableRun {
    /// Set only while `entries` is empty.
    shared: Option<Arc<TagMap>>,
    entries: TagMap,
}

impl TableRun {
    fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.shared.as_ref().map_or(true, |tags| tags.is_empty())
    }

    pub(super) fn insert(&mut self, name: String, tag: Tag) {
        self.unshare();
        self.entries.insert(name, tag);
    }

    /// Adds a table above the entries already in the run.
    fn pour(&mut self, tags: &Arc<TagMap>) {
        if self.is_empty() {
            self.shared = Some(Arc::clone(tags));
        } else {
            self.unshare();
            self.entries
                .extend(tags.iter().map(|(name, tag)| (name.clone(), tag.clone())));
        }
    }

    /// Adds a component to the run. Returns false, leaving the run
    /// untouched, when the component cannot be mapped.
    pub(super) fn absorb(&mut self, component: &TagResolver) -> bool {
        match component {
            TagResolver::Empty => true,
            TagResolver::Map(map) => {
                self.pour(map.tags());
                true
            }
            other => {
                if !other.is_mappable() {
                    return false;
                }
                self.unshare();
                other.contribute_to_map(&mut self.entries)
            }
        }
    }

    /// Ends the run, returning its table if it has any entries.
    pub(super) fn take(&mut self) -> Option<Arc<TagMap>> {
        if let Some(shared) = self.shared.take() {
            if !shared.is_empty() {
                return Some(shared);
            }
        }
        if self.entries.is_empty() {
            None
        } else {
            Some(Arc::new(std::mem::take(&mut self.entries)))
        }
    }

    fn unshare(&mut self) {
        if let Some(shared) = self.shared.take() {
            self.entries = TagMap::clone(&shared);
        }
    }
}

/// Accumulates segments while walking components in precedence order.
#[derive(Default)]
struct Flattener {
    segments: Vec<Segment>,
    run: TableRun,
}

impl Flattener {
    fn absorb(&mut self, component: TagResolver) {
        match component {
            TagResolver::Sequential(nested) => {
                for segment in nested.segments {
                    match segment {
                        Segment::Table(tags) => self.run.pour(&tags),
                        Segment::Resolver(resolver) => self.absorb(resolver),
                    }
                }
            }
            other => {
                if !self.run.absorb(&other) {
                    self.close_table();
                    self.segments.push(Segment::Resolver(other));
                }
            }
        }
    }

    fn close_table(&mut self) {
        if let Some(tags) = self.run.take() {
            trace!(entries = tags.len(), "flattened tag table");
            self.segments.push(Segment::Table(tags));
        }
    }

    fn finish(mut self) -> SequentialResolver {
        self.close_table();
        SequentialResolver {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> TagResolver {
        TagResolver::map(
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), Tag::insert(*value)))
                .collect::<TagMap>(),
        )
    }

    /// Dynamic resolver answering `name` with `value`, ignoring arguments.
    fn dynamic(name: &'static str, value: &'static str) -> TagResolver {
        TagResolver::from_fn([name], move |_: &mut ArgumentQueue| Ok(Tag::insert(value)))
    }

    fn lookup(resolver: &SequentialResolver, name: &str) -> Option<Tag> {
        resolver.resolve(name, &mut ArgumentQueue::empty()).unwrap()
    }

    // =========================================================================
    // Precedence tests
    // =========================================================================

    #[test]
    fn test_later_component_wins() {
        let a = table(&[("x", "from a")]);
        let b = table(&[("x", "from b")]);

        for resolver in [
            SequentialResolver::flattened([a.clone(), b.clone()]),
            SequentialResolver::lazy([a, b]),
        ] {
            assert_eq!(lookup(&resolver, "x"), Some(Tag::insert("from b")));
        }
    }

    #[test]
    fn test_dynamic_between_tables_keeps_declared_order() {
        let resolver = SequentialResolver::flattened([
            table(&[("x", "low"), ("y", "low")]),
            dynamic("x", "dynamic"),
            table(&[("y", "high")]),
        ]);

        // The dynamic component overrides the table before it...
        assert_eq!(lookup(&resolver, "x"), Some(Tag::insert("dynamic")));
        // ...and is overridden by the table after it.
        assert_eq!(lookup(&resolver, "y"), Some(Tag::insert("high")));
    }

    #[test]
    fn test_table_after_dynamic_overrides_it() {
        let resolver = SequentialResolver::flattened([
            dynamic("x", "dynamic"),
            table(&[("x", "static")]),
        ]);
        assert_eq!(lookup(&resolver, "x"), Some(Tag::insert("static")));
    }

    #[test]
    fn test_names_only_in_dynamic_resolve() {
        let resolver = SequentialResolver::flattened([
            table(&[("a", "1")]),
            dynamic("only_dynamic", "yes"),
            table(&[("b", "2")]),
        ]);
        assert_eq!(lookup(&resolver, "only_dynamic"), Some(Tag::insert("yes")));
        assert!(resolver.has("only_dynamic"));
        assert_eq!(lookup(&resolver, "missing"), None);
        assert!(!resolver.has("missing"));
    }

    // =========================================================================
    // Flattening shape tests
    // =========================================================================

    #[test]
    fn test_static_components_collapse_to_one_table() {
        let resolver = SequentialResolver::flattened([
            table(&[("a", "1")]),
            TagResolver::single("b", Tag::insert("2")),
            TagResolver::empty(),
            table(&[("c", "3")]),
        ]);
        assert_eq!(resolver.depth(), 1);
        assert_eq!(resolver.table_count(), 1);
        assert!(resolver.is_mappable());
    }

    #[test]
    fn test_dynamic_splits_tables() {
        let resolver = SequentialResolver::flattened([
            table(&[("a", "1")]),
            table(&[("b", "2")]),
            dynamic("d", "x"),
            table(&[("c", "3")]),
        ]);
        assert_eq!(resolver.depth(), 3);
        assert_eq!(resolver.table_count(), 2);
        assert!(!resolver.is_mappable());
    }

    #[test]
    fn test_nested_sequential_is_spliced() {
        let inner = SequentialResolver::flattened([table(&[("x", "inner")]), dynamic("d", "x")]);
        let resolver = SequentialResolver::flattened([
            table(&[("x", "outer low"), ("y", "outer low")]),
            TagResolver::Sequential(inner),
            table(&[("y", "outer high")]),
        ]);

        // [table x,y merged with inner x] [d] [table y]
        assert_eq!(resolver.depth(), 3);
        assert_eq!(lookup(&resolver, "x"), Some(Tag::insert("inner")));
        assert_eq!(lookup(&resolver, "y"), Some(Tag::insert("outer high")));
        assert_eq!(lookup(&resolver, "d"), Some(Tag::insert("x")));
    }

    #[test]
    fn test_nested_lazy_chain_gets_flattened() {
        let inner = SequentialResolver::lazy([table(&[("a", "1")]), table(&[("b", "2")])]);
        let resolver = SequentialResolver::flattened([TagResolver::Sequential(inner)]);
        assert_eq!(resolver.depth(), 1);
        assert_eq!(lookup(&resolver, "b"), Some(Tag::insert("2")));
    }

    #[test]
    fn test_empty_chain() {
        let resolver = SequentialResolver::flattened(Vec::<TagResolver>::new());
        assert_eq!(resolver.depth(), 0);
        assert_eq!(lookup(&resolver, "x"), None);
        assert!(resolver.is_mappable());
    }

    // =========================================================================
    // Contribution tests
    // =========================================================================

    #[test]
    fn test_static_chain_contributes_in_precedence_order() {
        let resolver = SequentialResolver::lazy([
            table(&[("x", "low"), ("a", "1")]),
            table(&[("x", "high")]),
        ]);

        let mut map = TagMap::new();
        assert!(resolver.contribute_to_map(&mut map));
        assert_eq!(map.get("x"), Some(&Tag::insert("high")));
        assert_eq!(map.get("a"), Some(&Tag::insert("1")));
    }

    #[test]
    fn test_dynamic_chain_leaves_map_untouched() {
        let resolver = SequentialResolver::lazy([table(&[("a", "1")]), dynamic("d", "x")]);

        let mut map = TagMap::new();
        assert!(!resolver.contribute_to_map(&mut map));
        assert!(map.is_empty());
    }

    // =========================================================================
    // Argument handling tests
    // =========================================================================

    #[test]
    fn test_arguments_reach_dynamic_segment() {
        let echo = TagResolver::from_fn(["echo"], |args: &mut ArgumentQueue| {
            Ok(Tag::insert(args.pop_or("echo needs a value")?.value().to_string()))
        });
        let resolver = SequentialResolver::flattened([table(&[("a", "1")]), echo]);

        let mut args = ArgumentQueue::new(["hello"]);
        assert_eq!(
            resolver.resolve("echo", &mut args).unwrap(),
            Some(Tag::insert("hello"))
        );

        let err = resolver.resolve("echo", &mut ArgumentQueue::empty());
        assert!(matches!(err, Err(TagError::MissingArgument { .. })));
    }

    /// Takes one argument, then declines every name.
    #[derive(Debug)]
    struct Greedy;

    impl Resolve for Greedy {
        fn resolve(&self, _name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError> {
            arguments.pop();
            Ok(None)
        }

        fn has(&self, _name: &str) -> bool {
            true
        }
    }

    fn failing(name: &'static str, message: &'static str) -> TagResolver {
        TagResolver::from_fn([name], move |_: &mut ArgumentQueue| {
            Err(TagError::invalid_argument(name, message))
        })
    }

    #[test]
    fn test_failing_component_falls_back_to_lower_table() {
        let needs_width = TagResolver::from_fn(["pad"], |args: &mut ArgumentQueue| {
            Ok(Tag::insert(args.pop_or("pad needs a width")?.value().to_string()))
        });
        let components = [table(&[("pad", "static")]), needs_width];

        for resolver in [
            SequentialResolver::flattened(components.clone()),
            SequentialResolver::lazy(components),
        ] {
            assert_eq!(lookup(&resolver, "pad"), Some(Tag::insert("static")));

            let mut args = ArgumentQueue::new(["4"]);
            assert_eq!(
                resolver.resolve("pad", &mut args).unwrap(),
                Some(Tag::insert("4"))
            );
        }
    }

    #[test]
    fn test_declining_component_leaves_arguments_for_lower_ones() {
        let echo = TagResolver::from_fn(["echo"], |args: &mut ArgumentQueue| {
            Ok(Tag::insert(args.pop_or("need")?.value().to_string()))
        });
        let resolver = SequentialResolver::flattened([echo, TagResolver::dynamic(Greedy)]);

        let mut args = ArgumentQueue::new(["hi"]);
        assert_eq!(
            resolver.resolve("echo", &mut args).unwrap(),
            Some(Tag::insert("hi"))
        );
    }

    #[test]
    fn test_highest_error_reported_when_nothing_resolves() {
        let resolver = SequentialResolver::flattened([
            table(&[("other", "1")]),
            failing("x", "low"),
            failing("x", "high"),
        ]);

        assert_eq!(
            resolver.resolve("x", &mut ArgumentQueue::empty()),
            Err(TagError::invalid_argument("x", "high"))
        );
        assert_eq!(resolver.resolve("missing", &mut ArgumentQueue::empty()), Ok(None));
    }

    #[test]
    fn test_lower_dynamic_hit_beats_higher_error() {
        let resolver = SequentialResolver::flattened([dynamic("x", "low"), failing("x", "high")]);
        assert_eq!(lookup(&resolver, "x"), Some(Tag::insert("low")));
    }

    // =========================================================================
    // Table sharing tests
    // =========================================================================

    fn shared_table(entries: &[(&str, &str)]) -> Arc<TagMap> {
        Arc::new(
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), Tag::insert(*value)))
                .collect(),
        )
    }

    #[test]
    fn test_lone_table_in_run_is_shared() {
        let shared = shared_table(&[("a", "1")]);
        let resolver = SequentialResolver::flattened([
            TagResolver::map(Arc::clone(&shared)),
            dynamic("d", "x"),
        ]);

        match &resolver.segments[0] {
            Segment::Table(tags) => assert!(Arc::ptr_eq(tags, &shared)),
            other => panic!("expected a table segment, got {:?}", other),
        }
    }

    #[test]
    fn test_merged_run_leaves_caller_table_alone() {
        let shared = shared_table(&[("a", "1")]);
        let resolver = SequentialResolver::flattened([
            TagResolver::map(Arc::clone(&shared)),
            table(&[("a", "2"), ("b", "3")]),
        ]);

        match &resolver.segments[0] {
            Segment::Table(tags) => {
                assert!(!Arc::ptr_eq(tags, &shared));
                assert_eq!(tags.len(), 2);
            }
            other => panic!("expected a table segment, got {:?}", other),
        }
        assert_eq!(*shared, *shared_table(&[("a", "1")]));
        assert_eq!(lookup(&resolver, "a"), Some(Tag::insert("2")));
    }

    #[test]
    fn test_table_run_take() {
        let mut run = TableRun::default();
        assert!(run.take().is_none());

        assert!(run.absorb(&TagResolver::empty()));
        assert!(run.absorb(&TagResolver::map(TagMap::new())));
        assert!(run.take().is_none());

        run.insert("a".to_string(), Tag::insert("1"));
        assert!(!run.absorb(&dynamic("d", "x")));
        assert_eq!(run.take().map(|tags| tags.len()), Some(1));
        assert!(run.take().is_none());
    }
}
