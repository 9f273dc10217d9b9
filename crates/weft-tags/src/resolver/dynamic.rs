//! Resolvers backed by caller logic.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::Resolve;
use crate::argument::ArgumentQueue;
use crate::error::TagError;
use crate::tag::Tag;

/// A shared handle to caller-defined resolution logic.
///
/// Dynamic resolvers may compute tags from arguments or from state outside
/// the resolver, so they are never flattened into a table.
#[derive(Debug, Clone)]
pub struct DynamicResolver {
    inner: Arc<dyn Resolve>,
}

impl DynamicResolver {
    pub fn new(resolver: impl Resolve + 'static) -> Self {
        Self {
            inner: Arc::new(resolver),
        }
    }

    /// Wraps logic that is already shared.
    pub fn from_arc(resolver: Arc<dyn Resolve>) -> Self {
        Self { inner: resolver }
    }
}

impl Resolve for DynamicResolver {
    fn resolve(&self, name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError> {
        self.inner.resolve(name, arguments)
    }

    fn has(&self, name: &str) -> bool {
        self.inner.has(name)
    }
}

type Handler = dyn Fn(&mut ArgumentQueue) -> Result<Tag, TagError> + Send + Sync;

/// Resolves a fixed set of names by calling a function with the arguments.
pub struct FnResolver {
    names: BTreeSet<String>,
    handler: Arc<Handler>,
}

impl FnResolver {
    pub fn new<I, S, F>(names: I, handler: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut ArgumentQueue) -> Result<Tag, TagError> + Send + Sync + 'static,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            handler: Arc::new(handler),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Resolve for FnResolver {
    fn resolve(&self, name: &str, arguments: &mut ArgumentQueue) -> Result<Option<Tag>, TagError> {
        if !self.names.contains(name) {
            return Ok(None);
        }
        (self.handler)(arguments).map(Some)
    }

    fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl fmt::Debug for FnResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolver")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
