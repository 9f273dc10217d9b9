//! Tag resolution errors.

/// Error raised by a resolver that inspects parse-time arguments.
///
/// An unknown tag name is never an error: resolvers report it as `Ok(None)`
/// and leave the decision to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The tag needed another argument and none was left.
    #[error("missing argument: {message}")]
    MissingArgument { message: String },

    /// An argument was present but unusable.
    #[error("invalid argument for '{tag}': {message}")]
    InvalidArgument { tag: String, message: String },
}

impl TagError {
    pub fn invalid_argument(tag: impl Into<String>, message: impl Into<String>) -> Self {
        TagError::InvalidArgument {
            tag: tag.into(),
            message: message.into(),
        }
    }
}
