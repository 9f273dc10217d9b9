//! Join spec validation errors.

/// Error returned when a join spec builder is given an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// A field that has no "unset" state was given an absent value.
    #[error("join spec field '{field}' requires a value")]
    InvalidArgument { field: &'static str },
}
