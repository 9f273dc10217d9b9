//! Natural-language list joining.
//!
//! This module provides the pieces needed to stitch a sequence of
//! [`Text`](crate::Text) fragments into one:
//!
//! - [`JoinSpec`]: An immutable description of separators, framing and a
//!   per-element transform
//! - [`JoinSpecBuilder`]: The mutable builder that produces specs
//! - [`Operator`]: The per-element transform
//! - [`JoinConfig`]: A serde-friendly description of a spec for config files
//! - [`JoinError`]: Errors from builder validation
//!
//! Specs distinguish the separator before the last element when exactly two
//! elements are joined ("A and B") from the one used for longer lists
//! ("A, B, and C").

mod builder;
mod config;
mod error;
mod operator;
mod spec;

pub use builder::{JoinPart, JoinSpecBuilder};
pub use config::{JoinConfig, JoinConfigs};
pub use error::JoinError;
pub use operator::Operator;
pub use spec::JoinSpec;
