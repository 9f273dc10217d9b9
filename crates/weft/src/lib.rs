//! # weft - styled text fragments and list joining
//!
//! `weft` is the fragment layer of a rich-text templating toolkit. It defines
//! the styled text node every other part of the toolkit passes around, and
//! the rules for stitching several of them into one.
//!
//! ## Core Concepts
//!
//! - [`Text`]: An immutable styled text node with children
//! - [`JoinSpec`]: How to join fragments: separators, framing and a transform
//! - [`JoinSpecBuilder`]: Builder that produces independent `JoinSpec` snapshots
//! - [`JoinConfig`] / [`JoinConfigs`]: Join styles declared in YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use weft::{JoinSpec, Text};
//! use console::Style;
//!
//! let spec = JoinSpec::builder()
//!     .separator(", ")
//!     .last_separator(", and ")
//!     .last_separator_if_serial(" and ")
//!     .operator(|item| item.with_style(Style::new().cyan()))
//!     .build();
//!
//! let fruits = spec.join(["apples", "pears", "plums"]);
//! assert_eq!(fruits.plain_text(), "apples, pears, and plums");
//!
//! let pair = spec.join(["salt", "pepper"]);
//! assert_eq!(pair.plain_text(), "salt and pepper");
//! ```
//!
//! ## Serial Separators
//!
//! English lists put a comma before the conjunction only when there are three
//! or more items. `last_separator_if_serial` is used only for two-element
//! lists; longer lists fall back to `last_separator`, then `separator`.

pub mod config;
pub mod join;
mod text;

pub use config::{ConfigError, ConfigFormat};
pub use join::{JoinConfig, JoinConfigs, JoinError, JoinPart, JoinSpec, JoinSpecBuilder, Operator};
pub use text::Text;

// Re-export the style type carried by fragments.
pub use console::Style;
