//! qname
//!
//! Immutable qualified names: ordered sequences of string segments such as
//! namespace paths, configuration key paths or scoped symbol names.
//!
//! # Core Concepts
//!
//! - [`QualifiedName`]: persistent chain of segments with structural sharing
//! - [`NameFormat`]: separator and escape token for the text form
//! - [`NamePattern`]: a name of regular expressions, compiled once
//! - [`Navigable`]: nested documents a name can be resolved against
//!
//! # Example
//!
//! ```rust
//! use qname::{NameFormat, QualifiedName};
//!
//! let service = QualifiedName::of("org").add("example").add("billing");
//! assert_eq!(service.to_string(), "org.example.billing");
//!
//! // Escape-aware text form
//! let slashed = NameFormat::default().with_separator("/").unwrap();
//! let odd = service.add("v1/v2");
//! let text = odd.join(&slashed);
//! assert_eq!(QualifiedName::parse(&text, &slashed), odd);
//!
//! // Slicing shares the leading chain
//! assert_eq!(odd.left(2), QualifiedName::of_all(["org", "example"]));
//! assert!(odd.starts_with(&service));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod error;
mod fold;
mod format;
mod iter;
mod name;
mod pattern;
mod query;
mod resolve;
mod slice;
mod transform;

// Re-exports
pub use error::{FormatError, QualifiedNameError, Result};
pub use format::{NameFormat, EMPTY_NAME_MARKER};
pub use iter::{Segments, SegmentsRev};
pub use name::QualifiedName;
pub use pattern::NamePattern;
pub use resolve::Navigable;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with qualified names
    pub use crate::{NameFormat, NamePattern, Navigable, QualifiedName, QualifiedNameError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
