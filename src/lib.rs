//! # H5KEYS
//!
//! List the top-level layout of a HDF5 file.
//!
//! Every member of the root group is classified as either a dataset, with its shape and element
//! type, or a group, with the names of its immediate members. Nested groups are not expanded. This
//! is meant for getting a first look at an unfamiliar file before writing a proper pipeline for it.
//!
//! ## Usage
//!
//! ```no_run
//! use h5keys::prelude::*;
//!
//! let s = Structure::inspect("data.h5").unwrap();
//!
//! for e in s.entries() {
//!     println!("{}: {:?}", e.name, e.node);
//! }
//! ```
//!
//! The [report] module renders a [Structure](structure::Structure), or the error that replaced it,
//! as text or JSON.

pub mod error;
pub mod report;
pub mod structure;

pub use error::{InspectError, Result};

pub mod prelude {
    pub use super::error::InspectError;
    pub use super::structure::{ElementType, Entry, Node, Structure};
}
