#[allow(clippy::module_inception)]
mod structure;
mod types;

pub use structure::*;
pub use types::*;
