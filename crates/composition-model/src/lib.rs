//! MemeForge Composition Model
//!
//! The domain's only data entity (a finished caption composition) and the
//! styling record that controls how captions are drawn.

pub mod composition;
pub mod style;

pub use composition::*;
pub use style::*;
