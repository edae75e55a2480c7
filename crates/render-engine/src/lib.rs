//! MemeForge Render Engine
//!
//! Flattens the editor's visual state into a single shareable bitmap.
//!
//! # Pipeline
//!
//! ```text
//! source image ──┐
//!                ├── Background fill + aspect-fit
//! screen bounds ─┘            │
//!                             ├── Top caption (stroke + fill)
//! caption style ──────────────┤
//!                             ├── Bottom caption (stroke + fill)
//!                             ▼
//!                       output bitmap
//! ```

pub mod compositor;
pub mod fonts;

pub use compositor::*;
