//! MemeForge Editor Core
//!
//! The single-screen caption editor, reframed as a toolkit-agnostic
//! session: all UI wiring arrives as explicit [`EditorEvent`]s, every
//! platform service (picker, capability probe, share facility, screen
//! flattening) is an injected trait object, and each event runs to
//! completion on the caller's thread before the next is dispatched.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                EditorSession                  │
//! │   captions · image · export/camera gating     │
//! │  ┌─────────┐ ┌────────┐ ┌───────┐ ┌────────┐  │
//! │  │ Media   │ │Capture │ │ Share │ │ Screen │  │
//! │  │ Picker  │ │ Probe  │ │Facility│ │Renderer│  │
//! │  └─────────┘ └────────┘ └───────┘ └────────┘  │
//! └───────────────────────────────────────────────┘
//! ```

pub mod event;
pub mod session;

pub use event::*;
pub use session::*;
