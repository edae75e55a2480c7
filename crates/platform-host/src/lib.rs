//! MemeForge Host Platform Services
//!
//! Desktop implementations of the platform contracts: a file-backed media
//! picker, a V4L2 camera-availability probe, and a share facility that
//! writes the composite to disk. These are the collaborators the CLI wires
//! into a headless editor session.

pub mod picker;
pub mod probe;
pub mod share;

pub use picker::*;
pub use probe::*;
pub use share::*;
