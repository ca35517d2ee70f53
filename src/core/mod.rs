//! Core business logic module
//!
//! This module contains the session engine components:
//! - `directory` - account lookup by identifier
//! - `session` - authentication state machine and menu dispatch loop

pub mod directory;
pub mod session;

pub use directory::AccountDirectory;
pub use session::{Session, SessionEnd};
