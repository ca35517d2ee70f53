//! I/O module
//!
//! Account seeding for the directory (CSV seed files and the built-in
//! sample accounts). Interactive I/O lives with the session loop itself,
//! which is generic over its reader and writer.

pub mod seed;

pub use seed::{load_directory, sample_directory};
