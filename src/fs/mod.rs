//! Filesystem utilities for subreal.
//!
//! Atomic single-file writes (used for rewritten project files, the cleanup
//! manifest and the config file) and whole-tree helpers (recursive copy and
//! size accounting) used by the backup and scan code.

pub mod atomic;
pub mod tree;

pub use atomic::{atomic_write, atomic_write_file};
pub use tree::{copy_dir_all, dir_size, is_dir_empty};
