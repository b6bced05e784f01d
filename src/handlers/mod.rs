//! CLI command handlers.
//!
//! Kept separate from main.rs so exit-code mapping can be exercised in tests.

mod scan;

pub use scan::{EXIT_FATAL, run_normal_mode};
