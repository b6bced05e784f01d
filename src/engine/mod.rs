//! Dispatch engine.
//!
//! This module provides the concurrent core of the scanner:
//! - A bounded pool of worker threads fed from one signature queue
//! - Per-check result buffers built inside each worker
//! - Message passing of finished checks to the result sink

pub mod dispatch;
pub mod message;
pub mod worker;

pub use dispatch::{DispatchConfig, DispatchEngine};
pub use message::CheckOutput;
pub use worker::{NOTES_MARKER, Worker};
