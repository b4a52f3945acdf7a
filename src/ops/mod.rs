//! High-level operations for a reflective session.
//!
//! This module provides the user-facing operations that orchestrate the core
//! functionality: asking for a question, exporting and sharing it, and the
//! interactive session loop that ties them together.

pub mod ask;
pub mod export;
pub mod interactive;

// Re-export commonly used functions
pub use ask::ask_question;
pub use export::{export_question, share_text};
pub use interactive::{run_session, SessionCommand, SessionOptions};
