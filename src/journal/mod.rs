//! Core journaling domain for the stillpoint application.
//!
//! This module contains the in-memory model of one reflective session: the
//! closed set of moods, the persona catalog, and the session state holding the
//! current question, the archive of generated questions, and journal entries.
//!
//! Nothing in this module performs I/O. The session loop in `ops` owns a
//! `SessionState` and drives it.

pub mod mood;
pub mod persona;
pub mod session;

#[cfg(test)]
mod tests;

pub use mood::Mood;
pub use persona::{Persona, PersonaCatalog, PersonaId};
pub use session::{GeneratedQuestion, JournalEntry, SessionState, SessionSummary};
