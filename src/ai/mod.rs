//! AI operations for question generation.
//!
//! This module provides integration with an OpenAI-compatible chat completions
//! API and the prompt builder that shapes each request.
//!
//! # Module Structure
//!
//! - `openai`: HTTP client and the `QuestionService`
//! - `prompts`: System prompt and the prompt builder
//!
//! # Example
//!
//! ```no_run
//! use stillpoint::ai::{build_prompt, QuestionGenerator, QuestionService};
//! use stillpoint::journal::PersonaId;
//! use stillpoint::Config;
//!
//! let config = Config::load()?;
//! let service = QuestionService::from_config(&config)?;
//! let question = service.generate(&build_prompt(None, PersonaId::Rumi))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod openai;
pub mod prompts;

// Re-export commonly used types
pub use openai::{Message, OpenAIClient, QuestionGenerator, QuestionService, SamplingOptions};
pub use prompts::{build_prompt, question_messages, SYSTEM_PROMPT};
