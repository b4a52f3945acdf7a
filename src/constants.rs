//! Constants used throughout the application.
//!
//! This module contains all constants used in the Still Point application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "stillpoint";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "One question. One shift. A reflective journaling companion";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Configuration Keys & Environment Variables
/// Environment variable holding the API credential for the chat completions service.
pub const ENV_VAR_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the chat completions base URL.
pub const ENV_VAR_API_BASE: &str = "STILLPOINT_API_BASE";
/// Environment variable overriding the chat model.
pub const ENV_VAR_MODEL: &str = "STILLPOINT_MODEL";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_VAR_TIMEOUT_SECS: &str = "STILLPOINT_TIMEOUT_SECS";
/// Environment variable for the directory exported questions are written to.
pub const ENV_VAR_EXPORT_DIR: &str = "STILLPOINT_EXPORT_DIR";

// Text Generation
/// Default base URL of the chat completions API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";
/// Sampling temperature for question generation.
pub const QUESTION_TEMPERATURE: f64 = 0.8;
/// Output token budget for a single generated question.
pub const QUESTION_MAX_TOKENS: u32 = 80;
/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Largest accepted HTTP request timeout in seconds (six hours).
pub const MAX_TIMEOUT_SECS: u64 = 6 * 60 * 60;

// Export
/// Default directory for exported questions.
pub const DEFAULT_EXPORT_DIR: &str = ".";
/// File name of the plain-text question export.
pub const EXPORT_FILE_NAME: &str = "reflection.txt";
/// Lead-in used when building shareable text for a question.
pub const SHARE_TEXT_PREFIX: &str = "Here's a reflective question I came across:";
/// Default POSIX permissions for exported files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "stillpoint";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
