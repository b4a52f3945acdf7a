//! Error handling utilities for the stillpoint application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents the ways a single question generation can fail.
///
/// Every variant is recoverable: the session loop reports it to the user and
/// leaves the session state exactly as it was before the request.
///
/// # Examples
///
/// ```
/// use stillpoint::errors::AIError;
///
/// let error = AIError::Provider {
///     status: 500,
///     body: "upstream overloaded".to_string(),
/// };
/// assert!(format!("{}", error).contains("500"));
/// assert!(format!("{}", error).contains("upstream overloaded"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// The HTTP request could not be completed (DNS, connect, timeout, TLS).
    #[error("Could not reach the text generation service: {0}. Check your network connection and STILLPOINT_API_BASE.")]
    Transport(#[source] reqwest::Error),

    /// The service rejected the credential.
    #[error("The text generation service rejected the API key (HTTP {0}). Check OPENAI_API_KEY.")]
    Unauthorized(u16),

    /// The service answered with a non-success status other than an auth failure.
    #[error("Text generation service error (HTTP {status}): {body}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the provider
        body: String,
    },

    /// The response body could not be understood.
    #[error("Invalid response from text generation service: {0}")]
    InvalidResponse(String),

    /// The response parsed but carried no usable question.
    #[error("The text generation service returned an empty question")]
    EmptyResponse,
}

/// Represents all possible errors that can occur in the stillpoint application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use stillpoint::errors::AppError;
///
/// let error = AppError::Config("OPENAI_API_KEY is not set".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: OPENAI_API_KEY is not set");
/// ```
///
/// Converting from an IO error:
/// ```
/// use stillpoint::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Startup configuration is missing or invalid. Fatal.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session operation was requested in a state that cannot satisfy it.
    #[error("Session error: {0}")]
    Session(String),

    #[error("AI error: {0}")]
    AI(#[from] AIError),
}

/// A mood or persona name that is not in the closed set.
///
/// # Examples
///
/// ```
/// use stillpoint::errors::ParseSelectionError;
/// use stillpoint::journal::Mood;
///
/// let err = "sleepy".parse::<Mood>().unwrap_err();
/// assert!(matches!(err, ParseSelectionError::UnknownMood { .. }));
/// assert!(err.to_string().starts_with("Unknown mood 'sleepy'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSelectionError {
    #[error("Unknown mood '{input}'. Choose one of: {choices}")]
    UnknownMood { input: String, choices: String },

    #[error("Unknown persona '{input}'. Choose one of: {choices}")]
    UnknownPersona { input: String, choices: String },
}

/// A specialized Result type for stillpoint operations.
pub type AppResult<T> = Result<T, AppError>;
