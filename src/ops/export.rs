//! Export and share the current question.

use crate::constants::{EXPORT_FILE_NAME, SHARE_TEXT_PREFIX};
use crate::errors::{AppError, AppResult};
use crate::journal::SessionState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes the current question to `dir/reflection.txt` and returns the file path.
///
/// The file holds the question verbatim: no header, footer, or trailing newline.
/// An existing export is overwritten. On unix the file is created owner-only.
///
/// # Errors
///
/// Returns `AppError::Session` if no question has been generated yet, or
/// `AppError::Io` if the directory or file cannot be written.
pub fn export_question(session: &SessionState, dir: &Path) -> AppResult<PathBuf> {
    if !session.has_question() {
        return Err(AppError::Session(
            "No question to export yet. Ask for a question first".to_string(),
        ));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    debug!("Exporting current question to {:?}", path);

    fs::write(&path, session.current_question())?;

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_FILE_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))?;
    }

    info!(session_id = %session.id(), "Exported current question");
    Ok(path)
}

/// Text suitable for pasting into a message.
///
/// # Examples
///
/// ```
/// use stillpoint::ops::share_text;
///
/// assert_eq!(
///     share_text("Who are you when no one needs you?"),
///     "Here's a reflective question I came across:\n\nWho are you when no one needs you?"
/// );
/// ```
pub fn share_text(question: &str) -> String {
    format!("{}\n\n{}", SHARE_TEXT_PREFIX, question)
}
