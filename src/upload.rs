//! Placeholder upload action.
//!
//! There is no transfer yet; a real upload service would take the selected
//! file's bytes and name and report back. Until then the form surfaces a
//! blocking acknowledgment naming the file, or a warning when nothing is
//! selected.

use crate::selection::{MediaFile, Selection};

pub const MISSING_FILE_WARNING: &str = "Por favor, selecciona un video primero.";

/// What the upload button should surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPrompt {
    Ready(String),
    MissingFile(&'static str),
}

impl UploadPrompt {
    pub fn message(&self) -> &str {
        match self {
            UploadPrompt::Ready(message) => message,
            UploadPrompt::MissingFile(message) => message,
        }
    }
}

/// Decides the upload outcome from the current selection. Never mutates it.
pub fn prompt<F: MediaFile, P>(selection: &Selection<F, P>) -> UploadPrompt {
    match selection.file_name() {
        Some(name) => UploadPrompt::Ready(format!("Video \"{}\" listo para procesar.", name)),
        None => UploadPrompt::MissingFile(MISSING_FILE_WARNING),
    }
}
