use crate::upload::SelectedFile;

/// Directory sent to the server when the user never edits the field.
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// The user's current choices plus the messages from the most recent
/// submission attempt. Every setter replaces its field wholesale; nothing
/// is appended to or edited in place.
pub struct SelectionState {
    files: Vec<SelectedFile>,
    upload_dir: String,
    messages: Vec<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            messages: Vec::new(),
        }
    }
}

impl SelectionState {
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Replaces the file selection. An empty list is allowed here; the
    /// uploader rejects it at submit time.
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    /// Replaces the destination directory verbatim, empty string included.
    pub fn set_upload_dir(&mut self, upload_dir: String) {
        self.upload_dir = upload_dir;
    }

    /// Replaces the message list with the outcome of one submission.
    pub fn set_messages(&mut self, messages: Vec<String>) {
        self.messages = messages;
    }

    pub fn clear(&mut self) {
        *self = SelectionState::default();
    }
}
