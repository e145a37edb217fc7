use std::io;
use std::path::Path;
use std::{fmt, fs};

use thiserror::Error;

/// A file chosen through the picker. Name and contents are captured once,
/// when the dialog returns, and stay read-only afterwards.
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid filename"))?
            .to_string();
        let data = fs::read(path)?;
        Ok(Self { name, data })
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.data.len())
            .finish()
    }
}

/// The three ways a submission can terminate without result lines.
/// `Display` is the exact text shown to the user; everything else about
/// the failure stays internal.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please select at least one file.")]
    EmptySelection,
    #[error("File upload failed.")]
    ServerRejected { status: reqwest::StatusCode },
    #[error("Error uploading file.")]
    Transport(#[from] reqwest::Error),
}
