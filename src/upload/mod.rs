mod types;
mod uploader;

pub use types::{SelectedFile, UploadError};
pub use uploader::{Uploader, UPLOAD_ENDPOINT};
