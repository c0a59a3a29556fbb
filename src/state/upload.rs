//! Upload form state

use crate::error::ApiError;
use crate::routes;
use crate::types::Document;

/// The only MIME type the form accepts
pub const PDF_MIME: &str = "application/pdf";

pub const INVALID_PICK: &str = "Please select a valid PDF file.";
pub const INVALID_DROP: &str = "Please drop a valid PDF file.";
pub const NO_FILE: &str = "Please select a PDF file to upload.";
pub const UPLOAD_FAILED: &str = "Failed to upload document. Please try again.";

/// A file handed over by the browser
pub trait PickedFile: Clone {
    fn name(&self) -> String;
    /// MIME type as declared by the browser, possibly empty
    fn mime_type(&self) -> String;
}

impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// How a file reached the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

impl FileSource {
    fn rejection(self) -> &'static str {
        match self {
            FileSource::Picker => INVALID_PICK,
            FileSource::Drop => INVALID_DROP,
        }
    }
}

pub fn is_pdf<F: PickedFile>(file: &F) -> bool {
    file.mime_type() == PDF_MIME
}

/// File selection and submission state of the upload page
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    file: Option<F>,
    uploading: bool,
    error: Option<String>,
    drag_active: bool,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            uploading: false,
            error: None,
            drag_active: false,
        }
    }
}

impl<F: PickedFile> UploadForm<F> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(PickedFile::name)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.uploading
    }

    /// Take a file from the picker or a drop.
    ///
    /// Anything that is not a PDF (or no file at all) leaves the form
    /// without a file and sets the source's error message.
    pub fn select(&mut self, file: Option<F>, source: FileSource) {
        if source == FileSource::Drop {
            self.drag_active = false;
        }

        match file.filter(is_pdf) {
            Some(file) => {
                self.file = Some(file);
                self.error = None;
            }
            None => {
                self.file = None;
                self.error = Some(source.rejection().to_string());
            }
        }
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// Start uploading the selected file.
    ///
    /// Returns the file to send, or `None` if there is nothing to send
    /// or an upload is already running.
    pub fn begin_upload(&mut self) -> Option<F> {
        if self.uploading {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE.to_string());
            return None;
        };
        self.uploading = true;
        Some(file)
    }

    /// Finish an upload; on success returns the chat route to open.
    ///
    /// A failed upload keeps the file so the user can retry.
    pub fn finish_upload(&mut self, result: Result<Document, ApiError>) -> Option<String> {
        self.uploading = false;
        match result {
            Ok(document) => Some(routes::document(&document.id)),
            Err(_) => {
                self.error = Some(UPLOAD_FAILED.to_string());
                None
            }
        }
    }
}
