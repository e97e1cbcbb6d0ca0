use std::fs;
use std::io;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use thiserror::Error;

use crate::{ApiError, BackendClient, FailureKind, ResumeRecord};

pub const PDF_MIME: &str = "application/pdf";
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Client-side reasons to refuse an upload. Display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select a PDF resume first!")]
    NoFile,
    #[error("Only PDF files are allowed!")]
    NotPdf { mime_type: String },
    #[error("File size should be under 5 MB!")]
    TooLarge { size: u64 },
}

/// A resume picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Reads a file from disk, deriving the MIME type from its extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let mime_type = if is_pdf { PDF_MIME } else { "application/octet-stream" };
        Ok(Self {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Checks type first, then size. Returns the file when it may be sent.
pub fn validate_resume(file: Option<&ResumeFile>) -> Result<&ResumeFile, UploadRejection> {
    let file = file.ok_or(UploadRejection::NoFile)?;
    if file.mime_type != PDF_MIME {
        return Err(UploadRejection::NotPdf {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size() > MAX_RESUME_BYTES {
        return Err(UploadRejection::TooLarge { size: file.size() });
    }
    Ok(file)
}

#[async_trait::async_trait]
pub trait ResumeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ResumeRecord>, ApiError>;
    /// Validates locally and only then uploads.
    async fn upload(&self, file: Option<&ResumeFile>) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct ResumeList {
    #[serde(default)]
    resumes: Option<Vec<ResumeRecord>>,
}

#[derive(Deserialize)]
struct Uploaded {}

#[async_trait::async_trait]
impl ResumeStore for BackendClient {
    async fn list(&self) -> Result<Vec<ResumeRecord>, ApiError> {
        let url = self.endpoint(&["api", "v1", "resume"], None)?;
        let list: ResumeList = self.send(self.request(Method::GET, url)).await?;
        Ok(list.resumes.unwrap_or_default())
    }

    async fn upload(&self, file: Option<&ResumeFile>) -> Result<(), ApiError> {
        let file = validate_resume(file)?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(PDF_MIME)
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.endpoint(&["api", "v1", "resume", "upload"], None)?;
        let Uploaded {} = self
            .send(self.request(Method::POST, url).multipart(form))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime_type: &str, size: usize) -> ResumeFile {
        ResumeFile {
            file_name: "cv.pdf".to_string(),
            mime_type: mime_type.to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn accepts_pdf_up_to_the_limit() {
        let resume = file(PDF_MIME, 5 * 1024 * 1024);
        assert_eq!(validate_resume(Some(&resume)), Ok(&resume));
    }

    #[test]
    fn rejects_pdf_over_the_limit() {
        let err = validate_resume(Some(&file(PDF_MIME, 6 * 1024 * 1024))).unwrap_err();
        assert_eq!(err.to_string(), "File size should be under 5 MB!");
    }

    #[test]
    fn type_is_checked_before_size() {
        let err = validate_resume(Some(&file("image/png", 6 * 1024 * 1024))).unwrap_err();
        assert_eq!(err.to_string(), "Only PDF files are allowed!");
    }

    #[test]
    fn missing_file_is_rejected() {
        assert_eq!(validate_resume(None), Err(UploadRejection::NoFile));
    }
}
