//! Upload validation: at most 3 MiB, and a text, PDF, Word or PowerPoint
//! document recognised by MIME type or by file extension.

use api::UploadPayload;

use super::ValidationError;

pub const MAX_UPLOAD_BYTES: u64 = 3 * 1024 * 1024;

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = ".txt,.pdf,.docx,.pptx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Docx,
    Pptx,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [Self::Text, Self::Pdf, Self::Docx, Self::Pptx];

    pub fn mime(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime().eq_ignore_ascii_case(essence))
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }
}

/// Check a candidate before its contents are read.
pub fn validate(name: &str, size: u64, mime: Option<&str>) -> Result<DocumentKind, ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::SizeExceeded { size });
    }

    mime.and_then(DocumentKind::from_mime)
        .or_else(|| DocumentKind::from_file_name(name))
        .ok_or_else(|| ValidationError::UnsupportedType {
            name: name.to_string(),
        })
}

/// A document that passed validation, with its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        name: impl Into<String>,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let kind = validate(&name, bytes.len() as u64, mime)?;
        Ok(Self { name, kind, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn to_payload(&self) -> UploadPayload {
        UploadPayload {
            file_name: self.name.clone(),
            mime: self.kind.mime().to_string(),
            bytes: self.bytes.clone(),
        }
    }
}
