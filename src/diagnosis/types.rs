use super::prompt;
use crate::{Error, Result};
use std::io::Cursor;
use std::path::Path;

pub const PNG_MIME_TYPE: &str = "image/png";

/// Raster formats the upload form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Jpeg,
    Png,
}

impl UploadFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    /// The file extension decides; the declared content type is only consulted
    /// when the name has no extension.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        let ext = file_name.and_then(|name| Path::new(name).extension()?.to_str());
        match ext {
            Some(ext) => Self::from_extension(ext),
            None => content_type.and_then(Self::from_mime_type),
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub format: UploadFormat,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, format: UploadFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// Decodes the upload and re-encodes it as PNG, entirely in memory.
    pub fn png_from(upload: &UploadedImage) -> Result<Self> {
        // Browsers sometimes mislabel files, so fall back to sniffing the bytes.
        let img = image::load_from_memory_with_format(&upload.bytes, upload.format.image_format())
            .or_else(|_| image::load_from_memory(&upload.bytes))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)?;

        Ok(Self {
            mime_type: PNG_MIME_TYPE,
            bytes,
        })
    }
}

/// Everything the provider receives for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisRequest {
    pub system_instruction: &'static str,
    pub instruction: &'static str,
    pub image: EncodedImage,
    pub symptoms: String,
}

impl DiagnosisRequest {
    pub fn build(upload: &UploadedImage, symptoms: &str) -> Result<Self> {
        Ok(Self {
            system_instruction: prompt::SYSTEM_INSTRUCTION,
            instruction: prompt::INSTRUCTION,
            image: EncodedImage::png_from(upload)?,
            symptoms: prompt::symptoms_part(symptoms),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisResult {
    Success(String),
    EmptyResponse,
    Failure(String),
}

impl DiagnosisResult {
    pub const EMPTY_MESSAGE: &'static str = "AI couldn't generate a response. Please try again.";

    pub fn from_fault(err: &Error) -> Self {
        Self::Failure(err.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text shown to the user: the report verbatim, or an error description.
    pub fn message(&self) -> String {
        match self {
            Self::Success(text) => text.clone(),
            Self::EmptyResponse => Self::EMPTY_MESSAGE.to_string(),
            Self::Failure(fault) => format!("Error: {}", fault),
        }
    }
}
