#![allow(dead_code)]

use async_trait::async_trait;
use medscan_analyzer::{
    diagnosis::{DiagnosisRequest, UploadFormat, UploadedImage},
    provider::InferenceProvider,
    Error, Result,
};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "medscan-test-boundary";

/// Provider double that replays a fixed outcome and records every request.
pub struct MockProvider {
    reply: MockReply,
    pub requests: Arc<Mutex<Vec<DiagnosisRequest>>>,
}

#[derive(Clone)]
enum MockReply {
    Text(Option<String>),
    Auth(String),
    Blocked(String),
}

impl MockProvider {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(MockReply::Text(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with_reply(MockReply::Text(None))
    }

    pub fn failing_auth(message: &str) -> Self {
        Self::with_reply(MockReply::Auth(message.to_string()))
    }

    pub fn blocked(reason: &str) -> Self {
        Self::with_reply(MockReply::Blocked(reason.to_string()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<DiagnosisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    async fn generate(&self, request: &DiagnosisRequest) -> Result<Option<String>> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Auth(message) => Err(Error::provider(401, message.clone())),
            MockReply::Blocked(reason) => Err(Error::Blocked(reason.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

pub fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    bytes
}

pub fn knee_scan() -> UploadedImage {
    UploadedImage::new("knee.png", UploadFormat::Png, blank_png(10, 10))
}

/// One part of a `multipart/form-data` body.
pub enum FormPart<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
