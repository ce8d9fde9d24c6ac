use super::types::{AnalysisResponse, ErrorResponse};
use crate::{
    diagnosis::{Diagnoser, DiagnosisResult, UploadFormat, UploadedImage},
    Error, Result,
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};

pub const IMAGE_FIELD: &str = "image";
pub const SYMPTOMS_FIELD: &str = "symptoms";

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Clone)]
pub struct AppState {
    pub diagnoser: Arc<Diagnoser>,
}

type Rejection = (StatusCode, Json<ErrorResponse>);

/// Form contents of one submission, before validation.
#[derive(Debug, Default)]
pub struct Submission {
    pub image: Option<UploadedImage>,
    pub symptoms: String,
}

impl Submission {
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(IMAGE_FIELD) => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;

                    // An untouched file input still posts an empty part.
                    if bytes.is_empty() {
                        continue;
                    }

                    let format = UploadFormat::detect(file_name.as_deref(), content_type.as_deref())
                        .ok_or_else(|| Error::UnsupportedFormat {
                            file_name: file_name.clone().unwrap_or_default(),
                        })?;

                    submission.image = Some(UploadedImage::new(
                        file_name.unwrap_or_else(|| "upload".to_string()),
                        format,
                        bytes.to_vec(),
                    ));
                }
                Some(SYMPTOMS_FIELD) => submission.symptoms = field.text().await?,
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Hands back the validated image; a submission without one never reaches the provider.
    pub fn into_parts(self) -> Result<(UploadedImage, String)> {
        let image = self.image.ok_or(Error::MissingImage)?;
        Ok((image, self.symptoms))
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> std::result::Result<Json<AnalysisResponse>, Rejection> {
    let start = Instant::now();

    let (image, symptoms) = Submission::read(multipart)
        .await
        .and_then(Submission::into_parts)
        .map_err(reject)?;

    info!(
        "Analyzing '{}' ({} bytes, symptoms provided: {})",
        image.file_name,
        image.bytes.len(),
        !symptoms.trim().is_empty()
    );

    let result = state.diagnoser.analyze(&image, &symptoms).await;
    let elapsed = start.elapsed().as_millis();

    match result {
        DiagnosisResult::Success(diagnosis) => {
            info!("Diagnosis for '{}' generated in {}ms", image.file_name, elapsed);
            Ok(Json(AnalysisResponse {
                diagnosis,
                model: state.diagnoser.model().to_string(),
                processing_time_ms: elapsed,
            }))
        }
        other => {
            error!(
                "Analysis of '{}' failed after {}ms: {}",
                image.file_name,
                elapsed,
                other.message()
            );
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: other.message(),
                }),
            ))
        }
    }
}

fn reject(err: Error) -> Rejection {
    let status = match &err {
        Error::Multipart(e) => e.status(),
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!("Rejected submission ({}): {}", status, err);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
