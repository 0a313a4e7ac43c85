//! Multipart food post upload
//!
//! Collects the `name` and `description` text fields and the `video` file
//! part. Unknown parts are skipped. A missing video is left empty for the
//! food service to reject.

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::StatusCode,
};
use reelmate_service::{dto::CreateFoodPostRequest, NewFoodPost};

use crate::response::ApiError;

/// Form field carrying the video bytes
pub const VIDEO_FIELD: &str = "video";

/// A parsed `multipart/form-data` food post
#[derive(Debug)]
pub struct FoodPostForm(pub NewFoodPost);

#[async_trait]
impl<S> FromRequest<S> for FoodPostForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut fields = CreateFoodPostRequest::default();
        let mut video = Vec::new();
        let mut original_file_name = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(field_error)?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "name" => fields.name = read_text(field).await?,
                "description" => fields.description = read_text(field).await?,
                VIDEO_FIELD => {
                    original_file_name = field.file_name().map(str::to_owned);
                    video = field
                        .bytes()
                        .await
                        .map_err(field_error)?
                        .to_vec();
                }
                _ => {}
            }
        }

        Ok(FoodPostForm(NewFoodPost {
            fields,
            video,
            original_file_name,
        }))
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(field_error)
}

/// Bodies cut off by the upload size limit are 413, anything else is malformed
fn field_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::invalid_body(e.body_text())
    }
}
