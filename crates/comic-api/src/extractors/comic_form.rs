//! Comic payload extractor
//!
//! Comic create/update endpoints accept either a JSON body or a
//! `multipart/form-data` body carrying the same fields plus an optional
//! `image` file part. Both shapes funnel into the same validated
//! `ComicPayload`.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};
use validator::Validate;

use comic_service::{ComicPayload, ImageUpload};

use crate::response::ApiError;

use super::validated::ValidatedJson;

/// Extracted comic payload plus an optional uploaded cover image
#[derive(Debug)]
pub struct ComicForm {
    pub payload: ComicPayload,
    pub image: Option<ImageUpload>,
}

#[async_trait]
impl<S> FromRequest<S> for ComicForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let ValidatedJson(payload) = ValidatedJson::from_request(req, state).await?;
            return Ok(Self {
                payload,
                image: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        let mut fields = Map::new();
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?
        {
            let Some(name) = field.name().map(String::from) else {
                continue;
            };

            if name == "image" {
                let extension = field
                    .file_name()
                    .and_then(|f| f.rsplit_once('.').map(|(_, ext)| ext.to_string()))
                    .unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.to_string()))?;

                image = Some(ImageUpload {
                    bytes: bytes.to_vec(),
                    extension,
                });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.to_string()))?;
                fields.insert(name.clone(), coerce_field(&name, text)?);
            }
        }

        let payload: ComicPayload = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;
        payload.validate()?;

        if let Some(upload) = &image {
            upload.validate().map_err(ApiError::App)?;
        }

        Ok(Self { payload, image })
    }
}

/// Multipart text fields arrive untyped; give the non-string ones the JSON
/// type `ComicPayload` deserializes from. Price stays a string since its
/// deserializer accepts both shapes.
fn coerce_field(name: &str, text: String) -> Result<Value, ApiError> {
    match name {
        "category_id" => text
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| ApiError::invalid_body("category_id must be an integer")),
        "featured" => match text.as_str() {
            "1" | "true" => Ok(Value::Bool(true)),
            "0" | "false" => Ok(Value::Bool(false)),
            _ => Err(ApiError::invalid_body("featured must be a boolean")),
        },
        _ => Ok(Value::String(text)),
    }
}
