use std::collections::HashMap;

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use bytes::Bytes;

use crate::application::services::ProcessingError;
use crate::domain::UploadedAsset;
use crate::infrastructure::observability::sanitize_prompt;

/// Plain text form fields, gathered from the query string and from either a
/// urlencoded or a multipart body. File parts are skipped.
#[derive(Debug, Default, Clone)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, ProcessingError> {
        self.get(name)
            .ok_or_else(|| ProcessingError::InvalidRequest(format!("Missing form field: {name}")))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    fn extend_urlencoded(&mut self, raw: &[u8]) -> Result<(), ProcessingError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(raw)
            .map_err(|e| ProcessingError::InvalidRequest(format!("Malformed form data: {e}")))?;
        self.0.extend(pairs);
        Ok(())
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ProcessingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut fields = Self::default();

        if let Some(query) = req.uri().query() {
            fields.extend_urlencoded(query.as_bytes())?;
        }

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ProcessingError::InvalidRequest(e.body_text()))?;

            while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                if field.file_name().is_some() {
                    continue;
                }
                let value = field.text().await.map_err(multipart_error)?;
                fields.insert(name, value);
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| ProcessingError::InvalidRequest(e.body_text()))?;
            fields.extend_urlencoded(&body)?;
        }

        Ok(fields)
    }
}

/// A fully buffered multipart upload: file parts plus text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, UploadedAsset>,
    fields: FormFields,
}

impl UploadForm {
    /// Parts named in `file_fields`, or carrying a filename, are kept as files.
    pub async fn read(
        multipart: &mut Multipart,
        file_fields: &[&str],
    ) -> Result<Self, ProcessingError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_none() && !file_fields.contains(&name.as_str()) {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
                continue;
            }

            let filename = field.file_name().unwrap_or("unknown").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(multipart_error)?;

            tracing::debug!(
                field = %name,
                filename = %filename,
                content_type = %content_type,
                bytes = data.len(),
                "File part received"
            );

            form.files
                .insert(name, UploadedAsset::new(filename, content_type, data));
        }

        Ok(form)
    }

    /// Takes the first present file among `names`.
    pub fn take_file(&mut self, names: &[&str]) -> Result<UploadedAsset, ProcessingError> {
        names
            .iter()
            .find_map(|name| self.files.remove(*name))
            .ok_or_else(|| ProcessingError::InvalidRequest("No file uploaded".to_string()))
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}

pub fn multipart_error(err: MultipartError) -> ProcessingError {
    tracing::warn!(error = %err, "Failed to read multipart");
    ProcessingError::InvalidRequest(format!("Failed to read multipart: {}", err.body_text()))
}

pub fn log_instruction(instruction: Option<&str>) {
    if let Some(prompt) = instruction.filter(|p| !p.trim().is_empty()) {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "User instruction received");
    }
}
