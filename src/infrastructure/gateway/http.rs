#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart;

use crate::domain::models::AskRequest;
use crate::domain::models::AskResponse;
use crate::domain::models::ErrorResponse;
use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::ModelName;
use crate::domain::models::ProcessResponse;
use crate::domain::models::StagedFile;
use crate::domain::models::ASK_FALLBACK_ERROR;

fn convert_err(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return GatewayError::Decode(err.to_string());
    }

    return GatewayError::Network(err.to_string());
}

/// Talks to the document-chat backend over HTTP. The session lives in a cookie
/// set by the backend, so every request goes through one client with a shared
/// cookie store.
pub struct HttpGateway {
    url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// `timeout_ms` of 0 leaves requests without a timeout.
    pub fn new(url: &str, timeout_ms: u64) -> Result<HttpGateway> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        return Ok(HttpGateway {
            url: url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        });
    }

    async fn files_form(&self, files: &[StagedFile]) -> Result<multipart::Form, GatewayError> {
        let mut form = multipart::Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|err| {
                    return GatewayError::FileRead {
                        name: file.name.to_string(),
                        reason: err.to_string(),
                    };
                })?;

            let part = multipart::Part::bytes(bytes)
                .file_name(file.name.to_string())
                .mime_str(&file.mime_type)
                .map_err(convert_err)?;
            form = form.part("files", part);
        }

        return Ok(form);
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    #[allow(clippy::implicit_return)]
    async fn process_documents(
        &self,
        files: &[StagedFile],
    ) -> Result<ProcessResponse, GatewayError> {
        let url = format!("{url}/api/process", url = self.url);
        tracing::debug!(url = url.as_str(), files = files.len(), "Uploading files");

        let form = self.files_form(files).await?;
        let res = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(convert_err)?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            tracing::error!(status = status, "Failed to process files");
            return Err(GatewayError::Http { status });
        }

        return res.json::<ProcessResponse>().await.map_err(convert_err);
    }

    #[allow(clippy::implicit_return)]
    async fn ask_question(
        &self,
        question: &str,
        model: ModelName,
    ) -> Result<AskResponse, GatewayError> {
        let req = AskRequest {
            question: question.to_string(),
            model,
        };

        let res = self
            .client
            .post(format!("{url}/api/ask", url = self.url))
            .json(&req)
            .send()
            .await
            .map_err(convert_err)?;

        let status = res.status();
        if status.is_success() {
            return res.json::<AskResponse>().await.map_err(convert_err);
        }

        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|payload| return payload.error)
            .filter(|message| return !message.is_empty())
            .unwrap_or_else(|| return ASK_FALLBACK_ERROR.to_string());

        tracing::error!(
            status = status.as_u16(),
            message = message.as_str(),
            "Backend rejected question"
        );
        return Err(GatewayError::Application { message });
    }

    #[allow(clippy::implicit_return)]
    async fn logout(&self) -> Result<(), GatewayError> {
        let res = self
            .client
            .post(format!("{url}/api/logout", url = self.url))
            .send()
            .await
            .map_err(convert_err)?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            tracing::error!(status = status, "Failed to log out");
            return Err(GatewayError::Logout { status });
        }

        return Ok(());
    }
}
