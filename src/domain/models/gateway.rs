use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use thiserror::Error;

use super::ModelName;
use super::StagedFile;

/// Shown when the backend rejects a question without saying why.
pub const ASK_FALLBACK_ERROR: &str = "An error occurred while processing your question";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend could not be reached at all.
    #[error("Unable to reach the backend: {0}")]
    Network(String),
    #[error("Request to the backend timed out: {0}")]
    Timeout(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// The backend rejected a question, `message` is shown to the user as is.
    #[error("{message}")]
    Application { message: String },
    #[error("Logout failed with status {status}")]
    Logout { status: u16 },
    #[error("Unexpected response from the backend: {0}")]
    Decode(String),
    #[error("Failed to read {name}: {reason}")]
    FileRead { name: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub model: ModelName,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

#[async_trait]
pub trait Gateway {
    /// Uploads every staged file in a single multipart request under the
    /// shared `files` field. The backend indexes them into the session bound
    /// to the client's cookie.
    async fn process_documents(
        &self,
        files: &[StagedFile],
    ) -> Result<ProcessResponse, GatewayError>;

    /// Asks a question about the documents processed so far.
    async fn ask_question(
        &self,
        question: &str,
        model: ModelName,
    ) -> Result<AskResponse, GatewayError>;

    /// Invalidates the server-side session.
    async fn logout(&self) -> Result<(), GatewayError>;
}
