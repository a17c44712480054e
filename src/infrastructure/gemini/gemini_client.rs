use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AnswerGenerator, AnswerRequest, DocumentIndexer, GeneratorError, IndexerError,
};
use crate::domain::{DocumentState, UploadedDocument};
use crate::presentation::config::GeminiSettings;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.0-flash-lite";

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

/// Gemini Generative Language API: file service plus `generateContent`.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct StartUploadRequest<'a> {
    file: FileMetadata<'a>,
}

#[derive(Serialize)]
struct FileMetadata<'a> {
    display_name: &'a str,
}

#[derive(Deserialize)]
struct UploadResponse {
    file: RemoteFile,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteFile {
    name: String,
    #[serde(default)]
    uri: String,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_data: Option<FileData<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileData<'a> {
    mime_type: &'a str,
    file_uri: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
        }
    }

    pub fn from_settings(settings: &GeminiSettings) -> Self {
        Self::new(
            settings.api_key.clone(),
            Some(settings.base_url.clone()),
            Some(settings.chat_model.clone()),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn files_url(&self, handle: &str) -> String {
        format!("{}/v1beta/{}", self.base_url, handle)
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn start_upload(
        &self,
        display_name: &str,
        mime_type: &str,
        content_length: usize,
    ) -> Result<String, IndexerError> {
        let response = self
            .client
            .post(format!("{}/upload/v1beta/files", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header(
                "X-Goog-Upload-Header-Content-Length",
                content_length.to_string(),
            )
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&StartUploadRequest {
                file: FileMetadata { display_name },
            })
            .send()
            .await
            .map_err(|e| IndexerError::ApiRequestFailed(without_url(e)))?;

        let response = check_indexer_status(response, "files").await?;

        response
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .ok_or_else(|| IndexerError::InvalidResponse("missing upload url".to_string()))
    }
}

#[async_trait]
impl DocumentIndexer for GeminiClient {
    async fn upload_document(
        &self,
        display_name: &str,
        mime_type: &str,
        data: Bytes,
    ) -> Result<UploadedDocument, IndexerError> {
        let upload_url = self
            .start_upload(display_name, mime_type, data.len())
            .await?;

        let response = self
            .client
            .post(upload_url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(data)
            .send()
            .await
            .map_err(|e| IndexerError::ApiRequestFailed(without_url(e)))?;

        let upload: UploadResponse = check_indexer_status(response, "files")
            .await?
            .json()
            .await
            .map_err(|e| IndexerError::InvalidResponse(without_url(e)))?;

        let file = upload.file;
        Ok(UploadedDocument::new(
            file.name,
            file.uri,
            file.mime_type.unwrap_or_else(|| mime_type.to_string()),
            file.display_name.unwrap_or_else(|| display_name.to_string()),
        ))
    }

    async fn document_state(&self, handle: &str) -> Result<DocumentState, IndexerError> {
        let response = self
            .client
            .get(self.files_url(handle))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| IndexerError::ApiRequestFailed(without_url(e)))?;

        let file: RemoteFile = check_indexer_status(response, handle)
            .await?
            .json()
            .await
            .map_err(|e| IndexerError::InvalidResponse(without_url(e)))?;

        match file.state {
            Some(state) => state.parse().map_err(IndexerError::InvalidResponse),
            None => Ok(DocumentState::Unspecified),
        }
    }

    async fn delete_document(&self, handle: &str) -> Result<(), IndexerError> {
        let response = self
            .client
            .delete(self.files_url(handle))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| IndexerError::ApiRequestFailed(without_url(e)))?;

        check_indexer_status(response, handle).await?;
        Ok(())
    }
}

#[async_trait]
impl AnswerGenerator for GeminiClient {
    async fn generate_answer(&self, request: AnswerRequest<'_>) -> Result<String, GeneratorError> {
        let request_body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(request.system_instruction),
                    file_data: None,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![
                    Part {
                        text: None,
                        file_data: Some(FileData {
                            mime_type: &request.document.mime_type,
                            file_uri: &request.document.uri,
                        }),
                    },
                    Part {
                        text: Some(request.question),
                        file_data: None,
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeneratorError::ApiRequestFailed(without_url(e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeneratorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(without_url(e)))?;

        if generated.candidates.is_empty() {
            if let Some(reason) = generated.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(GeneratorError::InvalidResponse(format!(
                    "prompt blocked: {}",
                    reason
                )));
            }
        }

        Ok(generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

/// Request URLs may carry the resumable upload id; keep them out of messages
/// that reach students and logs.
fn without_url(error: reqwest::Error) -> String {
    error.without_url().to_string()
}

async fn check_indexer_status(response: Response, target: &str) -> Result<Response, IndexerError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::TOO_MANY_REQUESTS => Err(IndexerError::RateLimited),
        StatusCode::NOT_FOUND => Err(IndexerError::NotFound(target.to_string())),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(IndexerError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )))
        }
    }
}
