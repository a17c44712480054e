use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::{ChatTurn, SessionSnapshot};
use crate::domain::{InstructionToggle, MAX_SELECTED_INSTRUCTIONS, Turn, UploadedDocument};

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub remaining_questions: u32,
    pub question_limit: u32,
    pub instructions: Vec<InstructionOption>,
    pub document: Option<DocumentResponse>,
    pub transcript: Vec<TurnResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.id.to_string(),
            remaining_questions: snapshot.remaining_questions,
            question_limit: snapshot.question_limit,
            instructions: snapshot
                .instructions
                .into_iter()
                .map(InstructionOption::from)
                .collect(),
            document: snapshot.document.map(DocumentResponse::from),
            transcript: snapshot.transcript.into_iter().map(TurnResponse::from).collect(),
            created_at: snapshot.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub role: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Turn> for TurnResponse {
    fn from(turn: Turn) -> Self {
        Self {
            role: turn.role.to_string(),
            text: turn.text,
            created_at: turn.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub handle: String,
    pub filename: String,
    pub mime_type: String,
}

impl From<UploadedDocument> for DocumentResponse {
    fn from(document: UploadedDocument) -> Self {
        Self {
            handle: document.handle,
            filename: document.display_name,
            mime_type: document.mime_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructionOption {
    pub key: &'static str,
    pub label: &'static str,
    pub fragment: &'static str,
}

impl From<InstructionToggle> for InstructionOption {
    fn from(toggle: InstructionToggle) -> Self {
        Self {
            key: toggle.key(),
            label: toggle.label(),
            fragment: toggle.fragment(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructionCatalogResponse {
    pub max_selected: usize,
    pub options: Vec<InstructionOption>,
}

impl InstructionCatalogResponse {
    pub fn all() -> Self {
        Self {
            max_selected: MAX_SELECTED_INSTRUCTIONS,
            options: InstructionToggle::ALL
                .into_iter()
                .map(InstructionOption::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectInstructionsRequest {
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub remaining_questions: u32,
}

impl From<ChatTurn> for AskResponse {
    fn from(turn: ChatTurn) -> Self {
        Self {
            answer: turn.answer,
            remaining_questions: turn.remaining_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    #[serde(flatten)]
    pub session: SessionResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
