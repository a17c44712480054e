use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};

use crate::application::ports::{
    AnswerGenerator, AnswerRequest, DocumentIndexer, GeneratorError, RepositoryError,
    SessionHandle, SessionRepository,
};
use crate::domain::{
    InstructionError, InstructionSelection, InstructionToggle, QuotaExceeded, Session, SessionId,
    Turn, UploadedDocument,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::{IndexingError, IndexingService, PromptComposer};

/// Session bookkeeping around the two external calls: indexing and answering.
pub struct SessionService<I, G>
where
    I: DocumentIndexer,
    G: AnswerGenerator,
{
    repository: Arc<dyn SessionRepository>,
    indexing_service: Arc<IndexingService<I>>,
    answer_generator: Arc<G>,
    prompt_composer: PromptComposer,
    question_limit: u32,
    idle_ttl: Duration,
}

impl<I, G> SessionService<I, G>
where
    I: DocumentIndexer,
    G: AnswerGenerator,
{
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        indexing_service: Arc<IndexingService<I>>,
        answer_generator: Arc<G>,
        prompt_composer: PromptComposer,
        question_limit: u32,
        idle_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            indexing_service,
            answer_generator,
            prompt_composer,
            question_limit,
            idle_ttl,
        }
    }

    pub async fn create_session(&self) -> Result<SessionSnapshot, SessionError> {
        self.evict_idle_sessions().await?;

        let session = Session::new(self.question_limit);
        let handle = self.repository.insert(session).await?;
        let session = handle.lock().await;

        tracing::info!(session_id = %session.id, "Session created");
        Ok(SessionSnapshot::from(&*session))
    }

    pub async fn get_session(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(SessionSnapshot::from(&*session))
    }

    pub async fn delete_session(&self, id: SessionId) -> Result<(), SessionError> {
        let handle = self
            .repository
            .remove(id)
            .await?
            .ok_or(SessionError::NotFound(id))?;

        let mut session = handle.lock().await;
        if let Some(document) = session.detach_document() {
            self.indexing_service.discard(&document).await;
        }

        tracing::info!(session_id = %id, "Session deleted");
        Ok(())
    }

    pub async fn select_instructions(
        &self,
        id: SessionId,
        toggles: Vec<InstructionToggle>,
    ) -> Result<SessionSnapshot, SessionError> {
        let selection = InstructionSelection::new(toggles)?;
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;

        session.select_instructions(selection);
        tracing::debug!(
            session_id = %id,
            active = session.instructions.len(),
            "Custom instructions updated"
        );

        Ok(SessionSnapshot::from(&*session))
    }

    /// Replaces the session's syllabus; the transcript restarts with a greeting.
    pub async fn attach_document(
        &self,
        id: SessionId,
        filename: &str,
        data: Bytes,
    ) -> Result<SessionSnapshot, SessionError> {
        IndexingService::<I>::validate(filename, &data)?;

        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;

        if let Some(previous) = session.detach_document() {
            self.indexing_service.discard(&previous).await;
            session.reset_transcript();
        }

        let document = self.indexing_service.index(filename, data).await?;

        session.reset_transcript();
        session.transcript.push(Turn::assistant(greeting(&document)));
        session.attach_document(document);

        tracing::info!(session_id = %id, filename = %filename, "Syllabus indexed");
        Ok(SessionSnapshot::from(&*session))
    }

    /// Drops the syllabus and the chat; local state is cleared even when the
    /// remote delete fails.
    pub async fn clear_document(&self, id: SessionId) -> Result<ClearOutcome, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;

        let warning = match session.detach_document() {
            Some(document) => self
                .indexing_service
                .discard(&document)
                .await
                .map(|e| {
                    format!(
                        "Could not delete store: {}. You may need to manually delete it later.",
                        e
                    )
                }),
            None => None,
        };

        session.reset_transcript();
        tracing::info!(session_id = %id, "Syllabus and chat cleared");

        Ok(ClearOutcome {
            session: SessionSnapshot::from(&*session),
            warning,
        })
    }

    pub async fn ask(&self, id: SessionId, question: &str) -> Result<ChatTurn, SessionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;

        let remaining_questions = session.record_question(question)?;
        tracing::debug!(
            session_id = %id,
            question = %sanitize_prompt(question),
            remaining = remaining_questions,
            "Question accepted"
        );

        let document = session.document.clone().ok_or(SessionError::NoDocument)?;
        let system_instruction = self.prompt_composer.compose(&session.instructions);

        let answer = self
            .answer_generator
            .generate_answer(AnswerRequest {
                system_instruction: &system_instruction,
                document: &document,
                question,
            })
            .await
            .map_err(SessionError::Generation)?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(SessionError::EmptyAnswer);
        }

        session.record_answer(answer);
        tracing::info!(session_id = %id, remaining = remaining_questions, "Question answered");

        Ok(ChatTurn {
            answer: answer.to_string(),
            remaining_questions,
        })
    }

    /// Drops sessions untouched for longer than the idle TTL and deletes
    /// their remote syllabus files. Returns how many were evicted.
    pub async fn evict_idle_sessions(&self) -> Result<usize, SessionError> {
        let Some(cutoff) = TimeDelta::from_std(self.idle_ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return Ok(0);
        };

        let evicted = self.repository.remove_idle(cutoff).await?;
        for handle in &evicted {
            let mut session = handle.lock().await;
            if let Some(document) = session.detach_document() {
                self.indexing_service.discard(&document).await;
            }
            tracing::debug!(session_id = %session.id, "Idle session evicted");
        }

        if !evicted.is_empty() {
            tracing::info!(evicted = evicted.len(), "Idle sessions evicted");
        }
        Ok(evicted.len())
    }

    async fn handle(&self, id: SessionId) -> Result<SessionHandle, SessionError> {
        self.repository
            .get(id)
            .await?
            .ok_or(SessionError::NotFound(id))
    }
}

fn greeting(document: &UploadedDocument) -> String {
    format!(
        "I have successfully indexed your syllabus file: **{}**. What math concept from this document can I explain to you?",
        document.display_name
    )
}

/// Read-only copy of a session taken under its lock.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub transcript: Vec<Turn>,
    pub remaining_questions: u32,
    pub question_limit: u32,
    pub instructions: Vec<InstructionToggle>,
    pub document: Option<UploadedDocument>,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            transcript: session.transcript.clone(),
            remaining_questions: session.quota.remaining(),
            question_limit: session.quota.limit(),
            instructions: session.instructions.toggles().to_vec(),
            document: session.document.clone(),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClearOutcome {
    pub session: SessionSnapshot,
    pub warning: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub answer: String,
    pub remaining_questions: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
    #[error("Please enter a question.")]
    EmptyQuestion,
    #[error("{0}")]
    QuotaExceeded(#[from] QuotaExceeded),
    #[error("Please upload and index your syllabus first.")]
    NoDocument,
    #[error("{0}")]
    Instructions(#[from] InstructionError),
    #[error("{0}")]
    Indexing(#[from] IndexingError),
    #[error("API call failed: {0}")]
    Generation(GeneratorError),
    #[error("Sorry, I couldn't generate a response based on your syllabus.")]
    EmptyAnswer,
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}
