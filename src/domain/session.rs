use super::{
    InstructionSelection, QuestionQuota, QuotaExceeded, SessionId, Turn, UploadedDocument,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub transcript: Vec<Turn>,
    pub quota: QuestionQuota,
    pub instructions: InstructionSelection,
    pub document: Option<UploadedDocument>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(question_limit: u32) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            transcript: Vec::new(),
            quota: QuestionQuota::new(question_limit),
            instructions: InstructionSelection::default(),
            document: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Charges the quota and records the question as a user turn.
    pub fn record_question(&mut self, question: &str) -> Result<u32, QuotaExceeded> {
        let remaining = self.quota.try_consume()?;
        self.transcript.push(Turn::user(question));
        self.touch();
        Ok(remaining)
    }

    pub fn record_answer(&mut self, answer: &str) {
        self.transcript.push(Turn::assistant(answer));
        self.touch();
    }

    /// Empties the transcript; the quota follows the transcript.
    pub fn reset_transcript(&mut self) {
        self.transcript.clear();
        self.quota.reset();
        self.touch();
    }

    pub fn attach_document(&mut self, document: UploadedDocument) {
        self.document = Some(document);
        self.touch();
    }

    pub fn detach_document(&mut self) -> Option<UploadedDocument> {
        let previous = self.document.take();
        self.touch();
        previous
    }

    pub fn select_instructions(&mut self, selection: InstructionSelection) {
        self.instructions = selection;
        self.touch();
    }

    pub fn questions_asked(&self) -> usize {
        self.transcript
            .iter()
            .filter(|t| t.role == super::TurnRole::User)
            .count()
    }

    /// True when nothing has changed since `cutoff`.
    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.updated_at <= cutoff
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
