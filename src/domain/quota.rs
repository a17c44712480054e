pub const DEFAULT_QUESTION_LIMIT: u32 = 5;

/// Remaining-question counter for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionQuota {
    limit: u32,
    remaining: u32,
}

impl QuestionQuota {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Takes one question from the budget and returns what is left.
    pub fn try_consume(&mut self) -> Result<u32, QuotaExceeded> {
        if self.is_exhausted() {
            return Err(QuotaExceeded { limit: self.limit });
        }
        self.remaining -= 1;
        Ok(self.remaining)
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }
}

impl Default for QuestionQuota {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_LIMIT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "You have reached the {limit}-message limit for this prototype. Please clear the syllabus and chat to start a new conversation."
)]
pub struct QuotaExceeded {
    pub limit: u32,
}
