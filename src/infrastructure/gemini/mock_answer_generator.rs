use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AnswerGenerator, AnswerRequest, GeneratorError};

/// Canned answers for scaffold mode and tests.
pub struct MockAnswerGenerator {
    delay: Duration,
    last_system_instruction: Mutex<Option<String>>,
}

impl MockAnswerGenerator {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            last_system_instruction: Mutex::new(None),
        }
    }

    pub fn last_system_instruction(&self) -> Option<String> {
        self.last_system_instruction
            .lock()
            .ok()
            .and_then(|s| s.clone())
    }
}

impl Default for MockAnswerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerGenerator for MockAnswerGenerator {
    async fn generate_answer(&self, request: AnswerRequest<'_>) -> Result<String, GeneratorError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Ok(mut last) = self.last_system_instruction.lock() {
            *last = Some(request.system_instruction.to_string());
        }

        Ok(format!(
            "## Explanation\n\nScaffold answer to \"{}\" based on {}.",
            request.question, request.document.display_name
        ))
    }
}
