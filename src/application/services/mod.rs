mod indexing_service;
mod prompt_composer;
mod session_service;

pub use indexing_service::{IndexingError, IndexingService};
pub use prompt_composer::{DEFAULT_TUTOR_NAME, PromptComposer, compose_system_instruction};
pub use session_service::{
    ChatTurn, ClearOutcome, SessionError, SessionService, SessionSnapshot,
};
