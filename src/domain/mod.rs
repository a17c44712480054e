mod document_state;
mod instruction_selection;
mod instruction_toggle;
mod quota;
mod session;
mod session_id;
mod turn;
mod turn_role;
mod uploaded_document;

pub use document_state::DocumentState;
pub use instruction_selection::{InstructionError, InstructionSelection};
pub use instruction_toggle::{InstructionToggle, MAX_SELECTED_INSTRUCTIONS};
pub use quota::{DEFAULT_QUESTION_LIMIT, QuestionQuota, QuotaExceeded};
pub use session::Session;
pub use session_id::SessionId;
pub use turn::Turn;
pub use turn_role::TurnRole;
pub use uploaded_document::{SupportedFormat, UploadedDocument};
