use std::sync::Arc;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::application::services::SessionService;
use crate::presentation::config::{ScaffoldConfig, Settings};

pub struct AppState<I, G>
where
    I: DocumentIndexer,
    G: AnswerGenerator,
{
    pub session_service: Arc<SessionService<I, G>>,
    pub settings: Settings,
    pub scaffold_config: ScaffoldConfig,
}

impl<I, G> Clone for AppState<I, G>
where
    I: DocumentIndexer,
    G: AnswerGenerator,
{
    fn clone(&self) -> Self {
        Self {
            session_service: Arc::clone(&self.session_service),
            settings: self.settings.clone(),
            scaffold_config: self.scaffold_config.clone(),
        }
    }
}
