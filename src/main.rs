use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use syllabus_tutor::application::ports::{
    AnswerGenerator, DocumentIndexer, SessionRepository,
};
use syllabus_tutor::application::services::{IndexingService, PromptComposer, SessionService};
use syllabus_tutor::infrastructure::gemini::{
    GeminiClient, MockAnswerGenerator, MockDocumentIndexer,
};
use syllabus_tutor::infrastructure::observability::{TracingConfig, init_tracing};
use syllabus_tutor::infrastructure::persistence::InMemorySessionRepository;
use syllabus_tutor::presentation::config::API_KEY_VAR;
use syllabus_tutor::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    )
    .context("Failed to install tracing subscriber")?;

    let scaffold_config = ScaffoldConfig::default();

    if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled: Gemini calls are served by in-process mocks");
        let indexer = Arc::new(MockDocumentIndexer::new());
        let generator = Arc::new(MockAnswerGenerator::with_delay(
            scaffold_config.response_delay(),
        ));
        serve(settings, scaffold_config, indexer, generator).await
    } else {
        anyhow::ensure!(
            !settings.gemini.api_key.trim().is_empty(),
            "{} not found. Please configure it in the environment or .env file.",
            API_KEY_VAR
        );
        let client = Arc::new(GeminiClient::from_settings(&settings.gemini));
        tracing::info!(model = %client.model(), "Gemini client configured");
        serve(settings, scaffold_config, Arc::clone(&client), client).await
    }
}

async fn serve<I, G>(
    settings: Settings,
    scaffold_config: ScaffoldConfig,
    indexer: Arc<I>,
    generator: Arc<G>,
) -> anyhow::Result<()>
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let repository: Arc<dyn SessionRepository> =
        Arc::new(InMemorySessionRepository::new(settings.session.max_sessions));

    let indexing_service = Arc::new(IndexingService::new(
        indexer,
        settings.gemini.poll_interval(),
    ));

    let session_service = Arc::new(SessionService::new(
        repository,
        indexing_service,
        generator,
        PromptComposer::new(&settings.session.tutor_name),
        settings.session.question_limit,
        settings.session.idle_ttl(),
    ));

    tokio::spawn(sweep_idle_sessions(
        Arc::clone(&session_service),
        settings.session.sweep_interval(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        session_service,
        settings,
        scaffold_config,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn sweep_idle_sessions<I, G>(session_service: Arc<SessionService<I, G>>, every: Duration)
where
    I: DocumentIndexer,
    G: AnswerGenerator,
{
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if let Err(e) = session_service.evict_idle_sessions().await {
            tracing::warn!(error = %e, "Idle session sweep failed");
        }
    }
}
