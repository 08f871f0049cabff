use crate::config::config::GatewayConfig;
use crate::config::credentials::CredentialSource;
use crate::error::Result;
use crate::gateway::{CompletionGateway, create_gateway};
use crate::observability::AppMetrics;
use crate::services::generation::{GenerationSettings, StructuredGenerator};
use crate::services::mindmap::{MindMapService, create_mindmap_service};
use crate::services::study::{StudyService, create_study_service};
use std::sync::Arc;

/// Application state shared by the generation handlers
#[derive(Clone)]
pub struct AppState {
    /// Mind map generation
    pub mindmap_service: Arc<dyn MindMapService>,
    /// Summaries, flashcards, quizzes and explanations
    pub study_service: Arc<dyn StudyService>,
    /// Request counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("mindmap_service", &"Arc<dyn MindMapService>")
            .field("study_service", &"Arc<dyn StudyService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        mindmap_service: Box<dyn MindMapService>,
        study_service: Box<dyn StudyService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            mindmap_service: Arc::from(mindmap_service),
            study_service: Arc::from(study_service),
            metrics,
        }
    }

    /// Wire both services onto one gateway and credential source
    pub fn with_gateway(
        gateway: Arc<dyn CompletionGateway>,
        credentials: Arc<dyn CredentialSource>,
        settings: GenerationSettings,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let generator = Arc::new(StructuredGenerator::new(gateway, credentials, settings));

        Self::new(
            create_mindmap_service(generator.clone()),
            create_study_service(generator),
            metrics,
        )
    }

    /// Build state with the HTTP gateway described by `config`
    pub fn from_config(
        config: &GatewayConfig,
        credentials: Arc<dyn CredentialSource>,
        metrics: Arc<AppMetrics>,
    ) -> Result<Self> {
        let gateway: Arc<dyn CompletionGateway> = Arc::from(create_gateway(config)?);
        Ok(Self::with_gateway(
            gateway,
            credentials,
            GenerationSettings::from(config),
            metrics,
        ))
    }
}
