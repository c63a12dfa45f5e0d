use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::TextGenerator;
use crate::domain::{ContentSource, Tutorial, TutorialId, TutorialRequest};
use crate::infrastructure::text_processing::{
    build_metrics, categorize_topic, extract_concepts, extract_objectives, extract_packages,
};

use super::{build_prompt, render_local_tutorial};

/// Orchestrates tutorial generation across an ordered list of text providers
/// with a deterministic local fallback.
///
/// Never fails: provider errors advance the chain, and the local template
/// renders when the chain is exhausted or empty.
pub struct GenerationService {
    providers: Vec<Arc<dyn TextGenerator>>,
}

impl GenerationService {
    pub fn new(providers: Vec<Arc<dyn TextGenerator>>) -> Self {
        Self { providers }
    }

    pub fn provider_ids(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.id().to_string()).collect()
    }

    pub async fn generate(&self, request: &TutorialRequest) -> Tutorial {
        let prompt = build_prompt(request);

        for provider in &self.providers {
            match provider.generate(&prompt).await {
                Ok(content) => {
                    tracing::info!(
                        provider = provider.id(),
                        topic = request.topic(),
                        "Tutorial content generated"
                    );
                    return self.assemble(
                        request,
                        content,
                        ContentSource::Provider(provider.id().to_string()),
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        provider = provider.id(),
                        %error,
                        "Text provider failed, advancing fallback chain"
                    );
                }
            }
        }

        tracing::warn!(
            topic = request.topic(),
            "All text providers exhausted, rendering local tutorial"
        );
        let content = render_local_tutorial(request);
        self.assemble(request, content, ContentSource::LocalFallback)
    }

    fn assemble(
        &self,
        request: &TutorialRequest,
        content: String,
        source: ContentSource,
    ) -> Tutorial {
        Tutorial {
            id: TutorialId::new(),
            topic: request.topic().to_string(),
            expertise: request.expertise(),
            duration_minutes: request.duration_minutes(),
            concepts: extract_concepts(&content, request.topic()),
            packages: extract_packages(&content),
            objectives: extract_objectives(request.topic(), request.expertise()),
            topic_category: categorize_topic(request.topic()),
            metrics: build_metrics(&content, request.expertise()),
            content,
            source,
            created_at: Utc::now(),
        }
    }
}
