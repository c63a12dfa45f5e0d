use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, TutorialRepository};
use crate::domain::{Tutorial, TutorialId};

/// Map-backed repository used when no database is configured, and by tests.
#[derive(Default)]
pub struct InMemoryTutorialRepository {
    tutorials: Mutex<HashMap<TutorialId, Tutorial>>,
}

impl InMemoryTutorialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TutorialRepository for InMemoryTutorialRepository {
    async fn save(&self, tutorial: &Tutorial) -> Result<(), RepositoryError> {
        let mut guard = self
            .tutorials
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".into()))?;
        guard.insert(tutorial.id, tutorial.clone());
        Ok(())
    }

    async fn get(&self, id: TutorialId) -> Result<Option<Tutorial>, RepositoryError> {
        let guard = self
            .tutorials
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".into()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Tutorial>, RepositoryError> {
        let guard = self
            .tutorials
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".into()))?;
        let mut all: Vec<Tutorial> = guard.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit as usize);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{ContentMetrics, ContentSource, Expertise};

    fn sample(topic: &str, age_minutes: i64) -> Tutorial {
        Tutorial {
            id: TutorialId::new(),
            topic: topic.to_string(),
            expertise: Expertise::Beginner,
            duration_minutes: 5,
            content: format!("# {topic}\n\nBody."),
            concepts: vec!["vectors".into()],
            packages: BTreeSet::new(),
            objectives: vec![format!("Understand {topic}")],
            topic_category: "general".into(),
            source: ContentSource::LocalFallback,
            metrics: ContentMetrics {
                word_count: 3,
                char_count: 20,
                estimated_difficulty: 3,
                estimated_reading_minutes: 1,
            },
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn given_saved_tutorial_when_fetched_by_id_then_it_is_returned() {
        let repo = InMemoryTutorialRepository::new();
        let tutorial = sample("Vectors", 0);
        repo.save(&tutorial).await.unwrap();

        let fetched = repo.get(tutorial.id).await.unwrap();
        assert_eq!(fetched, Some(tutorial));
    }

    #[tokio::test]
    async fn given_unknown_id_when_fetched_then_none_is_returned() {
        let repo = InMemoryTutorialRepository::new();
        let fetched = repo.get(TutorialId::new()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn given_resaved_id_when_fetched_then_latest_version_wins() {
        let repo = InMemoryTutorialRepository::new();
        let mut tutorial = sample("Vectors", 0);
        repo.save(&tutorial).await.unwrap();

        tutorial.content = "# Vectors\n\nRevised.".into();
        repo.save(&tutorial).await.unwrap();

        let fetched = repo.get(tutorial.id).await.unwrap().unwrap();
        assert_eq!(fetched.content, "# Vectors\n\nRevised.");
    }

    #[tokio::test]
    async fn given_many_tutorials_when_listing_recent_then_newest_first_and_limited() {
        let repo = InMemoryTutorialRepository::new();
        repo.save(&sample("Oldest", 30)).await.unwrap();
        repo.save(&sample("Newest", 0)).await.unwrap();
        repo.save(&sample("Middle", 10)).await.unwrap();

        let recent = repo.list_recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].topic, "Newest");
        assert_eq!(recent[1].topic, "Middle");
    }
}
