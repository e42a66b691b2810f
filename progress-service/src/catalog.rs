use std::time::Duration;

use schema::{Course, Quiz};
use tracing::debug;

use crate::seed;

/// Simulated catalog fetch latency, matching the upstream data source.
const FETCH_DELAY: Duration = Duration::from_millis(1000);

/// Read-only course catalog. Starts in a loading state; `load` installs
/// the course list after the fixed fetch delay. No mutation operations.
#[derive(Debug, Default)]
pub struct CatalogStore {
    courses: Vec<Course>,
    quizzes: Vec<Quiz>,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the seeded data already installed, for callers that
    /// cannot await.
    pub fn preloaded() -> Self {
        let mut store = Self::new();
        store.install();
        store
    }

    pub async fn load(&mut self) {
        self.load_after(FETCH_DELAY).await;
    }

    /// One-shot deferred load; loading again reinstalls the same seed.
    /// There is no cancellation: a caller that navigated away simply
    /// never observes the result.
    pub async fn load_after(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.install();
        debug!(courses = self.courses.len(), "catalog loaded");
    }

    fn install(&mut self) {
        self.courses = seed::courses();
        self.quizzes = seed::quizzes();
        self.loaded = true;
    }

    /// `true` until `load` completes. Distinguishes "empty because not
    /// loaded yet" from an empty catalog.
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// All courses in catalog order. Empty while loading.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// The quiz for a course. Every course in this catalog has exactly
    /// one; absence indicates a data inconsistency, not a normal case.
    pub fn quiz(&self, course_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_store_is_loading_and_empty() {
        let store = CatalogStore::new();
        assert!(store.is_loading());
        assert!(store.courses().is_empty());
        assert!(store.quiz("c001").is_none());
    }

    #[tokio::test]
    async fn load_installs_the_seeded_catalog() {
        let mut store = CatalogStore::new();
        store.load_after(Duration::ZERO).await;

        assert!(!store.is_loading());
        assert_eq!(store.courses().len(), 4);
        for course in store.courses() {
            let quiz = store.quiz(&course.id).expect("every course has a quiz");
            assert_eq!(quiz.questions.len(), 5);
        }
    }

    #[tokio::test]
    async fn reloading_is_idempotent() {
        let mut store = CatalogStore::new();
        store.load_after(Duration::ZERO).await;
        let first: Vec<String> = store.courses().iter().map(|c| c.id.clone()).collect();

        store.load_after(Duration::ZERO).await;
        let second: Vec<String> = store.courses().iter().map(|c| c.id.clone()).collect();
        assert_eq!(first, second);
    }
}
