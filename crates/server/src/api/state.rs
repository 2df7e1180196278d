use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    CategoryRepository, QuestionRepository, SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};

/// Application state shared by every handler. Repositories are built around
/// an explicitly injected connection pool rather than any process-global
/// session.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            questions: Arc::new(SeaOrmQuestionRepository::new(db.clone())),
            categories: Arc::new(SeaOrmCategoryRepository::new(db)),
        }
    }
}
