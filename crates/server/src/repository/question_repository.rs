use crate::entity::question;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use trivia_api_types::QuestionData;

#[derive(Debug, Clone)]
pub struct QuestionRecord {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<QuestionRecord> for QuestionData {
    fn from(record: QuestionRecord) -> Self {
        QuestionData {
            id: record.id,
            question: record.question,
            answer: record.answer,
            category: record.category,
            difficulty: record.difficulty,
        }
    }
}

/// Fields of a question to insert. Everything is optional: writes are taken
/// as given, missing fields land as NULL.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id ascending.
    async fn list_ordered(&self) -> Result<Vec<QuestionRecord>>;
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<QuestionRecord>>;
    /// Case-insensitive substring match on the question text, delegated to
    /// the database.
    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>>;
    async fn find_by_id(&self, question_id: i32) -> Result<Option<QuestionRecord>>;
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord>;
    async fn delete_by_id(&self, question_id: i32) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: question::Model) -> QuestionRecord {
        QuestionRecord {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            difficulty: model.difficulty,
        }
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn list_ordered(&self) -> Result<Vec<QuestionRecord>> {
        let models = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<QuestionRecord>> {
        let models = question::Entity::find()
            .filter(question::Column::Category.eq(category_id))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>> {
        // lower(question) LIKE '%term%' keeps the match case-insensitive on
        // every supported backend. LIKE wildcards in the term pass through
        // untouched.
        let pattern = format!("%{}%", term.to_lowercase());
        let models = question::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(question::Column::Question))).like(pattern))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_id(&self, question_id: i32) -> Result<Option<QuestionRecord>> {
        let model = question::Entity::find_by_id(question_id).one(&self.db).await?;

        Ok(model.map(Self::map_model))
    }

    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord> {
        let active_model = question::ActiveModel {
            question: Set(new_question.question),
            answer: Set(new_question.answer),
            category: Set(new_question.category),
            difficulty: Set(new_question.difficulty),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn delete_by_id(&self, question_id: i32) -> Result<()> {
        // Best effort: a row deleted by a concurrent writer between the
        // caller's lookup and this call still counts as deleted.
        question::Entity::delete_by_id(question_id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
