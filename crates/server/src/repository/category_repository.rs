use crate::entity::category;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub id: i32,
    pub label: String,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CategoryRecord>>;
    async fn find_by_id(&self, category_id: i32) -> Result<Option<CategoryRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: category::Model) -> CategoryRecord {
        CategoryRecord {
            id: model.id,
            label: model.label,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list(&self) -> Result<Vec<CategoryRecord>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<CategoryRecord>> {
        let model = category::Entity::find_by_id(category_id).one(&self.db).await?;

        Ok(model.map(Self::map_model))
    }
}
