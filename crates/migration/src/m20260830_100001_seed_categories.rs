use sea_orm_migration::prelude::*;

use crate::m20260830_100000_init_schema::Category;

/// Categories the frontend expects. The API exposes no way to create them,
/// so they ship with the schema.
const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Type])
            .to_owned();
        for label in CATEGORIES {
            insert.values_panic([Expr::value(label)]);
        }

        manager.exec_stmt(insert).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .and_where(Expr::col(Category::Type).is_in(CATEGORIES))
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
