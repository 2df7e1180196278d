pub use sea_orm_migration::prelude::*;

mod m20260830_100000_init_schema;
mod m20260830_100001_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_100000_init_schema::Migration),
            Box::new(m20260830_100001_seed_categories::Migration),
        ]
    }
}
