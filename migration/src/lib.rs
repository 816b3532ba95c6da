pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_schema_and_base_db_setup;
mod m20250301_000002_create_base_tables;
mod m20250301_000003_add_initial_admin_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_schema_and_base_db_setup::Migration),
            Box::new(m20250301_000002_create_base_tables::Migration),
            Box::new(m20250301_000003_add_initial_admin_user::Migration),
        ]
    }
}
