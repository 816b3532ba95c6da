use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the platform's schema
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS marquee;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO marquee, public;")
            .await?;

        // Grant the base DB user that will execute all platform queries
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    GRANT ALL PRIVILEGES ON DATABASE marquee TO marquee;
                    GRANT ALL ON SCHEMA marquee TO marquee;

                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee GRANT ALL ON TABLES TO marquee;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee GRANT ALL ON SEQUENCES TO marquee;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee GRANT ALL ON FUNCTIONS TO marquee;
                END $$;
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Revoke default privileges first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee REVOKE ALL ON FUNCTIONS FROM marquee;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee REVOKE ALL ON SEQUENCES FROM marquee;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA marquee REVOKE ALL ON TABLES FROM marquee;
                    REVOKE ALL ON SCHEMA marquee FROM marquee;
                    REVOKE ALL PRIVILEGES ON DATABASE marquee FROM marquee;
                END $$;
            "#,
            )
            .await?;

        // Drop the schema (CASCADE will remove all objects in it)
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS marquee CASCADE;")
            .await?;

        Ok(())
    }
}
