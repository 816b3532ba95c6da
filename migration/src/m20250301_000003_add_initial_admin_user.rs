use chrono::Utc;
use password_auth::generate_hash;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DbBackend, Statement, Value};
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        insert_initial_admin_user(manager).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        delete_initial_admin_user(manager).await
    }
}

// NOTE: We use raw SQL here to avoid issues with entity type changes in future migrations.
// Using the ORM can break if new fields are added later, but raw SQL remains compatible.
async fn insert_initial_admin_user(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();
    let now = Utc::now();

    let password_hash = generate_hash("password");

    let user_sql = r#"
        INSERT INTO marquee.users (
            email, first_name, last_name, password, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
    "#;
    let user_row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            user_sql,
            vec![
                Value::String(Some(Box::new("admin@marquee.local".to_owned()))),
                Value::String(Some(Box::new("Marquee".to_owned()))),
                Value::String(Some(Box::new("Admin".to_owned()))),
                Value::String(Some(Box::new(password_hash))),
                Value::ChronoDateTimeUtc(Some(Box::new(now))),
                Value::ChronoDateTimeUtc(Some(Box::new(now))),
            ],
        ))
        .await?
        .ok_or_else(|| DbErr::Custom("Admin user insert returned no id".to_owned()))?;
    let admin_user_id: Uuid = user_row
        .try_get("", "id")
        .map_err(|err| DbErr::Custom(format!("Failed to read admin user id: {err}")))?;

    let authority_sql = r#"
        INSERT INTO marquee.user_authorities (
            user_id, authority, created_at
        ) VALUES ($1, 'admin', $2)
    "#;
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        authority_sql,
        vec![
            Value::Uuid(Some(Box::new(admin_user_id))),
            Value::ChronoDateTimeUtc(Some(Box::new(now))),
        ],
    ))
    .await?;

    Ok(())
}

async fn delete_initial_admin_user(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();

    let delete_authorities_sql = r#"
        DELETE FROM marquee.user_authorities
        WHERE user_id IN (SELECT id FROM marquee.users WHERE email = $1)
    "#;
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        delete_authorities_sql,
        vec![Value::String(Some(Box::new(
            "admin@marquee.local".to_owned(),
        )))],
    ))
    .await?;

    let delete_user_sql = r#"
        DELETE FROM marquee.users WHERE email = $1
    "#;
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        delete_user_sql,
        vec![Value::String(Some(Box::new(
            "admin@marquee.local".to_owned(),
        )))],
    ))
    .await?;

    Ok(())
}
