use super::error::{EntityApiErrorKind, Error};
use chrono::Utc;

use entity::users::{ActiveModel, Column, Entity, Model};
use entity::{user_authorities, Id};
use log::*;
use password_auth;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait,
};

pub use entity::user_authorities::Authority;

pub async fn create(db: &impl ConnectionTrait, user_model: Model) -> Result<Model, Error> {
    debug!("New User Model to be inserted: {user_model:?}");

    let now = Utc::now();
    let user_active_model: ActiveModel = ActiveModel {
        email: Set(user_model.email),
        first_name: Set(user_model.first_name),
        last_name: Set(user_model.last_name),
        password: Set(generate_hash(user_model.password)),
        credits: Set(user_model.credits),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    let mut created_user = user_active_model.insert(db).await?;

    // Newly created users will not have authorities at this point so we add an empty vec manually
    created_user.authorities = Vec::new();
    Ok(created_user)
}

pub async fn find_by_email(db: &impl ConnectionTrait, email: &str) -> Result<Option<Model>, Error> {
    let results = Entity::find()
        .filter(Column::Email.eq(email))
        .find_with_related(user_authorities::Entity)
        .all(db)
        .await?;
    match results.into_iter().next() {
        Some((mut user, authorities)) => {
            user.authorities = authorities;
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    let results = Entity::find_by_id(id)
        .find_with_related(user_authorities::Entity)
        .all(db)
        .await?;

    match results.into_iter().next() {
        Some((mut user, authorities)) => {
            user.authorities = authorities;
            Ok(user)
        }
        None => Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        }),
    }
}

pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, Error> {
    let results = Entity::find()
        .find_with_related(user_authorities::Entity)
        .all(db)
        .await?;

    Ok(results
        .into_iter()
        .map(|(mut user, authorities)| {
            user.authorities = authorities;
            user
        })
        .collect())
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(user) => {
            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(user.id),
                email: Set(model.email),
                first_name: Set(model.first_name),
                last_name: Set(model.last_name),
                password: Unchanged(user.password),
                credits: Unchanged(user.credits),
                created_at: Unchanged(user.created_at),
                updated_at: Set(Utc::now().into()),
            };

            let mut updated = active_model.update(db).await?;
            updated.authorities = Vec::new();
            Ok(updated)
        }
        None => {
            debug!("User with id {id} not found");

            Err(Error {
                source: None,
                error_kind: EntityApiErrorKind::RecordNotFound,
            })
        }
    }
}

pub async fn delete(db: &impl ConnectionTrait, user_id: Id) -> Result<(), Error> {
    Entity::delete_by_id(user_id).exec(db).await?;
    Ok(())
}

/// Grants an authority to a user account. A user may hold several rows here,
/// though token minting only ever uses the first one found.
pub async fn assign_authority(
    db: &impl ConnectionTrait,
    user_id: Id,
    authority: Authority,
) -> Result<user_authorities::Model, Error> {
    let now = Utc::now();
    let user_authority = user_authorities::ActiveModel {
        user_id: Set(user_id),
        authority: Set(authority),
        created_at: Set(now.into()),
        ..Default::default()
    };

    Ok(user_authority.insert(db).await?)
}

pub async fn verify_password(password_to_verify: &str, password_hash: &str) -> Result<(), Error> {
    match password_auth::verify_password(password_to_verify, password_hash) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordUnauthenticated,
        }),
    }
}

pub fn generate_hash(password: String) -> String {
    password_auth::generate_hash(password)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_user() -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            email: "ticketing@stadttheater.example".to_string(),
            first_name: "Maja".to_string(),
            last_name: "Lindgren".to_string(),
            password: password_auth::generate_hash("a-password"),
            credits: 0,
            created_at: now.into(),
            updated_at: now.into(),
            authorities: Vec::new(),
        }
    }

    #[tokio::test]
    async fn find_by_email_returns_user_with_authorities() -> Result<(), Error> {
        let user = test_user();
        let now = Utc::now();
        let authority = user_authorities::Model {
            id: Id::new_v4(),
            user_id: user.id,
            authority: Authority::ClaimsManager,
            created_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[(user.clone(), authority.clone())]])
            .into_connection();

        let found = find_by_email(&db, &user.email).await?.unwrap();

        assert_eq!(found.id, user.id);
        assert_eq!(found.authorities, vec![authority]);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_email_returns_none_for_unknown_account() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(Model, user_authorities::Model)>::new()])
            .into_connection();

        let found = find_by_email(&db, "ghost@marquee.local").await?;

        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn verify_password_rejects_wrong_password() {
        let hash = generate_hash("correct horse".to_string());

        assert!(verify_password("correct horse", &hash).await.is_ok());
        let err = verify_password("battery staple", &hash).await.unwrap_err();
        assert_eq!(err.error_kind, EntityApiErrorKind::RecordUnauthenticated);
    }
}
