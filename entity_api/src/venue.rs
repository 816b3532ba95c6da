use super::error::{EntityApiErrorKind, Error};
use entity::venues::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, venue_model: Model) -> Result<Model, Error> {
    debug!("New Venue Model to be inserted: {:?}", venue_model);

    let now = chrono::Utc::now();

    let venue_active_model: ActiveModel = ActiveModel {
        name: Set(venue_model.name),
        address: Set(venue_model.address),
        city: Set(venue_model.city),
        capacity: Set(venue_model.capacity),
        is_claimed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(venue_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(venue) => {
            debug!("Existing Venue model to be Updated: {:?}", venue);

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(venue.id),
                name: Set(model.name),
                address: Set(model.address),
                city: Set(model.city),
                capacity: Set(model.capacity),
                // The claim transition owns this flag.
                is_claimed: Unchanged(venue.is_claimed),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(venue.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Venue with id {} not found", id);

            Err(Error {
                source: None,
                error_kind: EntityApiErrorKind::RecordNotFound,
            })
        }
    }
}

pub async fn delete_by_id(db: &impl ConnectionTrait, id: Id) -> Result<(), Error> {
    let result = find_by_id(db, id).await?;

    result.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_returns_a_new_venue_model() -> Result<(), Error> {
        let now = chrono::Utc::now();

        let venue_model = Model {
            id: Id::new_v4(),
            name: "Kammerspiele".to_owned(),
            address: Some("Hirtengasse 4".to_owned()),
            city: Some("Vienna".to_owned()),
            capacity: Some(240),
            is_claimed: false,
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![venue_model.clone()]])
            .into_connection();

        let venue = create(&db, venue_model.clone()).await?;

        assert_eq!(venue.id, venue_model.id);
        assert!(!venue.is_claimed);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_returns_record_not_found_for_missing_venue() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let err = find_by_id(&db, Id::new_v4()).await.unwrap_err();

        assert_eq!(err.error_kind, EntityApiErrorKind::RecordNotFound);
    }
}
