use super::error::{EntityApiErrorKind, Error};
use entity::people::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, person_model: Model) -> Result<Model, Error> {
    debug!("New Person Model to be inserted: {:?}", person_model);

    let now = chrono::Utc::now();

    let person_active_model: ActiveModel = ActiveModel {
        first_name: Set(person_model.first_name),
        last_name: Set(person_model.last_name),
        bio: Set(person_model.bio),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(person_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(person) => {
            debug!("Existing Person model to be Updated: {:?}", person);

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(person.id),
                first_name: Set(model.first_name),
                last_name: Set(model.last_name),
                bio: Set(model.bio),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(person.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Person with id {} not found", id);

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
    async fn create_returns_a_new_person_model() -> Result<(), Error> {
        let now = chrono::Utc::now();

        let person_model = Model {
            id: Id::new_v4(),
            first_name: "Greta".to_owned(),
            last_name: "Halvorsen".to_owned(),
            bio: Some("Director and playwright".to_owned()),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![person_model.clone()]])
            .into_connection();

        let person = create(&db, person_model.clone()).await?;

        assert_eq!(person.id, person_model.id);

        Ok(())
    }

    #[tokio::test]
    async fn update_returns_an_updated_person_model() -> Result<(), Error> {
        let now = chrono::Utc::now();

        let person_model = Model {
            id: Id::new_v4(),
            first_name: "Greta".to_owned(),
            last_name: "Halvorsen".to_owned(),
            bio: None,
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![person_model.clone()],
                vec![person_model.clone()],
            ])
            .into_connection();

        let person = update(&db, person_model.id, person_model.clone()).await?;

        assert_eq!(person.last_name, person_model.last_name);

        Ok(())
    }
}
