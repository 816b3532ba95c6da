use super::error::{EntityApiErrorKind, Error};
use entity::events::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, event_model: Model) -> Result<Model, Error> {
    debug!("New Event Model to be inserted: {:?}", event_model);

    let now = chrono::Utc::now();

    let event_active_model: ActiveModel = ActiveModel {
        production_id: Set(event_model.production_id),
        venue_id: Set(event_model.venue_id),
        starts_at: Set(event_model.starts_at),
        is_claimed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(event_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(event) => {
            debug!("Existing Event model to be Updated: {:?}", event);

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(event.id),
                production_id: Set(model.production_id),
                venue_id: Set(model.venue_id),
                starts_at: Set(model.starts_at),
                // The claim transition owns this flag.
                is_claimed: Unchanged(event.is_claimed),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(event.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Event with id {} not found", id);

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
