use super::error::{EntityApiErrorKind, Error};
use entity::organizers::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, organizer_model: Model) -> Result<Model, Error> {
    debug!("New Organizer Model to be inserted: {:?}", organizer_model);

    let now = chrono::Utc::now();

    let organizer_active_model: ActiveModel = ActiveModel {
        name: Set(organizer_model.name),
        contact_email: Set(organizer_model.contact_email),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(organizer_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(organizer) => {
            debug!("Existing Organizer model to be Updated: {:?}", organizer);

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(organizer.id),
                name: Set(model.name),
                contact_email: Set(model.contact_email),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(organizer.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Organizer with id {} not found", id);

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
