use super::error::{EntityApiErrorKind, Error};
use entity::productions::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, production_model: Model) -> Result<Model, Error> {
    debug!("New Production Model to be inserted: {:?}", production_model);

    let now = chrono::Utc::now();

    let production_active_model: ActiveModel = ActiveModel {
        organizer_id: Set(production_model.organizer_id),
        title: Set(production_model.title),
        description: Set(production_model.description),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(production_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(production) => {
            debug!("Existing Production model to be Updated: {:?}", production);

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(production.id),
                organizer_id: Set(model.organizer_id),
                title: Set(model.title),
                description: Set(model.description),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(production.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Production with id {} not found", id);

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
