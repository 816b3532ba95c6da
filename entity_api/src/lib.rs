use chrono::Utc;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, Value};
use std::collections::HashMap;

pub use entity::{
    contributions, events, jwt, organizers, people, productions, roles, transactions,
    user_authorities, user_events, user_venues, users, venues, Id,
};

pub mod contribution;
pub mod error;
pub mod event;
pub mod organizer;
pub mod person;
pub mod production;
pub mod query;
pub mod role;
pub mod transaction;
pub mod user;
pub mod user_event;
pub mod user_venue;
pub mod venue;

/// `QueryFilterMap` is a data structure that serves as a bridge for translating filter parameters
/// between different layers of the application. It is essentially a wrapper around a `HashMap`
/// where the keys are filter parameter names (as `String`) and the values are optional `Value` types
/// from `sea_orm`.
///
/// This structure is particularly useful in scenarios where you need to pass filter parameters
/// from a web request down to the database query layer in a type-safe and organized manner.
///
/// # Example
///
/// ```
/// use sea_orm::Value;
/// use entity_api::QueryFilterMap;
///
/// let mut query_filter_map = QueryFilterMap::new();
/// query_filter_map.insert("city".to_string(), Some(Value::String(Some(Box::new("Vienna".to_string())))));
/// let filter_value = query_filter_map.get("city");
/// ```
pub struct QueryFilterMap {
    map: HashMap<String, Option<Value>>,
}

impl QueryFilterMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        // HashMap.get returns an Option and so we need to "flatten" this to a single Option
        self.map
            .get(key)
            .and_then(|inner_option| inner_option.clone())
    }

    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }
}

impl Default for QueryFilterMap {
    fn default() -> Self {
        Self::new()
    }
}

/// `IntoQueryFilterMap` is a trait that provides a method for converting a struct into a `QueryFilterMap`.
/// This is particularly useful for translating data between different layers of the application,
/// such as from web request parameters to database query filters.
pub trait IntoQueryFilterMap {
    fn into_query_filter_map(self) -> QueryFilterMap;
}

/// Seeds a freshly migrated database with a minimal working data set:
/// an admin account, a demo user account and a small catalog sample.
pub async fn seed_database(db: &DatabaseConnection) {
    let now = Utc::now();

    let admin_user = users::Model {
        id: Id::new_v4(),
        email: "admin@marquee.local".to_string(),
        first_name: "Marquee".to_string(),
        last_name: "Admin".to_string(),
        password: "admin-password".to_string(),
        credits: 0,
        created_at: now.into(),
        updated_at: now.into(),
        authorities: Vec::new(),
    };
    let admin_user = user::create(db, admin_user)
        .await
        .expect("Failed to seed admin user");
    user::assign_authority(db, admin_user.id, user_authorities::Authority::Admin)
        .await
        .expect("Failed to assign admin authority");

    let demo_user = users::Model {
        id: Id::new_v4(),
        email: "demo@marquee.local".to_string(),
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        password: "demo-password".to_string(),
        credits: 25,
        created_at: now.into(),
        updated_at: now.into(),
        authorities: Vec::new(),
    };
    let demo_user = user::create(db, demo_user)
        .await
        .expect("Failed to seed demo user");
    user::assign_authority(db, demo_user.id, user_authorities::Authority::User)
        .await
        .expect("Failed to assign user authority");

    let organizer = organizers::ActiveModel {
        name: Set("Volksoper Wien".to_string()),
        contact_email: Set(Some("office@volksoper.example".to_string())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed organizer");

    let production = productions::ActiveModel {
        organizer_id: Set(organizer.id),
        title: Set("The Magic Flute".to_string()),
        description: Set(Some("Mozart's singspiel in two acts".to_string())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed production");

    let venue = venues::ActiveModel {
        name: Set("Stadttheater".to_string()),
        address: Set(Some("Theaterplatz 1".to_string())),
        city: Set(Some("Vienna".to_string())),
        capacity: Set(Some(820)),
        is_claimed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed venue");

    events::ActiveModel {
        production_id: Set(production.id),
        venue_id: Set(venue.id),
        starts_at: Set(now.into()),
        is_claimed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed event");

    let role = roles::ActiveModel {
        name: Set("Director".to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed role");

    let person = people::ActiveModel {
        first_name: Set("Greta".to_string()),
        last_name: Set("Halvorsen".to_string()),
        bio: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed person");

    contributions::ActiveModel {
        person_id: Set(person.id),
        production_id: Set(production.id),
        role_id: Set(role.id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed contribution");

    info!("Seeded accounts admin@marquee.local / demo@marquee.local and a sample catalog");
}
