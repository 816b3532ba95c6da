use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // gen_random_uuid() lives in pgcrypto on older Postgres versions.
        manager
            .get_connection()
            .execute_unprepared("CREATE EXTENSION IF NOT EXISTS pgcrypto;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TYPE marquee.authority AS ENUM (
                    'user', 'admin', 'developer', 'claims manager'
                );

                CREATE TABLE marquee.users (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    email varchar(255) NOT NULL UNIQUE,
                    first_name varchar(255) NOT NULL,
                    last_name varchar(255) NOT NULL,
                    password varchar(255) NOT NULL,
                    credits bigint NOT NULL DEFAULT 0,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.user_authorities (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    user_id uuid NOT NULL REFERENCES marquee.users (id) ON DELETE CASCADE,
                    authority marquee.authority NOT NULL,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    UNIQUE (user_id, authority)
                );

                CREATE TABLE marquee.people (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    first_name varchar(255) NOT NULL,
                    last_name varchar(255) NOT NULL,
                    bio text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.organizers (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    name varchar(255) NOT NULL,
                    contact_email varchar(255),
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.productions (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    title varchar(255) NOT NULL,
                    description text,
                    organizer_id uuid NOT NULL REFERENCES marquee.organizers (id) ON DELETE CASCADE,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.venues (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    name varchar(255) NOT NULL,
                    address varchar(255),
                    city varchar(255),
                    capacity integer,
                    is_claimed boolean NOT NULL DEFAULT false,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.events (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    production_id uuid NOT NULL REFERENCES marquee.productions (id) ON DELETE CASCADE,
                    venue_id uuid NOT NULL REFERENCES marquee.venues (id) ON DELETE CASCADE,
                    starts_at timestamptz NOT NULL,
                    is_claimed boolean NOT NULL DEFAULT false,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.roles (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    name varchar(255) NOT NULL UNIQUE,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.contributions (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    person_id uuid NOT NULL REFERENCES marquee.people (id) ON DELETE CASCADE,
                    production_id uuid NOT NULL REFERENCES marquee.productions (id) ON DELETE CASCADE,
                    role_id uuid NOT NULL REFERENCES marquee.roles (id) ON DELETE CASCADE,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.transactions (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    user_id uuid NOT NULL REFERENCES marquee.users (id) ON DELETE CASCADE,
                    amount bigint NOT NULL,
                    description varchar(255),
                    created_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.user_venues (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    user_id uuid NOT NULL REFERENCES marquee.users (id) ON DELETE CASCADE,
                    venue_id uuid NOT NULL REFERENCES marquee.venues (id) ON DELETE CASCADE,
                    created_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE marquee.user_events (
                    id uuid NOT NULL DEFAULT gen_random_uuid() PRIMARY KEY,
                    user_id uuid NOT NULL REFERENCES marquee.users (id) ON DELETE CASCADE,
                    event_id uuid NOT NULL REFERENCES marquee.events (id) ON DELETE CASCADE,
                    created_at timestamptz NOT NULL DEFAULT now()
                );

                -- One ownership link per target. These indexes are the
                -- serialization point for concurrent claims: the second insert
                -- fails with a unique-constraint violation.
                CREATE UNIQUE INDEX user_venues_venue_id_key ON marquee.user_venues (venue_id);
                CREATE UNIQUE INDEX user_events_event_id_key ON marquee.user_events (event_id);
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TABLE IF EXISTS marquee.user_events;
                DROP TABLE IF EXISTS marquee.user_venues;
                DROP TABLE IF EXISTS marquee.transactions;
                DROP TABLE IF EXISTS marquee.contributions;
                DROP TABLE IF EXISTS marquee.roles;
                DROP TABLE IF EXISTS marquee.events;
                DROP TABLE IF EXISTS marquee.venues;
                DROP TABLE IF EXISTS marquee.productions;
                DROP TABLE IF EXISTS marquee.organizers;
                DROP TABLE IF EXISTS marquee.people;
                DROP TABLE IF EXISTS marquee.user_authorities;
                DROP TABLE IF EXISTS marquee.users;
                DROP TYPE IF EXISTS marquee.authority;
            "#,
            )
            .await?;

        Ok(())
    }
}
