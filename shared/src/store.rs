//! Event store: the thin adapter over the hosted `events` table.
//!
//! The database owns storage, id assignment, and query execution; this type
//! only shapes the five table operations. No retries, no caching.

use sqlx::PgPool;

use crate::models::{Event, EventInput};
use crate::Result;

/// Wraps the connection pool with the operations on the `events` table.
///
/// One instance is shared for the process lifetime and passed into handlers
/// as part of the application state.
#[derive(Debug, Clone)]
pub struct EventStore {
    pool: PgPool,
}

impl EventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event; the database assigns the id.
    pub async fn insert(&self, input: &EventInput) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, date, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, date, description
            "#,
        )
        .bind(&input.title)
        .bind(&input.date)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// All stored events in id order. Empty vec when the table is empty.
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, date, description FROM events ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, date, description FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Full replace of the three fields. `None` when no row has this id;
    /// absence is detected from the returned row set, not a status field.
    pub async fn update(&self, id: i64, input: &EventInput) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2, date = $3, description = $4
            WHERE id = $1
            RETURNING id, title, date, description
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.date)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete by id. `false` when zero rows were affected.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
