//! Events Lambda - CRUD operations for events.
//!
//! Endpoints:
//! - POST /events - Create event
//! - GET /events - List events
//! - GET /events/{id} - Get event
//! - PUT /events/{id} - Replace event
//! - DELETE /events/{id} - Delete event
//! - GET / - Bundled frontend landing page
//! - GET /frontend/* - Frontend assets

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response};
use shared::{parse_body, staticfiles, Config, EventInput, EventMessage, EventStore, Message};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state, built once and shared across invocations.
struct AppState {
    store: EventStore,
    frontend_dir: String,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        let pool = shared::db::create_pool(&config).await?;

        Ok(Self {
            store: EventStore::new(pool),
            frontend_dir: config.frontend_dir,
        })
    }
}

/// Extract the event id from an `/events/{id}` path.
///
/// Ids are positive integers; anything else (empty, trailing segments,
/// non-numeric, zero or negative) can never match a stored row.
fn parse_event_id(path: &str) -> Option<i64> {
    let rest = path.strip_prefix("/events/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    rest.parse::<i64>().ok().filter(|id| *id > 0)
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    match (method, path) {
        // Create event
        ("POST", "/events") => {
            let input: EventInput = parse_body!(event.body());
            let stored = state.store.insert(&input).await?;

            info!("Created event {} ({})", stored.id, stored.title);

            Ok(json_response(
                200,
                &EventMessage {
                    message: "Event created successfully".to_string(),
                    event: stored,
                },
            )?)
        }

        // List events
        ("GET", "/events") => {
            let events = state.store.list().await?;
            Ok(json_response(200, &events)?)
        }

        // Bundled frontend
        ("GET", "/") => staticfiles::serve_index(&state.frontend_dir).await,
        ("GET", p) if p.starts_with("/frontend/") => {
            staticfiles::serve_asset(&state.frontend_dir, p.trim_start_matches("/frontend/")).await
        }

        // Event-specific routes
        (_, p) if p.starts_with("/events/") => {
            let Some(event_id) = parse_event_id(p) else {
                // A malformed id can never name a stored row.
                return Ok(error_response(404, "Event not found")?);
            };

            match method {
                // Get event
                "GET" => match state.store.get(event_id).await? {
                    Some(stored) => Ok(json_response(200, &stored)?),
                    None => Ok(error_response(404, "Event not found")?),
                },

                // Replace event
                "PUT" => {
                    let input: EventInput = parse_body!(event.body());
                    match state.store.update(event_id, &input).await? {
                        Some(stored) => {
                            info!("Updated event {}", event_id);
                            Ok(json_response(
                                200,
                                &EventMessage {
                                    message: "Event updated successfully".to_string(),
                                    event: stored,
                                },
                            )?)
                        }
                        None => Ok(error_response(404, "Event not found")?),
                    }
                }

                // Delete event
                "DELETE" => {
                    if state.store.delete(event_id).await? {
                        info!("Deleted event {}", event_id);
                        Ok(json_response(
                            200,
                            &Message {
                                message: "Event deleted successfully".to_string(),
                            },
                        )?)
                    } else {
                        Ok(error_response(404, "Event not found")?)
                    }
                }

                _ => Ok(error_response(405, "Method not allowed")?),
            }
        }

        (_, "/events") | (_, "/") => Ok(error_response(405, "Method not allowed")?),

        _ => Ok(error_response(404, "Not found")?),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_id() {
        assert_eq!(parse_event_id("/events/12"), Some(12));
        assert_eq!(parse_event_id("/events/1"), Some(1));
        assert_eq!(parse_event_id("/events/abc"), None);
        assert_eq!(parse_event_id("/events/"), None);
        assert_eq!(parse_event_id("/events/0"), None);
        assert_eq!(parse_event_id("/events/-1"), None);
        assert_eq!(parse_event_id("/events/1/extra"), None);
        assert_eq!(parse_event_id("/other/1"), None);
    }
}
