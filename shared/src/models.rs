//! Shared data models.

use serde::{Deserialize, Serialize};

/// A stored event row. The id is assigned by the database on insert.
///
/// `date` is free-form text end to end; no format is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Request body for creating or replacing an event.
///
/// All three fields are required strings; anything beyond that structural
/// check is the caller's problem.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Success payload for create/update: a message plus the stored record.
#[derive(Debug, Serialize)]
pub struct EventMessage {
    pub message: String,
    pub event: Event,
}

/// Success payload for operations that only confirm.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Error payload, matching the `{"detail": "..."}` wire shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_input_requires_all_fields() {
        let missing_date = r#"{"title":"Launch","description":"Kickoff"}"#;
        assert!(serde_json::from_str::<EventInput>(missing_date).is_err());

        let full = r#"{"title":"Launch","date":"2024-01-01","description":"Kickoff"}"#;
        let input: EventInput = serde_json::from_str(full).unwrap();
        assert_eq!(input.title, "Launch");
        assert_eq!(input.date, "2024-01-01");
    }

    #[test]
    fn test_event_input_rejects_non_string_fields() {
        let numeric_date = r#"{"title":"Launch","date":20240101,"description":"Kickoff"}"#;
        assert!(serde_json::from_str::<EventInput>(numeric_date).is_err());
    }

    #[test]
    fn test_event_round_trips() {
        let event = Event {
            id: 1,
            title: "Launch".to_string(),
            date: "2024-01-01".to_string(),
            description: "Kickoff".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Launch",
                "date": "2024-01-01",
                "description": "Kickoff",
            })
        );
    }

    #[test]
    fn test_error_detail_shape() {
        let body = serde_json::to_string(&ErrorDetail {
            detail: "Event not found".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"detail":"Event not found"}"#);
    }
}
