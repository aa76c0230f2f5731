/**
 * Idea Data Structures
 *
 * This module defines the Idea record returned by the API, the raw request
 * payload accepted by the create/update endpoints, and the validated draft
 * handed to the credential store.
 *
 * Tags arrive either as a JSON array or as a single comma-separated string.
 * Both forms are normalised the same way: every entry is trimmed and blank
 * entries are dropped, preserving order.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

const REQUIRED_FIELDS_MESSAGE: &str = "Title, summary and description are required";

/// A stored idea
///
/// # Example
/// ```json
/// {
///   "id": "0b8f6d3e-6c1a-4d0a-9a57-3f1f2b7c9e10",
///   "title": "Solar kettle",
///   "summary": "Boil water with sunlight",
///   "description": "A parabolic mirror focused on a black kettle.",
///   "tags": ["energy", "kitchen"],
///   "createdAt": "2024-05-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Tags as sent by clients
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TagsInput {
    /// `["a", "b"]`
    List(Vec<String>),
    /// `"a, b"`
    Text(String),
}

impl TagsInput {
    /// Normalise into the stored representation
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Text(text) => split_tags(&text),
        }
    }
}

/// Split a comma-separated tag string
///
/// ```rust
/// use ideadrop::shared::idea::split_tags;
///
/// assert_eq!(split_tags("a, b , c"), vec!["a", "b", "c"]);
/// assert!(split_tags(" , ").is_empty());
/// ```
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create/update request body
///
/// Every field is optional at the deserialization level so that a missing
/// field turns into a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IdeaInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Option<TagsInput>,
}

/// A validated idea payload, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl IdeaInput {
    /// Check required fields and normalise tags
    ///
    /// Text fields are stored trimmed. Absent tags become an empty list,
    /// which is also what a full-replace update writes.
    pub fn validate(self) -> Result<IdeaDraft, SharedError> {
        let title = required("title", self.title)?;
        let summary = required("summary", self.summary)?;
        let description = required("description", self.description)?;

        Ok(IdeaDraft {
            title,
            summary,
            description,
            tags: self.tags.map(TagsInput::into_tags).unwrap_or_default(),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(SharedError::validation(field, REQUIRED_FIELDS_MESSAGE)),
    }
}

impl Idea {
    /// Build a fresh idea from a validated draft
    pub fn from_draft(draft: IdeaDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            summary: draft.summary,
            description: draft.description,
            tags: draft.tags,
            created_at: Utc::now(),
        }
    }

    /// Replace every editable field, keeping id and creation time
    pub fn apply(&mut self, draft: IdeaDraft) {
        self.title = draft.title;
        self.summary = draft.summary;
        self.description = draft.description;
        self.tags = draft.tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(json: serde_json::Value) -> IdeaInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_tags_from_comma_string() {
        let draft = input(serde_json::json!({
            "title": "T", "summary": "S", "description": "D",
            "tags": "a, b , c"
        }))
        .validate()
        .unwrap();
        assert_eq!(draft.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tags_from_array_are_trimmed() {
        let draft = input(serde_json::json!({
            "title": "T", "summary": "S", "description": "D",
            "tags": [" rust ", "", "web"]
        }))
        .validate()
        .unwrap();
        assert_eq!(draft.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_missing_tags_become_empty() {
        let draft = input(serde_json::json!({
            "title": "T", "summary": "S", "description": "D"
        }))
        .validate()
        .unwrap();
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = input(serde_json::json!({
            "title": "   ", "summary": "S", "description": "D"
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "title");
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let err = IdeaInput {
            title: Some("T".into()),
            summary: Some("S".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let draft = input(serde_json::json!({
            "title": "  Title ", "summary": "S ", "description": " D"
        }))
        .validate()
        .unwrap();
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.summary, "S");
        assert_eq!(draft.description, "D");
    }

    #[test]
    fn test_idea_serializes_camel_case() {
        let idea = Idea::from_draft(IdeaDraft {
            title: "T".into(),
            summary: "S".into(),
            description: "D".into(),
            tags: vec![],
        });
        let json = serde_json::to_value(&idea).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut idea = Idea::from_draft(IdeaDraft {
            title: "Old".into(),
            summary: "S".into(),
            description: "D".into(),
            tags: vec!["x".into()],
        });
        let (id, created_at) = (idea.id, idea.created_at);
        idea.apply(IdeaDraft {
            title: "New".into(),
            summary: "S2".into(),
            description: "D2".into(),
            tags: vec![],
        });
        assert_eq!(idea.id, id);
        assert_eq!(idea.created_at, created_at);
        assert_eq!(idea.title, "New");
        assert!(idea.tags.is_empty());
    }
}
