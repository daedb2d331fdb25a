use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier assigned to a blog by the store.
///
/// The textual encoding belongs to the backend: only the repository that
/// issued an id can tell whether a string is well-formed (see
/// [`BlogRepository::parse_id`](crate::ports::BlogRepository::parse_id)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(String);

impl BlogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Blog entity - a titled text with an optional author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Materialize a draft under a freshly assigned id. Both timestamps are `now`.
    pub fn from_draft(id: BlogId, draft: BlogDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields with those of `draft`.
    ///
    /// `id` and `created_at` never change; an absent author clears the field.
    pub fn apply(&mut self, draft: BlogDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.body = draft.body;
        self.author = draft.author;
        self.updated_at = now;
    }
}

/// The client-settable part of a blog, validated.
///
/// Holding a `BlogDraft` proves that `title` and `body` are non-empty, so
/// repositories only ever persist valid blogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    body: String,
    author: Option<String>,
}

impl BlogDraft {
    /// Validate raw request fields.
    ///
    /// Missing or empty `title`/`body` is rejected. An empty author is
    /// treated as anonymous.
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.filter(|t| !t.is_empty());
        let body = body.filter(|b| !b.is_empty());

        match (title, body) {
            (Some(title), Some(body)) => Ok(Self {
                title,
                body,
                author: author.filter(|a| !a.is_empty()),
            }),
            _ => Err(DomainError::MissingFields),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn into_parts(self) -> (String, String, Option<String>) {
        (self.title, self.body, self.author)
    }
}
