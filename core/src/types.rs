//! Domain DTOs for the todo API.
//!
//! # Design
//! Wire types mirror the server's schema (`isCompleted` in JSON) but are
//! defined independently from the mock-server crate; integration tests catch
//! schema drift. `TodoEntry` is the client-side view row: it exists because
//! an optimistic create must display an item before the server has assigned
//! it an id, so the cached collection cannot reuse the wire `Todo` directly.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "isCompleted", skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// A row of the cached collection.
///
/// `id` is `None` for an entry appended optimistically, before the server
/// has confirmed the create; the reconciling re-fetch replaces it with the
/// canonical `Todo` carrying the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub id: Option<u64>,
    pub name: String,
    pub is_completed: bool,
}

impl From<Todo> for TodoEntry {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            name: todo.name,
            is_completed: todo.is_completed,
        }
    }
}

impl From<&CreateTodo> for TodoEntry {
    fn from(draft: &CreateTodo) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            is_completed: draft.is_completed,
        }
    }
}
