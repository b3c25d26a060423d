use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub name: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub name: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: Option<bool>,
}

/// Ids count up from 1; the Vec keeps insertion order, which is the order
/// the list endpoint must return.
#[derive(Debug, Default)]
pub struct TodoStore {
    next_id: u64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<TodoStore>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/todos", get(list_todos))
        .route("/create", post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    if input.name.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        name: input.name,
        is_completed: input.is_completed,
    };
    store.todos.push(todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        todo.name = name;
    }
    if let Some(is_completed) = input.is_completed {
        todo.is_completed = is_completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() == before {
        StatusCode::NOT_FOUND
    } else {
        tracing::debug!(id, "deleted todo");
        StatusCode::NO_CONTENT
    }
}
