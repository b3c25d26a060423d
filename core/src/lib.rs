//! Client-side cached view of a remote todo collection.
//!
//! # Overview
//! `TodoCache` keeps a local read model of the collection fresh and provides
//! optimistic-mutation semantics for create/update/delete so a UI feels
//! responsive despite network latency. The cache never owns the
//! authoritative collection — only a snapshot that is replaced wholesale on
//! reconciliation or reverted on a failed optimistic create.
//!
//! # Design
//! - Host-does-IO: the crate builds `HttpRequest` values and settles
//!   `HttpResponse` values without touching the network. The caller executes
//!   the actual round-trips, making the crate fully deterministic and
//!   testable from a single thread.
//! - `TodoClient` is the stateless build/parse layer; `TodoCache` layers the
//!   collection state, staleness, read cancellation, and change
//!   subscriptions on top of it.
//! - There is no retry policy and no global instance; a failed request
//!   surfaces once as `ApiError::Transport`, and the host owns the cache it
//!   constructs.

pub mod cache;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use cache::{FetchOutcome, PendingCreate, PendingFetch, SubscriberId, TodoCache};
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoEntry, UpdateTodo};
