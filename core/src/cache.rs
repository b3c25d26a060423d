//! Optimistic client-side cache over the todo API.
//!
//! # Design
//! `TodoCache` owns the only mutable state in the crate: the cached
//! collection, a staleness flag, and a read-cancellation epoch. Like
//! `TodoClient` it never touches the network. Every operation is split into
//! a `begin_*` method that produces an `HttpRequest` (plus a pending ticket
//! where state must survive the round-trip) and an `apply_*` method that
//! consumes the `HttpResponse` and settles the cache. The host executes the
//! round-trip in between, from whatever event loop it runs.
//!
//! Mutation semantics:
//! - create is optimistic: snapshot the collection, append the draft before
//!   the server confirms it, roll back to the snapshot on failure;
//! - update and delete write no speculative state and simply invalidate;
//! - reconciliation is a forced re-fetch. Settling a mutation marks the
//!   cache stale so the next read re-executes the list request instead of
//!   serving the cached copy, picking up server-assigned ids and canonical
//!   ordering.
//!
//! Beginning a create bumps the epoch, which cancels every fetch still in
//! flight: its response, once applied, is discarded rather than allowed to
//! overwrite the optimistic state with stale pre-mutation data. The same
//! mechanism guards against a response arriving after the host tore the
//! view down (`cancel_reads`).
//!
//! There is no global instance; the host constructs a `TodoCache` and passes
//! it to whatever context needs it. Interested parties register a callback
//! with `subscribe` and are notified whenever the collection contents
//! change.

use log::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoEntry, UpdateTodo};

/// Handle returned by [`TodoCache::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Ticket for a list fetch in flight.
///
/// Carries the epoch observed at `begin_fetch`; if reads are cancelled
/// while the request is on the wire, `apply_fetch` discards the response.
#[derive(Debug)]
pub struct PendingFetch {
    epoch: u64,
}

/// Ticket for an optimistic create in flight.
///
/// Carries the pre-mutation snapshot that `apply_create` restores when the
/// server rejects the create.
#[derive(Debug)]
pub struct PendingCreate {
    snapshot: Option<Vec<TodoEntry>>,
}

/// Result of settling a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the cached collection.
    Applied,
    /// Reads were cancelled while the response was in flight; it was
    /// dropped without touching the cache.
    Discarded,
}

type Subscriber = Box<dyn FnMut(&[TodoEntry])>;

/// Cached read model of the todo collection, with optimistic mutations.
pub struct TodoCache {
    client: TodoClient,
    entries: Option<Vec<TodoEntry>>,
    stale: bool,
    epoch: u64,
    next_subscriber: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl TodoCache {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            entries: None,
            stale: false,
            epoch: 0,
            next_subscriber: 0,
            subscribers: Vec::new(),
        }
    }

    /// The cached collection, or `None` if no fetch has completed yet.
    /// An empty slice is a valid, non-error state.
    pub fn entries(&self) -> Option<&[TodoEntry]> {
        self.entries.as_deref()
    }

    /// True when the next read should re-execute the list request instead of
    /// serving the cache: either nothing has been fetched yet, or a settled
    /// mutation invalidated the collection.
    pub fn needs_fetch(&self) -> bool {
        self.stale || self.entries.is_none()
    }

    /// Register a callback invoked whenever the collection contents change
    /// (fetch applied, optimistic append, rollback).
    pub fn subscribe(&mut self, callback: impl FnMut(&[TodoEntry]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Cancel all in-flight reads: responses from fetches begun before this
    /// call are discarded by [`apply_fetch`](Self::apply_fetch). Called
    /// internally before an optimistic create; hosts call it on teardown so
    /// a read still in progress is never applied afterward.
    pub fn cancel_reads(&mut self) {
        self.epoch += 1;
    }

    /// Start a list fetch. The host executes the request and settles it
    /// with [`apply_fetch`](Self::apply_fetch).
    pub fn begin_fetch(&self) -> (HttpRequest, PendingFetch) {
        (
            self.client.build_list_todos(),
            PendingFetch { epoch: self.epoch },
        )
    }

    /// Settle a list fetch. On success the cached collection is replaced
    /// wholesale and subscribers are notified; a non-2xx response surfaces
    /// as `Transport` with the cache untouched. A fetch begun before the
    /// last read cancellation is discarded.
    pub fn apply_fetch(
        &mut self,
        pending: PendingFetch,
        response: HttpResponse,
    ) -> Result<FetchOutcome, ApiError> {
        if pending.epoch != self.epoch {
            debug!(
                "discarding cancelled fetch (epoch {} < {})",
                pending.epoch, self.epoch
            );
            return Ok(FetchOutcome::Discarded);
        }
        let todos = self.client.parse_list_todos(response)?;
        self.entries = Some(todos.into_iter().map(TodoEntry::from).collect());
        self.stale = false;
        self.notify();
        Ok(FetchOutcome::Applied)
    }

    /// Start an optimistic create: cancels in-flight reads, snapshots the
    /// collection into the returned ticket, and appends the draft as an
    /// id-less entry immediately. A cache that has never been loaded starts
    /// from the empty list.
    pub fn begin_create(
        &mut self,
        draft: &CreateTodo,
    ) -> Result<(HttpRequest, PendingCreate), ApiError> {
        let request = self.client.build_create_todo(draft)?;
        self.cancel_reads();
        let snapshot = self.entries.clone();
        self.entries
            .get_or_insert_with(Vec::new)
            .push(TodoEntry::from(draft));
        debug!("optimistic create: {:?}", draft.name);
        self.notify();
        Ok((request, PendingCreate { snapshot }))
    }

    /// Settle a create. Success marks the cache stale so the reconciling
    /// re-fetch picks up the server-assigned id and canonical ordering.
    /// Failure restores the snapshot — which already makes the cache
    /// correct, so no invalidation — and surfaces the error.
    pub fn apply_create(
        &mut self,
        pending: PendingCreate,
        response: HttpResponse,
    ) -> Result<Todo, ApiError> {
        match self.client.parse_create_todo(response) {
            Ok(todo) => {
                self.stale = true;
                Ok(todo)
            }
            Err(err) => {
                debug!("create failed, rolling back: {err}");
                self.entries = pending.snapshot;
                self.notify();
                Err(err)
            }
        }
    }

    /// Start a partial update. No speculative local state is written.
    pub fn begin_update(&self, id: u64, changes: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.client.build_update_todo(id, changes)
    }

    /// Settle an update. The collection is invalidated on success and
    /// failure alike: nothing was written locally, so re-fetching is the
    /// only reconciliation needed.
    pub fn apply_update(&mut self, response: HttpResponse) -> Result<Todo, ApiError> {
        self.stale = true;
        self.client.parse_update_todo(response)
    }

    /// Start a delete. No speculative local state is written.
    pub fn begin_remove(&self, id: u64) -> HttpRequest {
        self.client.build_delete_todo(id)
    }

    /// Settle a delete. Invalidates on success and failure alike.
    pub fn apply_remove(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        self.stale = true;
        self.client.parse_delete_todo(response)
    }

    fn notify(&mut self) {
        let entries: &[TodoEntry] = self.entries.as_deref().unwrap_or(&[]);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(entries);
        }
    }
}
