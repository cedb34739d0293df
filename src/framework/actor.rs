//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one collection of
//! entities. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the collection and its backing file.

use crate::framework::client::ResourceClient;
use crate::framework::entity::{ActorEntity, Change};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::repository::Repository;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Each actor processes its own messages *sequentially* in a loop, and awaits the entity
/// hooks inside that loop. A hook that talks to another actor therefore runs to completion
/// before the next request to this actor is looked at; there is no `Mutex` around the store.
///
/// # Write-Through
/// Every mutating request follows the same shape:
///
/// 1. Copy the affected record(s) and run the entity hook on the copy.
/// 2. Validate the result.
/// 3. Build the next collection and save it through the [`Repository`].
/// 4. Only if the save succeeded, swap the next collection in.
///
/// If step 3 fails, [`ActorEntity::on_commit_failed`] is called so that hooks with
/// external side effects can undo them, and the caller receives
/// [`FrameworkError::Storage`].
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    repository: Box<dyn Repository<T>>,
    next_seq: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`, loading the
    /// collection from `repository`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `repository` - Where the collection lives.
    pub fn new<R>(buffer_size: usize, repository: R) -> Result<(Self, ResourceClient<T>), FrameworkError>
    where
        R: Repository<T>,
    {
        let store = repository.load()?;
        let next_seq = next_sequence(&store);
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            repository: Box::new(repository),
            next_seq,
        };
        Ok((actor, ResourceClient::new(sender)))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Batch {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, ?actions, "Batch");
                    let count = actions.len();
                    let result = self.batch(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, count, "Batch ok"),
                        Err(e) => warn!(entity_type, count, error = %e, "Batch rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::ReplaceAll { items, respond_to } => {
                    let count = items.len();
                    let result = self.replace_all(items);
                    match &result {
                        Ok(()) => info!(entity_type, size = count, "Replaced collection"),
                        Err(e) => warn!(entity_type, error = %e, "Replace rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn locate(&self, id: &T::Id) -> Result<usize, FrameworkError> {
        self.position(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Writes `next` through the repository and swaps it in.
    fn commit(&mut self, next: Vec<T>) -> Result<(), FrameworkError> {
        self.repository.save(&next)?;
        self.store = next;
        Ok(())
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(self.next_seq, params).map_err(entity_error)?;
        item.validate().map_err(entity_error)?;
        if self.position(item.id()).is_some() {
            return Err(FrameworkError::DuplicateId(item.id().to_string()));
        }
        item.on_create(context).await.map_err(entity_error)?;

        let mut next = self.store.clone();
        next.push(item.clone());
        if let Err(e) = self.commit(next) {
            compensate(&item, Change::Created, context).await;
            return Err(e);
        }
        if let Some(seq) = T::sequence_of(item.id()) {
            self.next_seq = self.next_seq.max(seq.saturating_add(1));
        }
        Ok(item)
    }

    async fn update(&mut self, id: &T::Id, update: T::Update, context: &T::Context) -> Result<T, FrameworkError> {
        let idx = self.locate(id)?;
        let before = self.store[idx].clone();
        let mut after = before.clone();
        after.on_update(update, context).await.map_err(entity_error)?;
        after.validate().map_err(entity_error)?;

        let mut next = self.store.clone();
        next[idx] = after.clone();
        if let Err(e) = self.commit(next) {
            compensate(&after, Change::Updated(&before), context).await;
            return Err(e);
        }
        Ok(after)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let idx = self.locate(id)?;
        let item = self.store[idx].clone();
        item.on_delete(context).await.map_err(entity_error)?;

        let mut next = self.store.clone();
        next.remove(idx);
        if let Err(e) = self.commit(next) {
            compensate(&item, Change::Deleted, context).await;
            return Err(e);
        }
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut results = self.batch(vec![(id.clone(), action)], context).await?;
        results
            .pop()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Runs every action against staged copies; commits only if all of them succeed and
    /// at least one record changed.
    async fn batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: Vec<(usize, T)> = Vec::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let idx = self.locate(&id)?;
            let slot = match staged.iter().position(|(i, _)| *i == idx) {
                Some(slot) => slot,
                None => {
                    staged.push((idx, self.store[idx].clone()));
                    staged.len() - 1
                }
            };
            let entity = &mut staged[slot].1;
            results.push(entity.handle_action(action, context).await.map_err(entity_error)?);
            entity.validate().map_err(entity_error)?;
        }

        // Read-only actions leave their records as they were; nothing to write.
        staged.retain(|(idx, item)| *item != self.store[*idx]);
        if staged.is_empty() {
            return Ok(results);
        }

        let mut next = self.store.clone();
        for (idx, item) in &staged {
            next[*idx] = item.clone();
        }
        if let Err(e) = self.commit(next) {
            for (idx, item) in &staged {
                compensate(item, Change::Updated(&self.store[*idx]), context).await;
            }
            return Err(e);
        }
        Ok(results)
    }

    fn replace_all(&mut self, items: Vec<T>) -> Result<(), FrameworkError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate().map_err(entity_error)?;
            if !seen.insert(item.id().clone()) {
                return Err(FrameworkError::DuplicateId(item.id().to_string()));
            }
        }
        self.commit(items)?;
        self.next_seq = self.next_seq.max(next_sequence(&self.store));
        Ok(())
    }
}

async fn compensate<T: ActorEntity>(item: &T, change: Change<'_, T>, context: &T::Context) {
    if let Err(e) = item.on_commit_failed(change, context).await {
        error!(entity_type = entity_type::<T>(), id = %item.id(), error = %e, "Compensation failed");
    }
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

fn next_sequence<T: ActorEntity>(items: &[T]) -> u32 {
    items
        .iter()
        .filter_map(|item| T::sequence_of(item.id()))
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Just the type name (e.g. "Order" instead of "cafe_orders::model::order::Order").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
