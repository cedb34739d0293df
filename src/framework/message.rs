//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one collection of resources. The variants map onto the standard
/// CRUD operations, plus:
///
/// - **List**: the whole collection, in stored order.
/// - **Action**: a custom [`ActorEntity::Action`] on one entity.
/// - **Batch**: several actions applied all-or-nothing. Every action runs on a staged copy;
///   if any of them fails nothing is written and nothing changes.
/// - **ReplaceAll**: swaps the entire collection after validating every record.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Batch {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
    ReplaceAll {
        items: Vec<T>,
        respond_to: Response<()>,
    },
}
