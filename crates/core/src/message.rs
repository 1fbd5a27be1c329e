//! Audit trail messages posted on records (the "chatter").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceResult;
use crate::id::MessageId;
use crate::record::RecordRef;

/// A rendered audit message attached to a record.
///
/// `body` is rich text (HTML); `links` lists the records the body points at so
/// consumers do not have to parse markup to follow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub target: RecordRef,
    pub body: String,
    pub links: Vec<RecordRef>,
    pub posted_at: DateTime<Utc>,
}

impl Message {
    pub fn new(target: RecordRef, body: impl Into<String>, links: Vec<RecordRef>) -> Self {
        Self {
            id: MessageId::new(),
            target,
            body: body.into(),
            links,
            posted_at: Utc::now(),
        }
    }

    /// Whether the message links to the given record.
    pub fn references(&self, model: &str, id: &uuid::Uuid) -> bool {
        self.links.iter().any(|l| l.model == model && &l.id == id)
    }
}

/// Append-only message log keyed by target record.
pub trait MessageLog: Send + Sync {
    /// Append a message to its target record's log.
    fn post(&self, message: Message) -> PersistenceResult<MessageId>;

    /// All messages posted on a record, oldest first.
    fn messages_for(&self, model: &str, id: &uuid::Uuid) -> PersistenceResult<Vec<Message>>;
}

impl<S> MessageLog for std::sync::Arc<S>
where
    S: MessageLog + ?Sized,
{
    fn post(&self, message: Message) -> PersistenceResult<MessageId> {
        (**self).post(message)
    }

    fn messages_for(&self, model: &str, id: &uuid::Uuid) -> PersistenceResult<Vec<Message>> {
        (**self).messages_for(model, id)
    }
}
