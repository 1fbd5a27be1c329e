//! In-memory audit message log.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use fieldservice_core::{Message, MessageId, MessageLog, PersistenceError, PersistenceResult};

/// Messages grouped by target record, in posting order.
#[derive(Debug, Default)]
pub struct InMemoryMessageLog {
    inner: RwLock<HashMap<(String, Uuid), Vec<Message>>>,
}

impl InMemoryMessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of messages across all records.
    pub fn len(&self) -> PersistenceResult<usize> {
        let map = self
            .inner
            .read()
            .map_err(|_| PersistenceError::unavailable("message log lock poisoned"))?;
        Ok(map.values().map(Vec::len).sum())
    }

    pub fn is_empty(&self) -> PersistenceResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl MessageLog for InMemoryMessageLog {
    fn post(&self, message: Message) -> PersistenceResult<MessageId> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| PersistenceError::unavailable("message log lock poisoned"))?;
        let id = message.id;
        map.entry((message.target.model.to_string(), message.target.id))
            .or_default()
            .push(message);
        Ok(id)
    }

    fn messages_for(&self, model: &str, id: &Uuid) -> PersistenceResult<Vec<Message>> {
        let map = self
            .inner
            .read()
            .map_err(|_| PersistenceError::unavailable("message log lock poisoned"))?;
        Ok(map
            .get(&(model.to_string(), *id))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldservice_core::RecordRef;

    #[test]
    fn messages_are_kept_per_target_in_order() {
        let log = InMemoryMessageLog::new();
        let order = RecordRef::new("sale.order", Uuid::now_v7(), "S00001");
        let other = RecordRef::new("sale.order", Uuid::now_v7(), "S00002");

        log.post(Message::new(order.clone(), "first", vec![])).unwrap();
        log.post(Message::new(other.clone(), "elsewhere", vec![])).unwrap();
        log.post(Message::new(order.clone(), "second", vec![])).unwrap();

        let bodies: Vec<String> = log
            .messages_for("sale.order", &order.id)
            .unwrap()
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, vec!["first", "second"]);
        assert_eq!(log.len().unwrap(), 3);
    }

    #[test]
    fn same_id_on_another_model_is_a_different_target() {
        let log = InMemoryMessageLog::new();
        let id = Uuid::now_v7();
        log.post(Message::new(RecordRef::new("sale.order", id, "S"), "x", vec![]))
            .unwrap();

        assert!(log.messages_for("fsm.recurring", &id).unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_is_reported_as_unavailable() {
        let log = std::sync::Arc::new(InMemoryMessageLog::new());
        let poisoner = log.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(log.len(), Err(PersistenceError::Unavailable(_))));
        assert!(matches!(log.is_empty(), Err(PersistenceError::Unavailable(_))));
        assert!(matches!(
            log.messages_for("sale.order", &Uuid::now_v7()),
            Err(PersistenceError::Unavailable(_))
        ));
    }
}
