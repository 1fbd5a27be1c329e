//! In-memory record storage for tests/dev.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use fieldservice_core::{Entity, PersistenceError, PersistenceResult};

/// In-memory table of records keyed by their identifier.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryRecordStore<E: Entity> {
    inner: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> InMemoryRecordStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Entity> Default for InMemoryRecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryRecordStore<E>
where
    E: Entity + Clone,
    E::Id: Display,
{
    fn read(&self) -> PersistenceResult<RwLockReadGuard<'_, HashMap<E::Id, E>>> {
        self.inner
            .read()
            .map_err(|_| PersistenceError::unavailable(format!("{} store lock poisoned", E::MODEL)))
    }

    fn write(&self) -> PersistenceResult<RwLockWriteGuard<'_, HashMap<E::Id, E>>> {
        self.inner
            .write()
            .map_err(|_| PersistenceError::unavailable(format!("{} store lock poisoned", E::MODEL)))
    }

    pub fn get(&self, id: &E::Id) -> PersistenceResult<E> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| PersistenceError::not_found(E::MODEL, id))
    }

    /// Insert or replace a record.
    pub fn upsert(&self, record: E) -> PersistenceResult<()> {
        self.write()?.insert(record.id().clone(), record);
        Ok(())
    }

    /// Insert a record unless another record already has the same `key`.
    ///
    /// Records whose key is `None` never conflict. The check and the insert
    /// happen under one write lock.
    pub fn insert_unique<K, F>(&self, record: E, field: &'static str, key: F) -> PersistenceResult<E>
    where
        K: PartialEq + Display,
        F: Fn(&E) -> Option<K>,
    {
        let mut map = self.write()?;
        if let Some(k) = key(&record) {
            if map.values().any(|existing| key(existing).as_ref() == Some(&k)) {
                return Err(PersistenceError::UniqueViolation {
                    model: E::MODEL,
                    field,
                    value: k.to_string(),
                });
            }
        }
        map.insert(record.id().clone(), record.clone());
        Ok(record)
    }

    /// Apply `f` to the stored record and return the updated copy.
    pub fn update<F>(&self, id: &E::Id, f: F) -> PersistenceResult<E>
    where
        F: FnOnce(&mut E),
    {
        let mut map = self.write()?;
        let record = map
            .get_mut(id)
            .ok_or_else(|| PersistenceError::not_found(E::MODEL, id))?;
        f(record);
        Ok(record.clone())
    }

    /// All records matching `predicate`, in no particular order.
    pub fn filter<P>(&self, predicate: P) -> PersistenceResult<Vec<E>>
    where
        P: Fn(&E) -> bool,
    {
        Ok(self.read()?.values().filter(|r| predicate(r)).cloned().collect())
    }

    pub fn len(&self) -> PersistenceResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> PersistenceResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: u32,
        code: Option<&'static str>,
    }

    impl Entity for Row {
        type Id = u32;
        const MODEL: &'static str = "test.row";

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn get_missing_record_is_not_found() {
        let store = InMemoryRecordStore::<Row>::new();
        assert_eq!(
            store.get(&7),
            Err(PersistenceError::not_found("test.row", 7))
        );
    }

    #[test]
    fn insert_unique_rejects_duplicate_key() {
        let store = InMemoryRecordStore::<Row>::new();
        store.insert_unique(Row { id: 1, code: Some("a") }, "code", |r| r.code).unwrap();

        let err = store
            .insert_unique(Row { id: 2, code: Some("a") }, "code", |r| r.code)
            .unwrap_err();
        assert!(matches!(err, PersistenceError::UniqueViolation { field: "code", .. }));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn insert_unique_ignores_unset_keys() {
        let store = InMemoryRecordStore::<Row>::new();
        store.insert_unique(Row { id: 1, code: None }, "code", |r| r.code).unwrap();
        store.insert_unique(Row { id: 2, code: None }, "code", |r| r.code).unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn update_returns_the_modified_record() {
        let store = InMemoryRecordStore::<Row>::new();
        store.upsert(Row { id: 1, code: None }).unwrap();

        let updated = store.update(&1, |r| r.code = Some("b")).unwrap();
        assert_eq!(updated.code, Some("b"));
        assert_eq!(store.get(&1).unwrap(), updated);
    }

    #[test]
    fn filter_selects_matching_records() {
        let store = InMemoryRecordStore::<Row>::new();
        store.upsert(Row { id: 1, code: Some("a") }).unwrap();
        store.upsert(Row { id: 2, code: None }).unwrap();

        let rows = store.filter(|r| r.code.is_some()).unwrap();
        assert_eq!(rows, vec![Row { id: 1, code: Some("a") }]);
    }
}
