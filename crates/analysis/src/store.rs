//! Storage trait and in-memory implementation.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::record::StringRecord;

/// Durable store of string records keyed by content identity.
///
/// `insert_if_absent` must behave atomically per identity: two concurrent
/// inserts of the same value may each pass through, but exactly one observes
/// `true` and exactly one record is ever persisted.
pub trait StringStore: Send + Sync {
    /// Inserts the record unless its identity already exists. Returns whether
    /// the record was inserted.
    fn insert_if_absent(&self, record: StringRecord) -> Result<bool>;

    /// Looks up a record by identity.
    fn get(&self, id: &str) -> Result<Option<StringRecord>>;

    /// Returns a snapshot of all records in insertion order.
    fn list_all(&self) -> Result<Vec<StringRecord>>;

    /// Removes a record by identity. Returns whether anything was removed.
    fn remove(&self, id: &str) -> Result<bool>;
}

/// In-memory store: an identity index over an insertion-ordered record list.
#[derive(Default)]
pub struct MemoryStringStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl MemoryStringStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStringStore {
    fn insert_if_absent(&self, record: StringRecord) -> Result<bool> {
        let mut inner = self.inner.write();
        if inner.by_id.contains_key(&record.id) {
            return Ok(false);
        }
        let index = inner.records.len();
        inner.by_id.insert(record.id.clone(), index);
        inner.records.push(record);
        Ok(true)
    }

    fn get(&self, id: &str) -> Result<Option<StringRecord>> {
        let inner = self.inner.read();
        Ok(inner.by_id.get(id).map(|&index| inner.records[index].clone()))
    }

    fn list_all(&self) -> Result<Vec<StringRecord>> {
        Ok(self.inner.read().records.clone())
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut inner = self.inner.write();
        let Some(index) = inner.by_id.remove(id) else {
            return Ok(false);
        };
        inner.records.remove(index);
        for slot in inner.by_id.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::content_address;
    use chrono::Utc;

    fn record(value: &str) -> StringRecord {
        StringRecord {
            id: content_address(value),
            value: value.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_then_get() {
        let store = MemoryStringStore::new();
        let rec = record("abc");
        assert!(store.insert_if_absent(rec.clone()).expect("insert"));
        assert_eq!(store.get(&rec.id).expect("get"), Some(rec));
    }

    #[test]
    fn second_insert_of_same_identity_is_rejected() {
        let store = MemoryStringStore::new();
        assert!(store.insert_if_absent(record("abc")).expect("insert"));
        assert!(!store.insert_if_absent(record("abc")).expect("insert"));
        assert_eq!(store.list_all().expect("list").len(), 1);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemoryStringStore::new();
        for value in ["c", "a", "b"] {
            store.insert_if_absent(record(value)).expect("insert");
        }
        let values: Vec<_> = store
            .list_all()
            .expect("list")
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, ["c", "a", "b"]);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let store = MemoryStringStore::new();
        for value in ["a", "b", "c"] {
            store.insert_if_absent(record(value)).expect("insert");
        }
        assert!(store.remove(&content_address("b")).expect("remove"));
        assert!(!store.remove(&content_address("b")).expect("remove"));
        assert_eq!(
            store.get(&content_address("c")).expect("get").map(|r| r.value),
            Some("c".to_string())
        );
        assert_eq!(store.list_all().expect("list").len(), 2);
    }

    #[test]
    fn concurrent_inserts_persist_once() {
        use std::sync::Arc;
        let store = Arc::new(MemoryStringStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert_if_absent(record("same")).expect("insert"))
            })
            .collect();
        let inserted = handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .filter(|&ok| ok)
            .count();
        assert_eq!(inserted, 1);
        assert_eq!(store.list_all().expect("list").len(), 1);
    }
}
