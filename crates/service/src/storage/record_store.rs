use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use models::Keyed;

/// In-memory record store keyed by roll number.
///
/// Lookups go through a hash index; `list` returns records in insertion order.
/// Records are only ever appended, never replaced or removed.
pub struct RecordStore<R> {
    inner: Arc<RwLock<Inner<R>>>,
}

struct Inner<R> {
    index: HashMap<String, usize>,
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner { index: HashMap::new(), records: Vec::new() })),
        }
    }
}

impl<R> RecordStore<R>
where
    R: Keyed + Clone,
{
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All records, oldest first.
    pub async fn list(&self) -> Vec<R> {
        let inner = self.inner.read().await;
        inner.records.clone()
    }

    pub async fn get(&self, rollno: &str) -> Option<R> {
        let inner = self.inner.read().await;
        inner.index.get(rollno).map(|&i| inner.records[i].clone())
    }

    /// Append a record unless its roll number is taken; returns whether it was stored.
    /// The check and the append happen under one write lock.
    pub async fn insert_new(&self, record: R) -> bool {
        let mut inner = self.inner.write().await;
        if inner.index.contains_key(record.rollno()) {
            return false;
        }
        let pos = inner.records.len();
        inner.index.insert(record.rollno().to_string(), pos);
        inner.records.push(record);
        true
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}
