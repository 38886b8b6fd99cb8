pub mod codec;

use crate::domain::Record;
use crate::errors::StoreError;

/// 1-based position of a record within its store. Not stable across deletes
/// of lower-numbered records.
pub type RecordId = usize;

/// Bounded, ordered, in-memory collection of fixed-shape records.
///
/// Insertion order is the canonical order; views produced by
/// [`RecordStore::sorted_view`] never reorder the store itself.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    capacity: usize,
}

impl<R: Record> RecordStore<R> {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Builds a store from already-decoded records, e.g. when loading a data
    /// file. Fails if the records exceed the declared capacity.
    pub fn from_records(records: Vec<R>, capacity: usize) -> Result<Self, StoreError> {
        if records.len() > capacity {
            return Err(StoreError::CapacityExceeded { capacity });
        }
        Ok(Self { records, capacity })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Appends a record and returns its 1-based id. Fails without mutating
    /// the store when it is already at capacity.
    pub fn add(&mut self, record: R) -> Result<RecordId, StoreError> {
        if self.records.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(self.records.len())
    }

    pub fn get(&self, id: RecordId) -> Result<&R, StoreError> {
        let index = self.index_of(id)?;
        Ok(&self.records[index])
    }

    /// Applies `mutator` to the record identified by `id`. Partial-field
    /// semantics (leave-blank-to-keep) belong to the caller; the store only
    /// guarantees the id is validated before any mutation happens.
    pub fn update<F>(&mut self, id: RecordId, mutator: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut R),
    {
        let index = self.index_of(id)?;
        mutator(&mut self.records[index]);
        Ok(())
    }

    /// Removes the record at `id` and returns it. Subsequent records shift
    /// down one position, so their ids drop by one.
    pub fn delete(&mut self, id: RecordId) -> Result<R, StoreError> {
        let index = self.index_of(id)?;
        Ok(self.records.remove(index))
    }

    /// Iterates the store in insertion order, pairing each record with its
    /// current 1-based id.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &R)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record))
    }

    /// Returns a copy of the records ordered ascending by `key`. Ties keep
    /// their relative insertion order; the store itself is untouched.
    pub fn sorted_view<K, F>(&self, key: F) -> Vec<R>
    where
        K: Ord,
        F: Fn(&R) -> K,
    {
        let mut view = self.records.clone();
        view.sort_by_key(|record| key(record));
        view
    }

    /// Linear scan for records whose searchable text fields contain `query`
    /// as a case-sensitive substring, in store order with original ids.
    pub fn search(&self, query: &str) -> Vec<(RecordId, &R)> {
        self.iter()
            .filter(|(_, record)| {
                record
                    .search_text()
                    .iter()
                    .any(|field| field.contains(query))
            })
            .collect()
    }

    /// Single linear pass folding every record into an aggregate.
    pub fn summarize<A, F>(&self, init: A, fold: F) -> A
    where
        F: FnMut(A, &R) -> A,
    {
        self.records.iter().fold(init, fold)
    }

    fn index_of(&self, id: RecordId) -> Result<usize, StoreError> {
        if id < 1 || id > self.records.len() {
            return Err(StoreError::NotFound(id));
        }
        Ok(id - 1)
    }
}
