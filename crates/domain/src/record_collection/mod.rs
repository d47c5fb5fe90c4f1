//! Ordered record storage with a case-insensitive name index.
//!
//! `RecordCollection` keeps two views over the same set of record handles:
//!   - `records`: insertion order, used for positional access and iteration
//!   - `name_index`: lowercased name → records sharing that name
//!
//! Both are updated together on every mutation. Identity is handle identity
//! (`Rc::ptr_eq`), so the same record added twice occupies two slots.
//!
//! The index key is the name read when the record was indexed. Renaming a
//! member through its handle leaves `records_by_name` stale for that record
//! until `clear_records_by_name` or `reindex` rebuilds the index from current
//! names.

mod cursor;

pub use cursor::Cursor;

use crate::errors::DomainError;
use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

/// Anything that can be grouped by owner name.
pub trait Record {
    fn name(&self) -> &str;
}

/// Shared handle to a record held by a [`RecordCollection`].
pub type RecordRef<R> = Rc<RefCell<R>>;

type Bucket<R> = SmallVec<[RecordRef<R>; 2]>;

#[inline]
fn index_key(name: &str) -> CompactString {
    CompactString::from(name.to_lowercase())
}

#[inline]
fn current_key<R: Record + ?Sized>(record: &RecordRef<R>) -> CompactString {
    index_key(record.borrow().name())
}

#[derive(Debug)]
pub struct RecordCollection<R: Record + ?Sized> {
    records: Vec<RecordRef<R>>,
    name_index: HashMap<CompactString, Bucket<R>, FxBuildHasher>,
}

impl<R: Record + ?Sized> RecordCollection<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            name_index: HashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            name_index: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Append `record` and index it under its current name.
    pub fn add(&mut self, record: RecordRef<R>) {
        let key = current_key(&record);
        trace!(name = %key, position = self.records.len(), "Adding record");

        self.name_index
            .entry(key)
            .or_default()
            .push(Rc::clone(&record));
        self.records.push(record);
    }

    /// Remove the first occurrence of this exact handle.
    ///
    /// Fails with [`DomainError::RecordNotFound`] when the handle is not a
    /// member; the collection is left unchanged in that case.
    pub fn remove(&mut self, record: &RecordRef<R>) -> Result<(), DomainError> {
        let position = self
            .records
            .iter()
            .position(|r| Rc::ptr_eq(r, record))
            .ok_or(DomainError::RecordNotFound)?;

        let removed = self.records.remove(position);
        self.remove_from_index(&removed);

        debug!(position, remaining = self.records.len(), "Removed record");
        Ok(())
    }

    fn remove_from_index(&mut self, record: &RecordRef<R>) {
        let key = current_key(record);
        if self.remove_from_bucket(&key, record) {
            return;
        }

        // Renamed since indexing: the handle sits under its old key.
        let stale_key = self
            .name_index
            .iter()
            .find(|(_, bucket)| bucket.iter().any(|r| Rc::ptr_eq(r, record)))
            .map(|(k, _)| k.clone());

        if let Some(stale_key) = stale_key {
            debug!(indexed = %stale_key, current = %key, "Removed record from stale bucket");
            self.remove_from_bucket(&stale_key, record);
        }
    }

    fn remove_from_bucket(&mut self, key: &str, record: &RecordRef<R>) -> bool {
        let Some(bucket) = self.name_index.get_mut(key) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|r| Rc::ptr_eq(r, record)) else {
            return false;
        };

        bucket.remove(position);
        if bucket.is_empty() {
            self.name_index.remove(key);
        }
        true
    }

    /// Whether this exact handle is a member.
    pub fn contains_instance(&self, record: &RecordRef<R>) -> bool {
        self.records.iter().any(|r| Rc::ptr_eq(r, record))
    }

    /// Records indexed under `name`, compared case-insensitively.
    pub fn records_by_name(&self, name: &str) -> &[RecordRef<R>] {
        self.name_index
            .get(name.to_lowercase().as_str())
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Owned copy of [`records_by_name`](Self::records_by_name).
    pub fn get_records_by_name(&self, name: &str) -> Vec<RecordRef<R>> {
        self.records_by_name(name).to_vec()
    }

    pub fn first_by_name(&self, name: &str) -> Option<&RecordRef<R>> {
        self.records_by_name(name).first()
    }

    pub fn get_record_by_index(&self, index: usize) -> Result<&RecordRef<R>, DomainError> {
        self.records
            .get(index)
            .ok_or(DomainError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            })
    }

    /// Remove every member whose current name matches `name`
    /// case-insensitively. Returns the number of records removed.
    ///
    /// Names are re-read from the records rather than taken from the index,
    /// and the index is rebuilt from the survivors.
    pub fn clear_records_by_name(&mut self, name: &str) -> usize {
        let target = name.to_lowercase();
        let before = self.records.len();

        self.records
            .retain(|r| r.borrow().name().to_lowercase() != target);
        self.reindex();

        let removed = before - self.records.len();
        debug!(name = %target, removed, "Cleared records by name");
        removed
    }

    /// Rebuild the name index from the current name of every member.
    pub fn reindex(&mut self) {
        self.name_index.clear();
        for record in &self.records {
            self.name_index
                .entry(current_key(record))
                .or_default()
                .push(Rc::clone(record));
        }
    }

    pub fn clear(&mut self) {
        debug!(removed = self.records.len(), "Clearing record collection");
        self.records.clear();
        self.name_index.clear();
    }

    /// Distinct lowercased names currently indexed, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.name_index.keys().map(CompactString::as_str)
    }

    pub fn get_names(&self) -> Vec<String> {
        self.names().map(str::to_string).collect()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RecordRef<R>> {
        self.records.iter()
    }

    /// Detached position cursor over this collection.
    pub fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record + PartialEq + ?Sized> RecordCollection<R> {
    /// Membership test. `strict` compares handle identity, otherwise record
    /// values are compared with `PartialEq`.
    pub fn contains(&self, record: &RecordRef<R>, strict: bool) -> bool {
        if strict {
            return self.contains_instance(record);
        }

        let needle = record.borrow();
        self.records
            .iter()
            .any(|r| Rc::ptr_eq(r, record) || *r.borrow() == *needle)
    }
}

impl<R: Record + ?Sized> Default for RecordCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + ?Sized> Extend<RecordRef<R>> for RecordCollection<R> {
    fn extend<I: IntoIterator<Item = RecordRef<R>>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl<R: Record + ?Sized> FromIterator<RecordRef<R>> for RecordCollection<R> {
    fn from_iter<I: IntoIterator<Item = RecordRef<R>>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<'a, R: Record + ?Sized> IntoIterator for &'a RecordCollection<R> {
    type Item = &'a RecordRef<R>;
    type IntoIter = std::slice::Iter<'a, RecordRef<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
