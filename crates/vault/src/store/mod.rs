//! Append-only logs of [`EncodingRecord`]s.
//!
//! Records are kept in insertion order and never updated or removed. Lookups
//! return the first record that matches.

mod json;
mod memory;
mod sqlite;

pub use json::JsonLogStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::StoreError;
use crate::record::EncodingRecord;

/// Repository interface over the record log.
pub trait RecordStore {
    fn append(&mut self, record: EncodingRecord) -> Result<(), StoreError>;

    /// All records, oldest first.
    fn records(&self) -> Result<Vec<EncodingRecord>, StoreError>;

    /// First record whose sequence equals `sequence` or starts with its
    /// first 100 characters.
    fn find_by_sequence_or_prefix(
        &self,
        sequence: &str,
    ) -> Result<Option<EncodingRecord>, StoreError> {
        Ok(self.records()?.into_iter().find(|r| r.matches(sequence)))
    }

    fn find_by_id(&self, id: &str) -> Result<Option<EncodingRecord>, StoreError> {
        Ok(self.records()?.into_iter().find(|r| r.id == id))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records()?.len())
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn append(&mut self, record: EncodingRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn records(&self) -> Result<Vec<EncodingRecord>, StoreError> {
        (**self).records()
    }

    fn find_by_sequence_or_prefix(
        &self,
        sequence: &str,
    ) -> Result<Option<EncodingRecord>, StoreError> {
        (**self).find_by_sequence_or_prefix(sequence)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<EncodingRecord>, StoreError> {
        (**self).find_by_id(id)
    }

    fn len(&self) -> Result<usize, StoreError> {
        (**self).len()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use helixvault_codec::{Codec, RedundancyLevel};

    use super::RecordStore;
    use crate::record::EncodingRecord;

    pub fn record(bytes: &[u8], name: &str) -> EncodingRecord {
        let level = RedundancyLevel::new(1).unwrap();
        let seq = Codec::default().encode(bytes, level);
        EncodingRecord::new(name, "application/octet-stream", bytes.len(), seq, level, Duration::ZERO)
    }

    /// Shared behavior every backend must show.
    pub fn exercise_store<S: RecordStore>(store: &mut S) {
        assert!(store.is_empty().unwrap());

        let long: Vec<u8> = (0..64).collect();
        let first = record(&long, "first.bin");
        let mut second = record(&long, "second.bin");
        second.id = "second".into();
        let third = record(b"H", "h.txt");

        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.append(third.clone()).unwrap();

        let all = store.records().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].original_name, "first.bin");
        assert_eq!(all[2].original_name, "h.txt");

        // Duplicate sequences: the first inserted wins.
        let found = store.find_by_sequence_or_prefix(&first.sequence).unwrap();
        assert_eq!(found.unwrap().original_name, "first.bin");

        // Prefix match on the first 100 characters.
        let mut altered = first.sequence[..100].to_string();
        altered.push_str("CCCC");
        let found = store.find_by_sequence_or_prefix(&altered).unwrap();
        assert_eq!(found.unwrap().original_name, "first.bin");

        let found = store.find_by_sequence_or_prefix("TAGAAAAA").unwrap();
        assert_eq!(found.unwrap().original_name, "h.txt");

        assert!(store.find_by_sequence_or_prefix("GCGCGCGC").unwrap().is_none());

        assert_eq!(
            store.find_by_id("second").unwrap().unwrap().original_name,
            "second.bin"
        );
        assert!(store.find_by_id("missing").unwrap().is_none());
    }
}
