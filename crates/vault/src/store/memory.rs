use crate::errors::StoreError;
use crate::record::EncodingRecord;
use crate::store::RecordStore;

/// Record log held in memory; lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<EncodingRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: EncodingRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<EncodingRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn find_by_sequence_or_prefix(
        &self,
        sequence: &str,
    ) -> Result<Option<EncodingRecord>, StoreError> {
        Ok(self.records.iter().find(|r| r.matches(sequence)).cloned())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}
