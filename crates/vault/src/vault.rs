use std::time::Instant;

use helixvault_codec::{Codec, Composition, FileKind, RedundancyLevel};
use tracing::{debug, info};

use crate::errors::VaultError;
use crate::record::EncodingRecord;
use crate::store::RecordStore;

/// Where the name and MIME type of a decoded file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileInfoSource {
    /// A stored record matched the sequence.
    Record { id: String },
    /// The header bits matched one of the sniffer's patterns.
    Sniffed(FileKind),
    /// Nothing matched.
    Fallback,
}

/// A decoded file, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub source: FileInfoSource,
}

/// Summary of a sequence without decoding it to a file.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub sequence: String,
    pub length: usize,
    pub checksum_valid: bool,
    pub composition: Composition,
    pub record: Option<EncodingRecord>,
}

/// Trim and uppercase user input. `None` when nothing is left.
pub fn normalize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Encode/decode front end over a record log.
pub struct Vault<S: RecordStore> {
    codec: Codec,
    store: S,
}

impl<S: RecordStore> Vault<S> {
    pub fn new(codec: Codec, store: S) -> Self {
        Self { codec, store }
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Encode a file and append its record to the log.
    ///
    /// Nothing is returned if the append fails; the caller never sees a
    /// record that is not in the log.
    pub fn encode_file(
        &mut self,
        name: &str,
        mime_type: &str,
        bytes: &[u8],
        level: RedundancyLevel,
    ) -> Result<EncodingRecord, VaultError> {
        let start = Instant::now();
        let sequence = self.codec.encode(bytes, level);
        let record = EncodingRecord::new(name, mime_type, bytes.len(), sequence, level, start.elapsed());

        self.store.append(record.clone())?;
        info!(
            id = %record.id,
            name,
            bytes = bytes.len(),
            symbols = record.sequence.len(),
            %level,
            "encoded file"
        );
        Ok(record)
    }

    /// Decode user input and recover the file's name and type.
    ///
    /// Blank input is a no-op and yields `Ok(None)`. The log is only read.
    pub fn decode_input(&self, input: &str) -> Result<Option<DecodedFile>, VaultError> {
        let Some(sequence) = normalize_input(input) else {
            debug!("blank decode input, nothing to do");
            return Ok(None);
        };

        let decoded = self.codec.decode_detailed(&sequence)?;

        let (name, mime_type, source) = match self.store.find_by_sequence_or_prefix(&sequence)? {
            Some(record) => (
                record.original_name,
                record.mime_type,
                FileInfoSource::Record { id: record.id },
            ),
            None => {
                let kind = decoded.kind();
                let source = match kind {
                    FileKind::Unknown => FileInfoSource::Fallback,
                    kind => FileInfoSource::Sniffed(kind),
                };
                (kind.default_name().to_string(), kind.mime_type().to_string(), source)
            }
        };
        debug!(name, mime_type, ?source, bytes = decoded.bytes.len(), "decoded sequence");

        Ok(Some(DecodedFile {
            name,
            mime_type,
            bytes: decoded.bytes,
            source,
        }))
    }

    /// Length, checksum validity and composition of user input.
    pub fn inspect(&self, input: &str) -> Result<Option<Inspection>, VaultError> {
        let Some(sequence) = normalize_input(input) else {
            return Ok(None);
        };
        let record = self.store.find_by_sequence_or_prefix(&sequence)?;
        Ok(Some(Inspection {
            length: sequence.chars().count(),
            checksum_valid: self.codec.verify(&sequence),
            composition: Composition::of(&sequence),
            record,
            sequence,
        }))
    }

    pub fn records(&self) -> Result<Vec<EncodingRecord>, VaultError> {
        Ok(self.store.records()?)
    }

    pub fn find_record(&self, id: &str) -> Result<Option<EncodingRecord>, VaultError> {
        Ok(self.store.find_by_id(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use helixvault_codec::CodecError;

    fn vault() -> Vault<MemoryStore> {
        Vault::new(Codec::default(), MemoryStore::new())
    }

    fn level(l: u8) -> RedundancyLevel {
        RedundancyLevel::new(l).unwrap()
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  tagaaaaa\n"), Some("TAGAAAAA".to_string()));
        assert_eq!(normalize_input(" \t\n"), None);
        assert_eq!(normalize_input(""), None);
    }

    #[test]
    fn test_encode_logs_record() {
        let mut vault = vault();
        let record = vault.encode_file("h.txt", "text/plain", b"H", level(1)).unwrap();
        assert_eq!(record.sequence, "TAGAAAAA");
        assert_eq!(vault.records().unwrap(), vec![record]);
    }

    #[test]
    fn test_decode_recovers_info_from_record() {
        let mut vault = vault();
        let record = vault.encode_file("h.txt", "text/plain", b"H", level(1)).unwrap();

        let decoded = vault.decode_input(" tagaaaaa ").unwrap().unwrap();
        assert_eq!(decoded.bytes, b"H".to_vec());
        assert_eq!(decoded.name, "h.txt");
        assert_eq!(decoded.mime_type, "text/plain");
        assert_eq!(decoded.source, FileInfoSource::Record { id: record.id });
    }

    #[test]
    fn test_decode_without_record_falls_back() {
        let decoded = vault().decode_input("TAGAAAAA").unwrap().unwrap();
        assert_eq!(decoded.name, "decoded_file");
        assert_eq!(decoded.mime_type, "application/octet-stream");
        assert_eq!(decoded.source, FileInfoSource::Fallback);
    }

    #[test]
    fn test_decode_sniffs_jpeg_like_header() {
        // The header 0xFF 0xD8 0x9F 0xE8 is "CCCCC TGAGT CCC GG A" in runs.
        // A run of n equal symbols folds to ceil(n / 2), so double each run.
        let data = "CCCCCCCCCCTGAGTCCCCCCGGGGA";
        let suffix = Codec::default().checksum.suffix(data);
        let decoded = vault()
            .decode_input(&format!("{data}{suffix}"))
            .unwrap()
            .unwrap();
        assert_eq!(decoded.source, FileInfoSource::Sniffed(FileKind::Jpeg));
        assert_eq!(decoded.name, "decoded_image.jpg");
        assert_eq!(decoded.mime_type, "image/jpeg");
    }

    #[test]
    fn test_blank_input_is_noop() {
        assert!(vault().decode_input("   ").unwrap().is_none());
        assert!(vault().inspect("").unwrap().is_none());
    }

    #[test]
    fn test_checksum_mismatch_surfaces() {
        let err = vault().decode_input("TAGATTTT").unwrap_err();
        assert!(matches!(err, VaultError::Codec(CodecError::ChecksumMismatch(_))));
        assert!(err.to_string().starts_with("Failed to decode"));
    }

    #[test]
    fn test_failed_decode_leaves_log_untouched() {
        let mut vault = vault();
        vault.encode_file("h.txt", "text/plain", b"H", level(1)).unwrap();
        assert!(vault.decode_input("GGG").is_err());
        assert_eq!(vault.records().unwrap().len(), 1);
    }

    #[test]
    fn test_inspect() {
        let mut vault = vault();
        vault.encode_file("h.txt", "text/plain", b"H", level(1)).unwrap();
        let report = vault.inspect("TAGAAAAA").unwrap().unwrap();
        assert_eq!(report.length, 8);
        assert!(report.checksum_valid);
        assert_eq!(report.record.unwrap().original_name, "h.txt");

        let bad = vault.inspect("TAGATTTT").unwrap().unwrap();
        assert!(!bad.checksum_valid);
    }
}
