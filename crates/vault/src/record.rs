use std::time::Duration;

use chrono::{DateTime, Utc};
use helixvault_codec::{RedundancyLevel, SymbolSequence};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of leading characters compared by the prefix lookup.
pub const PREFIX_MATCH_LEN: usize = 100;

/// The first [`PREFIX_MATCH_LEN`] characters of `sequence`.
pub fn lookup_prefix(sequence: &str) -> &str {
    match sequence.char_indices().nth(PREFIX_MATCH_LEN) {
        Some((at, _)) => &sequence[..at],
        None => sequence,
    }
}

/// Log entry written after every successful encode.
///
/// Field names follow the JSON layout of the browser log, so an exported
/// browser log can be read directly. Fields missing from such a log fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingRecord {
    pub id: String,
    pub sequence: String,
    #[serde(rename = "originalFileName")]
    pub original_name: String,
    #[serde(rename = "fileSize")]
    pub original_len: u64,
    #[serde(rename = "fileType")]
    pub mime_type: String,
    #[serde(default)]
    pub level: RedundancyLevel,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub compression_ratio: f64,
    #[serde(default, rename = "encodingTime", deserialize_with = "non_negative_ms")]
    pub encoding_ms: u64,
    pub timestamp: DateTime<Utc>,
}

/// Browser logs can carry negative encoding times; they read as 0.
fn non_negative_ms<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = i64::deserialize(deserializer)?;
    Ok(ms.max(0) as u64)
}

impl EncodingRecord {
    /// Build a record for a freshly encoded file, stamped with the current time.
    pub fn new(
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        original_len: usize,
        sequence: SymbolSequence,
        level: RedundancyLevel,
        elapsed: Duration,
    ) -> Self {
        let timestamp = Utc::now();
        let compression_ratio = original_len as f64 / sequence.len() as f64;
        Self {
            id: timestamp.timestamp_millis().to_string(),
            checksum: sequence.checksum().to_string(),
            sequence: sequence.into_string(),
            original_name: original_name.into(),
            original_len: original_len as u64,
            mime_type: mime_type.into(),
            level,
            compression_ratio,
            encoding_ms: elapsed.as_millis() as u64,
            timestamp,
        }
    }

    /// Exact match, or the stored sequence starts with the first
    /// [`PREFIX_MATCH_LEN`] characters of `sequence`.
    pub fn matches(&self, sequence: &str) -> bool {
        self.sequence == sequence || self.sequence.starts_with(lookup_prefix(sequence))
    }

    /// ISO-8601 timestamp in the form the browser wrote it.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helixvault_codec::Codec;

    fn record_for(bytes: &[u8], name: &str) -> EncodingRecord {
        let level = RedundancyLevel::new(1).unwrap();
        let seq = Codec::default().encode(bytes, level);
        EncodingRecord::new(name, "text/plain", bytes.len(), seq, level, Duration::from_millis(3))
    }

    #[test]
    fn test_new_fills_derived_fields() {
        let rec = record_for(b"H", "h.txt");
        assert_eq!(rec.sequence, "TAGAAAAA");
        assert_eq!(rec.checksum, "AAAA");
        assert_eq!(rec.original_len, 1);
        assert!((rec.compression_ratio - 0.125).abs() < 1e-12);
        assert_eq!(rec.encoding_ms, 3);
        assert_eq!(rec.id, rec.timestamp.timestamp_millis().to_string());
    }

    #[test]
    fn test_encoding_time_round_trips() {
        let rec = record_for(b"H", "h.txt");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"encodingTime\":3"));
        let back: EncodingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.encoding_ms, 3);
    }

    #[test]
    fn test_lookup_prefix() {
        let long = "A".repeat(250);
        assert_eq!(lookup_prefix(&long).len(), PREFIX_MATCH_LEN);
        assert_eq!(lookup_prefix("TAGA"), "TAGA");
    }

    #[test]
    fn test_matches_exact_and_prefix() {
        let bytes: Vec<u8> = (0..64).collect();
        let rec = record_for(&bytes, "bytes.bin");
        assert!(rec.matches(&rec.sequence));

        // Same first 100 characters, different tail.
        let mut altered = rec.sequence[..PREFIX_MATCH_LEN].to_string();
        altered.push_str("GGGG");
        assert!(rec.matches(&altered));

        assert!(!rec.matches("CCCCCCCC"));
    }

    #[test]
    fn test_reads_browser_layout() {
        let json = r#"{
            "id": "1700000000000",
            "sequence": "TAGAAAAA",
            "originalFileName": "hello.txt",
            "fileSize": 1,
            "fileType": "text/plain",
            "encodingTime": -1,
            "compressionRatio": 0.125,
            "checksum": "AAAA",
            "timestamp": "2023-11-14T22:13:20.000Z",
            "transactionId": "0.0.1234@1700000000000",
            "nftId": "NFT-abc"
        }"#;
        let rec: EncodingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.original_name, "hello.txt");
        assert_eq!(rec.level, RedundancyLevel::default());
        assert_eq!(rec.encoding_ms, 0);
        assert_eq!(rec.timestamp_iso(), "2023-11-14T22:13:20.000Z");
    }
}
