//! Record log and encode/decode service for helixvault.
//!
//! [`Vault`] pairs a [`helixvault_codec::Codec`] with a [`RecordStore`]:
//! every encode appends an [`EncodingRecord`], and every decode looks the
//! sequence up again to recover the original file name and MIME type.

pub mod config;
mod errors;
pub mod record;
pub mod store;
mod vault;

pub use config::{Backend, VaultConfig};
pub use errors::{ConfigError, StoreError, VaultError};
pub use record::{EncodingRecord, PREFIX_MATCH_LEN};
pub use store::{JsonLogStore, MemoryStore, RecordStore, SqliteStore};
pub use vault::{normalize_input, DecodedFile, FileInfoSource, Inspection, Vault};
