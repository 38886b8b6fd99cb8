//! Flat binary persistence for record stores.
//!
//! File layout, little-endian throughout:
//!
//! ```text
//! [u32 record_count]
//! [record_count × fixed-size record]
//! ```
//!
//! Saves replace the whole file atomically via a temp sibling and rename.
//! Loads validate the declared count against the store capacity and the
//! exact byte length before any record is decoded.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::domain::Record;
use crate::errors::StoreError;
use crate::store::RecordStore;

use super::ensure_dir;

const TMP_SUFFIX: &str = "tmp";

pub fn save_store_to_path<R: Record>(
    store: &RecordStore<R>,
    path: &Path,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut buf = Vec::with_capacity(4 + store.len() * R::ENCODED_LEN);
    buf.extend_from_slice(&(store.len() as u32).to_le_bytes());
    for record in store.records() {
        record.encode(&mut buf);
    }

    let tmp = tmp_path(path);
    write_atomic(&tmp, &buf)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), records = store.len(), "store saved");
    Ok(())
}

/// Loads a store from `path`. An absent file is a first run and yields an
/// empty store; a present-but-malformed file is `CorruptData`.
pub fn load_store_from_path<R: Record>(
    path: &Path,
    capacity: usize,
) -> Result<RecordStore<R>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(RecordStore::new(capacity));
        }
        Err(err) => return Err(err.into()),
    };
    decode_store(&bytes, capacity)
}

fn decode_store<R: Record>(bytes: &[u8], capacity: usize) -> Result<RecordStore<R>, StoreError> {
    if bytes.len() < 4 {
        return Err(StoreError::CorruptData(
            "file is shorter than the record count header".into(),
        ));
    }
    let mut header = [0u8; 4];
    header.copy_from_slice(&bytes[..4]);
    let count = u32::from_le_bytes(header) as usize;

    if count > capacity {
        return Err(StoreError::CorruptData(format!(
            "declared count {count} exceeds store capacity {capacity}"
        )));
    }
    let body = &bytes[4..];
    let expected = count * R::ENCODED_LEN;
    if body.len() != expected {
        return Err(StoreError::CorruptData(format!(
            "expected {expected} record bytes for {count} records, found {}",
            body.len()
        )));
    }

    let mut records = Vec::with_capacity(count);
    for chunk in body.chunks_exact(R::ENCODED_LEN) {
        records.push(R::decode(chunk)?);
    }
    RecordStore::from_records(records, capacity)
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
