pub mod contact;
pub mod task;
pub mod transaction;

pub use contact::{Contact, ContactUpdate, CONTACT_CAPACITY, CONTACT_TEXT_MAX};
pub use task::{Task, TaskPriority, TaskStatus, TASK_CAPACITY, TASK_TEXT_MAX};
pub use transaction::{
    Summary, Transaction, TransactionKind, TRANSACTION_CAPACITY, TRANSACTION_TEXT_MAX,
};

use crate::errors::StoreError;

/// A fixed-shape entity storable in a `RecordStore` and a flat data file.
pub trait Record: Clone {
    /// Encoded size of one record in the data file, in bytes.
    const ENCODED_LEN: usize;

    /// Appends exactly `ENCODED_LEN` bytes to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decodes one record from exactly `ENCODED_LEN` bytes.
    fn decode(bytes: &[u8]) -> Result<Self, StoreError>;

    /// Text fields a search query is matched against.
    fn search_text(&self) -> Vec<&str>;
}

/// Strips line terminators from free-form input and clamps it to `max`
/// bytes on a char boundary. Applied once, at record construction time.
pub fn bounded_text(input: &str, max: usize) -> String {
    let cleaned: String = input
        .chars()
        .filter(|ch| *ch != '\n' && *ch != '\r')
        .collect();
    if cleaned.len() <= max {
        return cleaned;
    }
    let mut end = max;
    while !cleaned.is_char_boundary(end) {
        end -= 1;
    }
    cleaned[..end].to_string()
}
