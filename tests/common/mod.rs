use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use deskbook::domain::{Contact, Task, TaskPriority, Transaction, TransactionKind};
use deskbook::storage::BinStorage;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: OnceLock<Mutex<Vec<TempDir>>> = OnceLock::new();

/// Creates an isolated storage backed by a unique directory for each test.
pub fn temp_storage() -> BinStorage {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS
        .get_or_init(|| Mutex::new(Vec::new()))
        .lock()
        .expect("lock temp dir registry")
        .push(temp);

    BinStorage::new(Some(base)).expect("create binary storage")
}

pub fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn income(amount: f64, category: &str) -> Transaction {
    Transaction::new(amount, TransactionKind::Income, category, "", sample_time())
}

pub fn expense(amount: f64, category: &str) -> Transaction {
    Transaction::new(amount, TransactionKind::Expense, category, "", sample_time())
}

pub fn task(description: &str, priority: TaskPriority, due: NaiveDate) -> Task {
    Task::new(description, priority, due)
}

pub fn contact(name: &str, phone: &str, email: &str) -> Contact {
    Contact::new(name, phone, email)
}
