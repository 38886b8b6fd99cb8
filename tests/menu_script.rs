//! Full menu sessions driven by scripted line input.

mod common;

use std::io::Cursor;

use common::{sample_time, temp_storage};
use deskbook::cli::io::Console;
use deskbook::cli::menus::{contact_menu, money_menu, task_menu};
use deskbook::clock::FixedClock;
use deskbook::config::Config;
use deskbook::domain::{
    Contact, Summary, Task, TaskStatus, Transaction, TransactionKind, CONTACT_CAPACITY,
    TASK_CAPACITY, TRANSACTION_CAPACITY,
};
use deskbook::storage::{CONTACTS_FILE, MONEY_FILE, TASKS_FILE};
use deskbook::store::RecordStore;

fn console(script: &str) -> Console<Cursor<Vec<u8>>> {
    Console::new(Cursor::new(script.as_bytes().to_vec()))
}

#[test]
fn money_session_adds_views_and_saves() {
    let storage = temp_storage();
    let config = Config::default();
    let clock = FixedClock(sample_time());
    let mut store = RecordStore::new(TRANSACTION_CAPACITY);

    let script = "1\n1\n100\nSalary\nJuly pay\n\
                  1\n2\n40\nGroceries\nweekly shop\n\
                  2\n3\n4\n";
    let mut console = console(script);
    money_menu::run(&mut store, &storage, &mut console, &clock, &config).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).unwrap().kind, TransactionKind::Income);
    assert_eq!(Summary::of(&store).net(), 60.0);

    let saved: RecordStore<Transaction> = storage.load(MONEY_FILE, TRANSACTION_CAPACITY).unwrap();
    assert_eq!(saved.records(), store.records());
}

#[test]
fn view_survives_a_bad_timestamp_format_in_config() {
    let storage = temp_storage();
    let mut config = Config::default();
    config.timestamp_format = "%Q".into();
    let clock = FixedClock(sample_time());
    let mut store = RecordStore::new(TRANSACTION_CAPACITY);

    // The user-edited format must not crash "View All Transactions".
    let script = "1\n1\n100\nSalary\nJuly pay\n2\n4\n";
    let mut console = console(script);
    money_menu::run(&mut store, &storage, &mut console, &clock, &config).unwrap();

    assert_eq!(store.len(), 1);
}

#[test]
fn money_rejects_invalid_transaction_type_without_mutating() {
    let storage = temp_storage();
    let config = Config::default();
    let clock = FixedClock(sample_time());
    let mut store = RecordStore::new(TRANSACTION_CAPACITY);

    // Type 5 is not a valid kind; the add aborts and the menu resumes.
    let mut console = console("1\n5\n4\n");
    money_menu::run(&mut store, &storage, &mut console, &clock, &config).unwrap();

    assert!(store.is_empty());
}

#[test]
fn invalid_menu_input_reprompts_instead_of_crashing() {
    let storage = temp_storage();
    let config = Config::default();
    let clock = FixedClock(sample_time());
    let mut store = RecordStore::new(TRANSACTION_CAPACITY);

    let mut console = console("abc\n9\n4\n");
    money_menu::run(&mut store, &storage, &mut console, &clock, &config).unwrap();

    assert!(store.is_empty());
    assert!(storage.data_path(MONEY_FILE).exists(), "exit still saves");
}

#[test]
fn task_session_adds_then_updates_status() {
    let storage = temp_storage();
    let mut store = RecordStore::new(TASK_CAPACITY);

    let script = "1\nwrite report\n3\n2024-06-15\n\
                  2\n1\n3\n\
                  3\n4\n";
    let mut console = console(script);
    task_menu::run(&mut store, &storage, &mut console).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().status, TaskStatus::Completed);

    let saved: RecordStore<Task> = storage.load(TASKS_FILE, TASK_CAPACITY).unwrap();
    assert_eq!(saved.records(), store.records());
}

#[test]
fn task_add_aborts_on_malformed_due_date() {
    let storage = temp_storage();
    let mut store = RecordStore::new(TASK_CAPACITY);

    let mut console = console("1\ncall the bank\n2\nnext tuesday\n4\n");
    task_menu::run(&mut store, &storage, &mut console).unwrap();

    assert!(store.is_empty(), "bad date must abort the add");
}

#[test]
fn contact_session_updates_partially_and_deletes_with_confirmation() {
    let storage = temp_storage();
    let config = Config::default();
    let mut store = RecordStore::new(CONTACT_CAPACITY);

    let script = "1\nAlice\n555-1\na@x.com\n\
                  1\nBob\n555-2\nb@x.com\n\
                  4\n1\n\n555-9\n\n\
                  5\n2\ny\n\
                  6\n";
    let mut console = console(script);
    contact_menu::run(&mut store, &storage, &mut console, &config).unwrap();

    assert_eq!(store.len(), 1);
    let alice = store.get(1).unwrap();
    assert_eq!(alice.name, "Alice", "blank entry keeps the old name");
    assert_eq!(alice.phone, "555-9", "provided entry overwrites the phone");
    assert_eq!(alice.email, "a@x.com", "blank entry keeps the old email");

    let saved: RecordStore<Contact> = storage.load(CONTACTS_FILE, CONTACT_CAPACITY).unwrap();
    assert_eq!(saved.records(), store.records());
}

#[test]
fn declined_confirmation_cancels_the_delete() {
    let storage = temp_storage();
    let config = Config::default();
    let mut store = RecordStore::new(CONTACT_CAPACITY);

    let script = "1\nAlice\n555-1\na@x.com\n5\n1\nn\n6\n";
    let mut console = console(script);
    contact_menu::run(&mut store, &storage, &mut console, &config).unwrap();

    assert_eq!(store.len(), 1, "declined delete must keep the record");
}

#[test]
fn end_of_input_exits_through_the_save_path() {
    let storage = temp_storage();
    let config = Config::default();
    let mut store = RecordStore::new(CONTACT_CAPACITY);

    let mut console = console("1\nAlice\n555-1\na@x.com\n");
    contact_menu::run(&mut store, &storage, &mut console, &config).unwrap();

    let saved: RecordStore<Contact> = storage.load(CONTACTS_FILE, CONTACT_CAPACITY).unwrap();
    assert_eq!(saved.len(), 1);
}
