use std::io::BufRead;

use crate::cli::{io::Console, output, table::Table};
use crate::config::Config;
use crate::domain::{Contact, ContactUpdate};
use crate::errors::StoreError;
use crate::storage::{BinStorage, CONTACTS_FILE};
use crate::store::{RecordId, RecordStore};

use super::{report, save_on_exit};

/// Menu loop for the contact book.
pub fn run<R: BufRead>(
    store: &mut RecordStore<Contact>,
    storage: &BinStorage,
    console: &mut Console<R>,
    config: &Config,
) -> Result<(), StoreError> {
    loop {
        output::section("CONTACT BOOK");
        println!("1. Add Contact");
        println!("2. View All Contacts");
        println!("3. Search Contact");
        println!("4. Update Contact");
        println!("5. Delete Contact");
        println!("6. Save and Exit");

        let Some(line) = console.read_line("Enter your choice: ")? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Err(_) => output::error("Invalid input. Please enter a number."),
            Ok(1) => {
                if let Err(err) = add_contact(store, console) {
                    report(err);
                }
            }
            Ok(2) => view_contacts(store),
            Ok(3) => {
                if let Err(err) = search_contacts(store, console) {
                    report(err);
                }
            }
            Ok(4) => {
                if let Err(err) = update_contact(store, console) {
                    report(err);
                }
            }
            Ok(5) => {
                if let Err(err) = delete_contact(store, console, config) {
                    report(err);
                }
            }
            Ok(6) => break,
            Ok(_) => output::error("Invalid choice! Please select a valid option (1-6)."),
        }
    }

    save_on_exit(storage, store, CONTACTS_FILE);
    Ok(())
}

fn add_contact<R: BufRead>(
    store: &mut RecordStore<Contact>,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    output::section("Add New Contact");
    let name = console.required_line("Enter Name: ")?;
    let phone = console.required_line("Enter Phone Number: ")?;
    let email = console.required_line("Enter Email: ")?;

    let id = store.add(Contact::new(&name, &phone, &email))?;
    output::success(format!("Contact #{id} added."));
    Ok(())
}

/// Alphabetical view. The sort happens on a copy; the store keeps its
/// insertion order so ids stay valid for update/delete.
fn view_contacts(store: &RecordStore<Contact>) {
    if store.is_empty() {
        output::info("No contacts to display.");
        return;
    }

    output::section("All Contacts (Sorted by Name)");
    let mut table = Table::new(&["Name", "Phone Number", "Email"]);
    for contact in store.sorted_view(|c| c.name.clone()) {
        table.push_row(vec![contact.name, contact.phone, contact.email]);
    }
    table.print();
}

fn search_contacts<R: BufRead>(
    store: &RecordStore<Contact>,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    if store.is_empty() {
        output::info("No contacts to search.");
        return Ok(());
    }

    let query = console.required_line("Enter search term (name, phone, or email): ")?;
    let matches = store.search(&query);
    if matches.is_empty() {
        output::info("No contacts found matching your search term.");
        return Ok(());
    }

    output::section("Search Results");
    let mut table = Table::new(&["ID", "Name", "Phone Number", "Email"]);
    for (id, contact) in &matches {
        table.push_row(vec![
            id.to_string(),
            contact.name.clone(),
            contact.phone.clone(),
            contact.email.clone(),
        ]);
    }
    table.print();
    output::info(format!("Found {} matching contact(s).", matches.len()));
    Ok(())
}

fn update_contact<R: BufRead>(
    store: &mut RecordStore<Contact>,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    let Some(id) = select_contact(store, console, "update")? else {
        return Ok(());
    };
    let current = store.get(id)?.clone();

    println!("Enter new details for contact #{id} (leave blank to keep current value):");
    println!("Current Name: {}", current.name);
    let name = console.prompt_optional("New Name: ")?;
    println!("Current Phone: {}", current.phone);
    let phone = console.prompt_optional("New Phone: ")?;
    println!("Current Email: {}", current.email);
    let email = console.prompt_optional("New Email: ")?;

    let update = ContactUpdate { name, phone, email };
    store.update(id, |contact| update.apply(contact))?;
    output::success("Contact updated.");
    Ok(())
}

fn delete_contact<R: BufRead>(
    store: &mut RecordStore<Contact>,
    console: &mut Console<R>,
    config: &Config,
) -> Result<(), StoreError> {
    let Some(id) = select_contact(store, console, "delete")? else {
        return Ok(());
    };
    let name = store.get(id)?.name.clone();

    if config.confirm_deletes {
        let prompt = format!("Are you sure you want to delete '{name}'? (y/n): ");
        if !console.confirm(&prompt)? {
            output::info("Deletion cancelled.");
            return Ok(());
        }
    }

    store.delete(id)?;
    output::success(format!("Contact '{name}' deleted."));
    Ok(())
}

/// Shows the unsorted selection list and prompts for an id. `None` means
/// there was nothing to select.
fn select_contact<R: BufRead>(
    store: &RecordStore<Contact>,
    console: &mut Console<R>,
    action: &str,
) -> Result<Option<RecordId>, StoreError> {
    if store.is_empty() {
        output::info(format!("No contacts to {action}."));
        return Ok(None);
    }

    output::section("Select a Contact");
    let mut table = Table::new(&["ID", "Name", "Phone Number", "Email"]);
    for (id, contact) in store.iter() {
        table.push_row(vec![
            id.to_string(),
            contact.name.clone(),
            contact.phone.clone(),
            contact.email.clone(),
        ]);
    }
    table.print();

    let prompt = format!("Enter the ID of the contact to {action}: ");
    let id = console.prompt_menu_number(&prompt)? as usize;
    store.get(id)?;
    Ok(Some(id))
}
