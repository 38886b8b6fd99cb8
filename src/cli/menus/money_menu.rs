use std::io::BufRead;

use crate::cli::{io::Console, output, table::Table};
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::{Summary, Transaction, TransactionKind};
use crate::errors::StoreError;
use crate::storage::{BinStorage, MONEY_FILE};
use crate::store::RecordStore;

use super::{report, save_on_exit};

/// Menu loop for the money manager. Returns once the user picks the exit
/// choice (or input ends), after attempting a final save.
pub fn run<R: BufRead>(
    store: &mut RecordStore<Transaction>,
    storage: &BinStorage,
    console: &mut Console<R>,
    clock: &dyn Clock,
    config: &Config,
) -> Result<(), StoreError> {
    loop {
        output::section("MONEY MANAGER");
        println!("1. Add Transaction (Income/Expense)");
        println!("2. View All Transactions");
        println!("3. Display Summary");
        println!("4. Save and Exit");

        let Some(line) = console.read_line("Enter your choice: ")? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Err(_) => output::error("Invalid input. Please enter a number."),
            Ok(1) => {
                if let Err(err) = add_transaction(store, console, clock) {
                    report(err);
                }
            }
            Ok(2) => view_transactions(store, config),
            Ok(3) => display_summary(store, config),
            Ok(4) => break,
            Ok(_) => output::error("Invalid choice! Please select a valid option (1-4)."),
        }
    }

    save_on_exit(storage, store, MONEY_FILE);
    Ok(())
}

fn add_transaction<R: BufRead>(
    store: &mut RecordStore<Transaction>,
    console: &mut Console<R>,
    clock: &dyn Clock,
) -> Result<(), StoreError> {
    output::section("Add New Transaction");
    let kind_choice =
        console.prompt_menu_number("Enter transaction type (1 for Income, 2 for Expense): ")?;
    let kind = TransactionKind::from_menu_choice(kind_choice)?;
    let amount = console.prompt_amount("Enter amount: ")?;
    let category = console.required_line("Enter category (e.g. Salary, Groceries, Rent): ")?;
    let description = console.required_line("Enter a brief description: ")?;

    let id = store.add(Transaction::new(
        amount,
        kind,
        &category,
        &description,
        clock.now(),
    ))?;
    output::success(format!("Transaction #{id} added."));
    Ok(())
}

fn view_transactions(store: &RecordStore<Transaction>, config: &Config) {
    if store.is_empty() {
        output::info("No transactions recorded yet.");
        return;
    }

    let mut table = Table::new(&["ID", "Type", "Amount", "Category", "Description", "Date"]);
    for (id, txn) in store.iter() {
        table.push_row(vec![
            id.to_string(),
            txn.kind.label().to_string(),
            format!("{}{:.2}", config.currency_symbol, txn.amount),
            txn.category.clone(),
            txn.description.clone(),
            config.format_timestamp(txn.created_at),
        ]);
    }
    table.print();
}

fn display_summary(store: &RecordStore<Transaction>, config: &Config) {
    if store.is_empty() {
        output::info("No data for summary. Please add a transaction first.");
        return;
    }

    let summary = Summary::of(store);
    let symbol = &config.currency_symbol;
    output::section("Financial Summary");
    println!("Total Income:   {symbol}{:.2}", summary.income);
    println!("Total Expenses: {symbol}{:.2}", summary.expense);
    output::separator();
    println!("Net Balance:    {symbol}{:.2}", summary.net());
}
