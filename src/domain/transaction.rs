use chrono::{DateTime, Utc};

use super::{bounded_text, Record};
use crate::errors::StoreError;
use crate::store::codec::{put_f64, put_i64, put_text, put_u32, FieldReader};
use crate::store::RecordStore;

pub const TRANSACTION_CAPACITY: usize = 500;
pub const TRANSACTION_TEXT_MAX: usize = 99;

const TEXT_WIDTH: usize = TRANSACTION_TEXT_MAX + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parses the 1-based menu number (1 = Income, 2 = Expense).
    pub fn from_menu_choice(choice: u32) -> Result<Self, StoreError> {
        match choice {
            1 => Ok(Self::Income),
            2 => Ok(Self::Expense),
            other => Err(StoreError::invalid("transaction type", other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    fn discriminant(self) -> u32 {
        match self {
            Self::Income => 0,
            Self::Expense => 1,
        }
    }

    fn from_discriminant(raw: u32) -> Result<Self, StoreError> {
        match raw {
            0 => Ok(Self::Income),
            1 => Ok(Self::Expense),
            other => Err(StoreError::CorruptData(format!(
                "unknown transaction kind {other}"
            ))),
        }
    }
}

/// One income or expense entry in the money manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a transaction with bounded text fields and a timestamp
    /// normalized to whole seconds, matching the on-disk precision.
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        category: &str,
        description: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            kind,
            category: bounded_text(category, TRANSACTION_TEXT_MAX),
            description: bounded_text(description, TRANSACTION_TEXT_MAX),
            created_at: DateTime::from_timestamp(created_at.timestamp(), 0)
                .unwrap_or(created_at),
        }
    }
}

impl Record for Transaction {
    const ENCODED_LEN: usize = 8 + 4 + TEXT_WIDTH + TEXT_WIDTH + 8;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_f64(buf, self.amount);
        put_u32(buf, self.kind.discriminant());
        put_text(buf, &self.category, TEXT_WIDTH);
        put_text(buf, &self.description, TEXT_WIDTH);
        put_i64(buf, self.created_at.timestamp());
    }

    fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        let mut reader = FieldReader::new(bytes);
        let amount = reader.read_f64()?;
        let kind = TransactionKind::from_discriminant(reader.read_u32()?)?;
        let category = reader.read_text(TEXT_WIDTH)?;
        let description = reader.read_text(TEXT_WIDTH)?;
        let seconds = reader.read_i64()?;
        reader.finish()?;

        let created_at = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            StoreError::CorruptData(format!("timestamp {seconds} is out of range"))
        })?;
        Ok(Self {
            amount,
            kind,
            category,
            description,
            created_at,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.category, &self.description]
    }
}

/// Income/expense totals produced by a single pass over a store.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
}

impl Summary {
    pub fn of(store: &RecordStore<Transaction>) -> Self {
        store.summarize(Self::default(), |mut acc, txn| {
            match txn.kind {
                TransactionKind::Income => acc.income += txn.amount,
                TransactionKind::Expense => acc.expense += txn.amount,
            }
            acc
        })
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}
