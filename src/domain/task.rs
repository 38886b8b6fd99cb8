use chrono::{Duration, NaiveDate};

use super::{bounded_text, Record};
use crate::errors::StoreError;
use crate::store::codec::{put_i64, put_text, put_u32, FieldReader};

pub const TASK_CAPACITY: usize = 500;
pub const TASK_TEXT_MAX: usize = 99;

const TEXT_WIDTH: usize = TASK_TEXT_MAX + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Parses the 1-based menu number (1 = Low, 2 = Medium, 3 = High).
    pub fn from_menu_choice(choice: u32) -> Result<Self, StoreError> {
        match choice {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(StoreError::invalid("priority", other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    fn discriminant(self) -> u32 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    fn from_discriminant(raw: u32) -> Result<Self, StoreError> {
        match raw {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            other => Err(StoreError::CorruptData(format!(
                "unknown task priority {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parses the 1-based menu number (1 = Pending, 2 = In Progress,
    /// 3 = Completed).
    pub fn from_menu_choice(choice: u32) -> Result<Self, StoreError> {
        match choice {
            1 => Ok(Self::Pending),
            2 => Ok(Self::InProgress),
            3 => Ok(Self::Completed),
            other => Err(StoreError::invalid("status", other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    fn discriminant(self) -> u32 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    fn from_discriminant(raw: u32) -> Result<Self, StoreError> {
        match raw {
            0 => Ok(Self::Pending),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            other => Err(StoreError::CorruptData(format!(
                "unknown task status {other}"
            ))),
        }
    }
}

/// One entry in the task manager. Due dates are calendar dates with no
/// time-of-day component.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl Task {
    /// New tasks always start out pending.
    pub fn new(description: &str, priority: TaskPriority, due_date: NaiveDate) -> Self {
        Self {
            description: bounded_text(description, TASK_TEXT_MAX),
            priority,
            status: TaskStatus::Pending,
            due_date,
        }
    }

    /// Parses a `YYYY-MM-DD` due date; anything else aborts the add.
    pub fn parse_due_date(input: &str) -> Result<NaiveDate, StoreError> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| StoreError::invalid("due date", input.trim()))
    }
}

impl Record for Task {
    const ENCODED_LEN: usize = TEXT_WIDTH + 4 + 4 + 8;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_text(buf, &self.description, TEXT_WIDTH);
        put_u32(buf, self.priority.discriminant());
        put_u32(buf, self.status.discriminant());
        // Due dates are stored as days since 1970-01-01.
        put_i64(buf, (self.due_date - NaiveDate::default()).num_days());
    }

    fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        let mut reader = FieldReader::new(bytes);
        let description = reader.read_text(TEXT_WIDTH)?;
        let priority = TaskPriority::from_discriminant(reader.read_u32()?)?;
        let status = TaskStatus::from_discriminant(reader.read_u32()?)?;
        let days = reader.read_i64()?;
        reader.finish()?;

        let due_date = Duration::try_days(days)
            .and_then(|days| NaiveDate::default().checked_add_signed(days))
            .ok_or_else(|| StoreError::CorruptData(format!("due date {days} is out of range")))?;
        Ok(Self {
            description,
            priority,
            status,
            due_date,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.description]
    }
}
